use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::quote::controller::QuoteController;
use crate::quote::lifecycle::QuoteStatus;
use crate::quote::model::{DraftField, QuoteDraft, QuoteError, QuoteRequest, ServiceType};
use crate::quote::submitter::SimulatedSubmitter;
use crate::timer::BrowserScheduler;

type FormController = QuoteController<BrowserScheduler, SimulatedSubmitter<BrowserScheduler>>;

pub enum DraftEdit {
    Text(DraftField, String),
    Service(String),
    PickupDate(String),
}

impl Reducible for QuoteDraft {
    type Action = DraftEdit;

    fn reduce(self: Rc<Self>, action: DraftEdit) -> Rc<Self> {
        let next = match action {
            DraftEdit::Text(field, value) => self.with_text(field, value),
            DraftEdit::Service(value) => self.with_service(&value),
            DraftEdit::PickupDate(value) => self.with_pickup_date(&value),
        };
        Rc::new(next)
    }
}

fn log_request(request: &QuoteRequest) {
    if !cfg!(debug_assertions) {
        return;
    }
    match serde_json::to_string_pretty(request) {
        Ok(payload) => gloo_console::log!("quote request:", payload),
        Err(e) => log::warn!("could not serialize quote request: {}", e),
    }
}

fn text_field(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: &str,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="form-group">
            <label for={id}>{label}</label>
            <input
                {id}
                type={input_type}
                {placeholder}
                value={value.to_string()}
                required=true
                {oninput}
            />
        </div>
    }
}

#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
    let draft = use_reducer(QuoteDraft::default);
    let status = use_state(QuoteStatus::default);
    let validation = use_state(|| None::<QuoteError>);

    let controller = {
        let set_status = status.setter();
        use_memo(
            move |_| {
                let on_change = Callback::from(move |next: QuoteStatus| set_status.set(next));
                FormController::new(
                    BrowserScheduler,
                    SimulatedSubmitter::new(BrowserScheduler, config::QUOTE_SUBMIT_DELAY_MS),
                    config::QUOTE_SUCCESS_RESET_MS,
                    on_change,
                )
            },
            (),
        )
    };

    {
        let controller = controller.clone();
        use_unmount(move || controller.shutdown());
    }

    let onsubmit = {
        let draft = draft.clone();
        let validation = validation.clone();
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match draft.to_request() {
                Ok(request) => request,
                Err(err) => {
                    log::debug!("quote form incomplete: {}", err);
                    validation.set(Some(err));
                    return;
                }
            };
            validation.set(None);
            log_request(&request);
            match controller.submit(request) {
                Ok(work) => spawn_local(work),
                Err(err) => log::warn!("quote submit ignored: {}", err),
            }
        })
    };

    let on_text = |field: DraftField| {
        let draft = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(DraftEdit::Text(field, input.value()));
        })
    };

    let on_service = {
        let draft = draft.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.dispatch(DraftEdit::Service(select.value()));
        })
    };

    let on_pickup_date = {
        let draft = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(DraftEdit::PickupDate(input.value()));
        })
    };

    let on_details = {
        let draft = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            draft.dispatch(DraftEdit::Text(DraftField::Details, area.value()));
        })
    };

    let pickup_value = draft
        .pickup_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    html! {
        <section id="quote" class="quote">
            <div class="section-header">
                <h2>{"Request a Quote"}</h2>
                <p>{"Fill out the form below to get a custom quote for your shipping needs."}</p>
            </div>

            <div class="quote-card">
                <div class="quote-card-header">
                    <h3>{"Shipping Details"}</h3>
                    <p>{"Provide information about your shipment for an accurate quote."}</p>
                </div>

                <form class="quote-form" {onsubmit}>
                    <div class="form-grid">
                        { text_field("name", "Full Name", "text", "John Doe", &draft.full_name, on_text(DraftField::FullName)) }
                        { text_field("company", "Company Name", "text", "Acme Inc.", &draft.company, on_text(DraftField::Company)) }
                        { text_field("email", "Email", "email", "john@example.com", &draft.email, on_text(DraftField::Email)) }
                        { text_field("phone", "Phone Number", "tel", "(555) 123-4567", &draft.phone, on_text(DraftField::Phone)) }
                    </div>

                    <div class="form-group">
                        <label for="service-type">{"Service Type"}</label>
                        <select id="service-type" required=true onchange={on_service}>
                            <option value="" disabled=true selected={draft.service_type.is_none()}>
                                {"Select service type"}
                            </option>
                            { for ServiceType::ALL.into_iter().map(|service| html! {
                                <option value={service.value()} selected={draft.service_type == Some(service)}>
                                    {service.label()}
                                </option>
                            }) }
                        </select>
                    </div>

                    <div class="form-grid">
                        { text_field("origin", "Origin Location", "text", "City, State", &draft.origin, on_text(DraftField::Origin)) }
                        { text_field("destination", "Destination", "text", "City, State", &draft.destination, on_text(DraftField::Destination)) }
                    </div>

                    <div class="form-group">
                        <label for="pickup-date">{"Pickup Date"}</label>
                        <input id="pickup-date" type="date" value={pickup_value} oninput={on_pickup_date} />
                    </div>

                    <div class="form-group">
                        <label for="details">{"Additional Details"}</label>
                        <textarea
                            id="details"
                            rows="4"
                            placeholder="Please provide any additional information about your shipment (weight, dimensions, special requirements, etc.)"
                            value={draft.details.clone()}
                            oninput={on_details}
                        />
                    </div>

                    if let Some(err) = &*validation {
                        <div class="form-error" role="alert">{err.to_string()}</div>
                    }

                    <button type="submit" class="quote-submit" disabled={status.is_submitting()}>
                        {status.button_label()}
                    </button>
                </form>
            </div>

            {
                match &*status {
                    QuoteStatus::Success(receipt) => html! {
                        <div class="quote-success" role="status">
                            <span class="quote-success-icon">{"✓"}</span>
                            <div>
                                <p>{"Thank you for your request! We'll get back to you with a quote shortly."}</p>
                                <p class="quote-summary">{receipt.summary()}</p>
                            </div>
                        </div>
                    },
                    QuoteStatus::Failed(message) => html! {
                        <div class="form-error" role="alert">{message.clone()}</div>
                    },
                    QuoteStatus::Idle | QuoteStatus::Submitting => html! {},
                }
            }
        </section>
    }
}
