use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::clipboard::{self, Copied, CopyFeedback, CopyTarget};
use crate::components::anchor::SectionLink;
use crate::config;
use crate::content::{NAV_ITEMS, SERVICES, SOCIAL_LINKS};
use crate::timer::BrowserScheduler;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let copied = use_state(Copied::default);

    let feedback = {
        let set_copied = copied.setter();
        use_memo(
            move |_| {
                let on_change = Callback::from(move |next: Copied| set_copied.set(next));
                CopyFeedback::new(BrowserScheduler, config::COPIED_MARKER_MS, on_change)
            },
            (),
        )
    };

    {
        let feedback = feedback.clone();
        use_unmount(move || feedback.shutdown());
    }

    let copy_button = |target: CopyTarget| {
        let feedback = (*feedback).clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let feedback = feedback.clone();
            spawn_local(async move {
                match clipboard::write_text(target.text()).await {
                    Ok(()) => {
                        log::info!("copied {} to the clipboard", target.text());
                        feedback.mark_copied(target);
                    }
                    Err(err) => log::warn!("copy failed: {}", err),
                }
            });
        });
        html! {
            <button type="button" class="contact-copy" aria-label={target.aria_label()} {onclick}>
                {target.text()}
                if copied.shows(target) {
                    <span class="copied-marker">{"Copied!"}</span>
                }
            </button>
        }
    };

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <div class="brand">
                        <span class="brand-icon">{"🚛"}</span>
                        <span class="brand-name">{config::COMPANY_NAME}</span>
                    </div>
                    <p>{"Reliable freight transportation across the country, backed by experienced drivers and a modern fleet."}</p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a
                                href={link.url}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={format!("Visit our {} page", link.label)}
                            >
                                {link.label}
                            </a>
                        }) }
                    </div>
                </div>

                <div class="footer-column">
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li>
                                <SectionLink section={item.section} class="footer-link">{item.label}</SectionLink>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h3>{"Services"}</h3>
                    <ul>
                        { for SERVICES.iter().take(4).map(|service| html! {
                            <li>
                                <SectionLink section="services" class="footer-link">{service.title}</SectionLink>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h3>{"Contact Us"}</h3>
                    <ul class="contact-list">
                        <li>{ copy_button(CopyTarget::Phone) }</li>
                        <li>{ copy_button(CopyTarget::Email) }</li>
                        <li>
                            <a href={config::maps_url()} target="_blank" rel="noopener noreferrer" aria-label="Open location in Google Maps">
                                {config::CONTACT_ADDRESS}
                            </a>
                        </li>
                    </ul>
                    <SectionLink section="quote" class="footer-cta">{"Request a Quote"}</SectionLink>
                </div>
            </div>

            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", year, config::COMPANY_NAME)}
            </div>
        </footer>
    }
}
