use yew::prelude::*;

use crate::carousel::{use_carousel, CarouselAction, PauseReason};
use crate::components::carousel_controls::{CarouselArrow, CarouselIndicators, Direction};
use crate::config;
use crate::content::PARTNERS;

/// Looping logo strip: shows a window of consecutive partners starting at the
/// active one and steps one logo per tick.
#[function_component(PartnersSection)]
pub fn partners_section() -> Html {
    let carousel = use_carousel(PARTNERS.len(), config::PARTNER_INTERVAL_MS);

    if carousel.state().is_empty() {
        return html! {};
    }

    let (pointer_enter, pointer_leave) = carousel.hold_callbacks::<MouseEvent>(PauseReason::Pointer);
    let (focus_in, focus_out) = carousel.hold_callbacks::<FocusEvent>(PauseReason::Focus);

    html! {
        <section id="partners" class="partners">
            <div class="section-header">
                <h2>{"Our Partners"}</h2>
                <p>{"We work with leading companies across various industries to provide reliable logistics solutions."}</p>
            </div>

            <div
                class="carousel partners-carousel"
                onmouseenter={pointer_enter}
                onmouseleave={pointer_leave}
                onfocusin={focus_in}
                onfocusout={focus_out}
                aria-live={carousel.state().playback().aria_live()}
            >
                <CarouselArrow
                    direction={Direction::Prev}
                    label="Previous slide"
                    onclick={carousel.action::<MouseEvent>(CarouselAction::Prev)}
                />
                <div class="partners-track">
                    { for carousel.state().window(config::PARTNER_VISIBLE_SLIDES).map(|index| {
                        let partner = &PARTNERS[index];
                        html! {
                            <div class="partner-card" key={partner.id}>
                                <img src={partner.logo} alt={partner.name} loading="lazy" />
                            </div>
                        }
                    }) }
                </div>
                <CarouselArrow
                    direction={Direction::Next}
                    label="Next slide"
                    onclick={carousel.action::<MouseEvent>(CarouselAction::Next)}
                />

                <CarouselIndicators
                    count={carousel.state().len()}
                    active={carousel.active_index()}
                    noun="slide"
                    on_select={carousel.jump_callback()}
                />
            </div>
        </section>
    }
}
