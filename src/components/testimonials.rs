use yew::prelude::*;

use crate::carousel::{use_carousel, CarouselAction, PauseReason};
use crate::components::carousel_controls::{CarouselArrow, CarouselIndicators, Direction};
use crate::config;
use crate::content::TESTIMONIALS;

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let carousel = use_carousel(TESTIMONIALS.len(), config::TESTIMONIAL_INTERVAL_MS);

    let Some(testimonial) = TESTIMONIALS.get(carousel.active_index()) else {
        return html! {};
    };

    let (pointer_enter, pointer_leave) = carousel.hold_callbacks::<MouseEvent>(PauseReason::Pointer);
    let (focus_in, focus_out) = carousel.hold_callbacks::<FocusEvent>(PauseReason::Focus);

    html! {
        <section id="testimonials" class="testimonials">
            <div class="section-header">
                <h2>{"What Our Clients Say"}</h2>
                <p>{"Don't just take our word for it. Here's what our clients have to say about our services."}</p>
            </div>

            <div
                class="carousel testimonial-carousel"
                onmouseenter={pointer_enter}
                onmouseleave={pointer_leave}
                onfocusin={focus_in}
                onfocusout={focus_out}
                aria-live={carousel.state().playback().aria_live()}
            >
                <CarouselArrow
                    direction={Direction::Prev}
                    label="Previous testimonial"
                    onclick={carousel.action::<MouseEvent>(CarouselAction::Prev)}
                />

                // Keyed on the index so the slide-in animation replays.
                <div class="testimonial-slide" key={carousel.active_index()}>
                    <blockquote>{format!("\"{}\"", testimonial.quote)}</blockquote>
                    <div class="testimonial-author">
                        <div class="avatar">{testimonial.initials}</div>
                        <p class="author-name">{testimonial.name}</p>
                        <p class="author-position">{testimonial.position}</p>
                    </div>
                </div>

                <CarouselArrow
                    direction={Direction::Next}
                    label="Next testimonial"
                    onclick={carousel.action::<MouseEvent>(CarouselAction::Next)}
                />

                <CarouselIndicators
                    count={carousel.state().len()}
                    active={carousel.active_index()}
                    noun="testimonial"
                    on_select={carousel.jump_callback()}
                />
            </div>
        </section>
    }
}
