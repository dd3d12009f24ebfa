use yew::prelude::*;

use crate::components::{
    fleet::FleetSection, hero::Hero, partners::PartnersSection, quote_form::QuoteForm,
    services::ServicesSection, testimonials::TestimonialsSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Start at the top on first render; the browser may restore an old offset.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing-page">
            <Hero />
            <ServicesSection />
            <PartnersSection />
            <FleetSection />
            <TestimonialsSection />
            <QuoteForm />
        </main>
    }
}
