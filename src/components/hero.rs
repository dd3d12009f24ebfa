use yew::prelude::*;

use crate::components::anchor::SectionLink;
use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="hero-background">
                <video autoplay=true muted=true loop=true poster={config::HERO_POSTER_URL}>
                    <source src={config::HERO_VIDEO_URL} type="video/mp4" />
                    {"Your browser does not support the video tag."}
                </video>
            </div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1>{config::COMPANY_NAME}</h1>
                <p class="hero-subtitle">{config::TAGLINE}</p>
                <div class="hero-cta-group">
                    <SectionLink section="quote" class="hero-cta">
                        {"Get a Quote"}
                    </SectionLink>
                    <SectionLink section="services" class="hero-secondary">
                        {"Explore Services"}
                    </SectionLink>
                </div>
            </div>
            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-indicator-dot"></div>
            </div>
        </section>
    }
}
