use yew::prelude::*;

use crate::components::anchor::SectionLink;
use crate::content::SERVICES;

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id="services" class="services">
            <div class="section-header">
                <h2>{"Our Services"}</h2>
                <p>{"We offer a comprehensive range of trucking and logistics solutions to meet your specific needs."}</p>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card" key={service.title}>
                        <div class="service-icon">{service.icon}</div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <SectionLink section="quote" class="service-link">
                            {"Request a Quote →"}
                        </SectionLink>
                    </div>
                }) }
            </div>
        </section>
    }
}
