use yew::prelude::*;

use crate::components::anchor::SectionLink;
use crate::content::FLEET;

#[function_component(FleetSection)]
pub fn fleet_section() -> Html {
    let selected = use_state(|| 0usize);

    let Some(truck) = FLEET.get(*selected) else {
        return html! {};
    };

    html! {
        <section id="fleet" class="fleet">
            <div class="section-header">
                <h2>{"Our Fleet"}</h2>
                <p>{"We maintain a modern fleet of vehicles to handle various types of freight and shipping requirements."}</p>
            </div>

            <div class="fleet-tabs" role="tablist">
                { for FLEET.iter().enumerate().map(|(index, item)| {
                    let selected = selected.clone();
                    let is_active = *selected == index;
                    let onclick = Callback::from(move |_: MouseEvent| selected.set(index));
                    html! {
                        <button
                            type="button"
                            role="tab"
                            key={item.id}
                            class={classes!("fleet-tab", is_active.then(|| "active"))}
                            aria-selected={if is_active { "true" } else { "false" }}
                            {onclick}
                        >
                            {item.title}
                        </button>
                    }
                }) }
            </div>

            <div class="fleet-panel" role="tabpanel" key={truck.id}>
                <div class="fleet-image">
                    <img src={truck.image} alt={truck.title} loading="lazy" />
                </div>
                <div class="fleet-details">
                    <h3>{truck.title}</h3>
                    <p>{truck.description}</p>
                    <ul class="feature-list">
                        { for truck.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                    </ul>
                    <SectionLink section="quote" class="fleet-cta">
                        {"Request This Vehicle"}
                    </SectionLink>
                </div>
            </div>
        </section>
    }
}
