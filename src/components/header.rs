use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor::SectionLink;
use crate::config;
use crate::content::NAV_ITEMS;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = scroll_y > config::SCROLLED_THRESHOLD_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("site-header", scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <SectionLink section="hero" class="brand" on_navigate={close_menu.clone()}>
                    <span class="brand-icon">{"🚛"}</span>
                    <span class="brand-name">{config::COMPANY_NAME}</span>
                </SectionLink>

                <button class="burger-menu" aria-label="Toggle navigation" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <SectionLink section={item.section} class="nav-link" on_navigate={close_menu.clone()}>
                            {item.label}
                        </SectionLink>
                    }) }
                    <SectionLink section="quote" class="nav-cta" on_navigate={close_menu}>
                        {"Get a Quote"}
                    </SectionLink>
                </nav>
            </div>
        </header>
    }
}
