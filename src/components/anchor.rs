use yew::prelude::*;

/// Scrolls the page section with the given id into view. Smooth scrolling
/// comes from the `scroll-behavior` rule in the stylesheet.
pub fn scroll_to_section(section: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section));
    match element {
        Some(element) => element.scroll_into_view(),
        None => log::warn!("no section with id #{}", section),
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    pub section: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that keeps the `#section` href for no-js and middle clicks.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let section = props.section;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(section);
            on_navigate.emit(());
        })
    };

    html! {
        <a href={format!("#{}", props.section)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
