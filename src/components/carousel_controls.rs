use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Properties, PartialEq)]
pub struct CarouselArrowProps {
    pub direction: Direction,
    /// Screen-reader label, e.g. "Previous testimonial".
    pub label: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(CarouselArrow)]
pub fn carousel_arrow(props: &CarouselArrowProps) -> Html {
    let (class, glyph) = match props.direction {
        Direction::Prev => ("carousel-arrow prev", "‹"),
        Direction::Next => ("carousel-arrow next", "›"),
    };

    html! {
        <button type="button" {class} aria-label={props.label.clone()} onclick={props.onclick.clone()}>
            {glyph}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselIndicatorsProps {
    pub count: usize,
    pub active: usize,
    /// Noun used in each dot's label: "Go to {noun} 3".
    pub noun: &'static str,
    pub on_select: Callback<usize>,
}

#[function_component(CarouselIndicators)]
pub fn carousel_indicators(props: &CarouselIndicatorsProps) -> Html {
    html! {
        <div class="carousel-indicators">
            { for (0..props.count).map(|index| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));
                html! {
                    <button
                        type="button"
                        key={index}
                        class={classes!("carousel-dot", (index == props.active).then(|| "active"))}
                        aria-label={format!("Go to {} {}", props.noun, index + 1)}
                        aria-current={(index == props.active).then(|| "true")}
                        {onclick}
                    />
                }
            }) }
        </div>
    }
}
