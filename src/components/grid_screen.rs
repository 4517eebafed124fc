use yew::prelude::*;

use crate::hooks::use_grid::use_grid_items;
use crate::hooks::use_route::Route;
use crate::models::grid::GridItem;

#[derive(Properties, PartialEq)]
pub struct GridScreenProps {
    pub on_navigate: Callback<Route>,
}

/// Decorative staggered grid: the generated tiles flow into adaptive columns,
/// tallest to shortest left to right as the browser packs them.
#[function_component(GridScreen)]
pub fn grid_screen(props: &GridScreenProps) -> Html {
    let items = use_grid_items();

    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::Main))
    };

    html! {
        <div class="screen grid-screen">
            <button class="nav-button" {onclick}>
                {"Back to liked music"}
            </button>

            <div class="staggered-grid">
                {
                    items.iter().map(|item| html! {
                        <ColorBox item={*item} />
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ColorBoxProps {
    pub item: GridItem,
}

/// One rounded solid-color rectangle of the grid.
#[function_component(ColorBox)]
pub fn color_box(props: &ColorBoxProps) -> Html {
    let style = format!(
        "height: {}px; background: {};",
        props.item.height(),
        props.item.css_color()
    );

    html! {
        <div class="color-box" {style}></div>
    }
}
