use yew::prelude::*;

use liked_music::components::grid_screen::GridScreen;
use liked_music::components::main_screen::MainScreen;
use liked_music::hooks::use_route::{Route, use_route};

#[function_component(App)]
fn app() -> Html {
    let nav = use_route();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Liked Music in 2023"}</h1>
            </header>

            <main class="app-main">
                {
                    match nav.route {
                        Route::Main => html! {
                            <MainScreen on_navigate={nav.navigate_to.clone()} />
                        },
                        Route::StaggeredGrid => html! {
                            <GridScreen on_navigate={nav.navigate_to.clone()} />
                        },
                    }
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
