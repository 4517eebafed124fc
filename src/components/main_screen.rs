use std::rc::Rc;
use yew::prelude::*;

use crate::components::music_list::MusicList;
use crate::hooks::use_music::use_music;
use crate::hooks::use_route::Route;
use crate::models::music::Playlist;

#[derive(Properties, PartialEq)]
pub struct MainScreenProps {
    pub on_navigate: Callback<Route>,
}

/// Liked-music screen. Renders exactly one view for the current fetch state:
/// a spinner while loading, the track list on success, the failure message
/// verbatim, or a generic error for anything else.
#[function_component(MainScreen)]
pub fn main_screen(props: &MainScreenProps) -> Html {
    let state = use_music();

    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::StaggeredGrid))
    };

    html! {
        <div class="screen main-screen">
            <button class="nav-button" {onclick}>
                {"View staggered grid"}
            </button>

            {
                state.select(
                    || html! {
                        <div class="status loading">
                            <div class="spinner"></div>
                        </div>
                    },
                    |playlist: &Rc<Playlist>| html! {
                        <MusicList playlist={playlist.clone()} />
                    },
                    |message: &str| html! {
                        <div class="status error">
                            <p class="error-message">{message}</p>
                        </div>
                    },
                    || html! {
                        <div class="status error">
                            <p class="error-message">{"Error fetching data"}</p>
                        </div>
                    },
                )
            }
        </div>
    }
}
