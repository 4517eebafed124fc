use std::rc::Rc;
use yew::prelude::*;

use crate::models::music::Playlist;
use crate::services::api::fetch_liked_music;
use wasm_bindgen_futures::spawn_local;

/// Lifecycle of the liked-music fetch. Exactly one variant is active at a
/// time; the hook below is the only writer, the component tree only reads.
#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Empty,
    Loading,
    Success(Rc<Playlist>),
    Failure(String),
}

impl DataState {
    /// Returns true if the fetch is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the playlist if the fetch succeeded
    pub fn data(&self) -> Option<&Rc<Playlist>> {
        match self {
            DataState::Success(playlist) => Some(playlist),
            _ => None,
        }
    }

    /// Total dispatch over the fetch lifecycle: exactly one handler runs per
    /// call, and the same state always picks the same handler. `otherwise`
    /// covers `Empty` and is where any state the three specific handlers do
    /// not claim must land.
    pub fn select<R>(
        &self,
        on_loading: impl FnOnce() -> R,
        on_success: impl FnOnce(&Rc<Playlist>) -> R,
        on_failure: impl FnOnce(&str) -> R,
        otherwise: impl FnOnce() -> R,
    ) -> R {
        match self {
            DataState::Loading => on_loading(),
            DataState::Success(playlist) => on_success(playlist),
            DataState::Failure(message) => on_failure(message),
            DataState::Empty => otherwise(),
        }
    }
}

/// View-model hook for the main screen. Starts at `Empty`, flips to `Loading`
/// when the fetch effect runs, then settles exactly once on `Success` or
/// `Failure`. No retry and no refresh; a failure stays on screen.
#[hook]
pub fn use_music() -> UseStateHandle<DataState> {
    let state = use_state(|| DataState::Empty);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            state.set(DataState::Loading);

            spawn_local(async move {
                match fetch_liked_music().await {
                    Ok(playlist) => state.set(DataState::Success(Rc::new(playlist))),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Fetch failed: {e}").into());
                        state.set(DataState::Failure(e.to_string()));
                    }
                }
            });

            || () // Cleanup
        });
    }

    state
}
