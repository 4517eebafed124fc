use std::rc::Rc;
use yew::prelude::*;

use crate::components::music_card::MusicCard;
use crate::models::music::Playlist;

#[derive(Properties, PartialEq)]
pub struct MusicListProps {
    pub playlist: Rc<Playlist>,
}

/// Vertically scrolling list of liked tracks, one card per entry. An empty
/// playlist renders an empty list, not a message.
#[function_component(MusicList)]
pub fn music_list(props: &MusicListProps) -> Html {
    html! {
        <ul class="music-list">
            {
                props.playlist.tracks().iter().map(|music| html! {
                    <MusicCard music={music.clone()} />
                }).collect::<Html>()
            }
        </ul>
    }
}
