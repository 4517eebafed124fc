use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::models::music::Music;

#[derive(Properties, PartialEq)]
pub struct MusicCardProps {
    pub music: Music,
}

/// Fixed-height tile for one track: artwork fills the width and is cropped to
/// the tile, the title sits on a translucent strip along the bottom edge.
#[function_component(MusicCard)]
pub fn music_card(props: &MusicCardProps) -> Html {
    let image_failed = use_state(|| false);

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |e: Event| {
            let target: HtmlImageElement = e.target_unchecked_into();
            web_sys::console::warn_1(&format!("Failed to load artwork: {}", target.src()).into());
            image_failed.set(true);
        })
    };

    let music = &props.music;

    html! {
        <li class="music-card">
            if music.has_image() && !*image_failed {
                <img
                    class="music-card-image"
                    src={music.image.clone()}
                    alt={music.display_title().to_string()}
                    {onerror}
                />
            } else {
                <div class="music-card-image placeholder"></div>
            }
            <span class="music-card-title">{music.display_title()}</span>
        </li>
    }
}
