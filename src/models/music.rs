use serde::Deserialize;

/// One liked track as served by the backing store. `Title` and `Image` are
/// the upstream field names.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Music {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Image", default)]
    pub image: String,
}

impl Music {
    /// Title rendered on the card. The upstream store guarantees a title for
    /// every liked track, so a missing one is a data bug that must surface
    /// loudly rather than draw a blank strip.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .expect("music entry is missing a title")
    }

    /// Whether there is an artwork URL worth handing to the image loader.
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

/// Ordered collection of liked tracks for one year.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Playlist {
    tracks: Vec<Music>,
}

impl Playlist {
    pub fn new(tracks: Vec<Music>) -> Self {
        Self { tracks }
    }

    pub fn tracks(&self) -> &[Music] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
