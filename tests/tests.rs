#[cfg(test)]
mod tests {
    use liked_music::config::Config;
    use liked_music::hooks::use_music::DataState;
    use liked_music::models::{
        error::AppError,
        grid::GridItem,
        music::{Music, Playlist},
    };
    use std::rc::Rc;

    // Helper function to create test tracks
    fn create_test_tracks() -> Vec<Music> {
        vec![
            Music {
                title: Some("Song A".to_string()),
                image: "http://x/a.png".to_string(),
            },
            Music {
                title: Some("Song B".to_string()),
                image: String::new(),
            },
        ]
    }

    // Helper that reduces a select call to a comparable rendering decision
    fn select_label(state: &DataState) -> String {
        state.select(
            || "spinner".to_string(),
            |playlist| format!("list({})", playlist.len()),
            |message| format!("failure({message})"),
            || "generic-error".to_string(),
        )
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_not_found_display() {
        let error = AppError::NotFound("liked/2023".to_string());
        assert_eq!(error.to_string(), "Not found: liked/2023");
    }

    // ===== Music Model Tests =====

    #[test]
    fn test_music_deserialization() {
        let json = r#"{
            "Title": "Song A",
            "Image": "http://x/a.png"
        }"#;

        let music: Music = serde_json::from_str(json).unwrap();
        assert_eq!(music.title.as_deref(), Some("Song A"));
        assert_eq!(music.image, "http://x/a.png");
        assert!(music.has_image());
    }

    #[test]
    fn test_music_deserialization_missing_image() {
        let json = r#"{"Title": "Song A"}"#;

        let music: Music = serde_json::from_str(json).unwrap();
        assert_eq!(music.image, "");
        assert!(!music.has_image());
    }

    #[test]
    fn test_music_deserialization_missing_title() {
        // The store can hand back a track without a title; the failure is
        // deferred to render time, not deserialization time.
        let json = r#"{"Image": "http://x/a.png"}"#;

        let music: Music = serde_json::from_str(json).unwrap();
        assert!(music.title.is_none());
    }

    #[test]
    fn test_display_title() {
        let music = &create_test_tracks()[0];
        assert_eq!(music.display_title(), "Song A");
    }

    #[test]
    #[should_panic(expected = "missing a title")]
    fn test_display_title_panics_without_title() {
        let music = Music {
            title: None,
            image: "http://x/a.png".to_string(),
        };
        let _ = music.display_title();
    }

    // ===== Playlist Tests =====

    #[test]
    fn test_playlist_preserves_order() {
        let playlist = Playlist::new(create_test_tracks());

        assert_eq!(playlist.len(), 2);
        assert!(!playlist.is_empty());
        assert_eq!(playlist.tracks()[0].display_title(), "Song A");
        assert_eq!(playlist.tracks()[1].display_title(), "Song B");
    }

    #[test]
    fn test_empty_playlist() {
        let playlist = Playlist::new(vec![]);
        assert_eq!(playlist.len(), 0);
        assert!(playlist.is_empty());
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_data_extraction() {
        let playlist = Rc::new(Playlist::new(create_test_tracks()));
        let success = DataState::Success(playlist.clone());

        assert!(success.data().is_some());
        assert_eq!(success.data().unwrap(), &playlist);

        assert!(DataState::Empty.data().is_none());
        assert!(DataState::Loading.data().is_none());
        assert!(DataState::Failure("boom".to_string()).data().is_none());
    }

    #[test]
    fn test_data_state_is_loading() {
        assert!(DataState::Loading.is_loading());
        assert!(!DataState::Empty.is_loading());
    }

    #[test]
    fn test_data_state_equality() {
        assert_eq!(DataState::Loading, DataState::Loading);
        assert_eq!(
            DataState::Failure("Test error".to_string()),
            DataState::Failure("Test error".to_string())
        );

        let state1 = DataState::Success(Rc::new(Playlist::new(create_test_tracks())));
        let state2 = DataState::Success(Rc::new(Playlist::new(create_test_tracks())));
        assert_eq!(state1, state2);
    }

    #[test]
    fn test_select_routes_each_variant_once() {
        assert_eq!(select_label(&DataState::Loading), "spinner");
        assert_eq!(select_label(&DataState::Empty), "generic-error");
        assert_eq!(
            select_label(&DataState::Failure("network down".to_string())),
            "failure(network down)"
        );
        assert_eq!(
            select_label(&DataState::Success(Rc::new(Playlist::new(
                create_test_tracks()
            )))),
            "list(2)"
        );
    }

    #[test]
    fn test_select_empty_success_is_a_list_not_an_error() {
        let state = DataState::Success(Rc::new(Playlist::new(vec![])));
        assert_eq!(select_label(&state), "list(0)");
    }

    #[test]
    fn test_select_single_entry() {
        let state = DataState::Success(Rc::new(Playlist::new(vec![Music {
            title: Some("Song A".to_string()),
            image: "http://x/a.png".to_string(),
        }])));

        let titles = state.select(
            Vec::new,
            |playlist| {
                playlist
                    .tracks()
                    .iter()
                    .map(|m| m.display_title().to_string())
                    .collect()
            },
            |_| Vec::new(),
            Vec::new,
        );

        assert_eq!(titles, vec!["Song A".to_string()]);
    }

    #[test]
    fn test_select_failure_carries_message_verbatim() {
        let state = DataState::Failure("network down".to_string());

        let message = state.select(
            || None,
            |_| None,
            |message| Some(message.to_string()),
            || None,
        );

        assert_eq!(message.as_deref(), Some("network down"));
    }

    #[test]
    fn test_select_is_idempotent() {
        let states = [
            DataState::Empty,
            DataState::Loading,
            DataState::Success(Rc::new(Playlist::new(create_test_tracks()))),
            DataState::Failure("network down".to_string()),
        ];

        for state in &states {
            assert_eq!(select_label(state), select_label(state));
        }
    }

    // ===== Grid Generator Tests =====

    #[test]
    fn test_grid_batch_invariants() {
        let items = GridItem::generate(Config::GRID_ITEM_COUNT);
        assert_eq!(items.len(), 100);

        for item in &items {
            assert!(
                (Config::GRID_MIN_HEIGHT..Config::GRID_MAX_HEIGHT).contains(&item.height()),
                "height {} out of range",
                item.height()
            );
            assert_eq!(item.alpha(), 0xFF, "tile color must be fully opaque");
        }
    }
}
