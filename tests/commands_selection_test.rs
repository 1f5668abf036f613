//! Tests for the selection and preview commands
//!
//! These exercise the process-global configurator, so all state mutation
//! happens inside a single flow test; the remaining tests only read state
//! or fail before touching it.

#[cfg(test)]
mod commands_selection_tests {
    use viewfinder::commands::devices::{select_audio_device, select_video_device};
    use viewfinder::commands::preview::{
        get_preview_constraints, get_selection_state, set_mirrored,
    };
    use viewfinder::commands::resolution::{
        get_resolution_catalog, select_resolution_preset, set_custom_height,
        set_custom_resolution, set_custom_width,
    };
    use viewfinder::types::{Dimension, ResolutionChoice};
    use viewfinder::PresetCatalog;

    #[tokio::test]
    async fn test_selection_flow() {
        select_video_device("v1".to_string()).await.unwrap();
        select_audio_device("a1".to_string()).await.unwrap();
        set_mirrored(true).await.unwrap();

        let state = select_resolution_preset("1280x720 (HD)".to_string())
            .await
            .unwrap();
        assert_eq!(state.video_device_id, "v1");
        assert_eq!(state.audio_device_id, "a1");
        assert!(state.mirrored);
        assert_eq!(state.resolution.width(), Dimension::Pixels(1280));
        assert_eq!(state.resolution.height(), Dimension::Pixels(720));

        let constraints = get_preview_constraints().await.unwrap();
        assert_eq!(constraints.video.device_id, "v1");
        assert_eq!(constraints.video.width, Dimension::Pixels(1280));
        assert_eq!(constraints.audio.device_id, "a1");
        assert!(constraints.mirrored);

        // Enter custom mode: dimensions carry over, one field edited at a time
        let state = set_custom_resolution(true).await.unwrap();
        assert_eq!(
            state.resolution,
            ResolutionChoice::Custom {
                width: Dimension::Pixels(1280),
                height: Dimension::Pixels(720),
            }
        );

        let state = set_custom_width("800".to_string()).await.unwrap();
        assert_eq!(state.resolution.width(), Dimension::Pixels(800));
        assert_eq!(state.resolution.height(), Dimension::Pixels(720));

        let state = set_custom_height("not-a-number".to_string()).await.unwrap();
        assert_eq!(
            state.resolution.height(),
            Dimension::Invalid("not-a-number".to_string())
        );

        // Invalid text flows through the projection untouched
        let constraints = get_preview_constraints().await.unwrap();
        assert_eq!(constraints.video.width, Dimension::Pixels(800));
        assert_eq!(
            constraints.video.height,
            Dimension::Invalid("not-a-number".to_string())
        );

        // Leaving custom mode resets to the catalog's first preset
        let state = set_custom_resolution(false).await.unwrap();
        assert!(!state.resolution.is_custom());
        assert_eq!(state.resolution.width(), Dimension::Auto);
        assert_eq!(state.resolution.height(), Dimension::Auto);

        // Device and mirror selections survived the mode churn
        let state = get_selection_state().await.unwrap();
        assert_eq!(state.video_device_id, "v1");
        assert_eq!(state.audio_device_id, "a1");
        assert!(state.mirrored);
    }

    #[tokio::test]
    async fn test_unknown_preset_label_is_rejected() {
        let result = select_resolution_preset("640x480 (VGA)".to_string()).await;
        let error = result.unwrap_err();
        assert!(error.contains("640x480 (VGA)"));
        assert!(error.contains("Failed to select preset"));
    }

    #[tokio::test]
    async fn test_catalog_listing_matches_builtin() {
        // Nothing in this binary installs a custom catalog
        let catalog = get_resolution_catalog().await.unwrap();
        assert_eq!(catalog, PresetCatalog::default().presets().to_vec());
    }

    #[tokio::test]
    async fn test_constraints_always_available() {
        let constraints = get_preview_constraints().await.unwrap();
        // Values race with the flow test; the projection itself must
        // always be well-formed and serializable.
        let json = serde_json::to_value(&constraints).unwrap();
        assert!(json.get("video").is_some());
        assert!(json.get("audio").is_some());
        assert!(json.get("mirrored").is_some());
    }
}
