use super::*;

fn base() -> SlideshowConfig {
    SlideshowConfig::new(
        vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()],
        "voice.mp3",
    )
}

fn config_error(cfg: &SlideshowConfig) -> String {
    match cfg.validate() {
        Err(SlideshowError::Configuration(msg)) => msg,
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn defaults_match_service_defaults() {
    let cfg = base();
    assert_eq!(cfg.primary_volume, 1.0);
    assert_eq!(cfg.secondary_volume, 0.3);
    assert_eq!(cfg.image_duration_secs, 3.0);
    assert_eq!(cfg.transition_duration_secs, 1.0);
    assert_eq!(cfg.effect, EffectId::Fade);
    assert_eq!(cfg.fps.get(), 30);
    assert_eq!(cfg.spring_fidelity, SpringFidelity::Reference);
    cfg.validate().unwrap();
}

#[test]
fn minimal_json_fills_defaults() {
    let cfg = SlideshowConfig::from_json_str(
        r#"{ "images": ["one.png"], "primary_audio": "a.mp3", "effect": "slide-up" }"#,
    )
    .unwrap();
    assert_eq!(cfg.images.len(), 1);
    assert_eq!(cfg.effect, EffectId::SlideUp);
    assert_eq!(cfg.canvas, Canvas::default());
    assert!(cfg.secondary_audio.is_none());
    cfg.validate().unwrap();
}

#[test]
fn unknown_effect_in_json_is_configuration_error() {
    let err = SlideshowConfig::from_json_str(
        r#"{ "images": ["one.png"], "primary_audio": "a.mp3", "effect": "spin" }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SlideshowError::Configuration(_)));
    assert!(err.to_string().contains("spin"));
}

#[test]
fn json_effect_accepts_what_parse_accepts() {
    let cfg = SlideshowConfig::from_json_str(
        r#"{ "images": ["one.png"], "primary_audio": "a.mp3", "effect": " Zoom-Out-Fade " }"#,
    )
    .unwrap();
    assert_eq!(cfg.effect, EffectId::parse(" Zoom-Out-Fade ").unwrap());

    let cfg = SlideshowConfig::from_json_str(
        r#"{ "images": ["one.png"], "primary_audio": "a.mp3", "effect": "Fade" }"#,
    )
    .unwrap();
    assert_eq!(cfg.effect, EffectId::Fade);
    assert!(cfg.to_json_pretty().unwrap().contains("\"effect\": \"fade\""));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SlideshowConfig::from_json_str(
        r#"{ "images": ["one.png"], "primary_audio": "a.mp3", "volume": 2 }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SlideshowError::Configuration(_)));
}

#[test]
fn image_count_bounds() {
    let mut cfg = base();
    cfg.images.clear();
    assert!(config_error(&cfg).contains("between 1 and 5 images"));

    cfg.images = (0..6).map(|i| format!("{i}.jpg")).collect();
    assert!(config_error(&cfg).contains("got 6"));

    cfg.images.truncate(5);
    cfg.validate().unwrap();
}

#[test]
fn empty_references_are_rejected() {
    let mut cfg = base();
    cfg.images[1] = "  ".to_string();
    assert!(config_error(&cfg).contains("#1"));

    let mut cfg = base();
    cfg.primary_audio.clear();
    assert!(config_error(&cfg).contains("primary_audio"));

    let mut cfg = base();
    cfg.secondary_audio = Some(String::new());
    assert!(config_error(&cfg).contains("secondary_audio"));
}

#[test]
fn duration_bounds_are_inclusive() {
    let mut cfg = base();
    cfg.image_duration_secs = 1.0;
    cfg.transition_duration_secs = 0.1;
    cfg.validate().unwrap();
    cfg.image_duration_secs = 10.0;
    cfg.transition_duration_secs = 5.0;
    cfg.validate().unwrap();

    cfg.image_duration_secs = 0.5;
    assert!(config_error(&cfg).contains("image_duration_secs"));

    let mut cfg = base();
    cfg.transition_duration_secs = 5.5;
    assert!(config_error(&cfg).contains("transition_duration_secs"));

    let mut cfg = base();
    cfg.transition_duration_secs = f64::NAN;
    assert!(config_error(&cfg).contains("transition_duration_secs"));
}

#[test]
fn volume_bounds() {
    let mut cfg = base();
    cfg.primary_volume = 1.01;
    assert!(config_error(&cfg).contains("primary_volume"));

    let mut cfg = base();
    cfg.secondary_volume = -0.1;
    assert!(config_error(&cfg).contains("secondary_volume"));

    let mut cfg = base();
    cfg.primary_volume = 0.0;
    cfg.secondary_volume = 1.0;
    cfg.validate().unwrap();
}

#[test]
fn zero_canvas_is_rejected() {
    let mut cfg = base();
    cfg.canvas.width = 0;
    assert!(config_error(&cfg).contains("canvas"));
}

#[test]
fn json_round_trip_preserves_config() {
    let mut cfg = base();
    cfg.secondary_audio = Some("music.mp3".to_string());
    cfg.effect = EffectId::ScaleRotate;
    cfg.spring_fidelity = SpringFidelity::Analytic;
    let json = cfg.to_json_pretty().unwrap();
    assert!(json.contains("\"scale-rotate\""));
    assert!(json.contains("\"analytic\""));
    assert_eq!(SlideshowConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn missing_file_is_configuration_error() {
    let err = SlideshowConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("open slideshow JSON"));
}
