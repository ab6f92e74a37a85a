use super::*;
use crate::config::model::SlideshowConfig;

#[test]
fn sink_config_carries_audio_tracks() {
    let mut cfg = SlideshowConfig::new(vec!["a.jpg".to_string()], "voice.mp3");
    cfg.secondary_audio = Some("music.mp3".to_string());
    cfg.secondary_volume = 0.25;
    let show = Slideshow::new(cfg).unwrap();

    let sc = SinkConfig::from_slideshow(&show);
    assert_eq!(sc.total_frames, 120);
    assert_eq!(sc.images, vec!["a.jpg".to_string()]);
    assert_eq!(sc.primary_audio.volume, 1.0);
    assert_eq!(
        sc.secondary_audio,
        Some(AudioTrack {
            src: "music.mp3".to_string(),
            volume: 0.25,
        })
    );
}

#[test]
fn in_memory_sink_restarts_on_begin() {
    let show = Slideshow::new(SlideshowConfig::new(vec!["a.jpg".to_string()], "v.mp3")).unwrap();
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig::from_slideshow(&show)).unwrap();
    sink.push_frame(&show.render_params(FrameIndex(0)).unwrap())
        .unwrap();
    sink.end().unwrap();
    assert!(sink.is_ended());
    assert_eq!(sink.frame_indices(), vec![FrameIndex(0)]);

    sink.begin(SinkConfig::from_slideshow(&show)).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_ended());
    assert!(sink.config().is_some());
}
