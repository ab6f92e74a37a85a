use super::*;
use crate::{
    config::{effect::EffectId, model::SlideshowConfig},
    encode::sink::InMemorySink,
};

fn show(effect: EffectId) -> Slideshow {
    let mut cfg = SlideshowConfig::new(
        vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
        "voice.mp3",
    );
    cfg.effect = effect;
    Slideshow::new(cfg).unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn serial_and_parallel_agree() {
    let s = show(EffectId::ZoomOutFade);
    let all = range(0, s.total_frames());
    let serial = evaluate_range(&s, all, &EvalThreading::default()).unwrap();
    let parallel = evaluate_range(
        &s,
        all,
        &EvalThreading {
            parallel: true,
            threads: Some(3),
            chunk_size: 7,
        },
    )
    .unwrap();
    assert_eq!(serial.len(), 360);
    assert_eq!(serial, parallel);
}

#[test]
fn stream_pushes_frames_in_order() {
    let s = show(EffectId::Crossfade);
    let mut sink = InMemorySink::new();
    let stats = stream_range(
        &s,
        range(80, 130),
        &EvalThreading {
            parallel: true,
            threads: Some(2),
            chunk_size: 16,
        },
        &mut sink,
    )
    .unwrap();

    assert_eq!(stats, RenderStats { frames: 50, chunks: 4 });
    let idx: Vec<u64> = sink.frame_indices().into_iter().map(|f| f.0).collect();
    assert_eq!(idx, (80..130).collect::<Vec<_>>());
    assert!(sink.is_ended());
    assert_eq!(sink.config().unwrap().total_frames, 360);
}

#[test]
fn empty_range_still_brackets_sink() {
    let s = show(EffectId::Fade);
    let mut sink = InMemorySink::new();
    let stats = stream_range(&s, range(5, 5), &EvalThreading::default(), &mut sink).unwrap();
    assert_eq!(stats, RenderStats::default());
    assert!(sink.config().is_some());
    assert!(sink.is_ended());
}

#[test]
fn range_past_end_is_rejected_before_begin() {
    let s = show(EffectId::Fade);
    let mut sink = InMemorySink::new();
    let err = stream_range(&s, range(0, 361), &EvalThreading::default(), &mut sink).unwrap_err();
    assert!(matches!(
        err,
        SlideshowError::OutOfRange {
            frame: 361,
            total_frames: 360
        }
    ));
    assert!(sink.config().is_none());
}

#[test]
fn zero_threads_or_chunk_is_rejected() {
    let s = show(EffectId::Fade);
    for threading in [
        EvalThreading {
            parallel: true,
            threads: Some(0),
            chunk_size: 8,
        },
        EvalThreading {
            parallel: true,
            threads: None,
            chunk_size: 0,
        },
    ] {
        let err = evaluate_range(&s, range(0, 10), &threading).unwrap_err();
        assert!(matches!(err, SlideshowError::Configuration(_)));
    }
}
