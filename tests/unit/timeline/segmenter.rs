use super::*;

fn timing(n: usize, image_secs: f64, transition_secs: f64, fps: u32) -> SegmentTiming {
    let mut cfg = SlideshowConfig::new(
        (0..n).map(|i| format!("{i}.jpg")).collect(),
        "voice.mp3",
    );
    cfg.image_duration_secs = image_secs;
    cfg.transition_duration_secs = transition_secs;
    cfg.fps = Fps::new(fps).unwrap();
    SegmentTiming::from_config(&cfg)
}

#[test]
fn derived_frame_counts() {
    let t = timing(3, 3.0, 1.0, 30);
    assert_eq!(t.segment_frames, 120);
    assert_eq!(t.steady_frames, 90);
    assert_eq!(t.transition_frames(), 30);
    assert_eq!(t.total_frames(), 360);
    assert_eq!(t.total_secs(), 12.0);
    assert_eq!(t.segment_start(2), FrameIndex(240));
}

#[test]
fn counts_are_rounded() {
    let t = timing(2, 1.5, 0.35, 25);
    assert_eq!(t.segment_frames, 46); // 46.25
    assert_eq!(t.steady_frames, 38); // 37.5
}

#[test]
fn first_frame_is_steady_on_image_zero() {
    let p = segment_frame(timing(3, 3.0, 1.0, 30), FrameIndex(0)).unwrap();
    assert_eq!(p.current_index, 0);
    assert_eq!(p.next_index, Some(1));
    assert!(!p.in_transition);
    assert_eq!(p.linear_progress, 0.0);
    assert_eq!(p.incoming_index(), None);
}

#[test]
fn transition_starts_after_steady_frames() {
    let t = timing(3, 3.0, 1.0, 30);
    assert!(!segment_frame(t, FrameIndex(89)).unwrap().in_transition);

    let p = segment_frame(t, FrameIndex(90)).unwrap();
    assert!(p.in_transition);
    assert_eq!(p.linear_progress, 0.0);
    assert_eq!(p.incoming_index(), Some(1));

    let p = segment_frame(t, FrameIndex(104)).unwrap();
    assert!((p.linear_progress - 14.0 / 30.0).abs() < 1e-12);

    let p = segment_frame(t, FrameIndex(119)).unwrap();
    assert!((p.linear_progress - 29.0 / 30.0).abs() < 1e-12);
}

#[test]
fn next_segment_starts_steady() {
    let p = segment_frame(timing(3, 3.0, 1.0, 30), FrameIndex(120)).unwrap();
    assert_eq!(p.current_index, 1);
    assert_eq!(p.frame_within_image, 0);
    assert!(!p.in_transition);
}

#[test]
fn last_image_has_no_successor() {
    let t = timing(3, 3.0, 1.0, 30);
    let p = segment_frame(t, FrameIndex(350)).unwrap();
    assert_eq!(p.current_index, 2);
    assert_eq!(p.next_index, None);
    assert!(p.in_transition);
    assert_eq!(p.incoming_index(), None);
}

#[test]
fn frames_past_the_end_are_out_of_range() {
    let t = timing(3, 3.0, 1.0, 30);
    assert!(segment_frame(t, FrameIndex(359)).is_ok());
    match segment_frame(t, FrameIndex(360)) {
        Err(SlideshowError::OutOfRange {
            frame,
            total_frames,
        }) => {
            assert_eq!(frame, 360);
            assert_eq!(total_frames, 360);
        }
        other => panic!("expected out of range, got {other:?}"),
    }
}

#[test]
fn zero_length_transition_window_never_transitions() {
    // 3.1 s at 1 fps rounds to the same frame count as 3 s.
    let t = timing(2, 3.0, 0.1, 1);
    assert_eq!(t.transition_frames(), 0);
    for f in 0..t.total_frames() {
        assert!(!segment_frame(t, FrameIndex(f)).unwrap().in_transition);
    }
}

#[test]
fn exactly_one_current_per_frame() {
    let t = timing(4, 1.0, 0.5, 30);
    let mut seen = vec![0u64; 4];
    for f in 0..t.total_frames() {
        let p = segment_frame(t, FrameIndex(f)).unwrap();
        seen[p.current_index] += 1;
        if let Some(next) = p.incoming_index() {
            assert_eq!(next, p.current_index + 1);
        }
    }
    assert!(seen.iter().all(|&c| c == t.segment_frames));
}

#[test]
fn single_image_never_transitions() {
    let t = timing(1, 3.0, 1.0, 30);
    assert_eq!(t.total_frames(), 120);
    for f in 0..120 {
        let p = segment_frame(t, FrameIndex(f)).unwrap();
        assert_eq!(p.current_index, 0);
        assert_eq!(p.next_index, None);
        assert!(!p.in_transition);
        assert_eq!(p.linear_progress, 0.0);
    }
}
