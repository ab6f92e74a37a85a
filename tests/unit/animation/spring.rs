use super::*;

fn fps30() -> Fps {
    Fps::new(30).unwrap()
}

#[test]
fn transition_spring_is_overdamped() {
    let cfg = SpringConfig::TRANSITION;
    assert!(cfg.damping_ratio() > 1.0);
    assert!((cfg.natural_frequency() - 2000f64.sqrt()).abs() < 1e-12);
}

#[test]
fn starts_at_rest() {
    assert_eq!(spring_at_frame(0.0, fps30(), SpringConfig::TRANSITION), 0.0);
    assert_eq!(spring_at_frame(-3.0, fps30(), SpringConfig::TRANSITION), 0.0);
    assert_eq!(
        eased_progress(0.0, 1.0, fps30(), SpringFidelity::Reference),
        0.0
    );
}

#[test]
fn reference_values_match_stepped_integration() {
    let cfg = SpringConfig::TRANSITION;
    let cases = [
        (0.5, 0.171_714_560_649_633_4),
        (1.0, 0.439_061_148_015_177),
        (2.0, 0.798_059_955_144_870_6),
        (3.0, 0.937_492_387_484_608_7),
        (5.0, 0.995_102_215_306_438_2),
    ];
    for (frame, expected) in cases {
        let got = spring_at_frame(frame, fps30(), cfg);
        assert!(
            (got - expected).abs() < 1e-12,
            "frame {frame}: got {got}, expected {expected}"
        );
    }
}

#[test]
fn reference_settles_within_one_second() {
    let v = spring_at_frame(29.0, fps30(), SpringConfig::TRANSITION);
    assert!((v - 1.0).abs() < 1e-12);
}

#[test]
fn reference_is_monotonic_for_transition_spring() {
    let mut prev = 0.0;
    for i in 1..=60 {
        let v = spring_at_frame(f64::from(i) * 0.5, fps30(), SpringConfig::TRANSITION);
        assert!(v >= prev, "spring went backwards at half-frame {i}");
        prev = v;
    }
}

#[test]
fn large_frame_steps_are_capped() {
    // At 10 fps each frame is 100 ms, but the integrator only advances 64 ms per step.
    let fps = Fps::new(10).unwrap();
    let cfg = SpringConfig::TRANSITION;
    let capped = spring_at_frame(1.0, fps, cfg);
    assert!((capped - spring_closed_form(0.064, cfg)).abs() < 1e-12);
    assert!(capped < spring_closed_form(0.1, cfg));
}

#[test]
fn analytic_matches_reference_at_common_frame_rates() {
    // Eighths of a two second transition land on whole or half frames at these rates.
    for fps in [24, 25, 30, 60] {
        let fps = Fps::new(fps).unwrap();
        for i in 0..=8 {
            let p = f64::from(i) / 8.0;
            let a = eased_progress(p, 2.0, fps, SpringFidelity::Analytic);
            let r = eased_progress(p, 2.0, fps, SpringFidelity::Reference);
            assert!((a - r).abs() < 1e-9, "progress {p}: analytic {a} vs reference {r}");
        }
    }
}

#[test]
fn under_damped_stepping_matches_closed_form() {
    let cfg = SpringConfig {
        damping: 10.0,
        stiffness: 100.0,
        mass: 1.0,
    };
    for i in 0..=60 {
        let stepped = spring_at_frame(f64::from(i), fps30(), cfg);
        let closed = spring_closed_form(f64::from(i) / 30.0, cfg);
        assert!((stepped - closed).abs() < 1e-9, "frame {i}");
    }
}

#[test]
fn closed_form_branches_reach_target() {
    let under = SpringConfig {
        damping: 10.0,
        stiffness: 100.0,
        mass: 1.0,
    };
    let critical = SpringConfig {
        damping: 20.0,
        stiffness: 100.0,
        mass: 1.0,
    };
    for cfg in [under, critical, SpringConfig::TRANSITION] {
        assert!(spring_closed_form(0.0, cfg).abs() < 1e-12);
        assert!((spring_closed_form(10.0, cfg) - 1.0).abs() < 1e-6);
    }
    // The under-damped spring overshoots its target.
    assert!(spring_closed_form(0.35, under) > 1.0);
}
