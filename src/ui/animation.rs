//! Keyframe timing curves for the ambient layer and slide entrances
//!
//! Every animation in the deck is a pure function of elapsed seconds, so the
//! curves can be evaluated on the CPU for view styling, mirrored in the
//! ambient shader, and unit tested without a renderer.

/// Pulse period of the background glow, seconds.
pub const PULSE_PERIOD: f32 = 6.0;
/// Peak vertical travel of a floating dot, logical pixels.
pub const FLOAT_RISE: f32 = 20.0;
/// Duration of both entrance animations, seconds.
pub const ENTRANCE_DURATION: f32 = 1.0;
/// Delay before the subtitle fade-in starts, seconds.
pub const SUBTITLE_DELAY: f32 = 0.5;
/// Starting horizontal offset of the title slide-in, logical pixels.
pub const SLIDE_IN_OFFSET: f32 = 100.0;
/// Starting vertical offset of the subtitle fade-in, logical pixels.
pub const FADE_IN_OFFSET: f32 = 30.0;
/// Cross-slide fade duration, seconds.
pub const TRANSITION_DURATION: f32 = 0.5;

/// Hermite smoothstep, the ease-in-out curve used by the looping animations.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Cubic ease-out used by the entrance animations.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// State of the pulsing background glow at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    /// Glow opacity, 0.6 at rest up to 1.0 at the peak.
    pub opacity: f32,
    /// Glow scale, 1.0 at rest up to 1.05 at the peak.
    pub scale: f32,
}

/// Evaluate the background pulse. Loops forever with period
/// [`PULSE_PERIOD`]; rest at phase boundaries, peak at mid-phase.
pub fn pulse(elapsed: f32) -> Pulse {
    let phase = (elapsed / PULSE_PERIOD).rem_euclid(1.0);
    // Triangle wave 0 -> 1 -> 0 across the period, then eased.
    let eased = ease_in_out(1.0 - (2.0 * phase - 1.0).abs());
    Pulse {
        opacity: 0.6 + 0.4 * eased,
        scale: 1.0 + 0.05 * eased,
    }
}

/// Vertical offset of a floating dot, in `[-FLOAT_RISE, 0]`.
///
/// The dot rests at the origin until `delay` has elapsed, then loops with the
/// given period. Mirrors CSS `animation-delay` semantics.
pub fn float_offset(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if elapsed < delay || duration <= 0.0 {
        return 0.0;
    }
    let phase = ((elapsed - delay) / duration).rem_euclid(1.0);
    let eased = ease_in_out(1.0 - (2.0 * phase - 1.0).abs());
    -FLOAT_RISE * eased
}

/// State of an entrance animation at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    /// Remaining offset from the settled position, logical pixels.
    pub offset: f32,
    /// Content opacity, 0.0 to 1.0.
    pub opacity: f32,
}

/// Title entrance: slides in from `-SLIDE_IN_OFFSET` while fading in, once
/// per slide entry, ease-out over [`ENTRANCE_DURATION`].
pub fn slide_in(elapsed: f32) -> Entrance {
    let eased = ease_out(elapsed / ENTRANCE_DURATION);
    Entrance {
        offset: -SLIDE_IN_OFFSET * (1.0 - eased),
        opacity: eased,
    }
}

/// Subtitle entrance: rises from `FADE_IN_OFFSET` below while fading in,
/// after [`SUBTITLE_DELAY`]. Holds the first keyframe during the delay
/// (CSS `animation-fill-mode: both`).
pub fn fade_in(elapsed: f32) -> Entrance {
    let eased = ease_out((elapsed - SUBTITLE_DELAY) / ENTRANCE_DURATION);
    Entrance {
        offset: FADE_IN_OFFSET * (1.0 - eased),
        opacity: eased,
    }
}

/// Cross-fade applied to slide content on every slide entry.
pub fn transition_fade(elapsed: f32) -> f32 {
    ease_out(elapsed / TRANSITION_DURATION)
}

/// Whether both entrance animations have settled for the current slide.
pub fn entrances_settled(elapsed: f32) -> bool {
    elapsed >= SUBTITLE_DELAY + ENTRANCE_DURATION
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    mod property_pulse_loop {
        use super::*;

        #[test]
        fn rests_at_period_boundaries() {
            for cycles in 0..4 {
                let p = pulse(PULSE_PERIOD * cycles as f32);
                assert!((p.opacity - 0.6).abs() < EPS);
                assert!((p.scale - 1.0).abs() < EPS);
            }
        }

        #[test]
        fn peaks_at_mid_period() {
            let p = pulse(PULSE_PERIOD / 2.0);
            assert!((p.opacity - 1.0).abs() < EPS);
            assert!((p.scale - 1.05).abs() < EPS);
        }

        #[test]
        fn stays_within_keyframe_bounds() {
            let mut t = 0.0;
            while t < PULSE_PERIOD * 3.0 {
                let p = pulse(t);
                assert!((0.6..=1.0).contains(&p.opacity));
                assert!((1.0..=1.05).contains(&p.scale));
                t += 0.05;
            }
        }
    }

    mod property_float_loop {
        use super::*;

        #[test]
        fn rests_until_delay_elapses() {
            assert_eq!(float_offset(0.0, 2.0, 4.0), 0.0);
            assert_eq!(float_offset(1.9, 2.0, 4.0), 0.0);
        }

        #[test]
        fn starts_from_origin_after_delay() {
            assert!(float_offset(2.0, 2.0, 4.0).abs() < EPS);
        }

        #[test]
        fn peaks_at_half_cycle() {
            let offset = float_offset(2.0 + 2.0, 2.0, 4.0);
            assert!((offset + FLOAT_RISE).abs() < EPS);
        }

        #[test]
        fn stays_within_travel_bounds() {
            let mut t = 0.0;
            while t < 20.0 {
                let offset = float_offset(t, 1.5, 3.7);
                assert!(
                    (-FLOAT_RISE..=0.0).contains(&offset),
                    "offset {offset} at t {t}"
                );
                t += 0.05;
            }
        }

        #[test]
        fn zero_duration_never_moves() {
            assert_eq!(float_offset(10.0, 0.0, 0.0), 0.0);
        }
    }

    mod property_entrances {
        use super::*;

        #[test]
        fn slide_in_starts_offscreen_and_transparent() {
            let e = slide_in(0.0);
            assert!((e.offset + SLIDE_IN_OFFSET).abs() < EPS);
            assert!(e.opacity.abs() < EPS);
        }

        #[test]
        fn slide_in_settles_and_holds() {
            for t in [ENTRANCE_DURATION, 2.0, 30.0] {
                let e = slide_in(t);
                assert!(e.offset.abs() < EPS);
                assert!((e.opacity - 1.0).abs() < EPS);
            }
        }

        #[test]
        fn fade_in_holds_first_keyframe_during_delay() {
            for t in [0.0, 0.25, SUBTITLE_DELAY] {
                let e = fade_in(t);
                assert!((e.offset - FADE_IN_OFFSET).abs() < EPS);
                assert!(e.opacity.abs() < EPS);
            }
        }

        #[test]
        fn fade_in_settles_after_delay_plus_duration() {
            let e = fade_in(SUBTITLE_DELAY + ENTRANCE_DURATION);
            assert!(e.offset.abs() < EPS);
            assert!((e.opacity - 1.0).abs() < EPS);
        }

        #[test]
        fn entrance_opacity_is_monotonic() {
            let mut prev = 0.0;
            let mut t = 0.0;
            while t <= SUBTITLE_DELAY + ENTRANCE_DURATION {
                let opacity = fade_in(t).opacity;
                assert!(opacity >= prev - EPS);
                prev = opacity;
                t += 0.02;
            }
        }

        #[test]
        fn settled_predicate_matches_curves() {
            assert!(!entrances_settled(0.0));
            assert!(!entrances_settled(1.2));
            assert!(entrances_settled(SUBTITLE_DELAY + ENTRANCE_DURATION));
        }
    }

    mod property_transition {
        use super::*;

        #[test]
        fn fade_runs_exactly_once() {
            assert!(transition_fade(0.0).abs() < EPS);
            assert!((transition_fade(TRANSITION_DURATION) - 1.0).abs() < EPS);
            assert!((transition_fade(10.0) - 1.0).abs() < EPS);
        }
    }
}
