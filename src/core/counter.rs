//! Animated statistic counters
//!
//! A counter climbs from zero to its target in fixed additive steps, one per
//! animation frame. The step size assumes ~16ms frames so the whole run takes
//! about [`COUNTER_DURATION_MS`].

/// Intended length of one counter animation
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Assumed frame length used to derive the step size
pub const FRAME_MS: f64 = 16.0;

/// Fraction of the element that must be visible to start counting
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.2;

/// Observer root margin: the bottom 50px of the viewport do not count
pub const COUNTER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Accumulator for one counter run
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    step: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            step: f64::from(target) / (COUNTER_DURATION_MS / FRAME_MS),
            current: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame and return the value to display.
    ///
    /// While below the target the displayed value is the floor of the
    /// accumulator; the final frame snaps to the exact target. Ticking a
    /// finished animation keeps returning the target.
    pub fn tick(&mut self) -> u32 {
        if self.finished {
            return self.target;
        }

        self.current += self.step;
        if self.current < f64::from(self.target) {
            self.current.floor() as u32
        } else {
            self.finished = true;
            self.target
        }
    }

    /// Every displayed value from the first frame to the last
    pub fn frames(mut self) -> Vec<u32> {
        let mut values = Vec::new();
        loop {
            values.push(self.tick());
            if self.finished {
                return values;
            }
        }
    }
}

/// Parse a `data-target` attribute. Anything unparsable counts as zero.
pub fn parse_target(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_size() {
        let counter = CounterAnimation::new(500);
        assert!((counter.step() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_frames_are_monotonic_and_end_at_target() {
        for target in [1, 12, 98, 500, 12_345] {
            let frames = CounterAnimation::new(target).frames();
            assert!(frames.windows(2).all(|w| w[0] <= w[1]), "target {}", target);
            assert_eq!(frames.last(), Some(&target));
            assert!(frames.iter().all(|&v| v <= target));
        }
    }

    #[test]
    fn test_frame_count_matches_duration() {
        // 2000 / 16 = 125 steps, float accumulation may need one more
        let frames = CounterAnimation::new(500).frames();
        assert!((125..=126).contains(&frames.len()), "{} frames", frames.len());
    }

    #[test]
    fn test_intermediate_values_are_floored() {
        let mut counter = CounterAnimation::new(12);
        // step = 0.096
        assert_eq!(counter.tick(), 0);
        for _ in 0..9 {
            counter.tick();
        }
        // 11 * 0.096 = 1.056
        assert_eq!(counter.tick(), 1);
    }

    #[test]
    fn test_zero_target_finishes_on_first_tick() {
        let mut counter = CounterAnimation::new(0);
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_finished());
    }

    #[test]
    fn test_tick_after_finish_stays_at_target() {
        let mut counter = CounterAnimation::new(3);
        while !counter.is_finished() {
            counter.tick();
        }
        assert_eq!(counter.tick(), 3);
        assert_eq!(counter.tick(), 3);
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("500"), 500);
        assert_eq!(parse_target(" 98 "), 98);
        assert_eq!(parse_target(""), 0);
        assert_eq!(parse_target("abc"), 0);
        assert_eq!(parse_target("-5"), 0);
    }
}
