//! Frame counter driving the walk cycle.

/// Wrapping animation counter with a pause flag.
///
/// `current_frame` always stays in `0..length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationClock {
    current_frame: u32,
    length: u32,
    paused: bool,
}

impl AnimationClock {
    /// Creates a clock at frame 0. `length` must be positive.
    pub fn new(length: u32) -> Self {
        assert!(length > 0, "animation length must be positive");
        Self {
            current_frame: 0,
            length,
            paused: false,
        }
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Scheduler tick: moves one frame forward unless paused.
    pub fn advance(&mut self) {
        if !self.paused {
            self.step_forward();
        }
    }

    /// Manual step, ignores the pause flag.
    pub fn step_forward(&mut self) {
        self.current_frame = (self.current_frame + 1) % self.length;
    }

    /// Manual step, ignores the pause flag.
    pub fn step_backward(&mut self) {
        self.current_frame = (self.current_frame + self.length - 1) % self.length;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_after_full_cycle() {
        let mut clock = AnimationClock::new(35);
        for _ in 0..34 {
            clock.advance();
        }
        assert_eq!(clock.current_frame(), 34);
        clock.advance();
        assert_eq!(clock.current_frame(), 0);
    }

    #[test]
    fn test_pause_freezes_advance_but_not_steps() {
        let mut clock = AnimationClock::new(35);
        clock.advance();
        clock.toggle_pause();
        assert!(clock.is_paused());

        clock.advance();
        assert_eq!(clock.current_frame(), 1);

        clock.step_forward();
        assert_eq!(clock.current_frame(), 2);

        clock.toggle_pause();
        clock.advance();
        assert_eq!(clock.current_frame(), 3);
    }

    #[test]
    fn test_step_backward_wraps_below_zero() {
        let mut clock = AnimationClock::new(35);
        clock.step_backward();
        assert_eq!(clock.current_frame(), 34);
        clock.step_forward();
        assert_eq!(clock.current_frame(), 0);
    }

    #[test]
    #[should_panic(expected = "animation length must be positive")]
    fn test_zero_length_is_rejected() {
        let _ = AnimationClock::new(0);
    }
}
