/// Countdown timer for a typing session.
///
/// Holds whole seconds only; the one-second cadence is owned by the external
/// clock driving `tick()`. Reaching zero is one-way: further ticks are no-ops
/// until `reset()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    duration_secs: u32,
    remaining_secs: u32,
}

impl Timer {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
        }
    }

    /// Consumes one second of budget, saturating at zero.
    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.duration_secs - self.remaining_secs
    }

    /// Restores the full budget.
    pub fn reset(&mut self) {
        self.remaining_secs = self.duration_secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_full() {
        let timer = Timer::new(30);

        assert_eq!(timer.remaining_secs(), 30);
        assert_eq!(timer.elapsed_secs(), 0);
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_tick_decrements() {
        let mut timer = Timer::new(3);

        timer.tick();
        assert_eq!(timer.remaining_secs(), 2);
        assert_eq!(timer.elapsed_secs(), 1);
    }

    #[test]
    fn test_tick_saturates_at_zero() {
        let mut timer = Timer::new(1);

        timer.tick();
        assert!(timer.is_expired());

        timer.tick();
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.elapsed_secs(), 1);
    }

    #[test]
    fn test_reset_restores_budget() {
        let mut timer = Timer::new(10);

        timer.tick();
        timer.tick();
        timer.reset();

        assert_eq!(timer.remaining_secs(), 10);
    }
}
