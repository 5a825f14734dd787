use crate::constants::COUNTER_STEPS;

/// Count-up animation for a numeric stat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Counter {
    current: f64,
    target: f64,
    increment: f64,
}

impl Counter {
    pub fn new(start: f64, target: f64) -> Self {
        Self {
            current: start,
            target,
            increment: target / COUNTER_STEPS,
        }
    }

    #[allow(dead_code)] // host tests
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Next displayed value, or `None` once the target was shown. A
    /// non-finite start or target never produces a value.
    pub fn tick(&mut self) -> Option<f64> {
        if !self.target.is_finite() || !self.current.is_finite() {
            return None;
        }
        if self.current >= self.target || self.increment <= 0.0 {
            if self.current == self.target {
                return None;
            }
            self.current = self.target;
            return Some(self.current);
        }
        self.current = (self.current + self.increment).ceil().min(self.target);
        Some(self.current)
    }
}
