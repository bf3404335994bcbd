//! moments: Mean and population standard deviation over counts
//!
//! Accumulates exact integer moments (n, Σx, Σx²). Addition on integers is
//! associative, so the result does not depend on the order samples arrive in.
//! An empty accumulator reports 0.0 for both mean and standard deviation.

/// Running integer moments of a sample of non-negative counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Moments {
    count: u64,
    sum: u128,
    sum_sq: u128,
}

impl Moments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample
    pub fn push(&mut self, value: usize) {
        let value = value as u128;
        self.count += 1;
        self.sum += value;
        self.sum_sq += value * value;
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean, 0.0 when empty
    pub fn mean(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.sum as f64 / self.count as f64
    }

    /// Population standard deviation (divides by N), 0.0 when empty
    pub fn std_dev(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let n = self.count as u128;
        // n·Σx² − (Σx)² = n²·variance, never negative
        let scaled = (n * self.sum_sq).saturating_sub(self.sum * self.sum);
        (scaled as f64 / (n as f64 * n as f64)).sqrt()
    }
}

impl Extend<usize> for Moments {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<usize> for Moments {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut moments = Moments::new();
        moments.extend(iter);
        moments
    }
}
