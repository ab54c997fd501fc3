//! Limits for configuration values.

use std::cmp;

//------------ DefMinMax -----------------------------------------------------

/// The default, minimum, and maximum values for a config variable.
#[derive(Clone, Copy)]
pub struct DefMinMax<T> {
    /// The default value,
    def: T,

    /// The minimum value,
    min: T,

    /// The maximum value,
    max: T,
}

impl<T> DefMinMax<T> {
    /// Creates a new value.
    pub const fn new(def: T, min: T, max: T) -> Self {
        Self { def, min, max }
    }

    /// Returns the default value.
    pub fn default(self) -> T {
        self.def
    }

    /// Trims the given value to fit into the minimum/maximum range.
    pub fn limit(self, value: T) -> T
    where
        T: Ord,
    {
        cmp::max(self.min, cmp::min(self.max, value))
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::DefMinMax;
    use std::time::Duration;

    #[test]
    fn limit() {
        const LIMITS: DefMinMax<Duration> = DefMinMax::new(
            Duration::from_secs(10),
            Duration::from_secs(1),
            Duration::from_secs(60),
        );
        assert_eq!(LIMITS.default(), Duration::from_secs(10));
        assert_eq!(LIMITS.limit(Duration::ZERO), Duration::from_secs(1));
        assert_eq!(LIMITS.limit(Duration::from_secs(30)), Duration::from_secs(30));
        assert_eq!(LIMITS.limit(Duration::from_secs(3600)), Duration::from_secs(60));
    }
}
