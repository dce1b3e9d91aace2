/// A range of reals from `min` to `max`. `min > max` is the empty interval.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}
impl Interval {
    pub const EMPTY: Self = Self::new(f64::INFINITY, f64::NEG_INFINITY);
    pub const UNIVERSE: Self = Self::new(f64::NEG_INFINITY, f64::INFINITY);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive on both ends.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Exclusive on both ends.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Projects `x` into `[min, max]`.
    ///
    /// Unlike `f64::clamp` this never panics, so it is safe on `EMPTY`.
    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }
}
impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_vs_surrounds() {
        let i = Interval::new(0., 1.);
        assert!(i.contains(0.) && i.contains(1.) && i.contains(0.5));
        assert!(!i.surrounds(0.) && !i.surrounds(1.) && i.surrounds(0.5));
        assert!(!i.contains(1.0001));
        assert_eq!(i.size(), 1.);
    }

    #[test]
    fn empty_and_universe() {
        for &x in &[f64::NEG_INFINITY, -1e300, 0., 42., f64::INFINITY] {
            assert!(!Interval::EMPTY.contains(x));
            assert!(Interval::UNIVERSE.contains(x));
        }
        assert!(!Interval::UNIVERSE.surrounds(f64::INFINITY));
        assert_eq!(Interval::default(), Interval::EMPTY);
    }

    #[test]
    fn clamp_is_total() {
        let i = Interval::new(0., 0.999);
        assert_eq!(i.clamp(-3.), 0.);
        assert_eq!(i.clamp(0.5), 0.5);
        assert_eq!(i.clamp(7.), 0.999);
        assert_eq!(i.clamp(f64::INFINITY), 0.999);
        assert_eq!(i.clamp(f64::NEG_INFINITY), 0.);

        assert_eq!(Interval::UNIVERSE.clamp(f64::INFINITY), f64::INFINITY);
        // Doesn't panic on an inverted interval.
        let _ = Interval::EMPTY.clamp(1.);
    }
}
