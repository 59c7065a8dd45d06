use std::{cmp::Ordering, fmt};

/// An exact `numerator / denominator` proportion.
///
/// Ratios compare by cross-multiplication, so `1/4 == 2/8` and ties never
/// depend on floating point rounding.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    pub numerator: u64,
    pub denominator: u64,
}

impl Ratio {
    pub fn new(numerator: u64, denominator: u64) -> Ratio {
        debug_assert!(denominator > 0, "ratio denominator must be positive");
        Ratio {
            numerator,
            denominator,
        }
    }

    /// The ratio as a percentage in `[0, 100]` (for well-formed counts).
    pub fn percentage(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        100.0 * self.numerator as f64 / self.denominator as f64
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as u128 * other.denominator as u128;
        let rhs = other.numerator as u128 * self.denominator as u128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Share of the target cuisine within one partition (a borough or a zip code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRatio {
    /// The borough name or zip code
    pub key: String,

    /// `cuisine count / all restaurants` in the partition
    pub ratio: Ratio,
}

impl PartitionRatio {
    pub fn new(key: impl Into<String>, cuisine_count: u64, total_count: u64) -> PartitionRatio {
        PartitionRatio {
            key: key.into(),
            ratio: Ratio::new(cuisine_count, total_count),
        }
    }

    pub fn cuisine_count(&self) -> u64 {
        self.ratio.numerator
    }

    pub fn total_count(&self) -> u64 {
        self.ratio.denominator
    }

    pub fn percentage(&self) -> f64 {
        self.ratio.percentage()
    }

    /// Picks the partition with the smallest ratio, breaking ties by
    /// ascending key.
    pub fn select_min(candidates: &[PartitionRatio]) -> Option<&PartitionRatio> {
        candidates
            .iter()
            .min_by(|a, b| a.ratio.cmp(&b.ratio).then_with(|| a.key.cmp(&b.key)))
    }
}
