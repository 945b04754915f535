use std::str::FromStr;
use thiserror::Error;

/// Upper bound used for open-ended brackets such as "45+"
pub const OPEN_BRACKET_MAX_AGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgeBracketError {
    #[error("unrecognised age bracket: {0:?}")]
    Format(String),

    #[error("age bracket {0:?} has its minimum above its maximum")]
    Inverted(String),
}

/// Inclusive age range, `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    /// Callers must pass `min <= max`; debug builds panic otherwise.
    /// Use [`AgeRange::from_bounds`] for unchecked input.
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max, "inverted age range {}..={}", min, max);
        Self { min, max }
    }

    /// Build from a `[min, max]` pair as carried by briefs and brands
    ///
    /// An inverted pair is read as the range between its two ages.
    pub fn from_bounds(bounds: [u32; 2]) -> Self {
        Self::new(bounds[0].min(bounds[1]), bounds[0].max(bounds[1]))
    }

    /// Number of whole years covered
    #[inline]
    pub fn size(&self) -> u32 {
        self.max.saturating_sub(self.min) + 1
    }

    /// Intersection of two ranges, `None` when they are disjoint
    #[inline]
    pub fn overlap(&self, other: &AgeRange) -> Option<AgeRange> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then_some(AgeRange { min, max })
    }

    #[inline]
    pub fn overlaps(&self, other: &AgeRange) -> bool {
        self.overlap(other).is_some()
    }
}

impl FromStr for AgeRange {
    type Err = AgeBracketError;

    /// Parse an audience bracket label: `"N-M"` or `"N+"`
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let trimmed = label.trim();
        let format_err = || AgeBracketError::Format(label.to_string());

        let (min, max) = if let Some(lower) = trimmed.strip_suffix('+') {
            let min = lower.trim().parse::<u32>().map_err(|_| format_err())?;
            (min, OPEN_BRACKET_MAX_AGE)
        } else {
            let (lower, upper) = trimmed.split_once('-').ok_or_else(format_err)?;
            let min = lower.trim().parse::<u32>().map_err(|_| format_err())?;
            let max = upper.trim().parse::<u32>().map_err(|_| format_err())?;
            (min, max)
        };

        if min > max {
            return Err(AgeBracketError::Inverted(label.to_string()));
        }

        Ok(AgeRange { min, max })
    }
}
