use std::fmt;

/// Named difficulty tier bounding operand magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Life,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Life => "life",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "life" => Some(Difficulty::Life),
            _ => None,
        }
    }

    /// Operand range for this tier
    pub fn range(&self) -> NumberRange {
        match self {
            Difficulty::Easy => NumberRange { min: 1, max: 10 },
            Difficulty::Medium => NumberRange { min: 10, max: 100 },
            Difficulty::Hard => NumberRange { min: 100, max: 1000 },
            Difficulty::Life => NumberRange { min: 1, max: 1000 },
        }
    }
}

/// Closed integer range operands are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    pub min: i32,
    pub max: i32,
}

impl NumberRange {
    pub fn validate(&self) -> Result<(), InvalidRangeError> {
        if self.min > self.max {
            Err(InvalidRangeError {
                min: self.min,
                max: self.max,
            })
        } else {
            Ok(())
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Raised when a range's minimum exceeds its maximum. The fixed tiers
/// never produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRangeError {
    pub min: i32,
    pub max: i32,
}

impl fmt::Display for InvalidRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid number range: min {} exceeds max {}",
            self.min, self.max
        )
    }
}

impl std::error::Error for InvalidRangeError {}
