//! QR error-correction levels.

use std::fmt;
use std::str::FromStr;

use qrcode::EcLevel;

/// Error-correction level, ordered by increasing redundancy.
///
/// Higher levels survive more damage but hold less data, so a label that
/// fits a given version at `Low` may need a larger version at `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ErrorCorrection {
    /// ~7% of codewords can be restored.
    Low,
    /// ~15% of codewords can be restored.
    Medium,
    /// ~25% of codewords can be restored.
    Quartile,
    /// ~30% of codewords can be restored.
    #[default]
    High,
}

impl ErrorCorrection {
    /// All levels from least to most redundant.
    pub const ALL: [ErrorCorrection; 4] = [Self::Low, Self::Medium, Self::Quartile, Self::High];

    /// Single-letter name used on the command line.
    pub fn letter(self) -> char {
        match self {
            Self::Low => 'L',
            Self::Medium => 'M',
            Self::Quartile => 'Q',
            Self::High => 'H',
        }
    }
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid error correction level {0:?} (expected L, M, Q or H)")]
pub struct ParseLevelError(pub String);

impl FromStr for ErrorCorrection {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::Low),
            "M" => Ok(Self::Medium),
            "Q" => Ok(Self::Quartile),
            "H" => Ok(Self::High),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
