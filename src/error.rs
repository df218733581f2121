use std::fmt;

/// Errors raised by the theory engine for invalid input classes.
///
/// These are hard failures: an invalid root or scale type indicates a
/// programming or configuration mistake upstream, so the whole data
/// refresh aborts rather than producing a partial result. Soft lookups
/// (unknown tuning preset, unmatched seventh interval) degrade to
/// defaults instead and never reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    InvalidRoot { note: String },
    UnsupportedScaleType { name: String },
}

impl fmt::Display for TheoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TheoryError::InvalidRoot { note } => write!(f, "Invalid root note: {note}"),
            TheoryError::UnsupportedScaleType { name } => {
                write!(f, "Unsupported scale type: {name}")
            }
        }
    }
}

impl std::error::Error for TheoryError {}
