/// Precondition failures reported by [`Grid`](crate::grid::Grid).
///
/// These are programmer errors: the grid is never modified by a call that
/// returns one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Negative dimension, or `width * height` does not fit in `usize`.
    InvalidDimension { width: i64, height: i64 },
    IndexOutOfRange { index: usize, size: usize },
    CoordinateOutOfRange { x: usize, y: usize, width: usize, height: usize },
    /// Nothing to choose from: empty value set or size-0 grid.
    EmptyDomain(&'static str),
    LengthMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {} out of range for grid of size {}", index, size)
            }
            Self::CoordinateOutOfRange { x, y, width, height } => write!(
                f,
                "coordinate ({}, {}) out of range for {}x{} grid",
                x, y, width, height
            ),
            Self::EmptyDomain(what) => write!(f, "empty domain: {}", what),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "expected {} elements, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = GridError::IndexOutOfRange { index: 12, size: 10 };
        assert_eq!(err.to_string(), "index 12 out of range for grid of size 10");

        let err = GridError::InvalidDimension { width: -1, height: 4 };
        assert_eq!(err.to_string(), "invalid grid dimensions -1x4");
    }
}
