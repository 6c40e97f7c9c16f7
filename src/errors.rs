use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("index {index} out of range for vector of dimension {dimension}")]
    IndexOutOfRange { index: isize, dimension: usize },

    #[error("division by zero")]
    DivideByZero,

    #[error("integer overflow in division")]
    DivisionOverflow,

    #[error("integer overflow")]
    Overflow,

    #[error("expected {expected} elements, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Maps a possibly negative index into `[0, dimension)`.
pub(crate) fn normalize_index(index: isize, dimension: usize) -> Result<usize, VectorError> {
    let dim = dimension as isize;
    let idx = if index < 0 { dim + index } else { index };
    if idx < 0 || idx >= dim {
        return Err(VectorError::IndexOutOfRange { index, dimension });
    }

    Ok(idx as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_index(0, 3), Ok(0));
        assert_eq!(normalize_index(-1, 3), Ok(2));
        assert_eq!(normalize_index(-3, 3), Ok(0));
        assert_eq!(
            normalize_index(3, 3),
            Err(VectorError::IndexOutOfRange {
                index: 3,
                dimension: 3
            })
        );
        assert!(normalize_index(-4, 3).is_err());
        assert!(normalize_index(0, 0).is_err());
    }

    #[test]
    fn test_messages() {
        let err = VectorError::IndexOutOfRange {
            index: -5,
            dimension: 4,
        };
        assert_eq!(
            err.to_string(),
            "index -5 out of range for vector of dimension 4"
        );
        assert_eq!(VectorError::DivideByZero.to_string(), "division by zero");
    }
}
