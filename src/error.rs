//! Error type shared by the whole crate.

/// A matrix or vector shape as `(rows, cols)`. Plain vectors are reported as `(len, 1)`.
pub type Shape = (usize, usize);

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The network topology or a parameter blob does not fit the expected structure.
    #[error("network structure error: {0}")]
    Structure(String),

    /// Two operands (or an input and the topology) have incompatible shapes.
    #[error("dimension mismatch in {op}: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        op: &'static str,
        expected: Shape,
        actual: Shape,
    },

    /// Cell, row or column access outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    Bounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn vector_len(op: &'static str, expected: usize, actual: usize) -> Error {
        Error::DimensionMismatch {
            op,
            expected: (expected, 1),
            actual: (actual, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_message_names_both_shapes() {
        let err = Error::DimensionMismatch { op: "multiply", expected: (3, 2), actual: (4, 1) };
        assert_eq!(err.to_string(), "dimension mismatch in multiply: expected 3x2, got 4x1");
    }

    #[test]
    fn vector_len_reports_column_shapes() {
        match Error::vector_len("feed_forward", 2, 5) {
            Error::DimensionMismatch { expected, actual, .. } => {
                assert_eq!(expected, (2, 1));
                assert_eq!(actual, (5, 1));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
