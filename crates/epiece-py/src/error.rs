use ::epiece::PieceError;
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    PyErr,
};

/// Map a split failure onto the Python exception a caller would expect.
///
/// A wrong argument count is a `TypeError`, as for any Python callable; bad
/// argument values are a `ValueError`.
pub fn to_py_err(err: PieceError) -> PyErr {
    match err {
        PieceError::InvalidArgumentCount { .. } => PyTypeError::new_err(err.to_string()),
        PieceError::InputTooLarge { .. } | PieceError::InvalidEncoding { .. } => {
            PyValueError::new_err(err.to_string())
        }
    }
}
