use pyo3::prelude::*;
use pyo3::types::PyTuple;

use crate::error::to_py_err;

/// `piece(subject, delimiter) -> list[str]`
///
/// Arguments are taken as a tuple so that the argument count is checked by
/// `epiece` itself. Every argument must be a `str`.
#[pyfunction]
#[pyo3(signature = (*args))]
pub fn piece(args: &Bound<'_, PyTuple>) -> PyResult<Vec<String>> {
    let args = args
        .iter()
        .map(|arg| arg.extract::<String>())
        .collect::<PyResult<Vec<_>>>()?;
    ::epiece::piece_args(&args).map_err(to_py_err)
}

#[pymodule]
#[pyo3(name = "epiece")]
pub fn epiece_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(piece, m)?)?;
    Ok(())
}
