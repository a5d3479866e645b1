//! Python bindings for `epiece`.
//!
//! Build with the `ext-module` feature to produce the `epiece` extension
//! module, which exposes a single function, `piece(subject, delimiter)`.

#[cfg(feature = "python")]
mod error;
#[cfg(feature = "python")]
mod module;

#[cfg(feature = "python")]
pub use error::to_py_err;
#[cfg(feature = "python")]
pub use module::{epiece_module, piece};
