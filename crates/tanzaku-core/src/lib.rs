//! Shared foundation for the tanzaku workspace.
//!
//! Holds the error taxonomy, shared constants, and small types used by
//! the contact property crates. Keeps no domain logic of its own.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::FieldKind;
