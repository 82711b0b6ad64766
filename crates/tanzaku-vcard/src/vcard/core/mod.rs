//! Core contact property types.

pub mod property;
pub mod value;

pub use property::{Property, RawProperty, names};
pub use value::{RawValue, Value};
