//! Pipeline-level tests.

mod pipeline;
