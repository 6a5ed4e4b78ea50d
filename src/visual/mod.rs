//! Conversion of workflow graphs into a generic node+edge visual form.

pub mod convert;
pub mod types;

pub use convert::*;
pub use types::*;
