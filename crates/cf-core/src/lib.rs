//! cf-core: numeric foundation for ctrlflow.
//!
//! The `Real` scalar alias, comparison tolerances and finiteness checks
//! that every other crate in the workspace builds on.

pub mod error;
pub mod numeric;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
