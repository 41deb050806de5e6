//! dgidb-common: Shared error type and the allowlisted HTTP client used by
//! the DGIdb interaction parser crates.

pub mod error;
pub mod sandbox;

pub use error::{IngestError, Result};
pub use sandbox::SandboxClient;
