//! Export configuration for ForgedFate: turns per-method connection settings
//! into pasteable commands for the external Elasticsearch export tools, and
//! checks endpoints before the user commits to an export.

pub mod error;
pub mod export;
pub mod helpers;
pub mod models;
pub mod state;

pub use error::{Error, Result};
pub use models::ExportMethod;
