// Form state, presentation and workflow control

pub mod config;
pub mod form;
pub mod settings;
pub mod status;
pub mod workflow;

pub use config::ConfigManager;
pub use form::{FieldSource, FormValues, extract};
pub use settings::{ExportSettings, ProbeSettings, ToolPaths};
pub use status::{ProbeState, ProbeTicket, StatusLevel, StatusMessage, StatusPresenter};
pub use workflow::{ClipboardWriter, ExportWorkflow, MemoryClipboard};
