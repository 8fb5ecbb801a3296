// Data structures and types

pub mod field;
pub mod method;
pub mod params;

pub use field::{FieldDefault, FieldKind, FieldSpec, PLACEHOLDER_ES_URL};
pub use method::{ExportMethod, FlagSpec, FlagStyle, MethodDescriptor, QUICK_START_GUIDE};
pub use params::{ParameterRecord, ParameterValue};
