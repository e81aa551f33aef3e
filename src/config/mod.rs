mod build;
mod choices;
mod error;
pub mod loader;

pub use build::{build_tracker, build_tracker_from_value};
pub use choices::*;
pub use error::BuildError;
pub use loader::{FieldKind, FieldSpec, param_fields, parse_choice, tracker_from_json};
