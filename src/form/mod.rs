//! Form schema, rendering, state and the interactive session.

pub mod label;
pub mod render;
pub mod schema;
pub mod session;
pub mod state;

pub use label::derive_label;
pub use render::{Control, render_field, render_form};
pub use schema::{FieldKind, FieldSpec};
pub use state::{FormSession, apply_change};
