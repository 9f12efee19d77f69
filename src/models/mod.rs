pub mod field;
pub mod record;

pub use field::{FieldId, FieldPath, FieldValue, OrientationFlag, Section};
pub use record::{OrientationFlags, Record};
