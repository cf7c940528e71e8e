//! Immutable records for API helper code.
//!
//! A [`Record`] is fixed at construction and exposes its fields through
//! key-style (`record["x"]`) and attribute-style (`record.attr("x")`)
//! lookups. Every mutation entry point fails with
//! [`RecordError::ImmutabilityViolation`], and both textual renderings
//! (`Display` and `Debug`) are JSON objects.

mod error;
mod record;

pub use error::{Mutation, RecordError};
pub use record::Record;

#[doc(hidden)]
pub use serde_json as __serde_json;

/// Build a [`Record`] from `name = value` pairs.
///
/// Values go through `serde_json::Value::from`, so integers, floats,
/// strings, booleans and ready-made `Value`s are all accepted.
///
/// ```
/// use swaggerf_record::immutable;
///
/// let point = immutable!(x = 2, y = 23);
/// assert_eq!(point["x"], 2);
/// assert_eq!(point.attr("y").unwrap(), 23);
/// ```
#[macro_export]
macro_rules! immutable {
    () => {
        $crate::Record::default()
    };
    ($($name:ident = $value:expr),+ $(,)?) => {
        $crate::Record::from_fields([
            $((stringify!($name), $crate::__serde_json::Value::from($value))),+
        ])
    };
}
