//! Stateless helpers called by the request/response layer
//!
//! - [`merge`]: recursive mapping merge with overlay precedence
//! - [`casing`]: camelCase to snake_case
//! - [`response`]: handler return normalization

pub mod casing;
pub mod merge;
pub mod response;

pub use casing::camel_to_dash;
pub use merge::{deep_merge, merge, merge_layers};
pub use response::{
    unpack, unpack_with_code, Headers, ReturnValue, UnpackError, Unpacked, DEFAULT_STATUS_CODE,
};
