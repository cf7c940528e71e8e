//! swaggerf - helper utilities for web-API layers
//!
//! The request/response layer of an API toolkit leans on a handful of pure
//! helpers: a recursive mapping merge, identifier case conversion, response
//! tuple normalization, and an immutable record type. This crate provides
//! them, plus the document loading and layered settings used by the
//! `swaggerf` command-line tool.

pub mod config;
pub mod document;
pub mod error;
pub mod utils;

pub use config::{ConfigError, Settings};
pub use document::{load_document, DocumentFormat};
pub use error::{Error, Result};
pub use utils::{
    camel_to_dash, deep_merge, merge, merge_layers, unpack, unpack_with_code, Headers,
    ReturnValue, UnpackError, Unpacked,
};

pub use swaggerf_record::{immutable, Mutation, Record, RecordError};
