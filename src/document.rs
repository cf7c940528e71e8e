//! JSON/TOML document loading
//!
//! Documents are read into `serde_json::Value` so that fragments from either
//! format can be merged together.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick a format from the file extension. Unknown extensions are read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Read and parse a document from disk.
pub fn load_document(path: &Path) -> Result<Value> {
    let path_str = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| Error::Document {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    let format = DocumentFormat::from_path(path);
    tracing::debug!(path = %path_str, ?format, bytes = contents.len(), "loading document");

    parse_document(&contents, format).map_err(|message| Error::Document {
        path: path_str,
        message,
    })
}

/// Parse document text in the given format.
pub fn parse_document(
    contents: &str,
    format: DocumentFormat,
) -> std::result::Result<Value, String> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str(contents).map_err(|e| format!("JSON parse error: {}", e))
        }
        DocumentFormat::Toml => {
            let value: toml::Value =
                toml::from_str(contents).map_err(|e| format!("TOML parse error: {}", e))?;
            Ok(toml_to_json(value))
        }
    }
}

/// Convert a TOML value to JSON.
///
/// Datetimes become strings; non-finite floats become null.
pub fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.TOML")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("swagger")), DocumentFormat::Json);
    }

    #[test]
    fn test_toml_to_json() {
        let value = parse_document(
            "title = \"Pets\"\nversion = 2\nratio = 0.5\ntags = [\"a\", \"b\"]\n[info]\nopen = true\n",
            DocumentFormat::Toml,
        )
        .unwrap();

        assert_eq!(
            value,
            json!({
                "title": "Pets",
                "version": 2,
                "ratio": 0.5,
                "tags": ["a", "b"],
                "info": {"open": true}
            })
        );
    }

    #[test]
    fn test_toml_datetime_becomes_string() {
        let value =
            parse_document("released = 1979-05-27T07:32:00Z\n", DocumentFormat::Toml).unwrap();
        assert_eq!(value["released"], "1979-05-27T07:32:00Z");
    }

    #[test]
    fn test_parse_errors_name_the_format() {
        let err = parse_document("{not json", DocumentFormat::Json).unwrap_err();
        assert!(err.starts_with("JSON parse error"));

        let err = parse_document("= nope", DocumentFormat::Toml).unwrap_err();
        assert!(err.starts_with("TOML parse error"));
    }

    #[test]
    fn test_load_document_from_disk() {
        let mut temp = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(temp, "[paths.\"/pets\"]").unwrap();
        writeln!(temp, "summary = \"List pets\"").unwrap();

        let value = load_document(temp.path()).unwrap();
        assert_eq!(value["paths"]["/pets"]["summary"], "List pets");
    }

    #[test]
    fn test_load_document_with_debug_logging() {
        let mut temp = Builder::new().suffix(".json").tempfile().unwrap();
        write!(temp, r#"{{"openapi": "3.0.0"}}"#).unwrap();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let value = tracing::subscriber::with_default(subscriber, || load_document(temp.path()))
            .unwrap();

        assert_eq!(value["openapi"], "3.0.0");
    }

    #[test]
    fn test_load_missing_document() {
        let err = load_document(Path::new("/nonexistent/swagger.json")).unwrap_err();
        assert!(matches!(err, Error::Document { .. }));
        assert!(err.to_string().contains("/nonexistent/swagger.json"));
    }
}
