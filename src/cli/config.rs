//! Conversion of CLI arguments into library inputs

use crate::value::Value;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads the JSON documents named on the command line
pub(crate) struct CliInput;

impl CliInput {
    /// Inline JSON text, or `-` to read it from stdin
    pub(crate) fn inline(arg: &str) -> Result<String> {
        if arg == "-" {
            Self::stdin()
        } else {
            Ok(arg.to_string())
        }
    }

    /// A JSON file path, or `-` to read from stdin
    pub(crate) fn file(path: &Path) -> Result<String> {
        if path.as_os_str() == "-" {
            Self::stdin()
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))
        }
    }

    /// Parse JSON text into a template value
    pub(crate) fn parse_value(text: &str) -> Result<Value> {
        let json: serde_json::Value =
            serde_json::from_str(text).context("Input is not valid JSON")?;
        Ok(Value::from(json))
    }

    /// Parse a JSON list into one value per element
    pub(crate) fn parse_list(text: &str) -> Result<Vec<Value>> {
        match Self::parse_value(text)? {
            Value::List(items) => Ok(items),
            other => anyhow::bail!("Expected a JSON list, got {}", other.kind()),
        }
    }

    fn stdin() -> Result<String> {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    }
}
