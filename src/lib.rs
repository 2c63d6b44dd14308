//! Shared library for resolving reference collection kinds.
//!
//! The curation platform sorts its artifacts into schemas, mapping tables and
//! datasets. Callers receive those category names as free-form strings (path
//! parameters, CLI args, config) and need them turned into a closed type or
//! rejected outright. The public surface here is that resolver plus the input
//! helpers and record format used by the `resolve-collection` binary.

use anyhow::{Context, Result, bail};
use serde_json::Value;

pub mod collection;
pub mod report;

pub use collection::{CollectionKind, InvalidCollectionKind, resolve};
pub use report::{OutputFormat, Resolution, Summary, resolve_all};

/// Split comma- or whitespace-delimited configuration lists into tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// Parse collection names from a stream, accepting JSON or plain lines.
///
/// A JSON array of strings or a single JSON string is taken as-is. Anything
/// else is read one name per line. Lines are not trimmed beyond their
/// terminator so padded names still reach the resolver (and get rejected);
/// blank lines are skipped.
pub fn parse_name_stream(input: &str) -> Result<Vec<String>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("No input provided on stdin");
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        match value {
            Value::Array(items) => {
                let names = items
                    .into_iter()
                    .map(serde_json::from_value::<String>)
                    .collect::<Result<Vec<_>, _>>()
                    .context("Unable to parse JSON array of collection names")?;
                if names.is_empty() {
                    bail!("JSON array contained no collection names");
                }
                return Ok(names);
            }
            Value::String(name) => return Ok(vec![name]),
            // Bare words like `true` or `1` fall through to line parsing.
            _ => {}
        }
    }

    let names: Vec<String> = input
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();

    if names.is_empty() {
        bail!("No collection names found in input stream");
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_handles_commas_and_spaces() {
        assert_eq!(
            split_list("schema, dataset  MAPPING_TABLE,,"),
            vec!["schema", "dataset", "MAPPING_TABLE"]
        );
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn name_stream_accepts_json_array() {
        let names = parse_name_stream("[\"schema\", \" DATASET\"]").unwrap();
        assert_eq!(names, vec!["schema", " DATASET"]);
    }

    #[test]
    fn name_stream_accepts_single_json_string() {
        assert_eq!(parse_name_stream("\"Mapping_Table\"\n").unwrap(), vec![
            "Mapping_Table"
        ]);
    }

    #[test]
    fn name_stream_rejects_non_string_array_items() {
        assert!(parse_name_stream("[\"schema\", 3]").is_err());
    }

    #[test]
    fn name_stream_reads_lines_verbatim() {
        let names = parse_name_stream("schema\r\n dataset\n\nfoo\n").unwrap();
        assert_eq!(names, vec!["schema", " dataset", "foo"]);
    }

    #[test]
    fn name_stream_falls_back_to_lines_for_json_scalars() {
        assert_eq!(parse_name_stream("true").unwrap(), vec!["true"]);
    }

    #[test]
    fn name_stream_rejects_empty_json_array() {
        let err = parse_name_stream("[]").unwrap_err();
        assert!(err.to_string().contains("no collection names"));
        assert!(parse_name_stream(" [ ]\n").is_err());
    }

    #[test]
    fn name_stream_rejects_empty_input() {
        assert!(parse_name_stream("").is_err());
        assert!(parse_name_stream("  \n\t\n").is_err());
    }
}
