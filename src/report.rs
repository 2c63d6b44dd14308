//! Batch resolution and the record format emitted by `resolve-collection`.
//!
//! Each input name produces exactly one `Resolution`, in input order. A name
//! that fails to resolve is reported alongside the others rather than
//! aborting the batch; callers decide what a rejection means for them.

use crate::collection::{CollectionKind, InvalidCollectionKind, resolve};
use anyhow::{Result, bail};
use serde::Serialize;

/// Outcome of resolving one name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Resolution {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CollectionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Resolution {
    pub fn from_result(input: &str, result: Result<CollectionKind, InvalidCollectionKind>) -> Self {
        match result {
            Ok(kind) => Self {
                input: input.to_string(),
                kind: Some(kind),
                error: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                kind: None,
                error: Some(err.to_string()),
            },
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.kind.is_some()
    }

    /// Render the record in the requested output format (no trailing newline).
    ///
    /// Text records escape the input and error the way `{:?}` does (without
    /// the surrounding quotes) so tabs and newlines cannot split a record.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => Ok(match (&self.kind, &self.error) {
                (Some(kind), _) => format!("{}\t{}", self.input.escape_debug(), kind),
                (None, Some(error)) => {
                    format!("{}\t!{}", self.input.escape_debug(), error.escape_debug())
                }
                (None, None) => bail!("resolution for {:?} has neither kind nor error", self.input),
            }),
        }
    }
}

/// Resolve every name independently, preserving order.
pub fn resolve_all<I, S>(names: I) -> Vec<Resolution>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            Resolution::from_result(name, resolve(name))
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Summary {
    pub resolved: usize,
    pub rejected: usize,
}

impl Summary {
    pub fn from_resolutions(resolutions: &[Resolution]) -> Self {
        let resolved = resolutions.iter().filter(|r| r.is_resolved()).count();
        Self {
            resolved,
            rejected: resolutions.len() - resolved,
        }
    }

    pub fn all_resolved(&self) -> bool {
        self.rejected == 0
    }
}

/// How `resolve-collection` prints records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Tab-separated `input<TAB>KIND`, with `!` marking a rejection.
    Text,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        if value.eq_ignore_ascii_case("json") {
            Ok(OutputFormat::Json)
        } else if value.eq_ignore_ascii_case("text") {
            Ok(OutputFormat::Text)
        } else {
            bail!("Unknown output format: {value} (expected json or text)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn resolve_all_keeps_order_and_isolates_failures() {
        let resolutions = resolve_all(["dataset", "schemaa", "Mapping_Table", ""]);
        assert_eq!(resolutions.len(), 4);
        assert_eq!(resolutions[0].kind, Some(CollectionKind::Dataset));
        assert_eq!(resolutions[1].kind, None);
        assert_eq!(resolutions[1].input, "schemaa");
        assert_eq!(resolutions[2].kind, Some(CollectionKind::MappingTable));
        assert_eq!(resolutions[3].input, "");
        assert!(!resolutions[3].is_resolved());

        let summary = Summary::from_resolutions(&resolutions);
        assert_eq!(
            summary,
            Summary {
                resolved: 2,
                rejected: 2
            }
        );
        assert!(!summary.all_resolved());
    }

    #[test]
    fn json_record_skips_absent_fields() {
        let ok = &resolve_all(["schema"])[0];
        let value: Value = serde_json::from_str(&ok.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value, json!({"input": "schema", "kind": "SCHEMA"}));

        let bad = &resolve_all(["foo"])[0];
        let value: Value = serde_json::from_str(&bad.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "input": "foo",
                "error": "The provided reference collection name is not supported: foo"
            })
        );
    }

    #[test]
    fn text_record_marks_rejections() {
        let resolutions = resolve_all(["DataSet", "nope"]);
        assert_eq!(
            resolutions[0].render(OutputFormat::Text).unwrap(),
            "DataSet\tDATASET"
        );
        assert_eq!(
            resolutions[1].render(OutputFormat::Text).unwrap(),
            "nope\t!The provided reference collection name is not supported: nope"
        );
    }

    #[test]
    fn text_record_escapes_separators_in_input() {
        let resolutions = resolve_all(["x\ny", "a\tb"]);
        let first = resolutions[0].render(OutputFormat::Text).unwrap();
        assert_eq!(
            first,
            "x\\ny\t!The provided reference collection name is not supported: x\\ny"
        );
        assert_eq!(first.lines().count(), 1);

        let second = resolutions[1].render(OutputFormat::Text).unwrap();
        assert_eq!(second.matches('\t').count(), 1);
        assert!(second.starts_with("a\\tb\t!"));
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::parse("yaml").is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn empty_batch_is_all_resolved() {
        let summary = Summary::from_resolutions(&resolve_all(Vec::<String>::new()));
        assert_eq!(summary, Summary::default());
        assert!(summary.all_resolved());
    }
}
