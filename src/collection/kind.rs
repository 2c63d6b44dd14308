use crate::collection::error::InvalidCollectionKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Category a reference collection belongs to.
///
/// The set is closed: there is no `Other` variant, and unknown names are
/// rejected by [`resolve`] instead of being carried along.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CollectionKind {
    Schema,
    MappingTable,
    Dataset,
}

impl CollectionKind {
    /// Every kind, in declaration order.
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::Schema,
        CollectionKind::MappingTable,
        CollectionKind::Dataset,
    ];

    /// Canonical upper-case name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKind::Schema => "SCHEMA",
            CollectionKind::MappingTable => "MAPPING_TABLE",
            CollectionKind::Dataset => "DATASET",
        }
    }

    /// Plural route segment the UI browses items of this kind under.
    pub fn route_segment(self) -> &'static str {
        match self {
            CollectionKind::Schema => "schemas",
            CollectionKind::MappingTable => "mappingTables",
            CollectionKind::Dataset => "datasets",
        }
    }
}

/// Resolve a free-form name to a collection kind.
///
/// Matching is case-insensitive over the whole string, one character at a
/// time: characters match when their simple uppercase forms agree, or when
/// the lowercase forms of those agree. This folds `ſ` to `s` and `ı` to `i`
/// without consulting any locale. Nothing is trimmed, so `" SCHEMA"` is
/// rejected just like `"foo"`.
pub fn resolve(input: &str) -> Result<CollectionKind, InvalidCollectionKind> {
    CollectionKind::ALL
        .into_iter()
        .find(|kind| eq_ignore_case(kind.as_str(), input))
        .ok_or_else(|| InvalidCollectionKind::new(input))
}

fn eq_ignore_case(lhs: &str, rhs: &str) -> bool {
    let mut lhs = lhs.chars();
    let mut rhs = rhs.chars();
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if chars_eq_ignore_case(a, b) => {}
            _ => return false,
        }
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}

/// Single-character uppercase mapping; multi-character expansions such as
/// `ß` -> `SS` leave the character unchanged.
fn simple_upper(c: char) -> char {
    single_char(c.to_uppercase()).unwrap_or(c)
}

fn simple_lower(c: char) -> char {
    // Full lowercase of U+0130 is `i` + U+0307; its simple mapping is `i`.
    if c == '\u{130}' {
        return 'i';
    }
    single_char(c.to_lowercase()).unwrap_or(c)
}

fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = InvalidCollectionKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        resolve(value)
    }
}

impl Serialize for CollectionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CollectionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        resolve(&value).map_err(serde::de::Error::custom)
    }
}
