//! Input document model.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every top-level key other than `keys` is the decimal x-coordinate of one
//! point whose y-coordinate is `value` written in `base`. Entries keep their
//! document order, and a repeated key is kept twice rather than overwritten.

use std::fmt;
use std::str::FromStr;

use math::radix::{self, MAX_RADIX, MIN_RADIX};
use math::Point;
use num_bigint::BigInt;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{SolveError, SolveResult};

/// An integer that may be written either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(u64),
    Text(String),
}

impl Numeric {
    fn coerce(&self, field: &str) -> SolveResult<u64> {
        match self {
            Numeric::Number(n) => Ok(*n),
            Numeric::Text(s) => s.trim().parse().map_err(|_| {
                SolveError::malformed(format!(
                    "{field} must be a non-negative integer, got {s:?}"
                ))
            }),
        }
    }
}

impl From<u64> for Numeric {
    fn from(n: u64) -> Self {
        Numeric::Number(n)
    }
}

/// The `keys` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    /// Declared number of entries. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<Numeric>,
    /// Number of points the interpolation uses.
    pub k: Numeric,
}

impl Keys {
    /// Required point count `k`, which must be at least one.
    pub fn threshold(&self) -> SolveResult<usize> {
        let k = self.k.coerce("keys.k")?;
        let k = usize::try_from(k).map_err(|_| {
            SolveError::malformed(format!("keys.k {k} is too large"))
        })?;
        if k == 0 {
            return Err(SolveError::malformed("keys.k must be at least 1"));
        }
        Ok(k)
    }

    pub fn declared_count(&self) -> SolveResult<Option<u64>> {
        self.n.as_ref().map(|n| n.coerce("keys.n")).transpose()
    }
}

/// One encoded point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub base: Numeric,
    pub value: String,
}

impl Entry {
    pub fn new(base: u32, value: impl Into<String>) -> Self {
        Entry {
            base: Numeric::Number(base.into()),
            value: value.into(),
        }
    }

    fn radix(&self, key: &str) -> SolveResult<u32> {
        let field = format!("{key}.base");
        let base = self.base.coerce(&field)?;
        u32::try_from(base)
            .ok()
            .filter(|b| (MIN_RADIX..=MAX_RADIX).contains(b))
            .ok_or_else(|| {
                SolveError::malformed(format!(
                    "{field} must lie in {MIN_RADIX}..={MAX_RADIX}, got {base}"
                ))
            })
    }

    /// Decode into a point whose x-coordinate is the decimal `key`.
    pub fn decode(&self, key: &str) -> SolveResult<Point> {
        let x = parse_abscissa(key)?;
        let radix = self.radix(key)?;
        let y = radix::decode(&self.value, radix)
            .map_err(|err| SolveError::from_radix(key, err))?;

        Ok(Point::new(x, y))
    }
}

/// An optional sign followed by ASCII digits. `BigInt` parsing alone would
/// also accept `_` separators.
fn parse_abscissa(key: &str) -> SolveResult<BigInt> {
    let digits = key.strip_prefix(['+', '-']).unwrap_or(key);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SolveError::malformed(format!(
            "entry key {key:?} is not a decimal x-coordinate"
        )));
    }
    BigInt::from_str(key).map_err(|err| {
        SolveError::malformed(format!("entry key {key:?}: {err}"))
    })
}

/// A full input document: the `keys` header plus the encoded points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub keys: Keys,
    pub entries: Vec<(String, Entry)>,
}

impl Serialize for Document {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let len = self.entries.len() + 1;
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("keys", &self.keys)?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with a `keys` header and encoded points")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut map: A,
    ) -> Result<Document, A::Error> {
        let mut keys = None;
        let mut entries = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key == "keys" {
                if keys.is_some() {
                    return Err(de::Error::duplicate_field("keys"));
                }
                keys = Some(map.next_value()?);
            } else {
                let entry: Entry = map.next_value()?;
                entries.push((key, entry));
            }
        }
        let keys = keys.ok_or_else(|| de::Error::missing_field("keys"))?;
        Ok(Document { keys, entries })
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

impl Document {
    pub fn new(k: u64) -> Self {
        Document {
            keys: Keys {
                n: None,
                k: k.into(),
            },
            entries: Vec::new(),
        }
    }

    /// Append an entry keyed by its x-coordinate.
    pub fn with_entry(
        mut self,
        x: impl ToString,
        base: u32,
        value: impl Into<String>,
    ) -> Self {
        self.entries.push((x.to_string(), Entry::new(base, value)));
        self
    }

    /// Decode every entry, stopping at the first failure.
    pub fn points(&self) -> SolveResult<Vec<Point>> {
        self.entries
            .iter()
            .map(|(key, entry)| entry.decode(key))
            .collect()
    }
}

impl FromStr for Document {
    type Err = SolveError;

    fn from_str(s: &str) -> SolveResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
