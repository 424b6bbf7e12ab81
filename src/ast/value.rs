use serde::{Deserialize, Serialize};
use std::fmt;

/// A constant expression: enum values, field defaults and `const` bodies.
///
/// Lists keep their element order. Maps keep source order too, but two maps
/// compare equal whenever they hold the same entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    /// Reference to another constant or enumerator, resolved later.
    Identifier(String),
    Literal(String),
    /// Signed 32-bit; larger integer literals become [`ConstValue::Double`].
    Int(i32),
    Double(f64),
    List(Vec<ConstValue>),
    Map(ConstMap),
}

impl ConstValue {
    pub fn as_map(&self) -> Option<&ConstMap> {
        match self {
            ConstValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Identifier(name) => f.write_str(name),
            ConstValue::Literal(text) => write!(f, "\"{}\"", text),
            ConstValue::Int(n) => write!(f, "{}", n),
            ConstValue::Double(d) => write!(f, "{:?}", d),
            ConstValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            ConstValue::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Entries of a constant map literal in source order.
///
/// `ConstValue` holds doubles, so keys can be neither hashed nor ordered;
/// lookups compare keys structurally. When a key repeats, the last entry wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstMap {
    entries: Vec<(ConstValue, ConstValue)>,
}

impl ConstMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ConstValue, value: ConstValue) {
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &ConstValue) -> Option<&ConstValue> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ConstValue, ConstValue)> {
        self.entries.iter()
    }
}

impl PartialEq for ConstMap {
    fn eq(&self, other: &Self) -> bool {
        self.iter().all(|(key, _)| self.get(key) == other.get(key))
            && other.iter().all(|(key, _)| self.get(key) == other.get(key))
    }
}

impl FromIterator<(ConstValue, ConstValue)> for ConstMap {
    fn from_iter<I: IntoIterator<Item = (ConstValue, ConstValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
