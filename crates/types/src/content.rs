use crate::graph::GraphConfig;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;

/// The smallest renderable item of a problem.
///
/// On the wire a unit is `{ "type": ..., "value": ... }`. The `type` string is
/// the only discriminant; a type this crate doesn't know becomes
/// [`ContentUnit::Unknown`] rather than a parse failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentUnit {
    /// Opaque renderable content, passed through unchanged. Usually a string;
    /// other JSON values are kept as-is and printed as JSON text.
    Text(Value),
    /// A graph visualization drawn by the external graph engine.
    Graph(GraphConfig),
    /// A multiple-choice set. Sub-units are one level deep.
    Options(Vec<ContentUnit>),
    /// A unit whose `type` is outside `text`/`graph`/`options`.
    Unknown { kind: String, value: Value },
}

impl ContentUnit {
    pub fn text(content: impl Into<String>) -> Self {
        ContentUnit::Text(Value::String(content.into()))
    }

    pub fn graph(config: GraphConfig) -> Self {
        ContentUnit::Graph(config)
    }

    pub fn options(units: impl IntoIterator<Item = ContentUnit>) -> Self {
        ContentUnit::Options(units.into_iter().collect())
    }

    /// The wire name of this unit's type.
    pub fn kind(&self) -> &str {
        match self {
            ContentUnit::Text(_) => "text",
            ContentUnit::Graph(_) => "graph",
            ContentUnit::Options(_) => "options",
            ContentUnit::Unknown { kind, .. } => kind,
        }
    }

    pub fn is_graph(&self) -> bool {
        matches!(self, ContentUnit::Graph(_))
    }

    pub fn is_options(&self) -> bool {
        matches!(self, ContentUnit::Options(_))
    }
}

/// The printable form of a text unit's value.
pub fn printable_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Serialize, Deserialize)]
struct RawUnit {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Value,
}

impl<'de> Deserialize<'de> for ContentUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RawUnit { kind, value } = RawUnit::deserialize(deserializer)?;
        match kind.as_str() {
            "text" => Ok(ContentUnit::Text(value)),
            "graph" => serde_json::from_value(value)
                .map(ContentUnit::Graph)
                .map_err(de::Error::custom),
            "options" => serde_json::from_value(value)
                .map(ContentUnit::Options)
                .map_err(de::Error::custom),
            _ => Ok(ContentUnit::Unknown { kind, value }),
        }
    }
}

impl Serialize for ContentUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = match self {
            ContentUnit::Text(value) => value.clone(),
            ContentUnit::Graph(config) => {
                serde_json::to_value(config).map_err(serde::ser::Error::custom)?
            }
            ContentUnit::Options(units) => {
                serde_json::to_value(units).map_err(serde::ser::Error::custom)?
            }
            ContentUnit::Unknown { value, .. } => value.clone(),
        };
        RawUnit {
            kind: self.kind().to_string(),
            value,
        }
        .serialize(serializer)
    }
}
