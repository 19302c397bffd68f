//! Datensätze der externen Datenquelle und ihre Primärschlüssel.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Standard-Name des Primärschlüsselfeldes.
pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Primärschlüsselwert eines Datensatzes (stabile Overlay-Kennung)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Ganzzahliger Schlüssel
    Int(i64),
    /// Text-Schlüssel (UUID, Slug, …)
    Text(String),
}

impl RecordId {
    /// Liest einen Schlüssel aus einem JSON-Wert.
    ///
    /// Ganzzahlige Zahlen (auch `3.0`) werden zu `Int`, nicht-leere Strings
    /// zu `Text`. Ganzzahlen über `i64::MAX` bleiben als `Text` erhalten.
    /// Alles andere ergibt keinen Schlüssel.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(RecordId::Int(i))
                } else if let Some(u) = n.as_u64() {
                    log::debug!("Schlüssel {u} außerhalb von i64, wird als Text geführt");
                    Some(RecordId::Text(u.to_string()))
                } else {
                    n.as_f64().and_then(integral_f64).map(RecordId::Int)
                }
            }
            Value::String(s) if !s.is_empty() => Some(RecordId::Text(s.clone())),
            _ => None,
        }
    }

    /// JSON-Darstellung (für Filter-Prädikate).
    pub fn to_value(&self) -> Value {
        match self {
            RecordId::Int(i) => Value::from(*i),
            RecordId::Text(s) => Value::from(s.as_str()),
        }
    }
}

/// Ganzzahliger Float im `i64`-Bereich.
fn integral_f64(value: f64) -> Option<i64> {
    // 2^63 ist als f64 exakt darstellbar, `i64::MAX as f64` rundet dagegen auf
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (value.fract() == 0.0 && (-LIMIT..LIMIT).contains(&value)).then_some(value as i64)
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(i) => write!(f, "{i}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_owned())
    }
}

/// Ein Datensatz: benannte Felder in Quell-Reihenfolge. Read-only für diese Bibliothek.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Erstellt einen leeren Datensatz.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: setzt ein Feld.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Liefert den Wert eines Feldes.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Primärschlüssel unter dem gegebenen Feldnamen.
    pub fn id(&self, primary_key: &str) -> Option<RecordId> {
        self.get(primary_key).and_then(RecordId::from_value)
    }

    /// Text eines Feldes für Labels: Strings unverändert, Zahlen/Bools per Display.
    pub fn label_text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Geordnete Datensatz-Menge eines Render-Zyklus.
#[derive(Clone, PartialEq)]
pub struct RecordSet {
    /// Datensätze in Quell-Reihenfolge
    pub records: Vec<Record>,
    /// Name des Primärschlüsselfeldes
    pub primary_key: String,
}

// Kompakt, damit das Command-Log keine kompletten Datensätze enthält.
impl fmt::Debug for RecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSet")
            .field("len", &self.records.len())
            .field("primary_key", &self.primary_key)
            .finish()
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RecordSet {
    /// Erstellt eine Menge mit Standard-Primärschlüssel `id`.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            primary_key: DEFAULT_PRIMARY_KEY.to_owned(),
        }
    }

    /// Builder: abweichender Primärschlüssel.
    pub fn with_primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = primary_key.into();
        self
    }

    /// Anzahl der Datensätze.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true`, wenn keine Datensätze vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sucht den Datensatz mit dem gegebenen Primärschlüssel.
    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.id(&self.primary_key).as_ref() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_id_from_value_accepts_integers_and_strings() {
        assert_eq!(RecordId::from_value(&json!(7)), Some(RecordId::Int(7)));
        assert_eq!(
            RecordId::from_value(&json!("a-1")),
            Some(RecordId::Text("a-1".into()))
        );
        assert_eq!(RecordId::from_value(&json!(1.5)), None);
        assert_eq!(RecordId::from_value(&json!("")), None);
        assert_eq!(RecordId::from_value(&Value::Null), None);
    }

    #[test]
    fn record_id_from_value_accepts_integral_floats() {
        assert_eq!(RecordId::from_value(&json!(3.0)), Some(RecordId::Int(3)));
        assert_eq!(RecordId::from_value(&json!(-12.0)), Some(RecordId::Int(-12)));
        assert_eq!(RecordId::from_value(&json!(1e300)), None);
        assert_eq!(
            RecordId::from_value(&json!(u64::MAX)),
            Some(RecordId::Text(u64::MAX.to_string()))
        );
    }

    #[test]
    fn find_uses_configured_primary_key() {
        let set = RecordSet::new(vec![
            Record::new().with("uid", "x").with("id", 1),
            Record::new().with("uid", "y").with("id", 2),
        ])
        .with_primary_key("uid");

        let found = set.find(&RecordId::from("y")).expect("Datensatz y erwartet");
        assert_eq!(found.get("id"), Some(&json!(2)));
        assert!(set.find(&RecordId::Int(2)).is_none());
    }

    #[test]
    fn label_text_stringifies_scalars() {
        let record = Record::new()
            .with("name", "Depot")
            .with("no", 12)
            .with("tags", json!(["a"]));
        assert_eq!(record.label_text("name").as_deref(), Some("Depot"));
        assert_eq!(record.label_text("no").as_deref(), Some("12"));
        assert_eq!(record.label_text("tags"), None);
        assert_eq!(record.label_text("missing"), None);
    }

    #[test]
    fn record_deserializes_from_json_object() {
        let record: Record =
            serde_json::from_value(json!({"id": 3, "geo": "POINT(1;2)"})).expect("gültiges JSON");
        assert_eq!(record.id("id"), Some(RecordId::Int(3)));
    }
}
