use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One auto-complete match.
///
/// Built once per successful parse and never mutated. `reading` holds a
/// pronunciation or gloss; what exactly depends on the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub word: String,
    pub reading: String,
    pub meanings: Vec<String>,
    pub entry_id: String,
    /// Dictionary tag as returned by the service, normally equal to the
    /// requested selector's code.
    pub dict_type: String,
}

impl DictEntry {
    /// Plain field-name-to-value mapping, for serialization by callers that
    /// do not want the struct itself.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("word".to_string(), Value::String(self.word.clone()));
        map.insert("reading".to_string(), Value::String(self.reading.clone()));
        map.insert(
            "meanings".to_string(),
            Value::Array(
                self.meanings
                    .iter()
                    .map(|m| Value::String(m.clone()))
                    .collect(),
            ),
        );
        map.insert("entry_id".to_string(), Value::String(self.entry_id.clone()));
        map.insert(
            "dict_type".to_string(),
            Value::String(self.dict_type.clone()),
        );
        map
    }
}
