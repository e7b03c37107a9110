//! Decoding of the auto-complete payload.
//!
//! The wire format is an undocumented positional array-of-arrays: an item is
//! six value lists in fixed order, nothing is named. All positional access
//! lives in this module; sparse or wrong-typed leaves degrade to empty
//! values, while a broken item shape is a hard validation failure.

use serde_json::Value;

use sajeon_types::entry::DictEntry;
use sajeon_types::error::DictError;

/// Positional field slots every well-formed item carries.
const ITEM_FIELDS: usize = 6;

const FIELD_WORD: usize = 0;
const FIELD_READING: usize = 1;
// Slot 2 is populated on the wire but never consumed.
const FIELD_MEANINGS: usize = 3;
const FIELD_ENTRY_ID: usize = 4;
const FIELD_DICT_TYPE: usize = 5;

/// Read the string at `data[i][j]`, degrading to `""` on any shape problem:
/// index out of range at either level, non-array level, non-string leaf.
/// Never panics.
pub fn safe_get_nested(data: &Value, i: usize, j: usize) -> String {
    data.get(i)
        .and_then(|inner| inner.get(j))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Decode a service payload into an entry, or `None` when the service found
/// nothing.
///
/// Contract, in order:
/// 1. the top level must be an object with an `items` array;
/// 2. an empty `items`, or an absent/empty first group, means no match;
/// 3. the first item must decompose into at least [`ITEM_FIELDS`] value
///    lists, anything else is a hard failure;
/// 4. fields are read positionally with [`safe_get_nested`].
pub fn parse_response(raw: &Value) -> Result<Option<DictEntry>, DictError> {
    let items = raw
        .as_object()
        .and_then(|map| map.get("items"))
        .and_then(Value::as_array)
        .ok_or_else(|| DictError::InvalidResponse("missing 'items' field".to_string()))?;

    let group = match items.first() {
        None | Some(Value::Null) => return Ok(None),
        Some(group) => group,
    };
    if group.as_array().is_some_and(|g| g.is_empty()) {
        return Ok(None);
    }

    let item = group
        .get(0)
        .ok_or_else(|| DictError::InvalidResponse("Invalid item structure".to_string()))?;

    let fields = item
        .as_array()
        .filter(|f| f.len() >= ITEM_FIELDS && f.iter().take(ITEM_FIELDS).all(Value::is_array))
        .ok_or_else(|| DictError::InvalidResponse("Invalid item structure".to_string()))?;

    let meanings = fields[FIELD_MEANINGS]
        .as_array()
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    Ok(Some(DictEntry {
        word: safe_get_nested(item, FIELD_WORD, 0),
        reading: safe_get_nested(item, FIELD_READING, 0),
        meanings,
        entry_id: safe_get_nested(item, FIELD_ENTRY_ID, 0),
        dict_type: safe_get_nested(item, FIELD_DICT_TYPE, 0),
    }))
}
