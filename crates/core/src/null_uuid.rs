//! Nullable UUID
//!
//! [`NullUuid`] pairs a UUID with an explicit validity flag so a column or
//! field can be absent independently of the UUID's own nil value.
//!
//! ## Encodings
//!
//! | State | JSON | Text | Display |
//! |-------|------|------|---------|
//! | invalid | `null` | empty | `null` |
//! | valid | `"<uuid>"` | `<uuid>` | `<uuid>` |
//!
//! JSON decoding also accepts the nullable-string object shape
//! `{"Valid": true, "String": "<uuid>"}`. Field names are matched
//! case-insensitively and unknown fields are ignored.
//!
//! Every decode path sets the flag and the content together: an input that
//! means "no value" leaves `{ uuid: nil, valid: false }`, and so does a
//! failed decode.

use crate::error::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

/// Field carrying the validity flag in the nullable-string shape
const VALID_FIELD: &str = "Valid";
/// Field carrying the UUID text in the nullable-string shape
const STRING_FIELD: &str = "String";

/// A UUID that may be NULL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullUuid {
    /// The value; nil when invalid by convention only
    pub uuid: Uuid,
    /// Whether `uuid` holds a value
    pub valid: bool,
}

impl NullUuid {
    /// Explicit construction
    pub fn new(uuid: Uuid, valid: bool) -> Self {
        NullUuid { uuid, valid }
    }

    /// Parse canonical UUID text into a valid value
    pub fn parse_str(s: &str) -> Result<Self> {
        Ok(Uuid::parse_str(s)?.into())
    }

    /// Build a valid value from 16 raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Uuid::from_slice(bytes)?.into())
    }

    /// Invalid for `None`, valid with the referenced value otherwise
    pub fn from_option(uuid: Option<&Uuid>) -> Self {
        match uuid {
            Some(id) => NullUuid::from(*id),
            None => NullUuid::default(),
        }
    }

    /// Set to a valid value
    pub fn set_valid(&mut self, uuid: Uuid) {
        self.uuid = uuid;
        self.valid = true;
    }

    /// Reset to invalid with nil content
    pub fn set_null(&mut self) {
        *self = NullUuid::default();
    }

    /// Whether a value is present
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// A copy of the value when valid
    pub fn as_option(&self) -> Option<Uuid> {
        self.valid.then_some(self.uuid)
    }

    /// Text form: empty when invalid
    pub fn marshal_text(&self) -> String {
        if self.valid {
            self.uuid.to_string()
        } else {
            String::new()
        }
    }

    /// Decode the text form
    ///
    /// Empty input means "no value" and is not an error.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        if text.is_empty() {
            self.set_null();
            return Ok(());
        }
        match Uuid::try_parse_ascii(text) {
            Ok(id) => {
                self.set_valid(id);
                Ok(())
            }
            Err(e) => {
                self.set_null();
                Err(e.into())
            }
        }
    }

    /// Encode as JSON: `null` when invalid, a quoted UUID otherwise
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON bytes
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let value: JsonValue = serde_json::from_slice(data)?;
        Self::from_json_value(&value)
    }

    /// Decode from JSON bytes into `self`
    ///
    /// On error `self` is reset to invalid.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        match Self::from_json(data) {
            Ok(decoded) => {
                *self = decoded;
                Ok(())
            }
            Err(e) => {
                self.set_null();
                Err(e)
            }
        }
    }

    /// Decode from an already parsed JSON value
    pub fn from_json_value(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Null => Ok(NullUuid::default()),
            JsonValue::String(s) => Self::parse_str(s),
            JsonValue::Object(map) => {
                let mut valid = false;
                let mut text: Option<&str> = None;

                for (key, field) in map {
                    if key.eq_ignore_ascii_case(VALID_FIELD) {
                        valid = match field {
                            JsonValue::Bool(b) => *b,
                            JsonValue::Null => false,
                            other => return Err(shape_error(other, VALID_FIELD)),
                        };
                    } else if key.eq_ignore_ascii_case(STRING_FIELD) {
                        text = match field {
                            JsonValue::String(s) => Some(s),
                            JsonValue::Null => None,
                            other => return Err(shape_error(other, STRING_FIELD)),
                        };
                    }
                }

                if !valid {
                    return Ok(NullUuid::default());
                }
                Self::parse_str(text.unwrap_or_default())
            }
            other => Err(Error::JsonShape {
                found: json_kind(other).to_string(),
            }),
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn shape_error(value: &JsonValue, field: &str) -> Error {
    Error::JsonShape {
        found: format!("object with {} field of type {}", field, json_kind(value)),
    }
}

impl From<Uuid> for NullUuid {
    fn from(uuid: Uuid) -> Self {
        NullUuid { uuid, valid: true }
    }
}

impl From<Option<Uuid>> for NullUuid {
    fn from(uuid: Option<Uuid>) -> Self {
        NullUuid::from_option(uuid.as_ref())
    }
}

impl From<NullUuid> for Option<Uuid> {
    fn from(n: NullUuid) -> Self {
        n.as_option()
    }
}

impl fmt::Display for NullUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{}", self.uuid)
        } else {
            f.write_str("null")
        }
    }
}

impl Serialize for NullUuid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.valid {
            serializer.serialize_some(&self.uuid)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Human-readable formats accept every JSON shape of [`NullUuid::from_json_value`];
/// compact formats read back the `Option<Uuid>` written by `Serialize`.
///
/// A missing struct field decodes as invalid.
impl<'de> Deserialize<'de> for NullUuid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if !deserializer.is_human_readable() {
            return Option::<Uuid>::deserialize(deserializer).map(NullUuid::from);
        }
        match Option::<JsonValue>::deserialize(deserializer)? {
            None => Ok(NullUuid::default()),
            Some(value) => NullUuid::from_json_value(&value).map_err(D::Error::custom),
        }
    }
}
