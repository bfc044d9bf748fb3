//! Global ID encoding/decoding

use async_graphql::{Name, Value};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde::Serialize;

use crate::GlobalIdError;

/// Standard alphabet, padded on encode; padding optional on decode
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A decoded global ID: the concrete type name plus the type-local id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedGlobalId {
    #[serde(rename = "type")]
    type_name: String,
    id: String,
}

impl ResolvedGlobalId {
    /// Build a resolved ID. Meant for [`GlobalIdCodec::decode`] implementations;
    /// resolvers receive these from the scalar types instead of building them.
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn into_parts(self) -> (String, String) {
        (self.type_name, self.id)
    }
}

impl From<ResolvedGlobalId> for Value {
    fn from(resolved: ResolvedGlobalId) -> Self {
        let mut fields = async_graphql::indexmap::IndexMap::new();
        fields.insert(Name::new("type"), Value::String(resolved.type_name));
        fields.insert(Name::new("id"), Value::String(resolved.id));
        Value::Object(fields)
    }
}

/// Encodes a `(type name, local id)` pair into an opaque string and back
pub trait GlobalIdCodec: Send + Sync {
    fn encode(&self, type_name: &str, id: &str) -> String;

    fn decode(&self, global_id: &str) -> crate::Result<ResolvedGlobalId>;
}

/// Relay's `toGlobalId`/`fromGlobalId` encoding: base64 of `"<type>:<id>"`
#[derive(Debug, Clone, Copy, Default)]
pub struct RelayCodec;

impl GlobalIdCodec for RelayCodec {
    fn encode(&self, type_name: &str, id: &str) -> String {
        BASE64.encode(format!("{}:{}", type_name, id).as_bytes())
    }

    fn decode(&self, global_id: &str) -> crate::Result<ResolvedGlobalId> {
        let bytes = BASE64
            .decode(global_id.as_bytes())
            .map_err(|_| GlobalIdError::Malformed(global_id.to_string()))?;
        let unbased = String::from_utf8(bytes)
            .map_err(|_| GlobalIdError::Malformed(global_id.to_string()))?;

        // The id may itself contain ':', so only the first one delimits.
        let (type_name, id) = unbased
            .split_once(':')
            .ok_or_else(|| GlobalIdError::Malformed(global_id.to_string()))?;
        Ok(ResolvedGlobalId::new(type_name, id))
    }
}
