//! # relay-global-id
//!
//! Relay global ID scalar types for `async-graphql` dynamic schemas.
//!
//! ## Features
//!
//! - **Input IDs** - `<Type>GlobalID` non-null scalars for mutation inputs
//! - **Field IDs** - memoized `GlobalID_<Type>` scalars for output fields and arguments
//! - **Abstract targets** - interfaces and unions accept any of their possible types
//! - **Pluggable codec** - Relay base64 `Type:id` encoding by default
//!
//! ## Usage
//!
//! ```rust
//! use relay_global_id::{GlobalIds, TargetType};
//!
//! let ids = GlobalIds::relay();
//! let user_id = ids.field_type(&TargetType::object("User"));
//!
//! let encoded = user_id.serialize(&42).unwrap();
//! let resolved = user_id.parse_value(&encoded).unwrap().unwrap();
//! assert_eq!(resolved.type_name(), "User");
//! assert_eq!(resolved.id(), "42");
//! ```

pub mod codec;
pub mod config;
pub mod description;
pub mod factory;
pub mod scalar;
pub mod target;

pub use codec::{GlobalIdCodec, RelayCodec, ResolvedGlobalId};
pub use config::{GlobalIdConfig, MismatchPolicy};
pub use factory::GlobalIds;
pub use scalar::{GlobalIdScalar, ScalarRole};
pub use target::{TargetType, TypeKind};

use async_graphql::{ErrorExtensions, Value};
use thiserror::Error;

/// Global ID errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlobalIdError {
    #[error("Query error: Global ID must be a String, but received a {kind}.")]
    MalformedLiteral { kind: &'static str },

    #[error(
        "Expected Relay global ID of type `{expected}`, but received Relay global ID of type {received}."
    )]
    TypeMismatch {
        expected: String,
        received: String,
        value: String,
    },

    #[error(
        "Cannot generate a global ID of type {name}. {name} is a {kind}, which is not a resolvable/queryable type."
    )]
    Unresolvable { name: String, kind: TypeKind },

    #[error("Invalid global ID: {0}")]
    Malformed(String),
}

impl GlobalIdError {
    /// Machine-readable code surfaced in the error's `extensions`
    pub fn code(&self) -> &'static str {
        match self {
            GlobalIdError::MalformedLiteral { .. } => "MALFORMED_LITERAL",
            GlobalIdError::TypeMismatch { .. } => "TYPE_MISMATCH",
            GlobalIdError::Unresolvable { .. } => "UNRESOLVABLE_TYPE",
            GlobalIdError::Malformed(_) => "MALFORMED_GLOBAL_ID",
        }
    }
}

impl ErrorExtensions for GlobalIdError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            match self {
                GlobalIdError::TypeMismatch { value, .. } | GlobalIdError::Malformed(value) => {
                    e.set("value", Value::String(value.clone()))
                }
                _ => {}
            }
        })
    }
}

/// Result type for global ID operations
pub type Result<T> = std::result::Result<T, GlobalIdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GlobalIdError::MalformedLiteral { kind: "IntValue" };
        assert_eq!(
            err.to_string(),
            "Query error: Global ID must be a String, but received a IntValue."
        );

        let err = GlobalIdError::Unresolvable {
            name: "Node".to_string(),
            kind: TypeKind::Interface,
        };
        assert_eq!(
            err.to_string(),
            "Cannot generate a global ID of type Node. Node is a Interface, which is not a resolvable/queryable type."
        );
    }

    #[test]
    fn test_error_extensions() {
        let err = GlobalIdError::TypeMismatch {
            expected: "User".to_string(),
            received: "Post".to_string(),
            value: "UG9zdDo3".to_string(),
        }
        .extend();

        let extensions = err.extensions.expect("extensions set");
        assert_eq!(
            extensions.get("code"),
            Some(&Value::String("TYPE_MISMATCH".to_string()))
        );
        assert_eq!(
            extensions.get("value"),
            Some(&Value::String("UG9zdDo3".to_string()))
        );
    }
}
