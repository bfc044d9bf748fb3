//! Global ID scalar types

use std::fmt;
use std::sync::Arc;

use async_graphql::dynamic::{Scalar, TypeRef};
use async_graphql::{ErrorExtensions, Value};

use crate::codec::{GlobalIdCodec, ResolvedGlobalId};
use crate::config::MismatchPolicy;
use crate::description::describe;
use crate::target::TargetType;
use crate::GlobalIdError;

/// Where a global ID scalar is meant to be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarRole {
    /// Non-null mutation input; serializes as a plain string
    Input,

    /// Output fields and arguments; serializes by encoding
    Field,
}

/// A global ID scalar type bound to one target type
///
/// The accepted type names are taken from the target when the scalar is
/// built and never re-read.
#[derive(Clone)]
pub struct GlobalIdScalar {
    name: String,
    description: String,
    role: ScalarRole,
    target: TargetType,
    mismatch: MismatchPolicy,
    codec: Arc<dyn GlobalIdCodec>,
}

impl GlobalIdScalar {
    pub(crate) fn new(
        name: String,
        role: ScalarRole,
        target: TargetType,
        mismatch: MismatchPolicy,
        codec: Arc<dyn GlobalIdCodec>,
    ) -> Self {
        let description = describe(&name, target.name(), target.kind(), &target.possible_types());
        Self {
            name,
            description,
            role,
            target,
            mismatch,
            codec,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn role(&self) -> ScalarRole {
        self.role
    }

    pub fn target(&self) -> &TargetType {
        &self.target
    }

    pub fn possible_types(&self) -> Vec<&str> {
        self.target.possible_types()
    }

    /// Turn a local id into its wire form
    pub fn serialize<V: fmt::Display + ?Sized>(&self, value: &V) -> crate::Result<Value> {
        match self.role {
            ScalarRole::Input => Ok(Value::String(value.to_string())),
            ScalarRole::Field => {
                if self.target.is_abstract() {
                    return Err(GlobalIdError::Unresolvable {
                        name: self.target.name().to_string(),
                        kind: self.target.kind(),
                    });
                }
                Ok(Value::String(
                    self.codec.encode(self.target.name(), &value.to_string()),
                ))
            }
        }
    }

    /// Parse a variable value
    ///
    /// `Ok(None)` is only returned by scalars using [`MismatchPolicy::Null`].
    pub fn parse_value(&self, value: &Value) -> crate::Result<Option<ResolvedGlobalId>> {
        match value {
            Value::String(global_id) => self.parse_str(global_id),
            other => Err(GlobalIdError::MalformedLiteral {
                kind: literal_kind(other),
            }),
        }
    }

    /// Parse an inline literal; only string literals are accepted
    pub fn parse_literal(&self, literal: &Value) -> crate::Result<Option<ResolvedGlobalId>> {
        self.parse_value(literal)
    }

    fn parse_str(&self, global_id: &str) -> crate::Result<Option<ResolvedGlobalId>> {
        let resolved = self.codec.decode(global_id)?;
        if self.target.accepts(resolved.type_name()) {
            return Ok(Some(resolved));
        }

        match self.mismatch {
            MismatchPolicy::Reject => Err(GlobalIdError::TypeMismatch {
                expected: self.target.name().to_string(),
                received: resolved.type_name().to_string(),
                value: global_id.to_string(),
            }),
            MismatchPolicy::Null => {
                tracing::trace!(
                    scalar = %self.name,
                    received = resolved.type_name(),
                    "global id type not accepted, yielding null"
                );
                Ok(None)
            }
        }
    }

    /// Parse an argument inside a resolver
    ///
    /// Errors carry their code in `extensions`. A nulled input ID is reported
    /// as a non-null violation.
    pub fn resolve(&self, value: &Value) -> async_graphql::Result<ResolvedGlobalId> {
        self.parse_value(value)
            .map_err(|e| e.extend())?
            .ok_or_else(|| {
                async_graphql::Error::new(format!(
                    "Expected a non-null value of type `{}`",
                    self.name
                ))
            })
    }

    /// Reference to this scalar for fields and arguments; input IDs are non-null
    pub fn type_ref(&self) -> TypeRef {
        match self.role {
            ScalarRole::Input => TypeRef::named_nn(self.name.clone()),
            ScalarRole::Field => TypeRef::named(self.name.clone()),
        }
    }

    /// Dynamic schema scalar with this scalar's name and description
    ///
    /// No validator is attached. Arguments are checked by [`Self::resolve`] so
    /// clients see the [`GlobalIdError`] message and extensions.
    pub fn to_dynamic(&self) -> Scalar {
        Scalar::new(self.name.clone()).description(self.description.clone())
    }
}

impl fmt::Debug for GlobalIdScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalIdScalar")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("target", &self.target)
            .field("mismatch", &self.mismatch)
            .finish_non_exhaustive()
    }
}

/// GraphQL AST kind name of a literal
fn literal_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "NullValue",
        Value::Number(n) if n.is_f64() => "FloatValue",
        Value::Number(_) => "IntValue",
        Value::String(_) => "StringValue",
        Value::Boolean(_) => "BooleanValue",
        Value::Binary(_) => "BinaryValue",
        Value::Enum(_) => "EnumValue",
        Value::List(_) => "ListValue",
        Value::Object(_) => "ObjectValue",
    }
}
