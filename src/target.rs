//! Target type descriptors

use std::fmt;

/// Kind of a target type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Object,
    Interface,
    Union,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeKind::Object => "Object",
            TypeKind::Interface => "Interface",
            TypeKind::Union => "Union",
        })
    }
}

/// The schema type a global ID must resolve to
///
/// Interfaces and unions carry the names of their possible concrete types,
/// which is the set a decoded ID's type is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    /// Any concrete named type: an object, or a scalar or enum used as an ID target
    Object {
        name: String,
    },
    Interface {
        name: String,
        implementors: Vec<String>,
    },
    Union {
        name: String,
        members: Vec<String>,
    },
}

impl TargetType {
    pub fn object(name: impl Into<String>) -> Self {
        TargetType::Object { name: name.into() }
    }

    /// Same as [`TargetType::object`], for targets that aren't object types
    pub fn concrete(name: impl Into<String>) -> Self {
        Self::object(name)
    }

    pub fn interface<I, S>(name: impl Into<String>, implementors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TargetType::Interface {
            name: name.into(),
            implementors: implementors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn union<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TargetType::Union {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TargetType::Object { name }
            | TargetType::Interface { name, .. }
            | TargetType::Union { name, .. } => name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TargetType::Object { .. } => TypeKind::Object,
            TargetType::Interface { .. } => TypeKind::Interface,
            TargetType::Union { .. } => TypeKind::Union,
        }
    }

    /// Interfaces and unions can't be the concrete type of an ID
    pub fn is_abstract(&self) -> bool {
        !matches!(self, TargetType::Object { .. })
    }

    /// Names a decoded global ID's type may take for this target
    ///
    /// A concrete type only accepts itself.
    pub fn possible_types(&self) -> Vec<&str> {
        match self {
            TargetType::Object { name } => vec![name.as_str()],
            TargetType::Interface { implementors, .. } => {
                implementors.iter().map(String::as_str).collect()
            }
            TargetType::Union { members, .. } => members.iter().map(String::as_str).collect(),
        }
    }

    pub fn accepts(&self, type_name: &str) -> bool {
        self.possible_types().contains(&type_name)
    }
}
