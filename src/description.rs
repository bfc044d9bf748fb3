//! Introspection descriptions for global ID scalars

use crate::target::TypeKind;

/// Build the description of the global ID scalar `scalar_name` targeting
/// `target_name`.
///
/// `possible_types` is only mentioned for interfaces and unions.
pub fn describe(
    scalar_name: &str,
    target_name: &str,
    kind: TypeKind,
    possible_types: &[&str],
) -> String {
    let constraint = match kind {
        TypeKind::Object => format!("is `{}`.", target_name),
        TypeKind::Interface | TypeKind::Union => {
            let relation = if kind == TypeKind::Interface {
                "implements"
            } else {
                "is a member of"
            };
            format!(
                "{} `{}`. The possible types include `{}`.",
                relation,
                target_name,
                possible_types.join("`, `")
            )
        }
    };

    format!(
        "The `{name}` scalar type represents a globally unique identifier, often used to \
         refetch an object or as key for a cache. The `{name}` type appears in a JSON \
         response as a String; however, it is not intended to be human-readable. When \
         expected as an input type, the incoming string will be accepted as a `{name}` if \
         it can be interpreted using Relay's `fromGlobalId` function, and the resolved \
         global ID's `type` {constraint}",
        name = scalar_name,
        constraint = constraint,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_object() {
        let text = describe("GlobalID_User", "User", TypeKind::Object, &["User"]);
        assert!(text.starts_with("The `GlobalID_User` scalar type represents"));
        assert!(text.ends_with("the resolved global ID's `type` is `User`."));
        assert!(!text.contains("possible types"));
    }

    #[test]
    fn test_describe_interface() {
        let text = describe("GlobalID_Node", "Node", TypeKind::Interface, &["User", "Post"]);
        assert!(text.ends_with("implements `Node`. The possible types include `User`, `Post`."));
    }

    #[test]
    fn test_describe_union() {
        let text = describe("SearchResultGlobalID", "SearchResult", TypeKind::Union, &["User"]);
        assert!(text.ends_with("is a member of `SearchResult`. The possible types include `User`."));
    }
}
