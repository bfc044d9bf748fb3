//! Naming and validation settings

use serde::Deserialize;

/// What an input scalar does when a decoded ID has the wrong type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Fail with a type mismatch error
    Reject,

    /// Yield null and let non-null enforcement report it
    #[default]
    Null,
}

/// Global ID factory configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlobalIdConfig {
    /// Prefix of memoized field scalar names (`GlobalID_User`)
    pub field_prefix: String,

    /// Suffix of input scalar names (`UserGlobalID`)
    pub input_suffix: String,

    /// Mismatch handling for input scalars. Field scalars always reject.
    pub input_mismatch: MismatchPolicy,
}

impl GlobalIdConfig {
    pub fn field_type_name(&self, target_name: &str) -> String {
        format!("{}{}", self.field_prefix, target_name)
    }

    pub fn input_type_name(&self, target_name: &str) -> String {
        format!("{}{}", target_name, self.input_suffix)
    }
}

impl Default for GlobalIdConfig {
    fn default() -> Self {
        Self {
            field_prefix: "GlobalID_".to_string(),
            input_suffix: "GlobalID".to_string(),
            input_mismatch: MismatchPolicy::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let config = GlobalIdConfig::default();
        assert_eq!(config.field_type_name("User"), "GlobalID_User");
        assert_eq!(config.input_type_name("User"), "UserGlobalID");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: GlobalIdConfig =
            serde_json::from_str(r#"{ "input_mismatch": "reject" }"#).unwrap();
        assert_eq!(config.input_mismatch, MismatchPolicy::Reject);
        assert_eq!(config.field_prefix, "GlobalID_");
        assert_eq!(config.input_suffix, "GlobalID");
    }
}
