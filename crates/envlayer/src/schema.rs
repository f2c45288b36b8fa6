//! Schema validation contract for merged environment mappings.
//!
//! Responsibilities:
//! - Define the narrow `Schema` capability the loader validates against.
//! - Define the structured `Issue` record carried by validation failures.
//! - Provide `RuleSchema`, a small per-key rule combinator, so the crate is
//!   usable without adapting an external validation library.
//!
//! Does NOT handle:
//! - Reading or merging sources (see `loader/pipeline.rs`).
//! - Applying validated values to the environment (see `env.rs`).
//!
//! Invariants:
//! - `attempt` never panics on bad input; failures are returned as an
//!   ordered issue list, one entry per violation, not just the first.
//! - A successful `attempt` may transform values (trimming, canonical
//!   casing); the loader applies whatever mapping it returns.

use serde::{Deserialize, Serialize};

use crate::parser::EnvMap;

/// One structured validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Machine-readable code, e.g. `invalid_type` or `invalid_value`.
    pub code: String,
    /// Path locating the offending key, e.g. `["DATABASE_URL"]`.
    pub path: Vec<String>,
    /// Human-readable description of the violation.
    pub message: String,
    /// Optional rule parameters (expected values, bounds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl Issue {
    /// Build an issue for a single top-level key.
    pub fn new(code: &str, key: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            path: vec![key.to_string()],
            message: message.into(),
            params: None,
        }
    }

    /// Attach rule parameters to the issue.
    pub fn with_params(mut self, params: serde_json::Value) -> Self {
        self.params = Some(params);
        self
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path.join("."), self.message)
    }
}

/// Validation capability the loader checks merged mappings against.
///
/// The contract is non-throwing: success carries the (possibly transformed)
/// mapping to apply, failure carries every violation found.
pub trait Schema {
    fn attempt(&self, input: &EnvMap) -> Result<EnvMap, Vec<Issue>>;
}

/// Adapt a plain function or closure with the `attempt` shape into a
/// [`Schema`], so external validation libraries can be bridged in one line.
pub fn schema_fn<F>(f: F) -> SchemaFn<F>
where
    F: Fn(&EnvMap) -> Result<EnvMap, Vec<Issue>>,
{
    SchemaFn(f)
}

/// A [`Schema`] backed by a function; build one with [`schema_fn`].
#[derive(Clone)]
pub struct SchemaFn<F>(F);

impl<F> Schema for SchemaFn<F>
where
    F: Fn(&EnvMap) -> Result<EnvMap, Vec<Issue>>,
{
    fn attempt(&self, input: &EnvMap) -> Result<EnvMap, Vec<Issue>> {
        (self.0)(input)
    }
}

/// Per-key validation rule used by [`RuleSchema`].
#[derive(Debug, Clone)]
enum Rule {
    /// Key must be present (an empty string satisfies it).
    Required,
    /// Key must be present and non-empty.
    NonEmpty,
    /// Value must parse as a signed integer.
    Integer,
    /// Value must be `true` or `false`.
    Boolean,
    /// Value must be one of the allowed strings.
    OneOf(Vec<String>),
}

/// Minimal rule-based schema: a list of `(key, rule)` pairs checked in
/// declaration order. Unknown keys pass through untouched.
#[derive(Debug, Clone, Default)]
pub struct RuleSchema {
    rules: Vec<(String, Rule)>,
}

impl RuleSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `key` to be present; an empty value satisfies the rule.
    pub fn required(mut self, key: &str) -> Self {
        self.rules.push((key.to_string(), Rule::Required));
        self
    }

    /// Require `key` to be present and non-empty.
    pub fn non_empty(mut self, key: &str) -> Self {
        self.rules.push((key.to_string(), Rule::NonEmpty));
        self
    }

    /// Require `key`, when present, to parse as a signed integer.
    pub fn integer(mut self, key: &str) -> Self {
        self.rules.push((key.to_string(), Rule::Integer));
        self
    }

    /// Require `key`, when present, to be `true` or `false`.
    pub fn boolean(mut self, key: &str) -> Self {
        self.rules.push((key.to_string(), Rule::Boolean));
        self
    }

    /// Require `key`, when present, to be one of `allowed`.
    pub fn one_of(mut self, key: &str, allowed: &[&str]) -> Self {
        self.rules.push((
            key.to_string(),
            Rule::OneOf(allowed.iter().map(|s| s.to_string()).collect()),
        ));
        self
    }

    fn check(key: &str, rule: &Rule, input: &EnvMap) -> Option<Issue> {
        let value = input.get(key);
        match rule {
            Rule::Required => {
                if value.is_none() {
                    return Some(Issue::new("invalid_type", key, "required value is missing"));
                }
            }
            Rule::NonEmpty => match value {
                None => {
                    return Some(Issue::new("invalid_type", key, "required value is missing"));
                }
                Some(v) if v.is_empty() => {
                    return Some(
                        Issue::new("too_small", key, "value must not be empty")
                            .with_params(serde_json::json!({ "minimum": 1 })),
                    );
                }
                Some(_) => {}
            },
            Rule::Integer => {
                if let Some(v) = value {
                    if v.parse::<i64>().is_err() {
                        return Some(Issue::new(
                            "invalid_type",
                            key,
                            format!("expected an integer, got {v:?}"),
                        ));
                    }
                }
            }
            Rule::Boolean => {
                if let Some(v) = value {
                    if v != "true" && v != "false" {
                        return Some(Issue::new(
                            "invalid_type",
                            key,
                            format!("expected true or false, got {v:?}"),
                        ));
                    }
                }
            }
            Rule::OneOf(allowed) => {
                if let Some(v) = value {
                    if !allowed.contains(v) {
                        return Some(
                            Issue::new(
                                "invalid_value",
                                key,
                                format!("{v:?} is not one of the allowed values"),
                            )
                            .with_params(serde_json::json!({ "allowed": allowed })),
                        );
                    }
                }
            }
        }
        None
    }
}

impl Schema for RuleSchema {
    fn attempt(&self, input: &EnvMap) -> Result<EnvMap, Vec<Issue>> {
        let issues: Vec<Issue> = self
            .rules
            .iter()
            .filter_map(|(key, rule)| Self::check(key, rule, input))
            .collect();
        if issues.is_empty() {
            Ok(input.clone())
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnvMap {
        let mut map = EnvMap::new();
        map.insert("DATABASE_URL".to_string(), "postgres://db".to_string());
        map.insert("PORT".to_string(), "8080".to_string());
        map.insert("DEBUG".to_string(), "true".to_string());
        map
    }

    #[test]
    fn test_rule_schema_accepts_valid_mapping() {
        let schema = RuleSchema::new()
            .non_empty("DATABASE_URL")
            .integer("PORT")
            .boolean("DEBUG");
        let validated = schema.attempt(&sample()).unwrap();
        assert_eq!(validated, sample());
    }

    #[test]
    fn test_rule_schema_reports_every_issue() {
        let mut map = sample();
        map.insert("PORT".to_string(), "not-a-number".to_string());
        map.insert("DEBUG".to_string(), "yes".to_string());
        map.remove("DATABASE_URL");

        let schema = RuleSchema::new()
            .non_empty("DATABASE_URL")
            .integer("PORT")
            .boolean("DEBUG");
        let issues = schema.attempt(&map).unwrap_err();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].path, vec!["DATABASE_URL".to_string()]);
        assert_eq!(issues[0].code, "invalid_type");
    }

    #[test]
    fn test_missing_required_key_names_its_path() {
        let schema = RuleSchema::new().required("KEY");
        let issues = schema.attempt(&EnvMap::new()).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, vec!["KEY".to_string()]);
    }

    #[test]
    fn test_required_is_satisfied_by_empty_string() {
        let mut map = EnvMap::new();
        map.insert("KEY".to_string(), String::new());
        let schema = RuleSchema::new().required("KEY");
        assert!(schema.attempt(&map).is_ok());
    }

    #[test]
    fn test_one_of_carries_allowed_values_as_params() {
        let mut map = EnvMap::new();
        map.insert("LOG_LEVEL".to_string(), "noisy".to_string());
        let schema = RuleSchema::new().one_of("LOG_LEVEL", &["debug", "info", "warn"]);
        let issues = schema.attempt(&map).unwrap_err();
        assert_eq!(issues[0].code, "invalid_value");
        assert_eq!(
            issues[0].params,
            Some(serde_json::json!({ "allowed": ["debug", "info", "warn"] }))
        );
    }

    #[test]
    fn test_closure_schema_can_transform_values() {
        let schema = schema_fn(|input: &EnvMap| {
            let mut out = input.clone();
            if let Some(v) = out.get_mut("NAME") {
                *v = v.to_uppercase();
            }
            Ok(out)
        });
        let mut map = EnvMap::new();
        map.insert("NAME".to_string(), "svc".to_string());
        let validated = schema.attempt(&map).unwrap();
        assert_eq!(validated.get("NAME"), Some(&"SVC".to_string()));
    }
}
