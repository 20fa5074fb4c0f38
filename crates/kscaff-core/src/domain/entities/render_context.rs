//! Variable substitution for template bodies.

use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// Context for template rendering.
///
/// A **Value Object** holding `{{NAME}}` substitutions. Built from a
/// [`Universe`](super::universe::Universe) and extended per task.
///
/// ## Variable Naming Convention
///
/// Variables are `SCREAMING_SNAKE_CASE`. Anything between `{{` and `}}` that
/// is not such an identifier is left alone, so YAML or Go text containing
/// braces renders untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Overlay `other` on top of this context.
    pub fn merged(mut self, other: &BTreeMap<String, String>) -> Self {
        for (k, v) in other {
            self.variables.insert(k.clone(), v.clone());
        }
        self
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Substituted values are not rescanned. A placeholder naming an
    /// undefined variable fails with `UnresolvedPlaceholder`.
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            match after.find("}}") {
                Some(end) if is_placeholder_name(&after[..end]) => {
                    let name = &after[..end];
                    let value = self.get(name).ok_or_else(|| {
                        DomainError::UnresolvedPlaceholder {
                            name: name.to_string(),
                        }
                    })?;
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                _ => {
                    out.push_str("{{");
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn is_placeholder_name(s: &str) -> bool {
    !s.is_empty()
        && s.starts_with(|c: char| c.is_ascii_uppercase())
        && s.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
