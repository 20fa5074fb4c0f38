//! Resource descriptor: the API type being scaffolded.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// Group/Version/Kind identity of a resource.
///
/// This is what the project configuration registers; the flags on
/// [`Resource`] are per-invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl ResourceId {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
    }
}

/// The API type a scaffold run generates code for.
///
/// Identity is fixed at construction. The only mutable state is the
/// example-reconcile-body flag, which the API orchestration clears when no
/// resource files are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    id: ResourceId,
    namespaced: bool,
    create_example_reconcile_body: bool,
}

impl Resource {
    /// A namespaced resource with the example reconcile body enabled.
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: ResourceId::new(group, version, kind),
            namespaced: true,
            create_example_reconcile_body: true,
        }
    }

    pub fn with_namespaced(mut self, namespaced: bool) -> Self {
        self.namespaced = namespaced;
        self
    }

    pub fn with_example_reconcile_body(mut self, enabled: bool) -> Self {
        self.create_example_reconcile_body = enabled;
        self
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn group(&self) -> &str {
        &self.id.group
    }

    pub fn version(&self) -> &str {
        &self.id.version
    }

    pub fn kind(&self) -> &str {
        &self.id.kind
    }

    pub fn namespaced(&self) -> bool {
        self.namespaced
    }

    pub fn create_example_reconcile_body(&self) -> bool {
        self.create_example_reconcile_body
    }

    /// Stop the controller template from emitting an example reconcile body.
    pub fn disable_example_reconcile_body(&mut self) {
        self.create_example_reconcile_body = false;
    }

    /// Lowercased kind, used in every generated file name.
    pub fn kind_lower(&self) -> String {
        self.id.kind.to_lowercase()
    }

    /// Lowercased plural of the kind (`CronJob` -> `cronjobs`).
    pub fn plural(&self) -> String {
        pluralize(&self.kind_lower())
    }

    /// Fully qualified group (`apps` + `my.domain` -> `apps.my.domain`).
    pub fn group_domain(&self, domain: &str) -> String {
        if domain.is_empty() {
            self.id.group.clone()
        } else {
            format!("{}.{}", self.id.group, domain)
        }
    }

    /// Go import alias for the API package (`apps` + `v1` -> `appsv1`).
    pub fn import_alias(&self) -> String {
        let group: String = self
            .id
            .group
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        format!("{}{}", group, self.id.version)
    }

    /// Check group, version and kind naming rules.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_group(&self.id.group)?;
        validate_version(&self.id.version)?;
        validate_kind(&self.id.kind)?;

        let plural = self.plural();
        if plural.len() > 63 {
            return Err(DomainError::invalid_resource(
                "kind",
                &self.id.kind,
                format!("plural '{plural}' exceeds 63 characters"),
            ));
        }
        Ok(())
    }
}

fn validate_group(group: &str) -> Result<(), DomainError> {
    if group.is_empty() {
        return Err(DomainError::invalid_resource("group", group, "cannot be empty"));
    }
    if group.len() > 253 {
        return Err(DomainError::invalid_resource(
            "group",
            group,
            "exceeds 253 characters",
        ));
    }
    for label in group.split('.') {
        let valid = !label.is_empty()
            && label
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-');
        if !valid {
            return Err(DomainError::invalid_resource(
                "group",
                group,
                "must be a lowercase DNS-1123 subdomain",
            ));
        }
    }
    Ok(())
}

/// `v<N>` optionally followed by `alpha<N>` or `beta<N>`.
fn validate_version(version: &str) -> Result<(), DomainError> {
    let invalid = || {
        DomainError::invalid_resource(
            "version",
            version,
            "must match v<N>, v<N>alpha<N> or v<N>beta<N>",
        )
    };

    let rest = version.strip_prefix('v').ok_or_else(invalid)?;
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || rest.starts_with('0') {
        return Err(invalid());
    }
    let suffix = &rest[digits..];
    if suffix.is_empty() {
        return Ok(());
    }
    let tail = suffix
        .strip_prefix("alpha")
        .or_else(|| suffix.strip_prefix("beta"))
        .ok_or_else(invalid)?;
    if tail.is_empty() || !tail.chars().all(|c| c.is_ascii_digit()) || tail.starts_with('0') {
        return Err(invalid());
    }
    Ok(())
}

fn validate_kind(kind: &str) -> Result<(), DomainError> {
    let mut chars = kind.chars();
    match chars.next() {
        None => Err(DomainError::invalid_resource("kind", kind, "cannot be empty")),
        Some(first) if !first.is_ascii_uppercase() => Err(DomainError::invalid_resource(
            "kind",
            kind,
            format!(
                "must be PascalCase (expected {}{})",
                first.to_ascii_uppercase(),
                chars.as_str()
            ),
        )),
        Some(_) if !kind.chars().all(|c| c.is_ascii_alphanumeric()) => Err(
            DomainError::invalid_resource("kind", kind, "must be alphanumeric"),
        ),
        Some(_) => Ok(()),
    }
}

/// English plural for a lowercase word, covering the common kind endings.
fn pluralize(word: &str) -> String {
    const ES_SUFFIXES: [&str; 5] = ["s", "x", "z", "ch", "sh"];

    if ES_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}
