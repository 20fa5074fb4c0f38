//! Project configuration: the persisted PROJECT record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{
    entities::resource::ResourceId,
    error::DomainError,
    value_objects::{Layout, ProjectVersion},
};

/// Project-wide settings and the registry of scaffolded resources.
///
/// The version tag is stored raw so that an unknown version survives a
/// load and is rejected only when a strategy has to be chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repo: String,

    #[serde(default, rename = "multigroup", skip_serializing_if = "is_false")]
    pub multi_group: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceId>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ProjectConfig {
    pub fn new(version: ProjectVersion) -> Self {
        Self {
            version: version.as_str().to_string(),
            domain: String::new(),
            repo: String::new(),
            multi_group: false,
            resources: Vec::new(),
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = repo.into();
        self
    }

    /// Parse the version tag.
    pub fn project_version(&self) -> Result<ProjectVersion, DomainError> {
        self.version.parse()
    }

    pub fn layout(&self) -> Layout {
        Layout::from_multi_group(self.multi_group)
    }

    /// Last segment of the repo path; the project's display name.
    pub fn project_name(&self) -> &str {
        self.repo.rsplit('/').next().unwrap_or_default()
    }

    pub fn has_resource(&self, id: &ResourceId) -> bool {
        self.resources.iter().any(|r| r == id)
    }

    /// Distinct groups across registered resources.
    pub fn resource_groups(&self) -> BTreeSet<String> {
        self.resources.iter().map(|r| r.group.clone()).collect()
    }

    /// Whether `group` may be registered under the current layout.
    ///
    /// Single-group projects host exactly one group, so the registered set
    /// must be empty or contain only `group`.
    pub fn check_group(&self, group: &str) -> Result<(), DomainError> {
        if self.multi_group {
            return Ok(());
        }
        match self
            .resource_groups()
            .into_iter()
            .find(|existing| !existing.eq_ignore_ascii_case(group))
        {
            Some(existing) => Err(DomainError::GroupConflict {
                group: group.to_string(),
                existing,
            }),
            None => Ok(()),
        }
    }

    /// Register a resource.
    ///
    /// Returns `Ok(false)` when it was already registered, so callers only
    /// persist on a real change.
    pub fn add_resource(&mut self, id: ResourceId) -> Result<bool, DomainError> {
        if self.has_resource(&id) {
            return Ok(false);
        }
        self.check_group(&id.group)?;
        self.resources.push(id);
        Ok(true)
    }

    /// Switch the layout, refusing to strand a second group in a
    /// single-group project.
    pub fn set_multi_group(&mut self, multi_group: bool) -> Result<(), DomainError> {
        let version = self.project_version()?;
        if !version.supports_multi_group() {
            return Err(DomainError::InvalidConfig(format!(
                "multi-group layout is not available for project version {version}"
            )));
        }
        if !multi_group {
            let groups = self.resource_groups();
            if groups.len() > 1 {
                let mut iter = groups.into_iter();
                let existing = iter.next().unwrap_or_default();
                let group = iter.next().unwrap_or_default();
                return Err(DomainError::GroupConflict { group, existing });
            }
        }
        self.multi_group = multi_group;
        Ok(())
    }
}
