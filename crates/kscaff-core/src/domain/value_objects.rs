//! Domain value objects: ProjectVersion, Layout.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

// ── ProjectVersion ───────────────────────────────────────────────────────────

/// Scaffolding version a project was initialised with.
///
/// Selected once per run from the PROJECT file. There is no migration
/// between versions here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectVersion {
    V1,
    V2,
}

impl ProjectVersion {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "1",
            Self::V2 => "2",
        }
    }

    /// Whether projects of this version keep a resource registry.
    pub const fn tracks_resources(self) -> bool {
        matches!(self, Self::V2)
    }

    /// Whether the multi-group layout exists for this version.
    pub const fn supports_multi_group(self) -> bool {
        matches!(self, Self::V2)
    }
}

impl fmt::Display for ProjectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::V1),
            "2" => Ok(Self::V2),
            other => Err(DomainError::UnsupportedVersion {
                version: other.to_string(),
            }),
        }
    }
}

// ── Layout ───────────────────────────────────────────────────────────────────

/// Directory convention for v2 API and controller packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// `api/<version>/`, `controllers/`
    #[default]
    SingleGroup,
    /// `apis/<group>/<version>/`, `controllers/<group>/`
    MultiGroup,
}

impl Layout {
    pub const fn from_multi_group(multi_group: bool) -> Self {
        if multi_group {
            Self::MultiGroup
        } else {
            Self::SingleGroup
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SingleGroup => "single-group",
            Self::MultiGroup => "multi-group",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
