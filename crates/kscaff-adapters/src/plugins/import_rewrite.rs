//! Go import path rewriting.

use kscaff_core::{
    application::ports::{Plugin, PluginError},
    domain::{RelativePath, Universe},
};

/// Rewrites quoted Go import paths starting with `from` to start with `to`.
///
/// Only `.go` files are touched, and only whole path prefixes match:
/// `from = "example.com/a"` rewrites `"example.com/a/api"` but not
/// `"example.com/ab"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRewrite {
    from: String,
    to: String,
}

impl ImportRewrite {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Result<Self, PluginError> {
        let from = from.into().trim_end_matches('/').to_string();
        let to = to.into().trim_end_matches('/').to_string();
        if from.is_empty() || to.is_empty() {
            return Err(PluginError("import rewrite needs non-empty paths".into()));
        }
        Ok(Self { from, to })
    }
}

impl Plugin for ImportRewrite {
    fn name(&self) -> &str {
        "import-rewrite"
    }

    fn process(
        &self,
        path: &RelativePath,
        content: String,
        _universe: &Universe,
    ) -> Result<String, PluginError> {
        if path.extension() != Some("go") {
            return Ok(content);
        }

        let exact = format!("\"{}\"", self.from);
        let prefix = format!("\"{}/", self.from);
        let out = content
            .replace(&exact, &format!("\"{}\"", self.to))
            .replace(&prefix, &format!("\"{}/", self.to));
        Ok(out)
    }
}
