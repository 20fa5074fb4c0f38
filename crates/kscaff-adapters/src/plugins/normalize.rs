//! Whitespace normalization.

use kscaff_core::{
    application::ports::{Plugin, PluginError},
    domain::{RelativePath, Universe},
};

/// Converts CRLF to LF, strips trailing whitespace from every line and
/// ends the file with exactly one newline.
///
/// Empty content stays empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalize;

impl Plugin for Normalize {
    fn name(&self) -> &str {
        "normalize"
    }

    fn process(
        &self,
        _path: &RelativePath,
        content: String,
        _universe: &Universe,
    ) -> Result<String, PluginError> {
        let mut out = String::with_capacity(content.len());
        for line in content.lines() {
            out.push_str(line.trim_end());
            out.push('\n');
        }

        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kscaff_core::domain::{ProjectConfig, ProjectVersion};

    fn run(content: &str) -> String {
        let universe = Universe::builder()
            .config(&ProjectConfig::new(ProjectVersion::V2))
            .build()
            .unwrap();
        Normalize
            .process(&"main.go".into(), content.to_string(), &universe)
            .unwrap()
    }

    #[test]
    fn normalizes_line_endings_and_trailing_space() {
        assert_eq!(run("a  \r\nb\t\r\n\r\n\r\n"), "a\nb\n");
    }

    #[test]
    fn adds_missing_final_newline() {
        assert_eq!(run("package main"), "package main\n");
    }

    #[test]
    fn keeps_inner_blank_lines_and_indentation() {
        assert_eq!(run("a\n\n\tb\n"), "a\n\n\tb\n");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(run(""), "");
        assert_eq!(run("\n\n"), "");
    }
}
