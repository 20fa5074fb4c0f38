//! Marker regions and idempotent statement insertion.
//!
//! A marker is a comment line left in a generated file, e.g.
//! `// +kubebuilder:scaffold:imports`. New statements go immediately before
//! it, so repeated insertions accumulate above the marker in call order.

use std::fmt;

use crate::domain::error::DomainError;

/// A named insertion point inside a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    comment: &'static str,
    name: &'static str,
}

impl Marker {
    /// `// +kubebuilder:scaffold:imports` in Go files.
    pub const GO_IMPORTS: Marker = Marker::go("imports");
    /// `// +kubebuilder:scaffold:scheme` in Go files.
    pub const GO_SCHEME: Marker = Marker::go("scheme");
    /// `// +kubebuilder:scaffold:builder` in Go files.
    pub const GO_BUILDER: Marker = Marker::go("builder");
    pub const CRD_RESOURCE: Marker = Marker::yaml("crdkustomizeresource");
    pub const CRD_WEBHOOK_PATCH: Marker = Marker::yaml("crdkustomizewebhookpatch");
    pub const CRD_CAINJECTION_PATCH: Marker = Marker::yaml("crdkustomizecainjectionpatch");

    pub const fn go(name: &'static str) -> Self {
        Self { comment: "//", name }
    }

    pub const fn yaml(name: &'static str) -> Self {
        Self { comment: "#", name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, line: &str) -> bool {
        let Some(rest) = line.trim().strip_prefix(self.comment) else {
            return false;
        };
        rest.trim_start()
            .strip_prefix("+kubebuilder:scaffold:")
            .is_some_and(|name| name.trim_end() == self.name)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +kubebuilder:scaffold:{}", self.comment, self.name)
    }
}

/// A statement to place above a marker. May span several lines; the
/// marker's indentation is prepended to each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub marker: Marker,
    pub statement: String,
}

impl Insertion {
    pub fn new(marker: Marker, statement: impl Into<String>) -> Self {
        Self {
            marker,
            statement: statement.into(),
        }
    }
}

/// Result of [`apply_insertions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edited {
    pub content: String,
    /// Number of statements actually added.
    pub inserted: usize,
}

impl Edited {
    pub fn changed(&self) -> bool {
        self.inserted > 0
    }
}

/// Insert each statement above its marker unless an equivalent statement
/// already appears anywhere in `content`.
///
/// Equivalence is whitespace-trimmed, line-wise: every non-blank line of
/// the statement must appear, consecutively, among the file's non-blank
/// lines. Every marker is located before anything is edited, so a missing
/// marker fails without a partial result. Bytes outside the inserted lines
/// are preserved, including CRLF line endings.
pub fn apply_insertions(content: &str, insertions: &[Insertion]) -> Result<Edited, DomainError> {
    let mut lines: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();

    for insertion in insertions {
        if find_marker(&lines, insertion.marker).is_none() {
            return Err(DomainError::MarkerNotFound {
                marker: insertion.marker.to_string(),
            });
        }
    }

    let mut inserted = 0;
    for insertion in insertions {
        if contains_statement(&lines, &insertion.statement) {
            continue;
        }
        let Some(at) = find_marker(&lines, insertion.marker) else {
            continue;
        };

        let marker_line = &lines[at];
        let indent: String = marker_line
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .collect();
        let eol = if marker_line.ends_with("\r\n") { "\r\n" } else { "\n" };

        let block: Vec<String> = insertion
            .statement
            .lines()
            .map(|l| {
                if l.trim().is_empty() {
                    eol.to_string()
                } else {
                    format!("{indent}{l}{eol}")
                }
            })
            .collect();
        lines.splice(at..at, block);
        inserted += 1;
    }

    Ok(Edited {
        content: lines.concat(),
        inserted,
    })
}

fn find_marker(lines: &[String], marker: Marker) -> Option<usize> {
    lines.iter().position(|l| marker.matches(l))
}

/// Whether `statement` already appears anywhere in the file, comparing
/// trimmed non-blank lines.
///
/// The search covers the whole file, not just the marker's region, so a
/// statement the user moved elsewhere still counts. Only the exact text
/// matches: a statement the user edited, such as an uncommented
/// `#- patches/...` line, is not recognised and the original is inserted
/// again.
fn contains_statement(lines: &[String], statement: &str) -> bool {
    let needle: Vec<&str> = statement
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if needle.is_empty() {
        return true;
    }
    let haystack: Vec<&str> = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    haystack
        .windows(needle.len())
        .any(|window| window == needle.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN: &str = "package main\n\nimport (\n\t\"os\"\n\t// +kubebuilder:scaffold:imports\n)\n\nfunc init() {\n\t// +kubebuilder:scaffold:scheme\n}\n";

    fn scheme(alias: &str) -> Insertion {
        Insertion::new(Marker::GO_SCHEME, format!("_ = {alias}.AddToScheme(scheme)"))
    }

    #[test]
    fn marker_display() {
        assert_eq!(Marker::GO_IMPORTS.to_string(), "// +kubebuilder:scaffold:imports");
        assert_eq!(
            Marker::CRD_RESOURCE.to_string(),
            "# +kubebuilder:scaffold:crdkustomizeresource"
        );
    }

    #[test]
    fn marker_does_not_match_longer_names() {
        assert!(!Marker::GO_IMPORTS.matches("// +kubebuilder:scaffold:importsx"));
        assert!(Marker::GO_IMPORTS.matches("\t//+kubebuilder:scaffold:imports  "));
        assert!(!Marker::CRD_RESOURCE.matches("// +kubebuilder:scaffold:crdkustomizeresource"));
    }

    #[test]
    fn inserts_before_marker_with_indentation() {
        let edited = apply_insertions(MAIN, &[scheme("appsv1")]).unwrap();
        assert_eq!(edited.inserted, 1);
        assert!(edited.content.contains(
            "\t_ = appsv1.AddToScheme(scheme)\n\t// +kubebuilder:scaffold:scheme\n"
        ));
    }

    #[test]
    fn second_application_is_byte_identical() {
        let once = apply_insertions(MAIN, &[scheme("appsv1")]).unwrap().content;
        let twice = apply_insertions(&once, &[scheme("appsv1")]).unwrap();
        assert_eq!(twice.inserted, 0);
        assert!(!twice.changed());
        assert_eq!(twice.content, once);
    }

    #[test]
    fn successive_statements_accumulate_in_order() {
        let edited = apply_insertions(MAIN, &[scheme("appsv1"), scheme("batchv1")]).unwrap();
        let a = edited.content.find("appsv1").unwrap();
        let b = edited.content.find("batchv1").unwrap();
        assert!(a < b);
        assert_eq!(edited.content.matches("AddToScheme").count(), 2);
    }

    #[test]
    fn duplicates_within_one_batch_are_inserted_once() {
        let edited = apply_insertions(MAIN, &[scheme("appsv1"), scheme("appsv1")]).unwrap();
        assert_eq!(edited.inserted, 1);
    }

    #[test]
    fn hand_moved_statement_counts_as_present() {
        let content = MAIN.replace("\"os\"\n", "\"os\"\n  _ = appsv1.AddToScheme(scheme)   \n");
        let edited = apply_insertions(&content, &[scheme("appsv1")]).unwrap();
        assert_eq!(edited.inserted, 0);
        assert_eq!(edited.content, content);
    }

    #[test]
    fn edited_statement_is_inserted_again() {
        let kustomization = "patchesStrategicMerge:\n#- patches/webhook_in_foos.yaml\n# +kubebuilder:scaffold:crdkustomizewebhookpatch\n";
        let patch = Insertion::new(
            Marker::CRD_WEBHOOK_PATCH,
            "#- patches/webhook_in_foos.yaml",
        );
        assert_eq!(apply_insertions(kustomization, &[patch.clone()]).unwrap().inserted, 0);

        let uncommented = kustomization.replace("#- patches", "- patches");
        let edited = apply_insertions(&uncommented, &[patch]).unwrap();
        assert_eq!(edited.inserted, 1);
        assert!(edited.content.contains("- patches/webhook_in_foos.yaml\n#- patches/webhook_in_foos.yaml\n"));
    }

    #[test]
    fn missing_marker_fails_without_partial_edit() {
        let result = apply_insertions(
            MAIN,
            &[
                scheme("appsv1"),
                Insertion::new(Marker::GO_BUILDER, "setup()"),
            ],
        );
        assert_eq!(
            result.unwrap_err(),
            DomainError::MarkerNotFound {
                marker: "// +kubebuilder:scaffold:builder".into()
            }
        );
    }

    #[test]
    fn preserves_crlf_and_unrelated_bytes() {
        let content = "resources:\r\n- bases/a.yaml\r\n# +kubebuilder:scaffold:crdkustomizeresource\r\n\r\n# trailing   \r\n";
        let edited = apply_insertions(
            content,
            &[Insertion::new(Marker::CRD_RESOURCE, "- bases/b.yaml")],
        )
        .unwrap();
        assert_eq!(
            edited.content,
            "resources:\r\n- bases/a.yaml\r\n- bases/b.yaml\r\n# +kubebuilder:scaffold:crdkustomizeresource\r\n\r\n# trailing   \r\n"
        );
    }

    #[test]
    fn multi_line_statement_keeps_relative_indentation() {
        let content = "func main() {\n\t// +kubebuilder:scaffold:builder\n}\n";
        let block = "if err := setup(); err != nil {\n\tos.Exit(1)\n}";
        let edited =
            apply_insertions(content, &[Insertion::new(Marker::GO_BUILDER, block)]).unwrap();
        assert_eq!(
            edited.content,
            "func main() {\n\tif err := setup(); err != nil {\n\t\tos.Exit(1)\n\t}\n\t// +kubebuilder:scaffold:builder\n}\n"
        );
        let again =
            apply_insertions(&edited.content, &[Insertion::new(Marker::GO_BUILDER, block)]).unwrap();
        assert_eq!(again.inserted, 0);
    }
}
