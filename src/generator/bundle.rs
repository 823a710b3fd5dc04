use crate::error::{RamlGenError, RamlGenResult};
use std::path::{Path, PathBuf};

/// The target a generation run writes into: a bundle name, the PHP namespace
/// derived from it, and the directory the generated sources land under.
///
/// Replaces the original framework's kernel-resolved bundle with an explicit
/// value built from the CLI arguments.
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Concatenated bundle name, e.g. `AcmeBlogBundle`
    pub name: String,

    /// Backslash-joined namespace, e.g. `Acme\BlogBundle`
    pub namespace: String,

    /// Directory generated sources are written under
    pub path: PathBuf,
}

impl Bundle {
    /// Builds a bundle target from a `/`-separated identifier like
    /// `Acme/BlogBundle` and the base directory it lives under.
    ///
    /// # Errors
    /// Returns `RamlGenError::Bundle` if the identifier is empty, does not
    /// end with `Bundle`, or contains a segment that is not a valid
    /// identifier.
    pub fn parse(input: &str, base_dir: &Path) -> RamlGenResult<Self> {
        let segments: Vec<&str> = input.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(RamlGenError::Bundle(format!(
                "bundle name '{input}' has an empty segment"
            )));
        }
        for segment in &segments {
            if !is_identifier(segment) {
                return Err(RamlGenError::Bundle(format!(
                    "bundle name segment '{segment}' is not a valid identifier"
                )));
            }
        }

        let name = segments.concat();
        if !name.ends_with("Bundle") {
            return Err(RamlGenError::Bundle(format!(
                "bundle name '{name}' must end with 'Bundle'"
            )));
        }

        let mut path = base_dir.to_path_buf();
        for segment in &segments {
            path.push(segment);
        }

        Ok(Self {
            name,
            namespace: segments.join("\\"),
            path,
        })
    }

    /// The namespace generated entity classes live in.
    #[must_use]
    pub fn entity_namespace(&self) -> String {
        format!("{}\\Entity", self.namespace)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_segment() {
        let bundle = Bundle::parse("AcmeBlogBundle", Path::new("/tmp/out")).unwrap();
        assert_eq!(bundle.name, "AcmeBlogBundle");
        assert_eq!(bundle.namespace, "AcmeBlogBundle");
        assert_eq!(bundle.path, PathBuf::from("/tmp/out/AcmeBlogBundle"));
    }

    #[test]
    fn test_parse_namespaced_bundle() {
        let bundle = Bundle::parse("Acme/BlogBundle", Path::new(".")).unwrap();
        assert_eq!(bundle.name, "AcmeBlogBundle");
        assert_eq!(bundle.namespace, "Acme\\BlogBundle");
        assert_eq!(bundle.entity_namespace(), "Acme\\BlogBundle\\Entity");
        assert_eq!(bundle.path, PathBuf::from("./Acme/BlogBundle"));
    }

    #[test]
    fn test_rejects_name_without_bundle_suffix() {
        assert!(Bundle::parse("Acme/Blog", Path::new(".")).is_err());
    }

    #[test]
    fn test_rejects_empty_segment() {
        assert!(Bundle::parse("Acme//BlogBundle", Path::new(".")).is_err());
        assert!(Bundle::parse("", Path::new(".")).is_err());
    }

    #[test]
    fn test_rejects_invalid_identifier_segment() {
        assert!(Bundle::parse("Acme/Blog-Bundle", Path::new(".")).is_err());
        assert!(Bundle::parse("1Acme/BlogBundle", Path::new(".")).is_err());
    }
}
