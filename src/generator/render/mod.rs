//! Renders the generated PHP sources: the entity class itself and, for the
//! non-annotation formats, the external Doctrine mapping file.
//!
//! The renderers consume field descriptors only; everything RAML-specific
//! was resolved before this point.

pub mod class;
pub mod mapping;

/// UpperCamelCases an identifier: `release_year` becomes `ReleaseYear`.
/// Used for accessor names and for deriving the entity class name.
#[must_use]
pub fn classify(name: &str) -> String {
    name.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
