// SPDX-License-Identifier: MPL-2.0
//! Breed value objects.

use std::fmt;

/// A dog breed identifier as used by the breed API ("husky", "cattledog").
///
/// Names are trimmed and lowercased on construction so the same breed always
/// compares equal regardless of how the API or the user spelled it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Breed(String);

impl Breed {
    /// Creates a breed, returning `None` unless the name is made of ASCII
    /// letters, digits and `-` only.
    ///
    /// Breeds are interpolated into API paths as-is, so anything that would
    /// need percent-encoding is rejected here.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim().to_ascii_lowercase();
        let valid = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
        valid.then_some(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds a sorted, de-duplicated breed list from raw names, dropping invalid ones.
pub fn breed_list<I, S>(names: I) -> Vec<Breed>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut breeds: Vec<Breed> = names.into_iter().filter_map(Breed::new).collect();
    breeds.sort();
    breeds.dedup();
    breeds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_case_and_whitespace() {
        let breed = Breed::new("  Husky ").unwrap();
        assert_eq!(breed.as_str(), "husky");
        assert_eq!(breed.to_string(), "husky");
    }

    #[test]
    fn new_rejects_blank_and_path_like_names() {
        assert!(Breed::new("").is_none());
        assert!(Breed::new("   ").is_none());
        assert!(Breed::new("hound/afghan").is_none());
    }

    #[test]
    fn new_rejects_characters_needing_url_encoding() {
        for name in ["shiba inu", "husky?page=2", "husky#top", "caf\u{e9}", "a%20b"] {
            assert!(Breed::new(name).is_none(), "{name:?} accepted");
        }
        assert_eq!(
            Breed::new("Cattledog-Australian").map(|b| b.to_string()),
            Some("cattledog-australian".to_string())
        );
    }

    #[test]
    fn breed_list_sorts_and_deduplicates() {
        let breeds = breed_list(["husky", "cattledog", "Husky", ""]);
        let names: Vec<&str> = breeds.iter().map(Breed::as_str).collect();
        assert_eq!(names, vec!["cattledog", "husky"]);
    }
}
