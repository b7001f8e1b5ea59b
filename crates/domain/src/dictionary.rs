use std::str::FromStr;

use log::warn;
use strum::IntoEnumIterator;

use crate::MuscleGroup;

/// Translates free-text section headers (e.g. "PEITO") into canonical muscle groups.
///
/// Keys are upper-cased and keep the order in which they were first given. The dictionary
/// is immutable once constructed. An empty dictionary is a valid configuration: every
/// translation yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MuscleGroupDictionary {
    mapping: Vec<(String, String)>,
}

impl MuscleGroupDictionary {
    #[must_use]
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut mapping: Vec<(String, String)> = Vec::new();

        for (key, value) in entries {
            let key = key.as_ref().to_uppercase();

            if key.trim().is_empty() {
                warn!("ignoring muscle group mapping with empty header");
                continue;
            }

            let value = value.into();

            match mapping.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => mapping.push((key, value)),
            }
        }

        Self { mapping }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn translate(&self, token: &str) -> Option<MuscleGroup> {
        if self.mapping.is_empty() || token.is_empty() {
            return None;
        }

        let key = token.to_uppercase();
        let (_, value) = self.mapping.iter().find(|(k, _)| *k == key)?;

        if let Ok(group) = MuscleGroup::from_str(value) {
            Some(group)
        } else {
            warn!(
                "invalid muscle group '{value}' for header '{token}', valid values are: {}",
                MuscleGroup::iter()
                    .map(|g| g.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            None
        }
    }

    #[must_use]
    pub fn has_configuration(&self) -> bool {
        !self.mapping.is_empty()
    }

    /// Configured header tokens in dictionary order.
    pub fn header_tokens(&self) -> impl Iterator<Item = &str> {
        self.mapping.iter().map(|(k, _)| k.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mapping.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn dictionary() -> MuscleGroupDictionary {
        MuscleGroupDictionary::new([
            ("PEITO", "CHEST"),
            ("Bíceps", "biceps"),
            ("COSTAS", "BACK"),
            ("ABDOMEN", "CORE"),
        ])
    }

    #[rstest]
    #[case::exact("PEITO", Some(MuscleGroup::Chest))]
    #[case::lower_case_token("peito", Some(MuscleGroup::Chest))]
    #[case::accented_key("BÍCEPS", Some(MuscleGroup::Biceps))]
    #[case::accented_lower_case_token("bíceps", Some(MuscleGroup::Biceps))]
    #[case::unknown_token("PERNA", None)]
    #[case::unknown_group("ABDOMEN", None)]
    #[case::empty_token("", None)]
    fn test_translate(#[case] token: &str, #[case] expected: Option<MuscleGroup>) {
        assert_eq!(dictionary().translate(token), expected);
    }

    #[test]
    fn test_translate_empty_dictionary() {
        let dictionary = MuscleGroupDictionary::empty();

        assert!(!dictionary.has_configuration());
        assert_eq!(dictionary.translate("PEITO"), None);
    }

    #[test]
    fn test_header_tokens_keep_order() {
        assert_eq!(
            dictionary().header_tokens().collect::<Vec<_>>(),
            vec!["PEITO", "BÍCEPS", "COSTAS", "ABDOMEN"]
        );
    }

    #[test]
    fn test_new_merges_keys_differing_in_case() {
        let dictionary = MuscleGroupDictionary::new([
            ("perna", "LEGS"),
            ("PEITO", "CHEST"),
            ("PERNA", "GLUTES"),
        ]);

        assert_eq!(
            dictionary.entries().collect::<Vec<_>>(),
            vec![("PERNA", "GLUTES"), ("PEITO", "CHEST")]
        );
        assert_eq!(dictionary.translate("Perna"), Some(MuscleGroup::Glutes));
    }

    #[test]
    fn test_new_skips_empty_keys() {
        let dictionary = MuscleGroupDictionary::new([("", "CHEST"), ("  ", "BACK")]);

        assert!(dictionary.is_empty());
        assert_eq!(dictionary.len(), 0);
    }

    #[test]
    fn test_values_are_stored_as_is() {
        let dictionary = MuscleGroupDictionary::new([("OMBRO", "Shoulders")]);

        assert_eq!(
            dictionary.entries().collect::<Vec<_>>(),
            vec![("OMBRO", "Shoulders")]
        );
        assert_eq!(dictionary.translate("OMBRO"), Some(MuscleGroup::Shoulders));
    }
}
