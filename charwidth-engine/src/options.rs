//! Normalize options and category resolution
//!
//! Untyped option keys and tags are validated here, before any text is
//! touched.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{OptionsError, Result};

const ONLY: &str = "only";
const EXCEPT: &str = "except";

/// Selects which character classes are folded.
///
/// With neither field set every class is active. `only` restricts the active
/// set, `except` removes from it; when both are present `only` is applied
/// first. A value of this type is always valid: unknown keys and tags are
/// rejected while it is built, never during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub except: Option<Vec<Category>>,
}

impl NormalizeOptions {
    /// Fold only the given categories
    pub fn only(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            only: Some(categories.into_iter().collect()),
            except: None,
        }
    }

    /// Fold every category except the given ones
    pub fn except(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            only: None,
            except: Some(categories.into_iter().collect()),
        }
    }

    /// Build options from untyped `(key, tags)` pairs.
    ///
    /// Keys are checked before any tag, so a call with both a bad key and a
    /// bad tag reports the key. A key given more than once accumulates its
    /// tags.
    pub fn from_pairs<I, K, V, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let pairs: Vec<(K, V)> = pairs.into_iter().collect();

        let unexpected: Vec<String> = pairs
            .iter()
            .map(|(key, _)| key.as_ref())
            .filter(|key| *key != ONLY && *key != EXCEPT)
            .map(str::to_string)
            .collect();
        if !unexpected.is_empty() {
            return Err(OptionsError::UnexpectedOptions(unexpected));
        }

        let mut options = Self::default();
        let mut unexpected_types = Vec::new();
        for (key, tags) in pairs {
            let slot = if key.as_ref() == ONLY {
                &mut options.only
            } else {
                &mut options.except
            };
            match Category::parse_all(tags) {
                Ok(categories) => slot.get_or_insert_with(Vec::new).extend(categories),
                Err(OptionsError::UnexpectedTypes(tags)) => unexpected_types.extend(tags),
                Err(other) => return Err(other),
            }
        }

        if unexpected_types.is_empty() {
            Ok(options)
        } else {
            Err(OptionsError::UnexpectedTypes(unexpected_types))
        }
    }

    /// Resolve the active categories in canonical order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.only.as_ref().is_none_or(|only| only.contains(c)))
            .filter(|c| self.except.as_ref().is_none_or(|except| !except.contains(c)))
            .collect()
    }
}
