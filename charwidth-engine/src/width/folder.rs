use std::borrow::Cow;
use std::collections::HashMap;

use tracing::debug;

use super::tables::char_class;
use crate::category::Category;
use crate::options::NormalizeOptions;

/// Single-character width folding over a resolved set of categories
#[derive(Debug, Clone)]
pub struct WidthFolder {
    categories: Vec<Category>,
    table: HashMap<char, char>,
}

impl WidthFolder {
    /// Resolve the active categories and build their combined fold table
    pub fn new(options: &NormalizeOptions) -> Self {
        let categories = options.categories();
        let table: HashMap<char, char> = categories
            .iter()
            .flat_map(|&category| char_class(category).pairs())
            .collect();

        debug!(
            "width fold table: {} entries from {:?}",
            table.len(),
            categories
        );

        Self { categories, table }
    }

    /// Active categories in canonical order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Fold one character, returning it unchanged when no active class maps it
    pub fn fold_char(&self, ch: char) -> char {
        self.table.get(&ch).copied().unwrap_or(ch)
    }

    /// Fold every character of `text`.
    ///
    /// Borrows the input when nothing in it is mapped.
    pub fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(first) = text.char_indices().find(|(_, ch)| self.table.contains_key(ch)) else {
            return Cow::Borrowed(text);
        };

        let (untouched, rest) = text.split_at(first.0);
        let mut out = String::with_capacity(text.len());
        out.push_str(untouched);
        out.extend(rest.chars().map(|ch| self.fold_char(ch)));
        Cow::Owned(out)
    }
}
