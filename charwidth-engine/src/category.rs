//! Category tags selecting which character classes are folded

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, Result};

/// Character class selectable through [`NormalizeOptions`](crate::NormalizeOptions)
///
/// Declaration order is the canonical order used when the active classes are
/// assembled into a fold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fullwidth ASCII variants (`Ａ` → `A`)
    Ascii,
    /// Fullwidth white parentheses (`｟` → `⦅`)
    WhiteParenthesis,
    /// Halfwidth CJK punctuation (`｡` → `。`)
    CjkPunctuation,
    /// Halfwidth katakana (`ｶ` → `カ`)
    Katakana,
    /// Halfwidth hangul jamo (`ﾡ` → `ㄱ`)
    Hangul,
    /// Fullwidth Latin-1 symbols (`￥` → `¥`)
    #[serde(rename = "latin_1_punctuation_and_symbols")]
    Latin1PunctuationAndSymbols,
    /// Halfwidth arrows and geometric shapes (`￩` → `←`)
    MathematicalSymbols,
    /// Ideographic space (U+3000 → U+0020)
    Space,
}

impl Category {
    /// Every category in canonical order
    pub const ALL: [Category; 8] = [
        Category::Ascii,
        Category::WhiteParenthesis,
        Category::CjkPunctuation,
        Category::Katakana,
        Category::Hangul,
        Category::Latin1PunctuationAndSymbols,
        Category::MathematicalSymbols,
        Category::Space,
    ];

    /// Tag used in options, settings files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ascii => "ascii",
            Category::WhiteParenthesis => "white_parenthesis",
            Category::CjkPunctuation => "cjk_punctuation",
            Category::Katakana => "katakana",
            Category::Hangul => "hangul",
            Category::Latin1PunctuationAndSymbols => "latin_1_punctuation_and_symbols",
            Category::MathematicalSymbols => "mathematical_symbols",
            Category::Space => "space",
        }
    }

    /// Parse a list of tags, reporting every unknown tag at once.
    pub fn parse_all<I, T>(tags: I) -> Result<Vec<Category>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut categories = Vec::new();
        let mut unexpected = Vec::new();
        for tag in tags {
            let tag = tag.as_ref();
            match Self::lookup(tag) {
                Some(category) => categories.push(category),
                None => unexpected.push(tag.to_string()),
            }
        }

        if unexpected.is_empty() {
            Ok(categories)
        } else {
            Err(OptionsError::UnexpectedTypes(unexpected))
        }
    }

    fn lookup(tag: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.as_str() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s).ok_or_else(|| OptionsError::UnexpectedTypes(vec![s.to_string()]))
    }
}
