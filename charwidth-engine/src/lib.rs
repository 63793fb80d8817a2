//! charwidth-engine: fullwidth/halfwidth (zenkaku/hankaku) normalization
//!
//! Normalization runs in two passes: halfwidth voiced katakana sequences are
//! collapsed first ([`unify_voiced_katakana`]), then every character of the
//! active categories is folded to its canonical width ([`WidthFolder`]).

pub mod category;
pub mod error;
pub mod options;
pub mod string_ext;
pub mod voicing;
pub mod width;

use std::borrow::Cow;
use std::sync::LazyLock;

pub use category::Category;
pub use error::OptionsError;
pub use options::NormalizeOptions;
pub use string_ext::{NormalizeCharwidth, NormalizeCharwidthInPlace};
pub use voicing::unify_voiced_katakana;
pub use width::WidthFolder;

static DEFAULT_NORMALIZER: LazyLock<Normalizer> =
    LazyLock::new(|| Normalizer::new(&NormalizeOptions::default()));

/// Reusable normalizer with its fold table already resolved
#[derive(Debug, Clone)]
pub struct Normalizer {
    folder: WidthFolder,
}

impl Normalizer {
    pub fn new(options: &NormalizeOptions) -> Self {
        Self {
            folder: WidthFolder::new(options),
        }
    }

    /// Active categories in canonical order
    pub fn categories(&self) -> &[Category] {
        self.folder.categories()
    }

    /// Normalize a copy of `text`
    pub fn normalize(&self, text: &str) -> String {
        let unified = unify_voiced_katakana(text);
        self.folder.fold(&unified).into_owned()
    }

    /// Normalize `text` in place and return it
    pub fn normalize_in_place<'a>(&self, text: &'a mut String) -> &'a mut String {
        let unified = match unify_voiced_katakana(text) {
            Cow::Owned(unified) => Some(unified),
            Cow::Borrowed(_) => None,
        };
        if let Some(unified) = unified {
            *text = unified;
        }

        let folded = match self.folder.fold(text) {
            Cow::Owned(folded) => Some(folded),
            Cow::Borrowed(_) => None,
        };
        if let Some(folded) = folded {
            *text = folded;
        }
        text
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        DEFAULT_NORMALIZER.clone()
    }
}

fn with_normalizer<R>(options: &NormalizeOptions, f: impl FnOnce(&Normalizer) -> R) -> R {
    if *options == NormalizeOptions::default() {
        f(&DEFAULT_NORMALIZER)
    } else {
        f(&Normalizer::new(options))
    }
}

/// Normalize fullwidth/halfwidth characters, leaving `text` untouched.
///
/// ```
/// use charwidth_engine::{Category, NormalizeOptions, normalize};
///
/// assert_eq!(normalize("Ｒｕｓｔ　ｶﾞｲﾄﾞ", &NormalizeOptions::default()), "Rust ガイド");
/// assert_eq!(
///     normalize("Ｒｕｓｔ　ｶﾞｲﾄﾞ", &NormalizeOptions::only([Category::Space])),
///     "Ｒｕｓｔ ガｲド"
/// );
/// ```
pub fn normalize(text: &str, options: &NormalizeOptions) -> String {
    with_normalizer(options, |normalizer| normalizer.normalize(text))
}

/// Normalize fullwidth/halfwidth characters in the caller's buffer.
///
/// Returns the same buffer for chaining.
pub fn normalize_in_place<'a>(text: &'a mut String, options: &NormalizeOptions) -> &'a mut String {
    with_normalizer(options, |normalizer| normalizer.normalize_in_place(text))
}
