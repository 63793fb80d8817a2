//! Method-call forms of [`normalize`] and [`normalize_in_place`]

use crate::options::NormalizeOptions;
use crate::{normalize, normalize_in_place};

/// Normalize a copy of a string slice
pub trait NormalizeCharwidth {
    fn normalize_charwidth(&self, options: &NormalizeOptions) -> String;
}

/// Normalize an owned string in place
pub trait NormalizeCharwidthInPlace {
    fn normalize_charwidth_in_place(&mut self, options: &NormalizeOptions) -> &mut Self;
}

impl NormalizeCharwidth for str {
    fn normalize_charwidth(&self, options: &NormalizeOptions) -> String {
        normalize(self, options)
    }
}

impl NormalizeCharwidthInPlace for String {
    fn normalize_charwidth_in_place(&mut self, options: &NormalizeOptions) -> &mut Self {
        normalize_in_place(self, options)
    }
}
