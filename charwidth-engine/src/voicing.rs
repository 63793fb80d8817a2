//! Halfwidth voiced katakana unification
//!
//! Halfwidth katakana writes voicing as a separate trailing mark (`ｶﾞ`), while
//! fullwidth katakana has precomposed characters (`ガ`). This pass collapses
//! the two-character sequences before width folding, which only maps single
//! characters.

use std::borrow::Cow;

/// Halfwidth katakana voiced sound mark (U+FF9E)
pub const VOICED_SOUND_MARK: char = 'ﾞ';
/// Halfwidth katakana semi-voiced sound mark (U+FF9F)
pub const SEMI_VOICED_SOUND_MARK: char = 'ﾟ';

/// Halfwidth base + mark -> precomposed fullwidth katakana.
/// Source sequences are pairwise disjoint.
const VOICED_KATAKANA: &[(&str, char)] = &[
    ("ｶﾞ", 'ガ'),
    ("ｷﾞ", 'ギ'),
    ("ｸﾞ", 'グ'),
    ("ｹﾞ", 'ゲ'),
    ("ｺﾞ", 'ゴ'),
    ("ｻﾞ", 'ザ'),
    ("ｼﾞ", 'ジ'),
    ("ｽﾞ", 'ズ'),
    ("ｾﾞ", 'ゼ'),
    ("ｿﾞ", 'ゾ'),
    ("ﾀﾞ", 'ダ'),
    ("ﾁﾞ", 'ヂ'),
    ("ﾂﾞ", 'ヅ'),
    ("ﾃﾞ", 'デ'),
    ("ﾄﾞ", 'ド'),
    ("ﾊﾞ", 'バ'),
    ("ﾋﾞ", 'ビ'),
    ("ﾌﾞ", 'ブ'),
    ("ﾍﾞ", 'ベ'),
    ("ﾎﾞ", 'ボ'),
    ("ｳﾞ", 'ヴ'),
    ("ﾜﾞ", 'ヷ'),
    ("ｦﾞ", 'ヺ'),
    // Semi-voiced
    ("ﾊﾟ", 'パ'),
    ("ﾋﾟ", 'ピ'),
    ("ﾌﾟ", 'プ'),
    ("ﾍﾟ", 'ペ'),
    ("ﾎﾟ", 'ポ'),
];

/// Precomposed katakana for a halfwidth base followed by `mark`
fn voiced(base: char, mark: char) -> Option<char> {
    VOICED_KATAKANA
        .iter()
        .find(|(halfwidth, _)| {
            let mut chars = halfwidth.chars();
            chars.next() == Some(base) && chars.next() == Some(mark)
        })
        .map(|&(_, fullwidth)| fullwidth)
}

/// Collapse halfwidth (semi-)voiced katakana sequences into fullwidth characters.
///
/// Bases without a trailing mark, marks without a matching base, and
/// everything else pass through unchanged. Borrows the input when it contains
/// no voicing mark at all.
pub fn unify_voiced_katakana(text: &str) -> Cow<'_, str> {
    if !text.contains([VOICED_SOUND_MARK, SEMI_VOICED_SOUND_MARK]) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if let Some(&mark) = chars.peek()
            && let Some(fullwidth) = voiced(ch, mark)
        {
            out.push(fullwidth);
            chars.next();
            continue;
        }
        out.push(ch);
    }
    Cow::Owned(out)
}
