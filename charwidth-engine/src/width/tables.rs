//! Character class tables
//!
//! Each class pairs a `before` string with an `after` string of the same
//! length in characters: the i-th character of `before` folds to the i-th
//! character of `after`. No character appears in more than one `before`.

use crate::category::Category;

/// One foldable character class
#[derive(Debug, Clone, Copy)]
pub struct CharClass {
    pub before: &'static str,
    pub after: &'static str,
}

impl CharClass {
    /// `(from, to)` pairs in table order
    pub fn pairs(self) -> impl Iterator<Item = (char, char)> {
        self.before.chars().zip(self.after.chars())
    }
}

// U+FF01..U+FF5E -> U+0021..U+007E
static FULLWIDTH_ASCII_VARIANTS: CharClass = CharClass {
    before: "！＂＃＄％＆＇（）＊＋，－．／０１２３４５６７８９：；＜＝＞？＠ＡＢＣＤＥＦＧＨＩＪＫＬＭＮＯＰＱＲＳＴＵＶＷＸＹＺ［＼］＾＿｀ａｂｃｄｅｆｇｈｉｊｋｌｍｎｏｐｑｒｓｔｕｖｗｘｙｚ｛｜｝～",
    after: "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~",
};

static FULLWIDTH_BRACKETS: CharClass = CharClass {
    before: "｟｠",
    after: "⦅⦆",
};

static HALFWIDTH_CJK_PUNCTUATION: CharClass = CharClass {
    before: "｡｢｣､",
    after: "。「」、",
};

// U+FF65..U+FF9F; the trailing voicing marks fold to the spacing marks U+309B/U+309C
static HALFWIDTH_KATAKANA_VARIANTS: CharClass = CharClass {
    before: "･ｦｧｨｩｪｫｬｭｮｯｰｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝﾞﾟ",
    after: "・ヲァィゥェォャュョッーアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワン゛゜",
};

// U+FFA0..U+FFDC -> Hangul Compatibility Jamo U+3164, U+3131..U+3163
static HALFWIDTH_HANGUL_VARIANTS: CharClass = CharClass {
    before: "\u{FFA0}ﾡﾢﾣﾤﾥﾦﾧﾨﾩﾪﾫﾬﾭﾮﾯﾰﾱﾲﾳﾴﾵﾶﾷﾸﾹﾺﾻﾼﾽﾾￂￃￄￅￆￇￊￋￌￍￎￏￒￓￔￕￖￗￚￛￜ",
    after: "\u{3164}ㄱㄲㄳㄴㄵㄶㄷㄸㄹㄺㄻㄼㄽㄾㄿㅀㅁㅂㅃㅄㅅㅆㅇㅈㅉㅊㅋㅌㅍㅎㅏㅐㅑㅒㅓㅔㅕㅖㅗㅘㅙㅚㅛㅜㅝㅞㅟㅠㅡㅢㅣ",
};

static FULLWIDTH_SYMBOL_VARIANTS: CharClass = CharClass {
    before: "￠￡￢￣￤￥",
    after: "¢£¬¯¦¥",
};

static HALFWIDTH_SYMBOL_VARIANTS: CharClass = CharClass {
    before: "￨￩￪￫￬￭￮",
    after: "│←↑→↓■○",
};

static IDEOGRAPHIC_SPACE: CharClass = CharClass {
    before: "\u{3000}",
    after: " ",
};

/// Table for a category
pub fn char_class(category: Category) -> &'static CharClass {
    match category {
        Category::Ascii => &FULLWIDTH_ASCII_VARIANTS,
        Category::WhiteParenthesis => &FULLWIDTH_BRACKETS,
        Category::CjkPunctuation => &HALFWIDTH_CJK_PUNCTUATION,
        Category::Katakana => &HALFWIDTH_KATAKANA_VARIANTS,
        Category::Hangul => &HALFWIDTH_HANGUL_VARIANTS,
        Category::Latin1PunctuationAndSymbols => &FULLWIDTH_SYMBOL_VARIANTS,
        Category::MathematicalSymbols => &HALFWIDTH_SYMBOL_VARIANTS,
        Category::Space => &IDEOGRAPHIC_SPACE,
    }
}
