//! Character classes and conversion modes.
//!
//! A [`CharClass`] names one of the fixed membership sets the randomizer
//! substitutes within; a [`Mode`] selects which of those classes participate
//! in a single conversion call. Both are closed enums: `classify` is total
//! (anything outside the known sets is [`CharClass::Unclassified`]) and a
//! mode never covers `Unclassified`.

/// The script/case class of a single character.
///
/// Small-kana forms, the long-vowel mark and letter case are separate classes
/// so that substitution preserves them exactly: a small ゃ is only ever
/// replaced by another small kana, an uppercase letter only by another
/// uppercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    HiraganaSmall,
    HiraganaNormal,
    /// The katakana long-vowel mark ー. Singleton class; always maps to itself.
    KatakanaLongVowel,
    KatakanaSmall,
    KatakanaNormal,
    LatinUpper,
    LatinLower,
    /// CJK Unified Ideographs, U+4E00..=U+9FFF. Range-classified, no explicit list.
    Kanji,
    Unclassified,
}

impl CharClass {
    /// True for the classes backed by an explicit candidate alphabet
    /// (everything except the long-vowel fixed point, the kanji range and
    /// `Unclassified`).
    pub fn has_alphabet(&self) -> bool {
        !matches!(
            self,
            Self::KatakanaLongVowel | Self::Kanji | Self::Unclassified
        )
    }
}

/// Conversion mode: which character classes one `convert` call substitutes.
///
/// Classes outside the active mode pass through untouched, as does anything
/// unclassified (digits, punctuation, whitespace, unsupported scripts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Kanji,
    Hiragana,
    Katakana,
    Latin,
    All,
}

/// Every mode name accepted on tool command lines, in display order.
pub const MODE_LIST: [&str; 5] = ["kanji", "hira", "kata", "alpha", "all"];

impl Mode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "kanji" => Some(Self::Kanji),
            "hira" => Some(Self::Hiragana),
            "kata" => Some(Self::Katakana),
            "alpha" => Some(Self::Latin),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kanji => "kanji",
            Self::Hiragana => "hira",
            Self::Katakana => "kata",
            Self::Latin => "alpha",
            Self::All => "all",
        }
    }

    /// Whether this mode substitutes characters of the given class.
    ///
    /// `Unclassified` is never covered; `All` covers every real class.
    pub fn covers(&self, class: CharClass) -> bool {
        match self {
            Self::All => class != CharClass::Unclassified,
            Self::Hiragana => matches!(
                class,
                CharClass::HiraganaSmall | CharClass::HiraganaNormal
            ),
            Self::Katakana => matches!(
                class,
                CharClass::KatakanaLongVowel
                    | CharClass::KatakanaSmall
                    | CharClass::KatakanaNormal
            ),
            Self::Latin => matches!(class, CharClass::LatinUpper | CharClass::LatinLower),
            Self::Kanji => class == CharClass::Kanji,
        }
    }
}
