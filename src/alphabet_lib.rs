//! Membership data for the character classifier.
//!
//! This module defines [`AlphabetTable`], which stores the candidate alphabet
//! of every finite character class together with a prebuilt per-character
//! index used for O(1) classification. The built-in table covers the standard
//! hiragana/katakana syllabaries (normal and small forms) and the Latin
//! alphabet in both cases; kanji are classified by Unicode range and carry no
//! explicit list.
//!
//! Users generally interact with this indirectly via the `Mojimix` engine,
//! but custom alphabet profiles can be loaded from CBOR for specialised
//! candidate pools (the `alphabet-generate` tool produces and converts them).

use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::charclass::CharClass;

// Define a global mutable variable to store the error message
static LAST_ERROR: Mutex<Option<String>> = Mutex::new(None);

/// Normal-form hiragana, grouped by gojūon row, voiced and semi-voiced forms
/// interleaved with their base kana.
pub const HIRAGANA_NORMAL: &str = concat!(
    "あいうえお",
    "かがきぎくぐけげこご",
    "さざしじすずせぜそぞ",
    "ただちぢつづてでとど",
    "なにぬねの",
    "はばぱひびぴふぶぷへべぺほぼぽ",
    "まみむめも",
    "やゆよ",
    "らりるれろ",
    "わゐゑを",
    "んゔ",
);

/// Small-form hiragana (combination marks and the sokuon).
pub const HIRAGANA_SMALL: &str = "ぁぃぅぇぉゃゅょゎっ";

/// Normal-form katakana, parallel to [`HIRAGANA_NORMAL`].
pub const KATAKANA_NORMAL: &str = concat!(
    "アイウエオ",
    "カガキギクグケゲコゴ",
    "サザシジスズセゼソゾ",
    "タダチヂツヅテデトド",
    "ナニヌネノ",
    "ハバパヒビピフブプヘベペホボポ",
    "マミムメモ",
    "ヤユヨ",
    "ラリルレロ",
    "ワヰヱヲ",
    "ンヴ",
);

/// Small-form katakana.
pub const KATAKANA_SMALL: &str = "ァィゥェォャュョヮッ";

pub const LATIN_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LATIN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// The long-vowel mark. Classified as its own singleton class and never
/// substituted.
pub const KATAKANA_LONG_VOWEL: char = 'ー';

/// CJK Unified Ideographs block, inclusive on both ends.
pub const KANJI_RANGE_START: u32 = 0x4E00;
pub const KANJI_RANGE_END: u32 = 0x9FFF;

/// Number of code points in the kanji substitution range.
pub const KANJI_RANGE_COUNT: u32 = KANJI_RANGE_END - KANJI_RANGE_START + 1;

/// Tests whether a character falls in the CJK Unified Ideographs block.
#[inline]
pub fn is_kanji(c: char) -> bool {
    (KANJI_RANGE_START..=KANJI_RANGE_END).contains(&(c as u32))
}

/// Candidate alphabets for every finite character class, plus the classify
/// index built from them.
///
/// # Invariants
/// - The six alphabets are mutually disjoint, duplicate-free, and contain
///   neither the long-vowel mark nor any code point in the kanji range.
/// - `index` maps exactly the union of the six alphabets; it is rebuilt (and
///   the invariants revalidated) whenever a table is constructed or
///   deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetTable {
    pub hiragana_normal: Vec<char>,
    pub hiragana_small: Vec<char>,
    pub katakana_normal: Vec<char>,
    pub katakana_small: Vec<char>,
    pub latin_upper: Vec<char>,
    pub latin_lower: Vec<char>,
    #[serde(skip)]
    index: FxHashMap<char, CharClass>,
}

impl AlphabetTable {
    /// Builds the built-in table covering the standard syllabaries and the
    /// Latin alphabet.
    pub fn new() -> Self {
        Self::from_strings(
            HIRAGANA_NORMAL,
            HIRAGANA_SMALL,
            KATAKANA_NORMAL,
            KATAKANA_SMALL,
            LATIN_UPPER,
            LATIN_LOWER,
        )
        .expect("built-in alphabets are disjoint")
    }

    /// Builds a table from one string per finite class, validating the
    /// disjointness invariants.
    pub fn from_strings(
        hiragana_normal: &str,
        hiragana_small: &str,
        katakana_normal: &str,
        katakana_small: &str,
        latin_upper: &str,
        latin_lower: &str,
    ) -> Result<Self, AlphabetError> {
        let table = Self {
            hiragana_normal: hiragana_normal.chars().collect(),
            hiragana_small: hiragana_small.chars().collect(),
            katakana_normal: katakana_normal.chars().collect(),
            katakana_small: katakana_small.chars().collect(),
            latin_upper: latin_upper.chars().collect(),
            latin_lower: latin_lower.chars().collect(),
            index: FxHashMap::default(),
        };
        table.finalize()
    }

    /// Validates the invariants and (re)builds the classify index.
    ///
    /// Every constructor funnels through here, so a table in hand always has
    /// a consistent index.
    fn finalize(mut self) -> Result<Self, AlphabetError> {
        let mut index =
            FxHashMap::with_capacity_and_hasher(self.census(), Default::default());
        for (class, alphabet) in self.classes() {
            if alphabet.is_empty() {
                return Err(AlphabetError::Invalid(format!(
                    "alphabet for {:?} is empty",
                    class
                )));
            }
            for &ch in alphabet {
                if ch == KATAKANA_LONG_VOWEL {
                    return Err(AlphabetError::Invalid(format!(
                        "long-vowel mark {} cannot appear in the {:?} alphabet",
                        ch, class
                    )));
                }
                if is_kanji(ch) {
                    return Err(AlphabetError::Invalid(format!(
                        "kanji {} cannot appear in the {:?} alphabet",
                        ch, class
                    )));
                }
                if let Some(previous) = index.insert(ch, class) {
                    return Err(AlphabetError::Invalid(format!(
                        "character {} belongs to both {:?} and {:?}",
                        ch, previous, class
                    )));
                }
            }
        }
        self.index = index;
        Ok(self)
    }

    /// Total character count across the six alphabets.
    fn census(&self) -> usize {
        self.classes().iter().map(|(_, a)| a.len()).sum()
    }

    fn classes(&self) -> [(CharClass, &[char]); 6] {
        [
            (CharClass::HiraganaSmall, &self.hiragana_small),
            (CharClass::HiraganaNormal, &self.hiragana_normal),
            (CharClass::KatakanaSmall, &self.katakana_small),
            (CharClass::KatakanaNormal, &self.katakana_normal),
            (CharClass::LatinUpper, &self.latin_upper),
            (CharClass::LatinLower, &self.latin_lower),
        ]
    }

    /// Classifies one character. Total: anything outside the known sets comes
    /// back as [`CharClass::Unclassified`].
    ///
    /// # Examples
    /// ```
    /// use mojimix::alphabet_lib::AlphabetTable;
    /// use mojimix::charclass::CharClass;
    ///
    /// let table = AlphabetTable::new();
    /// assert_eq!(table.classify('あ'), CharClass::HiraganaNormal);
    /// assert_eq!(table.classify('ー'), CharClass::KatakanaLongVowel);
    /// assert_eq!(table.classify('7'), CharClass::Unclassified);
    /// ```
    #[inline]
    pub fn classify(&self, c: char) -> CharClass {
        if c == KATAKANA_LONG_VOWEL {
            return CharClass::KatakanaLongVowel;
        }
        if let Some(&class) = self.index.get(&c) {
            return class;
        }
        if is_kanji(c) {
            return CharClass::Kanji;
        }
        CharClass::Unclassified
    }

    /// Candidate alphabet for a finite class, or `None` for the long-vowel
    /// fixed point, the kanji range and `Unclassified`.
    pub fn alphabet(&self, class: CharClass) -> Option<&[char]> {
        match class {
            CharClass::HiraganaSmall => Some(&self.hiragana_small),
            CharClass::HiraganaNormal => Some(&self.hiragana_normal),
            CharClass::KatakanaSmall => Some(&self.katakana_small),
            CharClass::KatakanaNormal => Some(&self.katakana_normal),
            CharClass::LatinUpper => Some(&self.latin_upper),
            CharClass::LatinLower => Some(&self.latin_lower),
            _ => None,
        }
    }

    /// Writes the table to a CBOR profile file.
    pub fn serialize_to_cbor<P: AsRef<Path>>(&self, path: P) -> Result<(), AlphabetError> {
        let bytes = serde_cbor::to_vec(self).map_err(|err| {
            Self::set_last_error(&format!("Failed to serialize alphabet profile: {}", err));
            AlphabetError::from(err)
        })?;
        fs::write(path, bytes).map_err(|err| {
            Self::set_last_error(&format!("Failed to write alphabet profile: {}", err));
            AlphabetError::from(err)
        })
    }

    /// Loads a table from a CBOR profile file, revalidating the invariants.
    pub fn from_cbor_file<P: AsRef<Path>>(path: P) -> Result<Self, AlphabetError> {
        let bytes = fs::read(path).map_err(|err| {
            Self::set_last_error(&format!("Failed to read alphabet profile: {}", err));
            AlphabetError::from(err)
        })?;
        let table: Self = serde_cbor::from_slice(&bytes).map_err(|err| {
            Self::set_last_error(&format!("Failed to parse alphabet profile: {}", err));
            AlphabetError::from(err)
        })?;
        table.finalize().map_err(|err| {
            Self::set_last_error(&err.to_string());
            err
        })
    }

    // Function to set the last error message
    pub fn set_last_error(err_msg: &str) {
        let mut last_error = LAST_ERROR.lock().unwrap();
        *last_error = Some(err_msg.to_string());
    }

    // Function to retrieve the last error message
    pub fn get_last_error() -> Option<String> {
        let last_error = LAST_ERROR.lock().unwrap();
        last_error.clone()
    }
}

impl Default for AlphabetTable {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum AlphabetError {
    IoError(String),
    ParseError(String),
    Invalid(String),
}

impl std::fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphabetError::IoError(msg) => write!(f, "I/O Error: {}", msg),
            AlphabetError::ParseError(msg) => write!(f, "Parse Error: {}", msg),
            AlphabetError::Invalid(msg) => write!(f, "Invalid Alphabet: {}", msg),
        }
    }
}

impl Error for AlphabetError {}

impl From<io::Error> for AlphabetError {
    fn from(err: io::Error) -> Self {
        AlphabetError::IoError(err.to_string())
    }
}

impl From<serde_cbor::Error> for AlphabetError {
    fn from(err: serde_cbor::Error) -> Self {
        AlphabetError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_table_is_valid() {
        let table = AlphabetTable::new();
        assert_eq!(table.hiragana_normal.len(), table.katakana_normal.len());
        assert_eq!(table.hiragana_small.len(), 10);
        assert_eq!(table.latin_upper.len(), 26);
    }

    #[test]
    fn overlap_is_rejected() {
        let result = AlphabetTable::from_strings("あい", "あ", "ア", "ァ", "A", "a");
        assert!(matches!(result, Err(AlphabetError::Invalid(_))));
    }

    #[test]
    fn long_vowel_in_alphabet_is_rejected() {
        let result = AlphabetTable::from_strings("あ", "ぁ", "アー", "ァ", "A", "a");
        assert!(matches!(result, Err(AlphabetError::Invalid(_))));
    }

    #[test]
    fn kanji_in_alphabet_is_rejected() {
        let result = AlphabetTable::from_strings("あ山", "ぁ", "ア", "ァ", "A", "a");
        assert!(matches!(result, Err(AlphabetError::Invalid(_))));
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        let result = AlphabetTable::from_strings("", "ぁ", "ア", "ァ", "A", "a");
        assert!(matches!(result, Err(AlphabetError::Invalid(_))));
    }

    #[test]
    fn kanji_range_is_inclusive() {
        assert!(is_kanji('\u{4E00}'));
        assert!(is_kanji('\u{9FFF}'));
        assert!(!is_kanji('\u{4DFF}'));
        assert!(!is_kanji('\u{A000}'));
    }
}
