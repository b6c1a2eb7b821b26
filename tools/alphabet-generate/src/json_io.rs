// json_io.rs (CLI only)
use mojimix::alphabet_lib::{AlphabetError, AlphabetTable};
use serde::{Deserialize, Serialize};

/// JSON-facing shape of an alphabet profile: one string per class, in reading
/// order, so profiles stay hand-editable and diff-friendly.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AlphabetTableSerde {
    pub hiragana_normal: String,
    pub hiragana_small: String,
    pub katakana_normal: String,
    pub katakana_small: String,
    pub latin_upper: String,
    pub latin_lower: String,
}

impl AlphabetTableSerde {
    /// Converts the DTO back into the validated internal table.
    ///
    /// Fails on the same invariants the library enforces: overlapping
    /// alphabets, the long-vowel mark, kanji-range characters, empty classes.
    pub fn into_internal(self) -> Result<AlphabetTable, AlphabetError> {
        AlphabetTable::from_strings(
            &self.hiragana_normal,
            &self.hiragana_small,
            &self.katakana_normal,
            &self.katakana_small,
            &self.latin_upper,
            &self.latin_lower,
        )
    }
}

impl From<&AlphabetTable> for AlphabetTableSerde {
    fn from(table: &AlphabetTable) -> Self {
        Self {
            hiragana_normal: table.hiragana_normal.iter().collect(),
            hiragana_small: table.hiragana_small.iter().collect(),
            katakana_normal: table.katakana_normal.iter().collect(),
            katakana_small: table.katakana_small.iter().collect(),
            latin_upper: table.latin_upper.iter().collect(),
            latin_lower: table.latin_lower.iter().collect(),
        }
    }
}
