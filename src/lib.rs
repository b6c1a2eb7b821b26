//! Character-class-preserving text randomizer.
//!
//! `mojimix` replaces every character of the input with a random character of
//! the same script/case class — hiragana stays hiragana, small kana stay
//! small, uppercase stays uppercase, kanji become other code points of the
//! CJK Unified Ideographs block — while whitespace, punctuation, digits and
//! anything else pass through untouched. The shape of a text survives; the
//! content is scrambled.
//!
//! ```
//! use mojimix::{Mode, Mojimix};
//!
//! let mojimix = Mojimix::new();
//! let output = mojimix.convert("これはペンです。ABC 123", Mode::All);
//! assert_eq!(output.chars().count(), "これはペンです。ABC 123".chars().count());
//! assert!(output.ends_with(" 123")); // digits and spaces are never touched
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

pub mod alphabet_lib;
pub mod charclass;
pub mod rng;
pub mod utils;

pub use crate::alphabet_lib::{AlphabetError, AlphabetTable};
pub use crate::charclass::{CharClass, Mode, MODE_LIST};
pub use crate::rng::{RandomSource, SeededRandom, ThreadRandom};
pub use crate::utils::{find_max_utf8_length, format_thousand};

use crate::alphabet_lib::{KANJI_RANGE_COUNT, KANJI_RANGE_START};

static DEFAULT_TABLE: Lazy<AlphabetTable> = Lazy::new(AlphabetTable::new);

// ASCII digits, punctuation, whitespace and control characters; Latin letters
// stay in, they are a substitutable class here.
static SCRIPT_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[!-/:-@\[-`{-~\t\n\v\f\r 0-9]").unwrap());

/// The randomizer engine: an [`AlphabetTable`] plus the substitution policy.
///
/// All conversion methods are pure apart from the random source; the engine
/// itself holds no mutable state and can be shared freely.
pub struct Mojimix {
    pub table: AlphabetTable,
}

impl Mojimix {
    /// Engine over the built-in alphabets.
    pub fn new() -> Self {
        Self {
            table: DEFAULT_TABLE.clone(),
        }
    }

    /// Engine over a custom, already validated table.
    pub fn from_table(table: AlphabetTable) -> Self {
        Self { table }
    }

    /// Engine over a CBOR alphabet profile (see the `alphabet-generate` tool).
    pub fn from_cbor_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, AlphabetError> {
        Ok(Self {
            table: AlphabetTable::from_cbor_file(path)?,
        })
    }

    /// Converts `input` under `mode` with the thread-local random source.
    ///
    /// Character count is preserved; every substituted character stays in its
    /// class; everything the mode does not cover passes through unchanged.
    pub fn convert(&self, input: &str, mode: Mode) -> String {
        let mut rng = ThreadRandom::new();
        self.convert_with(input, mode, &mut rng)
    }

    /// Converts `input` under `mode`, drawing every pick from `rng`.
    ///
    /// With a [`SeededRandom`] this is fully deterministic, which is what the
    /// CLI `--seed` flag and the tests use.
    pub fn convert_with(&self, input: &str, mode: Mode, rng: &mut dyn RandomSource) -> String {
        let mut result = String::with_capacity(input.len());
        for ch in input.chars() {
            result.push(self.convert_char(ch, mode, rng));
        }
        result
    }

    /// One independent substitution decision.
    fn convert_char(&self, ch: char, mode: Mode, rng: &mut dyn RandomSource) -> char {
        let class = self.table.classify(ch);
        if !mode.covers(class) {
            return ch;
        }
        match class {
            // The long-vowel mark is covered but fixed.
            CharClass::KatakanaLongVowel => ch,
            CharClass::Kanji => {
                let cp = KANJI_RANGE_START + rng.pick(KANJI_RANGE_COUNT as usize) as u32;
                // The block sits below the surrogates, every draw is a valid scalar.
                char::from_u32(cp).unwrap_or(ch)
            }
            _ => match self.table.alphabet(class) {
                Some(alphabet) if !alphabet.is_empty() => alphabet[rng.pick(alphabet.len())],
                _ => ch,
            },
        }
    }

    pub fn kanji(&self, input: &str) -> String {
        self.convert(input, Mode::Kanji)
    }

    pub fn hiragana(&self, input: &str) -> String {
        self.convert(input, Mode::Hiragana)
    }

    pub fn katakana(&self, input: &str) -> String {
        self.convert(input, Mode::Katakana)
    }

    pub fn latin(&self, input: &str) -> String {
        self.convert(input, Mode::Latin)
    }

    pub fn all(&self, input: &str) -> String {
        self.convert(input, Mode::All)
    }

    /// Guesses the narrowest mode that would substitute anything in `input`.
    ///
    /// ASCII digits/punctuation/whitespace are stripped first and the probe
    /// is capped at 200 bytes on a UTF-8 boundary. Returns the single script
    /// family found, [`Mode::All`] when several scripts are mixed, or `None`
    /// when nothing is classifiable (in which case conversion would be a
    /// no-op under every mode).
    pub fn detect_mode(&self, input: &str) -> Option<Mode> {
        if input.is_empty() {
            return None;
        }
        let stripped = SCRIPT_NOISE.replace_all(input, "");
        let max_bytes = find_max_utf8_length(&stripped, 200);
        let probe = &stripped[..max_bytes];

        let mut found: Option<Mode> = None;
        for ch in probe.chars() {
            let family = match self.table.classify(ch) {
                CharClass::HiraganaSmall | CharClass::HiraganaNormal => Mode::Hiragana,
                CharClass::KatakanaLongVowel
                | CharClass::KatakanaSmall
                | CharClass::KatakanaNormal => Mode::Katakana,
                CharClass::LatinUpper | CharClass::LatinLower => Mode::Latin,
                CharClass::Kanji => Mode::Kanji,
                CharClass::Unclassified => continue,
            };
            match found {
                None => found = Some(family),
                Some(existing) if existing == family => {}
                Some(_) => return Some(Mode::All),
            }
        }
        found
    }
}

impl Default for Mojimix {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-owned conversion session: remembers the mode of the last
/// conversion so a "regenerate" action can re-run it.
///
/// This is the only state in the crate with a lifecycle, and it lives with
/// the caller rather than in a module-level global.
#[derive(Debug, Default)]
pub struct Session {
    last_mode: Option<Mode>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts and records `mode` as the last one used.
    pub fn convert(&mut self, engine: &Mojimix, input: &str, mode: Mode) -> String {
        self.last_mode = Some(mode);
        engine.convert(input, mode)
    }

    /// Like [`Session::convert`] but with an injected random source.
    pub fn convert_with(
        &mut self,
        engine: &Mojimix,
        input: &str,
        mode: Mode,
        rng: &mut dyn RandomSource,
    ) -> String {
        self.last_mode = Some(mode);
        engine.convert_with(input, mode, rng)
    }

    /// Re-runs the last recorded mode on `input`, drawing fresh randomness.
    ///
    /// When nothing has been generated yet, falls back to [`Mode::All`] and
    /// records it.
    pub fn regenerate(&mut self, engine: &Mojimix, input: &str) -> String {
        let mode = self.last_mode.unwrap_or(Mode::All);
        self.convert(engine, input, mode)
    }

    /// Like [`Session::regenerate`] but with an injected random source.
    pub fn regenerate_with(
        &mut self,
        engine: &Mojimix,
        input: &str,
        rng: &mut dyn RandomSource,
    ) -> String {
        let mode = self.last_mode.unwrap_or(Mode::All);
        self.convert_with(engine, input, mode, rng)
    }

    pub fn last_mode(&self) -> Option<Mode> {
        self.last_mode
    }

    /// Forgets the recorded mode, as when the input is cleared.
    pub fn clear(&mut self) {
        self.last_mode = None;
    }
}
