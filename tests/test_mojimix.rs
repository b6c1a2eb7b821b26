use mojimix::{CharClass, Mode, Mojimix, SeededRandom, Session};

#[cfg(test)]
mod tests {
    use super::*;

    fn all_modes() -> [Mode; 5] {
        [
            Mode::Kanji,
            Mode::Hiragana,
            Mode::Katakana,
            Mode::Latin,
            Mode::All,
        ]
    }

    #[test]
    fn length_preservation_test() {
        let inputs = [
            "",
            "あいう",
            "アイウエオー",
            "山田太郎",
            "Hello, World!",
            "これはペンです。ABC abc 12:30!",
        ];
        let mojimix = Mojimix::new();
        for input in inputs {
            for mode in all_modes() {
                let actual_output = mojimix.convert(input, mode);
                assert_eq!(
                    actual_output.chars().count(),
                    input.chars().count(),
                    "mode {:?} changed character count of {:?}",
                    mode,
                    input
                );
            }
        }
    }

    #[test]
    fn hiragana_scenario_test() {
        let input = "あいう";
        let mojimix = Mojimix::new();
        let actual_output = mojimix.hiragana(input);
        assert_eq!(actual_output.chars().count(), 3);
        for ch in actual_output.chars() {
            assert_eq!(mojimix.table.classify(ch), CharClass::HiraganaNormal);
        }
    }

    #[test]
    fn small_kana_stays_small_test() {
        let input = "ゃっぁ";
        let mojimix = Mojimix::new();
        let actual_output = mojimix.hiragana(input);
        for ch in actual_output.chars() {
            assert_eq!(mojimix.table.classify(ch), CharClass::HiraganaSmall);
        }
    }

    #[test]
    fn long_vowel_fixed_point_test() {
        let input = "ー";
        let mojimix = Mojimix::new();
        assert_eq!(mojimix.katakana(input), "ー");
        assert_eq!(mojimix.all(input), "ー");
    }

    #[test]
    fn katakana_closure_test() {
        let input = "カタカナーッ";
        let mojimix = Mojimix::new();
        let actual_output = mojimix.katakana(input);
        let expected_classes = [
            CharClass::KatakanaNormal,
            CharClass::KatakanaNormal,
            CharClass::KatakanaNormal,
            CharClass::KatakanaNormal,
            CharClass::KatakanaLongVowel,
            CharClass::KatakanaSmall,
        ];
        for (ch, expected) in actual_output.chars().zip(expected_classes) {
            assert_eq!(mojimix.table.classify(ch), expected);
        }
    }

    #[test]
    fn case_preservation_test() {
        let mojimix = Mojimix::new();
        let upper = mojimix.latin("ABC");
        assert_eq!(upper.chars().count(), 3);
        for ch in upper.chars() {
            assert!(ch.is_ascii_uppercase());
        }
        let lower = mojimix.all("abc");
        for ch in lower.chars() {
            assert!(ch.is_ascii_lowercase());
        }
    }

    #[test]
    fn unclassified_passthrough_test() {
        let input = "12:30, hello!";
        let mojimix = Mojimix::new();
        // No Latin coverage under kanji mode, digits/punctuation never covered
        assert_eq!(mojimix.kanji(input), input);
    }

    #[test]
    fn uncovered_script_passthrough_test() {
        let mojimix = Mojimix::new();
        assert_eq!(mojimix.hiragana("アイウ"), "アイウ");
        assert_eq!(mojimix.katakana("あいう"), "あいう");
        assert_eq!(mojimix.latin("山田"), "山田");
    }

    #[test]
    fn kanji_range_test() {
        let input = "山田";
        let mojimix = Mojimix::new();
        let actual_output = mojimix.kanji(input);
        assert_eq!(actual_output.chars().count(), 2);
        for ch in actual_output.chars() {
            let cp = ch as u32;
            assert!((0x4E00..=0x9FFF).contains(&cp), "out of block: U+{:04X}", cp);
        }
    }

    #[test]
    fn mixed_text_class_closure_test() {
        let input = "これはペンです。ABC 123ー山";
        let mojimix = Mojimix::new();
        let actual_output = mojimix.all(input);
        for (in_ch, out_ch) in input.chars().zip(actual_output.chars()) {
            let in_class = mojimix.table.classify(in_ch);
            match in_class {
                CharClass::Unclassified => assert_eq!(in_ch, out_ch),
                CharClass::KatakanaLongVowel => assert_eq!(out_ch, 'ー'),
                _ => assert_eq!(mojimix.table.classify(out_ch), in_class),
            }
        }
    }

    #[test]
    fn seeded_output_is_deterministic_test() {
        let input = "ひらがなとカタカナとKANJIの漢字";
        let mojimix = Mojimix::new();
        let mut rng_a = SeededRandom::new(42);
        let mut rng_b = SeededRandom::new(42);
        let out_a = mojimix.convert_with(input, Mode::All, &mut rng_a);
        let out_b = mojimix.convert_with(input, Mode::All, &mut rng_b);
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn long_input_actually_changes_test() {
        // 100 kanji draws from a 20,992-point range: a full fixed-point run
        // does not happen with this seed
        let input = "漢".repeat(100);
        let mojimix = Mojimix::new();
        let mut rng = SeededRandom::new(42);
        let actual_output = mojimix.convert_with(&input, Mode::Kanji, &mut rng);
        assert_ne!(actual_output, input);
    }

    #[test]
    fn session_records_last_mode_test() {
        let mojimix = Mojimix::new();
        let mut session = Session::new();
        assert_eq!(session.last_mode(), None);

        session.convert(&mojimix, "アイウ", Mode::Katakana);
        assert_eq!(session.last_mode(), Some(Mode::Katakana));

        // Regenerate re-runs the recorded mode: output stays katakana
        let regenerated = session.regenerate(&mojimix, "アイウ");
        for ch in regenerated.chars() {
            assert_eq!(mojimix.table.classify(ch), CharClass::KatakanaNormal);
        }
        assert_eq!(session.last_mode(), Some(Mode::Katakana));
    }

    #[test]
    fn session_regenerate_without_mode_falls_back_to_all_test() {
        let mojimix = Mojimix::new();
        let mut session = Session::new();
        let output = session.regenerate(&mojimix, "あア山A");
        assert_eq!(session.last_mode(), Some(Mode::All));
        assert_eq!(output.chars().count(), 4);
    }

    #[test]
    fn session_clear_test() {
        let mojimix = Mojimix::new();
        let mut session = Session::new();
        session.convert(&mojimix, "あいう", Mode::Hiragana);
        session.clear();
        assert_eq!(session.last_mode(), None);
    }

    #[test]
    fn detect_mode_test() {
        let mojimix = Mojimix::new();
        assert_eq!(mojimix.detect_mode("あいうえお"), Some(Mode::Hiragana));
        assert_eq!(mojimix.detect_mode("カタカナー"), Some(Mode::Katakana));
        assert_eq!(mojimix.detect_mode("Hello"), Some(Mode::Latin));
        assert_eq!(mojimix.detect_mode("山田"), Some(Mode::Kanji));
        assert_eq!(mojimix.detect_mode("こんにちはWorld"), Some(Mode::All));
        assert_eq!(mojimix.detect_mode("12:30, !!"), None);
        assert_eq!(mojimix.detect_mode(""), None);
    }

    #[test]
    fn empty_and_degenerate_inputs_test() {
        let mojimix = Mojimix::new();
        for mode in all_modes() {
            assert_eq!(mojimix.convert("", mode), "");
            assert_eq!(mojimix.convert("\t\n 12:30", mode), "\t\n 12:30");
        }
    }
}
