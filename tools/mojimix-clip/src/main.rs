extern crate copypasta;

use std::env;

use copypasta::{ClipboardContext, ClipboardProvider};
use mojimix::{find_max_utf8_length, format_thousand, Mode, Mojimix, MODE_LIST};

fn display_script(mode: Option<Mode>) -> &'static str {
    match mode {
        Some(Mode::Hiragana) => "Hiragana ひらがな",
        Some(Mode::Katakana) => "Katakana カタカナ",
        Some(Mode::Kanji) => "Kanji 漢字",
        Some(Mode::Latin) => "Latin 英字",
        Some(Mode::All) => "Mixed scripts 混合",
        None => "No substitutable script 其他",
    }
}

fn main() {
    const RED: &str = "\x1B[1;31m";
    const GREEN: &str = "\x1B[1;32m";
    const YELLOW: &str = "\x1B[1;33m";
    const BLUE: &str = "\x1B[1;34m";
    const RESET: &str = "\x1B[0m";

    let args: Vec<String> = env::args().collect();
    let mut requested_mode: Option<Mode> = None;

    if args.len() > 1 {
        let mode_arg = args[1].to_lowercase();
        if mode_arg == "help" {
            eprintln!("Mojimix-Clip Text Randomizer version 0.3.1");
            eprintln!("Usage: mojimix-clip [kanji|hira|kata|alpha|all|auto|help]\n");
            eprintln!("With no argument (or 'auto') the mode is detected from the clipboard text.");
            return;
        }

        if mode_arg != "auto" {
            match Mode::from_str(&mode_arg) {
                Some(mode) => requested_mode = Some(mode),
                None => {
                    eprintln!("{}Invalid mode: {}{}", RED, mode_arg, RESET);
                    eprintln!("Valid modes: {:?} or auto", MODE_LIST);
                    return;
                }
            }
        }
    }

    // Create a new clipboard context
    let mut ctx: ClipboardContext = match ClipboardContext::new() {
        Ok(context) => context,
        Err(err) => {
            eprintln!("{}Error creating clipboard context: {}{}", RED, err, RESET);
            return;
        }
    };

    // Attempt to read text from the clipboard
    match ctx.get_contents() {
        Ok(contents) => {
            let mojimix = Mojimix::new();
            let detected = mojimix.detect_mode(&contents);
            let mode = requested_mode.or(detected);

            let output = match mode {
                Some(mode) => mojimix.convert(&contents, mode),
                // Nothing substitutable anywhere: pass through
                None => contents.clone(),
            };

            let (display_input, display_output, ellipsis) = if contents.len() > 600 {
                let contents_max_utf8_length = find_max_utf8_length(&contents, 600);
                let output_max_utf8_length = find_max_utf8_length(&output, 600);
                (
                    &contents[..contents_max_utf8_length],
                    &output[..output_max_utf8_length],
                    "...",
                )
            } else {
                (contents.as_str(), output.as_str(), "")
            };

            eprintln!("Mojimix-Clip Text Randomizer version 0.3.1");
            eprintln!(
                "Mode: {}{}{}",
                BLUE,
                mode.map_or("none", |m| m.as_str()),
                RESET
            );
            eprintln!(
                "{}Clipboard Input ({}):\n{}{}{}\n",
                GREEN,
                display_script(detected),
                YELLOW,
                display_input,
                ellipsis
            );
            eprintln!(
                "{}Randomized Output:\n{}{}{}{}",
                GREEN, YELLOW, display_output, ellipsis, RESET
            );

            if let Err(err) = ctx.set_contents(output.clone()) {
                eprintln!("{}Error setting clipboard: {}{}", RED, err, RESET);
                // Fallback copy path: dump the full output so it can be
                // selected or piped from the terminal instead
                println!("{}", output);
            } else {
                let input_length = contents.chars().count();
                eprintln!(
                    "{}(Output set to clipboard: {} chars){}",
                    BLUE,
                    format_thousand(input_length),
                    RESET
                );
            }
        }
        Err(err) => {
            // If an error occurs, print the error message
            eprintln!("{}No text in clipboard: {}{}", RED, err, RESET)
        }
    }
}
