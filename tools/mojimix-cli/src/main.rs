use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};

use clap::{Arg, Command};
use encoding_rs::Encoding;
use encoding_rs_io::DecodeReaderBytesBuilder;

use mojimix::{Mode, Mojimix, RandomSource, SeededRandom, Session, ThreadRandom, MODE_LIST};

fn read_input(input: &mut dyn Read, is_console: bool) -> Result<Vec<u8>, io::Error> {
    let mut buffer = Vec::new();

    if is_console {
        // Read chunks of data when input is from the console
        let mut chunk = [0; 1024]; // 1 KB chunks
        while let Ok(bytes_read) = input.read(&mut chunk) {
            if bytes_read == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..bytes_read]);
        }
    } else {
        // Read the entire input at once when it's from a file
        input.read_to_end(&mut buffer)?;
    }

    Ok(buffer)
}

fn decode_input(buffer: &[u8], in_enc: &str) -> Result<String, io::Error> {
    match in_enc {
        "UTF-8" => Ok(String::from_utf8_lossy(buffer).into_owned()),
        _ => {
            let encoding = Encoding::for_label(in_enc.as_bytes()).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unsupported input encoding: {}", in_enc),
                )
            })?;
            let mut decoder = DecodeReaderBytesBuilder::new()
                .encoding(Some(encoding))
                .build(buffer);
            let mut decoded = String::new();
            decoder.read_to_string(&mut decoded)?;
            Ok(decoded)
        }
    }
}

fn encode_and_write_output(
    output_str: &str,
    out_enc: &str,
    output: &mut dyn Write,
) -> Result<(), io::Error> {
    match out_enc {
        "UTF-8" => write!(output, "{}", output_str),
        _ => {
            let encoding = Encoding::for_label(out_enc.as_bytes()).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unsupported output encoding: {}", out_enc),
                )
            })?;
            let (encoded_bytes, _, _) = encoding.encode(output_str);
            output.write_all(&encoded_bytes)
        }
    }
}

fn remove_utf8_bom(input: &mut Vec<u8>) {
    // UTF-8 BOM: EF BB BF
    if input.len() >= 3 && &input[0..3] == &[0xEF, 0xBB, 0xBF] {
        input.drain(0..3); // Remove BOM from the beginning
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const BLUE: &str = "\x1B[1;34m";
    const RESET: &str = "\x1B[0m";

    let matches = Command::new("Mojimix")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("file")
                .help("Read original text from <file>."),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("file")
                .help("Write randomized text to <file>."),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("mode")
                .help("Substitution mode: [kanji|hira|kata|alpha|all]")
                .required(true),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("number")
                .help("Seed the random source for reproducible output."),
        )
        .arg(
            Arg::new("repeat")
                .short('r')
                .long("repeat")
                .value_name("count")
                .default_value("1")
                .help("Emit <count> renditions; after the first, each regenerates with the same mode."),
        )
        .arg(
            Arg::new("in_enc")
                .long("in-enc")
                .value_name("encoding")
                .default_value("UTF-8")
                .help("Encoding for input: UTF-8|Shift_JIS|EUC-JP|ISO-2022-JP"),
        )
        .arg(
            Arg::new("out_enc")
                .long("out-enc")
                .value_name("encoding")
                .default_value("UTF-8")
                .help("Encoding for output: UTF-8|Shift_JIS|EUC-JP|ISO-2022-JP"),
        )
        .about(format!(
            "{BLUE}Mojimix: Command Line Character-Class-Preserving Text Randomizer{RESET}"
        ))
        .get_matches();

    let input_file = matches.get_one::<String>("input");
    let output_file = matches.get_one::<String>("output");
    let mode_arg = matches.get_one::<String>("mode").unwrap();
    let mode = match Mode::from_str(mode_arg) {
        Some(mode) => mode,
        None => {
            eprintln!("Invalid mode: {}", mode_arg);
            eprintln!("Valid modes: {:?}", MODE_LIST);
            return Ok(());
        }
    };
    let repeat = matches
        .get_one::<String>("repeat")
        .map_or(1, |value| value.parse::<usize>().unwrap_or(1))
        .max(1);
    let seed = match matches.get_one::<String>("seed") {
        Some(value) => Some(value.parse::<u64>().map_err(|err| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid seed: {}", err))
        })?),
        None => None,
    };
    let in_enc = matches.get_one::<String>("in_enc").unwrap();
    let out_enc = matches.get_one::<String>("out_enc").unwrap();

    // Determine input source
    let mut input: Box<dyn Read> = match input_file {
        Some(file_name) => Box::new(BufReader::new(File::open(file_name)?)),
        None => {
            if io::stdin().is_terminal() {
                // If input is from the terminal
                println!("{BLUE}Input text to randomize, <ctrl-z> or <ctrl-d> to submit:{RESET}");
            }
            Box::new(io::stdin())
        }
    };

    // Read input with chunked reading for console, or all at once for files
    let is_console = input_file.is_none();
    let mut buffer = read_input(&mut *input, is_console)?;

    // Remove BOM if present in UTF-8 input
    if in_enc == "UTF-8" && out_enc != "UTF-8" {
        remove_utf8_bom(&mut buffer);
    }

    // Decode input based on encoding
    let input_str = decode_input(&buffer, in_enc)?;

    // Run the conversion; one seeded stream spans all repeats so the whole
    // run is reproducible from a single seed
    let mojimix = Mojimix::new();
    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };
    let mut session = Session::new();
    let mut renditions = Vec::with_capacity(repeat);
    renditions.push(session.convert_with(&mojimix, &input_str, mode, &mut *rng));
    for _ in 1..repeat {
        renditions.push(session.regenerate_with(&mojimix, &input_str, &mut *rng));
    }
    let output_str = renditions.join("\n");

    // Initialize output writer
    let mut output = BufWriter::new(match output_file {
        Some(file_name) => Box::new(File::create(file_name)?) as Box<dyn Write>,
        None => Box::new(io::stdout()) as Box<dyn Write>,
    });

    // Encode and write output
    encode_and_write_output(&output_str, out_enc, &mut output)?;

    // Print conversion summary
    if let Some(input_file) = input_file {
        println!(
            "{BLUE}Randomization completed ({mode_arg}): {} -> {}{RESET}",
            input_file,
            output_file.unwrap_or(&"stdout".to_string())
        );
    } else {
        println!(
            "{BLUE}Randomization completed ({mode_arg}): <stdin> -> {}{RESET}",
            output_file.unwrap_or(&"stdout".to_string())
        );
    }

    Ok(())
}
