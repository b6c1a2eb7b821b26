mod json_io;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::{Arg, Command};
use mojimix::alphabet_lib::AlphabetTable;

use crate::json_io::AlphabetTableSerde;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const BLUE: &str = "\x1B[1;34m"; // Bold Blue
    const RESET: &str = "\x1B[0m"; // Reset color

    let matches = Command::new("Alphabet Generator")
        .about(format!(
            "{BLUE}Alphabet Generator: Alphabet Profile Artifacts for Mojimix{RESET}"
        ))
        .after_help(
            "Examples:\n\
         \n\
         alphabet-generate --format json --pretty --output alphabets.json\n\
         alphabet-generate --format cbor --output alphabets.cbor\n\
         alphabet-generate --format cbor --from alphabets.json --output custom.cbor\n\
         \n\
         The generated CBOR can be loaded with AlphabetTable::from_cbor_file()\n\
         or passed to the engine via Mojimix::from_cbor_file().\n",
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("format")
                .default_value("json")
                .value_parser(["json", "cbor"])
                .help("Profile format: [json|cbor]"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(clap::ArgAction::SetTrue)
                .help("Pretty-print JSON when --format json"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("filename")
                .help("Start from a JSON profile instead of the built-in alphabets."),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("filename")
                .help("Write generated profile to <filename>. If not specified, a default filename is used."),
        )
        .get_matches();

    let profile_format = matches.get_one::<String>("format").map(String::as_str);
    let pretty_json = matches.get_flag("pretty"); // default compact if false

    let default_output = match profile_format {
        Some("cbor") => "alphabets.cbor",
        _ => "alphabets.json",
    };
    let output_file = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or(default_output);

    // Built-in alphabets unless a JSON profile is given; either way the
    // result goes through the library's validation
    let table = match matches.get_one::<String>("from") {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let dto: AlphabetTableSerde = serde_json::from_str(&json)?;
            dto.into_internal()?
        }
        None => AlphabetTable::new(),
    };

    match profile_format {
        Some("cbor") => {
            table.serialize_to_cbor(output_file)?;
            eprintln!("{BLUE}Alphabet profile saved in CBOR format at: {output_file}{RESET}");
        }
        Some("json") => {
            // IMPORTANT: use the DTO for JSON so each alphabet is one string
            write_reference_json(&table, output_file, /* pretty = */ pretty_json)?;
            let style = if pretty_json { "pretty" } else { "compact" };
            eprintln!("{BLUE}Alphabet profile saved in JSON ({style}) at: {output_file}{RESET}");
        }
        other => {
            let format_str = other.unwrap_or("unknown");
            eprintln!("{BLUE}Unsupported format: {format_str}{RESET}");
        }
    }

    Ok(())
}

pub fn write_reference_json(
    table: &AlphabetTable,
    path: impl AsRef<Path>,
    pretty: bool,
) -> io::Result<()> {
    let dto: AlphabetTableSerde = table.into();
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut w, &dto).map_err(to_io)?;
    } else {
        serde_json::to_writer(&mut w, &dto).map_err(to_io)?;
        // newline for POSIX-y tools
        w.write_all(b"\n")?;
    }
    w.flush()
}

// Small adapter so we can stay in io::Result
fn to_io<E: std::error::Error + Send + Sync + 'static>(e: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e)
}
