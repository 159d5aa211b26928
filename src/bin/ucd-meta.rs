//! Command-line interface for ucd-meta
//! This binary inspects the metadata of a Unicode Character Database file.
//!
//! Usage:
//!   ucd-meta inspect `<path>`                      - Print a metadata summary
//!   ucd-meta heading `<path>`                      - Print the heading comment block
//!   ucd-meta sections `<path>` [--format `<fmt>`]  - Print the parsed sections

use clap::{Arg, Command};
use std::fs;
use std::process;

use ucd_meta::versions::find_version;
use ucd_meta::{classify_line, LineKind, RawDataFile};

fn main() {
    let matches = Command::new("ucd-meta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Unicode Character Database file metadata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("inspect")
                .about("Print a metadata summary of a data file")
                .arg(
                    Arg::new("path")
                        .help("Path to the data file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("heading")
                .about("Print the heading comment block of a data file")
                .arg(
                    Arg::new("path")
                        .help("Path to the data file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("sections")
                .about("Print the parsed sections of a data file")
                .arg(
                    Arg::new("path")
                        .help("Path to the data file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('summary' or 'json')")
                        .default_value("summary"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("inspect", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_inspect_command(path);
        }
        Some(("heading", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_heading_command(path);
        }
        Some(("sections", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            handle_sections_command(path, format);
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn load_data_file(path: &str) -> RawDataFile {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: failed to read {}: {}", path, err);
            process::exit(1);
        }
    };

    match RawDataFile::new(&content) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error: failed to parse {}: {}", path, err);
            process::exit(1);
        }
    }
}

fn handle_inspect_command(path: &str) {
    let file = load_data_file(path);

    println!("file name: {}", file.file_name.as_deref().unwrap_or("(not declared)"));
    match &file.version {
        Some(version) => {
            print!("version:   {}", version);
            if let Some(known) = find_version(version) {
                print!(" ({})", known.documentation_url);
            }
            println!();
        }
        None => println!("version:   (not declared)"),
    }

    match &file.heading {
        Some(heading) => println!("heading:   {} lines", heading.lines().count()),
        None => println!("heading:   (none)"),
    }

    let mut comments = 0usize;
    let mut data = 0usize;
    let mut directives = 0usize;
    for line in &file.lines {
        match classify_line(line) {
            LineKind::Data => data += 1,
            LineKind::MissingDirective => directives += 1,
            LineKind::Empty => {}
            _ => comments += 1,
        }
    }
    println!("body:      {} data lines, {} comment lines, {} @missing directives", data, comments, directives);

    if file.sections.is_empty() {
        println!("sections:  (none)");
    } else {
        println!("sections:  {}", file.sections.len());
        for (name, section) in &file.sections {
            println!("  {} ({} lines)", name, section.lines.len());
        }
    }

    println!("eof mark:  {}", if file.has_eof { "present" } else { "absent" });
}

fn handle_heading_command(path: &str) {
    let file = load_data_file(path);
    match &file.heading {
        Some(heading) => println!("{}", heading),
        None => process::exit(1),
    }
}

fn handle_sections_command(path: &str, format: &str) {
    let file = load_data_file(path);

    match format {
        "json" => match serde_json::to_string_pretty(&file.sections) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("error: failed to serialize sections: {}", err);
                process::exit(1);
            }
        },
        "summary" => {
            for (name, section) in &file.sections {
                println!("{} ({} lines)", name, section.lines.len());
                if !section.description.is_empty() {
                    for line in section.description.lines() {
                        println!("    {}", line);
                    }
                }
            }
        }
        other => {
            eprintln!("error: unknown format '{}', expected 'summary' or 'json'", other);
            process::exit(1);
        }
    }
}
