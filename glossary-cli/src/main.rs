//! Command-line interface for glossary
//! This binary turns a glossary file into a cross-linked set of HTML pages.
//!
//! Usage:
//!   glossary build [`<input>`] [`<output-dir>`] [--separators `<chars>`] [--create-dir]
//!   glossary terms `<input>`                                - Print the sorted terms
//!   glossary inspect `<input>` [--transform `<transform>`]   - Show terms, tokens or links
//!   glossary list-transforms                                - List the inspect transforms
//!
//! `build` asks for the input file and the output folder when they are not given.
//! Settings come from the built-in defaults, then `./glossary.toml` if present, then
//! `--config <file>`, then flags.

mod logging;
mod prompt;
mod transforms;

use clap::{Arg, ArgAction, ArgMatches, Command};
use glossary_babel::{build_site, publish, HtmlFormat};
use glossary_config::{GlossaryConfig, Loader};
use glossary_parser::Glossary;
use std::io;
use tracing::info;

const LOCAL_CONFIG: &str = "glossary.toml";

fn main() {
    let matches = Command::new("glossary")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate cross-linked HTML pages from a glossary file")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (-vv for more)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .global(true),
        )
        .arg(
            Arg::new("separators")
                .long("separators")
                .short('s')
                .help("Characters that separate words in definitions")
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Write the index page and one page per term")
                .arg(
                    Arg::new("input")
                        .help("Path to the glossary file (asked for when missing)")
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .help("Folder to store the html files in (asked for when missing)")
                        .index(2),
                )
                .arg(
                    Arg::new("create-dir")
                        .long("create-dir")
                        .help("Create the output folder if it does not exist")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("terms")
                .about("Print the terms of a glossary in index order, one per line")
                .arg(
                    Arg::new("input")
                        .help("Path to the glossary file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the terms, tokens or cross-references of a glossary")
                .arg(
                    Arg::new("input")
                        .help("Path to the glossary file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("transform")
                        .long("transform")
                        .short('t')
                        .help("What to print (see list-transforms)")
                        .default_value("terms"),
                ),
        )
        .subcommand(Command::new("list-transforms").about("List available inspect transforms"))
        .get_matches();

    // Global flags are propagated into the subcommand matches
    let verbosity = matches
        .subcommand()
        .map_or(0, |(_, sub_matches)| sub_matches.get_count("verbose"));
    logging::init_tracing(verbosity);

    match matches.subcommand() {
        Some(("build", build_matches)) => handle_build_command(build_matches),
        Some(("terms", terms_matches)) => {
            let path = required(terms_matches, "input");
            handle_inspect_command(terms_matches, path, "terms");
        }
        Some(("inspect", inspect_matches)) => {
            let path = required(inspect_matches, "input");
            let transform = required(inspect_matches, "transform");
            handle_inspect_command(inspect_matches, path, transform);
        }
        Some(("list-transforms", _)) => handle_list_transforms_command(),
        _ => unreachable!("a subcommand is required"),
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_else(|| fail(format!("missing argument '{}'", id)))
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Layer defaults, the local file, `--config` and flags.
fn load_config(matches: &ArgMatches, create_dir: bool) -> GlossaryConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(separators) = matches.get_one::<String>("separators") {
        loader = loader
            .set_override("tokenizer.separators", separators.as_str())
            .unwrap_or_else(|e| fail(format!("invalid separators: {}", e)));
    }
    if create_dir {
        loader = loader
            .set_override("output.create_dir", true)
            .unwrap_or_else(|e| fail(format!("invalid option: {}", e)));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(format!("configuration error: {}", e)))
}

fn load_glossary(path: &str) -> Glossary {
    Glossary::from_path(path)
        .unwrap_or_else(|e| fail(format!("cannot load glossary '{}': {}", path, e)))
}

/// Handle the build command
fn handle_build_command(matches: &ArgMatches) {
    let config = load_config(matches, matches.get_flag("create-dir"));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut arg_or_ask = |id: &str, message: &str| match matches.get_one::<String>(id) {
        Some(value) => value.clone(),
        None => prompt::ask(&mut input, &mut stdout, message)
            .unwrap_or_else(|e| fail(format!("cannot read {}: {}", id, e))),
    };
    let path = arg_or_ask("input", prompt::INPUT_PROMPT);
    let folder = arg_or_ask("output", prompt::FOLDER_PROMPT);

    let glossary = load_glossary(&path);
    info!(path = %path, terms = glossary.len(), "glossary loaded");

    let format = HtmlFormat::new(config.html_options());
    let site = build_site(&glossary, &config.separator_set(), &format)
        .unwrap_or_else(|e| fail(format!("cannot render pages: {}", e)));
    let result = publish(&site, &folder, &config.publish_options())
        .unwrap_or_else(|e| fail(format!("cannot write pages: {}", e)));

    println!("Wrote {} files to {}", result.files.len(), folder);
}

/// Handle the inspect command (`terms` is the "terms" transform)
fn handle_inspect_command(matches: &ArgMatches, path: &str, transform: &str) {
    let config = load_config(matches, false);
    let glossary = load_glossary(path);
    let output = transforms::execute_transform(&glossary, &config.separator_set(), transform)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {}", e);
            eprintln!("\nAvailable transforms:");
            for name in transforms::AVAILABLE_TRANSFORMS {
                eprintln!("  {}", name);
            }
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    for name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {}", name);
    }
}
