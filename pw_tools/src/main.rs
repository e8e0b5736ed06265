use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log;
use serde::{Deserialize, Serialize};
use serde_json;
use stderrlog;

use pw_deck_lib::batch;
use pw_deck_lib::export::{self, ExportFormat};
use pw_deck_lib::sim_code;
use pw_tool_lib::{codec, color, lines, odds, token};
use pw_tool_lib::{DiffReport, TextStats};

mod registry;

#[derive(Parser)]
#[command(name = "pw_tools")]
#[command(about = "Small text, deck and encoding utilities")]
struct Cli {
    /// Repeat for more detail on stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available tools, or fuzzy search them
    List {
        pattern: Option<String>,
        /// Include hidden tools
        #[arg(long)]
        all: bool,
    },
    /// Compare two text files line by line
    Diff {
        #[arg(required = true)]
        before_file_path: PathBuf,
        #[arg(required = true)]
        after_file_path: PathBuf,
        /// Emit the diff as JSON instead of marker lines
        #[arg(long)]
        json: bool,
    },
    /// Count characters, words, lines, sentences and paragraphs
    Count { input_path: Option<PathBuf> },
    /// Drop blank lines from text
    StripLines { input_path: Option<PathBuf> },
    /// Chance of drawing a card
    DrawOdds {
        #[arg(long, default_value_t = 50)]
        deck_size: u64,
        #[arg(long, default_value_t = 4)]
        copies: u64,
        #[arg(long, default_value_t = 5)]
        drawn: u64,
        #[arg(long, default_value_t = 1)]
        minimum: u64,
    },
    /// Chance of drawing two different cards together
    PairOdds {
        #[arg(long, default_value_t = 50)]
        deck_size: u64,
        #[arg(long, default_value_t = 4)]
        copies_a: u64,
        #[arg(long, default_value_t = 4)]
        copies_b: u64,
        #[arg(long, default_value_t = 5)]
        drawn: u64,
    },
    /// How many relevant cards an unseen hand is likely to hold
    HandOdds {
        #[arg(long, default_value_t = 50)]
        deck_size: u64,
        #[arg(long, default_value_t = 12)]
        relevant: u64,
        #[arg(long, default_value_t = 5)]
        hand_size: u64,
        #[arg(long, default_value_t = 0)]
        discarded: u64,
        #[arg(long, default_value_t = 0)]
        known_in_hand: u64,
    },
    /// Flatten a colour against white at the standard opacity ladder
    Opacity {
        #[arg(required = true)]
        color: String,
    },
    /// Base64 encode text
    Base64Encode { input_path: Option<PathBuf> },
    /// Base64 decode text
    Base64Decode { input_path: Option<PathBuf> },
    /// Percent encode text as a URL component
    UrlEncode { input_path: Option<PathBuf> },
    /// Percent decode a URL component
    UrlDecode { input_path: Option<PathBuf> },
    /// Decode a JSON web token without verifying it
    Jwt { input_path: Option<PathBuf> },
    /// Rewrite a deck list in the simulator's NxCODE shape
    DeckNormalize { input_path: Option<PathBuf> },
    /// Turn a deck list into deck builder links
    DeckLinks {
        input_path: Option<PathBuf>,
        /// Only build the link for one site
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Convert deck lines or links, line by line, to one site's links
    DeckConvert {
        input_path: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "cardkaizoku")]
        format: FormatArg,
    },
    /// Split a pasted blob of several deck lists into decks
    DeckBatch { input_path: Option<PathBuf> },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Gumgum,
    Egman,
    Cardkaizoku,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Gumgum => ExportFormat::Gumgum,
            FormatArg::Egman => ExportFormat::Egman,
            FormatArg::Cardkaizoku => ExportFormat::Cardkaizoku,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct DrawOddsReport {
    deck_size: u64,
    copies: u64,
    drawn: u64,
    minimum: u64,
    exact: f64,
    at_least: f64,
    with_mulligan: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct PairOddsReport {
    deck_size: u64,
    copies_a: u64,
    copies_b: u64,
    drawn: u64,
    probability: f64,
    with_mulligan: f64,
}

fn main() {
    let args = Cli::parse();

    stderrlog::new()
        .modules(["pw_tools", "pw_tool_lib", "pw_deck_lib"])
        .verbosity(args.verbose as usize + 1)
        .init()
        .unwrap();

    match args.command {
        Command::List { pattern, all } => run_list(pattern.as_deref().unwrap_or(""), all),
        Command::Diff {
            before_file_path,
            after_file_path,
            json,
        } => run_diff(&before_file_path, &after_file_path, json),
        Command::Count { input_path } => {
            emit_json(&TextStats::new(&input_or_die(&input_path)));
        }
        Command::StripLines { input_path } => {
            print_text(&lines::strip_blank_lines(&input_or_die(&input_path)));
        }
        Command::DrawOdds {
            deck_size,
            copies,
            drawn,
            minimum,
        } => {
            emit_json(&DrawOddsReport {
                deck_size,
                copies,
                drawn,
                minimum,
                exact: odds::hypergeometric(deck_size, copies, drawn, minimum),
                at_least: odds::at_least(deck_size, copies, drawn, minimum),
                with_mulligan: odds::with_mulligan(deck_size, copies, drawn, minimum),
            });
        }
        Command::PairOdds {
            deck_size,
            copies_a,
            copies_b,
            drawn,
        } => {
            emit_json(&PairOddsReport {
                deck_size,
                copies_a,
                copies_b,
                drawn,
                probability: odds::both_present(deck_size, copies_a, copies_b, drawn),
                with_mulligan: odds::both_present_with_mulligan(
                    deck_size, copies_a, copies_b, drawn,
                ),
            });
        }
        Command::HandOdds {
            deck_size,
            relevant,
            hand_size,
            discarded,
            known_in_hand,
        } => {
            emit_json(&odds::hand_distribution(
                deck_size,
                relevant,
                hand_size,
                discarded,
                known_in_hand,
            ));
        }
        Command::Opacity { color } => run_opacity(&color),
        Command::Base64Encode { input_path } => {
            print_text(&codec::encode_base64(&input_or_die(&input_path)));
        }
        Command::Base64Decode { input_path } => {
            match codec::decode_base64(&input_or_die(&input_path)) {
                Ok(decoded) => print_text(&decoded),
                Err(err) => {
                    log::error!("Error: {err}");
                    std::process::exit(1);
                }
            }
        }
        Command::UrlEncode { input_path } => {
            print_text(&codec::encode_url_component(&input_or_die(&input_path)));
        }
        Command::UrlDecode { input_path } => {
            match codec::decode_url_component(&input_or_die(&input_path)) {
                Ok(decoded) => print_text(&decoded),
                Err(err) => {
                    log::error!("Error: {err}");
                    std::process::exit(1);
                }
            }
        }
        Command::Jwt { input_path } => run_jwt(&input_path),
        Command::DeckNormalize { input_path } => {
            print_text(&sim_code::normalize(&input_or_die(&input_path)));
        }
        Command::DeckLinks { input_path, format } => run_deck_links(&input_path, format),
        Command::DeckConvert { input_path, format } => {
            let conversions = batch::convert_lines(&input_or_die(&input_path), format.into());
            emit_json(&conversions);
        }
        Command::DeckBatch { input_path } => {
            let decks = batch::parse_batch_input(&input_or_die(&input_path));
            emit_json(&decks);
        }
    }
}

fn run_list(pattern: &str, all: bool) {
    let tools = registry::matching_tools(pattern, all);
    if tools.is_empty() {
        println!("No tools match {pattern:?}.");
    } else {
        registry::print_tools(&tools);
    }
}

fn run_diff(before_file_path: &Path, after_file_path: &Path, json: bool) {
    let report = match DiffReport::new(before_file_path, after_file_path) {
        Ok(report) => report,
        Err(err) => {
            log::error!("Error: {err}");
            std::process::exit(1);
        }
    };
    if json {
        emit_json(&report);
    } else if let Err(err) = report.write_into(&mut io::stdout()) {
        log::error!("Error writing diff: {err}");
        std::process::exit(5);
    }
}

fn run_opacity(color: &str) {
    let rgb = match color::parse_color(color) {
        Ok(rgb) => rgb,
        Err(err) => {
            log::error!("Error parsing {color:?}: {err}");
            std::process::exit(1);
        }
    };
    emit_json(&color::opacity_ladder(rgb));
}

fn run_jwt(input_path: &Option<PathBuf>) {
    let input = input_or_die(input_path);
    let token = match token::decode_token(&input) {
        Ok(token) => token,
        Err(err) => {
            log::error!("Error: {err}");
            std::process::exit(1);
        }
    };
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0);
    if token.is_expired(now).unwrap_or(false) {
        log::warn!("token is expired");
    }
    if token.not_yet_valid(now).unwrap_or(false) {
        log::warn!("token is not valid yet");
    }
    emit_json(&token);
}

fn run_deck_links(input_path: &Option<PathBuf>, format: Option<FormatArg>) {
    let input = input_or_die(input_path);
    let cards = sim_code::parse_decklist(&sim_code::normalize(&input));
    if cards.is_empty() {
        log::error!("no cards found in the input");
        std::process::exit(1);
    }
    match format {
        Some(format) => println!("{}", export::export_url(&cards, format.into())),
        None => {
            println!("{:<12}{}", "gumgum", export::gumgum_url(&cards));
            println!("{:<12}{}", "egman", export::egman_url(&cards));
            println!("{:<12}{}", "cardkaizoku", export::cardkaizoku_url(&cards));
        }
    }
}

fn read_input(input_path: &Option<PathBuf>) -> io::Result<String> {
    match input_path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn input_or_die(input_path: &Option<PathBuf>) -> String {
    match read_input(input_path) {
        Ok(text) => text,
        Err(err) => {
            match input_path {
                Some(path) => log::error!("Error reading {path:?}: {err}"),
                None => log::error!("Error reading stdin: {err}"),
            }
            std::process::exit(1);
        }
    }
}

fn emit_json<T: Serialize>(value: &T) {
    match serde_json::to_writer_pretty(&mut io::stdout(), value) {
        Ok(_) => println!(),
        Err(err) => {
            log::error!("Error writing output: {err}");
            std::process::exit(5);
        }
    }
}

fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}
