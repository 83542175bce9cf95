// redpen-cli: shared utilities for the command-line tools.

use std::io::{self, BufRead, Write};
use std::process;

use redpen_core::error::CorrectorError;
use redpen_en::policy::Interaction;
use redpen_en::speller::LevenshteinEngine;
use redpen_en::wordstore::WordStore;

/// Default word-list file name when no flag or env var is given.
pub const DEFAULT_WORD_LIST: &str = "dict.txt";

/// Default engine lexicon file name.
pub const DEFAULT_LEXICON: &str = "lexicon.txt";

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Parse `LONG PATH`, `LONG=PATH` or `SHORT PATH` out of the args.
///
/// Returns `(value, remaining_args)`.
pub fn parse_path_flag(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Resolve the word-list path: flag, then `REDPEN_WORD_LIST`, then the
/// default file name in the working directory.
pub fn word_list_path(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("REDPEN_WORD_LIST").ok())
        .unwrap_or_else(|| DEFAULT_WORD_LIST.to_string())
}

/// Resolve the engine lexicon path: flag, then `REDPEN_LEXICON`, then
/// the default file name in the working directory.
pub fn lexicon_path(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("REDPEN_LEXICON").ok())
        .unwrap_or_else(|| DEFAULT_LEXICON.to_string())
}

/// Load the word store from a word-list file.
pub fn load_word_store(path: &str) -> Result<WordStore, CorrectorError> {
    WordStore::from_path(path)
}

/// Load the spell engine from a lexicon file.
pub fn load_engine(path: &str) -> Result<LevenshteinEngine, CorrectorError> {
    LevenshteinEngine::from_path(path)
}

/// Print `message` without a newline and read one trimmed line from
/// stdin.
pub fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Interactive control surface over the terminal: a numbered menu on
/// stdout, one selection read from stdin. Selection 0 (or anything
/// invalid) keeps the original word.
#[derive(Debug, Default)]
pub struct ConsoleInteraction;

impl Interaction for ConsoleInteraction {
    fn pick(&mut self, core: &str, suggestions: &[String]) -> Option<usize> {
        println!("Misspelled: '{core}'");
        println!("0. Keep original");
        for (i, suggestion) in suggestions.iter().enumerate() {
            println!("{}. {suggestion}", i + 1);
        }
        let line = prompt(&format!("Choose (0-{}): ", suggestions.len())).ok()?;
        line.parse::<usize>().ok()
    }

    fn auto_applied(&mut self, core: &str, replacement: &str) {
        println!("Auto-corrected '{core}' -> '{replacement}'");
    }

    fn kept_original(&mut self, _core: &str) {
        println!("Keeping original.");
    }
}
