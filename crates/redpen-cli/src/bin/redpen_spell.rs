// redpen-spell: check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// passes the layered lookup (word list, stem, then engine):
//   C: word    (correct)
//   W: word    (misspelled)
//
// Usage:
//   redpen-spell [-w WORD_LIST] [-l LEXICON] [OPTIONS]
//
// Options:
//   -w, --word-list PATH   Word list, one word per line
//   -l, --lexicon PATH     Engine lexicon, one word per line
//   -s, --suggest          Also print suggestions for misspelled words
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use redpen_en::session::{CorrectorSession, SessionOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (word_list, args) = redpen_cli::parse_path_flag(&args, "--word-list", "-w");
    let (lexicon, args) = redpen_cli::parse_path_flag(&args, "--lexicon", "-l");

    if redpen_cli::wants_help(&args) {
        println!("redpen-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: redpen-spell [-w WORD_LIST] [-l LEXICON] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -w, --word-list PATH   Word list, one word per line");
        println!("  -l, --lexicon PATH     Engine lexicon, one word per line");
        println!("  -s, --suggest          Also print suggestions for misspelled words");
        println!("  -h, --help             Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let word_list = redpen_cli::word_list_path(word_list);
    let lexicon = redpen_cli::lexicon_path(lexicon);

    let store = redpen_cli::load_word_store(&word_list)
        .unwrap_or_else(|e| redpen_cli::fatal(&e.to_string()));
    let engine =
        redpen_cli::load_engine(&lexicon).unwrap_or_else(|e| redpen_cli::fatal(&e.to_string()));
    let session = CorrectorSession::new(store, Box::new(engine), SessionOptions::default());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if session.spell(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                for suggestion in session.suggest(word) {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
