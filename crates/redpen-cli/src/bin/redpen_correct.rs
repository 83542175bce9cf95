// redpen-correct: interactive spell correction over a text file.
//
// Loads the custom word list and the engine lexicon, asks whether to
// auto-correct, then reads the input document line by line and writes
// two outputs: an annotated HTML diff and the plain corrected text.
//
// Usage:
//   redpen-correct [-w WORD_LIST] [-l LEXICON]
//
// Options:
//   -w, --word-list PATH   Word list, one word per line
//                          (default: dict.txt, or REDPEN_WORD_LIST)
//   -l, --lexicon PATH     Engine lexicon, one word per line
//                          (default: lexicon.txt, or REDPEN_LEXICON)
//   -h, --help             Print help

use std::fs::File;
use std::io::{BufReader, BufWriter};

use redpen_core::enums::CorrectMode;
use redpen_en::session::{CorrectorSession, SessionOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (word_list, args) = redpen_cli::parse_path_flag(&args, "--word-list", "-w");
    let (lexicon, args) = redpen_cli::parse_path_flag(&args, "--lexicon", "-l");

    if redpen_cli::wants_help(&args) {
        println!("redpen-correct: spell-correct a text file.");
        println!();
        println!("Usage: redpen-correct [-w WORD_LIST] [-l LEXICON]");
        println!();
        println!("Prompts for the correction mode and the file names, then");
        println!("writes an annotated HTML diff and the plain corrected text.");
        println!();
        println!("Options:");
        println!("  -w, --word-list PATH   Word list, one word per line");
        println!("                         (default: dict.txt, or REDPEN_WORD_LIST)");
        println!("  -l, --lexicon PATH     Engine lexicon, one word per line");
        println!("                         (default: lexicon.txt, or REDPEN_LEXICON)");
        println!("  -h, --help             Print this help");
        return;
    }

    let word_list = redpen_cli::word_list_path(word_list);
    let lexicon = redpen_cli::lexicon_path(lexicon);

    let store = redpen_cli::load_word_store(&word_list)
        .unwrap_or_else(|e| redpen_cli::fatal(&e.to_string()));
    let engine =
        redpen_cli::load_engine(&lexicon).unwrap_or_else(|e| redpen_cli::fatal(&e.to_string()));

    println!("Dictionary loaded.");

    let answer = redpen_cli::prompt("Auto-correct misspelled words? (y/n): ")
        .unwrap_or_else(|e| redpen_cli::fatal(&format!("failed to read stdin: {e}")));
    let mode = if answer.eq_ignore_ascii_case("y") {
        CorrectMode::Auto
    } else {
        CorrectMode::Interactive
    };

    let read_name = |message: &str| -> String {
        redpen_cli::prompt(message)
            .unwrap_or_else(|e| redpen_cli::fatal(&format!("failed to read stdin: {e}")))
    };
    let input_name = read_name("Input file name  (e.g., input.txt): ");
    let html_name = read_name("Output file name (e.g., output.html): ");
    let plain_name = read_name("Output file name (e.g., output.txt): ");

    // All three streams are opened before any processing starts, so a
    // bad path aborts with nothing partially written.
    let input = File::open(&input_name)
        .map(BufReader::new)
        .unwrap_or_else(|e| redpen_cli::fatal(&format!("cannot open '{input_name}': {e}")));
    let mut html_out = File::create(&html_name)
        .map(BufWriter::new)
        .unwrap_or_else(|e| redpen_cli::fatal(&format!("cannot open '{html_name}': {e}")));
    let mut plain_out = File::create(&plain_name)
        .map(BufWriter::new)
        .unwrap_or_else(|e| redpen_cli::fatal(&format!("cannot open '{plain_name}': {e}")));

    let session = CorrectorSession::new(store, Box::new(engine), SessionOptions { mode });
    let mut interaction = redpen_cli::ConsoleInteraction;

    session
        .correct_document(input, &mut html_out, &mut plain_out, &mut interaction)
        .unwrap_or_else(|e| redpen_cli::fatal(&e.to_string()));

    println!("Correction done. Output saved to '{html_name}' and '{plain_name}'.");
}
