// redpen-tokenize: show the punctuation split for words from stdin.
//
// Reads lines from stdin, splits each into whitespace-delimited words
// and prints the prefix / core / suffix decomposition of every word.
// No dictionary is needed.
//
// Usage:
//   redpen-tokenize [-h]

use std::io::{self, BufRead, Write};

use redpen_en::tokenizer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if redpen_cli::wants_help(&args) {
        println!("redpen-tokenize: Split words into punctuation and core.");
        println!();
        println!("Usage: redpen-tokenize");
        println!();
        println!("Reads text from stdin, prints one line per word:");
        println!("  word  ->  prefix='..' core='..' suffix='..'");
        return;
    }

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
        for word in line.split_whitespace() {
            let token = tokenizer::split(word);
            let _ = writeln!(
                out,
                "{word:20} prefix='{}' core='{}' suffix='{}'",
                token.prefix, token.core, token.suffix
            );
        }
    }
}
