// fuzzyspell-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is in the dictionary:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   S: word (d) (suggestion with its edit distance, with -s)
//
// Usage:
//   fuzzyspell-spell [-d DICT_PATH] [OPTIONS]

use std::io::{self, BufRead, Write};

use fuzzyspell_cli::QueryArgs;

fn print_help() {
    println!("fuzzyspell-spell: Check spelling of words from stdin.");
    println!();
    println!("Usage: fuzzyspell-spell [-d DICT_PATH] [OPTIONS]");
    println!();
    println!("Reads words from stdin (one per line). Prints:");
    println!("  C: word    (correct)");
    println!("  W: word    (misspelled)");
    println!();
    println!("Options:");
    println!("  -d, --dict-path PATH          Word list file, one word per line");
    println!("  -s, --suggest                 Also print suggestions for misspelled words");
    println!("  -t, --tolerance N             Maximum edit distance (default: 2)");
    println!("  -l, --length-tolerance N      Maximum extra length of a suggestion (default: 2)");
    println!("  -n, --max-suggestions N       Maximum number of suggestions (default: 1000)");
    println!("      --best                    Keep the best N instead of the first N found");
    println!("      --log-level FILTER        Log filter, e.g. debug (default: RUST_LOG or warn)");
    println!("  -h, --help                    Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if fuzzyspell_cli::wants_help(&args) {
        print_help();
        return;
    }

    let (log_level, args) =
        fuzzyspell_cli::parse_log_level(&args).unwrap_or_else(|e| fuzzyspell_cli::fatal(&e));
    fuzzyspell_cli::init_logging(log_level.as_deref());
    let (dict_path, args) =
        fuzzyspell_cli::parse_dict_path(&args).unwrap_or_else(|e| fuzzyspell_cli::fatal(&e));
    let query = QueryArgs::parse(&args).unwrap_or_else(|e| fuzzyspell_cli::fatal(&e));
    query
        .reject_unknown_flags(&["-s", "--suggest"])
        .unwrap_or_else(|e| fuzzyspell_cli::fatal(&e));
    if query.json {
        fuzzyspell_cli::fatal("--json is not supported by fuzzyspell-spell");
    }
    let show_suggestions = query.has_flag(&["-s", "--suggest"]);

    let speller = fuzzyspell_cli::load_speller(dict_path.as_deref(), query.options)
        .unwrap_or_else(|e| fuzzyspell_cli::fatal(&e));

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

        if speller.is_correct(word) {
            let _ = writeln!(out, "C: {word}");
            continue;
        }
        let _ = writeln!(out, "W: {word}");
        if show_suggestions {
            match speller.suggest_with(word, query.params) {
                Ok(suggestions) => {
                    for suggestion in suggestions {
                        let _ = writeln!(out, "S: {suggestion}");
                    }
                }
                Err(e) => eprintln!("error: suggestions for {word}: {e}"),
            }
        }
    }
}
