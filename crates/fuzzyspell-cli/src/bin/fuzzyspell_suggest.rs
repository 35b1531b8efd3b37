// fuzzyspell-suggest: Rank dictionary words by edit distance.
//
// Suggests for each WORD argument, or for each line of stdin when no
// words are given. Correctly spelled words are still ranked, since the
// word itself comes back at distance 0.
//
// Usage:
//   fuzzyspell-suggest [-d DICT_PATH] [OPTIONS] [WORD...]

use std::io::{self, BufRead, Write};

use fuzzyspell_cli::QueryArgs;
use fuzzyspell_engine::{Speller, Suggestion};
use serde::Serialize;

/// One line of `--json` output.
#[derive(Serialize)]
struct SuggestLine<'a> {
    word: &'a str,
    correct: bool,
    suggestions: &'a [Suggestion],
}

fn print_help() {
    println!("fuzzyspell-suggest: Rank dictionary words by edit distance.");
    println!();
    println!("Usage: fuzzyspell-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
    println!();
    println!("If WORD arguments are given, suggests for each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!();
    println!("Options:");
    println!("  -d, --dict-path PATH          Word list file, one word per line");
    println!("  -t, --tolerance N             Maximum edit distance (default: 2)");
    println!("  -l, --length-tolerance N      Maximum extra length of a suggestion (default: 2)");
    println!("  -n, --max-suggestions N       Maximum number of suggestions (default: 1000)");
    println!("      --best                    Keep the best N instead of the first N found");
    println!("      --json                    Print one JSON object per word");
    println!("      --log-level FILTER        Log filter, e.g. debug (default: RUST_LOG or warn)");
    println!("  -h, --help                    Print this help");
}

fn report(
    word: &str,
    speller: &Speller,
    query: &QueryArgs,
    out: &mut impl Write,
) -> io::Result<()> {
    let suggestions = match speller.suggest_with(word, query.params) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: suggestions for {word}: {e}");
            return Ok(());
        }
    };
    let correct = speller.is_correct(word);

    if query.json {
        let line = SuggestLine {
            word,
            correct,
            suggestions: &suggestions,
        };
        let json = serde_json::to_string(&line).map_err(io::Error::other)?;
        return writeln!(out, "{json}");
    }

    let status = if correct { " (correct)" } else { "" };
    if suggestions.is_empty() {
        writeln!(out, "{word}{status}: (no suggestions)")
    } else {
        writeln!(out, "{word}{status}:")?;
        for s in &suggestions {
            writeln!(out, "  {s}  {}%", s.similarity())?;
        }
        Ok(())
    }
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
        .reject_unknown_flags(&[])
        .unwrap_or_else(|e| fuzzyspell_cli::fatal(&e));

    let speller = fuzzyspell_cli::load_speller(dict_path.as_deref(), query.options)
        .unwrap_or_else(|e| fuzzyspell_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !query.positional.is_empty() {
        for word in &query.positional {
            if let Err(e) = report(word, &speller, &query, &mut out) {
                fuzzyspell_cli::fatal(&format!("writing output: {e}"));
            }
        }
        return;
    }

    for line in io::stdin().lock().lines() {
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
        if let Err(e) = report(word, &speller, &query, &mut out) {
            fuzzyspell_cli::fatal(&format!("writing output: {e}"));
        }
    }
}
