// fuzzyspell-check: Spell check running text.
//
// Reads a text from the files given as arguments (or stdin), lists each
// misspelled word with its character position and best suggestions, and
// ends with a summary line:
//   12: teh -> the, then
//   accuracy: 90% (1 of 10 words misspelled)
//
// Usage:
//   fuzzyspell-check [-d DICT_PATH] [OPTIONS] [FILE...]

use std::io::{self, Read, Write};

use fuzzyspell_cli::QueryArgs;
use fuzzyspell_engine::{Speller, Suggestion, TextReport};
use serde::Serialize;

/// Number of suggestions shown per misspelled word in text output.
const SHOWN_SUGGESTIONS: usize = 5;

#[derive(Serialize)]
struct Misspelling<'a> {
    index: usize,
    pos: usize,
    word: &'a str,
    suggestions: Vec<Suggestion>,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    word_count: usize,
    error_count: usize,
    accuracy: u8,
    misspelled: Vec<Misspelling<'a>>,
}

fn print_help() {
    println!("fuzzyspell-check: Spell check running text.");
    println!();
    println!("Usage: fuzzyspell-check [-d DICT_PATH] [OPTIONS] [FILE...]");
    println!();
    println!("Checks the concatenated FILEs, or stdin when none are given.");
    println!();
    println!("Options:");
    println!("  -d, --dict-path PATH          Word list file, one word per line");
    println!("  -t, --tolerance N             Maximum edit distance (default: 2)");
    println!("  -l, --length-tolerance N      Maximum extra length of a suggestion (default: 2)");
    println!("  -n, --max-suggestions N       Maximum number of suggestions (default: 1000)");
    println!("      --best                    Keep the best N instead of the first N found");
    println!("      --json                    Print the report as one JSON object");
    println!("      --log-level FILTER        Log filter, e.g. debug (default: RUST_LOG or warn)");
    println!("  -h, --help                    Print this help");
}

fn read_input(files: &[String]) -> io::Result<String> {
    let mut text = String::new();
    if files.is_empty() || (files.len() == 1 && files[0] == "-") {
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    for file in files {
        text.push_str(&std::fs::read_to_string(file)?);
    }
    Ok(text)
}

fn collect<'a>(speller: &Speller, report: &'a TextReport, query: &QueryArgs) -> CheckOutput<'a> {
    let misspelled = report
        .misspelled()
        .map(|(index, token)| {
            let suggestions = speller
                .suggest_with(&token.text, query.params)
                .unwrap_or_else(|e| {
                    eprintln!("error: suggestions for {}: {e}", token.text);
                    Vec::new()
                });
            Misspelling {
                index,
                pos: token.pos,
                word: &token.text,
                suggestions,
            }
        })
        .collect();
    CheckOutput {
        word_count: report.word_count,
        error_count: report.error_count,
        accuracy: report.accuracy(),
        misspelled,
    }
}

fn write_text(output: &CheckOutput<'_>, out: &mut impl Write) -> io::Result<()> {
    for m in &output.misspelled {
        let shown: Vec<&str> = m
            .suggestions
            .iter()
            .take(SHOWN_SUGGESTIONS)
            .map(|s| s.word.as_str())
            .collect();
        if shown.is_empty() {
            writeln!(out, "{}: {}", m.pos, m.word)?;
        } else {
            writeln!(out, "{}: {} -> {}", m.pos, m.word, shown.join(", "))?;
        }
    }
    writeln!(
        out,
        "accuracy: {}% ({} of {} words misspelled)",
        output.accuracy, output.error_count, output.word_count
    )
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
    let text = read_input(&query.positional)
        .unwrap_or_else(|e| fuzzyspell_cli::fatal(&format!("reading input: {e}")));

    let report = speller.check_text(&text);
    let output = collect(&speller, &report, &query);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written = if query.json {
        serde_json::to_writer(&mut out, &output)
            .map_err(io::Error::other)
            .and_then(|()| writeln!(out))
    } else {
        write_text(&output, &mut out)
    };
    if let Err(e) = written {
        fuzzyspell_cli::fatal(&format!("writing output: {e}"));
    }
}
