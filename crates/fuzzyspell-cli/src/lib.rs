// fuzzyspell-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use fuzzyspell_engine::{CapPolicy, Speller, SpellerOptions, SuggestParams};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a word list file.
pub const DICT_PATH_ENV: &str = "FUZZYSPELL_DICT_PATH";

/// Word list file name looked up in the home and working directories.
const WORDS_FILE: &str = "words.txt";

/// Search for a word list and load it into a new `Speller`.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `FUZZYSPELL_DICT_PATH` environment variable
/// 3. `~/.fuzzyspell/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. `words.txt` in the current directory
///
/// An explicitly given path is used even if it does not exist, so the
/// load error names it.
pub fn load_speller(dict_path: Option<&str>, options: SpellerOptions) -> Result<Speller, String> {
    let search_paths = build_search_paths(
        dict_path,
        std::env::var(DICT_PATH_ENV).ok().as_deref(),
        home_dir().as_deref(),
        std::env::current_dir().ok().as_deref(),
    );

    let chosen = match dict_path {
        Some(p) => Some(PathBuf::from(p)),
        None => search_paths.iter().find(|p| p.is_file()).cloned(),
    };
    let Some(path) = chosen else {
        return Err(format!(
            "could not find a word list in any of the search paths:\n{}",
            search_paths
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    };

    let mut speller = Speller::with_options(options);
    speller.load_path(&path).map_err(|e| e.to_string())?;
    debug!(path = %path.display(), words = speller.word_count(), "word list ready");
    Ok(speller)
}

/// Build the list of candidate word list files, in search order.
fn build_search_paths(
    dict_path: Option<&str>,
    env_path: Option<&str>,
    home: Option<&Path>,
    cwd: Option<&Path>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }
    if let Some(p) = env_path.filter(|p| !p.is_empty()) {
        paths.push(PathBuf::from(p));
    }
    if let Some(home) = home {
        paths.push(home.join(".fuzzyspell").join(WORDS_FILE));
    }
    paths.push(PathBuf::from("/usr/share/dict/words"));
    if let Some(cwd) = cwd {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Remove a valued option (`--long=VALUE`, `--long VALUE` or `-s VALUE`)
/// from `args`.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn take_option(
    args: &[String],
    long: &str,
    short: Option<&str>,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let prefix = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || Some(arg.as_str()) == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
pub fn parse_dict_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    take_option(args, "--dict-path", Some("-d"))
}

/// Parse a `--log-level=FILTER` argument from command line args.
pub fn parse_log_level(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    take_option(args, "--log-level", None)
}

/// Install the stderr log subscriber.
///
/// `--log-level` takes precedence, then `RUST_LOG`, then `warn`.
pub fn init_logging(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    // A second call in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Options shared by the tools that produce suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    pub params: SuggestParams,
    pub options: SpellerOptions,
    pub json: bool,
    /// Arguments that are not options, in order.
    pub positional: Vec<String>,
    /// Flags not recognized here, left for the caller.
    pub flags: Vec<String>,
}

impl QueryArgs {
    /// Parse `-t`, `-l`, `-n`, `--best` and `--json`.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let (tolerance, args) = take_option(args, "--tolerance", Some("-t"))?;
        let (length_tolerance, args) = take_option(&args, "--length-tolerance", Some("-l"))?;
        let (max_suggestions, args) = take_option(&args, "--max-suggestions", Some("-n"))?;

        let mut params = SuggestParams::default();
        let mut options = SpellerOptions::default();
        if let Some(v) = tolerance {
            params.tolerance = parse_count("--tolerance", &v)?;
        }
        if let Some(v) = length_tolerance {
            params.length_tolerance = parse_count("--length-tolerance", &v)?;
        }
        if let Some(v) = max_suggestions {
            options.max_suggestions = parse_count("--max-suggestions", &v)?;
        }

        let mut json = false;
        let mut positional = Vec::new();
        let mut flags = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--best" => options.cap_policy = CapPolicy::BestN,
                "--json" => json = true,
                "-" => positional.push(arg),
                a if a.starts_with('-') => flags.push(arg),
                _ => positional.push(arg),
            }
        }

        Ok(Self {
            params,
            options,
            json,
            positional,
            flags,
        })
    }

    /// Whether an unrecognized flag equal to one of `names` was given.
    pub fn has_flag(&self, names: &[&str]) -> bool {
        self.flags.iter().any(|f| names.contains(&f.as_str()))
    }

    /// Fail on the first unrecognized flag not listed in `allowed`.
    pub fn reject_unknown_flags(&self, allowed: &[&str]) -> Result<(), String> {
        match self.flags.iter().find(|f| !allowed.contains(&f.as_str())) {
            Some(flag) => Err(format!("unknown option {flag}")),
            None => Ok(()),
        }
    }
}

/// Parse a non-negative integer option value.
pub fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid number for {flag}: {value}"))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
