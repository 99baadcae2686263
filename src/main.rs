use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser; // for argument parsing

use milim::search::{self, SearchOptions, SourceStatus};
use milim::wordlist::{FileFetcher, WordSource};
use milim::LetterConstraints;

/// milim — search Hebrew word lists against a template pattern
///
/// `?` matches exactly one letter, `[...]` is a character class, anything
/// else is literal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Template, e.g. "אה?ה"
    template: String,

    /// Word list files to search (one word per line)
    #[arg(required = true)]
    wordlists: Vec<String>,

    /// Match anywhere in the word instead of the whole word
    #[arg(short, long)]
    substring: bool,

    /// Keep niqqud and other combining marks on loaded words
    #[arg(long)]
    keep_diacritics: bool,

    /// Keep duplicate matches
    #[arg(long)]
    no_dedupe: bool,

    /// Keep matches in word-list order instead of sorting
    #[arg(long)]
    no_sort: bool,

    /// Letters the word must contain, e.g. "שת"
    #[arg(short, long, default_value = "")]
    require: String,

    /// Letters the word must not contain
    #[arg(short = 'x', long, default_value = "")]
    exclude: String,

    /// Write matches (one per line) to this file
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let options = SearchOptions {
        strip_diacritics: !args.keep_diacritics,
        dedupe: !args.no_dedupe,
        sort_results: !args.no_sort,
        whole_word: !args.substring,
    };

    let constraints = if args.require.is_empty() && args.exclude.is_empty() {
        None
    } else {
        Some(LetterConstraints::new(
            args.require.chars(),
            args.exclude.chars(),
        ))
    };

    let sources: Vec<WordSource> = args
        .wordlists
        .iter()
        .map(|path| WordSource::Url {
            key: path.clone(),
            url: path.clone(),
        })
        .collect();

    let mut on_status = |key: &str, status: &SourceStatus| match status {
        SourceStatus::Success { loaded } => eprintln!("{key}: {loaded} words"),
        SourceStatus::Error { message } => eprintln!("{key}: error — {message}"),
    };
    let mut on_progress = |done: usize, total: usize| {
        eprint!("\rscanning… {done}/{total}");
        if done == total {
            eprintln!();
        }
    };

    let result = match search::load_and_search_wordlists(
        &sources,
        &[],
        &args.template,
        &options,
        constraints.as_ref(),
        &FileFetcher,
        Some(&mut on_status),
        Some(&mut on_progress),
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "{} matched out of {} loaded",
        result.total_matched, result.total_loaded
    );

    match &args.output {
        Some(path) => {
            let text = search::matches_to_text(&result.matches);
            let written = std::fs::File::create(path)
                .and_then(|mut f| writeln!(f, "{text}"));
            if let Err(e) = written {
                eprintln!("error: cannot write {path}: {e}");
                return ExitCode::FAILURE;
            }
        }
        None => {
            for word in &result.matches {
                println!("{word}");
            }
        }
    }

    ExitCode::SUCCESS
}
