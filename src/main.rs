use clap::Parser;
use log::{debug, error};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use word_counter::{count_top, Error, OutputFormat, DEFAULT_TOP_N};

const PROMPT: &str = "Enter a paragraph of text:";

/// Ranks the most frequent words of a paragraph of text.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text to analyze. Read from `--file` or stdin when omitted.
    text: Option<String>,

    /// Read the text from a file.
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Number of words to report. Values below 1 report nothing.
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N as i64, allow_negative_numbers = true)]
    top: i64,

    /// Emit `word,count` CSV records instead of `word: count` lines.
    #[arg(long)]
    csv: bool,
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let text = read_input(&args)?;

    let top_n = usize::try_from(args.top).unwrap_or(0);
    debug!("Ranking top {} words of {} bytes", top_n, text.len());

    let results = count_top(&text, top_n);

    let output_format = if args.csv {
        OutputFormat::Csv
    } else {
        OutputFormat::Lines
    };

    output_format.write_ranked_entries(io::stdout().lock(), &results)
}

fn read_input(args: &Args) -> Result<String, Error> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .map_err(|e| Error::InputError(format!("Failed to read {}: {}", path.display(), e)));
    }

    let stdin = io::stdin();
    let mut input = String::new();

    if stdin.is_terminal() {
        // Interactive use takes a single line, as a paragraph prompt
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", PROMPT)
            .and_then(|_| stdout.flush())
            .map_err(|e| Error::OutputError(e.to_string()))?;

        stdin
            .read_line(&mut input)
            .map_err(|e| Error::InputError(format!("Failed to read from stdin: {}", e)))?;
    } else {
        stdin
            .lock()
            .read_to_string(&mut input)
            .map_err(|e| Error::InputError(format!("Failed to read from stdin: {}", e)))?;
    }

    Ok(input)
}
