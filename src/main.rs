use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spellscan::cli::output::{self, OutputFormat};
use spellscan::error::{self, InputKind};
use spellscan::{Config, Dictionary, SpellChecker};
use std::io::{self, Write};
use std::path::PathBuf;

const USAGE: &str = "usage: spellscan <DICTIONARY> <INPUT> [OPTIONS]";

#[derive(Parser, Debug)]
#[command(name = "spellscan")]
#[command(version, about = "Report misspelled words in a text file, with ranked suggestions", long_about = None)]
struct Cli {
    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY", required_unless_present = "completion")]
    dictionary: Option<PathBuf>,

    /// Text file to check
    #[arg(value_name = "INPUT", required_unless_present = "completion")]
    input: Option<PathBuf>,

    /// Maximum edit distance for suggestions
    #[arg(short = 'd', long, env = "SPELLSCAN_MAX_DISTANCE", default_value_t = 2)]
    max_distance: usize,

    /// Words of context shown on each side of a misspelling
    #[arg(short = 'c', long, env = "SPELLSCAN_CONTEXT_WORDS", default_value_t = 2)]
    context_words: usize,

    /// Word to accept even if missing from the dictionary (replaces the default "a")
    #[arg(long = "known-word", value_name = "WORD")]
    known_words: Vec<String>,

    /// Do not inject any always-known words into the dictionary
    #[arg(long, conflicts_with = "known_words")]
    no_known_words: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellscan", &mut io::stdout());
        return Ok(());
    }

    let (Some(dictionary_path), Some(input_path)) = (cli.dictionary, cli.input) else {
        anyhow::bail!("both a dictionary file and an input file are required");
    };

    let config = Config::load(
        cli.max_distance,
        cli.context_words,
        cli.known_words,
        cli.no_known_words,
    );

    // Read both inputs before checking anything
    let dictionary =
        Dictionary::load_from_path(&dictionary_path)?.with_known_words(&config.known_words);
    let content = error::read_to_string(InputKind::Text, &input_path)?;

    let errors = SpellChecker::new(&dictionary, &config).check(&content);

    let colored = !cli.no_color;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_report(&mut out, &input_path, &errors, colored, &cli.format)
        .context("Failed to write report")?;
    if cli.format == OutputFormat::Text {
        output::write_summary(&mut out, errors.len(), &input_path, colored)
            .context("Failed to write report")?;
    }
    out.flush().context("Failed to write report")?;

    Ok(())
}
