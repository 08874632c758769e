use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::fs;
use std::io;
use std::path::PathBuf;
use tokenspell::cli::output::{self, OutputFormat};
use tokenspell::dict::wordlist;
use tokenspell::{BufferChecker, Config};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tokenspell")]
#[command(version, about = "Check words against a case-aware word list", long_about = None)]
struct Cli {
    /// Files to check
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Word list file to load (one entry per line, `!word` forces case-sensitive)
    #[arg(short, long = "dict", value_name = "FILE")]
    dicts: Vec<PathBuf>,

    /// Extra word to add to the dictionary
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// Minimum similarity for suggestions (0.0 - 1.0)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Maximum number of suggestions shown per word
    #[arg(short = 'n', long)]
    max_suggestions: Option<usize>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if unknown words are found
    #[arg(long)]
    no_fail: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Print the dictionary, one entry per line, in word-list format
    List,
    /// Print ranked suggestions for words
    Suggest {
        /// Words to find suggestions for
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "tokenspell", &mut io::stdout());
        return Ok(());
    }

    let mut config = Config::load(cli.dicts.clone(), cli.words.clone(), cli.threshold)?;
    if let Some(max) = cli.max_suggestions {
        config.max_suggestions = max;
    }

    if let Some(command) = &cli.command {
        return handle_command(command, &config);
    }

    if cli.files.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }

    let dictionary = config.build_dictionary()?;
    let checker = BufferChecker::new(&dictionary);
    let colored = !cli.no_color;

    let mut total_errors = 0;

    for file_path in &cli.files {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let tokens = checker.check(&content)?;
        let misspellings = output::collect(&content, &tokens, &dictionary, config.max_suggestions);

        output::print_report(file_path, &misspellings, colored, &cli.format)?;
        total_errors += misspellings.len();
    }

    if matches!(cli.format, OutputFormat::Text) {
        output::print_check_summary(total_errors, &cli.files, colored);
    }

    if total_errors > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(command: &Commands, config: &Config) -> Result<()> {
    let dictionary = config.build_dictionary()?;

    match command {
        Commands::List => {
            print!("{}", wordlist::format(dictionary.list()));
        }
        Commands::Suggest { words } => {
            for word in words {
                let mut suggestions = dictionary.suggest(word);
                suggestions.truncate(config.max_suggestions);
                println!("{}: {}", word, suggestions.join(", "));
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "tokenspell=debug"
    } else {
        "tokenspell=warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
