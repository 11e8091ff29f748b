use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordtok::vocab::{SpecialTokens, VocabStats};
use wordtok::{TokenizerOptions, WordTokenizer};

/// Built-in corpus for `--demo`.
const DEMO_CORPUS: &[&str] = &[
    "Hello world this is a comprehensive demo",
    "JavaScript TypeScript React tokenizer application with advanced features",
    "Natural language processing with modern web technology stack",
    "Machine learning and artificial intelligence applications in production",
    "Building scalable tokenizers for real-world text processing tasks",
    "Professional software development requires attention to code quality and testing",
];

/// Word-level vocabulary tokenizer.
///
/// Trains a fresh vocabulary on every run, then executes one command.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Training corpus; one text per line, blank lines ignored.
    #[arg(long, required_unless_present = "demo", conflicts_with = "demo")]
    pub corpus: Option<PathBuf>,

    /// Train on the built-in demo corpus.
    #[arg(long, default_value = "false")]
    pub demo: bool,

    /// Vocab size cap, special tokens included.
    #[arg(long, default_value = "100")]
    pub max_vocab_size: usize,

    /// Special token override, as NAME=TOKEN.
    #[arg(long = "special", value_parser = parse_special)]
    pub specials: Vec<(String, String)>,

    /// Enable verbose output.
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Tokenizer commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print vocabulary statistics.
    Stats {
        /// Print as JSON.
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the vocabulary, by ascending id.
    Vocab {
        /// Maximum number of regular words to print.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Encode text into ids.
    Encode {
        /// Text to encode.
        text: String,
    },

    /// Decode comma-separated ids into text.
    Decode {
        /// Ids to decode.
        #[arg(value_delimiter = ',')]
        ids: Vec<u32>,
    },

    /// Encode then decode text.
    Roundtrip {
        /// Text to encode.
        text: String,
    },

    /// List vocabulary entries containing a fragment.
    Search {
        /// Fragment to search for.
        fragment: String,
    },
}

fn parse_special(arg: &str) -> anyhow::Result<(String, String)> {
    match arg.split_once('=') {
        Some((name, token)) if !name.is_empty() => Ok((name.to_string(), token.to_string())),
        _ => bail!("expected NAME=TOKEN, got {arg:?}"),
    }
}

fn load_corpus(args: &Args) -> anyhow::Result<Vec<String>> {
    let Some(path) = &args.corpus else {
        return Ok(DEMO_CORPUS.iter().map(|s| s.to_string()).collect());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn print_stats(stats: &VocabStats) {
    println!("Tokenizer Statistics:");
    println!("- vocab size: {}", stats.vocab_size);
    println!("- special tokens: {}", stats.special_token_count);
    println!("- regular words: {}", stats.regular_word_count);
    println!("- training words: {}", stats.total_training_words);
    println!("- training texts: {}", stats.training_texts);
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if args.verbose {
        println!("{:#?}", args);
    }

    let specials = SpecialTokens::default()
        .with_overrides(args.specials.iter().map(|(name, token)| (name, token)));
    let options = TokenizerOptions::new(args.max_vocab_size).with_specials(specials);
    let mut tokenizer = WordTokenizer::<u32>::new(options).context("invalid tokenizer options")?;

    let corpus = load_corpus(&args)?;
    if corpus.is_empty() {
        log::warn!("empty training corpus; vocabulary holds only special tokens");
    }

    let t0 = std::time::Instant::now();
    tokenizer.learn_vocab(&corpus);
    log::debug!("training_duration: {:?}", t0.elapsed());

    match &args.command {
        Command::Stats { json } => {
            let stats = tokenizer.stats();
            if *json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
                let names: Vec<&str> = tokenizer.specials().names().collect();
                println!("- special names: {}", names.join(", "));
            }
        }
        Command::Vocab { limit } => {
            let entries = tokenizer.vocab_entries();
            let (specials, regular) = entries.split_at(tokenizer.specials().len());

            println!("Special Tokens:");
            for (token, id) in specials {
                println!("{id}: {token:?}");
            }

            println!();
            println!("Regular Words:");
            let limit = limit.unwrap_or(regular.len());
            for (token, id) in regular.iter().take(limit) {
                println!("{id}: {token:?}");
            }
            if regular.len() > limit {
                println!("... and {} more words", regular.len() - limit);
            }
        }
        Command::Encode { text } => {
            let ids = tokenizer.encode(text);
            println!("Original: {text:?}");
            println!("Encoded: {ids:?}");
            for info in tokenizer.token_infos(&ids) {
                let marker = if info.is_special { "*" } else { " " };
                println!("{marker} {}: {:?}", info.id, info.token.as_str());
            }
        }
        Command::Decode { ids } => {
            println!("{}", tokenizer.decode(ids));
        }
        Command::Roundtrip { text } => {
            let ids = tokenizer.encode(text);
            let decoded = tokenizer.decode(&ids);
            println!("Original: {text:?}");
            println!("Encoded: {ids:?}");
            println!("Decoded: {decoded:?}");
        }
        Command::Search { fragment } => {
            let hits = tokenizer.search(fragment);
            if hits.is_empty() {
                println!("No tokens contain {fragment:?}");
            }
            for info in hits {
                let marker = if info.is_special { "*" } else { " " };
                println!("{marker} {}: {:?}", info.id, info.token.as_str());
            }
        }
    }

    Ok(())
}
