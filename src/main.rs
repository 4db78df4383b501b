use anyhow::{Context, Result, bail};
use clap::Parser;
use itertools::Itertools;
use phf::{Map, phf_map};
use std::io::{self, Read};
use tracing::debug;

use vernac::{Grammar, GrammarError, MatchResult, Mode, diagnose, grammars};

type GrammarBuilder = fn() -> Result<Grammar, GrammarError>;

static GRAMMARS: Map<&'static str, GrammarBuilder> = phf_map! {
    "digits" => grammars::digits as GrammarBuilder,
    "identifier" => grammars::identifier as GrammarBuilder,
    "list" => grammars::number_list as GrammarBuilder,
    "greeting" => grammars::greeting as GrammarBuilder,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to parse (read from stdin when absent)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Built-in grammar to run
    #[arg(short = 'g', long, default_value = "list")]
    grammar: String,

    /// Forbid skipping leading input
    #[arg(short = 's', long)]
    strict: bool,

    /// List the built-in grammars and exit
    #[arg(short = 'l', long)]
    list: bool,

    /// Trace every node visited
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = if verbose {
        EnvFilter::new("vernac=trace")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.list {
        for name in GRAMMARS.keys().sorted() {
            println!("{name}");
        }
        return Ok(());
    }

    let Some(build) = GRAMMARS.get(args.grammar.as_str()) else {
        bail!(
            "Unknown grammar '{}'. Available: {}.",
            args.grammar,
            GRAMMARS.keys().sorted().join(", ")
        );
    };
    let grammar = build().with_context(|| format!("Failed to build grammar '{}'", args.grammar))?;
    debug!(grammar = %args.grammar, tree = ?grammar, "built grammar");

    let input = match args.input {
        Some(input) => input,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf.trim_end_matches('\n').to_string()
        }
    };

    let mode = if args.strict { Mode::Strict } else { Mode::Lenient };
    let result = grammar.parse_with(&input, mode);
    match &result {
        MatchResult::Failure { .. } => {
            let reason = diagnose(&grammar, &input)
                .map(|expected| expected.to_string())
                .unwrap_or_else(|| "a match exists only after skipping input".to_string());
            println!("\x07NO MATCH: {reason}");
            std::process::exit(1);
        }
        _ => {
            if result.is_partial() {
                println!("skipped:   {:?}", result.skipped());
            }
            println!("matched:   {:?}", result.matched());
            println!("remaining: {:?}", result.remaining());
            if let Some(ast) = result.ast() {
                println!("ast:       {ast}");
                if ast.as_text().is_none() {
                    println!("text:      {:?}", ast.flatten_text());
                }
            }
        }
    }
    Ok(())
}
