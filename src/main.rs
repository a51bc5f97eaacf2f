use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Read;
use std::path::PathBuf;

use debate_score::error::EngineError;
use debate_score::output;
use debate_score::rubric::{load_definition, Rubric};
use debate_score::ResponseText;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "debate-score")]
#[command(about = "Score a debate response against a weighted rubric", long_about = None)]
#[command(version)]
struct Cli {
    /// Response text file to score (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Path to rubric file (defaults to ~/.config/debate-score/rubric.yaml)
    #[arg(short, long)]
    rubric: Option<PathBuf>,

    /// Emit the full evaluation as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Seed for feedback template selection (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Language tag recorded on the response (analysis is English-only)
    #[arg(long, default_value = "en")]
    language: String,

    /// Include the linguistic profile section in formatted output
    #[arg(long)]
    profile: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Load and compile the rubric
    let definition = match load_definition(cli.rubric.clone()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Rubric error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded rubric '{}' with {} categories",
            definition.version,
            definition.categories.len()
        );
    }

    let rubric = match Rubric::new(definition) {
        Ok(r) => r,
        Err(EngineError::Configuration(errors)) => {
            eprintln!("Rubric config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
        Err(e) => {
            eprintln!("Rubric error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    for warning in rubric.warnings() {
        eprintln!("warning: {}", warning);
    }

    // Read the response text
    let text = match read_input(cli.file.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let response = match ResponseText::new(text, cli.language.clone()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if cli.verbose {
        eprintln!(
            "Scoring {} bytes of response text (language: {})",
            response.body.len(),
            response.language
        );
        if let Some(seed) = cli.seed {
            eprintln!("Using feedback seed {}", seed);
        }
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let evaluation = match debate_score::evaluate(&response.body, &rubric, &mut rng) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Evaluation error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&evaluation) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize evaluation: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else {
        let use_colors = !cli.no_color && output::should_use_colors();
        println!(
            "{}",
            output::format_evaluation(&evaluation, use_colors, cli.profile)
        );
    }

    std::process::exit(EXIT_SUCCESS);
}

fn read_input(file: Option<&std::path::Path>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
