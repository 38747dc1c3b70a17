use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use trivia_quiz::{DEFAULT_BASE_URL, QuizError, TriviaClient};

const FAREWELL: &str = "\n\n👋 Quiz cancelled.";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the Open Trivia DB compatible service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Seed for shuffling answers and questions
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trivia_quiz=warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let client = match TriviaClient::new(&args.api_url).map_err(QuizError::from) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut terminal = trivia_quiz::terminal::stdio();

    tokio::select! {
        result = trivia_quiz::run(&client, &mut terminal, &mut rng) => match result {
            Ok(_) => ExitCode::SUCCESS,
            Err(QuizError::InputClosed) => {
                println!("{}", FAREWELL);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error running quiz: {}", e);
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            println!("{}", FAREWELL);
            // stdin may still be blocked in a reader thread; don't wait on it
            std::process::exit(130);
        }
    }
}
