///
/// primecount CLI - count primes from standard input
///
/// Reads whitespace-separated decimal integers from stdin until
/// end-of-stream and prints the total number of primes found. Queue
/// capacity, batch size, and worker count are tunable; the defaults
/// match the pipeline's reference configuration.
///

use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use primecount::{run_pipeline, PipelineConfig, DEFAULT_BATCH_SIZE, DEFAULT_QUEUE_CAPACITY};

#[derive(Parser)]
#[command(name = "primecount")]
#[command(version, about = "Count primes from an integer stream", long_about = None)]
struct Cli {
    /// Number of worker threads (defaults to available CPU cores)
    #[arg(long)]
    workers: Option<usize>,

    /// Queue capacity in integers
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    queue_capacity: usize,

    /// Integers moved per enqueue/dequeue transfer
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
}

fn main() {
    // Logs go to stderr so stdout carries only the result line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = PipelineConfig::default();
    config.queue_capacity = cli.queue_capacity;
    config.batch_size = cli.batch_size;
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }

    let stdin = io::stdin();
    match run_pipeline(stdin.lock(), &config) {
        Ok(total) => {
            println!("{} total primes.", total);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
