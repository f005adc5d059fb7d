//! rust-life CLI - start a board or advance a token from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rust_life::core::Point;
use rust_life::{Board, Dimensions, Life, LifeConfig, Pattern, Transport};

/// Conway's Game of Life with stateless board tokens
#[derive(Parser, Debug)]
#[command(name = "rust-life")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new board and print its token
    Start {
        /// Board width in cells
        #[arg(long)]
        width: i64,

        /// Board height in cells
        #[arg(long)]
        height: i64,

        /// Random seed (default: random)
        #[arg(short, long, conflicts_with = "pattern")]
        seed: Option<u64>,

        /// Place a named pattern instead of random cells
        #[arg(short, long)]
        pattern: Option<String>,

        /// Percent-escape the token for use in a URL
        #[arg(long)]
        url: bool,
    },

    /// Advance a token by one or more generations
    Advance {
        /// Token from a previous start or advance
        token: String,

        /// Number of generations to step
        #[arg(short = 'n', long, default_value = "1")]
        steps: u32,

        /// Percent-escape the new token for use in a URL
        #[arg(long)]
        url: bool,
    },
}

fn transport(url: bool) -> Transport {
    if url {
        Transport::Url
    } else {
        Transport::Plain
    }
}

fn cmd_start(
    width: i64,
    height: i64,
    seed: Option<u64>,
    pattern: Option<&str>,
    url: bool,
) -> Result<()> {
    let mut config = LifeConfig::new().with_transport(transport(url));
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let life = Life::new(config);

    let (board, token) = match pattern {
        Some(name) => {
            let pattern = Pattern::find(name)
                .with_context(|| format!("unknown pattern '{}'", name))?;
            let dimensions = Dimensions::new(width, height)?;
            let (w, h) = pattern.extent();
            let origin = Point::new(
                dimensions.width().saturating_sub(w) / 2,
                dimensions.height().saturating_sub(h) / 2,
            );
            let board = Board::from_generator(dimensions, pattern.at(origin));
            let token = life.encode(&board);
            tracing::info!(pattern = pattern.name, %dimensions, "placed pattern");
            (board, token)
        }
        None => {
            let started = life.start(width, height)?;
            tracing::info!(seed = started.seed, dimensions = %started.board.dimensions(), "started random board");
            (started.board, started.token)
        }
    };

    tracing::debug!(population = board.population(), token_len = token.len(), "encoded board");
    println!("{}", board);
    println!();
    println!("{}", token);
    Ok(())
}

fn cmd_advance(token: &str, steps: u32, url: bool) -> Result<()> {
    let life = Life::new(LifeConfig::new().with_transport(transport(url)));

    let mut advanced = life.advance(token).context("failed to advance token")?;
    let original = advanced.previous.clone();
    for _ in 1..steps {
        advanced = life.advance(advanced.token.as_str())?;
    }

    tracing::info!(
        steps,
        dimensions = %advanced.board.dimensions(),
        population = advanced.board.population(),
        "advanced board"
    );
    if advanced.board.is_extinct() {
        tracing::info!("board is extinct");
    }

    println!("{}", original);
    println!();
    println!("{}", advanced.board);
    println!();
    println!("{}", advanced.token);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Start {
            width,
            height,
            seed,
            pattern,
            url,
        } => cmd_start(width, height, seed, pattern.as_deref(), url),
        Commands::Advance { token, steps, url } => cmd_advance(&token, steps.max(1), url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_conflicts_with_pattern() {
        let err = Args::try_parse_from([
            "rust-life", "start", "--width", "8", "--height", "8", "--seed", "1", "--pattern", "glider",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_start_accepts_seed_or_pattern() {
        assert!(Args::try_parse_from(["rust-life", "start", "--width", "8", "--height", "8", "--seed", "1"]).is_ok());
        assert!(
            Args::try_parse_from(["rust-life", "start", "--width", "8", "--height", "8", "--pattern", "glider"])
                .is_ok()
        );
    }
}
