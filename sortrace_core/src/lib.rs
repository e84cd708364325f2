//! # Introduction
//!
//! Six classic sorting algorithms instrumented to report their intermediate
//! states, raced against each other under cooperative scheduling. See the
//! [`race`] module for the library API.

pub mod race;

#[cfg(feature = "display")]
use std::time::Duration;

use anyhow::bail;
#[cfg(feature = "display")]
use clap::{Args, Subcommand};
use rand::{rngs::StdRng, SeedableRng};

/// An example Clap Argument builder. Install the `sortrace` crate and run
/// `sortrace race` to see what options are available.
#[cfg(feature = "display")]
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct RaceArgs {
    #[command(subcommand)]
    command: RaceCommands,
}

#[cfg(feature = "display")]
#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum RaceCommands {
    /// Generate a fresh field and race all six algorithms over it.
    Run {
        /// Pause between algorithm steps, in milliseconds.
        #[arg(long, default_value_t = 30)]
        delay_ms: u64,

        /// Number of elements in the field.
        #[arg(short, long, default_value_t = race::FIELD_SIZE)]
        count: usize,

        /// Seed the field generator for a reproducible race.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate and render a fresh field without sorting it.
    Shuffle {
        /// Number of elements in the field.
        #[arg(short, long, default_value_t = race::FIELD_SIZE)]
        count: usize,

        /// Seed the field generator.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(feature = "display")]
impl RaceArgs {
    pub fn run(self) -> anyhow::Result<()> {
        use race::display;

        match self.command {
            RaceCommands::Run {
                delay_ms,
                count,
                seed,
            } => {
                let source = generate_field(count, seed)?;
                let race = race::Race::new(Duration::from_millis(delay_ms));
                let screen = display::RaceDisplay::new(&race.algorithms(), &source);

                let runtime = tokio::runtime::Runtime::new()?;
                let summary = runtime.block_on(race.run(&source, &screen));

                println!();
                display::print_standings(race.times(), summary.total());
            }
            RaceCommands::Shuffle { count, seed } => {
                let field = generate_field(count, seed)?;
                let preview = race::Snapshot::in_progress(&field, &[]);
                println!("{}", display::render_bars(&preview));
            }
        }

        Ok(())
    }
}

fn generate_field(count: usize, seed: Option<u64>) -> anyhow::Result<Vec<u32>> {
    if count == 0 {
        bail!("the field needs at least one element");
    }

    Ok(match seed {
        Some(seed) => race::random_sequence_from(&mut StdRng::seed_from_u64(seed), count),
        None => race::random_sequence(count),
    })
}
