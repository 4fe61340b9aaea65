use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use spring_arrangements::{counters::Strategy, SessionBuilder};

/// Count spring arrangements for the example and main inputs.
///
/// Prints four totals, one per line: example folded, input folded,
/// example unfolded, input unfolded.
#[derive(Debug, Parser)]
#[command(name = "springs", version)]
struct Cli {
    /// Example dataset.
    #[arg(long, default_value = "data/12_example.txt")]
    example: PathBuf,

    /// Main dataset.
    #[arg(long, default_value = "data/12.txt")]
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = StrategyArg::Memo)]
    strategy: StrategyArg,

    /// Copies per unfolded record.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    copies: u64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Memo,
    Table,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Memo => Strategy::Memo,
            StrategyArg::Table => Strategy::Table,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let copies = usize::try_from(cli.copies).context("copies does not fit in usize")?;
    let session = SessionBuilder::new()
        .with_strategy(cli.strategy.into())
        .with_copies(copies)
        .build();

    let report = session.report(&cli.example, &cli.input).with_context(|| {
        format!(
            "failed to count arrangements for {} and {}",
            cli.example.display(),
            cli.input.display()
        )
    })?;

    println!("{report}");
    Ok(())
}
