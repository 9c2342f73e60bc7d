use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate PLOLE and PLOEE with a Monte Carlo adequacy simulation
    Analyze {
        /// Analysis config YAML file
        #[arg(short, long)]
        input: String,
        /// Output file for report, deficit table and contributions
        #[arg(short, long)]
        output: String,
        /// Number of Monte Carlo trials (overrides the config)
        #[arg(short = 'n', long)]
        trials: Option<usize>,
        /// Length of the analysis period in hours (overrides the config)
        #[arg(short = 't', long)]
        period_hours: Option<f64>,
        /// Random seed for a reproducible run (overrides the config)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Serialization format of the output file
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}
