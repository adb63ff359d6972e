use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "rfte", author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute capacity, throughput ceiling and profitability metrics
    Compute {
        /// Scenario YAML file (or exported JSON snapshot)
        #[arg(short, long)]
        input: String,
        /// Optional output file; the report is printed when omitted
        #[arg(short, long)]
        output: Option<String>,
        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Override the scenario window length in days
        #[arg(short, long)]
        days: Option<f64>,
    },
    /// Export inputs and derived metrics as a JSON snapshot
    Export {
        /// Scenario YAML file (or exported JSON snapshot)
        #[arg(short, long)]
        input: String,
        /// Output JSON file
        #[arg(short, long)]
        output: String,
        /// Override the scenario window length in days
        #[arg(short, long)]
        days: Option<f64>,
        /// Export date recorded in the snapshot (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_export_date())]
        exported_on: String,
    },
    /// Recompute an exported snapshot and check its metrics still match
    Verify {
        /// Exported JSON snapshot
        #[arg(short, long)]
        input: String,
    },
    /// Plot weekly capacity per stage into a PNG bar chart
    PlotCapacity {
        /// Scenario YAML file (or exported JSON snapshot)
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Write the default scenario as a YAML starting point
    Template {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn default_export_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
