use crate::analyzer::formatter::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pss-ctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check Kubernetes workload manifests against Pod Security Standards")]
#[command(long_about = "Locates the pod template inside Pods, Deployments, ReplicaSets, StatefulSets, DaemonSets, Jobs and CronJobs, evaluates it against the baseline or restricted Pod Security Standards profile, and reports each violation with a stable id, a field path and a recommended patch.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (defaults to ./.pss-analyzer.yaml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a manifest file (or stdin) and print the findings
    Analyze {
        /// Manifest file to analyze; omit or use "-" to read stdin
        #[arg(value_name = "MANIFEST")]
        path: Option<PathBuf>,

        /// Profile to evaluate: baseline or restricted
        #[arg(short, long, env = "PSS_PROFILE")]
        profile: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Exit with status 1 when any issue is found
        #[arg(long)]
        fail_on_issues: bool,
    },

    /// Read pss_helper JSON arguments from stdin and print the JSON result
    Tool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
