use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use knapsack::config::{self, TaskFile};
use knapsack::report::{self, Format};
use knapsack::{Plan, Writer, testing};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "knapsack")]
#[command(about = "Pick the tasks that pay the most within a day budget", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a task set and print the result
    Solve {
        /// JSON task file; the built-in task set is used when omitted
        #[arg(short, long)]
        tasks: Option<PathBuf>,
        /// Days available, overrides the task file
        #[arg(short = 'd', long, allow_negative_numbers = true)]
        max_days: Option<i64>,
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Run the plain text fixtures in a directory
    Check {
        #[arg(long, default_value = testing::FIXTURE_DIR)]
        data: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            tasks,
            max_days,
            format,
        } => {
            let (tasks, capacity) = match tasks {
                Some(path) => {
                    let file = TaskFile::load(&path)
                        .with_context(|| format!("failed to load {}", path.display()))?;
                    (file.task_list()?, file.capacity(max_days)?)
                }
                None => (config::default_tasks(), config::resolve_capacity(max_days)?),
            };

            let plan = Plan::solve(tasks, capacity)?;
            let mut out = Writer::new();
            report::render(&plan, format, &mut out)?;
            print!("{}", out.as_str());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { data } => {
            if testing::run_all_tests(&data, knapsack::solve) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
