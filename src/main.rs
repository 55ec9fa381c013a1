use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod collect;
mod log;
mod logging;
mod report;
mod run;
mod table;

#[cfg(test)]
mod testutil;

pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

#[derive(Parser)]
#[command(name = "bench-stats")]
#[command(about = "Collect graph benchmark results into CSV reports", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize every log through the aggregation command.
    Combined {
        /// Folder names (informational only).
        folders: Vec<String>,

        /// Program whose stdout becomes the intermediate stat file.
        #[arg(long, default_value = collect::statfile::DEFAULT_AGGREGATE_CMD)]
        aggregate_cmd: String,

        /// Reuse an existing stat file instead of running the aggregation command.
        #[arg(long)]
        statfile: Option<PathBuf>,

        #[arg(short = 'o', long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Collect per-application throughput from `<folder>logs*/*`.
    #[command(arg_required_else_help = true)]
    Stats {
        /// Application folders, e.g. `pagerank/ ktruss/`.
        #[arg(required = true)]
        folders: Vec<String>,

        #[arg(short = 'o', long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(exit_code(&e));
        }
    };

    logging::init_logging();

    match execute(cli.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Usage requests exit 0; every other argument error exits 1.
fn exit_code(e: &clap::Error) -> u8 {
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

fn execute(cmd: Commands) -> Result<()> {
    let stamp = report::timestamp(&chrono::Local::now());

    match cmd {
        Commands::Combined {
            folders,
            aggregate_cmd,
            statfile,
            out_dir,
        } => {
            // 1) Produce (or reuse) the intermediate stat file.
            let statfile = match statfile {
                Some(path) => path,
                None => {
                    let path =
                        report::report_path(&out_dir, report::INTERMEDIATE_PREFIX, &stamp, "txt");
                    collect::create_statfile(&aggregate_cmd, &path)?;
                    path
                }
            };

            let out = report::report_path(&out_dir, report::COMBINED_PREFIX, &stamp, "csv");
            println!("Folders: {:?}", folders);
            println!("Updating file: {}", out.display());

            // 2) Parse; a bad line aborts before anything is written.
            let table = run::combined_table(&statfile)?;

            // 3) Write.
            print!("{}", table.preview()?);
            let path = report::write_csv(&table, &out_dir, report::COMBINED_PREFIX, &stamp)?;
            println!("Wrote {}", path.display());
        }
        Commands::Stats { folders, out_dir } => {
            let out = report::report_path(&out_dir, report::STATS_PREFIX, &stamp, "csv");
            println!("Folders: {:?}", folders);
            println!("Updating file: {}", out.display());

            let table = run::stats_table(&folders)?;

            print!("{}", table.preview()?);
            let path = report::write_csv(&table, &out_dir, report::STATS_PREFIX, &stamp)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
