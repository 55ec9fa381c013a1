use crate::Result;
use crate::collect::CollectError;

use anyhow::Context;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

/// Default program that concatenates every log's summary into one stat file.
pub const DEFAULT_AGGREGATE_CMD: &str = "./get_combined_stats.sh";

/// Run the aggregation program and store its stdout at `dest`.
pub fn create_statfile(program: &str, dest: &Path) -> Result<()> {
    tracing::info!(program, dest = %dest.display(), "running aggregation command");

    let output = Command::new(program)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .with_context(|| format!("spawn aggregation command {}", program))?;

    if !output.status.success() {
        return Err(CollectError::CommandFailed {
            command: program.to_string(),
            status: output.status.to_string(),
        }
        .into());
    }

    fs::write(dest, &output.stdout)
        .with_context(|| format!("write stat file {}", dest.display()))?;
    Ok(())
}
