//! External listing commands
//!
//! Runs a helper program (e.g. `chsh --list-shells`) with a hard timeout
//! and turns its stdout into value-only candidates.

use std::process::Stdio;

use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use crate::candidate::Completion;
use crate::error::ProviderError;

/// Run `program` and return its stdout.
///
/// Spawn errors, a non-zero exit and the timeout all map to
/// `ProviderError`. The child is killed if the timeout fires.
pub async fn run_listing(
    program: &str,
    args: &[String],
    limit: Duration,
) -> Result<String, ProviderError> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    debug!("running {} {:?}", program, args);
    let child = cmd.spawn()?;

    let output = match timeout(limit, child.wait_with_output()).await {
        Ok(result) => result?,
        Err(_) => {
            return Err(ProviderError::CommandTimeout {
                program: program.to_string(),
                timeout: limit,
            })
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let status = match stderr.lines().find(|l| !l.trim().is_empty()) {
            Some(line) => format!("{}: {}", output.status, line.trim()),
            None => output.status.to_string(),
        };
        return Err(ProviderError::CommandFailed {
            program: program.to_string(),
            status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// One value per non-empty output line
pub fn split_output(output: &str) -> Completion {
    Completion::values(
        output
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty()),
    )
}
