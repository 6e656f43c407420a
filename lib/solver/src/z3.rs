use crate::{SmtSolver, SolverConfig, SolverError};
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, trace};

/// The time the process gets on top of the configured timeout to report its own timeout.
const GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Evaluates formulas with a z3 process.
///
/// Every call to [SmtSolver::evaluate] spawns a fresh process that reads the formula from its
/// standard input. No solver state is shared between two evaluations. The process is killed if
/// it does not answer within the configured timeout.
#[derive(Clone, Debug, Default)]
pub struct Z3Solver {
    config: SolverConfig,
}

impl Z3Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the version string of the configured z3 binary.
    pub async fn version(&self) -> Result<String, SolverError> {
        let output = Command::new(&self.config.z3_path)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|error| self.spawn_error(error))?;

        if !output.status.success() {
            return Err(SolverError::Unavailable(format!(
                "{} --version exited with {}",
                self.config.z3_path.display(),
                output.status
            )));
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_owned();
        debug!("Detected z3 version: {version}");
        Ok(version)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.config.z3_path);
        command
            .arg("-in")
            .arg("-smt2")
            .arg(format!("-t:{}", self.config.timeout.as_millis()))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(memory_limit) = self.config.memory_limit_mb {
            command.arg(format!("-memory:{memory_limit}"));
        }

        command
    }

    fn spawn_error(&self, error: io::Error) -> SolverError {
        if error.kind() == io::ErrorKind::NotFound {
            SolverError::Unavailable(format!(
                "z3 binary {} not found",
                self.config.z3_path.display()
            ))
        } else {
            SolverError::Io(error)
        }
    }
}

#[async_trait]
impl SmtSolver for Z3Solver {
    async fn evaluate(&self, formula: &str) -> Result<String, SolverError> {
        debug!("Evaluating formula of {} bytes with z3", formula.len());
        trace!("Formula:\n{formula}");

        let mut child = self
            .command()
            .spawn()
            .map_err(|error| self.spawn_error(error))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(formula.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let output = tokio::time::timeout(self.config.timeout + GRACE_PERIOD, child.wait_with_output())
            .await
            .map_err(|_| SolverError::Timeout(self.config.timeout))??;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("z3 stdout: {}", stdout.trim());
        if !stderr.trim().is_empty() {
            debug!("z3 stderr: {}", stderr.trim());
        }

        if stdout.trim().is_empty() {
            return Ok(stderr.into_owned());
        }
        Ok(stdout)
    }
}
