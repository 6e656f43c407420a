use crate::SolverError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides [SolverConfig::z3_path].
pub const Z3_PATH_VAR: &str = "Z3_PATH";
/// Environment variable that overrides [SolverConfig::timeout], in milliseconds.
pub const Z3_TIMEOUT_MS_VAR: &str = "Z3_TIMEOUT_MS";

/// Configuration of the [Z3Solver](crate::Z3Solver).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// The z3 binary. A bare name is looked up in `PATH`.
    pub z3_path: PathBuf,
    /// The time limit for a single formula.
    pub timeout: Duration,
    /// The memory limit of the solver process in megabytes.
    pub memory_limit_mb: Option<u32>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            z3_path: PathBuf::from("z3"),
            timeout: Duration::from_secs(60),
            memory_limit_mb: None,
        }
    }
}

impl SolverConfig {
    /// Creates the default configuration and applies the overrides from `Z3_PATH` and
    /// `Z3_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, SolverError> {
        Self::default().with_overrides(env::var(Z3_PATH_VAR).ok(), env::var(Z3_TIMEOUT_MS_VAR).ok())
    }

    #[must_use]
    pub fn with_z3_path(mut self, z3_path: impl Into<PathBuf>) -> Self {
        self.z3_path = z3_path.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_memory_limit_mb(mut self, memory_limit_mb: u32) -> Self {
        self.memory_limit_mb = Some(memory_limit_mb);
        self
    }

    fn with_overrides(
        mut self,
        z3_path: Option<String>,
        timeout_ms: Option<String>,
    ) -> Result<Self, SolverError> {
        if let Some(z3_path) = z3_path.filter(|path| !path.is_empty()) {
            self.z3_path = PathBuf::from(z3_path);
        }
        if let Some(timeout_ms) = timeout_ms {
            let millis = timeout_ms.trim().parse::<u64>().map_err(|_| {
                SolverError::Configuration(format!(
                    "{Z3_TIMEOUT_MS_VAR} must be a number of milliseconds, got '{timeout_ms}'"
                ))
            })?;
            self.timeout = Duration::from_millis(millis);
        }
        Ok(self)
    }
}
