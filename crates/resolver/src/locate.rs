use crate::config::LocatorConfig;
use crate::error::LocateError;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Looks up the root directory of a named external package.
///
/// Implementations answer "where is package X installed?" or no-match;
/// they never fail loudly. The concrete mechanism is swappable so tests
/// can use canned answers instead of spawning processes.
pub trait PackageLocator {
    fn locate(&self, package: &str) -> Option<PathBuf>;
}

/// Locator backed by an external package-management command
/// (`rospack find <name>` by default).
///
/// The calling thread blocks until the command exits or the configured
/// timeout passes; a command still running at the deadline is killed. The
/// first line of stdout, trimmed, is the package root. Every failure mode
/// (missing binary, timeout, non-zero exit, empty output) is a no-match.
#[derive(Debug, Clone)]
pub struct CommandLocator {
    config: LocatorConfig,
}

impl CommandLocator {
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    fn run(&self, package: &str) -> Result<PathBuf, LocateError> {
        let mut child = Command::new(&self.config.command)
            .args(&self.config.args)
            .arg(package)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| LocateError::Spawn(self.config.command.clone(), err))?;

        let status = wait_with_deadline(&mut child, self.config.timeout)?;
        if !status.success() {
            return Err(LocateError::Exit(status));
        }

        let stdout = child.stdout.take().ok_or(LocateError::NoOutput)?;
        let mut first_line = String::new();
        BufReader::new(stdout).read_line(&mut first_line)?;

        let root = first_line.trim();
        if root.is_empty() {
            return Err(LocateError::NoOutput);
        }
        Ok(PathBuf::from(root))
    }
}

impl Default for CommandLocator {
    fn default() -> Self {
        Self::new(LocatorConfig::default())
    }
}

impl PackageLocator for CommandLocator {
    fn locate(&self, package: &str) -> Option<PathBuf> {
        match self.run(package) {
            Ok(root) => {
                log::debug!("Package '{package}' located at {}", root.display());
                Some(root)
            }
            Err(err) => {
                log::debug!("Package lookup for '{package}' failed: {err}");
                None
            }
        }
    }
}

fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Result<ExitStatus, LocateError> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(LocateError::Timeout(timeout));
        }
        thread::sleep(WAIT_POLL_INTERVAL);
    }
}
