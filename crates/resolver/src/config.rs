use std::time::Duration;

/// Default ceiling on a package lookup. `rospack` answers in milliseconds
/// when it answers at all; anything slower is treated as a failed lookup.
const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the external package-lookup command.
///
/// The command is invoked as `<command> <args...> <package-name>` and is
/// expected to print the package's root directory on the first line of
/// stdout.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Executable to invoke.
    pub command: String,

    /// Fixed arguments placed before the package name.
    pub args: Vec<String>,

    /// Upper bound on the wait for the command to exit.
    pub timeout: Duration,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            command: "rospack".to_string(),
            args: vec!["find".to_string()],
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

impl LocatorConfig {
    /// Builds a config from a whitespace-separated command line such as
    /// `"rospack find"`. Returns `None` for an empty line.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let command = parts.next()?;
        Some(Self {
            command,
            args: parts.collect(),
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        })
    }
}
