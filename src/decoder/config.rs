use std::sync::OnceLock;
use std::time::Duration;

/// Separator terminating variable-length AI fields
pub const DEFAULT_SEPARATOR: char = '+';
/// Safety bound on tokenizer iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
/// Keystroke coalescing window for scan sessions
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

fn parse_env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_char(name: &str, default: char) -> char {
    std::env::var(name)
        .ok()
        .and_then(|v| {
            let mut chars = v.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        })
        .unwrap_or(default)
}

/// Tunables for tokenization and scan sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Character terminating variable-length fields
    pub separator: char,
    /// Maximum tokenizer iterations before giving up
    pub max_iterations: usize,
    /// Quiet period before a session parses its buffer
    pub debounce: Duration,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl DecoderConfig {
    /// Defaults overridden by `GS1_SEPARATOR`, `GS1_MAX_ITERATIONS` and `GS1_DEBOUNCE_MS`.
    ///
    /// Values that fail to parse keep their default.
    pub fn from_env() -> Self {
        Self {
            separator: parse_env_char("GS1_SEPARATOR", DEFAULT_SEPARATOR),
            max_iterations: parse_env_usize("GS1_MAX_ITERATIONS", DEFAULT_MAX_ITERATIONS).max(1),
            debounce: Duration::from_millis(parse_env_u64("GS1_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS)),
        }
    }

    /// Use a different field separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Use a different iteration bound
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Use a different debounce window
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

static GLOBAL_CONFIG: OnceLock<DecoderConfig> = OnceLock::new();

/// Process-wide config read from the environment on first use
pub fn global() -> &'static DecoderConfig {
    GLOBAL_CONFIG.get_or_init(DecoderConfig::from_env)
}
