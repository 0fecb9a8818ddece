use log::warn;

/// Environment variable read by [`EvalConfig::from_env`].
pub const MAX_DEPTH_ENV: &str = "MATHSYN_MAX_DEPTH";

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest allowed nesting of parentheses, function arguments and `^`
    /// chains before the parser gives up with `NestingTooDeep`.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvalConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Defaults, overridden by `MATHSYN_MAX_DEPTH` when it holds a positive integer.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MAX_DEPTH_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let config = EvalConfig::default();
        match value.map(str::trim) {
            None | Some("") => config,
            Some(raw) => match raw.parse::<usize>() {
                Ok(depth) if depth > 0 => config.with_max_depth(depth),
                _ => {
                    warn!("ignoring {MAX_DEPTH_ENV}={raw:?}, using {DEFAULT_MAX_DEPTH}");
                    config
                }
            },
        }
    }
}
