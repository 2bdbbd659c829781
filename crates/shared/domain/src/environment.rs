use crate::constants::{DEVELOPMENT, PRODUCTION};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-valued execution mode of the running site.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Development,
    Production,
}

impl ExecutionMode {
    pub const ALL: [Self; 2] = [Self::Development, Self::Production];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => DEVELOPMENT,
            Self::Production => PRODUCTION,
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`ExecutionMode::from_str`] for anything but the two known mode names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModeError(pub String);

impl fmt::Display for UnknownModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown execution mode '{}' (expected '{PRODUCTION}' or '{DEVELOPMENT}')", self.0)
    }
}

impl std::error::Error for UnknownModeError {}

impl FromStr for ExecutionMode {
    type Err = UnknownModeError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(PRODUCTION) {
            Ok(Self::Production)
        } else if trimmed.eq_ignore_ascii_case(DEVELOPMENT) {
            Ok(Self::Development)
        } else {
            Err(UnknownModeError(s.to_owned()))
        }
    }
}

/// Runtime flags derived from a single [`ExecutionMode`].
///
/// Both booleans come from the same field, so they are always mutually exclusive
/// and jointly exhaustive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnvironmentDescriptor {
    pub mode: ExecutionMode,
}

impl EnvironmentDescriptor {
    #[must_use]
    pub const fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self.mode, ExecutionMode::Production)
    }

    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self.mode, ExecutionMode::Development)
    }
}

/// Informational description of the workstation the site is developed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workstation {
    pub os: String,
    pub terminal: String,
    pub ide: String,
}

impl Default for Workstation {
    fn default() -> Self {
        Self { os: "Windows".to_owned(), terminal: "PowerShell".to_owned(), ide: "Cursor".to_owned() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes_loosely() {
        assert_eq!(" Production ".parse::<ExecutionMode>(), Ok(ExecutionMode::Production));
        assert_eq!("development".parse::<ExecutionMode>(), Ok(ExecutionMode::Development));
        assert!("staging".parse::<ExecutionMode>().is_err());
        assert!("".parse::<ExecutionMode>().is_err());
    }

    #[test]
    fn exactly_one_flag_per_mode() {
        for mode in ExecutionMode::ALL {
            let env = EnvironmentDescriptor::new(mode);
            assert_ne!(env.is_production(), env.is_development(), "mode {mode}");
        }
    }
}
