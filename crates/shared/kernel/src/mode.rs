//! Execution-mode resolution. The variable is read once at startup and the
//! resulting [`ExecutionMode`] is injected into the registry.

use limebird_domain::constants::MODE_ENV_VAR;
use limebird_domain::environment::ExecutionMode;
use std::env::VarError;
use tracing::warn;

/// Reads [`MODE_ENV_VAR`] and resolves it with [`resolve_mode`].
#[must_use]
pub fn mode_from_env() -> ExecutionMode {
    mode_from_var(std::env::var(MODE_ENV_VAR))
}

fn mode_from_var(var: Result<String, VarError>) -> ExecutionMode {
    match var {
        Ok(value) => resolve_mode(Some(&value)),
        Err(VarError::NotPresent) => resolve_mode(None),
        Err(err @ VarError::NotUnicode(_)) => {
            warn!(variable = MODE_ENV_VAR, %err, "Falling back to development mode");
            ExecutionMode::Development
        },
    }
}

/// Maps the raw variable value to a mode.
///
/// Absent or blank values mean development. Unrecognized values also fall back to
/// development (with a warning), so production is only ever selected explicitly.
#[must_use]
pub fn resolve_mode(raw: Option<&str>) -> ExecutionMode {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return ExecutionMode::Development;
    };

    value.parse().unwrap_or_else(|err| {
        warn!(variable = MODE_ENV_VAR, %err, "Falling back to development mode");
        ExecutionMode::Development
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use limebird_domain::environment::EnvironmentDescriptor;
    use std::ffi::OsString;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn absent_or_blank_is_development() {
        assert_eq!(resolve_mode(None), ExecutionMode::Development);
        assert_eq!(resolve_mode(Some("")), ExecutionMode::Development);
        assert_eq!(resolve_mode(Some("   ")), ExecutionMode::Development);
    }

    #[test]
    fn known_values() {
        assert_eq!(resolve_mode(Some("production")), ExecutionMode::Production);
        assert_eq!(resolve_mode(Some("PRODUCTION\n")), ExecutionMode::Production);
        assert_eq!(resolve_mode(Some("development")), ExecutionMode::Development);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("capture lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_while(f: impl FnOnce() -> ExecutionMode) -> (ExecutionMode, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt().with_writer(move || writer.clone()).finish();

        let mode = tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8_lossy(&captured.0.lock().expect("capture lock")).into_owned();
        (mode, output)
    }

    #[test]
    fn missing_variable_is_development_without_warning() {
        let (mode, output) = logged_while(|| mode_from_var(Err(VarError::NotPresent)));
        assert_eq!(mode, ExecutionMode::Development);
        assert!(output.is_empty(), "{output}");
    }

    #[test]
    fn non_unicode_value_warns_and_falls_back() {
        let raw = OsString::from("production");
        let (mode, output) = logged_while(|| mode_from_var(Err(VarError::NotUnicode(raw))));
        assert_eq!(mode, ExecutionMode::Development);
        assert!(output.contains("Falling back to development mode"), "{output}");
    }

    #[test]
    fn unknown_value_warns_and_falls_back() {
        let (mode, output) = logged_while(|| mode_from_var(Ok("staging".to_owned())));
        assert_eq!(mode, ExecutionMode::Development);
        assert!(output.contains("LIMEBIRD_ENV"), "{output}");
    }

    #[test]
    fn unknown_value_keeps_flags_exclusive() {
        let env = EnvironmentDescriptor::new(resolve_mode(Some("staging")));
        assert!(env.is_development());
        assert!(!env.is_production());
    }
}
