//! Facade crate for the limebird.org site registry.
//! Re-exports domain/kernel and wraps the startup sequence in one call.
//! Keep this crate thin: it should compose the other crates, not implement registry logic.
//!
//! ## Usage
//! ```rust,no_run
//! let registry = limebird::init(&limebird::InitOptions::default()).unwrap();
//! println!("{}", registry.resolve_active_site_url());
//! ```

pub use limebird_domain as domain;
pub use limebird_kernel as kernel;
pub use limebird_kernel::registry::SiteRegistry;

use limebird_domain::environment::ExecutionMode;
use limebird_kernel::RegistryError;
use limebird_kernel::config::{ConfigError, load_site_config};
use limebird_kernel::mode::mode_from_env;
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::debug;

#[limebird_derive::site_error]
pub enum InitError {
    #[error("Failed to load site configuration{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Failed to build site registry{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },
}

/// Startup inputs. Unset fields fall back to the default config lookup and `LIMEBIRD_ENV`.
#[derive(Debug, Default, Clone)]
pub struct InitOptions {
    pub config_path: Option<PathBuf>,
    pub mode: Option<ExecutionMode>,
}

impl InitOptions {
    #[must_use]
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Loads, resolves the mode and validates, without installing.
///
/// # Errors
/// Returns [`InitError::Config`] when loading fails and [`InitError::Registry`] when validation fails.
pub fn build(options: &InitOptions) -> Result<SiteRegistry, InitError> {
    let config = load_site_config(options.config_path.as_deref())?;
    let mode = options.mode.unwrap_or_else(mode_from_env);
    debug!(%mode, "Execution mode resolved");

    Ok(SiteRegistry::new(config, mode)?)
}

/// [`build`] followed by [`limebird_kernel::registry::install`].
///
/// # Errors
/// As [`build`], plus [`InitError::Registry`] wrapping `AlreadyInitialized` on a second call.
pub fn init(options: &InitOptions) -> Result<&'static SiteRegistry, InitError> {
    let registry = build(options)?;
    limebird_kernel::registry::install(registry).context("Installing site registry")
}
