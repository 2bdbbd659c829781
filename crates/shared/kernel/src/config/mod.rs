use config::{Config, Environment, File, Map};
use limebird_domain::config::{SiteConfig, SiteConfigInner};
use limebird_domain::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, CONFIG_LIST_SEPARATOR, DEFAULT_CONFIG_PATH,
};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[limebird_derive::site_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: a file source overlaid with `LIMEBIRD__` environment variables.
///
/// 1. **Base File**: an explicit `path` must exist; without one, [`DEFAULT_CONFIG_PATH`]
///    (`site.toml`, `site.json`, ...) is used when present and skipped otherwise.
/// 2. **Environment Overrides**: variables prefixed with `LIMEBIRD__`, nested with double
///    underscores and lowercased (e.g. `LIMEBIRD__DOMAIN__EMAIL_DOMAIN` maps to `domain.email_domain`).
///    List fields (`domain.subdomains`, `tracker.issue_types`, `tracker.labels`) take
///    comma-separated values.
///
/// Fields absent from every layer keep the `Default` of `T`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the explicit file is missing, a source cannot be parsed,
/// or the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use limebird_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Like [`load_config`], but reads overrides from `env` instead of the process environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(CONFIG_ENV_PREFIX)
                .separator(CONFIG_ENV_SEPARATOR)
                .try_parsing(true)
                .list_separator(CONFIG_LIST_SEPARATOR)
                .with_list_parse_key("domain.subdomains")
                .with_list_parse_key("tracker.issue_types")
                .with_list_parse_key("tracker.labels")
                .source(env),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the site entities; see [`load_config`] for the layering rules.
///
/// # Errors
/// See [`load_config`].
pub fn load_site_config(path: Option<impl AsRef<Path>>) -> Result<SiteConfig, ConfigError> {
    load_config::<SiteConfigInner>(path).map(SiteConfig::new)
}

/// [`load_site_config`] with injected environment overrides.
///
/// # Errors
/// See [`load_config`].
pub fn load_site_config_with_env(
    path: Option<impl AsRef<Path>>,
    env: Map<String, String>,
) -> Result<SiteConfig, ConfigError> {
    load_config_with_env::<SiteConfigInner>(path, Some(env)).map(SiteConfig::new)
}
