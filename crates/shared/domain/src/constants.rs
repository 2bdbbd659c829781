//! String constants shared by the loader, the registry and the CLI.

/// Environment variable selecting the execution mode.
pub const MODE_ENV_VAR: &str = "LIMEBIRD_ENV";

/// Prefix for layered configuration overrides (`LIMEBIRD__DOMAIN__PRIMARY`).
pub const CONFIG_ENV_PREFIX: &str = "LIMEBIRD";
pub const CONFIG_ENV_SEPARATOR: &str = "__";
/// Splits list-valued overrides (`LIMEBIRD__DOMAIN__SUBDOMAINS=www.a.org,dev.a.org`).
pub const CONFIG_LIST_SEPARATOR: &str = ",";

/// Configuration file looked up when no explicit path is given (extension auto-detected).
pub const DEFAULT_CONFIG_PATH: &str = "site";

pub const PRODUCTION: &str = "production";
pub const DEVELOPMENT: &str = "development";

pub const HTTPS_SCHEME: &str = "https";
pub const BROWSE_PATH: &str = "browse";

// Issue types
pub const EPIC: &str = "Epic";
pub const BUG: &str = "Bug";
pub const FEATURE: &str = "Feature";
pub const TASK: &str = "Task";

// Labels
pub const TOOLS: &str = "Tools";
pub const DOCUMENTATION: &str = "Documentation";
pub const BLOG: &str = "Blog";
pub const WEBSITE: &str = "Website";
