//! Kernel of the site configuration registry.
//! Validates the domain entities, derives URLs and addresses from them, and installs
//! the process-wide read-only registry.
//!
//! ## Registry
//! ```rust
//! use limebird_kernel::domain::environment::ExecutionMode;
//! use limebird_kernel::registry::SiteRegistry;
//!
//! let registry = SiteRegistry::default_for(ExecutionMode::Production).unwrap();
//! assert_eq!(registry.resolve_active_site_url(), "https://limebird.org");
//! assert!(registry.is_recognized_domain("https://blog.limebird.org/posts"));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use limebird_kernel::config::load_site_config;
//! let cfg = load_site_config(Some("config/site.toml")).unwrap();
//! ```
pub mod config;
mod error;
pub mod mode;
pub mod registry;
pub mod validate;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use limebird_domain as domain;
