//! The site configuration registry: a validated, read-only [`SiteConfig`] plus the
//! execution mode, and the operations pages use to derive URLs and addresses.

use crate::error::RegistryError;
use crate::validate::{self, is_within, validate_config};
use limebird_domain::config::SiteConfig;
use limebird_domain::constants::{BROWSE_PATH, HTTPS_SCHEME};
use limebird_domain::environment::{EnvironmentDescriptor, ExecutionMode};
use limebird_domain::marketing::NavItem;
use limebird_domain::tracker::IssueProject;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::info;
use url::Url;

static REGISTRY: OnceLock<SiteRegistry> = OnceLock::new();

/// Validated site configuration bound to an execution mode.
///
/// Cloning is cheap (the config is `Arc`-backed) and there is no way to mutate
/// a registry after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRegistry {
    config: SiteConfig,
    environment: EnvironmentDescriptor,
}

impl SiteRegistry {
    /// Validates `config` and binds it to `mode`.
    ///
    /// # Errors
    /// Returns [`RegistryError::Invariant`] naming the first entity that breaks an invariant.
    pub fn new(config: SiteConfig, mode: ExecutionMode) -> Result<Self, RegistryError> {
        validate_config(&config)?;
        Ok(Self { config, environment: EnvironmentDescriptor::new(mode) })
    }

    /// Registry over the canonical limebird.org values.
    ///
    /// # Errors
    /// Only if the built-in defaults were edited into an invalid state.
    pub fn default_for(mode: ExecutionMode) -> Result<Self, RegistryError> {
        Self::new(SiteConfig::default(), mode)
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn environment(&self) -> EnvironmentDescriptor {
        self.environment
    }

    #[must_use]
    pub const fn mode(&self) -> ExecutionMode {
        self.environment.mode
    }

    /// Production URL in production, the staging preview otherwise.
    #[must_use]
    pub fn resolve_active_site_url(&self) -> &str {
        if self.environment.is_production() {
            &self.config.urls.production
        } else {
            &self.config.urls.staging
        }
    }

    /// `local_part@email_domain`. The local part is not checked.
    #[must_use]
    pub fn build_email_address(&self, local_part: &str) -> String {
        format!("{local_part}@{}", self.config.domain.email_domain)
    }

    /// Whether `url` points at a registered domain or one of its subdomains.
    ///
    /// Anything that does not parse as an absolute URL with a host is simply not recognized.
    #[must_use]
    pub fn is_recognized_domain(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        self.config.domain.registered().any(|domain| is_within(host, domain))
    }

    /// Subdomain label (`www`, `dev`, ...) → `https://` URL.
    #[must_use]
    pub fn list_subdomain_urls(&self) -> BTreeMap<String, String> {
        let domain = &self.config.domain;
        domain
            .subdomains
            .iter()
            .filter_map(|sub| {
                domain.label_of(sub).map(|label| (label.to_owned(), format!("{HTTPS_SCHEME}://{sub}")))
            })
            .collect()
    }

    /// Browse URL of a tracker project, `default_project` when no key is given.
    ///
    /// Purely syntactic: the key does not have to be a configured project.
    #[must_use]
    pub fn resolve_issue_tracker_project_url(&self, project_key: Option<&str>) -> String {
        self.browse_url(project_key.unwrap_or(self.config.tracker.default_project.as_str()))
    }

    /// Browse URL of a single issue (e.g. `SCRUM-42`), without checking the key.
    #[must_use]
    pub fn resolve_issue_url(&self, issue_key: &str) -> String {
        self.browse_url(issue_key)
    }

    fn browse_url(&self, key: &str) -> String {
        format!("{HTTPS_SCHEME}://{}/{BROWSE_PATH}/{key}", self.config.tracker.cloud_instance)
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_well_formed_issue_key(&self, key: &str) -> bool {
        validate::is_well_formed_issue_key(key)
    }

    /// Exact, case-sensitive match on [`IssueProject::key`].
    #[must_use]
    pub fn lookup_issue_tracker_project(&self, project_key: &str) -> Option<&IssueProject> {
        self.config.tracker.projects.values().find(|project| project.key == project_key)
    }

    pub fn issue_tracker_projects(&self) -> impl Iterator<Item = &IssueProject> {
        self.config.tracker.projects.values()
    }

    #[must_use]
    pub fn main_nav(&self) -> &[NavItem] {
        &self.config.marketing.main_nav
    }
}

/// Makes `registry` the process-wide instance.
///
/// # Errors
/// Returns [`RegistryError::AlreadyInitialized`] if a registry was installed before;
/// the installed one is left untouched.
pub fn install(registry: SiteRegistry) -> Result<&'static SiteRegistry, RegistryError> {
    let mut fresh = false;
    let installed = REGISTRY.get_or_init(|| {
        fresh = true;
        registry
    });

    if !fresh {
        return Err(RegistryError::AlreadyInitialized {
            context: Some(format!("mode {}", installed.mode()).into()),
        });
    }

    info!(
        mode = %installed.mode(),
        primary = %installed.config().domain.primary,
        "Site registry installed"
    );
    Ok(installed)
}

/// The installed registry, if [`install`] has run.
#[must_use]
pub fn global() -> Option<&'static SiteRegistry> {
    REGISTRY.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use limebird_domain::config::SiteConfigInner;

    fn registry(mode: ExecutionMode) -> SiteRegistry {
        SiteRegistry::default_for(mode).expect("defaults validate")
    }

    #[test]
    fn active_url_follows_mode() {
        assert_eq!(registry(ExecutionMode::Production).resolve_active_site_url(), "https://limebird.org");
        assert_eq!(
            registry(ExecutionMode::Development).resolve_active_site_url(),
            "https://limebirdorg.netlify.app"
        );
    }

    #[test]
    fn email_address_is_not_validated() {
        let reg = registry(ExecutionMode::Development);
        assert_eq!(reg.build_email_address("dan"), "dan@limebird.org");
        assert_eq!(reg.build_email_address(""), "@limebird.org");
        assert_eq!(reg.build_email_address("a@b"), "a@b@limebird.org");
    }

    #[test]
    fn project_urls_default_to_scrum() {
        let reg = registry(ExecutionMode::Development);
        assert_eq!(
            reg.resolve_issue_tracker_project_url(None),
            "https://limebird.atlassian.net/browse/SCRUM"
        );
        assert_eq!(
            reg.resolve_issue_tracker_project_url(Some("NOPE")),
            "https://limebird.atlassian.net/browse/NOPE"
        );
        assert_eq!(reg.resolve_issue_url("TAS-7"), "https://limebird.atlassian.net/browse/TAS-7");
    }

    #[test]
    fn invalid_config_is_rejected_with_entity_context() {
        let mut inner = SiteConfigInner::default();
        inner.domain.subdomains.push("blog.example.org".to_owned());

        let err = SiteRegistry::new(inner.into(), ExecutionMode::Development)
            .expect_err("foreign subdomain must be rejected");
        assert!(matches!(
            &err,
            RegistryError::Invariant { context: Some(ctx), .. } if ctx == "domain"
        ));
    }
}
