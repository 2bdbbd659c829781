//! Syntactic checks for the values held by the registry, and the invariant pass run
//! before a [`SiteConfig`] is accepted.
//!
//! Every predicate here is total: malformed input yields `false`, never a panic.

use crate::error::RegistryError;
use limebird_domain::config::{DomainSet, SiteConfig};
use limebird_domain::constants::HTTPS_SCHEME;
use regex::Regex;
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

const MAX_HOSTNAME_LEN: usize = 253;

macro_rules! pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

pattern!(RE_ISSUE_KEY, r"^[A-Z]+-[0-9]+$");
pattern!(RE_PROJECT_KEY, r"^[A-Z]+$");
pattern!(RE_DNS_LABEL, r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$");
pattern!(RE_EMAIL_LOCAL, r"^[A-Za-z0-9._%+\-]+$");

fn matches(pattern: &LazyLock<Option<Regex>>, candidate: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(candidate))
}

/// `ABC-123`: uppercase project key, a hyphen, decimal issue number.
#[must_use]
pub fn is_well_formed_issue_key(key: &str) -> bool {
    matches(&RE_ISSUE_KEY, key)
}

/// `ABC`: one or more uppercase ASCII letters.
#[must_use]
pub fn is_valid_project_key(key: &str) -> bool {
    matches(&RE_PROJECT_KEY, key)
}

/// Fully qualified DNS name: at least two labels of 1-63 letters, digits or inner hyphens.
#[must_use]
pub fn is_valid_hostname(name: &str) -> bool {
    name.len() <= MAX_HOSTNAME_LEN
        && name.contains('.')
        && name.split('.').all(|label| matches(&RE_DNS_LABEL, label))
}

/// `local@domain` with a plain local part and a valid hostname after the `@`.
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    address
        .split_once('@')
        .is_some_and(|(local, domain)| matches(&RE_EMAIL_LOCAL, local) && is_valid_hostname(domain))
}

/// Absolute `https` URL with a host.
#[must_use]
pub fn is_https_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .is_ok_and(|url| url.scheme() == HTTPS_SCHEME && url.host_str().is_some_and(|h| !h.is_empty()))
}

/// `host` is `domain` itself or one of its subdomains.
pub(crate) fn is_within(host: &str, domain: &str) -> bool {
    host == domain || host.strip_suffix(domain).is_some_and(|rest| rest.ends_with('.'))
}

/// Checks every entity invariant, returning the first violation.
///
/// # Errors
/// Returns [`RegistryError::Invariant`] with the offending entity as context.
pub fn validate_config(config: &SiteConfig) -> Result<(), RegistryError> {
    validate_domains(&config.domain)?;
    validate_urls("urls", config.urls.entries())?;
    validate_email(config)?;
    validate_dns(config)?;
    validate_tracker(config)?;
    validate_urls("external_links", config.external_links.entries())?;
    validate_paths(config)?;
    validate_site(config)?;
    validate_marketing(config)?;

    debug!(primary = %config.domain.primary, "Site configuration passed validation");
    Ok(())
}

fn validate_domains(domain: &DomainSet) -> Result<(), RegistryError> {
    const ENTITY: &str = "domain";

    if domain.primary.is_empty() || !domain.primary.contains('.') {
        return Err(RegistryError::invariant(
            ENTITY,
            format!("primary domain '{}' must be non-empty and contain a dot", domain.primary),
        ));
    }

    let mut seen = HashSet::new();
    for name in domain.registered().chain(std::iter::once(domain.email_domain.as_str())) {
        if !is_valid_hostname(name) {
            return Err(RegistryError::invariant(ENTITY, format!("'{name}' is not a valid DNS name")));
        }
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(RegistryError::invariant(ENTITY, format!("'{name}' must be lowercase")));
        }
    }

    for sub in &domain.subdomains {
        if domain.label_of(sub).is_none() {
            return Err(RegistryError::invariant(
                ENTITY,
                format!("subdomain '{sub}' is not under '{}'", domain.primary),
            ));
        }
        if !seen.insert(sub.as_str()) {
            return Err(RegistryError::invariant(ENTITY, format!("subdomain '{sub}' is listed twice")));
        }
    }

    Ok(())
}

fn validate_urls<'a>(
    entity: &'static str,
    entries: impl IntoIterator<Item = (&'static str, &'a str)>,
) -> Result<(), RegistryError> {
    for (field, value) in entries {
        if !is_https_url(value) {
            return Err(RegistryError::invariant(
                entity,
                format!("{field} '{value}' is not an absolute https URL"),
            ));
        }
    }
    Ok(())
}

/// Addresses on the site's own domain must use exactly the configured email domain.
fn check_address(
    entity: &'static str,
    field: &str,
    address: &str,
    domain: &DomainSet,
) -> Result<(), RegistryError> {
    let Some((_, host)) = address.split_once('@').filter(|_| is_valid_email(address)) else {
        return Err(RegistryError::invariant(
            entity,
            format!("{field} '{address}' is not a local-part@domain address"),
        ));
    };

    let own = is_within(&host.to_ascii_lowercase(), &domain.primary);
    if own && !host.eq_ignore_ascii_case(&domain.email_domain) {
        return Err(RegistryError::invariant(
            entity,
            format!("{field} '{address}' must use the email domain '{}'", domain.email_domain),
        ));
    }
    Ok(())
}

fn validate_email(config: &SiteConfig) -> Result<(), RegistryError> {
    const ENTITY: &str = "email";

    for (field, address) in config.email.addresses() {
        check_address(ENTITY, field, address, &config.domain)?;
    }

    let smtp = &config.email.smtp;
    if !is_valid_hostname(&smtp.host) {
        return Err(RegistryError::invariant(
            ENTITY,
            format!("smtp.host '{}' is not a valid DNS name", smtp.host),
        ));
    }
    if smtp.port == 0 {
        return Err(RegistryError::invariant(ENTITY, "smtp.port must be within 1-65535"));
    }
    Ok(())
}

fn validate_dns(config: &SiteConfig) -> Result<(), RegistryError> {
    const ENTITY: &str = "dns";

    for (field, value) in config.dns.ipv4_records() {
        if value.parse::<Ipv4Addr>().is_err() {
            return Err(RegistryError::invariant(
                ENTITY,
                format!("{field} '{value}' is not a dotted-quad IPv4 address"),
            ));
        }
    }
    for (field, value) in config.dns.hostname_records() {
        if !is_valid_hostname(value) {
            return Err(RegistryError::invariant(
                ENTITY,
                format!("{field} '{value}' is not a valid DNS name"),
            ));
        }
    }
    Ok(())
}

fn validate_tracker(config: &SiteConfig) -> Result<(), RegistryError> {
    const ENTITY: &str = "tracker";
    let tracker = &config.tracker;

    let mut keys = HashSet::new();
    for (alias, project) in &tracker.projects {
        if !is_valid_project_key(&project.key) {
            return Err(RegistryError::invariant(
                ENTITY,
                format!("project '{alias}' has key '{}', expected uppercase letters only", project.key),
            ));
        }
        if !keys.insert(project.key.as_str()) {
            return Err(RegistryError::invariant(
                ENTITY,
                format!("project key '{}' is used more than once", project.key),
            ));
        }
    }

    if !is_valid_project_key(&tracker.default_project) {
        return Err(RegistryError::invariant(
            ENTITY,
            format!("default_project '{}' is not a valid project key", tracker.default_project),
        ));
    }
    if !is_valid_hostname(&tracker.cloud_instance) {
        return Err(RegistryError::invariant(
            ENTITY,
            format!("cloud_instance '{}' is not a valid DNS name", tracker.cloud_instance),
        ));
    }
    validate_urls(ENTITY, [("api_base_url", tracker.api_base_url.as_str())])?;
    if !is_valid_email(&tracker.account_email) {
        return Err(RegistryError::invariant(
            ENTITY,
            format!("account_email '{}' is not a valid address", tracker.account_email),
        ));
    }
    Ok(())
}

fn validate_paths(config: &SiteConfig) -> Result<(), RegistryError> {
    const ENTITY: &str = "paths";

    validate_urls(ENTITY, [("git_repo", config.paths.git_repo.as_str())])?;
    if config.paths.git_branch.trim().is_empty() {
        return Err(RegistryError::invariant(ENTITY, "git_branch cannot be empty"));
    }
    Ok(())
}

fn validate_site(config: &SiteConfig) -> Result<(), RegistryError> {
    const ENTITY: &str = "site";
    let site = &config.site;

    if site.name.trim().is_empty() {
        return Err(RegistryError::invariant(ENTITY, "name cannot be empty"));
    }
    validate_urls(
        ENTITY,
        [
            ("url", site.url.as_str()),
            ("og_image", site.og_image.as_str()),
            ("links.twitter", site.links.twitter.as_str()),
            ("links.github", site.links.github.as_str()),
        ],
    )?;
    check_address(ENTITY, "links.email", &site.links.email, &config.domain)?;
    check_address(ENTITY, "links.support", &site.links.support, &config.domain)
}

fn validate_marketing(config: &SiteConfig) -> Result<(), RegistryError> {
    const ENTITY: &str = "marketing";

    let mut titles = HashSet::new();
    for item in &config.marketing.main_nav {
        if item.title.trim().is_empty() {
            return Err(RegistryError::invariant(ENTITY, "navigation titles cannot be empty"));
        }
        if !item.href.starts_with('/') {
            return Err(RegistryError::invariant(
                ENTITY,
                format!("'{}' links to '{}', expected a site-relative path", item.title, item.href),
            ));
        }
        if !titles.insert(item.title.as_str()) {
            return Err(RegistryError::invariant(
                ENTITY,
                format!("navigation title '{}' appears twice", item.title),
            ));
        }
    }
    Ok(())
}
