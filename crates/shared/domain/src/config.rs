use crate::environment::Workstation;
use crate::marketing::{MarketingConfig, SiteMetadata};
use crate::tracker::IssueTracker;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;

/// Every configuration entity of the site.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub domain: DomainSet,
    pub urls: WebsiteUrls,
    pub email: EmailSettings,
    pub dns: DnsRecords,
    pub tracker: IssueTracker,
    pub external_links: ExternalLinks,
    pub workstation: Workstation,
    pub paths: ProjectPaths,
    pub site: SiteMetadata,
    pub marketing: MarketingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into consumers.
///
/// Read-only by construction: there is no `DerefMut` and no setter.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl SiteConfig {
    #[must_use]
    pub fn new(inner: SiteConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl From<SiteConfigInner> for SiteConfig {
    fn from(inner: SiteConfigInner) -> Self {
        Self::new(inner)
    }
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Domains the site controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSet {
    pub primary: String,
    /// Fully qualified subdomains, e.g. `www.limebird.org`.
    pub subdomains: Vec<String>,
    pub email_domain: String,
}

impl DomainSet {
    /// Primary domain followed by every subdomain.
    pub fn registered(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.subdomains.iter().map(String::as_str))
    }

    /// Short label of a subdomain (`www.limebird.org` → `www`), `None` if it is not under the primary domain.
    #[must_use]
    pub fn label_of<'a>(&self, subdomain: &'a str) -> Option<&'a str> {
        subdomain
            .strip_suffix(self.primary.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .filter(|label| !label.is_empty())
    }
}

/// Canonical absolute URLs for environments and external dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteUrls {
    pub production: String,
    pub www_production: String,
    pub dev_site: String,
    /// Preview deployment served outside production.
    pub staging: String,
    pub github_repo: String,
    pub netlify_dashboard: String,
    pub hover_dashboard: String,
}

impl WebsiteUrls {
    /// `(field name, url)` pairs, used for validation and listings.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("production", &self.production),
            ("www_production", &self.www_production),
            ("dev_site", &self.dev_site),
            ("staging", &self.staging),
            ("github_repo", &self.github_repo),
            ("netlify_dashboard", &self.netlify_dashboard),
            ("hover_dashboard", &self.hover_dashboard),
        ]
    }
}

/// Outbound mail addresses and SMTP parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub contact: String,
    pub support: String,
    pub forward_to: String,
    pub smtp: SmtpSettings,
}

impl EmailSettings {
    #[must_use]
    pub fn addresses(&self) -> [(&'static str, &str); 4] {
        [
            ("contact", &self.contact),
            ("support", &self.support),
            ("forward_to", &self.forward_to),
            ("smtp.username", &self.smtp.username),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
}

/// Records published for the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsRecords {
    pub netlify_ip: String,
    pub netlify_ip_alt: String,
    pub hover_mx: String,
    pub hover_mail: String,
    pub netlify_site: String,
}

impl DnsRecords {
    #[must_use]
    pub fn ipv4_records(&self) -> [(&'static str, &str); 2] {
        [("netlify_ip", &self.netlify_ip), ("netlify_ip_alt", &self.netlify_ip_alt)]
    }

    #[must_use]
    pub fn hostname_records(&self) -> [(&'static str, &str); 3] {
        [
            ("hover_mx", &self.hover_mx),
            ("hover_mail", &self.hover_mail),
            ("netlify_site", &self.netlify_site),
        ]
    }
}

/// Third-party sites linked from the pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalLinks {
    pub cursor_ide: String,
    pub github: String,
    pub netlify: String,
    pub hover: String,
    pub wcag_guidelines: String,
    pub core_web_vitals: String,
}

impl ExternalLinks {
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("cursor_ide", &self.cursor_ide),
            ("github", &self.github),
            ("netlify", &self.netlify),
            ("hover", &self.hover),
            ("wcag_guidelines", &self.wcag_guidelines),
            ("core_web_vitals", &self.core_web_vitals),
        ]
    }
}

/// Working-copy layout and repository coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub styles: PathBuf,
    pub assets: PathBuf,
    pub images: PathBuf,
    pub docs: PathBuf,
    pub git_repo: String,
    pub git_branch: String,
}

// --- Default ---

impl Default for DomainSet {
    fn default() -> Self {
        Self {
            primary: "limebird.org".to_owned(),
            subdomains: vec![
                "www.limebird.org".to_owned(),
                "dev.limebird.org".to_owned(),
                "blog.limebird.org".to_owned(),
            ],
            email_domain: "limebird.org".to_owned(),
        }
    }
}

impl Default for WebsiteUrls {
    fn default() -> Self {
        Self {
            production: "https://limebird.org".to_owned(),
            www_production: "https://www.limebird.org".to_owned(),
            dev_site: "https://dev.limebird.org".to_owned(),
            staging: "https://limebirdorg.netlify.app".to_owned(),
            github_repo: "https://github.com/limebird01/limebird-site".to_owned(),
            netlify_dashboard: "https://app.netlify.com".to_owned(),
            hover_dashboard: "https://hover.com".to_owned(),
        }
    }
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            contact: "dan@limebird.org".to_owned(),
            support: "support@limebird.org".to_owned(),
            forward_to: "limebird73@gmail.com".to_owned(),
            smtp: SmtpSettings::default(),
        }
    }
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_owned(),
            port: 587,
            username: "limebird73@gmail.com".to_owned(),
        }
    }
}

impl Default for DnsRecords {
    fn default() -> Self {
        Self {
            netlify_ip: "75.2.60.5".to_owned(),
            netlify_ip_alt: "76.76.19.19".to_owned(),
            hover_mx: "mx.hover.com.cust.hostedemail.com".to_owned(),
            hover_mail: "mail.hover.com.cust.hostedemail.com".to_owned(),
            netlify_site: "limebirdorg.netlify.app".to_owned(),
        }
    }
}

impl Default for ExternalLinks {
    fn default() -> Self {
        Self {
            cursor_ide: "https://cursor.sh".to_owned(),
            github: "https://github.com".to_owned(),
            netlify: "https://netlify.com".to_owned(),
            hover: "https://hover.com".to_owned(),
            wcag_guidelines: "https://www.w3.org/WAI/WCAG21/quickref/".to_owned(),
            core_web_vitals: "https://web.dev/vitals/".to_owned(),
        }
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::from(r"C:\Users\limeb\Projects\Limebird_org"),
            styles: PathBuf::from("styles"),
            assets: PathBuf::from("assets"),
            images: PathBuf::from("assets").join("images"),
            docs: PathBuf::from("docs"),
            git_repo: "https://github.com/limebird01/limebird-site.git".to_owned(),
            git_branch: "main".to_owned(),
        }
    }
}
