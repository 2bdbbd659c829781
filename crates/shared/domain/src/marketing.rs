use serde::{Deserialize, Serialize};

/// Public-facing metadata of the site (page titles, Open Graph tags, footer links).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    pub og_image: String,
    pub links: SiteLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteLinks {
    pub twitter: String,
    pub github: String,
    pub email: String,
    pub support: String,
}

/// A single entry of the marketing header navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub disabled: bool,
}

impl NavItem {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self { title: title.into(), href: href.into(), disabled: false }
    }

    /// Disabled items keep their place in the menu but link nowhere.
    #[must_use]
    pub fn effective_href(&self) -> &str {
        if self.disabled { "#" } else { &self.href }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingConfig {
    pub main_nav: Vec<NavItem>,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            name: "Limebird.org".to_owned(),
            description: "Professional tech support services and product development. \
                          Taskmaster app and expert IT solutions."
                .to_owned(),
            url: "https://limebird.org".to_owned(),
            og_image: "https://limebird.org/og.jpg".to_owned(),
            links: SiteLinks::default(),
        }
    }
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            twitter: "https://twitter.com/limebirdorg".to_owned(),
            github: "https://github.com/limebird01/limebird-site".to_owned(),
            email: "dan@limebird.org".to_owned(),
            support: "support@limebird.org".to_owned(),
        }
    }
}

impl Default for MarketingConfig {
    fn default() -> Self {
        let main_nav = [
            ("Services", "/services"),
            ("Products", "/products"),
            ("Blog", "/blog"),
            ("Docs", "/docs"),
            ("About", "/about"),
            ("Contact", "/contact"),
            ("Pricing", "/pricing"),
            ("Terms", "/terms"),
            ("Privacy", "/privacy"),
        ]
        .into_iter()
        .map(|(title, href)| NavItem::new(title, href))
        .collect();

        Self { main_nav }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_item_links_nowhere() {
        let mut item = NavItem::new("Docs", "/docs");
        assert_eq!(item.effective_href(), "/docs");
        item.disabled = true;
        assert_eq!(item.effective_href(), "#");
    }
}
