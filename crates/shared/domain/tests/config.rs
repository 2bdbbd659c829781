use limebird_domain::config::{DomainSet, SiteConfig, SiteConfigInner, SmtpSettings, WebsiteUrls};
use limebird_domain::tracker::{IssueTracker, IssueTypes, Labels};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let domain = DomainSet::default();
    assert_eq!(domain.primary, "limebird.org");
    assert_eq!(domain.email_domain, "limebird.org");
    assert_eq!(domain.registered().count(), 4);

    let urls = WebsiteUrls::default();
    assert_eq!(urls.production, "https://limebird.org");
    assert_eq!(urls.staging, "https://limebirdorg.netlify.app");

    assert_eq!(SmtpSettings::default().port, 587);

    let tracker = IssueTracker::default();
    assert_eq!(tracker.default_project, "SCRUM");
    assert_eq!(tracker.projects.len(), 2);
    assert_eq!(tracker.issue_types, IssueTypes::ALL);
}

#[test]
fn subdomain_labels_strip_primary_suffix() {
    let domain = DomainSet::default();
    assert_eq!(domain.label_of("www.limebird.org"), Some("www"));
    assert_eq!(domain.label_of("a.b.limebird.org"), Some("a.b"));
    assert_eq!(domain.label_of("limebird.org"), None);
    assert_eq!(domain.label_of("evil-limebird.org"), None);
}

#[test]
fn site_config_deserializes_partially() {
    let raw = json!({
        "domain": { "primary": "example.org", "subdomains": ["www.example.org"] },
        "email": { "smtp": { "port": 2525 } },
        "tracker": { "labels": ["Blog", "Website"], "issue_types": [] }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.domain.primary, "example.org");
    assert_eq!(cfg.domain.subdomains, vec!["www.example.org".to_owned()]);
    // Fields missing from the document keep their defaults.
    assert_eq!(cfg.domain.email_domain, "limebird.org");
    assert_eq!(cfg.email.smtp.port, 2525);
    assert_eq!(cfg.email.smtp.host, "smtp.gmail.com");
    assert_eq!(cfg.tracker.labels, Labels::BLOG | Labels::WEBSITE);
    assert!(cfg.tracker.issue_types.is_empty());
    assert_eq!(cfg.urls, WebsiteUrls::default());
}

#[test]
fn flag_sets_serialize_as_display_names() {
    let value = serde_json::to_value(IssueTracker::default()).expect("serialize tracker");
    assert_eq!(value["issue_types"], json!(["Epic", "Bug", "Feature", "Task"]));
    assert_eq!(value["labels"], json!(["Tools", "Documentation", "Blog", "Website"]));
}

#[test]
fn unknown_label_is_rejected() {
    let err = serde_json::from_value::<Labels>(json!(["Blog", "Gossip"]))
        .expect_err("unknown label should fail");
    assert!(err.to_string().contains("Gossip"));
}

#[test]
fn cloned_config_shares_storage() {
    let cfg = SiteConfig::new(SiteConfigInner::default());
    let copy = cfg.clone();
    assert!(std::ptr::eq(&*cfg, &*copy));
    assert_eq!(cfg, SiteConfig::default());
}
