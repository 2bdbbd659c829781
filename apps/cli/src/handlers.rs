use crate::args::Command;
use anyhow::{Result, bail};
use limebird::SiteRegistry;
use serde_json::json;

pub fn run(registry: &SiteRegistry, command: Command) -> Result<()> {
    match command {
        // Reaching this point means loading and validation already succeeded.
        Command::Validate => println!("ok"),
        Command::Show => {
            let doc = json!({ "mode": registry.mode(), "config": registry.config() });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        },
        Command::SiteUrl => println!("{}", registry.resolve_active_site_url()),
        Command::Email { local } => println!("{}", registry.build_email_address(&local)),
        Command::CheckDomain { url } => println!("{}", registry.is_recognized_domain(&url)),
        Command::Subdomains => {
            for (label, url) in registry.list_subdomain_urls() {
                println!("{label}\t{url}");
            }
        },
        Command::ProjectUrl { key } => {
            println!("{}", registry.resolve_issue_tracker_project_url(key.as_deref()));
        },
        Command::IssueUrl { key } => {
            if !registry.is_well_formed_issue_key(&key) {
                bail!("'{key}' is not a well-formed issue key (expected e.g. SCRUM-42)");
            }
            println!("{}", registry.resolve_issue_url(&key));
        },
        Command::IssueKey { key } => println!("{}", registry.is_well_formed_issue_key(&key)),
        Command::Project { key } => {
            let Some(project) = registry.lookup_issue_tracker_project(&key) else {
                bail!("no tracker project with key '{key}'");
            };
            println!("{}", serde_json::to_string_pretty(project)?);
        },
        Command::Nav => {
            for item in registry.main_nav() {
                println!("{}\t{}", item.title, item.effective_href());
            }
        },
    }

    Ok(())
}
