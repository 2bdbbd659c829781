use limebird_kernel::domain::environment::ExecutionMode;
use limebird_kernel::registry::SiteRegistry;
use proptest::prelude::*;

fn registry() -> SiteRegistry {
    SiteRegistry::default_for(ExecutionMode::Production).expect("defaults validate")
}

proptest! {
    #[test]
    fn recognition_never_panics(input in any::<String>()) {
        let _ = registry().is_recognized_domain(&input);
    }

    #[test]
    fn any_label_under_primary_is_recognized(label in "[a-z0-9]([a-z0-9-]{0,20}[a-z0-9])?") {
        let reg = registry();
        let subdomain = format!("https://{label}.limebird.org/");
        let glued = format!("https://{label}limebird.org/");
        prop_assert!(reg.is_recognized_domain(&subdomain));
        prop_assert!(!reg.is_recognized_domain(&glued));
    }

    #[test]
    fn generated_issue_keys_are_well_formed(project in "[A-Z]{1,10}", number in 0u32..1_000_000) {
        let reg = registry();
        let key = format!("{project}-{number}");
        prop_assert!(reg.is_well_formed_issue_key(&key));
        prop_assert!(!reg.is_well_formed_issue_key(&key.to_lowercase()));
        let browse_suffix = format!("/browse/{key}");
        prop_assert!(reg.resolve_issue_url(&key).ends_with(&browse_suffix));
    }

    #[test]
    fn email_address_appends_domain(local in "[a-z.]{1,16}") {
        prop_assert_eq!(registry().build_email_address(&local), format!("{local}@limebird.org"));
    }
}
