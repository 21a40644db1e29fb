use neurofocus_core::models::profile::Accent;
use neurofocus_instruments::education::{all_modules, get_module};

#[test]
fn modules_are_listed_in_display_order() {
    let titles: Vec<&str> = all_modules().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "The Assessment Process",
            "ADHD in Women",
            "High-Achieving Adults",
            "UK Pathways: Right to Choose",
        ]
    );
}

#[test]
fn module_ids_are_unique_and_content_is_present() {
    let modules = all_modules();
    for (i, module) in modules.iter().enumerate() {
        assert!(!module.body().is_empty(), "{} has no content", module.id);
        assert!(
            modules[..i].iter().all(|earlier| earlier.id != module.id),
            "duplicate id {}",
            module.id
        );
    }
}

#[test]
fn tags_and_accents_match_the_hub() {
    let women = get_module("adhd_in_women").unwrap();
    assert_eq!(women.tag.as_deref(), Some("Must Read"));
    assert_eq!(women.accent, Accent::Purple);

    let uk = get_module("uk_pathways").unwrap();
    assert_eq!(uk.tag.as_deref(), Some("UK Specific"));
    assert_eq!(uk.accent, Accent::Indigo);

    assert!(get_module("assessment_process").unwrap().tag.is_none());
}

#[test]
fn body_trims_surrounding_blank_lines() {
    let module = get_module("high_achievers").unwrap();
    let body = module.body();
    assert!(body.starts_with("You can have a PhD"));
    assert!(body.ends_with("standard of living."));
}

#[test]
fn unknown_module_is_none() {
    assert!(get_module("adhd_in_men").is_none());
}
