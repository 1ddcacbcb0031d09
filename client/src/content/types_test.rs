use super::*;

fn project_with(technologies: &[&str]) -> Project {
    Project {
        id: 1,
        title: "T".into(),
        category: ProjectCategory::Frontend,
        summary: String::new(),
        details: String::new(),
        technologies: technologies.iter().map(|t| (*t).to_owned()).collect(),
        live_url: String::new(),
        source_url: String::new(),
        featured: false,
    }
}

#[test]
fn section_anchor_and_href_agree() {
    for section in [SectionId::Home, SectionId::About, SectionId::Projects, SectionId::Skills, SectionId::Contact] {
        assert_eq!(section.href(), format!("#{}", section.anchor()));
    }
}

#[test]
fn section_id_deserializes_lowercase() {
    let section: SectionId = serde_json::from_str("\"projects\"").unwrap();
    assert_eq!(section, SectionId::Projects);
    assert!(serde_json::from_str::<SectionId>("\"Projects\"").is_err());
}

#[test]
fn category_keys_match_serde_names() {
    for category in ProjectCategory::ALL {
        let json = serde_json::to_string(category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.key()));
    }
    for category in SkillCategory::ALL {
        let json = serde_json::to_string(category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.key()));
    }
}

#[test]
fn fullstack_label_is_spaced() {
    assert_eq!(ProjectCategory::Fullstack.label(), "Full Stack");
}

#[test]
fn preview_technologies_caps_at_three() {
    let project = project_with(&["React", "Node.js", "MongoDB", "Express", "Stripe"]);
    let (shown, hidden) = project.preview_technologies();
    assert_eq!(shown, ["React", "Node.js", "MongoDB"]);
    assert_eq!(hidden, 2);
}

#[test]
fn preview_technologies_short_list_has_no_overflow() {
    let project = project_with(&["Rust"]);
    let (shown, hidden) = project.preview_technologies();
    assert_eq!(shown, ["Rust"]);
    assert_eq!(hidden, 0);
}

#[test]
fn contact_entry_new_tab_only_for_http_links() {
    let mut entry = ContactEntry {
        title: "Location".into(),
        value: "Somewhere".into(),
        icon: "fas fa-map-marker-alt".into(),
        color: "#4285f4".into(),
        link: Some("https://maps.google.com".into()),
    };
    assert!(entry.opens_new_tab());

    entry.link = Some("mailto:me@example.com".into());
    assert!(!entry.opens_new_tab());

    entry.link = None;
    assert!(!entry.opens_new_tab());
}

#[test]
fn profile_mailto_prefixes_scheme() {
    let profile = Profile { email: "me@example.com".into(), ..Profile::default() };
    assert_eq!(profile.mailto(), "mailto:me@example.com");
}
