use rangecard_core::{field_registry, NormalizedPoint, Profile, ProfileBook, PROFILE_BOOK_VERSION};

fn profile_with(entries: &[(&str, &str)]) -> Profile {
    let mut profile = Profile::default();
    for (id, value) in entries {
        profile.fields.insert(id.to_string(), value.to_string());
    }
    profile
}

#[test]
fn list_is_reverse_lexicographic() {
    let mut book = ProfileBook::default();
    assert!(book.names().is_empty());

    book.upsert("Alpha", Profile::default());
    book.upsert("Bravo", Profile::default());
    assert_eq!(book.names(), vec!["Bravo".to_string(), "Alpha".to_string()]);

    book.upsert("Charlie", Profile::default());
    assert_eq!(
        book.names(),
        vec![
            "Charlie".to_string(),
            "Bravo".to_string(),
            "Alpha".to_string()
        ]
    );
}

#[test]
fn save_then_load_restores_captured_values() {
    let mut book = ProfileBook::default();
    book.upsert(
        "Alpha",
        profile_with(&[("caliber", "6.5 CM"), ("velocity", "2700")]),
    );

    // A later overwrite under another name must not disturb "Alpha".
    book.upsert(
        "Bravo",
        profile_with(&[("caliber", "308 Win"), ("velocity", "2600")]),
    );

    let loaded = book.get("Alpha").expect("Alpha exists");
    assert_eq!(loaded.field("caliber"), "6.5 CM");
    assert_eq!(loaded.field("velocity"), "2700");
    assert_eq!(loaded.field("powder"), "");
}

#[test]
fn same_name_overwrites_silently() {
    let mut book = ProfileBook::default();
    book.upsert("Alpha", profile_with(&[("zero", "100")]));
    book.upsert("Alpha", profile_with(&[("zero", "200")]));
    assert_eq!(book.len(), 1);
    assert_eq!(book.get("Alpha").expect("Alpha exists").field("zero"), "200");
}

#[test]
fn delete_removes_from_listing() {
    let mut book = ProfileBook::default();
    book.upsert("Alpha", Profile::default());
    book.upsert("Bravo", Profile::default());

    assert!(book.remove("Alpha"));
    assert_eq!(book.names(), vec!["Bravo".to_string()]);

    // Deleting an absent name is a no-op.
    assert!(!book.remove("Alpha"));
    assert_eq!(book.len(), 1);
}

#[test]
fn round_trips_through_json_with_version() {
    let mut book = ProfileBook::default();
    let mut profile = profile_with(&[("caliber", "6.5 CM"), ("date", "2025-11-02")]);
    profile.snapshot = Some("data:image/png;base64,AAAA".to_string());
    profile.hold_shots = vec![NormalizedPoint { nx: 0.25, ny: 0.75 }];
    profile.shot_shots = vec![
        NormalizedPoint { nx: 0.5, ny: 0.5 },
        NormalizedPoint { nx: 0.9, ny: 0.1 },
    ];
    book.upsert("Alpha", profile.clone());

    let raw = serde_json::to_string(&book).expect("book serializes");
    let parsed: ProfileBook = serde_json::from_str(&raw).expect("book parses");
    assert_eq!(parsed.version, PROFILE_BOOK_VERSION);
    assert_eq!(parsed.get("Alpha"), Some(&profile));
}

#[test]
fn older_records_without_shot_plots_still_parse() {
    let raw = r#"{
        "version": 1,
        "profiles": {
            "Legacy": { "fields": { "caliber": "308 Win" } }
        }
    }"#;
    let parsed: ProfileBook = serde_json::from_str(raw).expect("legacy book parses");
    let legacy = parsed.get("Legacy").expect("Legacy exists");
    assert_eq!(legacy.field("caliber"), "308 Win");
    assert!(legacy.snapshot.is_none());
    assert!(legacy.hold_shots.is_empty());
    assert!(legacy.shot_shots.is_empty());
}

#[test]
fn registry_covers_static_and_generated_fields() {
    let registry = field_registry();
    assert_eq!(registry.len(), 32 + 30);
    assert!(registry.iter().any(|id| id == "header-notes"));
    assert!(registry.iter().any(|id| id == "compass-range-3"));
    assert!(registry.iter().any(|id| id == "clicks-100"));
    assert!(registry.iter().any(|id| id == "udlr-600"));
    assert!(registry.iter().any(|id| id == "dist-1000"));

    // Ids are unique: each maps to at most one canonical input.
    let mut sorted = registry.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), registry.len());
}
