use opc_rels::{
    IdRegistry, Relationship, RelationshipType, Relationships, RelsError, SourceId, TargetMode,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn different_sources_get_unique_ids() {
    let mut ids = IdRegistry::new();
    let rel_1 = Relationship::new(SourceId::new(), RelationshipType::Worksheet, "target").unwrap();
    let rel_2 = Relationship::new(SourceId::new(), RelationshipType::Comments, "foobar").unwrap();

    assert_ne!(rel_1.id_in(&mut ids), rel_2.id_in(&mut ids));
}

#[test]
fn same_source_type_and_target_share_an_id() {
    let mut ids = IdRegistry::new();
    let source = SourceId::new();
    let rel_1 = Relationship::new(source, RelationshipType::Worksheet, "target").unwrap();
    let rel_2 = Relationship::new(source, RelationshipType::Worksheet, "target").unwrap();

    assert_eq!(rel_1.id_in(&mut ids), rel_2.id_in(&mut ids));
}

#[test]
fn identical_type_and_target_from_different_sources_still_differ() {
    let mut ids = IdRegistry::new();
    let rel_1 = Relationship::new(SourceId::new(), RelationshipType::Worksheet, "target").unwrap();
    let rel_2 = Relationship::new(SourceId::new(), RelationshipType::Worksheet, "target").unwrap();

    assert_ne!(rel_1.id_in(&mut ids), rel_2.id_in(&mut ids));
}

#[test]
fn target_only_counts_toward_identity_when_external() {
    let mut ids = IdRegistry::new();
    let source = SourceId::new();

    // Internal mode: the target spelling is ignored entirely.
    let rel_1 = Relationship::new(source, RelationshipType::Worksheet, "target").unwrap();
    let rel_2 = Relationship::new(source, RelationshipType::Worksheet, "../target").unwrap();
    assert_eq!(rel_1.id_in(&mut ids), rel_2.id_in(&mut ids));

    // External mode: different targets must stay distinct.
    let rel_3 = Relationship::external(source, RelationshipType::Hyperlink, "target").unwrap();
    let rel_4 = Relationship::external(source, RelationshipType::Hyperlink, "../target").unwrap();
    assert_ne!(rel_3.id_in(&mut ids), rel_4.id_in(&mut ids));
}

#[test]
fn each_thread_gets_its_own_registry() {
    let spawn = || {
        std::thread::spawn(|| {
            let rel = Relationship::new(
                SourceId::new(),
                RelationshipType::Worksheet,
                "worksheets/sheet1.xml",
            )
            .unwrap();
            let id = rel.id().to_string();
            let scope = IdRegistry::with_current(|ids| ids.scope_id());
            (scope, id)
        })
    };

    let (scope_a, id_a) = spawn().join().unwrap();
    let (scope_b, id_b) = spawn().join().unwrap();

    assert_ne!(scope_a, scope_b);
    // Numbering is independent per thread: both fresh registries start at 1.
    assert_eq!(id_a, "rId1");
    assert_eq!(id_b, "rId1");
}

#[test]
fn unrecognized_type_uri_is_rejected() {
    let err = Relationship::from_raw(SourceId::new(), "not-a-real-type", "target", None)
        .unwrap_err();
    assert!(matches!(err, RelsError::InvalidType(_)));

    let rel = Relationship::from_raw(
        SourceId::new(),
        RelationshipType::Worksheet.uri(),
        "target",
        None,
    )
    .unwrap();
    assert_eq!(rel.rel_type(), RelationshipType::Worksheet);
}

#[test]
fn unrecognized_target_mode_is_rejected() {
    let err = Relationship::from_raw(
        SourceId::new(),
        RelationshipType::Worksheet.uri(),
        "target",
        Some("FISH"),
    )
    .unwrap_err();
    assert!(matches!(err, RelsError::InvalidTargetMode(_)));

    let rel = Relationship::from_raw(
        SourceId::new(),
        RelationshipType::Hyperlink.uri(),
        "target",
        Some("External"),
    )
    .unwrap();
    assert_eq!(rel.target_mode(), TargetMode::External);
}

#[test]
fn query_string_ampersand_is_escaped_exactly_once() {
    let target = "http://example.com?foo=1&bar=2";
    let mut rels = Relationships::new();
    rels.push(
        Relationship::external(SourceId::new(), RelationshipType::Hyperlink, target).unwrap(),
    );

    let xml = rels.to_xml_string().unwrap();
    assert_eq!(xml.matches("foo=1&amp;bar=2").count(), 1);
    assert!(!xml.contains("&amp;amp;"));

    // A standard XML parser must accept the output and see exactly one
    // Relationship whose Target unescapes back to the raw URI.
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let matching = doc
        .descendants()
        .filter(|n| n.has_tag_name((opc_rels::NS_RELATIONSHIPS, "Relationship")))
        .filter(|n| n.attribute("Target") == Some(target))
        .count();
    assert_eq!(matching, 1);
}

proptest! {
    // Escaping is total over printable input and applies exactly one pass:
    // whatever raw text goes in comes back out of a conforming parser.
    #[test]
    fn escaping_round_trips_through_a_parser(target in "[ -~]{1,64}") {
        let mut ids = IdRegistry::new();
        let rel = Relationship::external(SourceId::new(), RelationshipType::Hyperlink, target.as_str())
            .unwrap();
        rel.id_in(&mut ids);

        let xml = rel.to_xml_string().unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();
        prop_assert_eq!(doc.root_element().attribute("Target"), Some(target.as_str()));
    }
}
