use crate::{Catalog, CatalogError, ExampleId, FrameworkId, SectionBody, SectionId};

#[test]
fn builtin_catalog_loads_and_validates() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    assert_eq!(catalog.sections().len(), SectionId::ALL.len());
}

#[test]
fn section_order_matches_navigation_order() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let order: Vec<SectionId> = catalog.sections().iter().map(|s| s.id).collect();
    assert_eq!(order, SectionId::ALL.to_vec());
}

#[test]
fn every_pattern_section_has_three_examples_with_both_frameworks() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    for id in [
        SectionId::Sequential,
        SectionId::Concurrent,
        SectionId::Groupchat,
        SectionId::Handoff,
        SectionId::Magentic,
    ] {
        let section = catalog.section(id);
        let SectionBody::Patterns { examples, .. } = &section.body else {
            panic!("section '{id}' should be example-based");
        };
        assert_eq!(examples.len(), 3, "section '{id}'");
        for example in examples {
            let frameworks: Vec<FrameworkId> =
                example.implementations.iter().map(|i| i.id).collect();
            assert_eq!(
                frameworks,
                vec![FrameworkId::SemanticKernel, FrameworkId::CrewAi],
                "example '{}'",
                example.id
            );
            assert!(!example.steps.is_empty(), "example '{}'", example.id);
        }
    }
}

#[test]
fn intro_is_overview_and_advanced_has_topics() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let SectionBody::Overview(overview) = &catalog.section(SectionId::Intro).body else {
        panic!("intro should be an overview section");
    };
    assert_eq!(overview.cards.len(), 5);

    let SectionBody::Topics { topics, .. } = &catalog.section(SectionId::Advanced).body else {
        panic!("advanced should be a topic section");
    };
    assert_eq!(topics.len(), 3);
    assert!(topics.iter().all(|topic| !topic.code.trim().is_empty()));
}

#[test]
fn lookups_resolve_for_valid_ids() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let example = catalog
        .example(SectionId::Sequential, &ExampleId::new("seq-ex1"))
        .expect("seq-ex1");
    assert_eq!(example.title, "Example 1: Marketing Pipeline");

    let implementation = catalog
        .implementation(
            SectionId::Concurrent,
            &ExampleId::new("conc-ex2"),
            FrameworkId::CrewAi,
        )
        .expect("conc-ex2 crew");
    assert_eq!(implementation.name, "CrewAI");
    assert!(implementation.code.contains("crewai"));

    catalog.topic(SectionId::Advanced, 2).expect("third topic");
}

#[test]
fn lookups_fail_explicitly_for_invalid_ids() {
    let catalog = Catalog::builtin().expect("builtin catalog");

    let err = catalog.section_by_slug("bogus").unwrap_err();
    assert!(matches!(err, CatalogError::SectionNotFound { .. }));

    let err = catalog
        .example(SectionId::Sequential, &ExampleId::new("seq-ex9"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::ExampleNotFound { .. }));

    let err = catalog.topic(SectionId::Advanced, 99).unwrap_err();
    assert!(matches!(err, CatalogError::TopicNotFound { index: 99, .. }));

    // Topic lookups against example-based sections are also not-found.
    let err = catalog.topic(SectionId::Sequential, 0).unwrap_err();
    assert!(matches!(err, CatalogError::TopicNotFound { .. }));
}

#[test]
fn default_selections_follow_declared_order() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let section = catalog.section(SectionId::Handoff);
    let example = section.default_example().expect("default example");
    assert_eq!(example.id.as_str(), "hand-ex1");
    assert_eq!(
        example.default_implementation().id,
        FrameworkId::SemanticKernel
    );
}

#[test]
fn slug_round_trips() {
    for id in SectionId::ALL {
        assert_eq!(SectionId::from_slug(id.as_str()), Some(id));
    }
    assert_eq!(SectionId::from_slug("groupchat"), Some(SectionId::Groupchat));
    assert_eq!(SectionId::from_slug("group_chat"), None);
}

#[test]
fn rejects_catalog_missing_a_section() {
    let raw = r#"
[[sections]]
id = "intro"
title = "Intro"
description = "d"
[sections.overview]
lead = "lead"
[sections.overview.analogy]
title = "a"
text = "t"
"#;
    let err = Catalog::from_toml(raw).unwrap_err();
    assert!(matches!(err, CatalogError::MissingSection { .. }));
}

#[test]
fn rejects_example_section_without_analogy() {
    let raw = r#"
[[sections]]
id = "sequential"
title = "Sequential"
description = "d"
[[sections.examples]]
id = "seq-ex1"
title = "Example"
intro = "Goal"
[[sections.examples.steps]]
title = "s"
text = "t"
[[sections.examples.implementations]]
id = "sk"
name = "Semantic Kernel"
install = "uv add semantic-kernel"
code = "print('hi')"
"#;
    let err = Catalog::from_toml(raw).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidSection {
            section: SectionId::Sequential,
            ..
        }
    ));
}

#[test]
fn rejects_duplicate_example_ids() {
    let mut raw = String::new();
    for id in SectionId::ALL {
        match id {
            SectionId::Sequential => raw.push_str(
                r#"
[[sections]]
id = "sequential"
title = "Sequential"
description = "d"
[sections.analogy]
title = "a"
text = "t"
[[sections.examples]]
id = "dup"
title = "One"
intro = "Goal"
[[sections.examples.implementations]]
id = "sk"
name = "SK"
install = "i"
code = "c"
[[sections.examples]]
id = "dup"
title = "Two"
intro = "Goal"
[[sections.examples.implementations]]
id = "sk"
name = "SK"
install = "i"
code = "c"
"#,
            ),
            SectionId::Advanced => raw.push_str(&format!(
                r#"
[[sections]]
id = "{id}"
title = "T"
description = "d"
lead = "lead"
[[sections.topics]]
title = "t"
blurb = "b"
code = "c"
"#
            )),
            other => raw.push_str(&format!(
                r#"
[[sections]]
id = "{other}"
title = "T"
description = "d"
[sections.overview]
lead = "lead"
[sections.overview.analogy]
title = "a"
text = "t"
"#
            )),
        }
    }
    let err = Catalog::from_toml(&raw).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateExample { .. }));
}
