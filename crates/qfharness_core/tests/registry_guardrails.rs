use std::collections::HashMap;

use qfharness_core::keys;
use qfharness_core::languages::{self, LanguageId};
use qfharness_core::markers::{self, MarkerId};
use qfharness_core::status::{self, RunStatus};

#[test]
fn markers_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, MarkerId> = HashMap::new();

    for info in markers::MARKERS {
        assert_eq!(
            markers::from_str(info.canonical),
            Some(info.id),
            "marker canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(markers::as_str(info.id), info.canonical);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate marker spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn marker_tokens_are_braced() {
    assert_eq!(markers::token(MarkerId::Imports), "{{IMPORTS}}");
    assert_eq!(markers::token(MarkerId::Func), "{{FUNC}}");
    assert_eq!(markers::token(MarkerId::Tests), "{{TESTS}}");
}

#[test]
fn every_language_has_a_row_and_resolves() {
    for id in [
        LanguageId::Java,
        LanguageId::CSharp,
        LanguageId::JavaScript,
        LanguageId::Python,
        LanguageId::Cpp,
    ] {
        let info = languages::info_for(id);
        assert_eq!(languages::from_str(info.item.canonical), Some(id));
        for &alias in info.item.aliases {
            assert_eq!(languages::from_str(alias), Some(id), "alias not resolvable: {alias}");
        }
        assert!(!info.default_imports.is_empty(), "{id:?} has no default imports");
        assert!(info.marker_prefix.ends_with(' '));
    }
}

#[test]
fn language_lookup_is_case_insensitive() {
    assert_eq!(languages::from_str("Java"), Some(LanguageId::Java));
    assert_eq!(languages::from_str(" PY "), Some(LanguageId::Python));
    assert_eq!(languages::from_str("rust"), None);
    assert_eq!(languages::from_str("C++"), Some(LanguageId::Cpp));
    assert_eq!(languages::from_str("c"), None);
}

#[test]
fn statuses_round_trip_through_names() {
    for info in status::STATUSES {
        assert_eq!(status::from_str(info.canonical), Some(info.id));
        assert_eq!(status::as_str(info.id), info.canonical);
    }
    assert!(RunStatus::NoError.is_success());
    assert!(!RunStatus::Timeout.is_success());
    assert_eq!(RunStatus::default(), RunStatus::NoError);
}

#[test]
fn fixed_and_count_keys_do_not_overlap() {
    for key in keys::FIXED_KEYS {
        assert!(!keys::COUNT_KEYS.contains(key), "{key} is both a fixed and a count key");
    }
    assert_eq!(keys::FIXED_KEYS.len(), 3);
}
