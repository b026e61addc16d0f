//! Property-based tests for matching, merging and tag bookkeeping.

use proptest::prelude::*;
use tagcomplete::config::{ConfigStore, PartialConfiguration};
use tagcomplete::markup::{contains_markup, strip_markup};
use tagcomplete::prelude::*;

fn authority() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z]{0,6}", 0..12)
}

fn ascii_prefix_of(candidate: &str, query: &str) -> bool {
    candidate.len() >= query.len() && candidate[..query.len()].eq_ignore_ascii_case(query)
}

proptest! {
    #[test]
    fn find_returns_exactly_the_case_insensitive_prefix_matches(
        authority in authority(),
        query in "[a-zA-Z]{1,3}",
    ) {
        let found = SuggestionMatcher::new().find(&query, &authority);
        let expected: Vec<String> = authority
            .iter()
            .filter(|candidate| ascii_prefix_of(candidate, &query))
            .cloned()
            .collect();

        prop_assert_eq!(found, expected);
    }

    #[test]
    fn find_never_invents_candidates(
        authority in authority(),
        query in "[a-z]{1,2}",
    ) {
        let found = SuggestionMatcher::new().find(&query, &authority);
        prop_assert!(found.len() <= authority.len());
        for candidate in &found {
            prop_assert!(authority.contains(candidate));
        }
    }

    #[test]
    fn merging_the_same_partial_twice_is_idempotent(
        authority in prop::option::of(authority()),
        threshold in prop::option::of(-5i32..10),
        extra in prop::collection::btree_map("[a-z]{1,4}", 0i64..100, 0..4),
    ) {
        let mut partial = PartialConfiguration::new();
        if let Some(authority) = authority {
            partial = partial.with_authority(authority);
        }
        if let Some(threshold) = threshold {
            partial = partial.with_input_threshold(threshold);
        }
        for (key, value) in extra {
            partial = partial.with_extra(key, value);
        }

        let mut once = ConfigStore::new();
        once.set(partial.clone());
        let mut twice = ConfigStore::new();
        twice.set(partial.clone());
        twice.set(partial);

        prop_assert_eq!(once.get(), twice.get());
    }

    #[test]
    fn stripping_is_idempotent(input in "[a-z<>/ ]{0,24}") {
        let stripped = strip_markup(&input);
        prop_assert!(!contains_markup(&stripped));
        let again = strip_markup(&stripped);
        prop_assert_eq!(stripped.as_ref(), again.as_ref());
    }

    #[test]
    fn panel_is_hidden_whenever_query_is_empty_or_short(
        raw in "(<[a-z]{1,3}>)?[a-z]{0,4}(</[a-z]{1,3}>)?",
        threshold in 0i32..5,
    ) {
        let mut controller = AutocompleteController::with_registration(
            HeadlessAdapter::new(),
            &StyleRegistration::new(),
        )
        .with_config(
            PartialConfiguration::new()
                .with_authority(["alpha", "beta", "gamma"])
                .with_input_threshold(threshold),
        );

        controller.on_input(&raw);
        let view = controller.view();
        let len = view.query.chars().count();

        prop_assert!(!view.query.contains('<'));
        if view.query.is_empty() || len < threshold as usize {
            prop_assert!(!view.visible);
            prop_assert!(view.candidates.is_empty());
        } else {
            prop_assert!(view.visible);
        }
        prop_assert_eq!(controller.adapter().is_panel_visible(), view.visible);
    }

    #[test]
    fn tag_set_tracks_a_vec_model(
        ops in prop::collection::vec(
            prop_oneof![
                "[a-z]{0,3}".prop_map(Ok::<String, usize>),
                (0usize..6).prop_map(Err::<String, usize>),
            ],
            0..30,
        ),
    ) {
        let mut tags = TagSet::new();
        let mut model: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Ok(text) => {
                    tags.add(text.clone());
                    model.push(text);
                }
                Err(index) => {
                    let result = tags.remove_at(index);
                    if index < model.len() {
                        prop_assert_eq!(result, Ok(model.remove(index)));
                    } else {
                        prop_assert_eq!(
                            result,
                            Err(TagError::OutOfRange { index, len: model.len() })
                        );
                    }
                }
            }
            prop_assert_eq!(tags.to_list(), model.clone());
        }
    }
}
