use proptest::prelude::*;
use wsstego::pipeline::{classify, extract_ascii, map_bits, StackSimulation};
use wsstego::{analyze, BitAssignment};

fn whitespace_text() -> impl Strategy<Value = String> {
    "[ \t\n\rab]{0,128}"
}

proptest! {
    #[test]
    fn prop_counts_sum_to_character_count(text in ".{0,256}") {
        prop_assert_eq!(classify(&text).total(), text.chars().count());
    }

    #[test]
    fn prop_assignments_are_complements(text in whitespace_text()) {
        let zero: Vec<char> = map_bits(&text, BitAssignment::SpaceZero).chars().collect();
        let one: Vec<char> = map_bits(&text, BitAssignment::SpaceOne).chars().collect();
        let source: Vec<char> = text.chars().filter(|&c| c != '\n').collect();

        prop_assert_eq!(zero.len(), source.len());
        prop_assert_eq!(one.len(), source.len());
        for ((&src, &a), &b) in source.iter().zip(&zero).zip(&one) {
            if src == ' ' || src == '\t' {
                prop_assert!(a == '0' || a == '1');
                prop_assert_ne!(a, b);
            } else {
                prop_assert_eq!(a, src);
                prop_assert_eq!(b, src);
            }
        }
    }

    #[test]
    fn prop_trailing_partial_group_ignored(
        groups in prop::collection::vec("[ \t]{7}", 0..12),
        tail in "[ \t]{1,6}",
    ) {
        let body = groups.concat();
        let padded = format!("{}{}", body, tail);
        for assignment in BitAssignment::ALL {
            prop_assert_eq!(
                extract_ascii(&map_bits(&body, assignment)),
                extract_ascii(&map_bits(&padded, assignment))
            );
        }
    }

    #[test]
    fn prop_analysis_is_idempotent(text in whitespace_text()) {
        prop_assert_eq!(analyze(text.len(), &text), analyze(text.len(), &text));
    }

    #[test]
    fn prop_every_push_command_is_observed(text in "[ \t\nx]{0,128}") {
        let sim = StackSimulation::run(&text);
        let expected = text.split('\n').filter(|line| line.starts_with("   ")).count();
        prop_assert_eq!(sim.push_commands, expected);
        prop_assert_eq!(sim.observations.len(), expected);
        prop_assert!(sim.stack.len() <= expected);
    }
}
