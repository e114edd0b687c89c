//! Property-based tests for the alignment engine
//!
//! Checked over words from a small alphabet so that shared letters, repeats
//! and adjacent swaps come up often:
//!
//! 1. **Identity**: a word is at distance 0 from itself, with an empty script
//! 2. **Symmetry**: distance(a, b) == distance(b, a)
//! 3. **Bounds**: |len a - len b| <= distance <= max(len a, len b)
//! 4. **Script length**: the script has exactly `distance` tags
//! 5. **Length change**: Inserts minus Deletes equals len b - len a
//! 6. **Replay**: applying the script to a reproduces b
//!
//! Case and punctuation get no special treatment: replay is also checked over
//! a mixed-case alphabet with hyphens and apostrophes.

use distle::align::{build_table, edit_distance, get_transformation_list, replay};
use distle::core::{Transform, length_delta};
use proptest::prelude::*;

fn small_word() -> impl Strategy<Value = String> {
    "[abcd]{1,7}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn distance_to_self_is_zero(a in small_word()) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
        prop_assert!(get_transformation_list(&a, &a).is_empty());
    }

    #[test]
    fn distance_is_symmetric(a in small_word(), b in small_word()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn distance_within_length_bounds(a in small_word(), b in small_word()) {
        let distance = edit_distance(&a, &b);
        prop_assert!(distance >= a.len().abs_diff(b.len()));
        prop_assert!(distance <= a.len().max(b.len()));
    }

    #[test]
    fn table_agrees_with_shortcut(a in small_word(), b in small_word()) {
        prop_assert_eq!(build_table(&a, &b).distance(), edit_distance(&a, &b));
    }

    #[test]
    fn script_length_equals_distance(a in small_word(), b in small_word()) {
        prop_assert_eq!(get_transformation_list(&a, &b).len(), edit_distance(&a, &b));
    }

    #[test]
    fn script_length_change_matches_words(a in small_word(), b in small_word()) {
        let script = get_transformation_list(&a, &b);
        prop_assert_eq!(length_delta(&script), b.len() as isize - a.len() as isize);
    }

    #[test]
    fn replay_reproduces_target(a in small_word(), b in small_word()) {
        let script = get_transformation_list(&a, &b);
        prop_assert_eq!(replay(&a, &b, &script), Some(b.clone()));
    }

    #[test]
    fn replay_reproduces_mixed_case_target(a in "[aAbB'-]{1,7}", b in "[aAbB'-]{1,7}") {
        let script = get_transformation_list(&a, &b);
        prop_assert_eq!(script.len(), edit_distance(&a, &b));
        prop_assert_eq!(replay(&a, &b, &script), Some(b.clone()));
    }

    #[test]
    fn single_swap_is_one_transposition(a in "[a-z]{2,8}", at in 0usize..7) {
        let chars: Vec<char> = a.chars().collect();
        let i = at % (chars.len() - 1);
        prop_assume!(chars[i] != chars[i + 1]);

        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        let b: String = swapped.into_iter().collect();

        prop_assert_eq!(get_transformation_list(&a, &b), vec![Transform::Transpose]);
    }
}

#[test]
fn reference_scripts() {
    use Transform::{Delete, Insert, Replace, Transpose};

    assert_eq!(get_transformation_list("cat", "cats"), vec![Insert]);
    assert_eq!(get_transformation_list("table", "able"), vec![Delete]);
    assert_eq!(get_transformation_list("form", "from"), vec![Transpose]);
    assert_eq!(get_transformation_list("kitten", "sitting"), vec![Insert, Replace, Replace]);
    assert_eq!(get_transformation_list("sitting", "kitten"), vec![Delete, Replace, Replace]);
    assert_eq!(
        get_transformation_list("abcdef", "badcfe"),
        vec![Transpose, Transpose, Transpose]
    );
    assert_eq!(edit_distance("sunday", "saturday"), 3);
}

#[test]
fn case_and_punctuation_are_characters() {
    use Transform::{Delete, Insert, Replace, Transpose};

    assert_eq!(edit_distance("Cat", "cat"), 1);
    assert_eq!(get_transformation_list("Cat", "cat"), vec![Replace]);
    assert_eq!(edit_distance("CAT", "cat"), 3);
    assert_eq!(get_transformation_list("co-op", "coop"), vec![Delete]);
    assert_eq!(get_transformation_list("dont", "don't"), vec![Insert]);
    assert_eq!(get_transformation_list("e-", "-e"), vec![Transpose]);
}
