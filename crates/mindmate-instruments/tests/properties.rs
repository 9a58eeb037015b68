use mindmate_instruments::all_questionnaires;
use mindmate_instruments::scoring::{is_complete, record_response, score};
use mindmate_instruments::ResponseSet;
use proptest::prelude::*;

proptest! {
    /// Property: any complete set of in-range answers scores between 0 and
    /// 3N and lands in a band that contains the total.
    #[test]
    fn prop_total_within_bounds(answers in prop::collection::vec(0i64..=3, 9)) {
        for questionnaire in all_questionnaires() {
            let mut responses = ResponseSet::new();
            for (item, value) in questionnaire.items.iter().zip(&answers) {
                record_response(&mut responses, questionnaire, item.id, *value).unwrap();
            }
            prop_assert!(is_complete(&responses, questionnaire));

            let result = score(&responses, questionnaire).unwrap();
            let expected: i64 = answers.iter().take(questionnaire.items.len()).sum();
            prop_assert_eq!(i64::from(result.total), expected);
            prop_assert!(result.total <= questionnaire.max_score());
            prop_assert!(result.band.contains(result.total));
        }
    }

    /// Property: answers outside 0-3 never change the response set.
    #[test]
    fn prop_out_of_range_rejected(value in prop_oneof![i64::MIN..0, 4..i64::MAX]) {
        for questionnaire in all_questionnaires() {
            let mut responses = ResponseSet::new();
            prop_assert!(record_response(&mut responses, questionnaire, 1, value).is_err());
            prop_assert!(responses.is_empty());
        }
    }

    /// Property: only the last answer recorded for an item counts.
    #[test]
    fn prop_last_write_wins(writes in prop::collection::vec((1u32..=7, 0i64..=3), 1..40)) {
        for questionnaire in all_questionnaires() {
            let mut responses = ResponseSet::new();
            for (item_id, value) in &writes {
                record_response(&mut responses, questionnaire, *item_id, *value).unwrap();
            }
            for item_id in 1..=7u32 {
                let last = writes.iter().rev().find(|(id, _)| *id == item_id).map(|(_, v)| *v);
                prop_assert_eq!(responses.get(item_id).map(|v| i64::from(v.get())), last);
            }
        }
    }
}
