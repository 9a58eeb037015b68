use mindmate_instruments::instruments::{gad7::gad7, phq9::phq9};
use mindmate_instruments::scoring::{is_complete, missing_items, record_response, score};
use mindmate_instruments::{Questionnaire, ResponseSet, ScoringError};

fn answer_all(questionnaire: &Questionnaire, value: i64) -> ResponseSet {
    let mut responses = ResponseSet::new();
    for item in &questionnaire.items {
        record_response(&mut responses, questionnaire, item.id, value).unwrap();
    }
    responses
}

#[test]
fn phq9_all_zero_is_no_depression() {
    let result = score(&answer_all(phq9(), 0), phq9()).unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.band.label, "No depression");
    assert_eq!((result.band.min_score, result.band.max_score), (0, 4));
}

#[test]
fn phq9_all_three_is_severe_depression() {
    let result = score(&answer_all(phq9(), 3), phq9()).unwrap();
    assert_eq!(result.total, 27);
    assert_eq!(result.max_score, 27);
    assert_eq!(result.band.label, "Severe depression");
    assert_eq!((result.band.min_score, result.band.max_score), (20, 27));
}

#[test]
fn phq9_total_of_ten_is_moderate_depression() {
    let questionnaire = phq9();
    let mut responses = answer_all(questionnaire, 1);
    record_response(&mut responses, questionnaire, 9, 2).unwrap();

    let result = score(&responses, questionnaire).unwrap();
    assert_eq!(result.total, 10);
    assert_eq!(result.band.label, "Moderate depression");
    assert_eq!((result.band.min_score, result.band.max_score), (10, 14));
}

#[test]
fn gad7_extremes() {
    let low = score(&answer_all(gad7(), 0), gad7()).unwrap();
    assert_eq!(low.total, 0);
    assert_eq!(low.band.label, "Minimal anxiety");

    let high = score(&answer_all(gad7(), 3), gad7()).unwrap();
    assert_eq!(high.total, 21);
    assert_eq!(high.band.label, "Severe anxiety");
    assert_eq!((high.band.min_score, high.band.max_score), (15, 21));
}

#[test]
fn one_unanswered_item_is_incomplete() {
    for questionnaire in [phq9(), gad7()] {
        let mut responses = ResponseSet::new();
        let last = questionnaire.items.last().unwrap().id;
        for item in questionnaire.items.iter().filter(|i| i.id != last) {
            record_response(&mut responses, questionnaire, item.id, 2).unwrap();
        }

        assert!(!is_complete(&responses, questionnaire));
        let err = score(&responses, questionnaire).unwrap_err();
        assert_eq!(
            err,
            ScoringError::IncompleteAssessment {
                questionnaire_id: questionnaire.id.clone(),
                missing: vec![last],
            }
        );
        assert!(err.is_user_error());
        assert!(!err.is_defect());
    }
}

#[test]
fn later_answer_overwrites_earlier_one() {
    let questionnaire = gad7();
    let mut responses = ResponseSet::new();
    record_response(&mut responses, questionnaire, 3, 1).unwrap();
    record_response(&mut responses, questionnaire, 4, 2).unwrap();
    record_response(&mut responses, questionnaire, 3, 3).unwrap();

    assert_eq!(responses.len(), 2);
    assert_eq!(responses.get(3).map(|v| v.get()), Some(3));
    assert_eq!(responses.get(4).map(|v| v.get()), Some(2));
}

#[test]
fn out_of_range_value_is_rejected_without_writing() {
    let questionnaire = phq9();
    let mut responses = ResponseSet::new();
    record_response(&mut responses, questionnaire, 1, 2).unwrap();

    for value in [-1, 4, 100] {
        let err = record_response(&mut responses, questionnaire, 1, value).unwrap_err();
        assert_eq!(err, ScoringError::InvalidResponseValue { item_id: 1, value });
    }
    assert_eq!(responses.get(1).map(|v| v.get()), Some(2));
    assert_eq!(responses.len(), 1);
}

#[test]
fn unknown_item_is_rejected_without_writing() {
    let questionnaire = gad7();
    let mut responses = ResponseSet::new();

    let err = record_response(&mut responses, questionnaire, 8, 1).unwrap_err();
    assert_eq!(
        err,
        ScoringError::UnknownItem {
            questionnaire_id: "anxiety-screen".to_string(),
            item_id: 8,
        }
    );
    // Unknown item wins over a bad value.
    let err = record_response(&mut responses, questionnaire, 0, 9).unwrap_err();
    assert!(matches!(err, ScoringError::UnknownItem { item_id: 0, .. }));
    assert!(responses.is_empty());
}

#[test]
fn is_complete_ignores_values() {
    let questionnaire = gad7();
    let mut responses = ResponseSet::new();
    for item in &questionnaire.items {
        assert!(!is_complete(&responses, questionnaire));
        record_response(&mut responses, questionnaire, item.id, 0).unwrap();
    }
    assert!(is_complete(&responses, questionnaire));
    assert!(missing_items(&responses, questionnaire).is_empty());
}

#[test]
fn missing_items_follow_questionnaire_order() {
    let questionnaire = phq9();
    let mut responses = ResponseSet::new();
    for id in [2, 4, 6, 8] {
        record_response(&mut responses, questionnaire, id, 1).unwrap();
    }
    assert_eq!(missing_items(&responses, questionnaire), vec![1, 3, 5, 7, 9]);
}

#[test]
fn totals_stay_within_zero_and_max() {
    // Every item gets the same value, then each item in turn is raised by one
    // step: covers every total reachable along those paths.
    for questionnaire in [phq9(), gad7()] {
        for base in 0..=3 {
            let mut responses = answer_all(questionnaire, base);
            let result = score(&responses, questionnaire).unwrap();
            assert!(result.total <= questionnaire.max_score());

            for item in &questionnaire.items {
                record_response(&mut responses, questionnaire, item.id, (base + 1).min(3)).unwrap();
                let result = score(&responses, questionnaire).unwrap();
                assert!(result.total <= questionnaire.max_score());
                assert!(result.band.contains(result.total));
            }
        }
    }
}

#[test]
fn answer_order_does_not_change_total() {
    let questionnaire = phq9();
    let answers = [(1, 3), (2, 0), (3, 2), (4, 1), (5, 3), (6, 0), (7, 1), (8, 2), (9, 1)];

    let mut forward = ResponseSet::new();
    for (id, value) in answers {
        record_response(&mut forward, questionnaire, id, value).unwrap();
    }
    let mut backward = ResponseSet::new();
    for (id, value) in answers.iter().rev() {
        record_response(&mut backward, questionnaire, *id, *value).unwrap();
    }

    let a = score(&forward, questionnaire).unwrap();
    let b = score(&backward, questionnaire).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total, 13);
}

#[test]
fn clear_empties_responses() {
    let questionnaire = gad7();
    let mut responses = answer_all(questionnaire, 2);
    responses.clear();
    assert!(responses.is_empty());
    assert!(!is_complete(&responses, questionnaire));
}

#[test]
fn result_display_reads_naturally() {
    let result = score(&answer_all(gad7(), 1), gad7()).unwrap();
    assert_eq!(result.to_string(), "7/21: Mild anxiety");
}
