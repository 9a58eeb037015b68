use mindmate_instruments::instruments::{gad7::gad7, phq9::phq9};
use mindmate_instruments::scoring::{record_response, score};
use mindmate_instruments::support::{
    all_professionals, all_resources, professionals, referrals_for, resources, specialty_for,
    suggests_professional_support,
};
use mindmate_instruments::{Questionnaire, ResourceKind, ResponseSet, ScoreResult};

fn scored(questionnaire: &Questionnaire, answers: &[i64]) -> ScoreResult {
    let mut responses = ResponseSet::new();
    for (item, value) in questionnaire.items.iter().zip(answers) {
        record_response(&mut responses, questionnaire, item.id, *value).unwrap();
    }
    score(&responses, questionnaire).unwrap()
}

#[test]
fn no_filter_returns_every_resource() {
    assert_eq!(resources(None).len(), all_resources().len());
    assert_eq!(all_resources().len(), 7);
}

#[test]
fn filter_by_kind() {
    let books = resources(Some(ResourceKind::Book));
    let videos = resources(Some(ResourceKind::Video));
    assert_eq!(books.len(), 3);
    assert_eq!(videos.len(), 4);
    assert!(books.iter().all(|r| r.kind == ResourceKind::Book));
    assert!(videos.iter().all(|r| r.kind == ResourceKind::Video));
    assert_eq!(books[0].title, "Feeling Good: The New Mood Therapy");
}

#[test]
fn resource_ids_are_unique() {
    let mut ids: Vec<_> = all_resources().iter().map(|r| r.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), all_resources().len());
}

#[test]
fn professionals_filter_by_specialty_ignoring_case() {
    let names: Vec<_> = professionals(Some("anxiety"))
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["Dr. Sarah Johnson", "Dr. James Wilson"]);

    assert_eq!(professionals(Some(" OCD ")).len(), 1);
    assert!(professionals(Some("Insomnia")).is_empty());
    assert_eq!(professionals(None).len(), all_professionals().len());
}

#[test]
fn shipped_questionnaires_map_to_specialties() {
    assert_eq!(specialty_for(&phq9().id), Some("Depression"));
    assert_eq!(specialty_for(&gad7().id), Some("Anxiety"));
    assert_eq!(specialty_for("custom"), None);
}

#[test]
fn referrals_start_at_moderate() {
    let mild = scored(phq9(), &[1, 1, 1, 1, 1, 1, 1, 1, 1]);
    assert_eq!(mild.band.label, "Mild depression");
    assert!(!suggests_professional_support(&mild));
    assert!(referrals_for(&mild).is_empty());

    let moderate = scored(gad7(), &[2, 2, 2, 2, 1, 1, 0]);
    assert_eq!(moderate.band.label, "Moderate anxiety");
    let referrals = referrals_for(&moderate);
    assert_eq!(referrals.len(), 2);
    assert!(referrals.iter().all(|p| p.has_specialty("Anxiety")));
}

#[test]
fn threshold_matches_moderate_band_start() {
    for questionnaire in [phq9(), gad7()] {
        let moderate = questionnaire
            .bands
            .iter()
            .find(|b| b.label.starts_with("Moderate"))
            .unwrap();
        assert_eq!(
            moderate.min_score,
            mindmate_instruments::support::PROFESSIONAL_SUPPORT_THRESHOLD
        );
    }
}
