//! Self-help resources and the professional directory offered next to a
//! screening result. Static data, filtered on request.

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::instruments::{gad7, phq9};
use crate::scoring::ScoreResult;

/// Totals at or above this fall in a moderate-or-worse band on both shipped
/// questionnaires, where the guidance recommends talking to a professional.
pub const PROFESSIONAL_SUPPORT_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResourceKind {
    Book,
    Video,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Book => "book",
            Self::Video => "video",
        })
    }
}

/// A freely available book or video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resource {
    pub id: String,
    pub kind: ResourceKind,
    pub title: String,
    pub description: String,
    pub source: String,
    pub link: String,
}

/// A clinician listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub availability: String,
    pub email: String,
    pub phone: String,
}

impl Professional {
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties
            .iter()
            .any(|s| s.eq_ignore_ascii_case(specialty.trim()))
    }
}

fn resource(
    id: &str,
    kind: ResourceKind,
    title: &str,
    description: &str,
    source: &str,
    link: &str,
) -> Resource {
    Resource {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        source: source.to_string(),
        link: link.to_string(),
    }
}

pub fn all_resources() -> &'static [Resource] {
    static RESOURCES: LazyLock<Vec<Resource>> = LazyLock::new(|| {
        use ResourceKind::{Book, Video};
        vec![
            resource(
                "book-1",
                Book,
                "Feeling Good: The New Mood Therapy",
                "By David D. Burns - A scientifically proven, drug-free treatment for depression.",
                "Public Domain",
                "/resources/feeling-good.pdf",
            ),
            resource(
                "book-2",
                Book,
                "Mind Over Mood",
                "By Dennis Greenberger & Christine Padesky - Change how you feel by changing how \
                 you think.",
                "Free Edition",
                "/resources/mind-over-mood.pdf",
            ),
            resource(
                "book-3",
                Book,
                "The Anxiety and Worry Workbook",
                "By David A. Clark & Aaron T. Beck - Cognitive behavioral therapy approach to \
                 anxiety.",
                "Open Access",
                "/resources/anxiety-workbook.pdf",
            ),
            resource(
                "video-1",
                Video,
                "Overcoming Depression",
                "A comprehensive guide to understanding and managing depression symptoms.",
                "YouTube",
                "https://www.youtube.com/watch?v=TVgQ_tgWMyU",
            ),
            resource(
                "video-2",
                Video,
                "Meditation for Anxiety",
                "15-minute guided meditation practice for anxiety relief.",
                "YouTube",
                "https://www.youtube.com/watch?v=O-6f5wQXSu8",
            ),
            resource(
                "video-3",
                Video,
                "Understanding Cognitive Behavioral Therapy",
                "Learn the basics of CBT and how it can help improve mental health.",
                "YouTube",
                "https://www.youtube.com/watch?v=8bnP5GvUL_U",
            ),
            resource(
                "video-4",
                Video,
                "Managing Stress in Everyday Life",
                "Practical techniques for managing daily stress and preventing burnout.",
                "YouTube",
                "https://www.youtube.com/watch?v=hnpQrMqDoqE",
            ),
        ]
    });
    &RESOURCES
}

/// Resources of one kind, or all of them when `kind` is `None`.
pub fn resources(kind: Option<ResourceKind>) -> Vec<&'static Resource> {
    all_resources()
        .iter()
        .filter(|r| kind.is_none_or(|kind| r.kind == kind))
        .collect()
}

pub fn all_professionals() -> &'static [Professional] {
    static PROFESSIONALS: LazyLock<Vec<Professional>> = LazyLock::new(|| {
        let professional = |id: &str,
                            name: &str,
                            title: &str,
                            specialties: &[&str],
                            availability: &str,
                            email: &str,
                            phone: &str| Professional {
            id: id.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            availability: availability.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        };
        vec![
            professional(
                "p1",
                "Dr. Sarah Johnson",
                "MD, Psychiatrist",
                &["Depression", "Anxiety", "PTSD"],
                "Mon, Wed, Fri: 9 AM - 5 PM",
                "sarah.johnson@mindmate.example",
                "+1 (555) 123-4567",
            ),
            professional(
                "p2",
                "Dr. Michael Chen",
                "MD, Psychiatrist",
                &["Bipolar Disorder", "OCD", "Schizophrenia"],
                "Tue, Thu: 10 AM - 6 PM, Sat: 9 AM - 1 PM",
                "michael.chen@mindmate.example",
                "+1 (555) 234-5678",
            ),
            professional(
                "p3",
                "Dr. Emily Rodriguez",
                "PhD, Clinical Psychologist",
                &["Trauma", "Grief Counseling", "Eating Disorders"],
                "Mon, Tue, Thu, Fri: 12 PM - 8 PM",
                "emily.rodriguez@mindmate.example",
                "+1 (555) 345-6789",
            ),
            professional(
                "p4",
                "Dr. James Wilson",
                "MD, Psychiatrist",
                &["Addiction", "Depression", "Anxiety"],
                "Wed, Fri: 9 AM - 7 PM, Sat: 10 AM - 3 PM",
                "james.wilson@mindmate.example",
                "+1 (555) 456-7890",
            ),
        ]
    });
    &PROFESSIONALS
}

/// Professionals listing `specialty` (case-insensitive), or everyone when
/// `specialty` is `None`.
pub fn professionals(specialty: Option<&str>) -> Vec<&'static Professional> {
    all_professionals()
        .iter()
        .filter(|p| specialty.is_none_or(|s| p.has_specialty(s)))
        .collect()
}

/// The directory specialty matching a shipped questionnaire.
pub fn specialty_for(questionnaire_id: &str) -> Option<&'static str> {
    match questionnaire_id {
        phq9::ID => Some("Depression"),
        gad7::ID => Some("Anxiety"),
        _ => None,
    }
}

pub fn suggests_professional_support(result: &ScoreResult) -> bool {
    result.total >= PROFESSIONAL_SUPPORT_THRESHOLD
}

/// Directory entries to show next to `result`: empty below the threshold,
/// otherwise the matching specialists (everyone for custom questionnaires).
pub fn referrals_for(result: &ScoreResult) -> Vec<&'static Professional> {
    if !suggests_professional_support(result) {
        return Vec::new();
    }
    professionals(specialty_for(&result.questionnaire_id))
}
