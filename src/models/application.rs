//! Application domain model.

use rust_decimal::Decimal;

/// Post-graduation plan declared by the applicant.
///
/// An unrecognized value coerces to `None` and is stored as NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraduationPlan {
    JobPlacement,
    FurtherStudies,
    Entrepreneurship,
    Other,
}

impl GraduationPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobPlacement => "Job/Placement",
            Self::FurtherStudies => "Further studies",
            Self::Entrepreneurship => "Entrepreneurship/New Venture or Startup",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Job/Placement" => Some(Self::JobPlacement),
            "Further studies" => Some(Self::FurtherStudies),
            "Entrepreneurship/New Venture or Startup" => Some(Self::Entrepreneurship),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for GraduationPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Active backlog count bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveBacklogs {
    None,
    One,
    TwoOrMore,
}

impl ActiveBacklogs {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::One => "1 backlog",
            Self::TwoOrMore => "2 or more backlogs",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "1 backlog" => Some(Self::One),
            "2 or more backlogs" => Some(Self::TwoOrMore),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActiveBacklogs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical application record, validated and ready for insertion.
///
/// Structured fields (`apple_devices`, `programming_skills`) hold their
/// serialized storage form. `id` and `created_at` are store-assigned and
/// not part of the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub email: String,
    pub full_name: String,
    pub university: String,
    pub enrollment_number: String,
    pub contact_number: String,
    pub apple_devices: String,
    pub cgpa: Decimal,
    pub active_backlogs: Option<ActiveBacklogs>,
    pub programming_skills: String,
    pub other_languages: String,
    pub leetcode_rank: String,
    pub leetcode_link: String,
    pub hackerrank_rank: String,
    pub hackerrank_link: String,
    pub github_link: String,
    pub hackathons_participated: bool,
    pub hackathon_details: String,
    pub projects_done: bool,
    pub project_details: String,
    pub entrepreneurship_programs: bool,
    pub entrepreneurship_details: String,
    pub other_skill_building: bool,
    pub other_skill_details: String,
    pub special_skills: String,
    pub awards: String,
    pub plan_after_graduation: Option<GraduationPlan>,
    pub plan_other: String,
    pub motivation: String,
    pub resume_path: Option<String>,
}
