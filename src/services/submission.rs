//! Submission validation and normalization pipeline.
//!
//! Takes the raw multipart field map plus the stored resume (if any) and
//! produces the canonical [`Application`] record, or a rejection naming the
//! reason. No side effects: all validation happens before any persistence
//! attempt.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult};
use crate::models::application::{ActiveBacklogs, Application, GraduationPlan};
use crate::services::upload::{StoredResume, MAX_RESUME_SIZE};

/// Fields that must be present and non-blank, in reporting order.
const REQUIRED_FIELDS: &[&str] = &[
    "email",
    "fullName",
    "university",
    "enrollmentNumber",
    "contactNumber",
    "cgpa",
    "planAfterGraduation",
    "motivation",
];

/// Validate and normalize one submission into the canonical record.
///
/// Steps, in order: parse structured fields (silent empty default on
/// malformed input), default the optional text fields, aggregate-check the
/// required set, coerce the CGPA, re-check the resume size, derive the
/// yes-flags, assemble the record with structured fields re-serialized.
pub fn build_application(
    fields: &HashMap<String, String>,
    resume: Option<&StoredResume>,
) -> AppResult<Application> {
    let apple_devices = parse_json_list(fields.get("appleDevices"));
    let programming_skills = parse_json_map(fields.get("programmingSkills"));

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|name| is_blank(fields.get(*name)))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let cgpa = text(fields, "cgpa")
        .trim()
        .parse::<Decimal>()
        .map_err(|_| AppError::InvalidInput("CGPA must be a number".to_string()))?;

    if let Some(resume) = resume {
        if resume.size > MAX_RESUME_SIZE {
            return Err(AppError::InvalidInput(
                "Resume file exceeds 10MB limit".to_string(),
            ));
        }
    }

    Ok(Application {
        email: text(fields, "email"),
        full_name: text(fields, "fullName"),
        university: text(fields, "university"),
        enrollment_number: text(fields, "enrollmentNumber"),
        contact_number: text(fields, "contactNumber"),
        apple_devices: serde_json::to_string(&apple_devices)
            .unwrap_or_else(|_| "[]".to_string()),
        cgpa,
        active_backlogs: parse_backlogs(fields.get("activeBacklogs")),
        programming_skills: serde_json::to_string(&programming_skills)
            .unwrap_or_else(|_| "{}".to_string()),
        other_languages: text(fields, "otherLanguages"),
        leetcode_rank: text(fields, "leetcodeRank"),
        leetcode_link: text(fields, "leetcodeLink"),
        hackerrank_rank: text(fields, "hackerrankRank"),
        hackerrank_link: text(fields, "hackerrankLink"),
        github_link: text(fields, "githubLink"),
        hackathons_participated: yes_flag(fields, "hackathonsParticipated"),
        hackathon_details: text(fields, "hackathonDetails"),
        projects_done: yes_flag(fields, "projectsDone"),
        project_details: text(fields, "projectDetails"),
        entrepreneurship_programs: yes_flag(fields, "entrepreneurshipPrograms"),
        entrepreneurship_details: text(fields, "entrepreneurshipDetails"),
        other_skill_building: yes_flag(fields, "otherSkillBuilding"),
        other_skill_details: text(fields, "otherSkillDetails"),
        special_skills: text(fields, "specialSkills"),
        awards: text(fields, "awards"),
        plan_after_graduation: fields
            .get("planAfterGraduation")
            .and_then(|v| GraduationPlan::parse(v.trim())),
        plan_other: text(fields, "planOther"),
        motivation: text(fields, "motivation"),
        resume_path: resume.map(|r| format!("/uploads/{}", r.filename)),
    })
}

/// Field value as submitted, empty string when absent.
fn text(fields: &HashMap<String, String>, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

/// True when the field is absent or blank after trimming.
fn is_blank(value: Option<&String>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}

/// Case-insensitive exact match against "yes"; anything else is false.
fn yes_flag(fields: &HashMap<String, String>, name: &str) -> bool {
    fields
        .get(name)
        .map(|v| v.eq_ignore_ascii_case("yes"))
        .unwrap_or(false)
}

/// Parse a serialized string list; malformed input yields the empty list.
fn parse_json_list(raw: Option<&String>) -> Vec<String> {
    raw.map(|s| serde_json::from_str(s).unwrap_or_default())
        .unwrap_or_default()
}

/// Parse a serialized object map; malformed input yields the empty map.
fn parse_json_map(raw: Option<&String>) -> serde_json::Map<String, JsonValue> {
    raw.map(|s| serde_json::from_str(s).unwrap_or_default())
        .unwrap_or_default()
}

/// Blank input is no answer; an unrecognized value also coerces to `None`.
fn parse_backlogs(raw: Option<&String>) -> Option<ActiveBacklogs> {
    raw.and_then(|v| {
        let v = v.trim();
        if v.is_empty() {
            None
        } else {
            ActiveBacklogs::parse(v)
        }
    })
}
