//! Database operations for stored applications.

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use crate::error::{AppError, AppResult};
use crate::models::application::Application;

/// Column order here is the table definition order; the bind list below
/// must stay in lockstep.
const INSERT_APPLICATION: &str = "\
INSERT INTO applications (
    email,
    full_name,
    university,
    enrollment_number,
    contact_number,
    apple_devices,
    cgpa,
    active_backlogs,
    programming_skills,
    other_languages,
    leetcode_rank,
    leetcode_link,
    hackerrank_rank,
    hackerrank_link,
    github_link,
    hackathons_participated,
    hackathon_details,
    projects_done,
    project_details,
    entrepreneurship_programs,
    entrepreneurship_details,
    other_skill_building,
    other_skill_details,
    special_skills,
    awards,
    plan_after_graduation,
    plan_other,
    motivation,
    resume_path
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, \
$16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29)";

/// Insert one canonical application record as a new row.
pub async fn insert_application(
    conn: &DatabaseConnection,
    application: &Application,
) -> AppResult<()> {
    let stmt = insert_statement(application);

    conn.execute(stmt)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert application: {}", e)))?;

    Ok(())
}

/// Build the parameterized insert for one record.
fn insert_statement(application: &Application) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        INSERT_APPLICATION,
        [
            application.email.as_str().into(),
            application.full_name.as_str().into(),
            application.university.as_str().into(),
            application.enrollment_number.as_str().into(),
            application.contact_number.as_str().into(),
            application.apple_devices.as_str().into(),
            application.cgpa.into(),
            application
                .active_backlogs
                .map(|b| b.as_str().to_string())
                .into(),
            application.programming_skills.as_str().into(),
            application.other_languages.as_str().into(),
            application.leetcode_rank.as_str().into(),
            application.leetcode_link.as_str().into(),
            application.hackerrank_rank.as_str().into(),
            application.hackerrank_link.as_str().into(),
            application.github_link.as_str().into(),
            application.hackathons_participated.into(),
            application.hackathon_details.as_str().into(),
            application.projects_done.into(),
            application.project_details.as_str().into(),
            application.entrepreneurship_programs.into(),
            application.entrepreneurship_details.as_str().into(),
            application.other_skill_building.into(),
            application.other_skill_details.as_str().into(),
            application.special_skills.as_str().into(),
            application.awards.as_str().into(),
            application
                .plan_after_graduation
                .map(|p| p.as_str().to_string())
                .into(),
            application.plan_other.as_str().into(),
            application.motivation.as_str().into(),
            application.resume_path.clone().into(),
        ],
    )
}
