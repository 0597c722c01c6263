//! Student and business profile pages.
//!
//! A profile page loads its entity and the full job list concurrently; the two
//! results land in separate fields, so completion order does not matter. A
//! failing job list degrades to an empty section instead of failing the page.

use tracing::{info, warn};

use skillsmatch_core::domain::{Business, Job, JobStatus, Student, UserType};
use skillsmatch_shared::dto::{BusinessPatch, JobPatch, StudentPatch};

use super::{Viewer, acting_viewer, page_viewer};
use crate::error::{ViewError, ViewResult, session_failure};
use crate::state::AppState;

const NOT_YOUR_PROFILE: &str = "You can only edit your own profile.";

#[derive(Debug, Clone)]
pub struct StudentProfilePage {
    pub student: Student,
    /// Completed jobs the student applied to.
    pub completed_jobs: Vec<Job>,
    pub can_edit: bool,
    pub notice: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BusinessProfilePage {
    pub business: Business,
    /// Jobs posted by this business.
    pub jobs: Vec<Job>,
    pub can_edit: bool,
    pub notice: Option<String>,
}

/// Fields a business must fill in to post a job.
#[derive(Debug, Clone, Default)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub skills_required: Vec<String>,
    pub budget: f64,
}

impl NewJob {
    fn validate(&self) -> ViewResult<()> {
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.skills_required.is_empty()
            || !self.budget.is_finite()
            || self.budget <= 0.0
        {
            return Err(ViewError::Invalid(
                "Title, description, at least one skill and a positive budget are required."
                    .to_string(),
            ));
        }
        Ok(())
    }

    fn into_patch(self, business_id: &str) -> JobPatch {
        JobPatch {
            created_by: Some(business_id.to_string()),
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            skills_required: Some(self.skills_required),
            budget: Some(self.budget),
            status: Some(JobStatus::Open),
        }
    }
}

pub async fn load_student_profile(
    state: &AppState,
    id: &str,
    revalidate: bool,
) -> ViewResult<StudentProfilePage> {
    let ((viewer, notice), student, jobs) = tokio::join!(
        page_viewer(state, revalidate),
        state.api.students.get(id),
        state.api.jobs.list(),
    );

    let student = student.map_err(|e| session_failure(&state.session, e))?;
    let completed_jobs = jobs_or_empty(jobs)
        .into_iter()
        .filter(|job| job.status == JobStatus::Completed && job.has_applicant(id))
        .collect();

    Ok(StudentProfilePage {
        student,
        completed_jobs,
        can_edit: owns(viewer.as_ref(), UserType::Student, id),
        notice,
    })
}

pub async fn load_business_profile(
    state: &AppState,
    id: &str,
    revalidate: bool,
) -> ViewResult<BusinessProfilePage> {
    let ((viewer, notice), business, jobs) = tokio::join!(
        page_viewer(state, revalidate),
        state.api.businesses.get(id),
        state.api.jobs.list(),
    );

    let business = business.map_err(|e| session_failure(&state.session, e))?;
    let jobs = jobs_or_empty(jobs)
        .into_iter()
        .filter(|job| job.created_by == id)
        .collect();

    Ok(BusinessProfilePage {
        business,
        jobs,
        can_edit: owns(viewer.as_ref(), UserType::Business, id),
        notice,
    })
}

/// Save student profile changes after re-checking who is logged in.
pub async fn save_student_profile(
    state: &AppState,
    id: &str,
    patch: StudentPatch,
) -> ViewResult<Student> {
    if patch.is_empty() {
        return Err(ViewError::Invalid("Nothing to update.".to_string()));
    }
    ensure_owner(state, UserType::Student, id).await?;

    let student = state
        .api
        .students
        .update(id, &patch)
        .await
        .map_err(|e| session_failure(&state.session, e))?;
    info!(student_id = %id, "Student profile updated");
    Ok(student)
}

/// Save business profile changes after re-checking who is logged in.
pub async fn save_business_profile(
    state: &AppState,
    id: &str,
    patch: BusinessPatch,
) -> ViewResult<Business> {
    if patch.is_empty() {
        return Err(ViewError::Invalid("Nothing to update.".to_string()));
    }
    ensure_owner(state, UserType::Business, id).await?;

    let business = state
        .api
        .businesses
        .update(id, &patch)
        .await
        .map_err(|e| session_failure(&state.session, e))?;
    info!(business_id = %id, "Business profile updated");
    Ok(business)
}

/// Post a job from a business profile. Only the profile owner may post.
pub async fn post_job(state: &AppState, business_id: &str, new_job: NewJob) -> ViewResult<Job> {
    new_job.validate()?;
    ensure_owner(state, UserType::Business, business_id).await?;

    let job = state
        .api
        .jobs
        .create(&new_job.into_patch(business_id))
        .await
        .map_err(|e| session_failure(&state.session, e))?;
    info!(job_id = %job.job_id, business_id = %business_id, "Job posted");
    Ok(job)
}

async fn ensure_owner(state: &AppState, user_type: UserType, id: &str) -> ViewResult<()> {
    let viewer = acting_viewer(state).await?;
    if !viewer.owns(user_type, id) {
        return Err(ViewError::Forbidden(NOT_YOUR_PROFILE.to_string()));
    }
    Ok(())
}

fn owns(viewer: Option<&Viewer>, user_type: UserType, id: &str) -> bool {
    viewer.is_some_and(|v| v.owns(user_type, id))
}

fn jobs_or_empty(jobs: skillsmatch_core::ApiResult<Vec<Job>>) -> Vec<Job> {
    jobs.unwrap_or_else(|e| {
        warn!(error = %e, "Could not load jobs for profile");
        Vec::new()
    })
}
