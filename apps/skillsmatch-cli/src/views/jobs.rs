//! Job listing, job page, applying and deleting.

use tracing::info;

use skillsmatch_core::domain::{Job, JobStatus, UserType};

use super::{acting_viewer, page_viewer};
use crate::error::{ViewError, ViewResult, session_failure};
use crate::state::AppState;

/// Client-side filter over the full job list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub skill: Option<String>,
    pub status: Option<JobStatus>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        let skill_ok = self
            .skill
            .as_deref()
            .is_none_or(|skill| skill.trim().is_empty() || job.requires_skill(skill));
        let status_ok = self.status.is_none_or(|status| job.status == status);
        skill_ok && status_ok
    }

    pub fn apply(&self, jobs: Vec<Job>) -> Vec<Job> {
        jobs.into_iter().filter(|job| self.matches(job)).collect()
    }
}

pub async fn list_jobs(state: &AppState, filter: &JobFilter) -> ViewResult<Vec<Job>> {
    let jobs = state
        .api
        .jobs
        .list()
        .await
        .map_err(|e| session_failure(&state.session, e))?;
    Ok(filter.apply(jobs))
}

#[derive(Debug, Clone)]
pub struct JobPage {
    pub job: Job,
    /// A logged-in student who has not applied yet, on an open job.
    pub can_apply: bool,
    pub already_applied: bool,
    pub can_delete: bool,
    pub notice: Option<String>,
}

pub async fn load_job(state: &AppState, job_id: &str, revalidate: bool) -> ViewResult<JobPage> {
    let ((viewer, notice), job) = tokio::join!(
        page_viewer(state, revalidate),
        state.api.jobs.get(job_id),
    );
    let job = job.map_err(|e| session_failure(&state.session, e))?;

    let (already_applied, can_apply, can_delete) = match &viewer {
        Some(v) if v.user_type == UserType::Student => {
            let applied = job.has_applicant(&v.user_id);
            (applied, job.is_open() && !applied, false)
        }
        Some(v) => (false, false, v.owns(UserType::Business, &job.created_by)),
        None => (false, false, false),
    };

    Ok(JobPage {
        job,
        can_apply,
        already_applied,
        can_delete,
        notice,
    })
}

/// Apply to a job as the logged-in student.
pub async fn apply_to_job(state: &AppState, job_id: &str) -> ViewResult<()> {
    let viewer = acting_viewer(state).await?;
    if viewer.user_type != UserType::Student {
        return Err(ViewError::Forbidden(
            "Only students can apply for jobs.".to_string(),
        ));
    }

    let job = state
        .api
        .jobs
        .get(job_id)
        .await
        .map_err(|e| session_failure(&state.session, e))?;
    if !job.is_open() {
        return Err(ViewError::Invalid(
            "This job is no longer accepting applications.".to_string(),
        ));
    }
    if job.has_applicant(&viewer.user_id) {
        return Err(ViewError::Invalid(
            "You have already applied for this job.".to_string(),
        ));
    }

    state
        .api
        .jobs
        .apply(job_id, &viewer.user_id)
        .await
        .map_err(|e| session_failure(&state.session, e))?;
    info!(job_id = %job_id, student_id = %viewer.user_id, "Applied to job");
    Ok(())
}

/// Delete a job posted by the logged-in business.
pub async fn delete_job(state: &AppState, job_id: &str) -> ViewResult<()> {
    let viewer = acting_viewer(state).await?;
    let job = state
        .api
        .jobs
        .get(job_id)
        .await
        .map_err(|e| session_failure(&state.session, e))?;
    if !viewer.owns(UserType::Business, &job.created_by) {
        return Err(ViewError::Forbidden(
            "You can only delete jobs you posted.".to_string(),
        ));
    }

    state
        .api
        .jobs
        .delete(job_id)
        .await
        .map_err(|e| session_failure(&state.session, e))?;
    info!(job_id = %job_id, "Job deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::views::test_support::{logged_in_as, state_for};

    fn job(id: &str, status: JobStatus, skills: &[&str]) -> Job {
        Job {
            job_id: id.to_string(),
            status,
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    async fn mount_me(server: &MockServer, user_type: &str, id: &str) {
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"userId": id, "userType": user_type})),
            )
            .mount(server)
            .await;
    }

    async fn mount_job(server: &MockServer, body: serde_json::Value) {
        let id = body["jobId"].as_str().unwrap_or_default().to_string();
        Mock::given(method("GET"))
            .and(path(format!("/jobs/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[test]
    fn test_filter_by_skill_and_status() {
        let jobs = vec![
            job("j1", JobStatus::Open, &["React"]),
            job("j2", JobStatus::Completed, &["React"]),
            job("j3", JobStatus::Open, &["Python"]),
        ];
        let filter = JobFilter {
            skill: Some("react".to_string()),
            status: Some(JobStatus::Open),
        };

        let ids: Vec<_> = filter.apply(jobs).into_iter().map(|j| j.job_id).collect();
        assert_eq!(ids, vec!["j1"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = JobFilter {
            skill: Some("  ".to_string()),
            status: None,
        };
        assert!(filter.matches(&job("j1", JobStatus::Cancelled, &[])));
    }

    #[tokio::test]
    async fn test_list_jobs_filters_client_side() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"jobId": "j1", "status": "open", "skillsRequired": ["Design"]},
                {"jobId": "j2", "status": "in-progress", "skillsRequired": ["Design"]}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let state = state_for(&server);
        let filter = JobFilter {
            status: Some(JobStatus::InProgress),
            ..Default::default()
        };
        let jobs = list_jobs(&state, &filter).await.unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_id, "j2");
    }

    #[tokio::test]
    async fn test_student_can_apply_to_open_job() {
        let server = MockServer::start().await;
        mount_job(&server, json!({"jobId": "j1", "createdBy": "b1", "status": "open"})).await;

        let state = logged_in_as(&server, UserType::Student, "42");
        let page = load_job(&state, "j1", false).await.unwrap();

        assert!(page.can_apply);
        assert!(!page.already_applied);
        assert!(!page.can_delete);
    }

    #[tokio::test]
    async fn test_closed_job_cannot_be_applied_to() {
        let server = MockServer::start().await;
        mount_job(&server, json!({"jobId": "j2", "createdBy": "b1", "status": "completed"})).await;

        let state = logged_in_as(&server, UserType::Student, "42");
        let page = load_job(&state, "j2", false).await.unwrap();
        assert!(!page.can_apply);
    }

    #[tokio::test]
    async fn test_owner_business_sees_delete() {
        let server = MockServer::start().await;
        mount_job(&server, json!({"jobId": "j1", "createdBy": "b1", "status": "open"})).await;

        let state = logged_in_as(&server, UserType::Business, "b1");
        let page = load_job(&state, "j1", false).await.unwrap();

        assert!(!page.can_apply);
        assert!(page.can_delete);
    }

    #[tokio::test]
    async fn test_apply_sends_student_id() {
        let server = MockServer::start().await;
        mount_me(&server, "student", "42").await;
        mount_job(&server, json!({"jobId": "j1", "createdBy": "b1", "status": "open"})).await;
        Mock::given(method("POST"))
            .and(path("/jobs/j1/apply"))
            .and(body_json(json!({"studentId": "42"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let state = logged_in_as(&server, UserType::Student, "42");
        apply_to_job(&state, "j1").await.unwrap();
    }

    #[tokio::test]
    async fn test_business_cannot_apply() {
        let server = MockServer::start().await;
        mount_me(&server, "business", "b1").await;

        let state = logged_in_as(&server, UserType::Business, "b1");
        let err = apply_to_job(&state, "j1").await.unwrap_err();

        assert_eq!(err.to_string(), "Only students can apply for jobs.");
    }

    #[tokio::test]
    async fn test_apply_to_cancelled_job_is_refused() {
        let server = MockServer::start().await;
        mount_me(&server, "student", "42").await;
        mount_job(&server, json!({"jobId": "j4", "createdBy": "b1", "status": "cancelled"})).await;
        Mock::given(method("POST"))
            .and(path("/jobs/j4/apply"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let state = logged_in_as(&server, UserType::Student, "42");
        let err = apply_to_job(&state, "j4").await.unwrap_err();
        assert!(matches!(err, ViewError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_apply_without_session() {
        let server = MockServer::start().await;
        let state = state_for(&server);

        let err = apply_to_job(&state, "j1").await.unwrap_err();
        assert!(matches!(err, ViewError::NotLoggedIn));
    }

    #[tokio::test]
    async fn test_delete_job_of_another_business_is_refused() {
        let server = MockServer::start().await;
        mount_me(&server, "business", "b1").await;
        mount_job(&server, json!({"jobId": "j3", "createdBy": "b2"})).await;
        Mock::given(method("DELETE"))
            .and(path("/jobs/j3"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let state = logged_in_as(&server, UserType::Business, "b1");
        let err = delete_job(&state, "j3").await.unwrap_err();
        assert!(matches!(err, ViewError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_owner_deletes_job() {
        let server = MockServer::start().await;
        mount_me(&server, "business", "b1").await;
        mount_job(&server, json!({"jobId": "j1", "createdBy": "b1"})).await;
        Mock::given(method("DELETE"))
            .and(path("/jobs/j1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let state = logged_in_as(&server, UserType::Business, "b1");
        delete_job(&state, "j1").await.unwrap();
    }
}
