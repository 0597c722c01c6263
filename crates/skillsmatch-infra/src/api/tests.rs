use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skillsmatch_core::domain::{JobStatus, Session, UserType};
use skillsmatch_shared::dto::{JobPatch, StudentPatch, StudentRegistration};

use super::SkillsMatchApi;
use crate::http::{ApiClient, ApiClientConfig};
use crate::session::SessionStore;

fn api_for(server: &MockServer, session: &SessionStore) -> SkillsMatchApi {
    let config = ApiClientConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    SkillsMatchApi::new(ApiClient::new(config, session.clone()).unwrap())
}

#[tokio::test]
async fn test_login_then_save_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "a@b.com", "password": "x"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "userType": "student",
            "userId": "42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = SessionStore::in_memory();
    let api = api_for(&server, &session);

    let auth = api.auth.login("a@b.com", "x").await.unwrap();
    session.save(&Session::from(auth)).unwrap();

    assert_eq!(session.user_id(), Some("42".to_string()));
    assert!(session.is_logged_in());
}

#[tokio::test]
async fn test_register_student_sends_user_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "userType": "student",
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "password": "pw",
            "skills": ["React"],
            "level": "Graduate",
            "bio": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": "t9",
            "userType": "student",
            "userId": "s9"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = SessionStore::in_memory();
    let api = api_for(&server, &session);

    let auth = api
        .auth
        .register_student(StudentRegistration {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "pw".to_string(),
            skills: vec!["React".to_string()],
            level: "Graduate".to_string(),
            bio: String::new(),
        })
        .await
        .unwrap();

    assert_eq!(auth.user_id, "s9");
    assert_eq!(auth.user_type, UserType::Student);
}

#[tokio::test]
async fn test_me_requires_stored_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"userId": "b1", "userType": "business"})),
        )
        .mount(&server)
        .await;

    let session = SessionStore::in_memory();
    session
        .save(&Session::new("t1", UserType::Business, "b1"))
        .unwrap();
    let api = api_for(&server, &session);

    let me = api.auth.me().await.unwrap();
    assert!(me.is(UserType::Business, "b1"));
}

#[tokio::test]
async fn test_update_student_sends_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/students/42"))
        .and(body_json(json!({"bio": "New bio", "skills": ["Rust", "SQL"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "studentId": "42",
            "firstName": "Jane",
            "lastName": "Doe",
            "bio": "New bio",
            "skills": ["Rust", "SQL"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = SessionStore::in_memory();
    let api = api_for(&server, &session);

    let patch = StudentPatch {
        bio: Some("New bio".to_string()),
        skills: Some(vec!["Rust".to_string(), "SQL".to_string()]),
        ..Default::default()
    };
    let student = api.students.update("42", &patch).await.unwrap();

    assert_eq!(student.full_name(), "Jane Doe");
    assert!(student.applied_jobs.is_empty());
}

#[tokio::test]
async fn test_list_and_get_jobs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"jobId": "j1", "createdBy": "b1", "title": "Landing page", "budget": 500, "status": "open"},
            {"jobId": "j2", "createdBy": "b1", "title": "Market research", "budget": 300, "status": "completed"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jobs/j2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"jobId": "j2", "createdBy": "b1", "title": "Market research", "status": "completed"}),
        ))
        .mount(&server)
        .await;

    let session = SessionStore::in_memory();
    let api = api_for(&server, &session);

    let jobs = api.jobs.list().await.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].budget, 500.0);

    let job = api.jobs.get("j2").await.unwrap();
    assert_eq!(job.status, JobStatus::Completed);
}

#[tokio::test]
async fn test_create_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs"))
        .and(body_json(json!({
            "createdBy": "b1",
            "title": "Logo",
            "budget": 150.0,
            "status": "open"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "jobId": "j3",
            "createdBy": "b1",
            "title": "Logo",
            "budget": 150,
            "status": "open"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = SessionStore::in_memory();
    let api = api_for(&server, &session);

    let job = api
        .jobs
        .create(&JobPatch {
            created_by: Some("b1".to_string()),
            title: Some("Logo".to_string()),
            budget: Some(150.0),
            status: Some(JobStatus::Open),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(job.job_id, "j3");
}

#[tokio::test]
async fn test_apply_to_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs/j1/apply"))
        .and(body_json(json!({"studentId": "42"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let session = SessionStore::in_memory();
    let api = api_for(&server, &session);

    api.jobs.apply("j1", "42").await.unwrap();
}

#[tokio::test]
async fn test_delete_business_propagates_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/businesses/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Business not found"})),
        )
        .mount(&server)
        .await;

    let session = SessionStore::in_memory();
    let api = api_for(&server, &session);

    let err = api.businesses.delete("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Business not found");
}

#[tokio::test]
async fn test_reference_lists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["React", "Python"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Remote"])))
        .mount(&server)
        .await;

    let session = SessionStore::in_memory();
    let api = api_for(&server, &session);

    assert_eq!(api.reference.skills().await.unwrap(), vec!["React", "Python"]);
    assert_eq!(api.reference.locations().await.unwrap(), vec!["Remote"]);
}

#[tokio::test]
async fn test_list_tolerates_null_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"studentId":"1","firstName":"Jane","lastName":"Doe","bio":null}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let api = api_for(&server, &SessionStore::in_memory());
    let students = api.students.list().await.unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].full_name(), "Jane Doe");
    assert_eq!(students[0].bio, "");
}

#[tokio::test]
async fn test_id_is_escaped_into_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/a%2Fb%3Fc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobId": "a/b?c"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, &SessionStore::in_memory());
    let job = api.jobs.get("a/b?c").await.unwrap();
    assert_eq!(job.job_id, "a/b?c");
}
