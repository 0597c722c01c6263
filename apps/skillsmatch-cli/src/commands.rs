//! Command dispatch - runs a parsed command against the views and prints the result.

use serde::Serialize;
use serde_json::json;

use skillsmatch_core::domain::Session;

use crate::cli::{BusinessesCommand, Command, JobsCommand, Registration, StudentsCommand};
use crate::state::AppState;
use crate::views::{self, cards, directory, jobs, login, nav::NavBar, profile};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    fn notice(&self, notice: Option<&str>) {
        if let Some(notice) = notice {
            eprintln!("{notice}");
        }
    }
}

pub async fn run(state: &AppState, command: Command, out: Output) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let session = login::login(state, &email, &password).await?;
            emit_session(state, out, &session)
        }
        Command::Register { account } => {
            let session = match Registration::from(account) {
                Registration::Student(student) => login::register_student(state, student).await?,
                Registration::Business(business) => {
                    login::register_business(state, business).await?
                }
            };
            emit_session(state, out, &session)
        }
        Command::Logout => {
            login::logout(state).await?;
            out.emit(&json!({ "loggedOut": true }), || "Logged out.".to_string())
        }
        Command::Whoami { verify } => {
            if verify {
                views::verified_viewer(state).await?;
            }
            let nav = NavBar::from_session(&state.session);
            let value = json!({
                "loggedIn": nav.logged_in,
                "userType": nav.user_type,
                "userId": nav.user_id,
                "profilePath": nav.profile_path,
            });
            out.emit(&value, || nav.to_string())
        }
        Command::Students { command } => run_students(state, command, out).await,
        Command::Businesses { command } => run_businesses(state, command, out).await,
        Command::Jobs { command } => run_jobs(state, command, out).await,
        Command::Skills => {
            let skills = directory::skills(state).await?;
            out.emit(&skills, || skills.join("\n"))
        }
        Command::Locations => {
            let locations = directory::locations(state).await?;
            out.emit(&locations, || locations.join("\n"))
        }
    }
}

async fn run_students(
    state: &AppState,
    command: StudentsCommand,
    out: Output,
) -> anyhow::Result<()> {
    match command {
        StudentsCommand::List => {
            let students = directory::list_students(state).await?;
            out.emit(&students, || lines(&students, cards::student_line))
        }
        StudentsCommand::Show { id, show } => {
            let page = profile::load_student_profile(state, &id, show.verify).await?;
            out.notice(page.notice.as_deref());
            let value = json!({
                "student": page.student,
                "completedJobs": page.completed_jobs,
                "canEdit": page.can_edit,
            });
            out.emit(&value, || {
                let mut text = cards::student_card(&page.student);
                text.push_str("\n\nCompleted Jobs:\n");
                text.push_str(&lines_or_none(&page.completed_jobs, cards::job_line));
                if page.can_edit {
                    text.push_str("\n\nThis is your profile. Edit it with `skillsmatch students edit`.");
                }
                text
            })
        }
        StudentsCommand::Edit { id, changes } => {
            let student = profile::save_student_profile(state, &id, changes.into()).await?;
            out.emit(&student, || {
                format!("Profile updated.\n\n{}", cards::student_card(&student))
            })
        }
    }
}

async fn run_businesses(
    state: &AppState,
    command: BusinessesCommand,
    out: Output,
) -> anyhow::Result<()> {
    match command {
        BusinessesCommand::List => {
            let businesses = directory::list_businesses(state).await?;
            out.emit(&businesses, || lines(&businesses, cards::business_line))
        }
        BusinessesCommand::Show { id, show } => {
            let page = profile::load_business_profile(state, &id, show.verify).await?;
            out.notice(page.notice.as_deref());
            let value = json!({
                "business": page.business,
                "jobs": page.jobs,
                "canEdit": page.can_edit,
            });
            out.emit(&value, || {
                let mut text = cards::business_card(&page.business);
                text.push_str("\n\nPosted Jobs:\n");
                text.push_str(&lines_or_none(&page.jobs, cards::job_line));
                text
            })
        }
        BusinessesCommand::Edit { id, changes } => {
            let business = profile::save_business_profile(state, &id, changes.into()).await?;
            out.emit(&business, || {
                format!("Profile updated.\n\n{}", cards::business_card(&business))
            })
        }
        BusinessesCommand::PostJob { business_id, job } => {
            let job = profile::post_job(state, &business_id, job.into()).await?;
            out.emit(&job, || format!("Job posted.\n\n{}", cards::job_card(&job)))
        }
    }
}

async fn run_jobs(state: &AppState, command: JobsCommand, out: Output) -> anyhow::Result<()> {
    match command {
        JobsCommand::List { skill, status } => {
            let filter = jobs::JobFilter { skill, status };
            let jobs = jobs::list_jobs(state, &filter).await?;
            out.emit(&jobs, || lines_or_none(&jobs, cards::job_line))
        }
        JobsCommand::Show { id, show } => {
            let page = jobs::load_job(state, &id, show.verify).await?;
            out.notice(page.notice.as_deref());
            let value = json!({
                "job": page.job,
                "canApply": page.can_apply,
                "alreadyApplied": page.already_applied,
                "canDelete": page.can_delete,
            });
            out.emit(&value, || {
                let mut text = cards::job_card(&page.job);
                if page.already_applied {
                    text.push_str("\n\nYou have applied for this job.");
                } else if page.can_apply {
                    text.push_str(&format!(
                        "\n\nApply with `skillsmatch jobs apply {}`.",
                        page.job.job_id
                    ));
                }
                text
            })
        }
        JobsCommand::Apply { id } => {
            jobs::apply_to_job(state, &id).await?;
            out.emit(&json!({ "applied": id }), || {
                "Application submitted.".to_string()
            })
        }
        JobsCommand::Delete { id } => {
            jobs::delete_job(state, &id).await?;
            out.emit(&json!({ "deleted": id }), || "Job deleted.".to_string())
        }
    }
}

fn emit_session(state: &AppState, out: Output, session: &Session) -> anyhow::Result<()> {
    let value = json!({
        "userType": session.user_type,
        "userId": session.user_id,
    });
    out.emit(&value, || {
        format!(
            "Logged in as {} {}.\nProfile: {}",
            session.user_type,
            session.user_id,
            state.session.profile_path()
        )
    })
}

fn lines<T>(items: &[T], line: fn(&T) -> String) -> String {
    items.iter().map(line).collect::<Vec<_>>().join("\n")
}

fn lines_or_none<T>(items: &[T], line: fn(&T) -> String) -> String {
    if items.is_empty() {
        "  (none)".to_string()
    } else {
        lines(items, line)
    }
}
