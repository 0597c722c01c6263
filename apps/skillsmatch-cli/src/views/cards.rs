//! Plain-text cards for terminal output.

use std::fmt::Write as _;

use skillsmatch_core::domain::{Business, Job, Student};

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

pub fn student_line(student: &Student) -> String {
    format!(
        "{:<10} {:<24} {}",
        student.student_id,
        or_dash(&student.full_name()),
        join_or_dash(&student.skills)
    )
}

pub fn business_line(business: &Business) -> String {
    let verified = if business.verified { " (verified)" } else { "" };
    format!(
        "{:<10} {}{} - {}",
        business.business_id,
        or_dash(&business.name),
        verified,
        or_dash(&business.location)
    )
}

pub fn job_line(job: &Job) -> String {
    format!(
        "{:<10} {:<12} {:>9.2}  {}",
        job.job_id,
        job.status.as_str(),
        job.budget,
        or_dash(&job.title)
    )
}

pub fn student_card(student: &Student) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", or_dash(&student.full_name()));
    let _ = writeln!(out, "  Email:  {}", or_dash(&student.email));
    let _ = writeln!(out, "  Level:  {}", or_dash(&student.level));
    let _ = writeln!(out, "  Skills: {}", join_or_dash(&student.skills));
    let _ = write!(out, "  Bio:    {}", or_dash(&student.bio));
    out
}

pub fn business_card(business: &Business) -> String {
    let mut out = String::new();
    let verified = if business.verified { " (verified)" } else { "" };
    let _ = writeln!(out, "{}{}", or_dash(&business.name), verified);
    let _ = writeln!(out, "  Email:    {}", or_dash(&business.email));
    let _ = writeln!(out, "  Industry: {}", or_dash(&business.industry));
    let _ = writeln!(out, "  Location: {}", or_dash(&business.location));
    let _ = writeln!(out, "  Reviews:  {:.1}", business.reviews);
    let _ = write!(out, "  Bio:      {}", or_dash(&business.bio));
    out
}

pub fn job_card(job: &Job) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", or_dash(&job.title), job.status);
    let _ = writeln!(out, "  Posted by:  {}", or_dash(&job.created_by));
    let _ = writeln!(out, "  Budget:     {:.2}", job.budget);
    let _ = writeln!(out, "  Skills:     {}", join_or_dash(&job.skills_required));
    let _ = writeln!(out, "  Applicants: {}", job.applicants.len());
    let _ = write!(out, "  {}", or_dash(&job.description));
    out
}
