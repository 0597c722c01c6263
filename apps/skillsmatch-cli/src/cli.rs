//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use skillsmatch_core::domain::JobStatus;
use skillsmatch_shared::dto::{
    BusinessPatch, BusinessRegistration, StudentPatch, StudentRegistration,
};

use crate::views::profile::NewJob;

#[derive(Debug, Parser)]
#[command(name = "skillsmatch", version, about = "SkillsMatch marketplace from the terminal")]
pub struct Cli {
    /// Backend base URL, overrides SKILLSMATCH_API_BASE_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file, overrides SKILLSMATCH_SESSION_FILE
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log in
    Register {
        #[command(subcommand)]
        account: RegisterCommand,
    },
    /// Log out and forget the stored session
    Logout,
    /// Show the current session
    Whoami {
        /// Ask the backend whether the token is still valid
        #[arg(long)]
        verify: bool,
    },
    Students {
        #[command(subcommand)]
        command: StudentsCommand,
    },
    Businesses {
        #[command(subcommand)]
        command: BusinessesCommand,
    },
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// List known skills
    Skills,
    /// List known locations
    Locations,
}

#[derive(Debug, Subcommand)]
pub enum RegisterCommand {
    Student {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Comma-separated
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        #[arg(long, default_value = "")]
        level: String,
        #[arg(long, default_value = "")]
        bio: String,
    },
    Business {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        bio: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        industry: String,
    },
}

/// Page loading options shared by every `show` command.
#[derive(Debug, Clone, Copy, Args)]
pub struct ShowArgs {
    /// Re-validate the session before deciding what may be edited
    #[arg(long)]
    pub verify: bool,
}

#[derive(Debug, Subcommand)]
pub enum StudentsCommand {
    List,
    Show {
        id: String,
        #[command(flatten)]
        show: ShowArgs,
    },
    /// Edit your own student profile
    Edit {
        id: String,
        #[command(flatten)]
        changes: StudentChanges,
    },
}

#[derive(Debug, Args)]
pub struct StudentChanges {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Comma-separated, replaces the current list
    #[arg(long, value_delimiter = ',')]
    pub skills: Option<Vec<String>>,
    #[arg(long)]
    pub level: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
}

impl From<StudentChanges> for StudentPatch {
    fn from(c: StudentChanges) -> Self {
        Self {
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            skills: c.skills,
            level: c.level,
            bio: c.bio,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum BusinessesCommand {
    List,
    Show {
        id: String,
        #[command(flatten)]
        show: ShowArgs,
    },
    /// Edit your own business profile
    Edit {
        id: String,
        #[command(flatten)]
        changes: BusinessChanges,
    },
    /// Post a job as this business
    PostJob {
        business_id: String,
        #[command(flatten)]
        job: JobArgs,
    },
}

#[derive(Debug, Args)]
pub struct BusinessChanges {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub industry: Option<String>,
    /// Comma-separated, replaces the current list
    #[arg(long, value_delimiter = ',')]
    pub skills: Option<Vec<String>>,
}

impl From<BusinessChanges> for BusinessPatch {
    fn from(c: BusinessChanges) -> Self {
        Self {
            name: c.name,
            email: c.email,
            bio: c.bio,
            location: c.location,
            industry: c.industry,
            skills: c.skills,
        }
    }
}

#[derive(Debug, Args)]
pub struct JobArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// Comma-separated
    #[arg(long, value_delimiter = ',')]
    pub skills: Vec<String>,
    #[arg(long)]
    pub budget: f64,
}

impl From<JobArgs> for NewJob {
    fn from(a: JobArgs) -> Self {
        Self {
            title: a.title,
            description: a.description,
            skills_required: a.skills.into_iter().filter(|s| !s.trim().is_empty()).collect(),
            budget: a.budget,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    List {
        /// Only jobs requiring this skill
        #[arg(long)]
        skill: Option<String>,
        /// open, in-progress, completed or cancelled
        #[arg(long)]
        status: Option<JobStatus>,
    },
    Show {
        id: String,
        #[command(flatten)]
        show: ShowArgs,
    },
    /// Apply as the logged-in student
    Apply { id: String },
    /// Delete a job you posted
    Delete { id: String },
}

impl From<RegisterCommand> for Registration {
    fn from(command: RegisterCommand) -> Self {
        match command {
            RegisterCommand::Student {
                first_name,
                last_name,
                email,
                password,
                skills,
                level,
                bio,
            } => Registration::Student(StudentRegistration {
                first_name,
                last_name,
                email,
                password,
                skills,
                level,
                bio,
            }),
            RegisterCommand::Business {
                name,
                email,
                password,
                bio,
                location,
                industry,
            } => Registration::Business(BusinessRegistration {
                name,
                email,
                password,
                bio,
                location,
                industry,
            }),
        }
    }
}

/// A parsed registration, ready for the login view.
#[derive(Debug)]
pub enum Registration {
    Student(StudentRegistration),
    Business(BusinessRegistration),
}
