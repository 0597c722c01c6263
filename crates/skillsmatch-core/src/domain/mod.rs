//! Domain entities - the marketplace objects exchanged with the backend.

mod business;
mod job;
mod nullable;
mod session;
mod student;

pub use business::Business;
pub use job::{Job, JobStatus};
pub use session::{Session, UserType};
pub use student::Student;
