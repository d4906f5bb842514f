pub mod department;
pub mod render;
pub mod schedule;
pub mod seating;

pub use crate::domain::model::{Exam, HallTicket, ScheduleRow, StudentRecord};
pub use crate::domain::ports::TicketSource;
pub use crate::utils::error::Result;
