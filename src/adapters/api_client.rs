//! Hall ticket sources.
//!
//! `ApiTicketSource` talks to the exam office backend; `LocalTicketSource`
//! serves the same tickets from datasets already on disk, which is how the
//! CLI works without a running server.

use crate::core::schedule::build_hall_ticket;
use crate::domain::model::{HallTicket, ScheduleRow, StudentRecord};
use crate::domain::ports::TicketSource;
use crate::utils::error::{PortalError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Error body shape returned by the backend on failures.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

pub struct ApiTicketSource {
    client: Client,
    base_url: String,
}

impl ApiTicketSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TicketSource for ApiTicketSource {
    async fn fetch_hall_ticket(&self, register_no: &str) -> Result<HallTicket> {
        let url = format!("{}/api/hall-ticket/", self.base_url);
        tracing::debug!("fetching hall ticket from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("register_no", register_no)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("hall ticket API response status: {}", status);

        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| "Failed to fetch hall ticket data".to_string());
            return Err(PortalError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let ticket = response.json::<HallTicket>().await?;
        Ok(ticket)
    }
}

/// Ticket source backed by local datasets: a schedule table plus the
/// seating records that supply student names.
pub struct LocalTicketSource {
    schedule: Vec<ScheduleRow>,
    students: Vec<StudentRecord>,
}

impl LocalTicketSource {
    pub fn new(schedule: Vec<ScheduleRow>, students: Vec<StudentRecord>) -> Self {
        Self { schedule, students }
    }

    fn student_name(&self, register_no: &str) -> String {
        self.students
            .iter()
            .find(|s| s.register_no.eq_ignore_ascii_case(register_no))
            .map(|s| s.name.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TicketSource for LocalTicketSource {
    async fn fetch_hall_ticket(&self, register_no: &str) -> Result<HallTicket> {
        build_hall_ticket(&self.student_name(register_no), register_no, &self.schedule)
    }
}
