use crate::domain::model::HallTicket;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of hall ticket data for a register number. The live portal
/// talks to the exam office API; offline runs serve the same tickets from
/// local datasets.
#[async_trait]
pub trait TicketSource: Send + Sync {
    async fn fetch_hall_ticket(&self, register_no: &str) -> Result<HallTicket>;
}
