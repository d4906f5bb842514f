pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod session;
pub mod utils;

pub use crate::adapters::api_client::{ApiTicketSource, LocalTicketSource};
pub use crate::config::{CliConfig, PortalConfig};
pub use crate::core::seating::{classify_block, classify_floor, Block, Floor, HallLocation};
pub use crate::session::SessionContext;
pub use crate::utils::error::{PortalError, Result};
