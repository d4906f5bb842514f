//! Session bootstrap.
//!
//! The portal persists a role marker and a student payload at login; every
//! page used to re-read and re-parse that blob untyped. Here the stored
//! payload is parsed once into a validated [`SessionContext`] and handed
//! to whatever needs it. Missing or malformed fields fail fast with the
//! offending field named, instead of surfacing as blank UI fields later.

use crate::domain::model::StudentRecord;
use crate::utils::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub role: Role,
    pub student: StudentRecord,
}

/// On-disk session file shape: the role marker and student payload that
/// the portal stores at login.
#[derive(Debug, Deserialize)]
struct StoredSession {
    role: String,
    student: serde_json::Value,
}

fn session_error(field: &str, reason: impl Into<String>) -> PortalError {
    PortalError::Session {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(session_error(field, "required field is empty"));
    }
    Ok(())
}

impl SessionContext {
    /// Builds a student session from the stored role marker and student
    /// payload. The role must be `student` and the payload must carry a
    /// register number, name and hall number.
    pub fn from_json(role: &str, payload: &str) -> Result<Self> {
        if role.trim() != "student" {
            return Err(session_error(
                "role",
                format!("expected role 'student', found '{}'", role.trim()),
            ));
        }

        let student: StudentRecord = serde_json::from_str(payload)
            .map_err(|e| session_error("student", format!("payload is not valid: {}", e)))?;

        require_non_empty("register_no", &student.register_no)?;
        require_non_empty("name", &student.name)?;
        require_non_empty("hall_no", &student.hall_no)?;

        Ok(Self {
            role: Role::Student,
            student,
        })
    }

    /// Loads a session from a stored session file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let stored: StoredSession = serde_json::from_str(&content)
            .map_err(|e| session_error("session", format!("session file is not valid: {}", e)))?;
        Self::from_json(&stored.role, &stored.student.to_string())
    }
}
