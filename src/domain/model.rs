use crate::core::department::Department;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Exam session of day. Datasets and the API use the FN/AN shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExamSession {
    #[serde(rename = "FN", alias = "fn", alias = "Forenoon", alias = "FORENOON")]
    Forenoon,
    #[serde(rename = "AN", alias = "an", alias = "Afternoon", alias = "AFTERNOON")]
    Afternoon,
}

impl ExamSession {
    pub fn code(&self) -> &'static str {
        match self {
            ExamSession::Forenoon => "FN",
            ExamSession::Afternoon => "AN",
        }
    }

    /// Wall-clock timing printed in the SESSION TIMINGS box.
    pub fn timing(&self) -> &'static str {
        match self {
            ExamSession::Forenoon => "09:00 AM TO 12:00 PM",
            ExamSession::Afternoon => "01:00 PM TO 04:00 PM",
        }
    }
}

impl fmt::Display for ExamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ExamSession {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FN" | "FORENOON" => Ok(ExamSession::Forenoon),
            "AN" | "AFTERNOON" => Ok(ExamSession::Afternoon),
            other => Err(format!("unknown exam session '{}'", other)),
        }
    }
}

/// One student's seating assignment for a single exam, as delivered by the
/// seating dataset. Hall and seat numbers stay strings: they are numeric
/// by convention only, and lenient classification handles the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub register_no: String,
    pub name: String,
    #[serde(default)]
    pub course_code: String,
    #[serde(default)]
    pub course_title: String,
    #[serde(default)]
    pub exam_date: Option<NaiveDate>,
    #[serde(default)]
    pub session: Option<ExamSession>,
    pub hall_no: String,
    #[serde(default)]
    pub seat_no: String,
}

/// One scheduled exam on a hall ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub course_code: String,
    pub course_title: String,
    pub exam_date: NaiveDate,
    pub session: ExamSession,
}

/// One row of the hall-ticket schedule dataset: a department's exam in a
/// given semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub department: Department,
    pub semester: String,
    pub course_code: String,
    pub course_title: String,
    pub exam_date: NaiveDate,
    pub session: ExamSession,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStudent {
    pub name: String,
    pub register_no: String,
    pub department: Department,
}

/// A student's hall ticket: identity plus exams grouped by semester.
/// The map is ordered so semesters render in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallTicket {
    pub student: TicketStudent,
    pub semesters: BTreeMap<String, Vec<Exam>>,
}

/// Strips Excel float residue from numeric cells: spreadsheets round-trip
/// hall and seat numbers through floats, so "201.0" arrives where "201"
/// was meant. Values that are not a float-formatted integer pass through
/// untouched.
pub fn clean_numeric_cell(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.contains('.') {
        if let Ok(parsed) = trimmed.parse::<f64>() {
            if parsed.fract() == 0.0 && parsed.abs() < i64::MAX as f64 {
                return (parsed as i64).to_string();
            }
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_numeric_cell() {
        assert_eq!(clean_numeric_cell("201.0"), "201");
        assert_eq!(clean_numeric_cell(" 45.0 "), "45");
        assert_eq!(clean_numeric_cell("201"), "201");
        assert_eq!(clean_numeric_cell("A12"), "A12");
        assert_eq!(clean_numeric_cell("12.5"), "12.5");
        assert_eq!(clean_numeric_cell(""), "");
    }

    #[test]
    fn test_exam_session_parse() {
        assert_eq!("FN".parse::<ExamSession>(), Ok(ExamSession::Forenoon));
        assert_eq!(" an ".parse::<ExamSession>(), Ok(ExamSession::Afternoon));
        assert_eq!(
            "Forenoon".parse::<ExamSession>(),
            Ok(ExamSession::Forenoon)
        );
        assert!("noon".parse::<ExamSession>().is_err());
    }

    #[test]
    fn test_exam_session_serde_aliases() {
        let session: ExamSession = serde_json::from_str("\"FN\"").unwrap();
        assert_eq!(session, ExamSession::Forenoon);
        let session: ExamSession = serde_json::from_str("\"Afternoon\"").unwrap();
        assert_eq!(session, ExamSession::Afternoon);
        assert_eq!(serde_json::to_string(&ExamSession::Forenoon).unwrap(), "\"FN\"");
    }

    #[test]
    fn test_student_record_deserializes_stored_payload() {
        // Shape of the payload the portal stores at login.
        let payload = r#"{
            "register_no": "711725UAM132",
            "name": "Student One",
            "course_code": "CS3591",
            "course_title": "Computer Networks",
            "exam_date": "2025-11-20",
            "session": "FN",
            "hall_no": "104",
            "seat_no": "12"
        }"#;
        let record: StudentRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(record.register_no, "711725UAM132");
        assert_eq!(record.session, Some(ExamSession::Forenoon));
        assert_eq!(
            record.exam_date,
            Some(NaiveDate::from_ymd_opt(2025, 11, 20).unwrap())
        );
    }
}
