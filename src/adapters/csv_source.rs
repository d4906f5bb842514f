//! CSV dataset ingestion.
//!
//! The exam office exports come out of spreadsheets with no two files
//! agreeing on header spelling, so headers are normalized through a fuzzy
//! map before rows are read. Rows that cannot be salvaged are skipped with
//! a warning rather than failing the whole upload; a missing register
//! number column is the one hard error, since nothing can be keyed
//! without it.

use crate::core::department::Department;
use crate::domain::model::{clean_numeric_cell, ExamSession, ScheduleRow, StudentRecord};
use crate::utils::error::{PortalError, Result};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use std::io::Read;

/// Canonical field names the rest of the crate works with.
const REGISTER_NO: &str = "register_no";
const NAME: &str = "name";
const COURSE_CODE: &str = "course_code";
const COURSE_TITLE: &str = "course_title";
const EXAM_DATE: &str = "exam_date";
const SESSION: &str = "session";
const HALL_NO: &str = "hall_no";
const SEAT_NO: &str = "seat_no";
const SEMESTER: &str = "semester";
const DEPARTMENT: &str = "department";

/// Maps a raw header to its canonical field name, tolerating the spelling
/// variations seen in real exports (RegisterNo, reg_no, Roll No, Exam Hall
/// Number, ...). Unknown headers map to themselves lowercased.
fn normalize_header(raw: &str) -> String {
    let header: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect();

    let canonical = if header.contains("register") || header == "regno" || header.contains("rollno") || header == "roll" {
        REGISTER_NO
    } else if (header.contains("student") && header.contains("name")) || header == "name" || header == "studentname" {
        NAME
    } else if header.contains("coursecode") || header.contains("subjectcode") || header.contains("subcode") {
        COURSE_CODE
    } else if header.contains("coursetitle") || header.contains("subjecttitle") || header.contains("subjectname") {
        COURSE_TITLE
    } else if header.contains("hall") || header.contains("room") {
        HALL_NO
    } else if header.contains("seat") {
        SEAT_NO
    } else if header.contains("session") {
        SESSION
    } else if header.contains("semester") || header == "sem" {
        SEMESTER
    } else if header.contains("department") || header == "dept" {
        DEPARTMENT
    } else if header.contains("examdate") || header == "date" {
        EXAM_DATE
    } else {
        return header;
    };
    canonical.to_string()
}

/// Parses an exam date leniently: ISO, Indian display formats, or an
/// Excel serial number (days since 1899-12-30, the quirk Excel inherited
/// from Lotus).
pub fn parse_exam_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    if let Ok(serial) = value.parse::<f64>() {
        if serial > 0.0 && serial < 200_000.0 {
            let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
            return epoch.checked_add_signed(Duration::days(serial as i64));
        }
    }

    None
}

struct CsvTable {
    columns: HashMap<String, usize>,
    rows: Vec<csv::StringRecord>,
}

impl CsvTable {
    fn read<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut columns = HashMap::new();
        for (index, header) in csv_reader.headers()?.iter().enumerate() {
            // First match wins when two headers normalize identically.
            columns.entry(normalize_header(header)).or_insert(index);
        }

        let rows = csv_reader.records().collect::<std::result::Result<_, _>>()?;
        Ok(Self { columns, rows })
    }

    fn require(&self, column: &str) -> Result<()> {
        if self.columns.contains_key(column) {
            Ok(())
        } else {
            Err(PortalError::MissingColumn {
                column: column.to_string(),
            })
        }
    }

    fn field<'a>(&self, row: &'a csv::StringRecord, column: &str) -> &'a str {
        self.columns
            .get(column)
            .and_then(|&index| row.get(index))
            .unwrap_or("")
    }
}

/// Reads a seating dataset: one row per student with their assigned hall
/// and seat. Rows without a register number are dropped, hall and seat
/// numbers are cleaned of spreadsheet float residue.
pub fn read_seating_csv<R: Read>(reader: R) -> Result<Vec<StudentRecord>> {
    let table = CsvTable::read(reader)?;
    table.require(REGISTER_NO)?;

    let mut records = Vec::new();
    for row in &table.rows {
        let register_no = table.field(row, REGISTER_NO).to_string();
        if register_no.is_empty() {
            continue;
        }

        let session_raw = table.field(row, SESSION);
        let session = match session_raw.parse::<ExamSession>() {
            Ok(session) => Some(session),
            Err(_) if session_raw.is_empty() => None,
            Err(reason) => {
                tracing::warn!("row {}: {}, keeping record without session", register_no, reason);
                None
            }
        };

        records.push(StudentRecord {
            register_no,
            name: table.field(row, NAME).to_string(),
            course_code: table.field(row, COURSE_CODE).to_string(),
            course_title: table.field(row, COURSE_TITLE).to_string(),
            exam_date: parse_exam_date(table.field(row, EXAM_DATE)),
            session,
            hall_no: clean_numeric_cell(table.field(row, HALL_NO)),
            seat_no: clean_numeric_cell(table.field(row, SEAT_NO)),
        });
    }

    tracing::info!("seating dataset: {} student records", records.len());
    Ok(records)
}

/// Reads a hall-ticket schedule dataset: one row per department exam.
/// Rows with an unknown department, bad date or bad session are skipped
/// with a warning, matching how partial uploads have always been handled.
pub fn read_schedule_csv<R: Read>(reader: R) -> Result<Vec<ScheduleRow>> {
    let table = CsvTable::read(reader)?;
    for column in [DEPARTMENT, SEMESTER, COURSE_CODE, EXAM_DATE, SESSION] {
        table.require(column)?;
    }

    let mut rows = Vec::new();
    let mut skipped = 0_usize;
    for record in &table.rows {
        let semester = table.field(record, SEMESTER).to_string();
        let course_code = table.field(record, COURSE_CODE).to_string();
        if semester.is_empty() || course_code.is_empty() {
            continue;
        }

        let dept_raw = table.field(record, DEPARTMENT);
        let Some(department) = Department::normalize(dept_raw) else {
            tracing::warn!("unknown department '{}', skipping row", dept_raw);
            skipped += 1;
            continue;
        };

        let date_raw = table.field(record, EXAM_DATE);
        let Some(exam_date) = parse_exam_date(date_raw) else {
            tracing::warn!("unparsable exam date '{}', skipping row", date_raw);
            skipped += 1;
            continue;
        };

        let session_raw = table.field(record, SESSION);
        let Ok(session) = session_raw.parse::<ExamSession>() else {
            tracing::warn!("unknown session '{}', skipping row", session_raw);
            skipped += 1;
            continue;
        };

        rows.push(ScheduleRow {
            department,
            semester,
            course_code,
            course_title: table.field(record, COURSE_TITLE).to_string(),
            exam_date,
            session,
        });
    }

    tracing::info!(
        "schedule dataset: {} exam rows ({} skipped)",
        rows.len(),
        skipped
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_variants() {
        assert_eq!(normalize_header("Register No"), "register_no");
        assert_eq!(normalize_header("REGISTERNO"), "register_no");
        assert_eq!(normalize_header("reg_no"), "register_no");
        assert_eq!(normalize_header("Roll No"), "register_no");
        assert_eq!(normalize_header("Student Name"), "name");
        assert_eq!(normalize_header("Course Code"), "course_code");
        assert_eq!(normalize_header("Subject Code"), "course_code");
        assert_eq!(normalize_header("Exam Hall Number"), "hall_no");
        assert_eq!(normalize_header("Room"), "hall_no");
        assert_eq!(normalize_header("Exam Seat Number"), "seat_no");
        assert_eq!(normalize_header("Exam Session"), "session");
        assert_eq!(normalize_header("Exam Date"), "exam_date");
        assert_eq!(normalize_header("Dept"), "department");
        assert_eq!(normalize_header("Sem"), "semester");
        // Unknown headers pass through lowercased.
        assert_eq!(normalize_header("Photo"), "photo");
    }

    #[test]
    fn test_parse_exam_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        assert_eq!(parse_exam_date("2025-11-20"), Some(expected));
        assert_eq!(parse_exam_date("20-11-2025"), Some(expected));
        assert_eq!(parse_exam_date("20/11/2025"), Some(expected));
        assert_eq!(parse_exam_date("nonsense"), None);
        assert_eq!(parse_exam_date(""), None);
    }

    #[test]
    fn test_parse_exam_date_excel_serial() {
        // 2025-11-20 is 45981 days after the 1899-12-30 Excel epoch.
        assert_eq!(
            parse_exam_date("45981"),
            NaiveDate::from_ymd_opt(2025, 11, 20)
        );
    }

    #[test]
    fn test_read_seating_csv() {
        let data = "\
Register No,Student Name,Course Code,Course Title,Exam Date,Exam Session,Exam Hall Number,Exam Seat Number
711725UAM132,Student One,CS3591,Computer Networks,2025-11-20,FN,104.0,12.0
,Ghost Row,CS3591,Computer Networks,2025-11-20,FN,104,13
711623UCS089,Student Two,CS3551,Distributed Computing,2025-11-21,AN,3001,7
";
        let records = read_seating_csv(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].register_no, "711725UAM132");
        assert_eq!(records[0].hall_no, "104");
        assert_eq!(records[0].seat_no, "12");
        assert_eq!(records[0].session, Some(ExamSession::Forenoon));
        assert_eq!(records[1].hall_no, "3001");
    }

    #[test]
    fn test_read_seating_csv_requires_register_no_column() {
        let data = "Name,Hall\nStudent One,104\n";
        let err = read_seating_csv(data.as_bytes()).unwrap_err();
        match err {
            PortalError::MissingColumn { column } => assert_eq!(column, "register_no"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_read_schedule_csv_skips_bad_rows() {
        let data = "\
Department,Semester,Course Code,Course Title,Exam Date,Session
AI-ML,5,CS3591,Computer Networks,2025-11-20,FN
NOTADEPT,5,XX0000,Bogus,2025-11-20,FN
CSE,5,CS3551,Distributed Computing,not-a-date,AN
cse,5,CS3552,Cloud Computing,21-11-2025,an
";
        let rows = read_schedule_csv(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].department, Department::AiMl);
        assert_eq!(rows[1].department, Department::Cse);
        assert_eq!(rows[1].session, ExamSession::Afternoon);
        assert_eq!(
            rows[1].exam_date,
            NaiveDate::from_ymd_opt(2025, 11, 21).unwrap()
        );
    }

    #[test]
    fn test_read_schedule_csv_missing_column() {
        let data = "Department,Course Code,Exam Date,Session\nCSE,CS3551,2025-11-20,FN\n";
        let err = read_schedule_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PortalError::MissingColumn { .. }));
    }
}
