//! Hall ticket assembly.
//!
//! The department is derived from the register number, the schedule is
//! filtered to that department and grouped by semester, sorted the way
//! the office publishes it (semester, then date, then session).

use crate::core::department::Department;
use crate::domain::model::{Exam, HallTicket, ScheduleRow, TicketStudent};
use crate::utils::error::{PortalError, Result};
use std::collections::BTreeMap;

/// Builds the hall ticket for one student from the schedule dataset.
pub fn build_hall_ticket(
    name: &str,
    register_no: &str,
    rows: &[ScheduleRow],
) -> Result<HallTicket> {
    let department = Department::from_register_no(register_no).ok_or_else(|| {
        PortalError::UnknownDepartment {
            register_no: register_no.to_string(),
        }
    })?;

    let mut dept_rows: Vec<&ScheduleRow> = rows
        .iter()
        .filter(|row| row.department == department)
        .collect();

    if dept_rows.is_empty() {
        return Err(PortalError::NoScheduleData {
            department: department.code().to_string(),
        });
    }

    dept_rows.sort_by(|a, b| {
        (&a.semester, a.exam_date, a.session).cmp(&(&b.semester, b.exam_date, b.session))
    });

    let mut semesters: BTreeMap<String, Vec<Exam>> = BTreeMap::new();
    for row in dept_rows {
        semesters
            .entry(row.semester.clone())
            .or_default()
            .push(Exam {
                course_code: row.course_code.clone(),
                course_title: row.course_title.clone(),
                exam_date: row.exam_date,
                session: row.session,
            });
    }

    Ok(HallTicket {
        student: TicketStudent {
            name: name.to_string(),
            register_no: register_no.to_string(),
            department,
        },
        semesters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ExamSession;
    use chrono::NaiveDate;

    fn row(
        department: Department,
        semester: &str,
        code: &str,
        date: (i32, u32, u32),
        session: ExamSession,
    ) -> ScheduleRow {
        ScheduleRow {
            department,
            semester: semester.to_string(),
            course_code: code.to_string(),
            course_title: format!("Course {}", code),
            exam_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            session,
        }
    }

    #[test]
    fn test_groups_by_semester_and_sorts_by_date() {
        let rows = vec![
            row(Department::AiMl, "5", "CS3591", (2025, 11, 25), ExamSession::Forenoon),
            row(Department::AiMl, "5", "CS3501", (2025, 11, 20), ExamSession::Forenoon),
            row(Department::AiMl, "3", "MA3354", (2025, 11, 18), ExamSession::Afternoon),
            row(Department::Cse, "5", "CS3551", (2025, 11, 21), ExamSession::Forenoon),
        ];

        let ticket = build_hall_ticket("Student One", "711725UAM132", &rows).unwrap();

        assert_eq!(ticket.student.department, Department::AiMl);
        assert_eq!(ticket.semesters.len(), 2);

        let sem5 = &ticket.semesters["5"];
        assert_eq!(sem5.len(), 2);
        assert_eq!(sem5[0].course_code, "CS3501");
        assert_eq!(sem5[1].course_code, "CS3591");

        // The CSE row must not leak into an AI&ML ticket.
        assert!(ticket.semesters["5"]
            .iter()
            .all(|exam| exam.course_code != "CS3551"));
    }

    #[test]
    fn test_same_day_sessions_order_fn_before_an() {
        let rows = vec![
            row(Department::Cse, "5", "CS3552", (2025, 11, 20), ExamSession::Afternoon),
            row(Department::Cse, "5", "CS3551", (2025, 11, 20), ExamSession::Forenoon),
        ];

        let ticket = build_hall_ticket("Student Two", "711623UCS089", &rows).unwrap();
        let sem5 = &ticket.semesters["5"];
        assert_eq!(sem5[0].session, ExamSession::Forenoon);
        assert_eq!(sem5[1].session, ExamSession::Afternoon);
    }

    #[test]
    fn test_unknown_department_register_no() {
        let rows = vec![row(
            Department::AiMl,
            "5",
            "CS3591",
            (2025, 11, 20),
            ExamSession::Forenoon,
        )];
        let err = build_hall_ticket("Student", "711725XXX999", &rows).unwrap_err();
        assert!(matches!(err, PortalError::UnknownDepartment { .. }));
    }

    #[test]
    fn test_no_schedule_rows_for_department() {
        let rows = vec![row(
            Department::Cse,
            "5",
            "CS3551",
            (2025, 11, 20),
            ExamSession::Forenoon,
        )];
        let err = build_hall_ticket("Student", "711725UAM132", &rows).unwrap_err();
        match err {
            PortalError::NoScheduleData { department } => assert_eq!(department, "AI&ML"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
