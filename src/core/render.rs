//! Plain-text rendering of the two student-facing documents: the printable
//! hall ticket and the hall seating card.

use crate::core::seating::HallLocation;
use crate::domain::model::{HallTicket, StudentRecord};

const INSTITUTE_HEADER: &[&str] = &[
    "KGiSL Institute of Technology",
    "Affiliated to Anna University, Approved by AICTE, Recognised by UGC,",
    "Accredited by NAAC & NBA",
    "365, KGiSL Campus, Thudiyalur Road, Saravanampatti, Coimbatore-641035",
    "",
    "OFFICE OF THE CONTROLLER OF EXAMINATIONS",
];

const TICKET_TITLE: &str = "HALL TICKET FOR THE END SEMESTER EXAMINATIONS - NOV/DEC 2025";

const INSTRUCTIONS: &[&str] = &[
    "1. In case of candidates who have been Readmitted/Transferred, this Hall Ticket is valid only for the current semester examinations.",
    "2. Any discrepancy in the Name / Date of Birth and missing of Photograph or incorrect Photograph, if any is to be updated to the COE office for the correction.",
    "3. Instructions printed overleaf are to be followed strictly.",
];

fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Renders a hall ticket as printable text, one section per semester.
pub fn render_hall_ticket(ticket: &HallTicket) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (semester, exams) in &ticket.semesters {
        lines.push(rule(80));
        lines.extend(INSTITUTE_HEADER.iter().map(|s| s.to_string()));
        lines.push(String::new());
        lines.push(TICKET_TITLE.to_string());
        lines.push(rule(80));
        lines.push(format!("NAME OF THE CANDIDATE: {}", ticket.student.name));
        lines.push(format!("REGISTER NUMBER: {}", ticket.student.register_no));
        lines.push(format!(
            "DEPARTMENT: {}",
            ticket.student.department.full_name().replace('\n', " ")
        ));
        lines.push(format!("SEMESTER: {}", semester));
        lines.push(String::new());
        lines.push(format!(
            "{:<5} {:<12} {:<40} {:<12} {:<7}",
            "S.No", "Course Code", "Course Title", "Exam Date", "Session"
        ));
        for (index, exam) in exams.iter().enumerate() {
            lines.push(format!(
                "{:<5} {:<12} {:<40} {:<12} {:<7}",
                index + 1,
                exam.course_code,
                exam.course_title,
                exam.exam_date.format("%d-%m-%Y"),
                exam.session
            ));
        }
        lines.push(String::new());
        lines.push("SESSION TIMINGS".to_string());
        lines.push("FN : 09:00 AM TO 12:00 PM".to_string());
        lines.push("AN : 01:00 PM TO 04:00 PM".to_string());
        lines.push(String::new());
        lines.extend(INSTRUCTIONS.iter().map(|s| s.to_string()));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Renders the hall seating card, including the block and floor derived
/// from the hall number.
pub fn render_seating(student: &StudentRecord) -> String {
    let location = HallLocation::classify(&student.hall_no);

    let mut lines: Vec<String> = Vec::new();
    lines.push(rule(60));
    lines.push("HALL SEATING DETAILS".to_string());
    lines.push(rule(60));
    lines.push(format!("Register number: {}", student.register_no));
    lines.push(format!("Name:            {}", student.name));
    lines.push(format!("Course code:     {}", student.course_code));
    lines.push(format!("Course Title:    {}", student.course_title));
    lines.push(format!(
        "Exam date:       {}",
        student
            .exam_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    ));
    lines.push(format!(
        "Session:         {}",
        student.session.map(|s| s.to_string()).unwrap_or_default()
    ));
    lines.push(format!("Hall No:         {}", student.hall_no));
    lines.push(format!("Seat No.:        {}", student.seat_no));
    lines.push(format!("Block:           {}", location.block));
    lines.push(format!("Floor:           {}", location.floor));
    lines.push(rule(60));
    lines.join("\n")
}
