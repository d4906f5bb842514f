//! Hall location lookup.
//!
//! Hall numbers encode their physical location by magnitude: three-digit
//! halls (100-999) sit in the Academic Block with the hundreds digit
//! selecting the floor, four-digit halls (1000+) sit in the Innovation
//! Block with the thousands digit selecting the floor. Anything else is
//! reported as `Unknown` rather than an error; seating data comes from
//! messy spreadsheet exports and a bad hall number must not break the page.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Academic,
    Innovation,
    Unknown,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Block::Academic => "Academic Block",
            Block::Innovation => "Innovation Block (IT Tower)",
            Block::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Floor {
    Ground,
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Unknown,
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Floor::Ground => "Ground Floor",
            Floor::First => "First Floor",
            Floor::Second => "Second Floor",
            Floor::Third => "Third Floor",
            Floor::Fourth => "Fourth Floor",
            Floor::Fifth => "Fifth Floor",
            Floor::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Inclusive hall-number range mapped to a floor.
type FloorRange = (i64, i64, Floor);

/// Academic Block floors, keyed by the hundreds digit.
const ACADEMIC_FLOORS: &[FloorRange] = &[
    (100, 199, Floor::Ground),
    (200, 299, Floor::First),
    (300, 399, Floor::Second),
    (400, 499, Floor::Third),
    (500, 599, Floor::Fourth),
    (600, 699, Floor::Fifth),
];

/// Innovation Block floors, keyed by the thousands digit. This is the
/// full five-bucket table; halls 1000-2999 are valid first/second floor
/// venues even though older seating sheets only listed 3000 upwards.
const INNOVATION_FLOORS: &[FloorRange] = &[
    (1000, 1999, Floor::First),
    (2000, 2999, Floor::Second),
    (3000, 3999, Floor::Third),
    (4000, 4999, Floor::Fourth),
    (5000, 5999, Floor::Fifth),
];

/// Parses the leading integer of a hall number string.
///
/// Matches the lenient parsing the portal has always used: leading
/// whitespace and an optional sign are accepted, digits are consumed until
/// the first non-digit, the rest is ignored. `"104A"` parses as 104; a
/// string with no leading digits parses as nothing.
fn parse_hall_number(hall_no: &str) -> Option<i64> {
    let trimmed = hall_no.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs; anything
    // that large classifies as Unknown either way.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

fn lookup_floor(table: &[FloorRange], hall_num: i64) -> Floor {
    table
        .iter()
        .find(|(min, max, _)| (*min..=*max).contains(&hall_num))
        .map(|(_, _, floor)| *floor)
        .unwrap_or(Floor::Unknown)
}

/// Determines the block for a hall number. Total: any string input yields
/// a `Block`, never a panic.
pub fn classify_block(hall_no: &str) -> Block {
    match parse_hall_number(hall_no) {
        Some(n) if (100..=999).contains(&n) => Block::Academic,
        Some(n) if n >= 1000 => Block::Innovation,
        _ => Block::Unknown,
    }
}

/// Determines the floor for a hall number within a given block.
///
/// The block is caller-supplied rather than re-derived, so the floor
/// tables can be exercised independently of block classification. Passing
/// a block inconsistent with the hall number answers for the block that
/// was given, not the number.
pub fn classify_floor(hall_no: &str, block: Block) -> Floor {
    let Some(hall_num) = parse_hall_number(hall_no) else {
        return Floor::Unknown;
    };

    match block {
        Block::Academic => lookup_floor(ACADEMIC_FLOORS, hall_num),
        Block::Innovation => lookup_floor(INNOVATION_FLOORS, hall_num),
        Block::Unknown => Floor::Unknown,
    }
}

/// Block and floor for one hall number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallLocation {
    pub block: Block,
    pub floor: Floor,
}

impl HallLocation {
    /// Classifies block first, then the floor under that block.
    pub fn classify(hall_no: &str) -> Self {
        let block = classify_block(hall_no);
        let floor = classify_floor(hall_no, block);
        Self { block, floor }
    }
}
