//! Department identity.
//!
//! Departments show up under three spellings that must all agree: the
//! three-letter code embedded in register numbers (711725UAM132), the
//! canonical short code used by schedule datasets (AI&ML), and the full
//! programme name printed on hall tickets. This module is the single
//! source for all three.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "AI&ML")]
    AiMl,
    #[serde(rename = "AI&DS")]
    AiDs,
    #[serde(rename = "CSE")]
    Cse,
    #[serde(rename = "ECE")]
    Ece,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "MECH")]
    Mech,
    #[serde(rename = "R&A")]
    RoboticsAutomation,
    #[serde(rename = "CSBS")]
    Csbs,
    #[serde(rename = "CYS")]
    Cys,
}

impl Department {
    pub const ALL: [Department; 9] = [
        Department::AiMl,
        Department::AiDs,
        Department::Cse,
        Department::Ece,
        Department::It,
        Department::Mech,
        Department::RoboticsAutomation,
        Department::Csbs,
        Department::Cys,
    ];

    /// Canonical short code, as stored in schedule datasets.
    pub fn code(&self) -> &'static str {
        match self {
            Department::AiMl => "AI&ML",
            Department::AiDs => "AI&DS",
            Department::Cse => "CSE",
            Department::Ece => "ECE",
            Department::It => "IT",
            Department::Mech => "MECH",
            Department::RoboticsAutomation => "R&A",
            Department::Csbs => "CSBS",
            Department::Cys => "CYS",
        }
    }

    /// Full programme name printed on the hall ticket.
    pub fn full_name(&self) -> &'static str {
        match self {
            Department::AiMl => {
                "B.E. Computer Science and Engineering\n(Artificial Intelligence and Machine Learning)"
            }
            Department::AiDs => {
                "B.E. Computer Science and Engineering\n(Artificial Intelligence and Data Science)"
            }
            Department::Cse => "B.E. Computer Science and Engineering",
            Department::Ece => "B.E. Electronics and Communication Engineering",
            Department::It => "B.Tech. Information Technology",
            Department::Mech => "B.E. Mechanical Engineering",
            Department::RoboticsAutomation => "B.E. Robotics and Automation",
            Department::Csbs => "B.E. Computer Science and Business Systems",
            Department::Cys => "B.E. Cyber Security",
        }
    }

    /// Base form with separators stripped, used for normalization.
    fn base_form(&self) -> &'static str {
        match self {
            Department::AiMl => "AIML",
            Department::AiDs => "AIDS",
            Department::Cse => "CSE",
            Department::Ece => "ECE",
            Department::It => "IT",
            Department::Mech => "MECH",
            Department::RoboticsAutomation => "RA",
            Department::Csbs => "CSBS",
            Department::Cys => "CYS",
        }
    }

    /// Register-number code fragment (UAM in 711725UAM132 and so on).
    fn register_code(&self) -> &'static str {
        match self {
            Department::AiMl => "UAM",
            Department::AiDs => "UAD",
            Department::Cse => "UCS",
            Department::Ece => "UEC",
            Department::Mech => "UME",
            Department::It => "UIT",
            Department::RoboticsAutomation => "URA",
            Department::Csbs => "UCB",
            Department::Cys => "UCY",
        }
    }

    /// Normalizes a free-form department label to a canonical department.
    ///
    /// Handles casing, spacing and separator variations: `AIML`, `AI ML`,
    /// `AI-ML`, `AI_ML` and `ai&ml` all resolve to AI&ML. Returns `None`
    /// when the label matches no known department.
    pub fn normalize(name: &str) -> Option<Department> {
        let normalized = name.to_uppercase();
        let base: String = normalized
            .chars()
            .filter(|c| !matches!(c, '&' | '-' | '_' | ' '))
            .collect();
        let base = base.trim();

        Department::ALL
            .into_iter()
            .find(|dept| dept.base_form() == base)
    }

    /// Extracts the department from a register number by searching for a
    /// known three-letter code anywhere in it. Year-independent: works for
    /// any intake as long as the code convention holds.
    pub fn from_register_no(register_no: &str) -> Option<Department> {
        let upper = register_no.to_uppercase();
        Department::ALL
            .into_iter()
            .find(|dept| upper.contains(dept.register_code()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
