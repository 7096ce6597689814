//! # Student Grading
//!
//! Parsing and grading for the school exercise.
//!
//! ## Record Format
//! One comma-separated record per line, exactly three fields:
//! ```text
//! 101, Kwame Mensah, 84
//! ```
//! Surrounding whitespace on the name is trimmed. A wrong field count or
//! a non-numeric id is a [`ParseError::MissingField`]; a non-numeric
//! score is a [`ParseError::InvalidScore`].
//!
//! ## Grade Bands
//! ```text
//! score ≥ 80 → A    score ≥ 70 → B    score ≥ 60 → C
//! score ≥ 50 → D    otherwise  → F
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

// =============================================================================
// Grade
// =============================================================================

/// Letter grade derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{letter}")
    }
}

// =============================================================================
// Student
// =============================================================================

/// A student result record. The grade is derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub full_name: String,
    pub score: i32,
}

impl Student {
    pub fn new(id: u32, full_name: &str, score: i32) -> Self {
        Student {
            id,
            full_name: full_name.to_string(),
            score,
        }
    }

    /// Letter grade for this student's score.
    pub fn grade(&self) -> Grade {
        match self.score {
            s if s >= 80 => Grade::A,
            s if s >= 70 => Grade::B,
            s if s >= 60 => Grade::C,
            s if s >= 50 => Grade::D,
            _ => Grade::F,
        }
    }

    /// One formatted report line, shape pinned by the report file format:
    /// `<name> (ID: <id>): Score = <score>, Grade = <grade>`
    pub fn report_line(&self) -> String {
        format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}

// =============================================================================
// Record Parsing
// =============================================================================

/// Parses one `id, name, score` record line into a [`Student`].
pub fn parse_record(line: &str) -> ParseResult<Student> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(ParseError::MissingField {
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    }

    let id: u32 = fields[0]
        .trim()
        .parse()
        .map_err(|_| ParseError::MissingField {
            reason: format!("invalid student id '{}'", fields[0].trim()),
        })?;

    let full_name = fields[1].trim();

    let score: i32 = fields[2]
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidScore {
            value: fields[2].trim().to_string(),
        })?;

    Ok(Student::new(id, full_name, score))
}

// =============================================================================
// Unit Tests
// =============================================================================
