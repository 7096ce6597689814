//! # Student Record Files and Reports
//!
//! Line-oriented I/O for the school exercise: read `id, name, score`
//! records, write one report line per student, and materialize the
//! sample input file when none exists.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use tally_core::grading::{parse_record, Student};

use crate::error::{StoreError, StoreResult};

/// The sample records the original exercise ships with.
const SAMPLE_RECORDS: &[&str] = &[
    "101, Kwame Mensah, 84",
    "102, Abena Asante, 72",
    "103, Kojo Owusu, 65",
    "104, Akosua Boateng, 58",
    "105, Yaw Agyeman, 45",
];

/// Reads and parses every record line of a student file.
///
/// Empty lines are skipped; the first bad record aborts the read and
/// reports its 1-based line number.
pub fn read_students(path: &Path) -> StoreResult<Vec<Student>> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::io(path, source))?;

    let mut students = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let student = parse_record(line).map_err(|source| StoreError::Record {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        students.push(student);
    }

    debug!(path = %path.display(), count = students.len(), "student records read");
    Ok(students)
}

/// Writes one report line per student:
/// `<name> (ID: <id>): Score = <score>, Grade = <grade>`
pub fn write_report(students: &[Student], path: &Path) -> StoreResult<()> {
    let mut file = fs::File::create(path).map_err(|source| StoreError::io(path, source))?;
    for student in students {
        writeln!(file, "{}", student.report_line())
            .map_err(|source| StoreError::io(path, source))?;
    }
    debug!(path = %path.display(), count = students.len(), "report written");
    Ok(())
}

/// Creates the sample input file used when no student file exists yet.
pub fn write_sample_records(path: &Path) -> StoreResult<()> {
    let content = SAMPLE_RECORDS.join("\n");
    fs::write(path, content + "\n").map_err(|source| StoreError::io(path, source))
}

// =============================================================================
// Unit Tests
// =============================================================================
