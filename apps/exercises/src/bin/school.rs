//! # School Exercise
//!
//! Reads `id, name, score` records from a text file, derives letter
//! grades and writes a one-line-per-student report. When the input file
//! is missing, the sample records are materialized first. A bad record
//! or unreadable input ends the run early without producing a report.

use std::env;
use std::path::PathBuf;

use tracing::{error, info};

use tally_store::report::{read_students, write_report, write_sample_records};

const DEFAULT_INPUT: &str = "students.txt";
const DEFAULT_OUTPUT: &str = "report.txt";

fn main() {
    tally_exercises::init_tracing();

    let mut args = env::args().skip(1);
    let input: PathBuf = args.next().unwrap_or_else(|| DEFAULT_INPUT.into()).into();
    let output: PathBuf = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.into()).into();

    if !input.exists() {
        info!(path = %input.display(), "no student file found, creating sample records");
        if let Err(err) = write_sample_records(&input) {
            error!(%err, "could not create sample student file");
            return;
        }
    }

    let students = match read_students(&input) {
        Ok(students) => students,
        Err(err) => {
            error!(%err, "could not read student records, no report produced");
            return;
        }
    };

    if let Err(err) = write_report(&students, &output) {
        error!(%err, "could not write report");
        return;
    }

    println!("Report generated successfully for {} students.", students.len());
    println!("Report saved to: {}", output.display());
}
