//! # Healthcare Exercise
//!
//! Seeds patients and prescriptions into string-keyed repositories,
//! builds the per-patient prescription index, prints all patients and
//! answers one interactive prescription lookup.

use std::io::{self, BufRead, Write};

use chrono::{Duration, Utc};

use tally_core::health::{Gender, Patient, Prescription, PrescriptionIndex};
use tally_core::repository::Repository;

fn seed() -> Result<
    (Repository<String, Patient>, Repository<String, Prescription>),
    Box<dyn std::error::Error>,
> {
    let mut patients = Repository::new();
    patients.add(Patient::new("D12", "Kofi Annie", 50, Gender::Male))?;
    patients.add(Patient::new("S67", "Albert Tetteh", 25, Gender::Male))?;
    patients.add(Patient::new("F12", "Emelia Tetteh", 19, Gender::Female))?;

    let today = Utc::now().date_naive();
    let mut prescriptions = Repository::new();
    prescriptions.add(Prescription::new("P1", "D12", "Paracetamol", today))?;
    prescriptions.add(Prescription::new(
        "P2",
        "D12",
        "Vitamin D",
        today - Duration::days(2),
    ))?;
    prescriptions.add(Prescription::new(
        "P3",
        "S67",
        "Ibuprofen",
        today - Duration::days(1),
    ))?;
    prescriptions.add(Prescription::new("P4", "F12", "Vitamin C", today))?;
    prescriptions.add(Prescription::new("P5", "S67", "Gebedol", today))?;

    Ok((patients, prescriptions))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tally_exercises::init_tracing();

    let (patients, prescriptions) = seed()?;
    let index = PrescriptionIndex::build(&prescriptions.all());

    println!("All Patients:");
    for patient in patients.iter() {
        println!(
            "ID: {}, Name: {}, Age: {}, Gender: {}",
            patient.id, patient.name, patient.age, patient.gender
        );
    }

    print!("\nEnter Patient ID to view prescriptions: ");
    io::stdout().flush()?;
    let mut patient_id = String::new();
    io::stdin().lock().read_line(&mut patient_id)?;
    let patient_id = patient_id.trim();

    println!("\nPrescriptions for Patient ID {patient_id}:");
    let found = index.for_patient(patient_id);
    if found.is_empty() {
        println!("No prescriptions found.");
        return Ok(());
    }
    for prescription in found {
        println!(
            "Prescription ID: {}, Medication: {}, Date Issued: {}",
            prescription.id, prescription.medication, prescription.issued_on
        );
    }

    Ok(())
}
