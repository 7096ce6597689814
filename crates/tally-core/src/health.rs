//! # Healthcare Entities and Prescription Grouping
//!
//! Patients and prescriptions are stored in string-keyed repositories;
//! the [`PrescriptionIndex`] is derived once from the full prescription
//! list and answers per-patient lookups without failing on unknown ids.
//!
//! ## Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Prescriptions: [P1→D12, P2→D12, P3→S67, P4→F12, P5→S67]            │
//! │       │                                                             │
//! │       ▼  group by patient_id, keep relative order per group         │
//! │                                                                     │
//! │  D12 → [P1, P2]                                                     │
//! │  F12 → [P4]                                                         │
//! │  S67 → [P3, P5]                                                     │
//! │                                                                     │
//! │  Unknown id → []   (empty, never an error)                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::repository::Keyed;

// =============================================================================
// Patient
// =============================================================================

/// Patient gender as recorded at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// An immutable patient record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

impl Patient {
    pub fn new(id: &str, name: &str, age: u32, gender: Gender) -> Self {
        Patient {
            id: id.to_string(),
            name: name.to_string(),
            age,
            gender,
        }
    }
}

impl Keyed<String> for Patient {
    fn key(&self) -> String {
        self.id.clone()
    }
}

// =============================================================================
// Prescription
// =============================================================================

/// An immutable prescription record referencing a patient by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    /// Foreign key into the patient repository.
    pub patient_id: String,
    pub medication: String,
    pub issued_on: NaiveDate,
}

impl Prescription {
    pub fn new(id: &str, patient_id: &str, medication: &str, issued_on: NaiveDate) -> Self {
        Prescription {
            id: id.to_string(),
            patient_id: patient_id.to_string(),
            medication: medication.to_string(),
            issued_on,
        }
    }
}

impl Keyed<String> for Prescription {
    fn key(&self) -> String {
        self.id.clone()
    }
}

// =============================================================================
// Prescription Index
// =============================================================================

/// Patient-id → ordered prescription list, built once by a grouping pass.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionIndex {
    by_patient: BTreeMap<String, Vec<Prescription>>,
}

impl PrescriptionIndex {
    /// Groups prescriptions by patient id, preserving each
    /// prescription's relative order within its group.
    pub fn build(prescriptions: &[Prescription]) -> Self {
        let mut by_patient: BTreeMap<String, Vec<Prescription>> = BTreeMap::new();
        for prescription in prescriptions {
            by_patient
                .entry(prescription.patient_id.clone())
                .or_default()
                .push(prescription.clone());
        }
        PrescriptionIndex { by_patient }
    }

    /// Prescriptions for one patient; empty for an unknown id.
    pub fn for_patient(&self, patient_id: &str) -> &[Prescription] {
        self.by_patient
            .get(patient_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of patients with at least one prescription.
    pub fn patient_count(&self) -> usize {
        self.by_patient.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn sample() -> Vec<Prescription> {
        vec![
            Prescription::new("P1", "D12", "Paracetamol", day(30)),
            Prescription::new("P2", "D12", "Vitamin D", day(28)),
            Prescription::new("P3", "S67", "Ibuprofen", day(29)),
            Prescription::new("P4", "F12", "Vitamin C", day(30)),
            Prescription::new("P5", "S67", "Gebedol", day(30)),
        ]
    }

    #[test]
    fn test_groups_by_patient_preserving_order() {
        let index = PrescriptionIndex::build(&sample());

        let d12: Vec<&str> = index
            .for_patient("D12")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(d12, vec!["P1", "P2"]);

        let s67: Vec<&str> = index
            .for_patient("S67")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(s67, vec!["P3", "P5"]);

        assert_eq!(index.patient_count(), 3);
    }

    #[test]
    fn test_unknown_patient_yields_empty_slice() {
        let index = PrescriptionIndex::build(&sample());
        assert!(index.for_patient("Z99").is_empty());
    }

    #[test]
    fn test_empty_input_builds_empty_index() {
        let index = PrescriptionIndex::build(&[]);
        assert_eq!(index.patient_count(), 0);
        assert!(index.for_patient("D12").is_empty());
    }
}
