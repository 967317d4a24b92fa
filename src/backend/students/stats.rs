//! Dashboard statistics.
//!
//! `attendancePercentage` keeps the wire shape clients already parse: the
//! number `0` when a student has no attendance records, otherwise the
//! percentage rounded to two decimals and rendered as a string (`"66.67"`).

use serde::{Serialize, Serializer};

use crate::backend::store::{Attendance, AttendanceStatus, Marks};

/// Share of attendance records marked present
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttendancePercentage {
    /// No attendance recorded yet
    NoRecords,
    /// Percentage in 0..=100
    Rate(f64),
}

impl AttendancePercentage {
    pub fn from_records(records: &[Attendance]) -> Self {
        if records.is_empty() {
            return Self::NoRecords;
        }
        let present = records
            .iter()
            .filter(|record| record.status == AttendanceStatus::Present)
            .count();
        Self::Rate(present as f64 / records.len() as f64 * 100.0)
    }
}

impl Serialize for AttendancePercentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NoRecords => serializer.serialize_u8(0),
            Self::Rate(rate) => serializer.serialize_str(&format!("{rate:.2}")),
        }
    }
}

/// Sums of obtained and maximum marks across all of a student's records
pub fn marks_totals(marks: &[Marks]) -> (i64, i64) {
    marks.iter().fold((0, 0), |(obtained, max), record| {
        (
            obtained + i64::from(record.marks_obtained),
            max + i64::from(record.total_marks),
        )
    })
}
