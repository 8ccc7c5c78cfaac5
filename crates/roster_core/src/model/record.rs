//! Record and column types.
//!
//! # Responsibility
//! - Define the canonical four-field student record.
//! - Provide column-addressed accessors used by search, sort and the editor form.
//!
//! # Invariants
//! - `RecordId` is a session-scoped surrogate key; it is never written to disk.
//! - Two records may hold identical field values; identity is the id alone.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable in-memory identifier for one record.
///
/// Assigned on add and on load, so it survives re-sorting and filtering of
/// the view but not a process restart.
pub type RecordId = Uuid;

/// One of the four record columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordColumn {
    Name,
    Department,
    Year,
    Course,
}

impl RecordColumn {
    /// All columns in file/display order.
    pub const ALL: [RecordColumn; 4] = [
        RecordColumn::Name,
        RecordColumn::Department,
        RecordColumn::Year,
        RecordColumn::Course,
    ];

    /// Stable lowercase column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Department => "department",
            Self::Year => "year",
            Self::Course => "course",
        }
    }

    /// Human-readable column header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Department => "Department",
            Self::Year => "Year",
            Self::Course => "Course",
        }
    }
}

impl Display for RecordColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a column name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColumn(pub String);

impl Display for UnknownColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown column `{}`; expected name|department|year|course",
            self.0
        )
    }
}

impl Error for UnknownColumn {}

impl FromStr for RecordColumn {
    type Err = UnknownColumn;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "department" | "dept" => Ok(Self::Department),
            "year" => Ok(Self::Year),
            "course" => Ok(Self::Course),
            _ => Err(UnknownColumn(value.to_string())),
        }
    }
}

/// The four text values of a record.
///
/// Also serves as the editor's input form, so it has no id and may hold
/// empty or untrimmed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    #[serde(rename = "dept")]
    pub department: String,
    pub year: String,
    pub course: String,
}

impl RecordFields {
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        year: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            year: year.into(),
            course: course.into(),
        }
    }

    /// Returns the value of one column.
    pub fn get(&self, column: RecordColumn) -> &str {
        match column {
            RecordColumn::Name => &self.name,
            RecordColumn::Department => &self.department,
            RecordColumn::Year => &self.year,
            RecordColumn::Course => &self.course,
        }
    }

    /// Overwrites one column.
    pub fn set(&mut self, column: RecordColumn, value: impl Into<String>) {
        let slot = match column {
            RecordColumn::Name => &mut self.name,
            RecordColumn::Department => &mut self.department,
            RecordColumn::Year => &mut self.year,
            RecordColumn::Course => &mut self.course,
        };
        *slot = value.into();
    }

    /// Returns a copy with every value trimmed.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.name.trim(),
            self.department.trim(),
            self.year.trim(),
            self.course.trim(),
        )
    }

    /// Returns the first column that is empty after trimming.
    pub fn first_empty(&self) -> Option<RecordColumn> {
        RecordColumn::ALL
            .into_iter()
            .find(|column| self.get(*column).trim().is_empty())
    }

    /// Iterates values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        RecordColumn::ALL.into_iter().map(|column| self.get(column))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A student record held by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: RecordFields,
}

impl Record {
    /// Creates a record with a freshly generated id.
    pub fn new(fields: RecordFields) -> Self {
        Self::with_id(Uuid::new_v4(), fields)
    }

    pub fn with_id(id: RecordId, fields: RecordFields) -> Self {
        Self { id, fields }
    }

    /// Returns the value of one column.
    pub fn value(&self, column: RecordColumn) -> &str {
        self.fields.get(column)
    }
}
