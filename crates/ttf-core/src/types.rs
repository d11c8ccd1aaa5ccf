use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Subject delivery kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectKind {
    Theory,
    Lab,
}

impl SubjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theory => "Theory",
            Self::Lab => "Lab",
        }
    }
}

impl std::fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Room kind (ordinary classroom or lab)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    Classroom,
    Lab,
}

/// Institution-level settings shared by every division in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub institution_name: String,
    pub department: String,
    pub semester: i32,
    pub academic_year: String,
    /// Ordered, duplicate-free. Slot days must come from this list.
    #[serde(default = "default_working_days")]
    pub working_days: Vec<String>,
    /// Periods are numbered 1..=periods_per_day.
    #[serde(default = "default_periods_per_day")]
    pub periods_per_day: u32,
    #[serde(default = "default_breaks")]
    pub breaks: Vec<String>,
}

fn default_working_days() -> Vec<String> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_periods_per_day() -> u32 {
    7
}

fn default_breaks() -> Vec<String> {
    vec!["Lunch".to_string()]
}

/// A lecturer in the global resource pool. Immutable for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecturer {
    pub id: String,
    pub name: String,
    /// Subject codes this lecturer can teach.
    pub subjects: Vec<String>,
    #[serde(default = "default_max_periods_per_day")]
    pub max_periods_per_day: u32,
    #[serde(default = "default_working_days")]
    pub available_days: Vec<String>,
}

fn default_max_periods_per_day() -> u32 {
    4
}

/// A room in the global resource pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    pub id: String,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub kind: RoomKind,
}

/// One subject requirement within a division.
///
/// Two divisions may declare the same code with different lecturers or
/// weekly loads; the code is only unique within its division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SubjectKind,
    pub periods_per_week: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_lecturer_id: Option<String>,
}

/// A cohort of students scheduled against the shared resource pools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    pub name: String,
    #[serde(default = "default_strength")]
    pub strength: u32,
    pub subjects: Vec<Subject>,
}

fn default_strength() -> u32 {
    60
}

/// One scheduled period: subject + lecturer + room at (day, period) for a
/// division. The atomic unit of a schedule.
///
/// `kind` is a free-form string on the wire; only the exact value `"Lab"`
/// exempts a slot from the per-day distribution cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub division: String,
    pub day: String,
    pub period: u32,
    pub subject: String,
    pub lecturer: String,
    pub room: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Slot {
    pub fn is_lab(&self) -> bool {
        self.kind == "Lab"
    }
}

/// Inbound scheduling request: metadata, ordered divisions, and the global
/// lecturer/classroom pools shared by all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableRequest {
    pub metadata: Metadata,
    pub divisions: Vec<Division>,
    pub lecturers: Vec<Lecturer>,
    pub classrooms: Vec<Classroom>,
    /// Free-text constraints appended verbatim to every generation spec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
}

impl TimetableRequest {
    pub fn division(&self, name: &str) -> Option<&Division> {
        self.divisions.iter().find(|d| d.name == name)
    }
}

/// A finished, accepted timetable: the request context plus the full
/// committed slot list across all divisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    pub timetable_id: String,
    pub metadata: Metadata,
    pub divisions: Vec<Division>,
    pub lecturers: Vec<Lecturer>,
    pub classrooms: Vec<Classroom>,
    pub slots: Vec<Slot>,
}

impl Timetable {
    /// Rebuild the request this timetable was generated from, optionally
    /// with extra free-text constraints (regeneration entry point).
    pub fn to_request(&self, extra_constraints: Vec<String>) -> TimetableRequest {
        TimetableRequest {
            metadata: self.metadata.clone(),
            divisions: self.divisions.clone(),
            lecturers: self.lecturers.clone(),
            classrooms: self.classrooms.clone(),
            constraints: if extra_constraints.is_empty() {
                None
            } else {
                Some(extra_constraints)
            },
        }
    }
}

/// Output format for CLI commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
