//! Generation spec builder.
//!
//! Turns one division's requirements plus the globally occupied resources
//! into a self-contained specification for the candidate oracle. Pure
//! function of its inputs; retry feedback is appended afterwards via
//! [`GenerationSpec::push_violations`] / [`GenerationSpec::push_parse_error`].

use ttf_core::{Division, Slot, TimetableRequest};

use crate::validator::Violation;

/// System prompt sent with every oracle call.
pub const ORACLE_SYSTEM_PROMPT: &str = "You are a highly intelligent timetable generation \
     engine. Your goal is to create a conflict-free academic timetable based on the provided \
     constraints. Output ONLY valid JSON.";

/// The opaque payload handed to the candidate oracle for one division.
#[derive(Debug, Clone)]
pub struct GenerationSpec {
    pub division: String,
    prompt: String,
}

impl GenerationSpec {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Fold validator violations into the spec so the next attempt can avoid
    /// repeating a rejected assignment.
    pub fn push_violations(&mut self, violations: &[Violation]) {
        self.prompt
            .push_str("\n\nCRITICAL: The previous generation was INVALID. Violations:\n");
        for violation in violations {
            self.prompt.push_str(&format!("- {violation}\n"));
        }
        self.prompt
            .push_str("\nTry again using UNUSED time slots.\n");
    }

    /// Fold a parse failure into the spec.
    pub fn push_parse_error(&mut self, detail: &str) {
        self.prompt.push_str(&format!(
            "\n\nJSON Parsing Error: {detail}. Output valid JSON only.\n"
        ));
    }

    /// Fold an oracle transport/backend failure note into the spec.
    pub fn push_oracle_error(&mut self, detail: &str) {
        self.prompt.push_str(&format!(
            "\n\nNOTE: The previous attempt failed before producing output ({detail}).\n"
        ));
    }
}

/// Build the spec for `division`, treating `committed` (slots already
/// accepted for earlier divisions) as hard resource constraints.
pub fn build_generation_spec(
    request: &TimetableRequest,
    division: &Division,
    committed: &[Slot],
) -> GenerationSpec {
    let requirements = division
        .subjects
        .iter()
        .map(|s| format!("  - {} ({}): {} periods", s.code, s.kind, s.periods_per_week))
        .collect::<Vec<_>>()
        .join("\n");

    let occupied = render_occupied(committed);

    let lecturers =
        serde_json::to_string_pretty(&request.lecturers).unwrap_or_else(|_| "[]".to_string());
    let classrooms =
        serde_json::to_string_pretty(&request.classrooms).unwrap_or_else(|_| "[]".to_string());

    let mut prompt = format!(
        "Generate a conflict-free timetable for DIVISION {name}.\n\
         \n\
         METADATA:\n\
         - Institution: {institution}\n\
         - Department: {department}\n\
         - Semester: {semester}\n\
         - Working Days: {days}\n\
         - Periods per Day: {periods}\n\
         \n\
         GLOBAL RESOURCES:\n\
         - Lecturers: {lecturers}\n\
         - Classrooms: {classrooms}\n\
         \n\
         REQUIREMENTS FOR DIVISION {name}:\n\
         {requirements}\n\
         \n\
         {occupied}\n\
         \n\
         CONSTRAINTS:\n\
         1. NO DOUBLE BOOKING: You MUST NOT assign a Lecturer or Room listed in \
         \"ALREADY OCCUPIED RESOURCES\" for that specific Day/Period.\n\
         2. Lecturer Availability: Respect the `available_days` for each lecturer.\n\
         3. Labs: Must be consecutive periods (e.g. Period 1-2, 3-4) if possible.\n\
         4. Subject Load: You MUST assign exactly the number of periods specified for each \
         subject for this division.\n\
         5. Output: Generate slots ONLY for Division {name}.\n\
         6. DISTRIBUTION: SPREAD subjects across the week. Do NOT schedule more than 2 periods \
         of the same Theory subject on the same day unless unavoidable.\n\
         \n\
         OUTPUT FORMAT (JSON ONLY, NO EXPLANATION):\n\
         {{\n\
             \"slots\": [\n\
                 {{ \"division\": \"{name}\", \"day\": \"Monday\", \"period\": 1, \
         \"subject\": \"SUB1\", \"lecturer\": \"L1\", \"room\": \"R1\", \"type\": \"Theory\" }}\n\
             ]\n\
         }}\n",
        name = division.name,
        institution = request.metadata.institution_name,
        department = request.metadata.department,
        semester = request.metadata.semester,
        days = request.metadata.working_days.join(", "),
        periods = request.metadata.periods_per_day,
        lecturers = lecturers,
        classrooms = classrooms,
        requirements = requirements,
        occupied = occupied,
    );

    if let Some(constraints) = &request.constraints {
        if !constraints.is_empty() {
            prompt.push_str("\nADDITIONAL USER CONSTRAINTS:\n");
            for constraint in constraints {
                prompt.push_str(&format!("- {constraint}\n"));
            }
        }
    }

    GenerationSpec {
        division: division.name.clone(),
        prompt,
    }
}

/// List which lecturers and rooms are busy at each (day, period), in
/// committed-slot encounter order.
fn render_occupied(committed: &[Slot]) -> String {
    if committed.is_empty() {
        return "(No other divisions scheduled yet - all resources free)".to_string();
    }

    let mut keys: Vec<(String, u32)> = Vec::new();
    let mut blocked: std::collections::HashMap<(String, u32), Vec<String>> =
        std::collections::HashMap::new();
    for slot in committed {
        let key = (slot.day.clone(), slot.period);
        let entry = blocked.entry(key.clone()).or_insert_with(|| {
            keys.push(key);
            Vec::new()
        });
        entry.push(format!("Lecturer {} (Div {})", slot.lecturer, slot.division));
        entry.push(format!("Room {} (Div {})", slot.room, slot.division));
    }

    let mut out = String::from("ALREADY OCCUPIED RESOURCES (HARD CONSTRAINTS):\n");
    for key in &keys {
        let conflicts = &blocked[key];
        out.push_str(&format!(
            "- {} Period {}: {}\n",
            key.0,
            key.1,
            conflicts.join(", ")
        ));
    }
    out
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
