// src/schedule/selection.rs

//! The user's chosen shifts and the clashes between them.

use crate::models::{Comparable, Lesson, Shift, to_unique};
use crate::schedule::{degrees_acronyms, shorten_descriptions};

/// Two lessons of different shifts that occupy the same time slot.
#[derive(Debug, Clone)]
pub struct Conflict {
    pub first: Lesson,
    pub second: Lesson,
}

/// Shifts picked to build a timetable.
#[derive(Debug, Clone, Default)]
pub struct ShiftSelection {
    shifts: Vec<Shift>,
}

impl ShiftSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from shifts read back from an identifier.
    ///
    /// Unlike [`ShiftSelection::toggle`], nothing is deselected or replaced:
    /// repeats and further shifts of an already chosen course and type are
    /// skipped with a warning, keeping the first one.
    pub fn from_shifts(shifts: Vec<Shift>) -> Self {
        let mut selection = Self::new();
        for shift in shifts {
            if let Some(kept) = selection
                .shifts
                .iter()
                .find(|s| s.equals(&shift) || Shift::is_same_course_and_type(s, &shift))
            {
                log::warn!(
                    "Skipping shift {} of {}: {} is already selected",
                    shift.name,
                    shift.acronym,
                    kept.name
                );
                continue;
            }
            selection.shifts.push(shift);
        }
        selection
    }

    /// Select `shift`, or deselect it when it is already selected.
    ///
    /// Selecting replaces any other shift of the same course and type, so
    /// at most one "PB" shift per course is kept.
    /// Returns whether the shift is selected afterwards.
    pub fn toggle(&mut self, shift: Shift) -> bool {
        if let Some(pos) = self.shifts.iter().position(|s| s.equals(&shift)) {
            self.shifts.remove(pos);
            return false;
        }

        self.shifts
            .retain(|existing| !Shift::is_same_course_and_type(existing, &shift));
        self.shifts.push(shift);
        true
    }

    /// Drop every shift of a course.
    pub fn remove_course(&mut self, course_id: &str) {
        self.shifts.retain(|s| s.course_id != course_id);
    }

    pub fn clear(&mut self) {
        self.shifts.clear();
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Weekly lessons of every selected shift.
    pub fn lessons(&self) -> Vec<Lesson> {
        let all: Vec<Lesson> = self
            .shifts
            .iter()
            .flat_map(|s| s.lessons.iter().cloned())
            .collect();
        to_unique(&all)
    }

    /// Every pair of overlapping lessons that belong to different shifts.
    ///
    /// Lessons whose times cannot be parsed are left out.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let lessons = self.lessons();
        let mut conflicts = Vec::new();

        for (i, first) in lessons.iter().enumerate() {
            for second in &lessons[i + 1..] {
                if first.shift_name == second.shift_name && first.acronym == second.acronym {
                    continue;
                }
                match first.overlaps(second) {
                    Ok(true) => conflicts.push(Conflict {
                        first: first.clone(),
                        second: second.clone(),
                    }),
                    Ok(false) => {}
                    Err(e) => log::debug!("Skipping conflict check: {}", e),
                }
            }
        }

        conflicts
    }

    /// Schedule identifier of the current selection.
    pub fn description(&self) -> String {
        shorten_descriptions(&self.shifts)
    }

    pub fn degrees(&self) -> Option<String> {
        degrees_acronyms(&self.shifts)
    }
}
