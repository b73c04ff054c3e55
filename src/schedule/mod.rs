//! Schedule identifiers: the compact form of a shift selection.
//!
//! A selection is written as `<courseId>~<shiftId>~<shiftId>…` per course,
//! with courses joined by `;`. Ids are not escaped, so `~` and `;` cannot
//! appear inside course or shift ids.
//!
//! - `shorten_descriptions` / `degrees_acronyms`: encode a selection
//! - `parse_descriptions` / `parse_degrees`: split an identifier back up
//! - `resolve`: turn parsed ids into shifts from a live catalog

pub mod link;
pub mod selection;

use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::models::Shift;

pub use link::{SharedSchedule, share_link};
pub use selection::{Conflict, ShiftSelection};

const COURSE_SEPARATOR: &str = ";";
const SHIFT_SEPARATOR: &str = "~";

/// Shift ids chosen within one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSelection {
    pub course_id: String,
    pub shift_ids: Vec<String>,
}

/// Shifts recovered from an identifier, plus the ids the catalog lacked.
#[derive(Debug, Default)]
pub struct Resolved {
    pub shifts: Vec<Shift>,
    /// `(course_id, shift_id)` pairs with no matching shift
    pub missing: Vec<(String, String)>,
}

/// Encode shifts as a schedule identifier.
///
/// Courses appear in the order their first shift does. An empty slice gives
/// an empty string.
pub fn shorten_descriptions(shifts: &[Shift]) -> String {
    let mut order: Vec<(String, Vec<String>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (course, shift) in shifts.iter().map(Shift::full_id) {
        match index.get(&course) {
            Some(&i) => order[i].1.push(shift),
            None => {
                index.insert(course.clone(), order.len());
                order.push((course, vec![shift]));
            }
        }
    }

    order
        .into_iter()
        .map(|(course, shifts)| {
            std::iter::once(course)
                .chain(shifts)
                .collect::<Vec<_>>()
                .join(SHIFT_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join(COURSE_SEPARATOR)
}

/// Distinct degree acronyms of the shifts' courses, `;`-joined.
///
/// Returns `None` when there is nothing to join.
pub fn degrees_acronyms(shifts: &[Shift]) -> Option<String> {
    let mut acronyms: Vec<&str> = Vec::new();
    for shift in shifts {
        let acronym = shift.course.degree_acronym.as_str();
        if !acronyms.contains(&acronym) {
            acronyms.push(acronym);
        }
    }

    if acronyms.is_empty() {
        None
    } else {
        Some(acronyms.join(COURSE_SEPARATOR))
    }
}

/// Split a schedule identifier into per-course shift ids.
///
/// Empty segments (e.g. a trailing `;`) are ignored. A segment without a
/// course id or without any shift id is rejected.
pub fn parse_descriptions(value: &str) -> Result<Vec<CourseSelection>> {
    let mut selections = Vec::new();

    for segment in value.trim().split(COURSE_SEPARATOR) {
        if segment.is_empty() {
            continue;
        }

        let mut parts = segment.split(SHIFT_SEPARATOR);
        let course_id = parts.next().unwrap_or_default();
        if course_id.is_empty() {
            return Err(AppError::ScheduleId(format!(
                "missing course id in '{segment}'"
            )));
        }

        let shift_ids: Vec<String> = parts.map(str::to_string).collect();
        if shift_ids.is_empty() || shift_ids.iter().any(String::is_empty) {
            return Err(AppError::ScheduleId(format!(
                "missing shift id in '{segment}'"
            )));
        }

        selections.push(CourseSelection {
            course_id: course_id.to_string(),
            shift_ids,
        });
    }

    Ok(selections)
}

/// Split a `;`-joined list of degree acronyms.
pub fn parse_degrees(value: &str) -> Vec<String> {
    value
        .split(COURSE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Look the parsed ids up in `catalog`.
///
/// Shifts come back in identifier order. Ids without a match end up in
/// `missing`; what to tell the user about them is the caller's business.
pub fn resolve(selections: &[CourseSelection], catalog: &[Shift]) -> Resolved {
    // First catalog match wins when two shifts share an id.
    let mut by_id: HashMap<(&str, &str), &Shift> = HashMap::new();
    for shift in catalog {
        by_id
            .entry((shift.course_id.as_str(), shift.shift_id.as_str()))
            .or_insert(shift);
    }

    let mut resolved = Resolved::default();
    for selection in selections {
        for shift_id in &selection.shift_ids {
            match by_id.get(&(selection.course_id.as_str(), shift_id.as_str())) {
                Some(shift) => resolved.shifts.push((*shift).clone()),
                None => resolved
                    .missing
                    .push((selection.course_id.clone(), shift_id.clone())),
            }
        }
    }

    if !resolved.missing.is_empty() {
        log::debug!(
            "{} shift(s) of the schedule identifier were not found in the catalog",
            resolved.missing.len()
        );
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{course, shift};
    use crate::models::Comparable;

    #[test]
    fn test_shorten_empty() {
        assert_eq!(shorten_descriptions(&[]), "");
    }

    #[test]
    fn test_shorten_groups_by_course() {
        let c1 = course("C1", "CDI-I", "LEIC-A");
        let shifts = vec![shift(&c1, "CDI1PB01", &[]), shift(&c1, "CDI1L02", &[])];
        assert_eq!(shorten_descriptions(&shifts), "C1~PB01~L02");
    }

    #[test]
    fn test_shorten_keeps_first_seen_course_order() {
        let c1 = course("C1", "CDI-I", "LEIC-A");
        let c2 = course("C2", "AL", "LEIC-A");
        let shifts = vec![
            shift(&c2, "AL1T01", &[]),
            shift(&c1, "CDI1T01", &[]),
            shift(&c2, "AL1PB03", &[]),
        ];
        assert_eq!(shorten_descriptions(&shifts), "C2~T01~PB03;C1~T01");
    }

    #[test]
    fn test_degrees_acronyms() {
        assert_eq!(degrees_acronyms(&[]), None);

        let a1 = course("C1", "X", "A");
        let a2 = course("C2", "Y", "A");
        let b = course("C3", "Z", "B");
        let shifts = vec![
            shift(&a1, "X1T01", &[]),
            shift(&a2, "Y1T01", &[]),
            shift(&b, "Z1T01", &[]),
        ];
        assert_eq!(degrees_acronyms(&shifts).as_deref(), Some("A;B"));
    }

    #[test]
    fn test_parse_descriptions() {
        let parsed = parse_descriptions("C2~T01~PB03;C1~T01;").unwrap();
        assert_eq!(
            parsed,
            vec![
                CourseSelection {
                    course_id: "C2".to_string(),
                    shift_ids: vec!["T01".to_string(), "PB03".to_string()],
                },
                CourseSelection {
                    course_id: "C1".to_string(),
                    shift_ids: vec!["T01".to_string()],
                },
            ]
        );
        assert!(parse_descriptions("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_descriptions_rejects_malformed() {
        assert!(parse_descriptions("~T01").is_err());
        assert!(parse_descriptions("C1").is_err());
        assert!(parse_descriptions("C1~~T01").is_err());
    }

    #[test]
    fn test_parse_degrees() {
        assert_eq!(parse_degrees("LEIC-A;MEEC"), vec!["LEIC-A", "MEEC"]);
        assert!(parse_degrees("").is_empty());
    }

    #[test]
    fn test_round_trip_through_catalog() {
        let c1 = course("C1", "CDI-I", "LEIC-A");
        let c2 = course("C2", "AL", "MEEC");
        let catalog = vec![
            shift(&c1, "CDI1T01", &[]),
            shift(&c1, "CDI1PB01", &[]),
            shift(&c1, "CDI1PB02", &[]),
            shift(&c2, "AL1T01", &[]),
            shift(&c2, "AL1L05", &[]),
        ];
        let selected = vec![catalog[0].clone(), catalog[2].clone(), catalog[4].clone()];

        let encoded = shorten_descriptions(&selected);
        let resolved = resolve(&parse_descriptions(&encoded).unwrap(), &catalog);

        assert!(resolved.missing.is_empty());
        assert_eq!(resolved.shifts.len(), selected.len());
        for (got, want) in resolved.shifts.iter().zip(&selected) {
            assert!(got.equals(want), "{} != {}", got.name, want.name);
        }
    }

    #[test]
    fn test_resolve_prefers_first_shift_with_same_id() {
        let c1 = course("C1", "CDI-I", "LEIC-A");
        let catalog = vec![shift(&c1, "CDI1PB01", &[]), shift(&c1, "CDI2PB01", &[])];
        let selected = vec![catalog[0].clone()];

        let encoded = shorten_descriptions(&selected);
        assert_eq!(encoded, "C1~PB01");

        let resolved = resolve(&parse_descriptions(&encoded).unwrap(), &catalog);
        assert_eq!(resolved.shifts.len(), 1);
        assert!(resolved.shifts[0].equals(&selected[0]));
    }

    #[test]
    fn test_resolve_reports_missing() {
        let c1 = course("C1", "CDI-I", "LEIC-A");
        let catalog = vec![shift(&c1, "CDI1T01", &[])];
        let resolved = resolve(&parse_descriptions("C1~T01~PB09;C9~T01").unwrap(), &catalog);

        assert_eq!(resolved.shifts.len(), 1);
        assert_eq!(
            resolved.missing,
            vec![
                ("C1".to_string(), "PB09".to_string()),
                ("C9".to_string(), "T01".to_string()),
            ]
        );
    }
}
