//! Catalog fixtures shared by unit tests.

use std::sync::Arc;

use crate::models::dto::{CourseDto, DegreeDto, LessonDto, OccupationDto, RoomDto, ShiftDto, SpaceDto};
use crate::models::{Course, Degree, Shift};

pub fn degree_dto(id: &str, acronym: &str) -> DegreeDto {
    DegreeDto {
        id: id.to_string(),
        name: format!("Degree {acronym}"),
        acronym: acronym.to_string(),
        academic_terms: vec![],
    }
}

pub fn degree(id: &str, acronym: &str) -> Degree {
    degree_dto(id, acronym).into()
}

pub fn course_dto(id: &str, acronym: &str, name: &str) -> CourseDto {
    CourseDto {
        id: id.to_string(),
        acronym: acronym.to_string(),
        name: name.to_string(),
        academic_term: "2º Semestre 2020/2021".to_string(),
        url: format!("https://example.com/{acronym}"),
    }
}

pub fn course(id: &str, acronym: &str, degree_acronym: &str) -> Arc<Course> {
    Arc::new(Course::new(
        course_dto(id, acronym, &format!("Course {acronym}")),
        &degree(&format!("{degree_acronym}-id"), degree_acronym),
    ))
}

/// `lessons` are `(start, end)` timestamps, all in room GA1.
pub fn shift_dto(name: &str, lessons: &[(&str, &str)]) -> ShiftDto {
    let room = RoomDto {
        id: String::new(),
        name: "GA1".to_string(),
        description: String::new(),
        kind: "ROOM".to_string(),
        top_level_space: Some(SpaceDto {
            id: String::new(),
            name: "Alameda".to_string(),
            kind: "CAMPUS".to_string(),
        }),
    };

    ShiftDto {
        name: name.to_string(),
        lessons: lessons
            .iter()
            .map(|(start, end)| LessonDto {
                start: start.to_string(),
                end: end.to_string(),
                room: Some(room.clone()),
            })
            .collect(),
        occupation: OccupationDto { current: 0, max: 30 },
        rooms: vec![room],
        types: vec![],
    }
}

pub fn shift(course: &Arc<Course>, name: &str, lessons: &[(&str, &str)]) -> Shift {
    Shift::new(&shift_dto(name, lessons), Arc::clone(course)).unwrap()
}
