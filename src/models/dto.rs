//! Raw response shapes of the course catalog API.
//!
//! These mirror the JSON returned by the catalog and are only read by the
//! domain constructors; nothing downstream keeps them around.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DegreeDto {
    pub id: String,
    pub name: String,
    pub acronym: String,
    #[serde(default, rename = "academicTerms")]
    pub academic_terms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseDto {
    pub id: String,
    pub acronym: String,
    pub name: String,
    #[serde(default, rename = "academicTerm")]
    pub academic_term: String,
    #[serde(default)]
    pub url: String,
}

/// Response of `courses/{id}/schedule`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleDto {
    #[serde(default)]
    pub shifts: Vec<ShiftDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShiftDto {
    pub name: String,
    #[serde(default)]
    pub lessons: Vec<LessonDto>,
    #[serde(default)]
    pub occupation: OccupationDto,
    #[serde(default)]
    pub rooms: Vec<RoomDto>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LessonDto {
    /// `"YYYY-MM-DD HH:MM[:SS]"`
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub room: Option<RoomDto>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct OccupationDto {
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub max: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoomDto {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, rename = "topLevelSpace")]
    pub top_level_space: Option<SpaceDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpaceDto {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_schedule() {
        let json = r#"{
            "courseLoads": [],
            "shifts": [{
                "name": "CDI1PB01",
                "types": ["PROBLEMS"],
                "occupation": {"current": 20, "max": 30},
                "rooms": [{
                    "id": "2448131361",
                    "name": "GA1",
                    "description": "Anfiteatro",
                    "type": "ROOM",
                    "capacity": {"exam": 40, "normal": 80},
                    "topLevelSpace": {"id": "2448131360", "name": "Alameda", "type": "CAMPUS"}
                }],
                "lessons": [{
                    "start": "2021-02-15 09:30:00",
                    "end": "2021-02-15 11:00:00",
                    "room": {"name": "GA1", "topLevelSpace": {"name": "Alameda"}}
                }]
            }]
        }"#;

        let schedule: ScheduleDto = serde_json::from_str(json).unwrap();
        let shift = &schedule.shifts[0];
        assert_eq!(shift.name, "CDI1PB01");
        assert_eq!(shift.occupation.max, 30);
        assert_eq!(
            shift.rooms[0].top_level_space.as_ref().unwrap().name,
            "Alameda"
        );
        assert_eq!(shift.lessons[0].room.as_ref().unwrap().name, "GA1");
    }

    #[test]
    fn test_parse_course_defaults() {
        let course: CourseDto =
            serde_json::from_str(r#"{"id": "1", "acronym": "CDI-I", "name": "Cálculo"}"#).unwrap();
        assert!(course.academic_term.is_empty());
        assert!(course.url.is_empty());
    }
}
