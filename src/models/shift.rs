// src/models/shift.rs

//! Shifts: recurring class groups of one type within a course.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::dto::{OccupationDto, ShiftDto};
use crate::models::{Comparable, Course, Lesson, to_unique};
use crate::utils::color::shade_color;

static SHIFT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)(L|PB|T|S|TP)(\d{2})$").expect("valid shift name regex"));

/// Kind of class a shift delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Lecture (`T`)
    Theory,
    /// Problem-solving session (`PB`)
    Problems,
    /// Laboratory (`L`)
    Lab,
    /// Theory-practice (`TP`)
    TheoryPractice,
    /// Seminar (`S`)
    Seminar,
}

impl ShiftType {
    /// Parse the code embedded in a shift name.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "T" => Some(Self::Theory),
            "PB" => Some(Self::Problems),
            "L" => Some(Self::Lab),
            "TP" => Some(Self::TheoryPractice),
            "S" => Some(Self::Seminar),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Theory => "T",
            Self::Problems => "PB",
            Self::Lab => "L",
            Self::TheoryPractice => "TP",
            Self::Seminar => "S",
        }
    }

    /// Multiplier applied to the course color for shifts of this type.
    pub fn shade(self) -> f64 {
        match self {
            Self::Theory => 1.30,
            Self::Problems => 1.15,
            _ => 1.0,
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Enrollment snapshot of a shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftOccupation {
    pub current: u32,
    pub max: u32,
}

impl From<OccupationDto> for ShiftOccupation {
    fn from(dto: OccupationDto) -> Self {
        Self {
            current: dto.current,
            max: dto.max,
        }
    }
}

/// A recurring class group (e.g. every "PB01" session) of a course.
#[derive(Debug, Clone)]
pub struct Shift {
    /// Owning course, shared with every other shift of it
    pub course: Arc<Course>,
    pub course_id: String,

    /// Raw catalog name (e.g., "CDI1PB01")
    pub name: String,
    pub shift_type: ShiftType,

    /// Course acronym
    pub acronym: String,

    /// Type code plus sequence number (e.g., "PB01")
    pub shift_id: String,
    pub course_name: String,

    /// Lessons with weekly repeats removed
    pub lessons: Vec<Lesson>,

    /// Every lesson the catalog listed
    pub all_lessons: Vec<Lesson>,
    pub color: String,

    /// Campus of the first room, empty when no room is known
    pub campus: String,
    pub occupation: ShiftOccupation,
    pub url: String,
}

impl Shift {
    /// Build a shift from its catalog entry.
    ///
    /// Fails when the name is not `<prefix><type><2 digits>`, a lesson
    /// timestamp cannot be read, or the course color is not a hex color. The
    /// caller decides whether one bad shift aborts the whole batch.
    pub fn new(dto: &ShiftDto, course: Arc<Course>) -> Result<Self> {
        let captures = SHIFT_NAME
            .captures(&dto.name)
            .ok_or_else(|| AppError::ShiftName {
                name: dto.name.clone(),
            })?;
        let code = &captures[2];
        let shift_type = ShiftType::from_code(code).ok_or_else(|| AppError::ShiftName {
            name: dto.name.clone(),
        })?;
        let shift_id = format!("{}{}", code, &captures[3]);

        let campus = dto
            .rooms
            .first()
            .and_then(|room| room.top_level_space.as_ref())
            .map(|space| space.name.clone())
            .unwrap_or_default();

        let color = shade_color(&course.color, shift_type.shade())?;

        let mut shift = Self {
            course_id: course.id.clone(),
            name: dto.name.clone(),
            shift_type,
            acronym: course.acronym.clone(),
            shift_id,
            course_name: course.name.clone(),
            lessons: Vec::new(),
            all_lessons: Vec::new(),
            color,
            campus,
            occupation: dto.occupation.into(),
            url: course.url.clone(),
            course,
        };

        let all_lessons = dto
            .lessons
            .iter()
            .map(|lesson| Lesson::new(lesson, &shift))
            .collect::<Result<Vec<_>>>()?;
        shift.lessons = to_unique(&all_lessons);
        shift.all_lessons = all_lessons;

        Ok(shift)
    }

    /// Whether `b` is an alternative to `a`: same course and type, other shift.
    ///
    /// Used to swap a selected shift for another one of the same kind.
    pub fn is_same_course_and_type(a: &Shift, b: &Shift) -> bool {
        a.course_name == b.course_name
            && a.shift_type == b.shift_type
            && a.name != b.name
            && a.course_id == b.course_id
    }

    /// `(course_id, shift_id)`, the pair written into schedule identifiers.
    pub fn full_id(&self) -> (String, String) {
        (self.course_id.clone(), self.shift_id.clone())
    }
}

impl Comparable for Shift {
    fn equals(&self, other: &Self) -> bool {
        self.name == other.name && self.course_id == other.course_id
    }

    fn hash_string(&self) -> String {
        self.name.clone()
    }
}
