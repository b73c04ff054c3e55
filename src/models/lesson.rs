// src/models/lesson.rs

//! A single weekly class occurrence.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::dto::LessonDto;
use crate::models::{Comparable, Shift, ShiftOccupation, ShiftType};

/// One concrete occurrence of a shift: a day, a time range and a room.
///
/// Built once from the catalog while its shift is constructed and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lesson {
    /// Name of the owning shift
    pub id: String,
    pub shift_name: String,
    pub color: String,

    /// Time of day the lesson starts (`"09:30:00"`)
    pub start: String,

    /// Time of day the lesson ends
    pub end: String,

    /// Calendar date of this occurrence (`"2021-02-15"`)
    pub date: String,

    /// Derived from `date`
    pub day_of_week: Weekday,

    pub room: Option<String>,
    pub campus: Option<String>,
    pub acronym: String,
    pub shift_id: String,
    pub occupation: ShiftOccupation,
    pub shift_type: ShiftType,
    pub url: String,
    pub course_name: String,
}

impl Lesson {
    /// Build a lesson from its catalog entry, copying identity from `shift`.
    pub fn new(dto: &LessonDto, shift: &Shift) -> Result<Self> {
        let (date, start) = split_timestamp(&dto.start)?;
        let (_, end) = split_timestamp(&dto.end)?;
        let day_of_week = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| AppError::timestamp(&dto.start, e))?
            .weekday();

        Ok(Self {
            id: shift.name.clone(),
            shift_name: shift.name.clone(),
            color: shift.color.clone(),
            start: start.to_string(),
            end: end.to_string(),
            date: date.to_string(),
            day_of_week,
            room: dto.room.as_ref().map(|r| r.name.clone()),
            campus: dto
                .room
                .as_ref()
                .and_then(|r| r.top_level_space.as_ref())
                .map(|s| s.name.clone()),
            acronym: shift.acronym.clone(),
            shift_id: shift.shift_id.clone(),
            occupation: shift.occupation,
            shift_type: shift.shift_type,
            url: shift.url.clone(),
            course_name: shift.course_name.clone(),
        })
    }

    /// Parse `start` and `end` into times of day.
    pub fn time_range(&self) -> Result<(NaiveTime, NaiveTime)> {
        Ok((parse_time(&self.start)?, parse_time(&self.end)?))
    }

    /// Whether two lessons share a weekday and their time ranges intersect.
    ///
    /// Ranges are half-open: a lesson ending at 11:00 does not clash with
    /// one starting at 11:00.
    pub fn overlaps(&self, other: &Lesson) -> Result<bool> {
        if self.day_of_week != other.day_of_week {
            return Ok(false);
        }
        let (a_start, a_end) = self.time_range()?;
        let (b_start, b_end) = other.time_range()?;
        Ok(a_start < b_end && b_start < a_end)
    }
}

impl Comparable for Lesson {
    /// Same lesson slot, whatever the date.
    fn equals(&self, other: &Self) -> bool {
        self.id == other.id
            && self.shift_name == other.shift_name
            && self.color == other.color
            && self.start == other.start
            && self.end == other.end
            && self.day_of_week == other.day_of_week
            && self.room == other.room
            && self.campus == other.campus
            && self.acronym == other.acronym
            && self.shift_id == other.shift_id
            && self.occupation == other.occupation
            && self.shift_type == other.shift_type
            && self.url == other.url
            && self.course_name == other.course_name
    }

    /// Excludes the date, so weekly repeats collapse into one lesson.
    fn hash_string(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.shift_name,
            self.day_of_week,
            self.start,
            self.end,
            self.room.as_deref().unwrap_or("")
        )
    }
}

/// Split `"2021-02-15 09:30:00"` into its date and time-of-day parts.
fn split_timestamp(value: &str) -> Result<(&str, &str)> {
    value
        .trim()
        .split_once(' ')
        .ok_or_else(|| AppError::timestamp(value, "expected '<date> <time>'"))
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|e| AppError::timestamp(value, e))
}
