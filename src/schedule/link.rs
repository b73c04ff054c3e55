//! Shareable links carrying a schedule identifier.
//!
//! `?s=<schedule identifier>&d=<degree acronyms>`

use url::Url;

use crate::error::Result;
use crate::models::Shift;
use crate::schedule::{
    CourseSelection, degrees_acronyms, parse_degrees, parse_descriptions, shorten_descriptions,
};

const SCHEDULE_PARAM: &str = "s";
const DEGREES_PARAM: &str = "d";

/// Build a link to `base` that restores the given selection.
///
/// An empty selection yields `base` unchanged.
pub fn share_link(base: &Url, shifts: &[Shift]) -> Url {
    let mut url = base.clone();
    if shifts.is_empty() {
        return url;
    }

    {
        let mut query = url.query_pairs_mut();
        query.append_pair(SCHEDULE_PARAM, &shorten_descriptions(shifts));
        if let Some(degrees) = degrees_acronyms(shifts) {
            query.append_pair(DEGREES_PARAM, &degrees);
        }
    }

    url
}

/// A schedule read back from a shared link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedSchedule {
    /// Degrees whose catalogs hold the selected courses
    pub degrees: Vec<String>,
    pub courses: Vec<CourseSelection>,
}

impl SharedSchedule {
    /// Read the `s` and `d` query parameters of a link.
    pub fn from_url(url: &Url) -> Result<Self> {
        let mut shared = Self::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                SCHEDULE_PARAM => shared.courses = parse_descriptions(&value)?,
                DEGREES_PARAM => shared.degrees = parse_degrees(&value),
                _ => {}
            }
        }
        Ok(shared)
    }

    /// Accept either a full link or a bare schedule identifier.
    pub fn parse(input: &str) -> Result<Self> {
        match Url::parse(input) {
            Ok(url) => Self::from_url(&url),
            Err(_) => Ok(Self {
                degrees: Vec::new(),
                courses: parse_descriptions(input)?,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{course, shift};

    fn base() -> Url {
        Url::parse("https://example.org/schedule").unwrap()
    }

    #[test]
    fn test_empty_selection_is_bare_base() {
        assert_eq!(share_link(&base(), &[]), base());
    }

    #[test]
    fn test_link_round_trip() {
        let c1 = course("C1", "CDI-I", "LEIC-A");
        let c2 = course("C2", "AL", "MEEC");
        let shifts = vec![shift(&c1, "CDI1T01", &[]), shift(&c2, "AL1PB02", &[])];

        let link = share_link(&base(), &shifts);
        assert_eq!(
            link.as_str(),
            "https://example.org/schedule?s=C1%7ET01%3BC2%7EPB02&d=LEIC-A%3BMEEC"
        );

        let shared = SharedSchedule::from_url(&link).unwrap();
        assert_eq!(shared.degrees, vec!["LEIC-A", "MEEC"]);
        assert_eq!(shared.courses.len(), 2);
        assert_eq!(shared.courses[1].shift_ids, vec!["PB02"]);
    }

    #[test]
    fn test_parse_bare_identifier() {
        let shared = SharedSchedule::parse("C1~T01~PB02").unwrap();
        assert!(shared.degrees.is_empty());
        assert_eq!(shared.courses[0].course_id, "C1");
        assert!(!shared.is_empty());
    }

    #[test]
    fn test_link_without_schedule_is_empty() {
        let url = Url::parse("https://example.org/schedule?lang=en").unwrap();
        assert!(SharedSchedule::from_url(&url).unwrap().is_empty());
    }
}
