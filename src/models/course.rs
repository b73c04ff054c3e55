// src/models/course.rs

//! Course offerings and their display wrapper.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::dto::CourseDto;
use crate::models::{Comparable, Degree};
use crate::utils::color::palette_color;
use crate::utils::text::fold;

/// A course offered within a degree for an academic term.
///
/// Immutable once built. Shifts hold it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Catalog identifier
    pub id: String,

    /// Short code (e.g., "CDI-I")
    pub acronym: String,

    /// Full course name
    pub name: String,

    /// Base display color (`#rrggbb`), shaded per shift type
    pub color: String,

    /// Acronym of the degree this course was loaded through
    pub degree_acronym: String,

    /// Course page URL
    pub url: String,

    /// Catalog term label (e.g., "2º Semestre 2020/2021")
    pub academic_term: String,
}

impl Course {
    /// Build a course from its catalog entry, loaded through `degree`.
    pub fn new(dto: CourseDto, degree: &Degree) -> Self {
        let color = palette_color(&dto.id).to_string();
        Self {
            id: dto.id,
            acronym: dto.acronym,
            name: dto.name,
            color,
            degree_acronym: degree.acronym.clone(),
            url: dto.url,
            academic_term: dto.academic_term,
        }
    }

    /// Sort order for course pickers: name, then acronym, then id.
    pub fn compare(a: &Course, b: &Course) -> Ordering {
        fold(&a.name)
            .cmp(&fold(&b.name))
            .then_with(|| a.acronym.cmp(&b.acronym))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Canonical string matched against search input.
    pub fn searchable_name(&self) -> String {
        fold(&format!("{} {}", self.acronym, self.name))
    }

    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.acronym)
    }
}

impl Comparable for Course {
    fn equals(&self, other: &Self) -> bool {
        self.id == other.id
    }

    fn hash_string(&self) -> String {
        self.id.clone()
    }
}

/// A course as presented in a picker.
///
/// Whether to show the degree depends on how many degrees are selected,
/// which is view state and does not belong on the shared `Course`.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseView {
    pub course: Arc<Course>,
    pub show_degree: bool,
}

impl CourseView {
    pub fn new(course: Arc<Course>, show_degree: bool) -> Self {
        Self {
            course,
            show_degree,
        }
    }

    pub fn label(&self) -> String {
        if self.show_degree {
            format!(
                "{} - {}",
                self.course.display_name(),
                self.course.degree_acronym
            )
        } else {
            self.course.display_name()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degree(acronym: &str) -> Degree {
        Degree {
            id: format!("{acronym}-id"),
            name: format!("{acronym} degree"),
            acronym: acronym.to_string(),
        }
    }

    fn course(id: &str, acronym: &str, name: &str) -> Course {
        Course::new(
            CourseDto {
                id: id.to_string(),
                acronym: acronym.to_string(),
                name: name.to_string(),
                academic_term: "2º Semestre 2020/2021".to_string(),
                url: format!("https://example.com/{acronym}"),
            },
            &degree("LEIC-A"),
        )
    }

    #[test]
    fn test_new_copies_degree_and_picks_color() {
        let c = course("1", "CDI-I", "Cálculo Diferencial e Integral I");
        assert_eq!(c.degree_acronym, "LEIC-A");
        assert_eq!(c.color, palette_color("1"));
    }

    #[test]
    fn test_compare_ignores_accents_and_case() {
        let mut courses = vec![
            course("3", "IP", "Introdução à Programação"),
            course("1", "AL", "Álgebra Linear"),
            course("2", "CDI-I", "cálculo"),
        ];
        courses.sort_by(Course::compare);
        let acronyms: Vec<_> = courses.iter().map(|c| c.acronym.as_str()).collect();
        assert_eq!(acronyms, vec!["AL", "CDI-I", "IP"]);
    }

    #[test]
    fn test_compare_breaks_ties_on_acronym_then_id() {
        let a = course("2", "AL", "Álgebra");
        let b = course("1", "AL", "Álgebra");
        assert_eq!(Course::compare(&b, &a), Ordering::Less);
        assert_eq!(Course::compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_searchable_name() {
        let c = course("1", "CDI-I", "Cálculo Diferencial");
        assert_eq!(c.searchable_name(), "cdi-i calculo diferencial");
    }

    #[test]
    fn test_view_label() {
        let c = Arc::new(course("1", "AL", "Álgebra Linear"));
        assert_eq!(CourseView::new(c.clone(), false).label(), "Álgebra Linear (AL)");
        assert_eq!(
            CourseView::new(c, true).label(),
            "Álgebra Linear (AL) - LEIC-A"
        );
    }
}
