//! Degree programs.

use serde::{Deserialize, Serialize};

use crate::models::Comparable;
use crate::models::dto::DegreeDto;

/// An academic program offering a set of courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub id: String,
    pub name: String,
    pub acronym: String,
}

impl Degree {
    /// Label shown in degree pickers (`"LEIC-A - Computer Science"`).
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.acronym, self.name)
    }
}

impl From<DegreeDto> for Degree {
    fn from(dto: DegreeDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            acronym: dto.acronym,
        }
    }
}

impl Comparable for Degree {
    fn equals(&self, other: &Self) -> bool {
        self.id == other.id
    }

    fn hash_string(&self) -> String {
        self.id.clone()
    }
}
