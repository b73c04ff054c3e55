// src/services/catalog.rs

//! Read-only access to the university course catalog.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::dto::{CourseDto, DegreeDto, ScheduleDto};
use crate::models::{AcademicTerm, ApiConfig};
use crate::utils::{endpoint, http};

/// Source of degree, course and shift listings.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Degrees offered in `term`.
    async fn fetch_degrees(&self, term: &AcademicTerm) -> Result<Vec<DegreeDto>>;

    /// Courses of a degree in `term`.
    async fn fetch_courses(&self, degree_id: &str, term: &AcademicTerm) -> Result<Vec<CourseDto>>;

    /// Shifts and lessons of a course.
    async fn fetch_schedule(&self, course_id: &str) -> Result<ScheduleDto>;
}

/// Catalog client for the Fénix REST API.
pub struct FenixClient {
    client: Client,
    base: Url,
    language: String,
}

impl FenixClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_async_client(config)?,
            base: config.base_url()?,
            language: config.language.clone(),
        })
    }

    /// GET `path` below the base URL and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let mut url = endpoint(&self.base, path)?;
        url.query_pairs_mut()
            .extend_pairs(query)
            .append_pair("lang", &self.language);

        log::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::catalog(
                url.as_str(),
                format!("HTTP {}: {}", status, body.trim()),
            ));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            log::error!("Failed to parse catalog response from {}: {}", url, e);
            AppError::from(e)
        })
    }
}

#[async_trait]
impl CatalogClient for FenixClient {
    async fn fetch_degrees(&self, term: &AcademicTerm) -> Result<Vec<DegreeDto>> {
        self.get_json("degrees", &[("academicTerm", term.year.as_str())])
            .await
    }

    async fn fetch_courses(&self, degree_id: &str, term: &AcademicTerm) -> Result<Vec<CourseDto>> {
        self.get_json(
            &format!("degrees/{degree_id}/courses"),
            &[("academicTerm", term.year.as_str())],
        )
        .await
    }

    async fn fetch_schedule(&self, course_id: &str) -> Result<ScheduleDto> {
        self.get_json(&format!("courses/{course_id}/schedule"), &[])
            .await
    }
}
