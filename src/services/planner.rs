// src/services/planner.rs

//! Catalog state behind one planning session.
//!
//! Loads degrees, the courses of the selected degrees and the shifts of a
//! course. Network failures never escape as errors from the session-level
//! operations: they leave the previous state in place and queue an
//! [`Alert`] for the user instead.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::error::Result;
use crate::models::{
    AcademicTerm, Comparable, Course, CourseView, Degree, PlannerConfig, Shift, to_unique,
};
use crate::services::CatalogClient;

/// How urgent a user-facing notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A notification for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
}

/// Courses fetched for a degree selection, tagged with the request that
/// produced them.
#[derive(Debug, Clone)]
pub struct CourseBatch {
    generation: u64,
    pub degrees: Vec<Degree>,
    pub courses: Vec<Arc<Course>>,
}

/// Degree, course and shift state of a planning session.
pub struct Planner {
    client: Arc<dyn CatalogClient>,
    term: AcademicTerm,
    max_selected_courses: usize,
    degrees: Vec<Degree>,
    selected_degrees: Vec<Degree>,
    available_courses: Vec<CourseView>,
    selected_courses: Vec<Arc<Course>>,
    generation: AtomicU64,
    alerts: Vec<Alert>,
}

impl Planner {
    pub fn new(client: Arc<dyn CatalogClient>, config: &PlannerConfig) -> Result<Self> {
        Ok(Self {
            client,
            term: config.academic_term()?,
            max_selected_courses: config.max_selected_courses,
            degrees: Vec::new(),
            selected_degrees: Vec::new(),
            available_courses: Vec::new(),
            selected_courses: Vec::new(),
            generation: AtomicU64::new(0),
            alerts: Vec::new(),
        })
    }

    pub fn term(&self) -> &AcademicTerm {
        &self.term
    }

    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    pub fn selected_degrees(&self) -> &[Degree] {
        &self.selected_degrees
    }

    pub fn available_courses(&self) -> &[CourseView] {
        &self.available_courses
    }

    pub fn selected_courses(&self) -> &[Arc<Course>] {
        &self.selected_courses
    }

    /// Look a course up among the available ones.
    pub fn find_course(&self, course_id: &str) -> Option<Arc<Course>> {
        self.available_courses
            .iter()
            .find(|view| view.course.id == course_id)
            .map(|view| Arc::clone(&view.course))
    }

    /// Drain pending notifications.
    pub fn take_alerts(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts)
    }

    fn alert(&mut self, severity: Severity, message: impl Into<String>) {
        self.alerts.push(Alert {
            severity,
            message: message.into(),
        });
    }

    /// Load the degrees offered in the current term.
    ///
    /// On failure the list is emptied and an error alert is queued.
    pub async fn load_degrees(&mut self) -> &[Degree] {
        match self.client.fetch_degrees(&self.term).await {
            Ok(dtos) => {
                let degrees: Vec<Degree> = dtos.into_iter().map(Degree::from).collect();
                let mut degrees = to_unique(&degrees);
                degrees.sort_by(|a, b| a.acronym.cmp(&b.acronym));
                log::info!("Loaded {} degrees for {}", degrees.len(), self.term);
                self.degrees = degrees;
            }
            Err(e) => {
                log::warn!("Failed to fetch degrees: {}", e);
                self.degrees = Vec::new();
                self.alert(Severity::Error, "Cannot obtain degrees");
            }
        }
        &self.degrees
    }

    /// Fetch the courses of `degrees`, one degree at a time.
    ///
    /// Courses outside the current semester are dropped. The batch carries
    /// a fresh request generation; starting another fetch makes it stale.
    pub async fn fetch_degree_courses(&self, degrees: Vec<Degree>) -> Result<CourseBatch> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let per_degree: Vec<Vec<Arc<Course>>> = stream::iter(&degrees)
            .then(|degree| self.fetch_courses_of(degree))
            .try_collect()
            .await?;

        Ok(CourseBatch {
            generation,
            degrees,
            courses: per_degree.into_iter().flatten().collect(),
        })
    }

    async fn fetch_courses_of(&self, degree: &Degree) -> Result<Vec<Arc<Course>>> {
        let dtos = self.client.fetch_courses(&degree.id, &self.term).await?;
        let courses: Vec<Arc<Course>> = dtos
            .into_iter()
            .filter(|dto| self.term.includes(&dto.academic_term))
            .map(|dto| Arc::new(Course::new(dto, degree)))
            .collect();
        log::debug!("Degree {} offers {} courses", degree.acronym, courses.len());
        Ok(courses)
    }

    /// Make a fetched batch the available course list.
    ///
    /// Returns `false`, changing nothing, when a newer fetch was started
    /// after this batch's.
    pub fn apply_courses(&mut self, batch: CourseBatch) -> bool {
        if batch.generation != self.generation.load(Ordering::SeqCst) {
            log::debug!(
                "Discarding stale course batch (generation {})",
                batch.generation
            );
            return false;
        }

        self.selected_degrees = batch.degrees;
        let mut courses = batch.courses;
        courses.extend(self.selected_courses.iter().cloned());
        self.set_available(courses);
        true
    }

    fn set_available(&mut self, courses: Vec<Arc<Course>>) {
        let mut courses = to_unique(&courses);
        courses.sort_by(|a, b| Course::compare(a, b));
        let show_degree = self.selected_degrees.len() > 1;
        self.available_courses = courses
            .into_iter()
            .map(|course| CourseView::new(course, show_degree))
            .collect();
    }

    /// Select degrees by acronym and load their courses.
    ///
    /// Unknown acronyms are ignored. Returns how many degrees matched.
    pub async fn select_degrees(&mut self, acronyms: &[String]) -> usize {
        let degrees: Vec<Degree> = self
            .degrees
            .iter()
            .filter(|d| acronyms.contains(&d.acronym))
            .cloned()
            .collect();

        for acronym in acronyms {
            if !degrees.iter().any(|d| &d.acronym == acronym) {
                log::warn!("Unknown degree '{}'", acronym);
            }
        }

        let matched = degrees.len();
        self.on_selected_degrees(degrees).await;
        matched
    }

    async fn on_selected_degrees(&mut self, degrees: Vec<Degree>) {
        if degrees.is_empty() {
            // Invalidate anything still in flight.
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.selected_degrees.clear();
            let selected = self.selected_courses.clone();
            self.set_available(selected);
            return;
        }

        match self.fetch_degree_courses(degrees).await {
            Ok(batch) => {
                self.apply_courses(batch);
            }
            Err(e) => {
                log::warn!("Failed to fetch courses: {}", e);
                self.alert(Severity::Error, "Cannot obtain courses");
            }
        }
    }

    /// Replace the selected courses.
    ///
    /// At most `max_selected_courses` are kept; the rest are dropped with a
    /// warning. Selected courses always stay available.
    pub fn select_courses(&mut self, courses: Vec<Arc<Course>>) -> &[Arc<Course>] {
        let mut courses = to_unique(&courses);
        if courses.len() > self.max_selected_courses {
            log::warn!(
                "{} courses selected, keeping the first {}",
                courses.len(),
                self.max_selected_courses
            );
            courses.truncate(self.max_selected_courses);
            self.alert(
                Severity::Warning,
                format!(
                    "At most {} courses can be selected",
                    self.max_selected_courses
                ),
            );
        }
        self.selected_courses = courses;

        let mut available: Vec<Arc<Course>> = self
            .available_courses
            .iter()
            .map(|view| Arc::clone(&view.course))
            .collect();
        available.extend(self.selected_courses.iter().cloned());
        self.set_available(available);

        &self.selected_courses
    }

    /// Switch to another term: selected courses are cleared and the course
    /// list of the selected degrees is reloaded.
    pub async fn set_academic_term(&mut self, term: AcademicTerm) {
        log::info!("Switching academic term to {}", term);
        self.term = term;
        self.selected_courses.clear();
        let degrees = self.selected_degrees.clone();
        self.on_selected_degrees(degrees).await;
    }

    /// Fetch a course's schedule and build its shifts.
    ///
    /// Shifts that cannot be built are skipped and logged; a failed fetch is
    /// returned as an error.
    pub async fn fetch_shifts(&self, course: &Arc<Course>) -> Result<Vec<Shift>> {
        let schedule = self.client.fetch_schedule(&course.id).await?;

        let shifts: Vec<Shift> = schedule
            .shifts
            .iter()
            .filter_map(|dto| match Shift::new(dto, Arc::clone(course)) {
                Ok(shift) => Some(shift),
                Err(e) => {
                    log::warn!("Skipping shift of {}: {}", course.acronym, e);
                    None
                }
            })
            .collect();

        Ok(to_unique(&shifts))
    }

    /// Like [`Planner::fetch_shifts`], but a failed fetch yields no shifts
    /// and an error alert.
    pub async fn load_shifts(&mut self, course: &Arc<Course>) -> Vec<Shift> {
        match self.fetch_shifts(course).await {
            Ok(shifts) => shifts,
            Err(e) => {
                log::warn!("Failed to fetch shifts of {}: {}", course.acronym, e);
                self.alert(
                    Severity::Error,
                    format!("Cannot obtain shifts of {}", course.acronym),
                );
                Vec::new()
            }
        }
    }

    /// Shifts of several courses, fetched one course at a time.
    pub async fn load_all_shifts(&mut self, courses: &[Arc<Course>]) -> Vec<Shift> {
        let mut shifts = Vec::new();
        for course in courses {
            shifts.extend(self.load_shifts(course).await);
        }
        shifts
    }

    /// Whether `course` is among the selected ones.
    pub fn is_selected(&self, course: &Course) -> bool {
        self.selected_courses.iter().any(|c| Course::equals(c, course))
    }
}
