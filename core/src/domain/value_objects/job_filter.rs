//! Search criteria for the public job listing.

use jb_shared::Pagination;

use crate::domain::entities::{normalize_tag_names, Job, JobLevel, JobType};

/// Filter for job searches. Every present criterion narrows the result;
/// results are ordered newest first before the pagination window applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFilter {
    /// Comma separated tag names; a job matches when it has any of them
    pub tags: Option<String>,

    /// Case-insensitive substring of the job location
    pub location: Option<String>,

    pub job_type: Option<JobType>,
    pub job_level: Option<JobLevel>,

    /// Accepted for compatibility, never used to narrow results
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,

    pub is_active: bool,

    pub page: Pagination,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            tags: None,
            location: None,
            job_type: None,
            job_level: None,
            salary_min: None,
            salary_max: None,
            is_active: true,
            page: Pagination::default(),
        }
    }
}

impl JobFilter {
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_page(mut self, skip: u32, limit: u32) -> Self {
        self.page = Pagination::new(skip, limit);
        self
    }

    /// Tag names after splitting on commas and normalizing; empty means no
    /// tag criterion
    pub fn normalized_tags(&self) -> Vec<String> {
        match &self.tags {
            Some(raw) => normalize_tag_names(raw.split(',')),
            None => Vec::new(),
        }
    }

    /// The location needle, if one was given
    pub fn location_needle(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    /// `LIKE` pattern for the location needle with wildcards escaped
    pub fn location_pattern(&self) -> Option<String> {
        self.location_needle().map(|needle| {
            let mut escaped = String::with_capacity(needle.len() + 2);
            escaped.push('%');
            for c in needle.chars() {
                if matches!(c, '\\' | '%' | '_') {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped.push('%');
            escaped
        })
    }

    /// In-memory evaluation of the filter predicate for a job and its tag names
    pub fn matches(&self, job: &Job, tag_names: &[&str]) -> bool {
        if job.is_active != self.is_active {
            return false;
        }

        let wanted = self.normalized_tags();
        if !wanted.is_empty() && !tag_names.iter().any(|t| wanted.iter().any(|w| w == t)) {
            return false;
        }

        if let Some(needle) = self.location_needle() {
            let needle = needle.to_lowercase();
            match &job.location {
                Some(location) if location.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }

        if self.job_type.map_or(false, |t| t != job.job_type) {
            return false;
        }

        if self.job_level.map_or(false, |l| l != job.job_level) {
            return false;
        }

        true
    }
}
