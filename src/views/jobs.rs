use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::is_all;
use crate::entities::Job;

const UNCATEGORISED: &str = "other";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSort {
    /// Store order, newest first.
    #[default]
    Recent,
    Title,
}

fn category_of(job: &Job) -> &str {
    job.work_type.as_deref().unwrap_or(UNCATEGORISED)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobsView {
    pub category: String,
    pub sort: JobSort,
    pub categories: BTreeMap<String, usize>,
    pub jobs: Vec<Job>,
}

impl JobsView {
    pub fn build(jobs: Vec<Job>, category: &str, sort: JobSort) -> Self {
        let categories = jobs.iter().fold(BTreeMap::new(), |mut acc, job| {
            *acc.entry(category_of(job).to_string()).or_insert(0) += 1;
            acc
        });

        let mut jobs: Vec<Job> = jobs
            .into_iter()
            .filter(|job| is_all(category) || category_of(job) == category)
            .collect();

        if sort == JobSort::Title {
            jobs.sort_by_key(|job| job.title.to_lowercase());
        }

        Self {
            category: category.to_string(),
            sort,
            categories,
            jobs,
        }
    }
}
