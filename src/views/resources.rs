use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::fold::{count_where, percent, sum_of};
use super::tone::{resource_status_tone, Tone};
use super::is_all;
use crate::entities::Resource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceSort {
    /// Store order, which is alphabetical.
    #[default]
    Name,
    Availability,
    Capacity,
}

/// Free places as a whole percentage of capacity; 0 when capacity is unknown.
pub fn availability_percent(resource: &Resource) -> i64 {
    percent(
        resource.available_capacity.unwrap_or(0),
        resource.capacity.unwrap_or(0),
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSummary {
    pub open: usize,
    pub busy: usize,
    pub full: usize,
    pub total_capacity: i64,
    pub available_capacity: i64,
}

impl ResourceSummary {
    pub fn derive(resources: &[Resource]) -> Self {
        Self {
            open: count_where(resources, |r| r.status() == "open"),
            busy: count_where(resources, |r| r.status() == "busy"),
            full: count_where(resources, |r| r.status() == "full"),
            total_capacity: sum_of(resources, |r| r.capacity),
            available_capacity: sum_of(resources, |r| r.available_capacity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceCard {
    #[serde(flatten)]
    pub resource: Resource,
    pub availability_percent: i64,
    pub status_tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourcesView {
    pub category: String,
    pub sort: ResourceSort,
    pub summary: ResourceSummary,
    pub resources: Vec<ResourceCard>,
}

impl ResourcesView {
    pub fn build(resources: Vec<Resource>, category: &str, sort: ResourceSort) -> Self {
        let summary = ResourceSummary::derive(&resources);
        let mut cards: Vec<ResourceCard> = resources
            .into_iter()
            .filter(|r| is_all(category) || r.kind == category)
            .map(|resource| ResourceCard {
                availability_percent: availability_percent(&resource),
                status_tone: resource_status_tone(resource.status()),
                resource,
            })
            .collect();

        match sort {
            ResourceSort::Name => {}
            ResourceSort::Availability => cards.sort_by_key(|c| Reverse(c.availability_percent)),
            ResourceSort::Capacity => {
                cards.sort_by_key(|c| Reverse(c.resource.capacity.unwrap_or(0)))
            }
        }

        Self {
            category: category.to_string(),
            sort,
            summary,
            resources: cards,
        }
    }
}
