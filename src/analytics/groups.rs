use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::{Priority, ProjectRecord, ProjectSummary, Status};

/// Number of rows or distinct projects falling under one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count<K> {
    pub key: K,
    pub count: usize,
}

/// Distinct projects handled by one assignee on one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub assigned_to: String,
    pub component: String,
    pub count: usize,
}

/// Collapse rows into one summary per title, keeping the first row seen for each.
/// Output is ordered by title.
pub fn per_project(records: &[ProjectRecord]) -> Vec<ProjectSummary> {
    let mut projects: BTreeMap<&str, ProjectSummary> = BTreeMap::new();

    for record in records {
        projects
            .entry(record.title.as_str())
            .or_insert_with(|| ProjectSummary::from(record));
    }

    projects.into_values().collect()
}

pub fn priority_counts(projects: &[ProjectSummary]) -> Vec<Count<Priority>> {
    value_counts(projects.iter().map(|project| project.priority))
}

pub fn status_counts(projects: &[ProjectSummary]) -> Vec<Count<Status>> {
    value_counts(projects.iter().map(|project| project.status))
}

/// Occurrences per key, most frequent first. Ties keep the key's natural order.
fn value_counts<K: Ord>(keys: impl Iterator<Item = K>) -> Vec<Count<K>> {
    let mut tally: BTreeMap<K, usize> = BTreeMap::new();
    for key in keys {
        *tally.entry(key).or_default() += 1;
    }

    let mut counts: Vec<Count<K>> = tally
        .into_iter()
        .map(|(key, count)| Count { key, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn assignment_counts(records: &[ProjectRecord]) -> Vec<Assignment> {
    let mut groups: BTreeMap<(&str, &str), BTreeSet<&str>> = BTreeMap::new();

    for record in records {
        groups
            .entry((record.assigned_to.as_str(), record.component.as_str()))
            .or_default()
            .insert(record.title.as_str());
    }

    groups
        .into_iter()
        .map(|((assigned_to, component), titles)| Assignment {
            assigned_to: assigned_to.to_owned(),
            component: component.to_owned(),
            count: titles.len(),
        })
        .collect()
}

pub fn assignee_counts(records: &[ProjectRecord]) -> Vec<Count<String>> {
    distinct_projects_by(records, |record| record.assigned_to.as_str())
}

pub fn component_counts(records: &[ProjectRecord]) -> Vec<Count<String>> {
    distinct_projects_by(records, |record| record.component.as_str())
}

/// Distinct titles per key, ordered by key
fn distinct_projects_by<'a, F>(records: &'a [ProjectRecord], key: F) -> Vec<Count<String>>
where
    F: Fn(&'a ProjectRecord) -> &'a str,
{
    let mut groups: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for record in records {
        groups
            .entry(key(record))
            .or_default()
            .insert(record.title.as_str());
    }

    groups
        .into_iter()
        .map(|(key, titles)| Count {
            key: key.to_owned(),
            count: titles.len(),
        })
        .collect()
}

/// Category labels ordered by descending count, ties alphabetical
pub fn sort_order(counts: &[Count<String>]) -> Vec<String> {
    let mut ordered: Vec<&Count<String>> = counts.iter().collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    ordered.into_iter().map(|count| count.key.clone()).collect()
}
