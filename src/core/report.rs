//! Reporter - natural and by-count reports over a classified collection

use serde::Serialize;
use std::collections::HashMap;

use crate::core::model::{Collection, Element, ElementKind, SortingType};

/// One row of a by-count report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub value: Element,
    pub count: usize,
    /// Share of the total, rounded half-up to a whole percent
    pub percentage: u64,
}

/// A finished report, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Report {
    Natural {
        #[serde(skip)]
        kind: ElementKind,
        label: &'static str,
        total: usize,
        data: Vec<Element>,
    },
    ByCount {
        label: &'static str,
        total: usize,
        entries: Vec<CountEntry>,
    },
}

impl Report {
    pub fn total(&self) -> usize {
        match self {
            Report::Natural { total, .. } | Report::ByCount { total, .. } => *total,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Report::Natural { label, .. } | Report::ByCount { label, .. } => label,
        }
    }
}

/// Occurrence count per distinct element
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<Element, usize>,
}

impl FrequencyTable {
    pub fn from_elements<'a, I>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a Element>,
    {
        let mut counts: HashMap<Element, usize> = HashMap::new();
        for element in elements {
            *counts.entry(element.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Pairs ordered by ascending count, ties broken by ascending value
    pub fn into_sorted(self) -> Vec<(Element, usize)> {
        let mut pairs: Vec<(Element, usize)> = self.counts.into_iter().collect();
        pairs.sort_unstable_by(|(a, ca), (b, cb)| ca.cmp(cb).then_with(|| a.cmp(b)));
        pairs
    }
}

/// `count * 100 / total`, rounded half-up. Zero when `total` is zero.
pub fn percentage(count: usize, total: usize) -> u64 {
    if total == 0 {
        return 0;
    }
    let (count, total) = (count as u64, total as u64);
    (count * 200 + total) / (total * 2)
}

/// Elements sorted by their own ordering
pub fn report_natural(collection: &Collection) -> Report {
    let mut data = collection.elements.clone();
    data.sort_unstable();

    Report::Natural {
        kind: collection.kind,
        label: collection.kind.label(),
        total: data.len(),
        data,
    }
}

/// Distinct elements with their counts, least frequent first
pub fn report_by_count(collection: &Collection) -> Report {
    let total = collection.len();
    let entries = FrequencyTable::from_elements(&collection.elements)
        .into_sorted()
        .into_iter()
        .map(|(value, count)| CountEntry {
            value,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    Report::ByCount {
        label: collection.kind.label(),
        total,
        entries,
    }
}

/// Build the report selected by `sorting`
pub fn build_report(collection: &Collection, sorting: SortingType) -> Report {
    match sorting {
        SortingType::Natural => report_natural(collection),
        SortingType::ByCount => report_by_count(collection),
    }
}
