//! Pre-aggregated (group, feature, count) tables.
//!
//! A [`CountTable`] is validated and fully indexed at construction: labels
//! are interned in first-seen order, and group totals, feature totals, and
//! the grand total are computed once. Nothing is mutated afterwards; the
//! only way to reflect new counts is to build a new table.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One pre-aggregated cell: how often `feature` occurred in `group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRecord {
    pub group: String,
    pub feature: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    group: usize,
    feature: usize,
    count: u64,
}

/// Validated, immutable count table with derived totals.
///
/// Invariant: non-empty, and each `(group, feature)` pair appears at most
/// once (counts are pre-aggregated upstream).
#[derive(Debug, Clone, PartialEq)]
pub struct CountTable {
    cells: Vec<Cell>,
    groups: Vec<String>,
    features: Vec<String>,
    group_ids: HashMap<String, usize>,
    feature_ids: HashMap<String, usize>,
    group_totals: Vec<u64>,
    feature_totals: Vec<u64>,
    grand_total: u64,
}

impl CountTable {
    /// Build a table from raw `(group, feature, count)` rows.
    ///
    /// Fails with [`Error::NegativeCount`] on any `count < 0`,
    /// [`Error::EmptyTable`] on empty input, and [`Error::DuplicatePair`]
    /// when a pair appears twice.
    pub fn from_rows<S1, S2, I>(rows: I) -> Result<Self>
    where
        S1: Into<String>,
        S2: Into<String>,
        I: IntoIterator<Item = (S1, S2, i64)>,
    {
        let mut records = Vec::new();
        for (group, feature, count) in rows {
            let group = group.into();
            let feature = feature.into();
            if count < 0 {
                return Err(Error::NegativeCount {
                    group,
                    feature,
                    count,
                });
            }
            records.push(CountRecord {
                group,
                feature,
                count: count as u64,
            });
        }
        Self::from_records(records)
    }

    /// Build a table from already-typed records.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = CountRecord>,
    {
        let mut groups: Vec<String> = Vec::new();
        let mut features: Vec<String> = Vec::new();
        let mut group_ids: HashMap<String, usize> = HashMap::new();
        let mut feature_ids: HashMap<String, usize> = HashMap::new();
        let mut cells: Vec<Cell> = Vec::new();
        let mut seen: HashSet<(usize, usize)> = HashSet::new();

        for record in records {
            let group = match group_ids.get(&record.group) {
                Some(&id) => id,
                None => {
                    let id = groups.len();
                    groups.push(record.group.clone());
                    group_ids.insert(record.group.clone(), id);
                    id
                }
            };
            let feature = match feature_ids.get(&record.feature) {
                Some(&id) => id,
                None => {
                    let id = features.len();
                    features.push(record.feature.clone());
                    feature_ids.insert(record.feature.clone(), id);
                    id
                }
            };
            if !seen.insert((group, feature)) {
                return Err(Error::DuplicatePair {
                    group: record.group,
                    feature: record.feature,
                });
            }
            cells.push(Cell {
                group,
                feature,
                count: record.count,
            });
        }

        if cells.is_empty() {
            return Err(Error::EmptyTable);
        }

        let mut group_totals = vec![0u64; groups.len()];
        let mut feature_totals = vec![0u64; features.len()];
        let mut grand_total = 0u64;
        for cell in &cells {
            group_totals[cell.group] += cell.count;
            feature_totals[cell.feature] += cell.count;
            grand_total += cell.count;
        }

        Ok(Self {
            cells,
            groups,
            features,
            group_ids,
            feature_ids,
            group_totals,
            feature_totals,
            grand_total,
        })
    }

    /// Number of cells in the table.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the table has no cells (never true after construction).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of distinct groups.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Number of distinct features.
    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    /// Group labels in first-seen order.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Feature labels in first-seen order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Id of a group label, if present.
    pub fn group_id(&self, group: &str) -> Option<usize> {
        self.group_ids.get(group).copied()
    }

    /// Id of a feature label, if present.
    pub fn feature_id(&self, feature: &str) -> Option<usize> {
        self.feature_ids.get(feature).copied()
    }

    /// Total count for group id `j` (`n_·j`).
    pub fn group_total(&self, j: usize) -> u64 {
        self.group_totals[j]
    }

    /// Total count for feature id `i` (`n_i·`).
    pub fn feature_total(&self, i: usize) -> u64 {
        self.feature_totals[i]
    }

    /// Sum of all counts (`n_··`).
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }

    /// Cells as `(group_id, feature_id, count)` in input order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.cells.iter().map(|c| (c.group, c.feature, c.count))
    }

    /// Cells as labeled records, in input order.
    pub fn records(&self) -> impl Iterator<Item = CountRecord> + '_ {
        self.cells.iter().map(|c| CountRecord {
            group: self.groups[c.group].clone(),
            feature: self.features[c.feature].clone(),
            count: c.count,
        })
    }

    /// The same table with the group and feature roles swapped.
    pub fn transposed(&self) -> CountTable {
        CountTable {
            cells: self
                .cells
                .iter()
                .map(|c| Cell {
                    group: c.feature,
                    feature: c.group,
                    count: c.count,
                })
                .collect(),
            groups: self.features.clone(),
            features: self.groups.clone(),
            group_ids: self.feature_ids.clone(),
            feature_ids: self.group_ids.clone(),
            group_totals: self.feature_totals.clone(),
            feature_totals: self.group_totals.clone(),
            grand_total: self.grand_total,
        }
    }
}
