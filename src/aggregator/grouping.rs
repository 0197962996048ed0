//! Column grouping by naming convention.
//!
//! Per-core and per-cluster sensors are named `<Letters>_<Digits>...`
//! (`Core_3`, `Core_3_Temp`, `Cluster_12_Power`). The `<Letters>_<Digits>`
//! prefix is the group key. Columns without that prefix stand alone.

use log::debug;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Anchored at the start; digits are greedy so `Core_12` never splits.
/// ASCII digits only.
const GROUP_PATTERN: &str = r"^[A-Za-z]+_[0-9]+";

fn group_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(GROUP_PATTERN).expect("column group pattern is valid"))
}

/// How a single column is assigned to a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass<'a> {
    /// Name starts with `<Letters>_<Digits>`; holds that prefix
    Grouped(&'a str),
    /// No prefix; the column is its own group
    Singleton(&'a str),
}

impl<'a> ColumnClass<'a> {
    /// Group key for this column
    pub fn key(&self) -> &'a str {
        match self {
            ColumnClass::Grouped(prefix) => prefix,
            ColumnClass::Singleton(name) => name,
        }
    }
}

/// Decide which group a column name belongs to
pub fn classify_column(name: &str) -> ColumnClass<'_> {
    match group_pattern().find(name) {
        Some(m) => ColumnClass::Grouped(&name[..m.end()]),
        None => ColumnClass::Singleton(name),
    }
}

/// A group key and the columns assigned to it, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub columns: Vec<String>,
}

/// Partition column names into groups
///
/// **Public** - main entry point for grouping
///
/// Groups come back in the order their key is first seen, and columns keep
/// their original order inside each group. Every input column lands in
/// exactly one group.
pub fn group_columns<S: AsRef<str>>(columns: &[S]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for column in columns {
        let name = column.as_ref();
        let key = classify_column(name).key();

        match index.get(key) {
            Some(&i) => groups[i].columns.push(name.to_string()),
            None => {
                index.insert(key.to_string(), groups.len());
                groups.push(Group {
                    key: key.to_string(),
                    columns: vec![name.to_string()],
                });
            }
        }
    }

    debug!("Grouped {} columns into {} groups", columns.len(), groups.len());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_grouped_prefix() {
        assert_eq!(classify_column("Core_0_Temp"), ColumnClass::Grouped("Core_0"));
        assert_eq!(classify_column("Cluster_12"), ColumnClass::Grouped("Cluster_12"));
        assert_eq!(classify_column("Core_12_Util"), ColumnClass::Grouped("Core_12"));
    }

    #[test]
    fn test_classify_singleton() {
        assert_eq!(classify_column("TotalPower"), ColumnClass::Singleton("TotalPower"));
        assert_eq!(classify_column("_0"), ColumnClass::Singleton("_0"));
        assert_eq!(classify_column("Core0"), ColumnClass::Singleton("Core0"));
        assert_eq!(classify_column("3_Core"), ColumnClass::Singleton("3_Core"));
    }

    #[test]
    fn test_group_digits_are_ascii() {
        assert_eq!(classify_column("Core_\u{0663}"), ColumnClass::Singleton("Core_\u{0663}"));
        assert_eq!(classify_column("Core_3\u{0663}"), ColumnClass::Grouped("Core_3"));
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        assert_eq!(classify_column("L2 Core_1"), ColumnClass::Singleton("L2 Core_1"));
    }

    #[test]
    fn test_group_columns_preserves_first_seen_order() {
        let groups = group_columns(&[
            "Core_1_A", "Uncore", "Core_0_A", "Core_1_B", "Core_0_B",
        ]);

        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Core_1", "Uncore", "Core_0"]);
        assert_eq!(groups[0].columns, vec!["Core_1_A", "Core_1_B"]);
        assert_eq!(groups[2].columns, vec!["Core_0_A", "Core_0_B"]);
    }

    #[test]
    fn test_group_columns_empty() {
        let columns: Vec<String> = Vec::new();
        assert!(group_columns(&columns).is_empty());
    }
}
