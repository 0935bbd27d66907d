//! Containers: vectors, tuples, maps, sets, and a derived sequence

use crate::walkthrough::section::{Section, SectionError};
use std::collections::{HashMap, HashSet};

/// Collapse duplicates from a sequence into a set
pub fn unique_values(values: &[i64]) -> HashSet<i64> {
    values.iter().copied().collect()
}

/// Square the integers `1..=n`, preserving order
pub fn squares(n: i64) -> Vec<i64> {
    (1..=n).map(|x| x * x).collect()
}

/// Format a set in sorted order so output stays deterministic
pub fn sorted_set_display(set: &HashSet<i64>) -> String {
    let mut members: Vec<_> = set.iter().copied().collect();
    members.sort_unstable();
    let body: Vec<String> = members.iter().map(|m| m.to_string()).collect();
    format!("{{{}}}", body.join(", "))
}

pub struct ContainersSection;

impl Section for ContainersSection {
    fn name(&self) -> &str {
        "containers"
    }

    fn title(&self) -> &str {
        "Containers"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        let mut lines = Vec::new();

        let mut fruits = vec!["apple", "banana", "cherry"];
        fruits.push("date");
        lines.push(format!("first fruit: {}", fruits[0]));
        lines.push(format!("last fruit: {}", fruits[fruits.len() - 1]));

        let point = (10, 20);
        lines.push(format!("point: ({}, {})", point.0, point.1));

        let mut scores: HashMap<&str, i64> = HashMap::new();
        scores.insert("alice", 21);
        scores.insert("bob", 30);
        lines.push(format!("alice's score: {}", scores["alice"]));
        scores.insert("alice", 22);
        lines.push(format!("alice's updated score: {}", scores["alice"]));

        let numbers = unique_values(&[1, 2, 3, 2]);
        lines.push(format!("unique numbers: {}", sorted_set_display(&numbers)));

        lines.push(format!("squares: {:?}", squares(5)));

        Ok(lines)
    }
}
