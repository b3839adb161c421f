//! Change detection between two extraction runs.
//!
//! Components are matched by `number` and compared by `hash`, the way a
//! persistence layer decides which rows to rewrite after an edit. Extraction
//! itself never compares hashes.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::extraction::Component;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "camelCase")]
pub enum ComponentChange {
    /// Present only in the current run
    Added(Component),
    /// Present only in the previous run
    Removed(Component),
    /// Same number, different hash
    Modified {
        previous: Component,
        current: Component,
    },
    Unchanged { number: u32 },
}

impl ComponentChange {
    pub fn number(&self) -> u32 {
        match self {
            ComponentChange::Added(c) | ComponentChange::Removed(c) => c.number,
            ComponentChange::Modified { current, .. } => current.number,
            ComponentChange::Unchanged { number } => *number,
        }
    }
}

/// Compare two component lists, returning one change per number in ascending order.
pub fn diff_components(previous: &[Component], current: &[Component]) -> Vec<ComponentChange> {
    let previous: BTreeMap<u32, &Component> = previous.iter().map(|c| (c.number, c)).collect();
    let current: BTreeMap<u32, &Component> = current.iter().map(|c| (c.number, c)).collect();

    let mut numbers: Vec<u32> = previous.keys().chain(current.keys()).copied().collect();
    numbers.sort_unstable();
    numbers.dedup();

    numbers
        .into_iter()
        .filter_map(|number| {
            match (previous.get(&number), current.get(&number)) {
                (Some(old), Some(new)) if old.hash == new.hash => {
                    Some(ComponentChange::Unchanged { number })
                }
                (Some(old), Some(new)) => Some(ComponentChange::Modified {
                    previous: (*old).clone(),
                    current: (*new).clone(),
                }),
                (None, Some(new)) => Some(ComponentChange::Added((*new).clone())),
                (Some(old), None) => Some(ComponentChange::Removed((*old).clone())),
                (None, None) => None,
            }
        })
        .collect()
}

/// Counts of each change kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

impl ChangeSummary {
    pub fn from_changes(changes: &[ComponentChange]) -> Self {
        let mut summary = Self::default();
        for change in changes {
            match change {
                ComponentChange::Added(_) => summary.added += 1,
                ComponentChange::Removed(_) => summary.removed += 1,
                ComponentChange::Modified { .. } => summary.modified += 1,
                ComponentChange::Unchanged { .. } => summary.unchanged += 1,
            }
        }
        summary
    }

    pub fn has_changes(&self) -> bool {
        self.added + self.removed + self.modified > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::content_hash;
    use crate::tree::ContentNode;
    use crate::extract_components;
    use pretty_assertions::assert_eq;

    fn components(paragraphs: &[&str]) -> Vec<Component> {
        let doc = ContentNode::doc(paragraphs.iter().map(|p| ContentNode::paragraph(p)).collect());
        extract_components(&doc, content_hash)
    }

    #[test]
    fn test_identical_runs_are_unchanged() {
        let run = components(&["One", "Two"]);

        let changes = diff_components(&run, &run);

        assert_eq!(
            changes,
            vec![
                ComponentChange::Unchanged { number: 1 },
                ComponentChange::Unchanged { number: 2 },
            ]
        );
        assert!(!ChangeSummary::from_changes(&changes).has_changes());
    }

    #[test]
    fn test_edited_text_is_modified() {
        let before = components(&["One", "Two"]);
        let after = components(&["One", "Two, revised"]);

        let changes = diff_components(&before, &after);

        assert_eq!(changes[0], ComponentChange::Unchanged { number: 1 });
        match &changes[1] {
            ComponentChange::Modified { previous, current } => {
                assert_eq!(previous.content, "Two");
                assert_eq!(current.content, "Two, revised");
            }
            other => panic!("expected Modified, got {other:?}"),
        }
    }

    #[test]
    fn test_appended_and_removed_components() {
        let short = components(&["One"]);
        let long = components(&["One", "Two", "Three"]);

        let grown = diff_components(&short, &long);
        let shrunk = diff_components(&long, &short);

        assert_eq!(
            ChangeSummary::from_changes(&grown),
            ChangeSummary {
                added: 2,
                removed: 0,
                modified: 0,
                unchanged: 1,
            }
        );
        assert_eq!(ChangeSummary::from_changes(&shrunk).removed, 2);
        assert_eq!(
            grown.iter().map(ComponentChange::number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_inserting_at_the_front_shifts_every_number() {
        let before = components(&["A", "B"]);
        let after = components(&["New", "A", "B"]);

        let summary = ChangeSummary::from_changes(&diff_components(&before, &after));

        assert_eq!(summary.modified, 2);
        assert_eq!(summary.added, 1);
    }

    #[test]
    fn test_change_serializes_with_tag() {
        let json = serde_json::to_value(ComponentChange::Unchanged { number: 4 }).unwrap();

        assert_eq!(json, serde_json::json!({"change": "unchanged", "number": 4}));
    }
}
