use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Side of the arc the dependent sits on, as seen from its head
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArcDirection {
    /// Dependent follows its head
    Left,
    /// Dependent precedes its head
    Right,
}

/// A labeled dependency between two words of the graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Arc {
    /// Lower of the two word indices
    pub start: usize,
    /// Higher of the two word indices
    pub end: usize,
    /// Dependency relation
    pub label: String,
    #[serde(rename = "dir")]
    pub direction: ArcDirection,
}

impl Arc {
    /// Create the arc from `dependent` to `head`.
    ///
    /// Returns `None` for a self-loop.
    pub fn between(dependent: usize, head: usize, label: impl Into<String>) -> Option<Self> {
        let direction = match dependent.cmp(&head) {
            Ordering::Less => ArcDirection::Right,
            Ordering::Greater => ArcDirection::Left,
            Ordering::Equal => return None,
        };

        Some(Self {
            start: dependent.min(head),
            end: dependent.max(head),
            label: label.into(),
            direction,
        })
    }

    /// Index of the dependent word
    pub fn dependent(&self) -> usize {
        match self.direction {
            ArcDirection::Right => self.start,
            ArcDirection::Left => self.end,
        }
    }

    /// Index of the head word
    pub fn head(&self) -> usize {
        match self.direction {
            ArcDirection::Right => self.end,
            ArcDirection::Left => self.start,
        }
    }

    /// Shift both endpoints by `offset` words
    pub fn offset(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependent_before_head() {
        let arc = Arc::between(0, 1, "nsubj").unwrap();

        assert_eq!(arc.start, 0);
        assert_eq!(arc.end, 1);
        assert_eq!(arc.direction, ArcDirection::Right);
        assert_eq!(arc.dependent(), 0);
        assert_eq!(arc.head(), 1);
    }

    #[test]
    fn test_dependent_after_head() {
        let arc = Arc::between(4, 1, "punct").unwrap();

        assert_eq!((arc.start, arc.end), (1, 4));
        assert_eq!(arc.direction, ArcDirection::Left);
        assert_eq!(arc.dependent(), 4);
        assert_eq!(arc.head(), 1);
    }

    #[test]
    fn test_self_loop() {
        assert!(Arc::between(2, 2, "dep").is_none());
    }

    #[test]
    fn test_offset() {
        let arc = Arc::between(0, 1, "nsubj").unwrap().offset(5);

        assert_eq!((arc.start, arc.end), (5, 6));
        assert_eq!(arc.label, "nsubj");
        assert_eq!(arc.direction, ArcDirection::Right);
    }

    #[test]
    fn test_arc_json() {
        let json = serde_json::to_value(Arc::between(3, 1, "attr").unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"start": 1, "end": 3, "label": "attr", "dir": "left"})
        );
    }
}
