//! Presentation steps for an algorithm walkthrough
//!
//! This module defines the immutable data a player moves through:
//!
//! - [`Step`]: one frame of the walkthrough (title, description, note,
//!   pseudocode line and visual state)
//! - [`VisualState`]: what is drawn for a step, one variant per kind of
//!   visualization
//! - [`StepSequence`]: an ordered list of steps that is never empty
//!
//! # Visual states
//!
//! Each [`VisualState`] variant carries exactly the fields that make sense
//! together. An array has pointers, a binary search has bounds, a stack has
//! string items, and so on. There is no "bag of optional fields".

use serde::Deserialize;
use std::fmt::Write as _;

/// A named index drawn above an array cell (`i`, `j`, `min`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pointer {
    pub name: String,
    /// May be `-1` when the pointer has walked off the left edge
    pub position: isize,
}

impl Pointer {
    pub fn new(name: &str, position: isize) -> Self {
        Pointer {
            name: name.to_string(),
            position,
        }
    }

    /// Cell index this pointer sits on, if it is inside the array
    pub fn cell(&self, len: usize) -> Option<usize> {
        usize::try_from(self.position).ok().filter(|&idx| idx < len)
    }
}

/// Search window of a binary search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Bounds {
    pub low: usize,
    pub high: usize,
    #[serde(default)]
    pub mid: Option<usize>,
}

/// What the visualizer draws for one step
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualState {
    /// Array of numbers with highlighted cells and named pointers
    Array {
        values: Vec<i64>,
        #[serde(default)]
        highlight: Vec<usize>,
        #[serde(default)]
        pointers: Vec<Pointer>,
    },
    /// Array of numbers with a low/high/mid search window
    Bounds {
        values: Vec<i64>,
        #[serde(default)]
        highlight: Vec<usize>,
        bounds: Bounds,
    },
    /// LIFO stack, top at the right
    Stack {
        items: Vec<String>,
        #[serde(default)]
        highlight: Vec<usize>,
    },
    /// FIFO queue, head at the left
    Queue {
        items: Vec<String>,
        #[serde(default)]
        highlight: Vec<usize>,
    },
    /// Singly linked list, terminated by `null`
    List {
        nodes: Vec<String>,
        #[serde(default)]
        highlight: Vec<usize>,
    },
    /// Nothing to draw
    #[default]
    Empty,
}

impl VisualState {
    /// Array state without pointers
    pub fn array(values: &[i64], highlight: &[usize]) -> Self {
        VisualState::Array {
            values: values.to_vec(),
            highlight: highlight.to_vec(),
            pointers: Vec::new(),
        }
    }

    /// Array state with pointers, given as `(name, position)` pairs
    pub fn array_with_pointers(
        values: &[i64],
        highlight: &[usize],
        pointers: &[(&str, isize)],
    ) -> Self {
        VisualState::Array {
            values: values.to_vec(),
            highlight: highlight.to_vec(),
            pointers: pointers
                .iter()
                .map(|(name, pos)| Pointer::new(name, *pos))
                .collect(),
        }
    }

    pub fn bounds(values: &[i64], highlight: &[usize], bounds: Bounds) -> Self {
        VisualState::Bounds {
            values: values.to_vec(),
            highlight: highlight.to_vec(),
            bounds,
        }
    }

    pub fn stack(items: &[&str]) -> Self {
        VisualState::Stack {
            items: items.iter().map(|s| s.to_string()).collect(),
            highlight: Vec::new(),
        }
    }

    pub fn queue(items: &[&str]) -> Self {
        VisualState::Queue {
            items: items.iter().map(|s| s.to_string()).collect(),
            highlight: Vec::new(),
        }
    }

    pub fn list(nodes: &[&str], highlight: &[usize]) -> Self {
        VisualState::List {
            nodes: nodes.iter().map(|s| s.to_string()).collect(),
            highlight: highlight.to_vec(),
        }
    }

    /// Number of cells / items / nodes drawn
    pub fn len(&self) -> usize {
        match self {
            VisualState::Array { values, .. } | VisualState::Bounds { values, .. } => values.len(),
            VisualState::Stack { items, .. } | VisualState::Queue { items, .. } => items.len(),
            VisualState::List { nodes, .. } => nodes.len(),
            VisualState::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highlighted positions
    pub fn highlight(&self) -> &[usize] {
        match self {
            VisualState::Array { highlight, .. }
            | VisualState::Bounds { highlight, .. }
            | VisualState::Stack { highlight, .. }
            | VisualState::Queue { highlight, .. }
            | VisualState::List { highlight, .. } => highlight,
            VisualState::Empty => &[],
        }
    }

    pub fn is_highlighted(&self, idx: usize) -> bool {
        self.highlight().contains(&idx)
    }

    /// Short name of the visualization kind
    pub fn kind(&self) -> &'static str {
        match self {
            VisualState::Array { .. } => "array",
            VisualState::Bounds { .. } => "bounds",
            VisualState::Stack { .. } => "stack",
            VisualState::Queue { .. } => "queue",
            VisualState::List { .. } => "list",
            VisualState::Empty => "empty",
        }
    }

    /// One-line plain-text rendering, used by `algoflow steps`
    pub fn summary(&self) -> String {
        let mut out = String::new();
        match self {
            VisualState::Array {
                values, pointers, ..
            } => {
                let _ = write!(out, "array {:?}", values);
                for pointer in pointers {
                    let _ = write!(out, " {}={}", pointer.name, pointer.position);
                }
            }
            VisualState::Bounds { values, bounds, .. } => {
                let _ = write!(
                    out,
                    "array {:?} low={} high={}",
                    values, bounds.low, bounds.high
                );
                if let Some(mid) = bounds.mid {
                    let _ = write!(out, " mid={}", mid);
                }
            }
            VisualState::Stack { items, .. } => {
                let _ = write!(out, "stack [{}]", items.join(", "));
            }
            VisualState::Queue { items, .. } => {
                let _ = write!(out, "queue [{}]", items.join(", "));
            }
            VisualState::List { nodes, .. } => {
                out.push_str("list ");
                for node in nodes {
                    let _ = write!(out, "{} -> ", node);
                }
                out.push_str("null");
            }
            VisualState::Empty => out.push_str("(empty)"),
        }
        let highlight = self.highlight();
        if !highlight.is_empty() {
            let _ = write!(out, " highlight={:?}", highlight);
        }
        out
    }
}

/// One immutable frame of an algorithm walkthrough
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Short tag shown next to the title ("compare", "swap", ...)
    #[serde(default)]
    pub note: Option<String>,
    /// 1-based line in the algorithm's pseudocode
    #[serde(default)]
    pub pseudocode_line: Option<usize>,
    #[serde(default)]
    pub visual: VisualState,
}

impl Step {
    pub fn new(visual: VisualState) -> Self {
        Step {
            visual,
            ..Step::default()
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn line(mut self, line: usize) -> Self {
        self.pseudocode_line = Some(line);
        self
    }
}

/// Returned when building a [`StepSequence`] from no steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("step sequence must contain at least one step")]
pub struct EmptySequence;

/// Ordered, non-empty list of steps for one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    /// Build a sequence, rejecting an empty list
    pub fn new(steps: Vec<Step>) -> Result<Self, EmptySequence> {
        if steps.is_empty() {
            return Err(EmptySequence);
        }
        Ok(StepSequence { steps })
    }

    /// Build a sequence that is non-empty by construction
    pub fn starting_with(first: Step, rest: impl IntoIterator<Item = Step>) -> Self {
        let mut steps = vec![first];
        steps.extend(rest);
        StepSequence { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Step at `index`, clamped to the last step
    pub fn get(&self, index: usize) -> &Step {
        &self.steps[index.min(self.last_index())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }
}

impl TryFrom<Vec<Step>> for StepSequence {
    type Error = EmptySequence;

    fn try_from(steps: Vec<Step>) -> Result<Self, Self::Error> {
        StepSequence::new(steps)
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(StepSequence::new(Vec::new()), Err(EmptySequence));
    }

    #[test]
    fn get_clamps_past_the_end() {
        let seq = StepSequence::starting_with(
            Step::new(VisualState::Empty).title("a"),
            [Step::new(VisualState::Empty).title("b")],
        );
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.last_index(), 1);
        assert_eq!(seq.get(1).title.as_deref(), Some("b"));
        assert_eq!(seq.get(99).title.as_deref(), Some("b"));
    }

    #[test]
    fn pointer_off_the_left_edge_has_no_cell() {
        assert_eq!(Pointer::new("j", -1).cell(4), None);
        assert_eq!(Pointer::new("j", 4).cell(4), None);
        assert_eq!(Pointer::new("j", 2).cell(4), Some(2));
    }

    #[test]
    fn highlight_is_shared_across_variants() {
        let list = VisualState::list(&["A", "B", "C"], &[1]);
        assert!(list.is_highlighted(1));
        assert!(!list.is_highlighted(0));
        assert_eq!(list.len(), 3);
        assert!(VisualState::Empty.highlight().is_empty());
    }

    #[test]
    fn summary_mentions_pointers_and_bounds() {
        let array = VisualState::array_with_pointers(&[5, 2], &[0, 1], &[("i", 0), ("j", 1)]);
        assert_eq!(array.summary(), "array [5, 2] i=0 j=1 highlight=[0, 1]");

        let search = VisualState::bounds(
            &[1, 3, 5],
            &[],
            Bounds {
                low: 0,
                high: 2,
                mid: Some(1),
            },
        );
        assert_eq!(search.summary(), "array [1, 3, 5] low=0 high=2 mid=1");

        let list = VisualState::list(&["A", "B"], &[]);
        assert_eq!(list.summary(), "list A -> B -> null");
    }

    #[test]
    fn visual_state_reads_tagged_toml() {
        let text = r#"
            kind = "array"
            values = [4, 1]
            highlight = [0]
            pointers = [{ name = "j", position = -1 }]
        "#;
        let state: VisualState = toml::from_str(text).expect("valid visual state");
        assert_eq!(
            state,
            VisualState::array_with_pointers(&[4, 1], &[0], &[("j", -1)])
        );
    }
}
