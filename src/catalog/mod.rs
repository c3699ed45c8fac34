//! Algorithm library
//!
//! An [`Algorithm`] bundles the metadata shown in the library (category,
//! difficulty, tags, complexities), the pseudocode listing, code samples and
//! the [`StepSequence`] the player walks through.
//!
//! A [`Catalog`] is either the built-in library ([`Catalog::builtin`]) or an
//! external TOML dataset ([`Catalog::load`]). External datasets are validated
//! before use:
//!
//! - every algorithm has at least one step
//! - slugs are unique
//! - pseudocode line references point into the listing
//! - highlight indices and search bounds stay inside the visualized collection

mod builtin;
pub mod errors;

use crate::step::{Step, StepSequence, VisualState};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::rc::Rc;

pub use errors::CatalogError;

/// Library grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    Sorting,
    Searching,
    #[serde(rename = "Data Structure")]
    DataStructure,
}

impl Category {
    /// Display order in the library
    pub const ALL: [Category; 3] = [
        Category::Sorting,
        Category::Searching,
        Category::DataStructure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Sorting => "Sorting",
            Category::Searching => "Searching",
            Category::DataStructure => "Data Structure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
        }
    }
}

/// Big-O figures shown in the header
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Complexity {
    pub best: String,
    pub average: String,
    pub worst: String,
    pub space: String,
}

impl Complexity {
    pub fn new(best: &str, average: &str, worst: &str, space: &str) -> Self {
        Complexity {
            best: best.to_string(),
            average: average.to_string(),
            worst: worst.to_string(),
            space: space.to_string(),
        }
    }
}

/// Source snippet for one language tab
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeSample {
    pub language: String,
    pub snippet: String,
}

impl CodeSample {
    pub fn new(language: &str, snippet: &str) -> Self {
        CodeSample {
            language: language.to_string(),
            snippet: snippet.to_string(),
        }
    }
}

/// One algorithm and its walkthrough
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Algorithm {
    pub slug: String,
    pub name: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub short_description: String,
    pub tags: Vec<String>,
    pub complexity: Complexity,
    pub pseudocode: Vec<String>,
    pub code: Vec<CodeSample>,
    pub steps: StepSequence,
}

impl Algorithm {
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Check step references against the pseudocode and visual states
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (idx, step) in self.steps.iter().enumerate() {
            self.validate_step(idx + 1, step)?;
        }
        Ok(())
    }

    fn validate_step(&self, step_no: usize, step: &Step) -> Result<(), CatalogError> {
        if let Some(line) = step.pseudocode_line {
            if line == 0 || line > self.pseudocode.len() {
                return Err(CatalogError::PseudocodeLineOutOfRange {
                    slug: self.slug.clone(),
                    step: step_no,
                    line,
                    lines: self.pseudocode.len(),
                });
            }
        }

        let len = step.visual.len();
        if let Some(&index) = step.visual.highlight().iter().find(|&&idx| idx >= len) {
            return Err(CatalogError::HighlightOutOfRange {
                slug: self.slug.clone(),
                step: step_no,
                index,
                len,
            });
        }

        if let VisualState::Bounds { bounds, .. } = &step.visual {
            let inside = |idx: usize| idx < len;
            if !inside(bounds.low) || !inside(bounds.high) || !bounds.mid.map_or(true, inside) {
                return Err(CatalogError::BoundsOutOfRange {
                    slug: self.slug.clone(),
                    step: step_no,
                    len,
                });
            }
        }
        Ok(())
    }
}

/// Algorithm as written in a TOML dataset
#[derive(Debug, Deserialize)]
struct AlgorithmRecord {
    slug: String,
    name: String,
    category: Category,
    difficulty: Difficulty,
    #[serde(default)]
    short_description: String,
    #[serde(default)]
    tags: Vec<String>,
    complexity: Complexity,
    pseudocode: Vec<String>,
    #[serde(default)]
    code: Vec<CodeSample>,
    #[serde(default)]
    steps: Vec<Step>,
}

impl TryFrom<AlgorithmRecord> for Algorithm {
    type Error = CatalogError;

    fn try_from(record: AlgorithmRecord) -> Result<Self, Self::Error> {
        let steps = StepSequence::new(record.steps).map_err(|_| CatalogError::EmptySteps {
            slug: record.slug.clone(),
        })?;
        Ok(Algorithm {
            slug: record.slug,
            name: record.name,
            category: record.category,
            difficulty: record.difficulty,
            short_description: record.short_description,
            tags: record.tags,
            complexity: record.complexity,
            pseudocode: record.pseudocode,
            code: record.code,
            steps,
        })
    }
}

#[derive(Debug, Deserialize)]
struct Dataset {
    #[serde(rename = "algorithm", default)]
    algorithms: Vec<AlgorithmRecord>,
}

/// Slug-indexed collection of algorithms
#[derive(Debug, Clone)]
pub struct Catalog {
    algorithms: Vec<Rc<Algorithm>>,
    by_slug: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating every algorithm
    pub fn new(algorithms: Vec<Algorithm>) -> Result<Self, CatalogError> {
        let mut by_slug = FxHashMap::default();
        for (idx, algorithm) in algorithms.iter().enumerate() {
            algorithm.validate()?;
            if by_slug.insert(algorithm.slug.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateSlug {
                    slug: algorithm.slug.clone(),
                });
            }
        }
        Ok(Catalog {
            algorithms: algorithms.into_iter().map(Rc::new).collect(),
            by_slug,
        })
    }

    /// The nine built-in walkthroughs
    pub fn builtin() -> Self {
        let algorithms: Vec<Rc<Algorithm>> =
            builtin::algorithms().into_iter().map(Rc::new).collect();
        let by_slug = algorithms
            .iter()
            .enumerate()
            .map(|(idx, algorithm)| (algorithm.slug.clone(), idx))
            .collect();
        Catalog {
            algorithms,
            by_slug,
        }
    }

    /// Parse and validate a TOML dataset
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let dataset: Dataset = toml::from_str(text)?;
        let algorithms = dataset
            .algorithms
            .into_iter()
            .map(Algorithm::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(algorithms)
    }

    /// Read a TOML dataset from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Catalog::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), algorithms = catalog.len(), "dataset loaded");
        Ok(catalog)
    }

    pub fn get(&self, slug: &str) -> Option<Rc<Algorithm>> {
        self.by_slug
            .get(slug)
            .map(|&idx| Rc::clone(&self.algorithms[idx]))
    }

    pub fn algorithms(&self) -> &[Rc<Algorithm>] {
        &self.algorithms
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Rc<Algorithm>> {
        self.algorithms
            .iter()
            .filter(move |algorithm| algorithm.category == category)
    }

    /// Algorithms in library order: grouped by category, then catalog order
    pub fn library_order(&self) -> Vec<Rc<Algorithm>> {
        Category::ALL
            .iter()
            .flat_map(|&category| self.by_category(category).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const VALID: &str = r#"
        [[algorithm]]
        slug = "tiny-sort"
        name = "Tiny Sort"
        category = "Sorting"
        difficulty = "Beginner"
        tags = ["array"]
        pseudocode = ["look", "swap"]

        [algorithm.complexity]
        best = "O(1)"
        average = "O(1)"
        worst = "O(1)"
        space = "O(1)"

        [[algorithm.code]]
        language = "Rust"
        snippet = "fn tiny() {}"

        [[algorithm.steps]]
        title = "Start"
        pseudocode_line = 1
        visual = { kind = "array", values = [2, 1], highlight = [0, 1] }

        [[algorithm.steps]]
        title = "Swap"
        note = "swap"
        pseudocode_line = 2
        visual = { kind = "array", values = [1, 2], pointers = [{ name = "i", position = 0 }] }
    "#;

    fn with_steps(steps: &str) -> String {
        format!(
            r#"
            [[algorithm]]
            slug = "broken"
            name = "Broken"
            category = "Searching"
            difficulty = "Intermediate"
            pseudocode = ["only line"]
            complexity = {{ best = "-", average = "-", worst = "-", space = "-" }}
            {steps}
            "#
        )
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);
        for algorithm in catalog.algorithms() {
            algorithm
                .validate()
                .unwrap_or_else(|e| panic!("{} failed validation: {}", algorithm.slug, e));
        }
    }

    #[test]
    fn builtin_slugs_are_unique() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for algorithm in catalog.algorithms() {
            assert!(seen.insert(algorithm.slug.clone()), "duplicate {}", algorithm.slug);
        }
    }

    #[test]
    fn get_returns_matching_algorithm() {
        let catalog = Catalog::builtin();
        let first = &catalog.algorithms()[0];
        let found = catalog.get(&first.slug).expect("first slug resolves");
        assert!(Rc::ptr_eq(first, &found));
        assert!(catalog.get("non-existent").is_none());
    }

    #[test]
    fn library_order_groups_by_category() {
        let catalog = Catalog::builtin();
        let names: Vec<String> = catalog
            .by_category(Category::Sorting)
            .map(|a| a.name.clone())
            .collect();
        assert_eq!(
            names,
            ["Bubble Sort", "Selection Sort", "Merge Sort", "Insertion Sort"]
        );

        let order = catalog.library_order();
        assert_eq!(order.len(), 9);
        assert_eq!(order.last().map(|a| a.category), Some(Category::DataStructure));
    }

    #[test]
    fn parses_a_valid_dataset() {
        let catalog = Catalog::from_toml_str(VALID).expect("valid dataset");
        let tiny = catalog.get("tiny-sort").expect("tiny-sort exists");
        assert_eq!(tiny.total_steps(), 2);
        assert_eq!(tiny.code[0].language, "Rust");
        assert_eq!(tiny.steps.get(1).note.as_deref(), Some("swap"));
    }

    #[test]
    fn rejects_algorithm_without_steps() {
        let err = Catalog::from_toml_str(&with_steps("")).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySteps { ref slug } if slug == "broken"));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let text = format!("{VALID}\n{VALID}");
        let err = Catalog::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug { .. }));
    }

    #[test]
    fn rejects_pseudocode_line_out_of_range() {
        let steps = r#"
            [[algorithm.steps]]
            pseudocode_line = 2
        "#;
        let err = Catalog::from_toml_str(&with_steps(steps)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::PseudocodeLineOutOfRange { step: 1, line: 2, lines: 1, .. }
        ));
    }

    #[test]
    fn rejects_highlight_out_of_range() {
        let steps = r#"
            [[algorithm.steps]]
            visual = { kind = "stack", items = ["A"], highlight = [3] }
        "#;
        let err = Catalog::from_toml_str(&with_steps(steps)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::HighlightOutOfRange { index: 3, len: 1, .. }
        ));
    }

    #[test]
    fn rejects_bounds_out_of_range() {
        let steps = r#"
            [[algorithm.steps]]
            visual = { kind = "bounds", values = [1, 2], bounds = { low = 0, high = 5 } }
        "#;
        let err = Catalog::from_toml_str(&with_steps(steps)).unwrap_err();
        assert!(matches!(err, CatalogError::BoundsOutOfRange { len: 2, .. }));
    }

    #[test]
    fn reports_toml_syntax_errors() {
        let err = Catalog::from_toml_str("[[algorithm]\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
