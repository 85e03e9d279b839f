//! Document categories, the identifier grammar, and filename classification.
//!
//! Every document lives in one of three fixed category directories. The
//! category decides the directory name, the identifier prefix, the filename
//! pattern and whether the body must carry a fenced example block.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::violation::{RuleKey, Violation};

/// Identifier grammar shared by every category: `(HLS|LLS|TC)-###`.
static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(HLS|LLS|TC)-[0-9]{3}$").expect("valid id pattern"));

static HLS_FILENAME: LazyLock<Regex> = LazyLock::new(|| filename_pattern("HLS"));
static LLS_FILENAME: LazyLock<Regex> = LazyLock::new(|| filename_pattern("LLS"));
static TC_FILENAME: LazyLock<Regex> = LazyLock::new(|| filename_pattern("TC"));

fn filename_pattern(prefix: &str) -> Regex {
    Regex::new(&format!(r"^({}-[0-9]{{3}})-[a-z0-9][a-z0-9-]*\.md$", prefix))
        .expect("valid filename pattern")
}

/// File extension (including the dot) that marks a file as a document.
pub const DOCUMENT_EXTENSION: &str = ".md";

/// Returns true if `id` matches the identifier grammar.
pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

/// Returns true if a directory entry name should be treated as a document.
pub fn is_document_name(name: &str) -> bool {
    name.ends_with(DOCUMENT_EXTENSION)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// High-level specs
    Hls,
    /// Low-level specs
    Lls,
    /// Test cases
    Tc,
}

impl Category {
    /// All categories in traversal order.
    pub const ALL: [Category; 3] = [Category::Hls, Category::Lls, Category::Tc];

    /// Directory name under the workspace root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Hls => "hls",
            Category::Lls => "lls",
            Category::Tc => "tc",
        }
    }

    /// Identifier prefix, without the trailing hyphen.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Hls => "HLS",
            Category::Lls => "LLS",
            Category::Tc => "TC",
        }
    }

    /// Whether documents in this category must contain a fenced gherkin block.
    pub fn requires_example_block(self) -> bool {
        matches!(self, Category::Hls)
    }

    /// Human-readable form of the filename pattern, used in violation messages.
    pub fn filename_hint(self) -> String {
        format!("{}-###-<slug>.md", self.prefix())
    }

    fn filename_regex(self) -> &'static Regex {
        match self {
            Category::Hls => &HLS_FILENAME,
            Category::Lls => &LLS_FILENAME,
            Category::Tc => &TC_FILENAME,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Outcome of matching a base name against a category's filename pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The name matched; carries the identifier embedded in it.
    Valid(String),
    /// The name did not match; carries the `invalid-filename` violation
    /// (without a target, the caller stamps the path).
    Invalid(Violation),
}

impl Classification {
    /// The identifier the filename declares, if it parsed.
    pub fn expected_id(&self) -> Option<&str> {
        match self {
            Classification::Valid(id) => Some(id),
            Classification::Invalid(_) => None,
        }
    }
}

/// Match `base_name` against the naming pattern for `category`.
pub fn classify(category: Category, base_name: &str) -> Classification {
    match category.filename_regex().captures(base_name) {
        Some(caps) => Classification::Valid(caps[1].to_string()),
        None => Classification::Invalid(Violation::untargeted(
            RuleKey::InvalidFilename,
            format!("expected filename pattern {}", category.filename_hint()),
        )),
    }
}
