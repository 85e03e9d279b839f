//! Body conventions.

use crate::category::Category;
use crate::violation::{RuleKey, Violation};

use super::frontmatter::normalize_line_endings;

/// Info string of the fenced block HLS documents must contain.
pub const EXAMPLE_BLOCK_KIND: &str = "gherkin";

const FENCE: &str = "```";

/// Returns true if `body` contains an opening ```` ```gherkin ```` line
/// followed later by a closing ```` ``` ```` line.
pub fn has_example_block(body: &str) -> bool {
    let normalized = normalize_line_endings(body);
    let opening = format!("{}{}", FENCE, EXAMPLE_BLOCK_KIND);

    let mut lines = normalized.split('\n').map(str::trim);
    // A closing fence only counts after an opening one; any opening will do.
    if !lines.any(|line| line == opening) {
        return false;
    }
    lines.any(|line| line == FENCE)
}

/// Body checks for a document of `category`, as untargeted violations.
pub fn check_body(category: Category, body: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    if category.requires_example_block() && !has_example_block(body) {
        violations.push(Violation::untargeted(
            RuleKey::MissingGherkin,
            format!(
                "expected at least one fenced {} code block",
                EXAMPLE_BLOCK_KIND
            ),
        ));
    }
    violations
}
