//! Pass 2: resolve recorded links against the completed registry.

use tracing::debug;

use crate::category::is_valid_id;
use crate::violation::{RuleKey, Violation};

use super::scan::{RecordedFile, Registry};

/// Report every syntactically valid link target that no document declares.
///
/// Malformed targets are skipped; the metadata validator already reported
/// them. A document may link to its own identifier.
pub fn resolve_links(registry: &Registry, files: &[RecordedFile]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for file in files {
        for target in &file.links {
            if !is_valid_id(target) || registry.contains(target) {
                continue;
            }
            debug!(path = %file.path, target = %target, "unresolved link");
            violations.push(Violation::new(
                file.path.clone(),
                RuleKey::UnresolvedLink,
                format!("links contains unknown id {}", target),
            ));
        }
    }
    violations
}
