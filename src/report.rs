use thiserror::Error;

use crate::verb::Verb;

/// Outcome of one registration pass.
///
/// Registration is best effort: a malformed route never aborts the pass, it
/// is skipped and recorded here. Callers that want strict behavior can
/// assert on [`Report::is_clean`].
#[derive(Debug, Default)]
pub struct Report {
    /// Routes registered on the router, in registration order.
    pub registered: Vec<Registered>,
    /// Routes that were skipped, with the reason for each.
    pub skipped: Vec<Skipped>,
}

impl Report {
    /// `true` when no route was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// A route that made it onto the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    /// The route name as declared by the controller.
    pub name: String,
    pub verb: Verb,
    /// The final path, after name conversion or override normalization.
    pub path: String,
}

/// A route the registrar declined to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub name: String,
    pub reason: SkipReason,
}

/// Why a route was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The route declared [`Verb::Unset`].
    #[error("no http verb declared")]
    UnsetVerb,
    /// The (path, verb) pair collides with a route already registered in
    /// this registrar.
    #[error("{verb} {path} is already registered")]
    DuplicateRoute { verb: Verb, path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_clean() {
        let report = Report::default();
        assert!(report.is_clean());
        assert_eq!(report.registered_count(), 0);
    }

    #[test]
    fn skip_reasons_display() {
        assert_eq!(SkipReason::UnsetVerb.to_string(), "no http verb declared");
        let dup = SkipReason::DuplicateRoute {
            verb: Verb::Get,
            path: "/users".into(),
        };
        assert_eq!(dup.to_string(), "GET /users is already registered");
    }
}
