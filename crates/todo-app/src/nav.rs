//! Navigation routes for the presentation shell.

/// The closed set of screens the shell switches on. Not part of the
/// list pipeline; handed to the presentation layer as plain data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Startup splash.
    #[default]
    Splash,
    /// The task list.
    Home,
    /// Add a new task (`None`) or edit an existing one (`Some(id)`).
    AddEdit(Option<i64>),
}

impl Route {
    /// Whether this route edits an already-persisted task.
    pub fn is_editing(self) -> bool {
        matches!(self, Self::AddEdit(Some(_)))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edit_distinguishes_new_from_existing() {
        assert!(!Route::AddEdit(None).is_editing());
        assert!(Route::AddEdit(Some(3)).is_editing());
        assert!(!Route::Home.is_editing());
    }

    #[test]
    fn default_route_is_splash() {
        assert_eq!(Route::default(), Route::Splash);
    }
}
