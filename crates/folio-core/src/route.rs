use serde::{Deserialize, Serialize};

/// The site's navigable routes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Home,
    Projects,
}

impl Route {
    pub fn href(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Projects => "/projects",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Projects => "Projects",
        }
    }

    pub fn all() -> &'static [Route] {
        &[Route::Home, Route::Projects]
    }

    /// Exact string equality only: no prefix matching, no trailing-slash
    /// normalization.
    pub fn is_active(&self, path: &str) -> bool {
        self.href() == path
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::all().iter().copied().find(|r| r.is_active(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_exact_match() {
        assert!(Route::Home.is_active("/"));
        assert!(Route::Projects.is_active("/projects"));
    }

    #[test]
    fn test_is_active_other_route() {
        assert!(!Route::Home.is_active("/projects"));
        assert!(!Route::Projects.is_active("/"));
    }

    #[test]
    fn test_is_active_no_prefix_or_slash_matching() {
        assert!(!Route::Projects.is_active("/projects/"));
        assert!(!Route::Projects.is_active("/projects/1"));
        assert!(!Route::Home.is_active(""));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/projects"), Some(Route::Projects));
        assert_eq!(Route::from_path("/missing"), None);
    }
}
