//! Route Policy
//!
//! Classifies request paths for the auth gate. The gate skips API routes
//! and static assets entirely; among the rest, auth routes are the sign-in
//! pages an authenticated user should not see, and protected routes require
//! a session.

/// Path classification for the auth gate
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    exempt_prefixes: Vec<String>,
    auth_prefixes: Vec<String>,
    protected_prefixes: Vec<String>,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            exempt_prefixes: vec![
                "/api".to_string(),
                "/static".to_string(),
                "/favicon.ico".to_string(),
            ],
            auth_prefixes: vec!["/login".to_string()],
            protected_prefixes: vec!["/dashboard".to_string(), "/chat".to_string()],
        }
    }
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

impl RoutePolicy {
    pub fn new(
        exempt_prefixes: Vec<String>,
        auth_prefixes: Vec<String>,
        protected_prefixes: Vec<String>,
    ) -> Self {
        Self {
            exempt_prefixes,
            auth_prefixes,
            protected_prefixes,
        }
    }

    /// The gate does not run at all for these paths
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_prefixes
            .iter()
            .any(|prefix| matches_prefix(path, prefix))
    }

    /// Sign-in pages an authenticated user is bounced away from
    pub fn is_auth_route(&self, path: &str) -> bool {
        self.auth_prefixes
            .iter()
            .any(|prefix| matches_prefix(path, prefix))
    }

    /// Pages that require a session
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| matches_prefix(path, prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RoutePolicy::default();

        assert!(policy.is_exempt("/api/auth/session"));
        assert!(policy.is_exempt("/static/app.css"));
        assert!(policy.is_exempt("/favicon.ico"));
        assert!(!policy.is_exempt("/dashboard"));

        assert!(policy.is_auth_route("/login"));
        assert!(policy.is_auth_route("/login/verify"));
        assert!(!policy.is_auth_route("/loginish"));

        assert!(policy.is_protected("/dashboard"));
        assert!(policy.is_protected("/dashboard/settings"));
        assert!(policy.is_protected("/chat/123"));
        assert!(!policy.is_protected("/"));
        assert!(!policy.is_protected("/about"));
    }

    #[test]
    fn test_prefix_requires_segment_boundary() {
        let policy = RoutePolicy::default();
        assert!(!policy.is_protected("/dashboardy"));
        assert!(!policy.is_exempt("/apiary"));
    }
}
