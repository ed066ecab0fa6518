use axum::http::Method;

/// Outcome of a policy lookup for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    RequiresAuth,
}

struct Rule {
    // None matches any method
    method: Option<Method>,
    path: &'static str,
    access: Access,
}

impl Rule {
    fn matches(&self, method: &Method, path: &str) -> bool {
        let method_matches = match &self.method {
            Some(m) => m == method,
            None => true,
        };
        method_matches && self.path == path
    }
}

/// Static table deciding which routes require authentication.
///
/// Built once at startup and never mutated. Lookup happens in the policy
/// middleware before handler dispatch; everything not explicitly public
/// requires a verified identity.
pub struct AccessPolicy {
    rules: Vec<Rule>,
}

impl AccessPolicy {
    /// The service's route policy: sign-up, sign-in, and the error
    /// endpoint are public; every other route is protected.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule {
                    method: Some(Method::POST),
                    path: "/users/sign-up",
                    access: Access::Public,
                },
                Rule {
                    method: Some(Method::POST),
                    path: "/login",
                    access: Access::Public,
                },
                Rule {
                    method: None,
                    path: "/error",
                    access: Access::Public,
                },
            ],
        }
    }

    /// Decide whether a request is public or needs authentication.
    pub fn authorize(&self, method: &Method, path: &str) -> Access {
        self.rules
            .iter()
            .find(|rule| rule.matches(method, path))
            .map(|rule| rule.access)
            .unwrap_or(Access::RequiresAuth)
    }
}
