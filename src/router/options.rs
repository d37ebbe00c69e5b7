use serde::{Deserialize, Serialize};

/// Routing-level behaviour for requests without an exact match. Every flag
/// only changes the reported `Dispatch` outcome; nothing is written to a
/// response by the router itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterOptions {
    /// Recommend a redirect when the path matches a route with the trailing
    /// slash toggled.
    pub redirect_trailing_slash: bool,
    /// Recommend a redirect to the cleaned path (`//`, `.` and `..` removed)
    /// when that path has a route.
    pub redirect_fixed_path: bool,
    /// Report `MethodNotAllowed` with the allowed methods when another method
    /// has a route for the path.
    pub handle_method_not_allowed: bool,
    /// Answer OPTIONS requests without an explicit route with the allowed
    /// methods.
    pub handle_options: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            redirect_trailing_slash: true,
            redirect_fixed_path: true,
            handle_method_not_allowed: true,
            handle_options: true,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn redirect_trailing_slash(mut self, value: bool) -> Self {
        self.options.redirect_trailing_slash = value;
        self
    }

    pub fn redirect_fixed_path(mut self, value: bool) -> Self {
        self.options.redirect_fixed_path = value;
        self
    }

    pub fn handle_method_not_allowed(mut self, value: bool) -> Self {
        self.options.handle_method_not_allowed = value;
        self
    }

    pub fn handle_options(mut self, value: bool) -> Self {
        self.options.handle_options = value;
        self
    }

    pub fn build(self) -> RouterOptions {
        self.options
    }
}
