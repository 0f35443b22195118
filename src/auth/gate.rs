// src/auth/gate.rs

/// What the identity provider told us before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGate {
    /// The provider answered (successfully or not).
    pub loaded: bool,
    pub authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Provider still pending: show the "verifying" page.
    Checking,
    Redirect(String),
    Allowed,
}

impl AccessGate {
    pub fn decide(&self, sign_in_url: &str) -> Access {
        match (self.loaded, self.authenticated) {
            (false, _) => Access::Checking,
            (true, false) => Access::Redirect(sign_in_url.to_string()),
            (true, true) => Access::Allowed,
        }
    }
}
