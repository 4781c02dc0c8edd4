/// Bearer credentials injected into the HTTP client at construction time.
///
/// The token is passed in explicitly rather than looked up from any
/// ambient storage, so callers and tests control exactly which identity a
/// client acts as.
#[derive(Clone)]
pub struct AuthContext {
    token: String,
}

impl AuthContext {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl std::fmt::Debug for AuthContext {
    // Tokens must not leak into logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext").field("token", &"***").finish()
    }
}
