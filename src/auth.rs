/// Decides whether a login attempt is accepted. No session is issued.
pub trait AuthProvider: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single configured user name and password.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl AuthProvider for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username.trim() == self.username && password.trim() == self.password
    }
}
