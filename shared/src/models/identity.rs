use serde::{Deserialize, Serialize};

/// Signed-in user as seen by pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub verified: bool,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            verified: false,
        }
    }
}

/// Read-only view of whoever is currently signed in.
pub trait AuthSource {
    fn current_user(&self) -> Option<Identity>;
}

impl AuthSource for Option<Identity> {
    fn current_user(&self) -> Option<Identity> {
        self.clone()
    }
}
