use giveaway_core::auth::Access;

/// Result of the authorization gate.
#[derive(Debug, Clone)]
pub struct AuthState {
    /// Access computed from the stored session at startup.
    pub access: Access,
    /// Set by the mount handler once the gate has confirmed `access`.
    pub authorized: bool,
}

impl AuthState {
    pub fn new(access: Access) -> Self {
        Self {
            access,
            authorized: false,
        }
    }
}
