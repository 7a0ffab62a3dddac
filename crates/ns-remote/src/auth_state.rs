use ns_core::Identity;

/// Authentication state published by the auth gateway.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    SignedIn(Identity),
    #[default]
    SignedOut,
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            Self::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}
