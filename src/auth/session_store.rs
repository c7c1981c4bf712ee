use super::Credentials;

#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    ///
    /// Credentials of the currently signed in user, if any.
    /// Read freshly at every use, the token may rotate between reads.
    ///
    fn credentials(&self) -> Option<Credentials>;
}
