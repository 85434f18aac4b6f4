//! Trait abstraction for the registration client to enable mocking in tests

use super::client::RegisterError;
use crate::state::RegistrationPayload;
use async_trait::async_trait;

/// Trait for registration endpoint operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submit one registration. `Ok` means the server answered with a 2xx status.
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), RegisterError>;
}
