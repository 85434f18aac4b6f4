//! Client for the registration HTTP endpoint

mod client;
mod traits;

pub use client::{RegisterError, RegistrationClient};
pub use traits::RegistrationApi;

#[cfg(test)]
pub use traits::MockRegistrationApi;
