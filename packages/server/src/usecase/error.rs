//! UseCase-level errors.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Conditions under which an inbound request is dropped.
///
/// None of these reach the client: the handler logs them at debug and
/// moves on, per the protocol's silent-rejection rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("client '{0}' has no recorded room membership")]
    NoMembership(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
