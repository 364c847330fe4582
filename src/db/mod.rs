//! User directory storage via the repository pattern.
//!
//! The HTTP layer talks to a `UserRepository` trait object, so storage
//! backends can be swapped without touching handlers. Only the in-memory
//! backend ships today; a persistent one would slot in as another module
//! under `repositories`.

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod models;
pub mod repositories;
pub mod repository;

pub use models::{NewUser, User};
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, UserRepository};

use std::sync::Arc;

/// Build the repository for the selected backend.
#[cfg(feature = "local-repo")]
pub fn create_repository() -> Arc<dyn UserRepository> {
    Arc::new(LocalRepository::new())
}
