//! Repository for the `users` container (partition key `/id`).

use super::base;
use crate::models::user::User;
use crate::store::{DocumentStore, StoreError};

pub struct UserRepo;

impl UserRepo {
    pub async fn find_by_id(store: &dyn DocumentStore, id: &str) -> Result<Option<User>, StoreError> {
        base::find(store, id, id).await
    }

    /// Find a user by email address (cross-partition).
    pub async fn find_by_email(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Option<User>, StoreError> {
        let users = base::list_where::<User>(store, "email", email).await?;
        Ok(users.into_iter().next())
    }

    pub async fn upsert(store: &dyn DocumentStore, user: User) -> Result<User, StoreError> {
        base::upsert(store, user).await
    }
}
