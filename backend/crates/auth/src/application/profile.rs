//! Read Profile Use Case

use std::sync::Arc;

use kernel::identity::CurrentUser;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct ReadProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ReadProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// The caller's own user row
    pub async fn execute(&self, caller: CurrentUser) -> AuthResult<User> {
        self.user_repo
            .find_by_id(caller.user_id)
            .await?
            .ok_or(AuthError::UserNotFound(caller.user_id))
    }
}
