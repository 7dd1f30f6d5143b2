use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, RestClient};

use crate::api::UserRolesApi;
use crate::models::{User, UserRoleAssignment};

const BASE: &str = "/api/user-roles";

#[derive(Debug, Clone)]
pub struct UserRolesClient {
    rest: RestClient,
}

impl UserRolesClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl UserRolesApi for UserRolesClient {
    async fn assign(&self, user_id: Id, role_ids: &[Id]) -> Result<User, ApiError> {
        let request = UserRoleAssignment {
            user_id,
            role_ids: role_ids.to_vec(),
        };
        self.rest.post(&format!("{BASE}/assign"), &request).await
    }

    async fn unassign(&self, user_id: Id, role_id: Id) -> Result<User, ApiError> {
        self.rest
            .delete_returning(&format!("{BASE}/{user_id}/roles/{role_id}"))
            .await
    }

    async fn get(&self, user_id: Id) -> Result<User, ApiError> {
        self.rest.get(&format!("{BASE}/{user_id}")).await
    }
}
