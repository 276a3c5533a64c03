//! User endpoints.

use crate::clients::{EtsyClient, EtsyError, QueryParams, ResponseEnvelope};

/// User endpoints.
#[derive(Clone, Copy, Debug)]
pub struct UserResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> UserResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `GET /users/{user_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_user(&self, user_id: u64) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(&format!("/users/{user_id}"), &QueryParams::new())
            .await
    }

    /// `GET /users/me`, the user and shop id behind the access token.
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_me(&self) -> Result<ResponseEnvelope, EtsyError> {
        self.client.get("/users/me", &QueryParams::new()).await
    }
}
