//! Shop endpoints.

use crate::clients::{EtsyClient, EtsyError, Payload, QueryParams, ResponseEnvelope};
use crate::models::UpdateShopRequest;
use crate::resources::Pagination;

/// Shop endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ShopResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> ShopResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `GET /shops/{shop_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shop(&self, shop_id: u64) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(&format!("/shops/{shop_id}"), &QueryParams::new())
            .await
    }

    /// `PUT /shops/{shop_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn update_shop(
        &self,
        shop_id: u64,
        shop: &UpdateShopRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .put(&format!("/shops/{shop_id}"), Payload::json(shop))
            .await
    }

    /// `GET /users/{user_id}/shops`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shop_by_owner_user_id(
        &self,
        user_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(&format!("/users/{user_id}/shops"), &QueryParams::new())
            .await
    }

    /// `GET /shops?shop_name=...`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn find_shops(
        &self,
        shop_name: &str,
        paging: Pagination,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let query = paging.append_to(QueryParams::new().param("shop_name", shop_name));
        self.client.get("/shops", &query).await
    }
}
