//! Buyer and seller taxonomy endpoints.

use crate::clients::{EtsyClient, EtsyError, QueryParams, ResponseEnvelope};

/// Buyer taxonomy endpoints.
#[derive(Clone, Copy, Debug)]
pub struct BuyerTaxonomyResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> BuyerTaxonomyResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `GET /buyer-taxonomy/nodes`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_buyer_taxonomy_nodes(&self) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get("/buyer-taxonomy/nodes", &QueryParams::new())
            .await
    }

    /// `GET /buyer-taxonomy/nodes/{taxonomy_id}/properties`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_properties_by_buyer_taxonomy_id(
        &self,
        taxonomy_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/buyer-taxonomy/nodes/{taxonomy_id}/properties"),
                &QueryParams::new(),
            )
            .await
    }
}

/// Seller taxonomy endpoints.
#[derive(Clone, Copy, Debug)]
pub struct SellerTaxonomyResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> SellerTaxonomyResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `GET /seller-taxonomy/nodes`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_seller_taxonomy_nodes(&self) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get("/seller-taxonomy/nodes", &QueryParams::new())
            .await
    }

    /// `GET /seller-taxonomy/nodes/{taxonomy_id}/properties`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_properties_by_taxonomy_id(
        &self,
        taxonomy_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/seller-taxonomy/nodes/{taxonomy_id}/properties"),
                &QueryParams::new(),
            )
            .await
    }
}
