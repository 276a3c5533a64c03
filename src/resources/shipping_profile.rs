//! Shipping profile endpoints, with their destinations and upgrades.

use crate::clients::{EtsyClient, EtsyError, Payload, QueryParams, ResponseEnvelope};
use crate::models::{
    CreateShopShippingProfileDestinationRequest, CreateShopShippingProfileRequest,
    CreateShopShippingProfileUpgradeRequest, UpdateShopShippingProfileDestinationRequest,
    UpdateShopShippingProfileRequest, UpdateShopShippingProfileUpgradeRequest,
};
use crate::resources::Pagination;

/// Shipping profile endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ShippingProfileResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> ShippingProfileResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    fn profile_path(shop_id: u64, shipping_profile_id: u64) -> String {
        format!("/shops/{shop_id}/shipping-profiles/{shipping_profile_id}")
    }

    /// `GET /shipping-carriers`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shipping_carriers(
        &self,
        origin_country_iso: &str,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let query = QueryParams::new().param("origin_country_iso", origin_country_iso);
        self.client.get("/shipping-carriers", &query).await
    }

    /// `POST /shops/{shop_id}/shipping-profiles`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn create_shop_shipping_profile(
        &self,
        shop_id: u64,
        profile: &CreateShopShippingProfileRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .post(
                &format!("/shops/{shop_id}/shipping-profiles"),
                Payload::json(profile),
            )
            .await
    }

    /// `GET /shops/{shop_id}/shipping-profiles`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shop_shipping_profiles(
        &self,
        shop_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/shipping-profiles"),
                &QueryParams::new(),
            )
            .await
    }

    /// `DELETE /shops/{shop_id}/shipping-profiles/{shipping_profile_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn delete_shop_shipping_profile(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .delete(&Self::profile_path(shop_id, shipping_profile_id))
            .await
    }

    /// `GET /shops/{shop_id}/shipping-profiles/{shipping_profile_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shop_shipping_profile(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &Self::profile_path(shop_id, shipping_profile_id),
                &QueryParams::new(),
            )
            .await
    }

    /// `PUT /shops/{shop_id}/shipping-profiles/{shipping_profile_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn update_shop_shipping_profile(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        profile: &UpdateShopShippingProfileRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .put(
                &Self::profile_path(shop_id, shipping_profile_id),
                Payload::json(profile),
            )
            .await
    }

    /// `POST .../shipping-profiles/{shipping_profile_id}/destinations`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn create_shop_shipping_profile_destination(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        destination: &CreateShopShippingProfileDestinationRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let path = format!(
            "{}/destinations",
            Self::profile_path(shop_id, shipping_profile_id)
        );
        self.client.post(&path, Payload::json(destination)).await
    }

    /// `GET .../shipping-profiles/{shipping_profile_id}/destinations`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shop_shipping_profile_destinations(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        paging: Pagination,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let path = format!(
            "{}/destinations",
            Self::profile_path(shop_id, shipping_profile_id)
        );
        self.client.get(&path, &paging.to_query()).await
    }

    /// `DELETE .../destinations/{destination_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn delete_shop_shipping_profile_destination(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        destination_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let path = format!(
            "{}/destinations/{destination_id}",
            Self::profile_path(shop_id, shipping_profile_id)
        );
        self.client.delete(&path).await
    }

    /// `PUT .../destinations/{destination_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn update_shop_shipping_profile_destination(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        destination_id: u64,
        destination: &UpdateShopShippingProfileDestinationRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let path = format!(
            "{}/destinations/{destination_id}",
            Self::profile_path(shop_id, shipping_profile_id)
        );
        self.client.put(&path, Payload::json(destination)).await
    }

    /// `POST .../shipping-profiles/{shipping_profile_id}/upgrades`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn create_shop_shipping_profile_upgrade(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        upgrade: &CreateShopShippingProfileUpgradeRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let path = format!(
            "{}/upgrades",
            Self::profile_path(shop_id, shipping_profile_id)
        );
        self.client.post(&path, Payload::json(upgrade)).await
    }

    /// `GET .../shipping-profiles/{shipping_profile_id}/upgrades`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shop_shipping_profile_upgrades(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let path = format!(
            "{}/upgrades",
            Self::profile_path(shop_id, shipping_profile_id)
        );
        self.client.get(&path, &QueryParams::new()).await
    }

    /// `DELETE .../upgrades/{upgrade_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn delete_shop_shipping_profile_upgrade(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        upgrade_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let path = format!(
            "{}/upgrades/{upgrade_id}",
            Self::profile_path(shop_id, shipping_profile_id)
        );
        self.client.delete(&path).await
    }

    /// `PUT .../upgrades/{upgrade_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn update_shop_shipping_profile_upgrade(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        upgrade_id: u64,
        upgrade: &UpdateShopShippingProfileUpgradeRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let path = format!(
            "{}/upgrades/{upgrade_id}",
            Self::profile_path(shop_id, shipping_profile_id)
        );
        self.client.put(&path, Payload::json(upgrade)).await
    }
}
