//! Shop receipt endpoints.

use crate::clients::{EtsyClient, EtsyError, Payload, QueryParams, ResponseEnvelope};
use crate::models::{
    CreateReceiptShipmentRequest, ReceiptSortOn, SortOrder, UpdateShopReceiptRequest,
};

/// Filters for `getShopReceipts`.
///
/// Timestamps are Unix epoch seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShopReceiptsParams {
    /// Receipts created at or after this time.
    pub min_created: Option<i64>,
    /// Receipts created at or before this time.
    pub max_created: Option<i64>,
    pub min_last_modified: Option<i64>,
    pub max_last_modified: Option<i64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_on: Option<ReceiptSortOn>,
    pub sort_order: Option<SortOrder>,
    pub was_paid: Option<bool>,
    pub was_shipped: Option<bool>,
    pub was_delivered: Option<bool>,
    pub was_canceled: Option<bool>,
}

impl ShopReceiptsParams {
    /// Returns the set filters as query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .opt_param("min_created", self.min_created)
            .opt_param("max_created", self.max_created)
            .opt_param("min_last_modified", self.min_last_modified)
            .opt_param("max_last_modified", self.max_last_modified)
            .opt_param("limit", self.limit)
            .opt_param("offset", self.offset)
            .opt_param("sort_on", self.sort_on)
            .opt_param("sort_order", self.sort_order)
            .opt_param("was_paid", self.was_paid)
            .opt_param("was_shipped", self.was_shipped)
            .opt_param("was_delivered", self.was_delivered)
            .opt_param("was_canceled", self.was_canceled)
    }
}

/// Shop receipt endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ReceiptResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> ReceiptResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `GET /shops/{shop_id}/receipts/{receipt_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shop_receipt(
        &self,
        shop_id: u64,
        receipt_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/receipts/{receipt_id}"),
                &QueryParams::new(),
            )
            .await
    }

    /// `PUT /shops/{shop_id}/receipts/{receipt_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn update_shop_receipt(
        &self,
        shop_id: u64,
        receipt_id: u64,
        receipt: &UpdateShopReceiptRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .put(
                &format!("/shops/{shop_id}/receipts/{receipt_id}"),
                Payload::json(receipt),
            )
            .await
    }

    /// `GET /shops/{shop_id}/receipts`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shop_receipts(
        &self,
        shop_id: u64,
        params: &ShopReceiptsParams,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(&format!("/shops/{shop_id}/receipts"), &params.to_query())
            .await
    }

    /// `POST /shops/{shop_id}/receipts/{receipt_id}/tracking`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn create_receipt_shipment(
        &self,
        shop_id: u64,
        receipt_id: u64,
        shipment: &CreateReceiptShipmentRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .post(
                &format!("/shops/{shop_id}/receipts/{receipt_id}/tracking"),
                Payload::json(shipment),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_filters_in_declared_order() {
        let params = ShopReceiptsParams {
            min_created: Some(1_700_000_000),
            sort_on: Some(ReceiptSortOn::ReceiptId),
            sort_order: Some(SortOrder::Asc),
            was_shipped: Some(false),
            ..Default::default()
        };

        assert_eq!(
            params.to_query().to_query_string(),
            "min_created=1700000000&sort_on=receipt_id&sort_order=asc&was_shipped=false"
        );
    }

    #[test]
    fn test_default_receipt_filters_are_empty() {
        assert!(ShopReceiptsParams::default().to_query().is_empty());
    }
}
