//! Payment endpoints.

use crate::clients::{EtsyClient, EtsyError, QueryParams, ResponseEnvelope};
use crate::resources::join_ids;

/// Payment endpoints.
#[derive(Clone, Copy, Debug)]
pub struct PaymentResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> PaymentResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `GET /shops/{shop_id}/payment-account/ledger-entries/payments`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shop_payment_account_ledger_entry_payments(
        &self,
        shop_id: u64,
        ledger_entry_ids: &[u64],
    ) -> Result<ResponseEnvelope, EtsyError> {
        let query = QueryParams::new().param("ledger_entry_ids", join_ids(ledger_entry_ids));
        self.client
            .get(
                &format!("/shops/{shop_id}/payment-account/ledger-entries/payments"),
                &query,
            )
            .await
    }

    /// `GET /shops/{shop_id}/receipts/{receipt_id}/payments`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_shop_payment_by_receipt_id(
        &self,
        shop_id: u64,
        receipt_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/receipts/{receipt_id}/payments"),
                &QueryParams::new(),
            )
            .await
    }

    /// `GET /shops/{shop_id}/payments`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_payments(
        &self,
        shop_id: u64,
        payment_ids: &[u64],
    ) -> Result<ResponseEnvelope, EtsyError> {
        let query = QueryParams::new().param("payment_ids", join_ids(payment_ids));
        self.client
            .get(&format!("/shops/{shop_id}/payments"), &query)
            .await
    }
}
