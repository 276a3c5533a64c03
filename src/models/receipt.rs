//! Receipt vocabulary and request types.

use super::contract::{request_contract, wire_enum};

wire_enum! {
    /// Sort key for receipt searches.
    pub enum ReceiptSortOn {
        Created => "created",
        Updated => "updated",
        ReceiptId => "receipt_id",
    }
}

request_contract! {
    /// Body of `updateShopReceipt`.
    pub struct UpdateShopReceiptRequest / UpdateShopReceiptRequestBuilder {
        mandatory: [],
        nullable: [],
        fields: {
            was_shipped: bool => "was_shipped",
            was_paid: bool => "was_paid",
        }
    }
}

request_contract! {
    /// Body of `createReceiptShipment`.
    pub struct CreateReceiptShipmentRequest / CreateReceiptShipmentRequestBuilder {
        mandatory: [],
        nullable: [],
        fields: {
            tracking_code: String => "tracking_code",
            carrier_name: String => "carrier_name",
            send_bcc: bool => "send_bcc",
            note_to_buyer: String => "note_to_buyer",
        }
    }
}
