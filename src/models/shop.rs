//! Shop request types.

use super::contract::request_contract;

request_contract! {
    /// Body of `updateShop`. Every field is optional.
    pub struct UpdateShopRequest / UpdateShopRequestBuilder {
        mandatory: [],
        nullable: [],
        fields: {
            title: String => "title",
            announcement: String => "announcement",
            sale_message: String => "sale_message",
            digital_sale_message: String => "digital_sale_message",
            policy_additional: String => "policy_additional",
        }
    }
}
