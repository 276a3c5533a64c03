//! Shipping profile vocabulary and request types.

use super::contract::{request_contract, wire_enum};

wire_enum! {
    /// Unit of the processing time range.
    pub enum ProcessingTimeUnit {
        BusinessDays => "business_days",
        Weeks => "weeks",
    }
}

wire_enum! {
    /// Region a shipping destination covers when no country is given.
    pub enum DestinationRegion {
        Eu => "eu",
        NonEu => "non_eu",
        None => "none",
    }
}

wire_enum! {
    /// Whether a shipping upgrade is domestic or international.
    pub enum ShippingUpgradeType {
        Domestic => "0",
        International => "1",
    }
}

request_contract! {
    /// Body of `createShopShippingProfile`.
    ///
    /// Either `destination_country_iso` or `destination_region` identifies
    /// where the profile ships to.
    pub struct CreateShopShippingProfileRequest / CreateShopShippingProfileRequestBuilder {
        mandatory: [
            "title", "origin_country_iso", "primary_cost", "secondary_cost",
            "min_processing_time", "max_processing_time",
        ],
        nullable: [
            "destination_country_iso", "mail_class", "min_delivery_days", "max_delivery_days",
        ],
        fields: {
            title: String => "title",
            origin_country_iso: String => "origin_country_iso",
            primary_cost: f64 => "primary_cost",
            secondary_cost: f64 => "secondary_cost",
            min_processing_time: i64 => "min_processing_time",
            max_processing_time: i64 => "max_processing_time",
            processing_time_unit: ProcessingTimeUnit => "processing_time_unit",
            destination_country_iso: String => "destination_country_iso",
            destination_region: DestinationRegion => "destination_region",
            origin_postal_code: String => "origin_postal_code",
            shipping_carrier_id: i64 => "shipping_carrier_id",
            mail_class: String => "mail_class",
            min_delivery_days: i64 => "min_delivery_days",
            max_delivery_days: i64 => "max_delivery_days",
        }
    }
}

request_contract! {
    /// Body of `updateShopShippingProfile`.
    pub struct UpdateShopShippingProfileRequest / UpdateShopShippingProfileRequestBuilder {
        mandatory: [],
        nullable: ["origin_postal_code"],
        fields: {
            title: String => "title",
            origin_country_iso: String => "origin_country_iso",
            min_processing_time: i64 => "min_processing_time",
            max_processing_time: i64 => "max_processing_time",
            processing_time_unit: ProcessingTimeUnit => "processing_time_unit",
            origin_postal_code: String => "origin_postal_code",
        }
    }
}

request_contract! {
    /// Body of `createShopShippingProfileDestination`.
    pub struct CreateShopShippingProfileDestinationRequest
        / CreateShopShippingProfileDestinationRequestBuilder {
        mandatory: ["primary_cost", "secondary_cost"],
        nullable: [
            "destination_country_iso", "mail_class", "min_delivery_days", "max_delivery_days",
        ],
        fields: {
            primary_cost: f64 => "primary_cost",
            secondary_cost: f64 => "secondary_cost",
            destination_country_iso: String => "destination_country_iso",
            destination_region: DestinationRegion => "destination_region",
            shipping_carrier_id: i64 => "shipping_carrier_id",
            mail_class: String => "mail_class",
            min_delivery_days: i64 => "min_delivery_days",
            max_delivery_days: i64 => "max_delivery_days",
        }
    }
}

request_contract! {
    /// Body of `createShopShippingProfileUpgrade`.
    ///
    /// The upgrade kind is sent under the `type` key.
    pub struct CreateShopShippingProfileUpgradeRequest
        / CreateShopShippingProfileUpgradeRequestBuilder {
        mandatory: ["type", "upgrade_name", "price", "secondary_price"],
        nullable: ["mail_class", "min_delivery_days", "max_delivery_days"],
        fields: {
            upgrade_type: ShippingUpgradeType => "type",
            upgrade_name: String => "upgrade_name",
            price: f64 => "price",
            secondary_price: f64 => "secondary_price",
            shipping_carrier_id: i64 => "shipping_carrier_id",
            mail_class: String => "mail_class",
            min_delivery_days: i64 => "min_delivery_days",
            max_delivery_days: i64 => "max_delivery_days",
        }
    }
}

request_contract! {
    /// Body of `updateShopShippingProfileDestination`.
    pub struct UpdateShopShippingProfileDestinationRequest
        / UpdateShopShippingProfileDestinationRequestBuilder {
        mandatory: [],
        nullable: [
            "primary_cost", "secondary_cost", "destination_country_iso", "shipping_carrier_id",
            "mail_class", "min_delivery_days", "max_delivery_days",
        ],
        fields: {
            primary_cost: f64 => "primary_cost",
            secondary_cost: f64 => "secondary_cost",
            destination_country_iso: String => "destination_country_iso",
            destination_region: DestinationRegion => "destination_region",
            shipping_carrier_id: i64 => "shipping_carrier_id",
            mail_class: String => "mail_class",
            min_delivery_days: i64 => "min_delivery_days",
            max_delivery_days: i64 => "max_delivery_days",
        }
    }
}

request_contract! {
    /// Body of `updateShopShippingProfileUpgrade`.
    ///
    /// The upgrade kind is sent under the `type` key.
    pub struct UpdateShopShippingProfileUpgradeRequest
        / UpdateShopShippingProfileUpgradeRequestBuilder {
        mandatory: [],
        nullable: [
            "upgrade_name", "price", "secondary_price", "shipping_carrier_id", "mail_class",
            "min_delivery_days", "max_delivery_days",
        ],
        fields: {
            upgrade_type: ShippingUpgradeType => "type",
            upgrade_name: String => "upgrade_name",
            price: f64 => "price",
            secondary_price: f64 => "secondary_price",
            shipping_carrier_id: i64 => "shipping_carrier_id",
            mail_class: String => "mail_class",
            min_delivery_days: i64 => "min_delivery_days",
            max_delivery_days: i64 => "max_delivery_days",
        }
    }
}
