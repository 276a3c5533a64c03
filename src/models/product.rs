//! Nested objects carried inside inventory and variation-image bodies.

use super::contract::{wire_object, Field};

/// A price/quantity combination of a product.
#[derive(Clone, Debug, PartialEq)]
pub struct Offering {
    /// Offering price.
    pub price: f64,
    /// Units available.
    pub quantity: i64,
    /// Whether buyers can purchase this offering.
    pub is_enabled: bool,
    /// Processing profile id, if any.
    pub readiness_state_id: Option<i64>,
}

impl Offering {
    /// Creates an enabled offering.
    #[must_use]
    pub const fn new(price: f64, quantity: i64) -> Self {
        Self {
            price,
            quantity,
            is_enabled: true,
            readiness_state_id: None,
        }
    }
}

wire_object!(Offering, |o| [
    Field::required("price", &o.price),
    Field::required("quantity", &o.quantity),
    Field::required("is_enabled", &o.is_enabled),
    Field::new("readiness_state_id", &o.readiness_state_id),
]);

/// One property value that distinguishes a product variation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyValue {
    /// Property id (e.g. 200 for primary color).
    pub property_id: i64,
    /// Property name, if known.
    pub property_name: Option<String>,
    /// Scale id for sized properties.
    pub scale_id: Option<i64>,
    /// Selected value ids.
    pub value_ids: Vec<i64>,
    /// Selected value labels.
    pub values: Vec<String>,
}

wire_object!(PropertyValue, |p| [
    Field::required("property_id", &p.property_id),
    Field::new("property_name", &p.property_name),
    Field::new("scale_id", &p.scale_id),
    Field::required("value_ids", &p.value_ids),
    Field::required("values", &p.values),
]);

/// One inventory product: a SKU, its property values and its offerings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Product {
    /// Seller SKU.
    pub sku: String,
    /// Property values identifying this variation.
    pub property_values: Vec<PropertyValue>,
    /// Offerings for this variation.
    pub offerings: Vec<Offering>,
}

wire_object!(Product, |p| [
    Field::required("sku", &p.sku),
    Field::required("property_values", &p.property_values),
    Field::required("offerings", &p.offerings),
]);

/// Associates an image with a variation property value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariationImage {
    /// Property id.
    pub property_id: i64,
    /// Value id within the property.
    pub value_id: i64,
    /// Listing image id.
    pub image_id: i64,
}

wire_object!(VariationImage, |v| [
    Field::required("property_id", &v.property_id),
    Field::required("value_id", &v.value_id),
    Field::required("image_id", &v.image_id),
]);
