//! Request objects and the contract they follow.
//!
//! # Overview
//!
//! - [`RequestContract`]: declared fields, mandatory and nullable sets, and
//!   the JSON walk shared by every JSON body
//! - [`WireValue`]: anything that can be placed on the wire
//! - [`FileRequest`]: multipart uploads
//! - Vocabulary enums such as [`WhoMade`] and [`WhenMade`]
//! - Concrete bodies such as [`CreateDraftListingRequest`]
//!
//! Every concrete request is created through its builder. `build()` runs the
//! mandatory check, so an instance that reaches the client is always valid.

mod contract;
mod listing;
mod product;
mod receipt;
mod shipping_profile;
mod shop;

pub use contract::{
    serialize_fields, Field, FilePart, FileRequest, RequestContract, ValidationError, WireValue,
};
pub use listing::{
    join_includes, CreateDraftListingRequest, CreateDraftListingRequestBuilder,
    CreateListingTranslationRequest, CreateListingTranslationRequestBuilder, Includes,
    InventoryIncludes, ItemDimensionsUnit, ItemWeightUnit, ListingState, ListingType, SortOn,
    SortOrder, UpdateListingInventoryRequest, UpdateListingInventoryRequestBuilder,
    UpdateListingPropertyRequest, UpdateListingPropertyRequestBuilder, UpdateListingRequest,
    UpdateListingRequestBuilder, UpdateVariationImagesRequest,
    UpdateVariationImagesRequestBuilder, UploadListingFileRequest,
    UploadListingFileRequestBuilder, UploadListingImageRequest, UploadListingImageRequestBuilder,
    UploadListingVideoRequest, UploadListingVideoRequestBuilder, WhenMade, WhoMade,
    DEFAULT_VIDEO_CONTENT_TYPE,
};
pub use product::{Offering, Product, PropertyValue, VariationImage};
pub use receipt::{
    CreateReceiptShipmentRequest, CreateReceiptShipmentRequestBuilder, ReceiptSortOn,
    UpdateShopReceiptRequest, UpdateShopReceiptRequestBuilder,
};
pub use shipping_profile::{
    CreateShopShippingProfileDestinationRequest,
    CreateShopShippingProfileDestinationRequestBuilder, CreateShopShippingProfileRequest,
    CreateShopShippingProfileRequestBuilder, CreateShopShippingProfileUpgradeRequest,
    CreateShopShippingProfileUpgradeRequestBuilder, DestinationRegion, ProcessingTimeUnit,
    ShippingUpgradeType, UpdateShopShippingProfileDestinationRequest,
    UpdateShopShippingProfileDestinationRequestBuilder, UpdateShopShippingProfileRequest,
    UpdateShopShippingProfileRequestBuilder, UpdateShopShippingProfileUpgradeRequest,
    UpdateShopShippingProfileUpgradeRequestBuilder,
};
pub use shop::{UpdateShopRequest, UpdateShopRequestBuilder};

// Verify request types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CreateDraftListingRequest>();
    assert_send_sync::<UploadListingImageRequest>();
    assert_send_sync::<FileRequest>();
};
