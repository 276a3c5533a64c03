//! Endpoint wrappers for the Etsy Open API v3.
//!
//! Each resource borrows an [`EtsyClient`](crate::EtsyClient), fills in the
//! endpoint path, turns its parameters into [`QueryParams`], and hands the
//! call to [`EtsyClient::make_request`](crate::EtsyClient::make_request).
//! Resources add no behavior of their own: every result is the
//! dispatcher's [`ResponseEnvelope`](crate::ResponseEnvelope) or
//! [`EtsyError`](crate::EtsyError).
//!
//! Query options are plain structs with public `Option` fields and a
//! `Default`; unset options are not sent, and Etsy applies its own default.
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_api::models::{Includes, ListingState};
//! use etsy_api::resources::{ListingResource, ListingsByShopParams};
//!
//! let listings = ListingResource::new(&client);
//! let params = ListingsByShopParams {
//!     state: Some(ListingState::Draft),
//!     limit: Some(100),
//!     includes: vec![Includes::Images],
//!     ..Default::default()
//! };
//! let response = listings.get_listings_by_shop(42, &params).await?;
//! ```

mod listing;
mod listing_media;
mod payment;
mod receipt;
mod shipping_profile;
mod shop;
mod taxonomy;
mod user;

pub use listing::{
    ActiveListingsByShopParams, ActiveListingsParams, ListingInventoryParams,
    ListingInventoryResource, ListingResource, ListingsByShopParams, ShopSectionListingsParams,
};
pub use listing_media::{
    ListingFileResource, ListingImageResource, ListingTranslationResource,
    ListingVariationImagesResource, ListingVideoResource,
};
pub use payment::PaymentResource;
pub use receipt::{ReceiptResource, ShopReceiptsParams};
pub use shipping_profile::ShippingProfileResource;
pub use shop::ShopResource;
pub use taxonomy::{BuyerTaxonomyResource, SellerTaxonomyResource};
pub use user::UserResource;

use crate::clients::QueryParams;

/// `limit` / `offset` paging shared by list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of results (Etsy default 25, max 100).
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl Pagination {
    /// Creates paging with both values set.
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Returns the paging as query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        self.append_to(QueryParams::new())
    }

    fn append_to(self, query: QueryParams) -> QueryParams {
        query
            .opt_param("limit", self.limit)
            .opt_param("offset", self.offset)
    }
}

/// Joins ids as Etsy's comma-separated list form.
fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_omits_unset_values() {
        let paging = Pagination {
            limit: Some(25),
            offset: None,
        };
        assert_eq!(paging.to_query().to_query_string(), "limit=25");
        assert!(Pagination::default().to_query().is_empty());
    }

    #[test]
    fn test_pagination_new() {
        assert_eq!(
            Pagination::new(100, 200).to_query().to_query_string(),
            "limit=100&offset=200"
        );
    }

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[1, 22, 333]), "1,22,333");
        assert_eq!(join_ids(&[]), "");
    }
}
