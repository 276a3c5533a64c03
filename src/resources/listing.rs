//! Listing and listing inventory endpoints.

use crate::clients::{EtsyClient, EtsyError, Payload, QueryParams, ResponseEnvelope};
use crate::models::{
    join_includes, CreateDraftListingRequest, Includes, InventoryIncludes, ListingState, SortOn,
    SortOrder, UpdateListingInventoryRequest, UpdateListingPropertyRequest, UpdateListingRequest,
};
use crate::resources::{join_ids, Pagination};

fn includes_param(includes: &[Includes]) -> Option<String> {
    (!includes.is_empty()).then(|| join_includes(includes))
}

/// Query options for [`ListingResource::get_listings_by_shop`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingsByShopParams {
    /// Listing state filter (Etsy default: active).
    pub state: Option<ListingState>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Sort field.
    pub sort_on: Option<SortOn>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Associations to embed in each listing.
    pub includes: Vec<Includes>,
}

impl ListingsByShopParams {
    /// Returns the options as query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .opt_param("state", self.state)
            .opt_param("limit", self.limit)
            .opt_param("offset", self.offset)
            .opt_param("sort_on", self.sort_on)
            .opt_param("sort_order", self.sort_order)
            .opt_param("includes", includes_param(&self.includes))
    }
}

/// Query options for [`ListingResource::find_all_listings_active`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveListingsParams {
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Search terms.
    pub keywords: Option<String>,
    /// Sort field.
    pub sort_on: Option<SortOn>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Lowest price, in the shop's currency.
    pub min_price: Option<f64>,
    /// Highest price, in the shop's currency.
    pub max_price: Option<f64>,
    /// Seller taxonomy filter.
    pub taxonomy_id: Option<u64>,
    /// Shop location filter.
    pub shop_location: Option<String>,
}

impl ActiveListingsParams {
    /// Returns the options as query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .opt_param("limit", self.limit)
            .opt_param("offset", self.offset)
            .opt_param("keywords", self.keywords.as_deref())
            .opt_param("sort_on", self.sort_on)
            .opt_param("sort_order", self.sort_order)
            .opt_param("min_price", self.min_price)
            .opt_param("max_price", self.max_price)
            .opt_param("taxonomy_id", self.taxonomy_id)
            .opt_param("shop_location", self.shop_location.as_deref())
    }
}

/// Query options for [`ListingResource::find_all_active_listings_by_shop`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveListingsByShopParams {
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Sort field.
    pub sort_on: Option<SortOn>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Search terms.
    pub keywords: Option<String>,
}

impl ActiveListingsByShopParams {
    /// Returns the options as query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .opt_param("limit", self.limit)
            .opt_param("sort_on", self.sort_on)
            .opt_param("sort_order", self.sort_order)
            .opt_param("offset", self.offset)
            .opt_param("keywords", self.keywords.as_deref())
    }
}

/// Query options for [`ListingResource::get_listings_by_shop_section_id`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShopSectionListingsParams {
    /// Sections to list.
    pub shop_section_ids: Vec<u64>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Sort field.
    pub sort_on: Option<SortOn>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
}

impl ShopSectionListingsParams {
    /// Returns the options as query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let ids = (!self.shop_section_ids.is_empty()).then(|| join_ids(&self.shop_section_ids));
        QueryParams::new()
            .opt_param("shop_section_ids", ids)
            .opt_param("limit", self.limit)
            .opt_param("offset", self.offset)
            .opt_param("sort_on", self.sort_on)
            .opt_param("sort_order", self.sort_order)
    }
}

/// Listing endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ListingResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> ListingResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `POST /shops/{shop_id}/listings`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn create_draft_listing(
        &self,
        shop_id: u64,
        listing: &CreateDraftListingRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .post(&format!("/shops/{shop_id}/listings"), Payload::json(listing))
            .await
    }

    /// `GET /shops/{shop_id}/listings`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn get_listings_by_shop(
        &self,
        shop_id: u64,
        params: &ListingsByShopParams,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(&format!("/shops/{shop_id}/listings"), &params.to_query())
            .await
    }

    /// `DELETE /listings/{listing_id}`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn delete_listing(&self, listing_id: u64) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .delete(&format!("/listings/{listing_id}"))
            .await
    }

    /// `GET /listings/{listing_id}`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn get_listing(
        &self,
        listing_id: u64,
        includes: &[Includes],
        language: Option<&str>,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let query = QueryParams::new()
            .opt_param("includes", includes_param(includes))
            .opt_param("language", language);
        self.client
            .get(&format!("/listings/{listing_id}"), &query)
            .await
    }

    /// `GET /listings/active`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn find_all_listings_active(
        &self,
        params: &ActiveListingsParams,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get("/listings/active", &params.to_query())
            .await
    }

    /// `GET /shops/{shop_id}/listings/active`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn find_all_active_listings_by_shop(
        &self,
        shop_id: u64,
        params: &ActiveListingsByShopParams,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/listings/active"),
                &params.to_query(),
            )
            .await
    }

    /// `GET /listings/batch`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn get_listings_by_listing_ids(
        &self,
        listing_ids: &[u64],
        includes: &[Includes],
    ) -> Result<ResponseEnvelope, EtsyError> {
        let query = QueryParams::new()
            .param("listing_ids", join_ids(listing_ids))
            .opt_param("includes", includes_param(includes));
        self.client.get("/listings/batch", &query).await
    }

    /// `GET /shops/{shop_id}/listings/featured`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn get_featured_listings_by_shop(
        &self,
        shop_id: u64,
        paging: Pagination,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/listings/featured"),
                &paging.to_query(),
            )
            .await
    }

    /// `DELETE /shops/{shop_id}/listings/{listing_id}/properties/{property_id}`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn delete_listing_property(
        &self,
        shop_id: u64,
        listing_id: u64,
        property_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .delete(&format!(
                "/shops/{shop_id}/listings/{listing_id}/properties/{property_id}"
            ))
            .await
    }

    /// `PUT /shops/{shop_id}/listings/{listing_id}/properties/{property_id}`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn update_listing_property(
        &self,
        shop_id: u64,
        listing_id: u64,
        property_id: u64,
        listing_property: &UpdateListingPropertyRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .put(
                &format!("/shops/{shop_id}/listings/{listing_id}/properties/{property_id}"),
                Payload::json(listing_property),
            )
            .await
    }

    /// `GET /shops/{shop_id}/listings/{listing_id}/properties`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn get_listing_properties(
        &self,
        shop_id: u64,
        listing_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/listings/{listing_id}/properties"),
                &QueryParams::new(),
            )
            .await
    }

    /// `PATCH /shops/{shop_id}/listings/{listing_id}`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn update_listing(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing: &UpdateListingRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .patch(
                &format!("/shops/{shop_id}/listings/{listing_id}"),
                Payload::json(listing),
            )
            .await
    }

    /// `GET /shops/{shop_id}/receipts/{receipt_id}/listings`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn get_listings_by_shop_receipt(
        &self,
        shop_id: u64,
        receipt_id: u64,
        paging: Pagination,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/receipts/{receipt_id}/listings"),
                &paging.to_query(),
            )
            .await
    }

    /// `GET /shops/{shop_id}/policies/return/{return_policy_id}/listings`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn get_listings_by_shop_return_policy(
        &self,
        shop_id: u64,
        return_policy_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/policies/return/{return_policy_id}/listings"),
                &QueryParams::new(),
            )
            .await
    }

    /// `GET /shops/{shop_id}/shop-sections/listings`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn get_listings_by_shop_section_id(
        &self,
        shop_id: u64,
        params: &ShopSectionListingsParams,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/shop-sections/listings"),
                &params.to_query(),
            )
            .await
    }
}

/// Query options for [`ListingInventoryResource::get_listing_inventory`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListingInventoryParams {
    /// Include deleted products and offerings.
    pub show_deleted: Option<bool>,
    /// Association to embed.
    pub includes: Option<InventoryIncludes>,
    /// Use the legacy inventory format.
    pub legacy: Option<bool>,
}

impl ListingInventoryParams {
    /// Returns the options as query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .opt_param("show_deleted", self.show_deleted)
            .opt_param("includes", self.includes)
            .opt_param("legacy", self.legacy)
    }
}

/// Listing inventory endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ListingInventoryResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> ListingInventoryResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `GET /listings/{listing_id}/inventory`
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn get_listing_inventory(
        &self,
        listing_id: u64,
        params: ListingInventoryParams,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/listings/{listing_id}/inventory"),
                &params.to_query(),
            )
            .await
    }

    /// `PUT /listings/{listing_id}/inventory`
    ///
    /// `legacy` is appended to the path itself; query parameters are only
    /// folded into GET calls.
    ///
    /// # Errors
    ///
    /// Returns [`EtsyError`] as described on
    /// [`EtsyClient::make_request`].
    pub async fn update_listing_inventory(
        &self,
        listing_id: u64,
        inventory: &UpdateListingInventoryRequest,
        legacy: Option<bool>,
    ) -> Result<ResponseEnvelope, EtsyError> {
        let path = QueryParams::new()
            .opt_param("legacy", legacy)
            .apply_to(&format!("/listings/{listing_id}/inventory"));
        self.client.put(&path, Payload::json(inventory)).await
    }
}
