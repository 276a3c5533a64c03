//! Integration tests for the endpoint wrappers.
//!
//! Each wrapper is checked for the path it calls, the method it uses, and
//! the query or body it sends.

use chrono::{Duration, Utc};
use etsy_api::models::{
    CreateReceiptShipmentRequest, Includes, ListingState, Offering, Product, ReceiptSortOn,
    ShippingUpgradeType, SortOrder, UpdateListingInventoryRequest,
    UpdateShopShippingProfileDestinationRequest, UpdateShopShippingProfileUpgradeRequest,
    UploadListingFileRequest, UploadListingVideoRequest,
};
use etsy_api::resources::{
    BuyerTaxonomyResource, ListingFileResource, ListingImageResource, ListingInventoryResource,
    ListingResource, ListingVideoResource, ListingsByShopParams, Pagination, PaymentResource,
    ReceiptResource, SellerTaxonomyResource, ShippingProfileResource, ShopReceiptsParams,
    ShopResource, UserResource,
};
use etsy_api::{ApiKey, Environment, EtsyClient, EtsyConfig, EtsyError};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> EtsyClient {
    let environment = Environment::custom(
        "mock",
        &format!("{}/oauth/connect", server.uri()),
        &format!("{}/v3/public/oauth/token", server.uri()),
        &format!("{}/v3/application", server.uri()),
    )
    .unwrap();
    let config = EtsyConfig::builder()
        .api_key(ApiKey::new("test-keystring").unwrap())
        .environment(environment)
        .build()
        .unwrap();

    EtsyClient::builder()
        .config(config)
        .access_token("12345678.access")
        .refresh_token("12345678.refresh")
        .expiry(Utc::now() + Duration::hours(1))
        .build()
        .unwrap()
}

fn ok_json() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"count": 1, "results": [{}]}))
}

#[tokio::test]
async fn test_listings_by_shop_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/application/shops/42/listings"))
        .and(query_param("state", "draft"))
        .and(query_param("limit", "100"))
        .and(query_param("includes", "Images,Shop"))
        .respond_with(ok_json())
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = ListingsByShopParams {
        state: Some(ListingState::Draft),
        limit: Some(100),
        includes: vec![Includes::Images, Includes::Shop],
        ..Default::default()
    };

    let response = ListingResource::new(&client)
        .get_listings_by_shop(42, &params)
        .await
        .unwrap();
    assert_eq!(response.message["count"], 1);

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("offset"));
    assert!(!query.contains("sort_on"));
}

#[tokio::test]
async fn test_listings_by_ids_joins_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/application/listings/batch"))
        .and(query_param("listing_ids", "1,2,3"))
        .respond_with(ok_json())
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    ListingResource::new(&client)
        .get_listings_by_listing_ids(&[1, 2, 3], &[])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_listing() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v3/application/listings/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = ListingResource::new(&client).delete_listing(7).await.unwrap();
    assert_eq!(response.message, json!("OK"));
}

#[tokio::test]
async fn test_inventory_update_keeps_legacy_flag_on_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v3/application/listings/7/inventory"))
        .and(query_param("legacy", "true"))
        .respond_with(ok_json())
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let product = Product {
        sku: "SCARF-RED".to_string(),
        property_values: Vec::new(),
        offerings: vec![Offering::new(25.0, 3)],
    };
    let inventory = UpdateListingInventoryRequest::builder()
        .products(vec![product])
        .build()
        .unwrap();

    ListingInventoryResource::new(&client)
        .update_listing_inventory(7, &inventory, Some(true))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_image_listing_and_file_upload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/application/listings/7/images"))
        .respond_with(ok_json())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/application/shops/42/listings/7/files"))
        .and(body_string_contains("filename=\"pattern.pdf\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"listing_file_id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    ListingImageResource::new(&client)
        .get_listing_images(7)
        .await
        .unwrap();

    let upload = UploadListingFileRequest::builder(b"%PDF-1.4".to_vec())
        .name("pattern.pdf")
        .build()
        .unwrap();
    let response = ListingFileResource::new(&client)
        .upload_listing_file(42, 7, &upload)
        .await
        .unwrap();
    assert_eq!(response.message["listing_file_id"], 3);
}

#[tokio::test]
async fn test_video_listing_upload_and_delete() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/application/listings/7/videos/55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"video_id": 55})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/application/shops/42/listings/7/videos"))
        .and(body_string_contains("name=\"video\"; filename=\"spin.mp4\""))
        .and(body_string_contains("Content-Type: video/mp4"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"video_id": 56})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v3/application/shops/42/listings/7/videos/55"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let videos = ListingVideoResource::new(&client);

    let response = videos.get_listing_video(7, 55).await.unwrap();
    assert_eq!(response.message["video_id"], 55);

    let upload = UploadListingVideoRequest::builder()
        .video(vec![0, 0, 0, 24, b'f', b't', b'y', b'p'])
        .name("spin.mp4")
        .build()
        .unwrap();
    let response = videos.upload_listing_video(42, 7, &upload).await.unwrap();
    assert_eq!(response.message["video_id"], 56);

    let response = videos.delete_listing_video(42, 7, 55).await.unwrap();
    assert_eq!(response.message, json!("OK"));
}

#[tokio::test]
async fn test_shop_lookup_and_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/application/users/12345678/shops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop_id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/application/shops"))
        .and(query_param("shop_name", "Knit Co"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "20"))
        .respond_with(ok_json())
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let shops = ShopResource::new(&client);

    let response = shops.get_shop_by_owner_user_id(12_345_678).await.unwrap();
    assert_eq!(response.message["shop_id"], 42);

    shops
        .find_shops("Knit Co", Pagination::new(10, 20))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_receipts_filters_and_shipment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/application/shops/42/receipts"))
        .and(query_param("was_paid", "true"))
        .and(query_param("sort_on", "updated"))
        .and(query_param("sort_order", "asc"))
        .respond_with(ok_json())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/application/shops/42/receipts/5/tracking"))
        .and(body_json(json!({
            "tracking_code": "1Z999",
            "carrier_name": "ups",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"receipt_id": 5})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let receipts = ReceiptResource::new(&client);

    let params = ShopReceiptsParams {
        was_paid: Some(true),
        sort_on: Some(ReceiptSortOn::Updated),
        sort_order: Some(SortOrder::Asc),
        ..Default::default()
    };
    receipts.get_shop_receipts(42, &params).await.unwrap();

    let shipment = CreateReceiptShipmentRequest::builder()
        .tracking_code("1Z999")
        .carrier_name("ups")
        .build()
        .unwrap();
    let response = receipts
        .create_receipt_shipment(42, 5, &shipment)
        .await
        .unwrap();
    assert_eq!(response.message["receipt_id"], 5);
}

#[tokio::test]
async fn test_payments_by_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/application/shops/42/payments"))
        .and(query_param("payment_ids", "10,11"))
        .respond_with(ok_json())
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    PaymentResource::new(&client)
        .get_payments(42, &[10, 11])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_shipping_carriers_and_destinations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/application/shipping-carriers"))
        .and(query_param("origin_country_iso", "US"))
        .respond_with(ok_json())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(
            "/v3/application/shops/42/shipping-profiles/8/destinations",
        ))
        .respond_with(ok_json())
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let profiles = ShippingProfileResource::new(&client);

    profiles.get_shipping_carriers("US").await.unwrap();
    profiles
        .get_shop_shipping_profile_destinations(42, 8, Pagination::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_shipping_destination_and_upgrade_updates() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(
            "/v3/application/shops/42/shipping-profiles/8/destinations/3",
        ))
        .and(body_json(json!({
            "primary_cost": 7.5,
            "destination_country_iso": "CA",
            "mail_class": null,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shipping_profile_destination_id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v3/application/shops/42/shipping-profiles/8/upgrades/11"))
        .and(body_json(json!({
            "type": "1",
            "price": 20.0,
            "min_delivery_days": null,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"upgrade_id": 11})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let profiles = ShippingProfileResource::new(&client);

    let destination = UpdateShopShippingProfileDestinationRequest::builder()
        .primary_cost(7.5)
        .destination_country_iso("CA")
        .mail_class("")
        .build()
        .unwrap();
    let response = profiles
        .update_shop_shipping_profile_destination(42, 8, 3, &destination)
        .await
        .unwrap();
    assert_eq!(response.message["shipping_profile_destination_id"], 3);

    let upgrade = UpdateShopShippingProfileUpgradeRequest::builder()
        .upgrade_type(ShippingUpgradeType::International)
        .price(20.0)
        .min_delivery_days(0)
        .build()
        .unwrap();
    let response = profiles
        .update_shop_shipping_profile_upgrade(42, 8, 11, &upgrade)
        .await
        .unwrap();
    assert_eq!(response.message["upgrade_id"], 11);
}

#[tokio::test]
async fn test_user_and_taxonomy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/application/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user_id": 12_345_678})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/application/seller-taxonomy/nodes/1/properties"))
        .respond_with(ok_json())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/application/buyer-taxonomy/nodes"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let me = UserResource::new(&client).get_me().await.unwrap();
    assert_eq!(me.message["user_id"], 12_345_678);

    SellerTaxonomyResource::new(&client)
        .get_properties_by_taxonomy_id(1)
        .await
        .unwrap();

    let error = BuyerTaxonomyResource::new(&client)
        .get_buyer_taxonomy_nodes()
        .await
        .unwrap_err();
    match error {
        EtsyError::Request(error) => {
            assert_eq!(error.status_code, 503);
            assert_eq!(error.error, "Service Unavailable");
        }
        other => panic!("Expected a 503 request error, got {other:?}"),
    }
}
