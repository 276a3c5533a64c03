//! Listing vocabulary and listing request types.

use super::contract::{request_contract, wire_enum, FilePart, FileRequest, ValidationError};
use super::product::{Product, VariationImage};

wire_enum! {
    /// Who made the item being listed.
    pub enum WhoMade {
        IDid => "i_did",
        SomeoneElse => "someone_else",
        Collective => "collective",
    }
}

wire_enum! {
    /// When the item being listed was made.
    pub enum WhenMade {
        MadeToOrder => "made_to_order",
        From2020To2024 => "2020_2024",
        From2010To2019 => "2010_2019",
        From2005To2009 => "2005_2009",
        Before2005 => "before_2005",
        From2000To2004 => "2000_2004",
        Nineties => "1990s",
        Eighties => "1980s",
        Seventies => "1970s",
        Sixties => "1960s",
        Fifties => "1950s",
        Forties => "1940s",
        Thirties => "1930s",
        Twenties => "1920s",
        Tens => "1910s",
        Nineteen00s => "1900s",
        Eighteen00s => "1800s",
        Seventeen00s => "1700s",
        Before1700 => "before_1700",
    }
}

wire_enum! {
    /// Unit of `item_weight`.
    pub enum ItemWeightUnit {
        Oz => "oz",
        Lb => "lb",
        G => "g",
        Kg => "kg",
    }
}

wire_enum! {
    /// Unit of the item dimensions.
    pub enum ItemDimensionsUnit {
        In => "in",
        Ft => "ft",
        Cm => "cm",
        M => "m",
        Mm => "mm",
        Yd => "yd",
        Inches => "inches",
    }
}

wire_enum! {
    /// Listing kind, sent under the `type` key.
    pub enum ListingType {
        Physical => "physical",
        Download => "download",
        Both => "both",
    }
}

wire_enum! {
    /// Listing lifecycle state.
    pub enum ListingState {
        Active => "active",
        Inactive => "inactive",
        SoldOut => "sold_out",
        Draft => "draft",
        Expired => "expired",
    }
}

wire_enum! {
    /// Sort key for listing searches.
    pub enum SortOn {
        Created => "created",
        Price => "price",
        Updated => "updated",
        Score => "score",
    }
}

wire_enum! {
    /// Sort direction.
    pub enum SortOrder {
        Asc => "asc",
        Ascending => "ascending",
        Desc => "desc",
        Descending => "descending",
        Up => "up",
        Down => "down",
    }
}

wire_enum! {
    /// Associations to embed in listing responses.
    pub enum Includes {
        Shipping => "Shipping",
        Images => "Images",
        Shop => "Shop",
        User => "User",
        Translations => "Translations",
        Inventory => "Inventory",
        Videos => "Videos",
    }
}

wire_enum! {
    /// Associations to embed in inventory responses.
    pub enum InventoryIncludes {
        Listing => "Listing",
    }
}

/// Joins `includes` into the comma-separated query form.
#[must_use]
pub fn join_includes<T: std::fmt::Display>(includes: &[T]) -> String {
    includes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

request_contract! {
    /// Body of `createDraftListing`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use etsy_api::models::{CreateDraftListingRequest, WhenMade, WhoMade};
    ///
    /// let listing = CreateDraftListingRequest::builder()
    ///     .quantity(5)
    ///     .title("Stoneware mug")
    ///     .description("Wheel thrown, 12oz")
    ///     .price(28.0)
    ///     .who_made(WhoMade::IDid)
    ///     .when_made(WhenMade::MadeToOrder)
    ///     .taxonomy_id(1106)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(listing.title().map(String::as_str), Some("Stoneware mug"));
    /// ```
    pub struct CreateDraftListingRequest / CreateDraftListingRequestBuilder {
        mandatory: [
            "quantity", "title", "description", "price",
            "who_made", "when_made", "taxonomy_id",
        ],
        nullable: [
            "shipping_profile_id", "return_policy_id", "materials", "shop_section_id",
            "processing_min", "processing_max", "tags", "styles",
            "item_weight", "item_length", "item_width", "item_height",
            "item_weight_unit", "item_dimensions_unit", "production_partner_ids", "image_ids",
        ],
        fields: {
            quantity: i64 => "quantity",
            title: String => "title",
            description: String => "description",
            price: f64 => "price",
            who_made: WhoMade => "who_made",
            when_made: WhenMade => "when_made",
            taxonomy_id: i64 => "taxonomy_id",
            shipping_profile_id: i64 => "shipping_profile_id",
            return_policy_id: i64 => "return_policy_id",
            materials: Vec<String> => "materials",
            shop_section_id: i64 => "shop_section_id",
            processing_min: i64 => "processing_min",
            processing_max: i64 => "processing_max",
            tags: Vec<String> => "tags",
            styles: Vec<String> => "styles",
            item_weight: f64 => "item_weight",
            item_length: f64 => "item_length",
            item_width: f64 => "item_width",
            item_height: f64 => "item_height",
            item_weight_unit: ItemWeightUnit => "item_weight_unit",
            item_dimensions_unit: ItemDimensionsUnit => "item_dimensions_unit",
            is_personalizable: bool => "is_personalizable",
            personalization_is_required: bool => "personalization_is_required",
            personalization_char_count_max: i64 => "personalization_char_count_max",
            personalization_instructions: String => "personalization_instructions",
            production_partner_ids: Vec<i64> => "production_partner_ids",
            image_ids: Vec<i64> => "image_ids",
            is_supply: bool => "is_supply",
            is_customizable: bool => "is_customizable",
            should_auto_renew: bool => "should_auto_renew",
            is_taxable: bool => "is_taxable",
            listing_type: ListingType => "type",
        }
    }
}

request_contract! {
    /// Body of `updateListing`. Every field is optional.
    pub struct UpdateListingRequest / UpdateListingRequestBuilder {
        mandatory: [],
        nullable: [
            "materials", "shipping_profile_id", "return_policy_id", "shop_section_id",
            "item_weight", "item_length", "item_width", "item_height",
            "item_weight_unit", "item_dimensions_unit", "tags", "featured_rank",
            "production_partner_ids", "type",
        ],
        fields: {
            image_ids: Vec<i64> => "image_ids",
            title: String => "title",
            description: String => "description",
            materials: Vec<String> => "materials",
            should_auto_renew: bool => "should_auto_renew",
            shipping_profile_id: i64 => "shipping_profile_id",
            return_policy_id: i64 => "return_policy_id",
            shop_section_id: i64 => "shop_section_id",
            item_weight: f64 => "item_weight",
            item_length: f64 => "item_length",
            item_width: f64 => "item_width",
            item_height: f64 => "item_height",
            item_weight_unit: ItemWeightUnit => "item_weight_unit",
            item_dimensions_unit: ItemDimensionsUnit => "item_dimensions_unit",
            is_taxable: bool => "is_taxable",
            taxonomy_id: i64 => "taxonomy_id",
            tags: Vec<String> => "tags",
            who_made: WhoMade => "who_made",
            when_made: WhenMade => "when_made",
            featured_rank: i64 => "featured_rank",
            is_personalizable: bool => "is_personalizable",
            personalization_is_required: bool => "personalization_is_required",
            personalization_char_count_max: i64 => "personalization_char_count_max",
            personalization_instructions: String => "personalization_instructions",
            state: ListingState => "state",
            is_supply: bool => "is_supply",
            production_partner_ids: Vec<i64> => "production_partner_ids",
            listing_type: ListingType => "type",
        }
    }
}

request_contract! {
    /// Body of `updateListingInventory`.
    pub struct UpdateListingInventoryRequest / UpdateListingInventoryRequestBuilder {
        mandatory: ["products"],
        nullable: [],
        fields: {
            products: Vec<Product> => "products",
            price_on_property: Vec<i64> => "price_on_property",
            quantity_on_property: Vec<i64> => "quantity_on_property",
            sku_on_property: Vec<i64> => "sku_on_property",
        }
    }
}

request_contract! {
    /// Body of `updateListingProperty`.
    pub struct UpdateListingPropertyRequest / UpdateListingPropertyRequestBuilder {
        mandatory: ["value_ids", "values"],
        nullable: [],
        fields: {
            value_ids: Vec<i64> => "value_ids",
            values: Vec<String> => "values",
            scale_id: i64 => "scale_id",
        }
    }
}

request_contract! {
    /// Body of `createListingTranslation` and `updateListingTranslation`.
    pub struct CreateListingTranslationRequest / CreateListingTranslationRequestBuilder {
        mandatory: ["title", "description"],
        nullable: [],
        fields: {
            title: String => "title",
            description: String => "description",
            tags: Vec<String> => "tags",
        }
    }
}

request_contract! {
    /// Body of `updateVariationImages`.
    pub struct UpdateVariationImagesRequest / UpdateVariationImagesRequestBuilder {
        mandatory: ["variation_images"],
        nullable: [],
        fields: {
            variation_images: Vec<VariationImage> => "variation_images",
        }
    }
}

/// Multipart body of `uploadListingImage`.
///
/// The image is sent as the `image` file part. `rank` defaults to 1 and the
/// `overwrite` and `is_watermarked` flags default to `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadListingImageRequest(FileRequest);

impl UploadListingImageRequest {
    /// Names that must be present in the upload.
    pub const MANDATORY: &'static [&'static str] = &["image"];

    /// Starts an image upload with the image content.
    #[must_use]
    pub fn builder(image: impl Into<Vec<u8>>) -> UploadListingImageRequestBuilder {
        UploadListingImageRequestBuilder {
            image: image.into(),
            listing_image_id: None,
            rank: 1,
            overwrite: false,
            is_watermarked: false,
            alt_text: None,
        }
    }

    /// Returns the underlying upload.
    #[must_use]
    pub const fn file_request(&self) -> &FileRequest {
        &self.0
    }
}

impl AsRef<FileRequest> for UploadListingImageRequest {
    fn as_ref(&self) -> &FileRequest {
        &self.0
    }
}

/// Builder for [`UploadListingImageRequest`].
#[derive(Clone, Debug)]
pub struct UploadListingImageRequestBuilder {
    image: Vec<u8>,
    listing_image_id: Option<i64>,
    rank: i64,
    overwrite: bool,
    is_watermarked: bool,
    alt_text: Option<String>,
}

impl UploadListingImageRequestBuilder {
    /// Reuses an image already attached to another listing.
    #[must_use]
    pub const fn listing_image_id(mut self, id: i64) -> Self {
        self.listing_image_id = Some(id);
        self
    }

    /// Sets the display position (1 is first).
    #[must_use]
    pub const fn rank(mut self, rank: i64) -> Self {
        self.rank = rank;
        self
    }

    /// Replaces the image currently at `rank`.
    #[must_use]
    pub const fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Marks the image as watermarked.
    #[must_use]
    pub const fn is_watermarked(mut self, is_watermarked: bool) -> Self {
        self.is_watermarked = is_watermarked;
        self
    }

    /// Sets the alt text.
    #[must_use]
    pub fn alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Builds the upload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if a mandatory part is missing.
    pub fn build(self) -> Result<UploadListingImageRequest, ValidationError> {
        let upload = FileRequest::new()
            .with_file("image", FilePart::Bytes(self.image))
            .with_data("listing_image_id", self.listing_image_id)
            .with_data("rank", Some(self.rank))
            .with_data("overwrite", Some(self.overwrite))
            .with_data("is_watermarked", Some(self.is_watermarked))
            .with_data("alt_text", self.alt_text);
        upload.check_mandatory(
            "UploadListingImageRequest",
            UploadListingImageRequest::MANDATORY,
        )?;
        Ok(UploadListingImageRequest(upload))
    }
}

/// Multipart body of `uploadListingFile` (digital listings).
///
/// The file is sent as the `file` part with content type
/// `multipart/form-data`, named after `name` when one is given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadListingFileRequest(FileRequest);

impl UploadListingFileRequest {
    /// Names that must be present in the upload.
    pub const MANDATORY: &'static [&'static str] = &["file"];

    /// Starts a file upload with the file content.
    #[must_use]
    pub fn builder(content: impl Into<Vec<u8>>) -> UploadListingFileRequestBuilder {
        UploadListingFileRequestBuilder {
            content: content.into(),
            listing_file_id: None,
            name: None,
            rank: 1,
        }
    }

    /// Returns the underlying upload.
    #[must_use]
    pub const fn file_request(&self) -> &FileRequest {
        &self.0
    }
}

impl AsRef<FileRequest> for UploadListingFileRequest {
    fn as_ref(&self) -> &FileRequest {
        &self.0
    }
}

/// Builder for [`UploadListingFileRequest`].
#[derive(Clone, Debug)]
pub struct UploadListingFileRequestBuilder {
    content: Vec<u8>,
    listing_file_id: Option<i64>,
    name: Option<String>,
    rank: i64,
}

impl UploadListingFileRequestBuilder {
    /// Reuses a file already attached to another listing.
    #[must_use]
    pub const fn listing_file_id(mut self, id: i64) -> Self {
        self.listing_file_id = Some(id);
        self
    }

    /// Sets the file name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the display position (1 is first).
    #[must_use]
    pub const fn rank(mut self, rank: i64) -> Self {
        self.rank = rank;
        self
    }

    /// Builds the upload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if a mandatory part is missing.
    pub fn build(self) -> Result<UploadListingFileRequest, ValidationError> {
        let part = FilePart::Named {
            filename: self.name.clone().unwrap_or_default(),
            bytes: self.content,
            content_type: "multipart/form-data".to_string(),
        };
        let upload = FileRequest::new()
            .with_file("file", part)
            .with_data("listing_file_id", self.listing_file_id)
            .with_data("rank", Some(self.rank))
            .with_data("name", self.name);
        upload.check_mandatory(
            "UploadListingFileRequest",
            UploadListingFileRequest::MANDATORY,
        )?;
        Ok(UploadListingFileRequest(upload))
    }
}

/// Content type of a video part unless another is set.
pub const DEFAULT_VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Multipart body of `uploadListingVideo`.
///
/// Either attaches a new video (the `video` part, named after `name`) or
/// reuses one by `video_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadListingVideoRequest(FileRequest);

impl UploadListingVideoRequest {
    /// Names that must be present in the upload.
    pub const MANDATORY: &'static [&'static str] = &[];

    /// Starts an empty video upload.
    #[must_use]
    pub fn builder() -> UploadListingVideoRequestBuilder {
        UploadListingVideoRequestBuilder::default()
    }

    /// Returns the underlying upload.
    #[must_use]
    pub const fn file_request(&self) -> &FileRequest {
        &self.0
    }
}

impl AsRef<FileRequest> for UploadListingVideoRequest {
    fn as_ref(&self) -> &FileRequest {
        &self.0
    }
}

/// Builder for [`UploadListingVideoRequest`].
#[derive(Clone, Debug, Default)]
pub struct UploadListingVideoRequestBuilder {
    video: Option<Vec<u8>>,
    content_type: Option<String>,
    video_id: Option<i64>,
    name: Option<String>,
}

impl UploadListingVideoRequestBuilder {
    /// Sets the video content.
    #[must_use]
    pub fn video(mut self, video: impl Into<Vec<u8>>) -> Self {
        self.video = Some(video.into());
        self
    }

    /// Sets the content type of the video part.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Reuses a video already attached to another listing.
    #[must_use]
    pub const fn video_id(mut self, id: i64) -> Self {
        self.video_id = Some(id);
        self
    }

    /// Sets the video file name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builds the upload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if a mandatory part is missing.
    pub fn build(self) -> Result<UploadListingVideoRequest, ValidationError> {
        let mut upload = FileRequest::new()
            .with_data("video_id", self.video_id)
            .with_data("name", self.name.clone());
        if let Some(bytes) = self.video {
            let part = FilePart::Named {
                filename: self.name.unwrap_or_default(),
                bytes,
                content_type: self
                    .content_type
                    .unwrap_or_else(|| DEFAULT_VIDEO_CONTENT_TYPE.to_string()),
            };
            upload = upload.with_file("video", part);
        }
        upload.check_mandatory(
            "UploadListingVideoRequest",
            UploadListingVideoRequest::MANDATORY,
        )?;
        Ok(UploadListingVideoRequest(upload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestContract;
    use serde_json::{json, Value};

    fn draft() -> CreateDraftListingRequestBuilder {
        CreateDraftListingRequest::builder()
            .quantity(1)
            .title("Mug")
            .description("A mug")
            .price(12.5)
            .who_made(WhoMade::IDid)
            .when_made(WhenMade::MadeToOrder)
            .taxonomy_id(1106)
    }

    #[test]
    fn test_create_draft_listing_mandatory_fields() {
        assert!(draft().build().is_ok());

        let missing = CreateDraftListingRequest::builder()
            .quantity(1)
            .description("A mug")
            .price(12.5)
            .who_made(WhoMade::IDid)
            .when_made(WhenMade::MadeToOrder)
            .taxonomy_id(1106)
            .build();
        assert_eq!(
            missing,
            Err(ValidationError::MissingMandatoryField {
                request: "CreateDraftListingRequest",
                field: "title",
            })
        );
    }

    #[test]
    fn test_create_draft_listing_wire_form() {
        let listing = draft()
            .shipping_profile_id(0)
            .tags(vec!["ceramic".to_string()])
            .is_supply(false)
            .listing_type(ListingType::Physical)
            .build()
            .unwrap();

        let wire = Value::Object(listing.to_wire());
        assert_eq!(
            wire,
            json!({
                "quantity": 1,
                "title": "Mug",
                "description": "A mug",
                "price": 12.5,
                "who_made": "i_did",
                "when_made": "made_to_order",
                "taxonomy_id": 1106,
                "shipping_profile_id": null,
                "tags": ["ceramic"],
                "is_supply": false,
                "type": "physical",
            })
        );
        assert_eq!(listing.nulled(), vec!["shipping_profile_id"]);
    }

    #[test]
    fn test_update_listing_sends_only_present_fields() {
        let update = UpdateListingRequest::builder()
            .tags(Vec::<String>::new())
            .state(ListingState::Inactive)
            .build()
            .unwrap();

        let wire = update.to_wire();
        assert!(wire["tags"].is_null());
        assert_eq!(wire["state"], "inactive");
        assert!(!wire.contains_key("title"));
    }

    #[test]
    fn test_listing_property_requires_values() {
        let result = UpdateListingPropertyRequest::builder()
            .value_ids(vec![1_i64])
            .build();
        assert!(matches!(
            result,
            Err(ValidationError::MissingMandatoryField { field: "values", .. })
        ));
    }

    #[test]
    fn test_when_made_parses_wire_value() {
        assert_eq!("2010_2019".parse::<WhenMade>(), Ok(WhenMade::From2010To2019));
        assert!("2030s".parse::<WhenMade>().is_err());
        assert_eq!(WhenMade::ALL.len(), 19);
    }

    #[test]
    fn test_join_includes() {
        assert_eq!(
            join_includes(&[Includes::Images, Includes::Shop]),
            "Images,Shop"
        );
    }

    #[test]
    fn test_upload_listing_image_defaults() {
        let upload = UploadListingImageRequest::builder(vec![0xFF, 0xD8])
            .alt_text("Front view")
            .build()
            .unwrap();

        let request = upload.file_request();
        assert_eq!(request.file()["image"], FilePart::Bytes(vec![0xFF, 0xD8]));
        let fields: Vec<_> = request.form_fields().collect();
        assert_eq!(
            fields,
            vec![
                ("alt_text", "Front view"),
                ("is_watermarked", "false"),
                ("overwrite", "false"),
                ("rank", "1"),
            ]
        );
    }

    #[test]
    fn test_upload_listing_file_names_part() {
        let upload = UploadListingFileRequest::builder(b"%PDF".to_vec())
            .name("pattern.pdf")
            .rank(2)
            .build()
            .unwrap();

        match &upload.file_request().file()["file"] {
            FilePart::Named {
                filename,
                content_type,
                ..
            } => {
                assert_eq!(filename, "pattern.pdf");
                assert_eq!(content_type, "multipart/form-data");
            }
            FilePart::Bytes(_) => panic!("expected a named part"),
        }
        assert_eq!(upload.file_request().data()["rank"].as_deref(), Some("2"));
    }

    #[test]
    fn test_upload_listing_video_new_file() {
        let upload = UploadListingVideoRequest::builder()
            .video(vec![0, 0, 0, 24])
            .name("spin.mp4")
            .build()
            .unwrap();

        match &upload.file_request().file()["video"] {
            FilePart::Named {
                filename,
                content_type,
                bytes,
            } => {
                assert_eq!(filename, "spin.mp4");
                assert_eq!(content_type, DEFAULT_VIDEO_CONTENT_TYPE);
                assert_eq!(bytes, &vec![0, 0, 0, 24]);
            }
            FilePart::Bytes(_) => panic!("expected a named part"),
        }
        let fields: Vec<_> = upload.file_request().form_fields().collect();
        assert_eq!(fields, vec![("name", "spin.mp4")]);
    }

    #[test]
    fn test_upload_listing_video_reuses_existing() {
        let upload = UploadListingVideoRequest::builder()
            .video_id(55)
            .build()
            .unwrap();

        assert!(upload.file_request().file().is_empty());
        let fields: Vec<_> = upload.file_request().form_fields().collect();
        assert_eq!(fields, vec![("video_id", "55")]);
    }
}
