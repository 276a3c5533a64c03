//! Listing images, videos, digital files, translations and variation images.

use crate::clients::{EtsyClient, EtsyError, Payload, QueryParams, ResponseEnvelope};
use crate::models::{
    CreateListingTranslationRequest, UpdateVariationImagesRequest, UploadListingFileRequest,
    UploadListingImageRequest, UploadListingVideoRequest,
};

/// Listing image endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ListingImageResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> ListingImageResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `DELETE /shops/{shop_id}/listings/{listing_id}/images/{listing_image_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn delete_listing_image(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_image_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .delete(&format!(
                "/shops/{shop_id}/listings/{listing_id}/images/{listing_image_id}"
            ))
            .await
    }

    /// `GET /listings/{listing_id}/images/{listing_image_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_listing_image(
        &self,
        listing_id: u64,
        listing_image_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/listings/{listing_id}/images/{listing_image_id}"),
                &QueryParams::new(),
            )
            .await
    }

    /// `GET /listings/{listing_id}/images`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_listing_images(&self, listing_id: u64) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(&format!("/listings/{listing_id}/images"), &QueryParams::new())
            .await
    }

    /// `POST /shops/{shop_id}/listings/{listing_id}/images`, as multipart
    /// form data.
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn upload_listing_image(
        &self,
        shop_id: u64,
        listing_id: u64,
        image: &UploadListingImageRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .post(
                &format!("/shops/{shop_id}/listings/{listing_id}/images"),
                Payload::file(image),
            )
            .await
    }
}

/// Listing video endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ListingVideoResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> ListingVideoResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `DELETE /shops/{shop_id}/listings/{listing_id}/videos/{video_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn delete_listing_video(
        &self,
        shop_id: u64,
        listing_id: u64,
        video_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .delete(&format!(
                "/shops/{shop_id}/listings/{listing_id}/videos/{video_id}"
            ))
            .await
    }

    /// `GET /listings/{listing_id}/videos/{video_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_listing_video(
        &self,
        listing_id: u64,
        video_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/listings/{listing_id}/videos/{video_id}"),
                &QueryParams::new(),
            )
            .await
    }

    /// `GET /listings/{listing_id}/videos`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_listing_videos(&self, listing_id: u64) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(&format!("/listings/{listing_id}/videos"), &QueryParams::new())
            .await
    }

    /// `POST /shops/{shop_id}/listings/{listing_id}/videos`, as multipart
    /// form data.
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn upload_listing_video(
        &self,
        shop_id: u64,
        listing_id: u64,
        video: &UploadListingVideoRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .post(
                &format!("/shops/{shop_id}/listings/{listing_id}/videos"),
                Payload::file(video),
            )
            .await
    }
}

/// Digital listing file endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ListingFileResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> ListingFileResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `DELETE /shops/{shop_id}/listings/{listing_id}/files/{listing_file_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn delete_listing_file(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_file_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .delete(&format!(
                "/shops/{shop_id}/listings/{listing_id}/files/{listing_file_id}"
            ))
            .await
    }

    /// `GET /shops/{shop_id}/listings/{listing_id}/files/{listing_file_id}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_listing_file(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_file_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/listings/{listing_id}/files/{listing_file_id}"),
                &QueryParams::new(),
            )
            .await
    }

    /// `GET /shops/{shop_id}/listings/{listing_id}/files`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_all_listing_files(
        &self,
        shop_id: u64,
        listing_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/listings/{listing_id}/files"),
                &QueryParams::new(),
            )
            .await
    }

    /// `POST /shops/{shop_id}/listings/{listing_id}/files`, as multipart
    /// form data.
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn upload_listing_file(
        &self,
        shop_id: u64,
        listing_id: u64,
        file: &UploadListingFileRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .post(
                &format!("/shops/{shop_id}/listings/{listing_id}/files"),
                Payload::file(file),
            )
            .await
    }
}

/// Listing translation endpoints.
///
/// `language` is an IETF tag such as `de` or `fr`.
#[derive(Clone, Copy, Debug)]
pub struct ListingTranslationResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> ListingTranslationResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `POST /shops/{shop_id}/listings/{listing_id}/translations/{language}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn create_listing_translation(
        &self,
        shop_id: u64,
        listing_id: u64,
        language: &str,
        translation: &CreateListingTranslationRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .post(
                &format!("/shops/{shop_id}/listings/{listing_id}/translations/{language}"),
                Payload::json(translation),
            )
            .await
    }

    /// `GET /shops/{shop_id}/listings/{listing_id}/translations/{language}`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_listing_translation(
        &self,
        shop_id: u64,
        listing_id: u64,
        language: &str,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/listings/{listing_id}/translations/{language}"),
                &QueryParams::new(),
            )
            .await
    }

    /// `PUT /shops/{shop_id}/listings/{listing_id}/translations/{language}`
    ///
    /// Takes the same body as a create.
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn update_listing_translation(
        &self,
        shop_id: u64,
        listing_id: u64,
        language: &str,
        translation: &CreateListingTranslationRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .put(
                &format!("/shops/{shop_id}/listings/{listing_id}/translations/{language}"),
                Payload::json(translation),
            )
            .await
    }
}

/// Variation image endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ListingVariationImagesResource<'a> {
    client: &'a EtsyClient,
}

impl<'a> ListingVariationImagesResource<'a> {
    /// Creates the resource.
    #[must_use]
    pub const fn new(client: &'a EtsyClient) -> Self {
        Self { client }
    }

    /// `GET /shops/{shop_id}/listings/{listing_id}/variation-images`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn get_listing_variation_images(
        &self,
        shop_id: u64,
        listing_id: u64,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .get(
                &format!("/shops/{shop_id}/listings/{listing_id}/variation-images"),
                &QueryParams::new(),
            )
            .await
    }

    /// `POST /shops/{shop_id}/listings/{listing_id}/variation-images`
    ///
    /// # Errors
    ///
    /// See [`EtsyClient::make_request`].
    pub async fn update_variation_images(
        &self,
        shop_id: u64,
        listing_id: u64,
        variation_images: &UpdateVariationImagesRequest,
    ) -> Result<ResponseEnvelope, EtsyError> {
        self.client
            .post(
                &format!("/shops/{shop_id}/listings/{listing_id}/variation-images"),
                Payload::json(variation_images),
            )
            .await
    }
}
