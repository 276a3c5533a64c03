//! The request contract: how request objects declare and serialize their fields.
//!
//! Every request type sent as a JSON body implements [`RequestContract`]. A
//! contract declares:
//!
//! - its fields, each with the wire name it is sent under
//! - the names that must be present (`mandatory`)
//! - the names that are sent as JSON `null` when explicitly cleared (`nullable`)
//!
//! A field is "cleared" when it holds an empty string, an empty sequence, or
//! numeric zero. Absent fields are never sent. Boolean `false` is a value, not
//! a clear.
//!
//! Upload requests do not use the JSON walk; they are [`FileRequest`]s carrying
//! raw file parts plus form fields.
//!
//! # Example
//!
//! ```rust
//! use etsy_api::models::{RequestContract, UpdateListingRequest};
//!
//! let request = UpdateListingRequest::builder()
//!     .title("Stoneware mug")
//!     .shop_section_id(0)
//!     .tags(Vec::<String>::new())
//!     .build()
//!     .unwrap();
//!
//! let wire = request.to_wire();
//! assert_eq!(wire["title"], "Stoneware mug");
//! assert!(wire["shop_section_id"].is_null());
//! assert!(wire["tags"].is_null());
//! assert!(!wire.contains_key("description"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

/// Error returned when a request object fails its contract check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A mandatory field was not provided.
    #[error("Mandatory field '{field}' is missing from {request}.")]
    MissingMandatoryField {
        /// The request type that failed validation.
        request: &'static str,
        /// The wire name of the missing field.
        field: &'static str,
    },
}

/// A value that can be placed on the wire.
///
/// Implemented for strings, booleans, integers, floats, sequences, string-keyed
/// maps, raw JSON values, the vocabulary enums, and the nested request objects.
pub trait WireValue: Send + Sync {
    /// Converts the value to its JSON form.
    fn to_wire(&self) -> Value;

    /// Returns `true` if the value counts as an explicit clear.
    fn is_cleared(&self) -> bool {
        false
    }
}

impl WireValue for String {
    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }

    fn is_cleared(&self) -> bool {
        self.is_empty()
    }
}

impl WireValue for bool {
    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! impl_wire_integer {
    ($($t:ty),+) => {
        $(
            impl WireValue for $t {
                fn to_wire(&self) -> Value {
                    Value::from(*self)
                }

                fn is_cleared(&self) -> bool {
                    *self == 0
                }
            }
        )+
    };
}

impl_wire_integer!(i32, i64, u32, u64);

impl WireValue for f64 {
    fn to_wire(&self) -> Value {
        Value::from(*self)
    }

    #[allow(clippy::float_cmp)]
    fn is_cleared(&self) -> bool {
        *self == 0.0
    }
}

impl<T: WireValue> WireValue for Vec<T> {
    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(WireValue::to_wire).collect())
    }

    fn is_cleared(&self) -> bool {
        self.is_empty()
    }
}

impl<T: WireValue> WireValue for BTreeMap<String, T> {
    fn to_wire(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_wire()))
                .collect(),
        )
    }
}

impl WireValue for Value {
    fn to_wire(&self) -> Value {
        self.clone()
    }

    #[allow(clippy::float_cmp)]
    fn is_cleared(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::Array(items) => items.is_empty(),
            Self::Number(n) => n.as_f64().is_some_and(|n| n == 0.0),
            _ => false,
        }
    }
}

/// A declared field: its wire name and its current value, if any.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    value: Option<&'a dyn WireValue>,
}

impl<'a> Field<'a> {
    /// Declares an optional field.
    #[must_use]
    pub fn new<T: WireValue>(name: &'static str, value: &'a Option<T>) -> Self {
        Self {
            name,
            value: value.as_ref().map(|v| v as &dyn WireValue),
        }
    }

    /// Declares a field that always holds a value.
    #[must_use]
    pub fn required<T: WireValue>(name: &'static str, value: &'a T) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// Returns the wire name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the value, if present.
    #[must_use]
    pub const fn value(&self) -> Option<&'a dyn WireValue> {
        self.value
    }

    /// Returns `true` if the field holds a value.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &self.value.map(WireValue::to_wire))
            .finish()
    }
}

/// Serializes a list of declared fields into a JSON object.
///
/// Absent fields are skipped. A field named in `nullable` that is cleared is
/// written as `null`; every other present field is written with its value.
#[must_use]
pub fn serialize_fields(fields: &[Field<'_>], nullable: &[&str]) -> Map<String, Value> {
    let mut wire = Map::new();
    for field in fields {
        let Some(value) = field.value else {
            continue;
        };
        let encoded = if nullable.contains(&field.name) && value.is_cleared() {
            Value::Null
        } else {
            value.to_wire()
        };
        wire.insert(field.name.to_string(), encoded);
    }
    wire
}

/// A request object sent as a JSON body.
///
/// Implementors declare their fields and the mandatory and nullable name
/// sets; the checks and the serialization are provided.
pub trait RequestContract: Send + Sync {
    /// The request type name, used in validation errors.
    fn contract_name(&self) -> &'static str;

    /// Wire names that must be present.
    fn mandatory(&self) -> &'static [&'static str];

    /// Wire names that are sent as `null` when cleared.
    fn nullable(&self) -> &'static [&'static str];

    /// All declared fields with their current values.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Verifies that every mandatory name is declared and present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingMandatoryField`] naming the first
    /// missing field.
    fn check_mandatory(&self) -> Result<(), ValidationError> {
        let fields = self.fields();
        for name in self.mandatory() {
            let present = fields.iter().any(|f| f.name == *name && f.is_set());
            if !present {
                return Err(ValidationError::MissingMandatoryField {
                    request: self.contract_name(),
                    field: name,
                });
            }
        }
        Ok(())
    }

    /// Wire names of nullable fields that are currently cleared.
    fn nulled(&self) -> Vec<&'static str> {
        let nullable = self.nullable();
        self.fields()
            .into_iter()
            .filter(|f| nullable.contains(&f.name) && f.value.is_some_and(WireValue::is_cleared))
            .map(|f| f.name)
            .collect()
    }

    /// Serializes the request into its JSON body.
    fn to_wire(&self) -> Map<String, Value> {
        serialize_fields(&self.fields(), self.nullable())
    }
}

/// One file attached to an upload.
#[derive(Clone, PartialEq, Eq)]
pub enum FilePart {
    /// Raw bytes with no filename or content type.
    Bytes(Vec<u8>),
    /// Bytes sent with a filename and content type.
    Named {
        /// The filename reported to the server.
        filename: String,
        /// The file content.
        bytes: Vec<u8>,
        /// The declared content type.
        content_type: String,
    },
}

impl FilePart {
    /// Returns the file content.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(bytes) | Self::Named { bytes, .. } => bytes,
        }
    }
}

impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            Self::Named {
                filename,
                bytes,
                content_type,
            } => f
                .debug_struct("Named")
                .field("filename", filename)
                .field("bytes", &bytes.len())
                .field("content_type", content_type)
                .finish(),
        }
    }
}

/// A multipart upload: file parts plus accompanying form fields.
///
/// Form fields with no value are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileRequest {
    file: BTreeMap<String, FilePart>,
    data: BTreeMap<String, Option<String>>,
}

impl FileRequest {
    /// Creates an empty upload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file part under `name`.
    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, part: FilePart) -> Self {
        self.file.insert(name.into(), part);
        self
    }

    /// Adds a form field; `None` records the field as absent.
    #[must_use]
    pub fn with_data<T: ToString>(mut self, name: impl Into<String>, value: Option<T>) -> Self {
        self.data
            .insert(name.into(), value.as_ref().map(ToString::to_string));
        self
    }

    /// Returns the file parts.
    #[must_use]
    pub const fn file(&self) -> &BTreeMap<String, FilePart> {
        &self.file
    }

    /// Returns all form fields, including absent ones.
    #[must_use]
    pub const fn data(&self) -> &BTreeMap<String, Option<String>> {
        &self.data
    }

    /// Returns the form fields that carry a value.
    pub fn form_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
    }

    /// Verifies that every name in `mandatory` is a file part or a present
    /// form field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingMandatoryField`] naming the first
    /// missing entry.
    pub fn check_mandatory(
        &self,
        request: &'static str,
        mandatory: &[&'static str],
    ) -> Result<(), ValidationError> {
        for name in mandatory {
            let present = self.file.contains_key(*name)
                || self.data.get(*name).is_some_and(Option::is_some);
            if !present {
                return Err(ValidationError::MissingMandatoryField {
                    request,
                    field: name,
                });
            }
        }
        Ok(())
    }
}

impl AsRef<Self> for FileRequest {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Declares a vocabulary enum whose wire value is a fixed string.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$( Self::$variant ),+];

            /// Returns the wire value.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(format!("unknown {} value '{}'", stringify!($name), other)),
                }
            }
        }

        impl $crate::models::WireValue for $name {
            fn to_wire(&self) -> serde_json::Value {
                serde_json::Value::String(self.as_str().to_string())
            }
        }
    };
}

pub(crate) use wire_enum;

/// Declares a request contract type together with its builder.
///
/// Fields are listed as `rust_name: Type => "wire_name"`. Every field is
/// optional in storage; the builder's `build()` enforces the mandatory set.
macro_rules! request_contract {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $builder:ident {
            mandatory: [$($mandatory:literal),* $(,)?],
            nullable: [$($nullable:literal),* $(,)?],
            fields: {
                $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $wire:literal ),+ $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $( $field: Option<$ty>, )+
        }

        impl $name {
            /// Wire names that must be present.
            pub const MANDATORY: &'static [&'static str] = &[$($mandatory),*];

            /// Wire names sent as `null` when cleared.
            pub const NULLABLE: &'static [&'static str] = &[$($nullable),*];

            #[doc = concat!("Creates a builder for [`", stringify!($name), "`].")]
            #[must_use]
            pub fn builder() -> $builder {
                $builder::default()
            }

            $(
                $(#[$fmeta])*
                #[must_use]
                pub const fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }
            )+
        }

        impl $crate::models::RequestContract for $name {
            fn contract_name(&self) -> &'static str {
                stringify!($name)
            }

            fn mandatory(&self) -> &'static [&'static str] {
                Self::MANDATORY
            }

            fn nullable(&self) -> &'static [&'static str] {
                Self::NULLABLE
            }

            fn fields(&self) -> Vec<$crate::models::Field<'_>> {
                vec![ $( $crate::models::Field::new($wire, &self.$field) ),+ ]
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Clone, Debug, Default)]
        pub struct $builder {
            inner: $name,
        }

        impl $builder {
            $(
                $(#[$fmeta])*
                #[must_use]
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.inner.$field = Some(value.into());
                    self
                }
            )+

            /// Builds the request after checking its mandatory fields.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::MissingMandatoryField`](crate::models::ValidationError::MissingMandatoryField)
            /// if a mandatory field was not set.
            pub fn build(self) -> Result<$name, $crate::models::ValidationError> {
                $crate::models::RequestContract::check_mandatory(&self.inner)?;
                Ok(self.inner)
            }
        }
    };
}

pub(crate) use request_contract;

/// Implements [`WireValue`] for a nested object from its declared fields.
macro_rules! wire_object {
    ($name:ty, |$this:ident| [ $( $field:expr ),+ $(,)? ]) => {
        impl $crate::models::WireValue for $name {
            fn to_wire(&self) -> serde_json::Value {
                let $this = self;
                serde_json::Value::Object($crate::models::serialize_fields(&[ $( $field ),+ ], &[]))
            }
        }
    };
}

pub(crate) use wire_object;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Sample {
        title: Option<String>,
        quantity: Option<i64>,
        price: Option<f64>,
        is_supply: Option<bool>,
        tags: Option<Vec<String>>,
        section_id: Option<i64>,
    }

    impl Sample {
        fn empty() -> Self {
            Self {
                title: None,
                quantity: None,
                price: None,
                is_supply: None,
                tags: None,
                section_id: None,
            }
        }
    }

    impl RequestContract for Sample {
        fn contract_name(&self) -> &'static str {
            "Sample"
        }

        fn mandatory(&self) -> &'static [&'static str] {
            &["title", "quantity"]
        }

        fn nullable(&self) -> &'static [&'static str] {
            &["tags", "section_id"]
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("title", &self.title),
                Field::new("quantity", &self.quantity),
                Field::new("price", &self.price),
                Field::new("is_supply", &self.is_supply),
                Field::new("tags", &self.tags),
                Field::new("section_id", &self.section_id),
            ]
        }
    }

    struct Undeclared;

    impl RequestContract for Undeclared {
        fn contract_name(&self) -> &'static str {
            "Undeclared"
        }

        fn mandatory(&self) -> &'static [&'static str] {
            &["type"]
        }

        fn nullable(&self) -> &'static [&'static str] {
            &[]
        }

        fn fields(&self) -> Vec<Field<'_>> {
            Vec::new()
        }
    }

    #[test]
    fn test_check_mandatory_reports_missing_field() {
        let mut sample = Sample::empty();
        sample.title = Some("Mug".to_string());

        assert_eq!(
            sample.check_mandatory(),
            Err(ValidationError::MissingMandatoryField {
                request: "Sample",
                field: "quantity",
            })
        );

        sample.quantity = Some(3);
        assert!(sample.check_mandatory().is_ok());
    }

    #[test]
    fn test_check_mandatory_fails_for_undeclared_name() {
        assert!(Undeclared.check_mandatory().is_err());
    }

    #[test]
    fn test_absent_fields_are_not_sent() {
        let mut sample = Sample::empty();
        sample.title = Some("Mug".to_string());

        let wire = sample.to_wire();
        assert_eq!(Value::Object(wire), json!({"title": "Mug"}));
    }

    #[test]
    fn test_cleared_nullable_fields_become_null() {
        let mut sample = Sample::empty();
        sample.tags = Some(Vec::new());
        sample.section_id = Some(0);

        let wire = sample.to_wire();
        assert_eq!(wire["tags"], Value::Null);
        assert_eq!(wire["section_id"], Value::Null);
        assert_eq!(sample.nulled(), vec!["tags", "section_id"]);
    }

    #[test]
    fn test_cleared_non_nullable_fields_keep_their_value() {
        let mut sample = Sample::empty();
        sample.quantity = Some(0);
        sample.price = Some(0.0);
        sample.title = Some(String::new());

        let wire = sample.to_wire();
        assert_eq!(wire["quantity"], json!(0));
        assert_eq!(wire["price"], json!(0.0));
        assert_eq!(wire["title"], json!(""));
        assert!(sample.nulled().is_empty());
    }

    #[test]
    fn test_false_is_a_value_not_a_clear() {
        let mut sample = Sample::empty();
        sample.is_supply = Some(false);

        assert_eq!(sample.to_wire()["is_supply"], json!(false));
    }

    #[test]
    fn test_json_value_clear_detection() {
        assert!(json!("").is_cleared());
        assert!(json!([]).is_cleared());
        assert!(json!(0).is_cleared());
        assert!(!json!(false).is_cleared());
        assert!(!json!({}).is_cleared());
        assert!(!json!("x").is_cleared());
    }

    #[test]
    fn test_map_values_serialize_as_objects() {
        let mut map = BTreeMap::new();
        map.insert("en".to_string(), "Mug".to_string());
        assert_eq!(map.to_wire(), json!({"en": "Mug"}));
    }

    #[test]
    fn test_file_request_skips_absent_form_fields() {
        let upload = FileRequest::new()
            .with_file("image", FilePart::Bytes(vec![1, 2, 3]))
            .with_data("rank", Some(1))
            .with_data::<String>("alt_text", None);

        let fields: Vec<_> = upload.form_fields().collect();
        assert_eq!(fields, vec![("rank", "1")]);
        assert_eq!(upload.data().len(), 2);
        assert_eq!(upload.file()["image"].bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_file_request_mandatory_check() {
        let upload = FileRequest::new().with_data::<String>("name", None);
        assert!(upload.check_mandatory("Upload", &["name"]).is_err());

        let upload = upload.with_file("file", FilePart::Bytes(vec![0]));
        assert!(upload.check_mandatory("Upload", &["file"]).is_ok());
    }

    #[test]
    fn test_file_part_debug_hides_content() {
        let part = FilePart::Named {
            filename: "a.pdf".to_string(),
            bytes: vec![0; 10],
            content_type: "application/pdf".to_string(),
        };
        let debug = format!("{part:?}");
        assert!(debug.contains("a.pdf"));
        assert!(debug.contains("10"));
    }
}
