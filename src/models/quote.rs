use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Property categories offered in the quote form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PropertyType {
    Residential,
    Commercial,
}

impl PropertyType {
    /// Human-facing label for select options.
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Residential => "Residential",
            PropertyType::Commercial => "Commercial",
        }
    }
}

/// Services a visitor can request a quote for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq)]
pub enum ServiceKind {
    #[serde(rename = "Residential Duct Cleaning")]
    #[strum(serialize = "Residential Duct Cleaning")]
    ResidentialDuctCleaning,

    #[serde(rename = "Commercial Duct Cleaning")]
    #[strum(serialize = "Commercial Duct Cleaning")]
    CommercialDuctCleaning,

    #[serde(rename = "Dryer Vent Cleaning")]
    #[strum(serialize = "Dryer Vent Cleaning")]
    DryerVentCleaning,

    #[serde(rename = "HVAC Maintenance")]
    #[strum(serialize = "HVAC Maintenance")]
    HvacMaintenance,

    #[serde(rename = "Air Quality Testing")]
    #[strum(serialize = "Air Quality Testing")]
    AirQualityTesting,

    #[serde(rename = "Emergency Service")]
    #[strum(serialize = "Emergency Service")]
    EmergencyService,
}

/// Form fields, in the order they are rendered and reported.
#[derive(Debug, Clone, Copy, Serialize, EnumIter, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Address,
    PropertyType,
    ServiceNeeded,
    Message,
}

impl Field {
    /// Name used for the HTML input and the JSON key.
    pub fn form_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::PropertyType => "propertyType",
            Field::ServiceNeeded => "serviceNeeded",
            Field::Message => "message",
        }
    }

    /// Maps a validation report path (struct field name) back to a field.
    pub fn from_path(path: &str) -> Option<Self> {
        Field::iter().find(|field| field.struct_name() == path)
    }

    fn struct_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::PropertyType => "property_type",
            Field::ServiceNeeded => "service_needed",
            Field::Message => "message",
        }
    }

    /// Message shown beneath the field when its constraint fails. `None`
    /// for the free-text message, which has no constraint.
    pub fn error_message(self) -> Option<&'static str> {
        match self {
            Field::Name => Some("Name must be at least 2 characters"),
            Field::Email => Some("Please enter a valid email address"),
            Field::Phone => Some("Please enter a valid phone number"),
            Field::Address => Some("Please enter your address"),
            Field::PropertyType => Some("Please select a property type"),
            Field::ServiceNeeded => Some("Please select a service"),
            Field::Message => None,
        }
    }
}

/// Raw values as entered by the visitor.
///
/// Every field defaults to empty text so a missing field fails its own
/// constraint instead of rejecting the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteInput {
    #[garde(length(chars, min = 2))]
    pub name: String,

    #[garde(email, custom(has_dotted_domain))]
    pub email: String,

    #[garde(length(chars, min = 10))]
    pub phone: String,

    #[garde(length(chars, min = 5))]
    pub address: String,

    #[garde(custom(is_property_type))]
    pub property_type: String,

    #[garde(custom(is_service_kind))]
    pub service_needed: String,

    #[garde(skip)]
    pub message: Option<String>,
}

impl QuoteInput {
    /// Raw value currently held for `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::PropertyType => &self.property_type,
            Field::ServiceNeeded => &self.service_needed,
            Field::Message => self.message.as_deref().unwrap_or_default(),
        }
    }
}

/// The domain must contain a dot and end in a label of two or more letters,
/// so `user@localhost` and `a@b` are rejected.
fn has_dotted_domain(value: &str, _: &()) -> garde::Result {
    let domain = value.rsplit_once('@').map(|(_, domain)| domain).unwrap_or_default();
    match domain.rsplit_once('.') {
        Some((host, tld))
            if !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            Ok(())
        }
        _ => Err(garde::Error::new("email domain needs a top-level label")),
    }
}

fn is_property_type(value: &str, _: &()) -> garde::Result {
    value
        .parse::<PropertyType>()
        .map(|_| ())
        .map_err(|_| garde::Error::new("unknown property type"))
}

fn is_service_kind(value: &str, _: &()) -> garde::Result {
    value
        .parse::<ServiceKind>()
        .map(|_| ())
        .map_err(|_| garde::Error::new("unknown service"))
}

/// A validated quote request. Only constructed from a `QuoteInput` that
/// passed validation, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    name: String,
    email: String,
    phone: String,
    address: String,
    property_type: PropertyType,
    service_needed: ServiceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl QuoteRequest {
    pub(crate) fn new(
        input: &QuoteInput,
        property_type: PropertyType,
        service_needed: ServiceKind,
    ) -> Self {
        Self {
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            address: input.address.clone(),
            property_type,
            service_needed,
            message: input.message.clone().filter(|m| !m.trim().is_empty()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub fn service_needed(&self) -> ServiceKind {
        self.service_needed
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
