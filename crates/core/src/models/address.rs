use serde::{Deserialize, Serialize};

/// The only address classification the booking flow knows about.
pub const APARTMENT_TYPE: &str = "Apartment";

/// Placeholder shown in the detail panel for an empty field.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Structured view of a booking's `" - "` delimited address string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressParts {
    pub apartment_no: String,
    pub building_name: String,
    pub area: String,
    pub city: String,
    #[serde(rename = "type")]
    pub address_type: String,
}

impl Default for AddressParts {
    fn default() -> Self {
        Self {
            apartment_no: String::new(),
            building_name: String::new(),
            area: String::new(),
            city: String::new(),
            address_type: APARTMENT_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetailRow {
    pub label: String,
    pub value: String,
}

impl AddressParts {
    /// Rows of the read-only address panel, in display order.
    pub fn detail_rows(&self) -> Vec<AddressDetailRow> {
        [
            ("City", &self.city),
            ("Type", &self.address_type),
            ("Area", &self.area),
            ("Building Name", &self.building_name),
            ("Apartment No.", &self.apartment_no),
        ]
        .into_iter()
        .map(|(label, value)| AddressDetailRow {
            label: label.to_string(),
            value: if value.is_empty() {
                NOT_SPECIFIED.to_string()
            } else {
                value.clone()
            },
        })
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetailsResponse {
    pub address: String,
    pub parts: AddressParts,
    pub rows: Vec<AddressDetailRow>,
    pub map_embed_url: Option<String>,
}
