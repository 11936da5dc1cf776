use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{address, models::address::AddressParts};

/// Upstream envelope `{ "Data": { ... } }` for a single booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingEnvelope {
    #[serde(rename = "Data", default)]
    pub data: Option<BookingSummary>,
}

/// Booking summary as the backend reports it. Every field is optional since
/// the payload is produced by several checkout flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    #[serde(default)]
    pub booking_ref: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub service_fee: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_pay: f64,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub map_latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub map_longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub service_charge: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub cash_on_delivery_charge: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub discount: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub sub_total: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub vat: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total: f64,
}

// Money arrives as a number or a numeric string; anything else counts as zero.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_coordinate(deserializer)?.unwrap_or_default())
}

fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub service_charge: f64,
    pub cash_on_delivery_charge: f64,
    pub service_fee: f64,
    pub discount: f64,
    pub sub_total: f64,
    pub vat: f64,
    pub total: f64,
}

impl BookingSummary {
    /// `"<date>, <time>"` as shown in the job details card.
    pub fn start_time(&self) -> String {
        format!(
            "{}, {}",
            self.date.as_deref().unwrap_or_default(),
            self.time.as_deref().unwrap_or_default()
        )
    }

    pub fn price_breakdown(&self) -> PriceBreakdown {
        PriceBreakdown {
            service_charge: self.service_charge,
            cash_on_delivery_charge: self.cash_on_delivery_charge,
            service_fee: self.service_fee,
            discount: self.discount,
            sub_total: self.sub_total,
            vat: self.vat,
            total: self.total,
        }
    }

    /// Embeddable map for the booking location. Requires both coordinates.
    pub fn map_embed_url(&self) -> Option<String> {
        match (self.map_latitude, self.map_longitude) {
            (Some(lat), Some(lng)) => Some(format!(
                "https://www.google.com/maps?q={},{}&z=16&output=embed",
                lat, lng
            )),
            _ => None,
        }
    }

    pub fn address_parts(&self) -> AddressParts {
        address::parse(self.address.as_deref())
    }
}

/// Display model of the booking-details screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub booking_ref: String,
    pub start_time: String,
    pub address: String,
    pub address_parts: AddressParts,
    pub service_name: String,
    pub service_fee: f64,
    pub payment_method: String,
    pub total_pay: f64,
    pub price_breakdown: PriceBreakdown,
    pub map_embed_url: Option<String>,
}

impl BookingDetails {
    /// Builds the screen model. `booking_id` stands in for the reference
    /// when the backend omits `bookingRef`.
    pub fn from_summary(booking_id: &str, summary: &BookingSummary) -> Self {
        Self {
            booking_ref: summary
                .booking_ref
                .clone()
                .unwrap_or_else(|| booking_id.to_string()),
            start_time: summary.start_time(),
            address: summary.address.clone().unwrap_or_default(),
            address_parts: summary.address_parts(),
            service_name: summary.service_name.clone().unwrap_or_default(),
            service_fee: summary.service_fee,
            payment_method: summary.payment_method.clone().unwrap_or_default(),
            total_pay: summary.total_pay,
            price_breakdown: summary.price_breakdown(),
            map_embed_url: summary.map_embed_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddInstructionsRequest {
    pub instructions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddInstructionsResponse {
    pub booking_ref: String,
    pub instructions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleRequest {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleResponse {
    pub booking_ref: String,
    pub date: String,
    pub time: String,
    pub display_full: String,
}
