//! Address strings in booking payloads look like
//! `"101 - Marina Tower - Marina - Dubai"`. There is no escaping, so a field
//! that itself contains `" - "` shifts every later field.

use crate::models::address::AddressParts;

/// Separator between address fields.
pub const ADDRESS_SEPARATOR: &str = " - ";

/// Splits an address string into apartment, building, area and city.
///
/// Fields are assigned by position and trimmed. Missing positions are empty,
/// extra positions are ignored. Never fails.
pub fn parse(address: Option<&str>) -> AddressParts {
    let Some(address) = address.filter(|a| !a.is_empty()) else {
        return AddressParts::default();
    };

    let mut parts = address.split(ADDRESS_SEPARATOR).map(str::trim);
    let mut next = || parts.next().unwrap_or_default().to_string();

    AddressParts {
        apartment_no: next(),
        building_name: next(),
        area: next(),
        city: next(),
        ..AddressParts::default()
    }
}
