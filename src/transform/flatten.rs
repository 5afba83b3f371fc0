use crate::transform::models::{FlatRecord, PropertyRecord};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Flatten one upstream record into an output row.
///
/// Never fails: every field access defaults, and malformed nested entries
/// (a flag or phone entry that is not an object, a label-less flag, an
/// empty phone string) are dropped individually instead of poisoning the
/// record. Pure function of its input; the phone set and first-contact
/// latch live and die inside this call.
pub fn flatten(record: &PropertyRecord) -> FlatRecord {
    // Flags keep input order and duplicates; only the labels survive.
    let flags = record
        .property_flags
        .as_ref()
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("label"))
                .filter_map(Value::as_str)
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let mut first_contact_name = None;
    let mut unique_phones = BTreeSet::new();

    if let Some(entries) = record.phone_numbers.as_ref().and_then(Value::as_array) {
        for entry in entries {
            let contact = match entry.get("contact").and_then(Value::as_object) {
                Some(c) => c,
                None => continue,
            };

            // First contact with a usable name wins, in input order.
            if first_contact_name.is_none() {
                if let Some(name) = contact
                    .get("full_name")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                {
                    first_contact_name = Some(name.to_string());
                }
            }

            for key in ["phone_1", "phone_2", "phone_3"] {
                if let Some(phone) = contact
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                {
                    unique_phones.insert(phone.to_string());
                }
            }
        }
    }

    // BTreeSet iterates in ascending lexicographic order, so the numbered
    // fields depend only on the unique phone set, not on input order.
    let phones: BTreeMap<String, String> = unique_phones
        .into_iter()
        .enumerate()
        .map(|(i, phone)| (format!("phone_{i}"), phone))
        .collect();

    FlatRecord {
        property_id: record.property_id.clone(),
        address: record.property_address_full.clone(),
        owner_name: record.owner_name.clone(),
        first_contact_name,
        bedrooms: record.total_bedrooms.clone(),
        baths: record.total_baths.clone(),
        sqft: record.building_square_feet.clone(),
        estimated_value: record.estimated_value.clone(),
        equity_percent: record.equity_percent.clone(),
        last_sale_date: record.sale_date.clone(),
        last_sale_price: record.sale_price.clone(),
        flags,
        phones,
    }
}
