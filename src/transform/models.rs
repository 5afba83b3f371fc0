use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// record
//  ├── property_id / property_address_full / owner_name
//  ├── total_bedrooms / total_baths / building_square_feet
//  ├── EstimatedValue / equity_percent / sale_date / sale_price
//  ├── property_flags: [ { label, ... }, ... ]
//  └── phone_numbers
//       └── [ { contact: { full_name, phone_1, phone_2, phone_3 } }, ... ]

/// One property record as the upstream provider sends it. Every field is
/// optional; scalar values are kept as raw `Value` so they pass through to
/// the output untouched regardless of their JSON type. The two list fields
/// are raw as well: a non-list value there is tolerated and treated as
/// empty rather than failing the record.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyRecord {
    pub property_id: Option<Value>,
    pub property_address_full: Option<Value>,
    pub owner_name: Option<Value>,
    pub total_bedrooms: Option<Value>,
    pub total_baths: Option<Value>,
    pub building_square_feet: Option<Value>,
    #[serde(rename = "EstimatedValue")]
    pub estimated_value: Option<Value>,
    pub equity_percent: Option<Value>,
    pub sale_date: Option<Value>,
    pub sale_price: Option<Value>,

    #[serde(default)]
    pub property_flags: Option<Value>,
    #[serde(default)]
    pub phone_numbers: Option<Value>,
}

/// The flattened output row. Missing scalars serialize as explicit `null`
/// so every row carries the same base columns; the deduplicated phones
/// flatten into `phone_0`, `phone_1`, … keys alongside them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRecord {
    pub property_id: Option<Value>,
    pub address: Option<Value>,
    pub owner_name: Option<Value>,
    pub first_contact_name: Option<String>,
    pub bedrooms: Option<Value>,
    pub baths: Option<Value>,
    pub sqft: Option<Value>,
    pub estimated_value: Option<Value>,
    pub equity_percent: Option<Value>,
    pub last_sale_date: Option<Value>,
    pub last_sale_price: Option<Value>,
    pub flags: Vec<String>,

    #[serde(flatten)]
    pub phones: BTreeMap<String, String>,
}
