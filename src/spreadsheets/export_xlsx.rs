use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use crate::transform::FlatRecord;
use rust_xlsxwriter::{Workbook, Worksheet};
use serde_json::Value;

const SCALAR_HEADERS: [&str; 12] = [
    "Property ID",
    "Address",
    "Owner Name",
    "First Contact",
    "Bedrooms",
    "Baths",
    "Sqft",
    "Estimated Value",
    "Equity %",
    "Last Sale Date",
    "Last Sale Price",
    "Flags",
];

/// Write the flattened records into a workbook, one row per record.
/// Phone columns extend to the widest record in the batch.
pub fn export_flat_records_xlsx(records: &[FlatRecord]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let phone_columns = records.iter().map(|r| r.phones.len()).max().unwrap_or(0);

    // Headers
    for (col, header) in SCALAR_HEADERS.iter().enumerate() {
        write_text(worksheet, 0, col as u16, header)?;
    }
    for i in 0..phone_columns {
        let col = (SCALAR_HEADERS.len() + i) as u16;
        write_text(worksheet, 0, col, &format!("Phone {i}"))?;
    }

    // Rows
    for (row, record) in records.iter().enumerate() {
        let r = (row + 1) as u32;

        write_scalar(worksheet, r, 0, &record.property_id)?;
        write_scalar(worksheet, r, 1, &record.address)?;
        write_scalar(worksheet, r, 2, &record.owner_name)?;
        write_text(
            worksheet,
            r,
            3,
            record.first_contact_name.as_deref().unwrap_or(""),
        )?;
        write_scalar(worksheet, r, 4, &record.bedrooms)?;
        write_scalar(worksheet, r, 5, &record.baths)?;
        write_scalar(worksheet, r, 6, &record.sqft)?;
        write_scalar(worksheet, r, 7, &record.estimated_value)?;
        write_scalar(worksheet, r, 8, &record.equity_percent)?;
        write_scalar(worksheet, r, 9, &record.last_sale_date)?;
        write_scalar(worksheet, r, 10, &record.last_sale_price)?;
        write_text(worksheet, r, 11, &record.flags.join(", "))?;

        for i in 0..record.phones.len() {
            if let Some(phone) = record.phones.get(&format!("phone_{i}")) {
                write_text(worksheet, r, (SCALAR_HEADERS.len() + i) as u16, phone)?;
            }
        }
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, "transformed_properties.xlsx")
}

/// Numbers go in as numbers, strings as-is, anything else as its JSON
/// text. A missing scalar leaves the cell blank.
fn write_scalar(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Option<Value>,
) -> Result<(), ServerError> {
    match value {
        Some(Value::Number(n)) => worksheet
            .write_number(row, col, n.as_f64().unwrap_or(0.0))
            .map(|_| ())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write cell: {e}"))),
        Some(Value::String(s)) => write_text(worksheet, row, col, s),
        Some(Value::Null) | None => Ok(()),
        Some(other) => write_text(worksheet, row, col, &other.to_string()),
    }
}

fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    text: &str,
) -> Result<(), ServerError> {
    worksheet
        .write_string(row, col, text)
        .map(|_| ())
        .map_err(|e| ServerError::XlsxError(format!("Failed to write cell: {e}")))
}
