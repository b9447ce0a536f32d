//! Recipient input reading
//!
//! Distribution input is a CSV file with one recipient per row. Only the
//! identifier column is consumed; any other columns are ignored.

use std::io::Read;

use crate::error::{CodecError, CodecResult};

/// Column holding the recipient identifier unless overridden
pub const DEFAULT_IDENTIFIER_COLUMN: &str = "user_address";

/// Read recipient identifiers from CSV, in file order.
///
/// `column` names the header of the identifier column. Surrounding
/// whitespace is trimmed from each value.
pub fn read_recipients<R: Read>(reader: R, column: &str) -> CodecResult<Vec<String>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let column_index = csv_reader
        .headers()?
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| CodecError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut identifiers = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let value = record.get(column_index).unwrap_or_default().trim();
        identifiers.push(value.to_string());
    }

    Ok(identifiers)
}
