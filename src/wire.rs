use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::AddrGenError;

/// POST payload sent for every fetch.
#[derive(Debug, Serialize)]
pub(crate) struct AddressRequest<'a> {
    pub path: &'a str,
    pub method: &'a str,
}

impl<'a> AddressRequest<'a> {
    pub(crate) fn for_path(path: &'a str) -> Self {
        Self {
            path,
            method: "address",
        }
    }
}

/// One validated identity/address record.
///
/// The remote service returns an object whose internal structure is not
/// interpreted beyond the checks in [`parse_response`]; the full object
/// (including its `status` field) is kept and persisted as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressRecord(Value);

impl AddressRecord {
    /// The record's `address.Full_Name` field, when present.
    pub fn full_name(&self) -> Option<&str> {
        self.0.get("address")?.get("Full_Name")?.as_str()
    }

    /// The underlying JSON object.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Parses a response body and validates its shape.
///
/// A body that is not JSON yields [`AddrGenError::Decode`]; a JSON body
/// without `status == "ok"` or without an `address` field yields
/// [`AddrGenError::UnexpectedShape`]. Neither is retryable.
pub(crate) fn parse_response(body: &str) -> Result<AddressRecord, AddrGenError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| AddrGenError::Decode(format!("invalid response JSON: {err}")))?;

    let status = value
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    if status != "ok" {
        return Err(AddrGenError::UnexpectedShape(format!(
            "status is '{status}', expected 'ok'"
        )));
    }
    if value.get("address").is_none() {
        return Err(AddrGenError::UnexpectedShape(
            "missing 'address' field".to_owned(),
        ));
    }

    Ok(AddressRecord(value))
}
