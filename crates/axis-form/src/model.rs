//! Form record received from clients

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the disposal table on page 3
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub remitter_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purpose_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub remarks: String,
}

/// Values printed onto the disposal instruction form
///
/// Every field is optional in the payload: absent keys and JSON `null`
/// both become empty strings (or an empty table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub branch_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_number_100: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inr_account_percent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub eefc_account_percent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub eefc_account_100: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purpose_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub remitter_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub registration_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub place: String,
    #[serde(deserialize_with = "null_as_default")]
    pub applicant_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub applicant_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ie_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub table_entries: Vec<TableEntry>,
}

impl FormRecord {
    /// The `dated` value of the first table entry, or empty
    pub fn first_entry_dated(&self) -> &str {
        self.table_entries
            .first()
            .map(|entry| entry.dated.as_str())
            .unwrap_or_default()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
