use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single contributor's gift recorded against a novena.
///
/// Amount and date are free text and are never validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// Name of the contributor
    #[serde(rename = "name", default)]
    pub contributor_name: String,
    /// Donated amount as typed by the user
    #[serde(rename = "donation", default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
    /// Fields written by other versions of the program, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Donation {
    pub fn new(contributor_name: &str, amount: &str, date: &str) -> Self {
        Self {
            contributor_name: contributor_name.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
            extra: Map::new(),
        }
    }
}

/// A named fundraising campaign with its donations in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Novena {
    /// Unique identifier, assigned once and never reused
    #[serde(default)]
    pub id: i64,
    /// Exact-match lookup key; at most one novena per name
    #[serde(default)]
    pub name: String,
    #[serde(rename = "dateinicio", default)]
    pub start_date: String,
    #[serde(rename = "datefim", default)]
    pub end_date: String,
    /// Append-only donation history
    #[serde(default, deserialize_with = "null_as_empty")]
    pub donations: Vec<Donation>,
    /// Fields written by other versions of the program, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Novena {
    pub fn new(id: i64, name: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            donations: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// Older data files store a novena without donations as `"donations": null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Donation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Donation>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request for registering a novena.
///
/// Field names match the HTML form, so the same type serves both the form
/// submission and the JSON API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterNovenaRequest {
    pub novena: String,
    pub dateinicio: String,
    pub datefim: String,
}

/// Response after registering a novena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterNovenaResponse {
    pub novena: Novena,
    /// False when a novena with the same name already existed
    pub created: bool,
    pub success_message: String,
}

/// Request for registering a donation against a novena
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterDonationRequest {
    /// Name of the novena; created on first use
    pub novena: String,
    /// Contributor name
    pub name: String,
    pub donation: String,
    pub date: String,
}

/// Response after registering a donation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterDonationResponse {
    pub novena: Novena,
    pub success_message: String,
}

/// Response containing every novena in creation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovenaListResponse {
    pub novenas: Vec<Novena>,
}
