//! Deal records exactly as the list endpoint returns them.
//!
//! Every field may be absent, null or of the wrong type. A bad field reads
//! as absent rather than failing the record; defaulting happens in the
//! normalizer, not here.

use crate::DealId;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDeal {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<DealId>,
    #[serde(deserialize_with = "lenient")]
    pub stage: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub company: Option<RawCompany>,
    #[serde(deserialize_with = "lenient")]
    pub owner: Option<RawOwner>,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub expected_close_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_contact: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_contact_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub documents_count: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub is_syndicate: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub syndicate_lead: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCompany {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<DealId>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(alias = "logo_url", deserialize_with = "lenient")]
    pub logo: Option<String>,
    #[serde(deserialize_with = "lenient_industry")]
    pub industry: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(alias = "verification_tier", deserialize_with = "lenient")]
    pub tier: Option<u8>,
    #[serde(alias = "verification_score", deserialize_with = "lenient_amount")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOwner {
    #[serde(alias = "full_name", deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(alias = "avatar_url", deserialize_with = "lenient")]
    pub avatar: Option<String>,
}

/// Postgres `numeric` columns can arrive as JSON strings; accept both.
/// Anything else reads as `None`.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Any value that does not fit `T` reads as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok()))
}

/// Null reads as no industries and a bare string as one; non-string
/// entries are dropped.
fn lenient_industry<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => vec![s],
        Some(Value::Array(values)) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
