use serde::{Deserialize, Deserializer, Serialize};

/// One decoded results payload. Rebuilt from scratch on every poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultSnapshot {
    #[serde(deserialize_with = "null_as_default", alias = "Progress")]
    pub progress: Progress,
    #[serde(deserialize_with = "null_as_default", alias = "Results")]
    pub results: Results,
    #[serde(deserialize_with = "null_as_default", alias = "Timestamp")]
    pub timestamp: RawTimestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    #[serde(deserialize_with = "null_as_default", alias = "Processed")]
    pub processed: i64,
    #[serde(deserialize_with = "null_as_default", alias = "Total")]
    pub total: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Results {
    #[serde(deserialize_with = "null_as_default", alias = "Parties")]
    pub parties: Vec<Party>,
    #[serde(deserialize_with = "null_as_default", alias = "Abstention")]
    pub abstention: i64,
    #[serde(deserialize_with = "null_as_default", alias = "Blank")]
    pub blank: i64,
    #[serde(deserialize_with = "null_as_default", alias = "Null")]
    pub null: i64,
    #[serde(deserialize_with = "null_as_default", alias = "Census")]
    pub census: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    #[serde(deserialize_with = "null_as_default", alias = "ID", alias = "Id")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", alias = "Acronym")]
    pub acronym: String,
    #[serde(deserialize_with = "null_as_default", alias = "Name")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", alias = "Ord")]
    pub ord: i64,
    #[serde(deserialize_with = "null_as_default", alias = "Votes")]
    pub votes: PartyVotes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyVotes {
    #[serde(deserialize_with = "null_as_default", alias = "Presential")]
    pub presential: i64,
    #[serde(deserialize_with = "null_as_default", alias = "Absentee")]
    pub absentee: i64,
    #[serde(deserialize_with = "null_as_default", alias = "International")]
    pub international: i64,
    #[serde(deserialize_with = "null_as_default", alias = "Special")]
    pub special: i64,
    #[serde(deserialize_with = "null_as_default", alias = "Percent")]
    pub percent: f64,
}

/// A `null` field decodes like a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PartyVotes {
    pub fn total(&self) -> i64 {
        self.presential
            .wrapping_add(self.absentee)
            .wrapping_add(self.international)
            .wrapping_add(self.special)
    }
}

/// The feed's timestamp carries extra precision digits; it shows up either as
/// a bare integer or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Number(i64),
    Text(String),
}

impl Default for RawTimestamp {
    fn default() -> Self {
        RawTimestamp::Number(0)
    }
}

impl RawTimestamp {
    pub fn as_text(&self) -> String {
        match self {
            RawTimestamp::Number(n) => n.to_string(),
            RawTimestamp::Text(s) => s.clone(),
        }
    }
}
