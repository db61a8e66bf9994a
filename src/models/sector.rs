use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Sector {
    pub value: String,
    pub label: String,
}

impl From<String> for Sector {
    fn from(raw: String) -> Self {
        Self {
            label: raw.clone(),
            value: raw,
        }
    }
}
