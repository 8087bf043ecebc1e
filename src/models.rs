use serde::{Deserialize, Serialize};

/// One class listing as polled from the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassRecord {
    pub name: String,
    pub date: String,
    pub time: String,
    pub available_spots: u32,
}

/// Wire shape of the upstream `/classes/yoga` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassesResponse {
    #[serde(default)]
    pub classes: Vec<ClassRecord>,
}
