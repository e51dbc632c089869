use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListGuestsQuery {
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub limit: Option<u32>,
}
