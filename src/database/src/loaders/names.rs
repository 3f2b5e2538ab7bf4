use serde::Deserialize;

/// Name pool of one nationality.
#[derive(Debug, Clone, Deserialize)]
pub struct NamesEntity {
    pub nationality: String,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}
