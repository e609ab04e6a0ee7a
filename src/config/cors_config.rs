use serde::Deserialize;

/// `allowed_origins` accepts either a list or a single `;`-delimited string so
/// both TOML arrays and flat environment variables bind to the same setting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AllowedOriginsConfig {
    List(Vec<String>),
    Delimited(String),
}

impl AllowedOriginsConfig {
    pub const DELIMITER: char = ';';

    /// Trimmed, non-empty origins in configuration order.
    pub fn origins(&self) -> Vec<String> {
        let entries: Vec<&str> = match self {
            AllowedOriginsConfig::List(values) => values.iter().map(String::as_str).collect(),
            AllowedOriginsConfig::Delimited(value) => value.split(Self::DELIMITER).collect(),
        };

        entries
            .into_iter()
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
