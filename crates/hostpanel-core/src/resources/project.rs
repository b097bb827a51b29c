use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parent entity that scopes a set of resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub guid: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Name for headings, falling back to the guid when the project is unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.guid
        } else {
            &self.name
        }
    }
}
