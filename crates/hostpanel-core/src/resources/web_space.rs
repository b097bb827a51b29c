use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::ResourceError;
use super::traits::{Resource, unknown_field};
use super::types::{HostType, Language, ResourceKind};

/// A web space: a served directory bound to a URL and a runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSpace {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub guid: String,
    pub host: HostType,
    pub url: String,
    pub directory: String,
    pub language: Language,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for WebSpace {
    const KIND: ResourceKind = ResourceKind::WebSpace;

    fn guid(&self) -> &str {
        &self.guid
    }

    fn blank(project_guid: &str) -> Self {
        let mut extra = Map::new();
        extra.insert(
            "projectGuid".to_string(),
            Value::String(project_guid.to_string()),
        );
        Self {
            guid: String::new(),
            host: HostType::default(),
            url: String::new(),
            directory: String::new(),
            language: Language::default(),
            extra,
        }
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "host" => Some(self.host.to_string()),
            "url" => Some(self.url.clone()),
            "directory" => Some(self.directory.clone()),
            "language" => Some(self.language.to_string()),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), ResourceError> {
        match field {
            "host" => self.host = value.parse()?,
            "url" => self.url = value.to_string(),
            "directory" => self.directory = value.to_string(),
            "language" => self.language = value.parse()?,
            other => return Err(unknown_field(Self::KIND, other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_web_space_roundtrip_with_language() {
        let ws: WebSpace = serde_json::from_value(json!({
            "guid": "w1",
            "host": "Nginx",
            "url": "https://shop.example.com",
            "directory": "/var/www/shop",
            "language": "Python"
        }))
        .unwrap();
        assert_eq!(ws.language, Language::Python);
        assert_eq!(
            ws.field_values(),
            vec!["Nginx", "https://shop.example.com", "/var/www/shop", "Python"]
        );
    }

    #[test]
    fn test_set_language() {
        let mut ws = WebSpace::blank("proj-1");
        ws.set_field("language", "Python").unwrap();
        assert_eq!(ws.language, Language::Python);
        assert!(ws.set_field("language", "Go").is_err());
    }

    #[test]
    fn test_rejects_unknown_language_from_server() {
        let result: Result<WebSpace, _> = serde_json::from_value(json!({
            "guid": "w1",
            "host": "Nginx",
            "url": "u",
            "directory": "d",
            "language": "Ruby"
        }));
        assert!(result.is_err());
    }
}
