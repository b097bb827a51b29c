use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::ResourceError;
use super::traits::{Resource, unknown_field};
use super::types::{HostType, ResourceKind};

/// A storage mount owned by a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub guid: String,
    pub host: HostType,
    pub username: String,
    pub password: String,
    pub directory_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_guid: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Storage {
    const KIND: ResourceKind = ResourceKind::Storage;

    fn guid(&self) -> &str {
        &self.guid
    }

    fn blank(project_guid: &str) -> Self {
        Self {
            guid: String::new(),
            host: HostType::default(),
            username: String::new(),
            password: String::new(),
            directory_name: String::new(),
            project_guid: project_guid.to_string(),
            extra: Map::new(),
        }
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "host" => Some(self.host.to_string()),
            "username" => Some(self.username.clone()),
            "password" => Some(self.password.clone()),
            "directoryName" => Some(self.directory_name.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), ResourceError> {
        match field {
            "host" => self.host = value.parse()?,
            "username" => self.username = value.to_string(),
            "password" => self.password = value.to_string(),
            "directoryName" => self.directory_name = value.to_string(),
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
    fn test_storage_json_shape() {
        let storage = Storage {
            guid: "a".to_string(),
            host: HostType::Nginx,
            username: "deploy".to_string(),
            password: "pw".to_string(),
            directory_name: "/srv/a".to_string(),
            project_guid: "proj-1".to_string(),
            extra: Map::new(),
        };
        assert_eq!(
            serde_json::to_value(&storage).unwrap(),
            json!({
                "guid": "a",
                "host": "Nginx",
                "username": "deploy",
                "password": "pw",
                "directoryName": "/srv/a",
                "projectGuid": "proj-1"
            })
        );
    }

    #[test]
    fn test_record_without_project_guid_serializes_unchanged() {
        let input = json!({
            "guid": "a",
            "host": "Nginx",
            "username": "u",
            "password": "p",
            "directoryName": "/a"
        });
        let storage: Storage = serde_json::from_value(input.clone()).unwrap();
        assert!(storage.project_guid.is_empty());
        assert_eq!(serde_json::to_value(&storage).unwrap(), input);
    }

    #[test]
    fn test_project_guid_is_not_a_form_field() {
        let mut storage = Storage::blank("proj-1");
        assert!(storage.set_field("projectGuid", "other").is_err());
        assert_eq!(storage.project_guid, "proj-1");
    }

    #[test]
    fn test_set_host_rejects_unknown_label() {
        let mut storage = Storage::blank("proj-1");
        assert!(storage.set_field("host", "Caddy").is_err());
        storage.set_field("host", "Apache").unwrap();
        assert_eq!(storage.host, HostType::Apache);
    }

    #[test]
    fn test_validate_whitespace_only_is_missing() {
        let mut storage = Storage::blank("proj-1");
        storage.set_field("username", "deploy").unwrap();
        storage.set_field("password", "pw").unwrap();
        storage.set_field("directoryName", "   ").unwrap();
        assert!(matches!(
            storage.validate(),
            Err(ResourceError::MissingField {
                field: "directoryName"
            })
        ));
    }
}
