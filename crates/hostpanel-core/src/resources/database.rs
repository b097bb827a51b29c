use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::ResourceError;
use super::traits::{Resource, unknown_field};
use super::types::{HostType, ResourceKind};

/// A hosted database with its access credentials.
///
/// The password is stored and transmitted in plain text, exactly as the
/// backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub guid: String,
    pub host: HostType,
    pub username: String,
    pub password: String,
    pub database_name: String,
    /// Server fields not modelled here, sent back unchanged on update.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Database {
    const KIND: ResourceKind = ResourceKind::Database;

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
            username: String::new(),
            password: String::new(),
            database_name: String::new(),
            extra,
        }
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "host" => Some(self.host.to_string()),
            "username" => Some(self.username.clone()),
            "password" => Some(self.password.clone()),
            "databaseName" => Some(self.database_name.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), ResourceError> {
        match field {
            "host" => self.host = value.parse()?,
            "username" => self.username = value.to_string(),
            // Bound to `password`; the old form wrote this input into `directory`.
            "password" => self.password = value.to_string(),
            "databaseName" => self.database_name = value.to_string(),
            other => return Err(unknown_field(Self::KIND, other)),
        }
        Ok(())
    }
}
