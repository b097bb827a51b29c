use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ResourceError;

/// Web server label attached to every hosted resource.
///
/// Databases and storages carry it too, even though it names a web server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HostType {
    #[default]
    Nginx,
    Apache,
}

impl HostType {
    pub const LABELS: &'static [&'static str] = &["Nginx", "Apache"];

    pub fn as_str(&self) -> &'static str {
        match self {
            HostType::Nginx => "Nginx",
            HostType::Apache => "Apache",
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostType {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Nginx" => Ok(HostType::Nginx),
            "Apache" => Ok(HostType::Apache),
            other => Err(ResourceError::InvalidValue {
                field: "host",
                value: other.to_string(),
                expected: HostType::LABELS,
            }),
        }
    }
}

/// Runtime language of a web space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    NodeJS,
    Python,
}

impl Language {
    pub const LABELS: &'static [&'static str] = &["NodeJS", "Python"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::NodeJS => "NodeJS",
            Language::Python => "Python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NodeJS" => Ok(Language::NodeJS),
            "Python" => Ok(Language::Python),
            other => Err(ResourceError::InvalidValue {
                field: "language",
                value: other.to_string(),
                expected: Language::LABELS,
            }),
        }
    }
}

/// The three kinds of resources managed by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Database,
    Storage,
    WebSpace,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Database,
        ResourceKind::Storage,
        ResourceKind::WebSpace,
    ];

    /// Path segment of the REST collection.
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::Database => "databases",
            ResourceKind::Storage => "storages",
            ResourceKind::WebSpace => "web-spaces",
        }
    }

    /// Lowercase human-readable name ("web space").
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Database => "database",
            ResourceKind::Storage => "storage",
            ResourceKind::WebSpace => "web space",
        }
    }

    /// Editable form fields, in display order.
    pub fn form_fields(&self) -> &'static [FieldSpec] {
        match self {
            ResourceKind::Database => DATABASE_FIELDS,
            ResourceKind::Storage => STORAGE_FIELDS,
            ResourceKind::WebSpace => WEB_SPACE_FIELDS,
        }
    }

    /// Look up a form field by its name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.form_fields().iter().find(|f| f.name == name)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Describes one editable form field of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key and form field name.
    pub name: &'static str,
    /// Column header and form label.
    pub label: &'static str,
    /// Kebab-case flag name for command-line input.
    pub flag: &'static str,
    /// Allowed values for enumerated fields.
    pub choices: Option<&'static [&'static str]>,
}

const HOST_FIELD: FieldSpec = FieldSpec {
    name: "host",
    label: "Host",
    flag: "host",
    choices: Some(HostType::LABELS),
};

const USERNAME_FIELD: FieldSpec = FieldSpec {
    name: "username",
    label: "Username",
    flag: "username",
    choices: None,
};

const PASSWORD_FIELD: FieldSpec = FieldSpec {
    name: "password",
    label: "Password",
    flag: "password",
    choices: None,
};

const DATABASE_FIELDS: &[FieldSpec] = &[
    HOST_FIELD,
    USERNAME_FIELD,
    PASSWORD_FIELD,
    FieldSpec {
        name: "databaseName",
        label: "Database Name",
        flag: "database-name",
        choices: None,
    },
];

const STORAGE_FIELDS: &[FieldSpec] = &[
    HOST_FIELD,
    USERNAME_FIELD,
    PASSWORD_FIELD,
    FieldSpec {
        name: "directoryName",
        label: "Directory Name",
        flag: "directory-name",
        choices: None,
    },
];

const WEB_SPACE_FIELDS: &[FieldSpec] = &[
    HOST_FIELD,
    FieldSpec {
        name: "url",
        label: "URL",
        flag: "url",
        choices: None,
    },
    FieldSpec {
        name: "directory",
        label: "Directory",
        flag: "directory",
        choices: None,
    },
    FieldSpec {
        name: "language",
        label: "Language",
        flag: "language",
        choices: Some(Language::LABELS),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_type_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&HostType::Apache).unwrap(),
            "\"Apache\""
        );
        let parsed: HostType = serde_json::from_str("\"Nginx\"").unwrap();
        assert_eq!(parsed, HostType::Nginx);
    }

    #[test]
    fn test_host_type_from_str_rejects_unknown() {
        let err = "IIS".parse::<HostType>().unwrap_err();
        assert!(matches!(err, ResourceError::InvalidValue { field: "host", .. }));
    }

    #[test]
    fn test_language_labels_roundtrip() {
        for label in Language::LABELS {
            let lang: Language = label.parse().unwrap();
            assert_eq!(lang.as_str(), *label);
        }
    }

    #[test]
    fn test_collection_paths() {
        assert_eq!(ResourceKind::Database.collection(), "databases");
        assert_eq!(ResourceKind::Storage.collection(), "storages");
        assert_eq!(ResourceKind::WebSpace.collection(), "web-spaces");
    }

    #[test]
    fn test_every_kind_has_host_field_first() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.form_fields()[0].name, "host");
        }
    }

    #[test]
    fn test_field_lookup() {
        let spec = ResourceKind::Database.field("databaseName").unwrap();
        assert_eq!(spec.flag, "database-name");
        assert!(ResourceKind::Database.field("directory").is_none());
    }
}
