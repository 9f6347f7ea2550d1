/// Shared application state the profile view reads its services from
///
/// The view only ever sees a `&dyn ServiceSource`, so the collection can come
/// from the built-in defaults, a JSON/YAML/TOML file, or a test double.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::utils::DEFAULT_SERVICES;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read services file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported services file format: {} (expected .json, .yaml, .yml or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    #[serde(alias = "servicio")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ServiceEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_active: None,
        }
    }
}

/// Ordered service collection; order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceList(Vec<ServiceEntry>);

impl ServiceList {
    pub fn new(entries: Vec<ServiceEntry>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServiceEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ServiceEntry>> for ServiceList {
    fn from(entries: Vec<ServiceEntry>) -> Self {
        Self(entries)
    }
}

impl<S: Into<String>> FromIterator<S> for ServiceList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(ServiceEntry::new).collect())
    }
}

/// Read-only access to the externally owned service collection.
///
/// `None` means the collection is absent, which the view renders exactly like
/// an empty one.
pub trait ServiceSource {
    fn services(&self) -> Option<&ServiceList>;
}

/// Display names in collection order; absent collections yield nothing
pub fn service_names(source: &dyn ServiceSource) -> Vec<&str> {
    source
        .services()
        .map(|list| list.iter().map(|entry| entry.name.as_str()).collect())
        .unwrap_or_default()
}

/// Accepted file layouts: a bare list, or a table with a `services` key
#[derive(Deserialize)]
#[serde(untagged)]
enum ServicesFile {
    List(ServiceList),
    Document {
        #[serde(default, alias = "servicios_vet")]
        services: Option<ServiceList>,
    },
}

impl ServicesFile {
    fn into_services(self) -> Option<ServiceList> {
        match self {
            ServicesFile::List(list) => Some(list),
            ServicesFile::Document { services } => services,
        }
    }
}

/// In-memory application state
#[derive(Debug, Clone, Default)]
pub struct Store {
    services: Option<ServiceList>,
}

impl Store {
    pub fn new(services: Option<ServiceList>) -> Self {
        Self { services }
    }

    /// State with no service collection at all
    pub fn absent() -> Self {
        Self { services: None }
    }

    pub fn with_defaults() -> Self {
        Self::new(Some(DEFAULT_SERVICES.iter().copied().collect()))
    }

    /// Load the collection from a file, picking the parser by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        // Reject the format before touching the filesystem
        if !matches!(extension.as_str(), "json" | "yaml" | "yml" | "toml") {
            return Err(StoreError::UnsupportedFormat(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed: ServicesFile = match extension.as_str() {
            "json" => serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            "toml" => toml::from_str(&content).map_err(|source| StoreError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            _ => serde_yaml::from_str(&content).map_err(|source| StoreError::Yaml {
                path: path.to_path_buf(),
                source,
            })?,
        };

        Ok(Self::new(parsed.into_services()))
    }
}

impl ServiceSource for Store {
    fn services(&self) -> Option<&ServiceList> {
        self.services.as_ref()
    }
}
