//! Patron list shown on the credits screen.

use std::path::Path;

use serde::Deserialize;
use url::Url;

use ignited_types::error::{IgnitedError, Result};

/// A top-tier supporter, decoded from the bundled patron list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patron {
    pub name: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    pub link_name: Option<String>,
}

impl Patron {
    /// Names double as identifiers.
    pub fn id(&self) -> &str {
        &self.name
    }

    /// The patron's link, if present and a valid absolute URL.
    pub fn url(&self) -> Option<Url> {
        let link = self.link.as_deref()?;
        match Url::parse(link) {
            Ok(url) => Some(url),
            Err(e) => {
                log::debug!("Ignoring link for patron '{}': {e}", self.name);
                None
            },
        }
    }
}

pub fn parse_patrons(json: &str) -> Result<Vec<Patron>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads the patron list once and keeps either the list or the failure.
#[derive(Debug, Default)]
pub struct PatronsModel {
    patrons: Option<Vec<Patron>>,
    error: Option<IgnitedError>,
}

impl PatronsModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` unless a list is already loaded.
    pub fn load(&mut self, path: &Path) {
        if self.patrons.is_some() {
            return;
        }
        let result = std::fs::read_to_string(path)
            .map_err(IgnitedError::from)
            .and_then(|json| parse_patrons(&json));
        match result {
            Ok(patrons) => {
                log::info!("Loaded {} patrons", patrons.len());
                self.patrons = Some(patrons);
                self.error = None;
            },
            Err(e) => {
                log::warn!("Failed to load patrons from '{}': {e}", path.display());
                self.error = Some(e);
            },
        }
    }

    pub fn patrons(&self) -> Option<&[Patron]> {
        self.patrons.as_deref()
    }

    pub fn error(&self) -> Option<&IgnitedError> {
        self.error.as_ref()
    }
}
