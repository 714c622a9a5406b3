//! Sources of historical drawings: local JSON dumps, the Socrata open data API, memory

use crate::io::configuration::{HTTP_TIMEOUT_SECS, SOCRATA_ENDPOINT, SOCRATA_TOKEN_HEADER};
use crate::io::error::{DrawError, Result, provider_unavailable};
use crate::model::RawRecord;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Supplies the most recent historical drawings
pub trait DrawingProvider {
    /// Short name used in errors and logs
    fn name(&self) -> &'static str;

    /// Fetch up to `n` records, newest first
    ///
    /// # Errors
    ///
    /// Returns `ProviderUnavailable` if the source cannot be read or decoded
    fn fetch_raw(&self, n: usize) -> Result<Vec<RawRecord>>;

    /// Fetch the `n` most recent records, requiring at least one
    ///
    /// # Errors
    ///
    /// Returns `ProviderUnavailable` if the source fails or yields no records
    fn fetch_recent(&self, n: usize) -> Result<Vec<RawRecord>> {
        let records = self.fetch_raw(n)?;
        if records.is_empty() {
            return Err(provider_unavailable(self.name(), &"no drawings returned"));
        }
        if records.len() < n {
            warn!(
                provider = self.name(),
                requested = n,
                returned = records.len(),
                "provider returned fewer drawings than requested"
            );
        }
        info!(provider = self.name(), count = records.len(), "fetched drawings");
        Ok(records)
    }
}

/// Keep the `n` newest records
///
/// ISO-8601 timestamps order lexicographically, so a string sort suffices.
fn newest_first(mut records: Vec<RawRecord>, n: usize) -> Vec<RawRecord> {
    records.sort_by(|a, b| b.draw_date.cmp(&a.draw_date));
    records.truncate(n);
    records
}

/// Records held in memory
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    records: Vec<RawRecord>,
}

impl StaticProvider {
    /// Wrap a set of records
    pub const fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl DrawingProvider for StaticProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    fn fetch_raw(&self, n: usize) -> Result<Vec<RawRecord>> {
        Ok(newest_first(self.records.clone(), n))
    }
}

/// JSON array of records on disk, in the Socrata export format
#[derive(Clone, Debug)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Read records from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and decode every record in the file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read or `Serialization` if
    /// it is not a JSON array of records
    pub fn load(&self) -> Result<Vec<RawRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            DrawError::FileSystem {
                path: self.path.clone(),
                operation: "read",
                source,
            }
        })?;
        serde_json::from_str(&content).map_err(|source| DrawError::Serialization {
            context: "historical drawings file",
            source,
        })
    }
}

impl DrawingProvider for JsonFileProvider {
    fn name(&self) -> &'static str {
        "json-file"
    }

    fn fetch_raw(&self, n: usize) -> Result<Vec<RawRecord>> {
        let records = self
            .load()
            .map_err(|e| provider_unavailable(self.name(), &e))?;
        Ok(newest_first(records, n))
    }
}

/// NY Open Data Powerball winning numbers over the Socrata API
#[derive(Clone, Debug)]
pub struct SocrataProvider {
    endpoint: String,
    app_token: Option<String>,
}

impl Default for SocrataProvider {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SocrataProvider {
    /// Client for the public endpoint, optionally authenticated with an app token
    pub fn new(app_token: Option<String>) -> Self {
        Self {
            endpoint: SOCRATA_ENDPOINT.to_string(),
            app_token,
        }
    }

    /// Point the client at a different resource URL, such as a mirror of the data set
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn request(&self, n: usize) -> reqwest::Result<Vec<RawRecord>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        let mut request = client.get(&self.endpoint).query(&[
            ("$limit", n.to_string()),
            ("$order", "draw_date DESC".to_string()),
        ]);
        if let Some(token) = &self.app_token {
            request = request.header(SOCRATA_TOKEN_HEADER, token);
        }
        request.send()?.error_for_status()?.json()
    }
}

impl DrawingProvider for SocrataProvider {
    fn name(&self) -> &'static str {
        "socrata"
    }

    fn fetch_raw(&self, n: usize) -> Result<Vec<RawRecord>> {
        self.request(n)
            .map_err(|e| provider_unavailable(self.name(), &e))
    }
}

impl<P: DrawingProvider + ?Sized> DrawingProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fetch_raw(&self, n: usize) -> Result<Vec<RawRecord>> {
        (**self).fetch_raw(n)
    }
}
