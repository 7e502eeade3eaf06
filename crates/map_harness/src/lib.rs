//! Route map feed harness.
//!
//! Fetches the airline's route map document and turns it into [`CityIR`]
//! records. The document is a `list` of `city` elements:
//!
//! ```xml
//! <list>
//!   <city>
//!     <name>Gdansk</name>
//!     <iata>GDN</iata>
//!     <connected>
//!       <city><iata>LTN</iata></city>
//!     </connected>
//!   </city>
//! </list>
//! ```

use protocol::CityIR;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_FEED_URL: &str = "https://cdn.static.wizzair.com/en-GB/Map.ashx";

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("feed {url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read feed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed route map document: {0}")]
    Parse(#[from] quick_xml::DeError),
}

/// Where the route map document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl FeedSource {
    /// `http://` and `https://` sources are fetched, anything else is a path.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            FeedSource::Url(source.to_string())
        } else {
            FeedSource::File(PathBuf::from(source))
        }
    }
}

impl Default for FeedSource {
    fn default() -> Self {
        FeedSource::Url(DEFAULT_FEED_URL.to_string())
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Url(url) => f.write_str(url),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MapDocument {
    #[serde(rename = "city", default)]
    cities: Vec<CityElement>,
}

#[derive(Debug, Deserialize)]
struct CityElement {
    #[serde(default)]
    name: String,
    #[serde(default)]
    iata: String,
    #[serde(default)]
    connected: ConnectedElement,
}

#[derive(Debug, Default, Deserialize)]
struct ConnectedElement {
    #[serde(rename = "city", default)]
    cities: Vec<ConnectedCity>,
}

#[derive(Debug, Deserialize)]
struct ConnectedCity {
    #[serde(default)]
    iata: String,
}

impl From<CityElement> for CityIR {
    fn from(element: CityElement) -> Self {
        CityIR {
            id: element.iata.trim().to_string(),
            label: element.name.trim().to_string(),
            neighbors: element
                .connected
                .cities
                .into_iter()
                .map(|c| c.iata.trim().to_string())
                .collect(),
        }
    }
}

pub struct MapHarness {
    client: Client,
}

impl MapHarness {
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetch and parse the route map.
    pub async fn load(&self, source: &FeedSource) -> Result<Vec<CityIR>, FeedError> {
        let content = self.fetch(source).await?;
        let cities = self.parse_document(&content)?;
        info!("Loaded {} cities from {}", cities.len(), source);
        Ok(cities)
    }

    pub async fn fetch(&self, source: &FeedSource) -> Result<String, FeedError> {
        match source {
            FeedSource::Url(url) => {
                debug!("Fetching route map from {}", url);
                let resp = self.client.get(url).send().await?;

                let status = resp.status();
                if !status.is_success() {
                    return Err(FeedError::Status {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }

                Ok(resp.text().await?)
            }
            FeedSource::File(path) => {
                debug!("Reading route map from {:?}", path);
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| FeedError::Io {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }

    /// Extract one record per top-level `city` element, in document order.
    pub fn parse_document(&self, content: &str) -> Result<Vec<CityIR>, FeedError> {
        let document: MapDocument = quick_xml::de::from_str(content)?;
        Ok(document.cities.into_iter().map(CityIR::from).collect())
    }
}

mod test_fixtures;
