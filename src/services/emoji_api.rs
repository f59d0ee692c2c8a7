use indexmap::IndexMap;
use serde::Deserialize;

use crate::utils::emoji_reference::{emoji_cdn_url, ImageFormat};

/// Raw catalog as served by the API: category -> name -> raw markup
///
/// Category values stay untyped so that a single malformed category or entry
/// does not reject the whole response.
pub type RawCatalog = IndexMap<String, serde_json::Value>;

/// Response envelope from the emoji API
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    data: Option<RawCatalog>,
}

/// A single emoji in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiEntry {
    /// Synthetic key, `"{category}.{name}"`
    pub key: String,
    pub name: String,
    /// CDN image URL derived from the markup's emoji ID
    pub url: String,
    /// Original markup, e.g. `<:smile:123>`
    pub markup: String,
}

/// Emoji grouped under one category label, in API order
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiCategory {
    pub name: String,
    pub entries: IndexMap<String, EmojiEntry>,
}

impl EmojiCategory {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Categorized emoji lookup, built once per page load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmojiCatalog {
    categories: IndexMap<String, EmojiCategory>,
}

impl EmojiCatalog {
    /// True when no category holds any entry
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(EmojiCategory::is_empty)
    }

    /// Total number of entries across all categories
    pub fn len(&self) -> usize {
        self.categories.values().map(EmojiCategory::len).sum()
    }

    pub fn categories(&self) -> impl Iterator<Item = &EmojiCategory> {
        self.categories.values()
    }

    /// Categories that hold at least one entry, in API order
    pub fn visible_categories(&self) -> impl Iterator<Item = &EmojiCategory> {
        self.categories().filter(|category| !category.is_empty())
    }

    #[cfg(test)]
    pub fn category(&self, name: &str) -> Option<&EmojiCategory> {
        self.categories.get(name)
    }

    /// Look up an entry by synthetic key
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&EmojiEntry> {
        self.categories
            .values()
            .find_map(|category| category.entries.get(key))
    }
}

/// Error type for catalog retrieval
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Request(String),
    Status(u16),
    Parse(String),
    MissingData,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CatalogError::Request(e) => write!(f, "Catalog request failed: {}", e),
            CatalogError::Status(code) => write!(f, "Catalog request returned HTTP {}", code),
            CatalogError::Parse(e) => write!(f, "Failed to parse catalog: {}", e),
            CatalogError::MissingData => write!(f, "Catalog response has no data field"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Fetch the emoji catalog, collapsing every failure into `None`
///
/// Callers render an empty catalog when this returns `None`; there is no
/// retry.
pub async fn fetch_catalog(url: &str) -> Option<EmojiCatalog> {
    settle_catalog(try_fetch_catalog(url).await)
}

/// Log the outcome of a catalog fetch and drop the error
fn settle_catalog(result: Result<EmojiCatalog, CatalogError>) -> Option<EmojiCatalog> {
    match result {
        Ok(catalog) => {
            if catalog.is_empty() {
                log::warn!("Emoji catalog loaded but contains no emojis");
            } else {
                log::info!("Loaded {} emojis from catalog", catalog.len());
            }
            Some(catalog)
        }
        Err(e) => {
            log::error!("Failed to load emoji catalog: {}", e);
            None
        }
    }
}

/// Fetch and parse the emoji catalog
pub async fn try_fetch_catalog(url: &str) -> Result<EmojiCatalog, CatalogError> {
    log::info!("Fetching emoji catalog from {}", url);

    #[cfg(target_arch = "wasm32")]
    let body = fetch_body_wasm(url).await?;

    #[cfg(not(target_arch = "wasm32"))]
    let body = fetch_body_native(url).await?;

    parse_catalog_response(&body)
}

/// Fetch the response body using gloo-net (WASM)
#[cfg(target_arch = "wasm32")]
async fn fetch_body_wasm(url: &str) -> Result<String, CatalogError> {
    use gloo_net::http::Request;

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))
}

/// Fetch the response body using reqwest (native)
#[cfg(not(target_arch = "wasm32"))]
async fn fetch_body_native(url: &str) -> Result<String, CatalogError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(CatalogError::Status(response.status().as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))
}

/// Parse a catalog response body
pub fn parse_catalog_response(body: &str) -> Result<EmojiCatalog, CatalogError> {
    let response: CatalogResponse =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let raw = response.data.ok_or(CatalogError::MissingData)?;
    Ok(build_catalog(raw))
}

/// Reshape the raw API mapping into the keyed catalog
///
/// Categories that are not objects are dropped. So are entries whose markup
/// has no emoji ID or whose value is not a string.
pub fn build_catalog(raw: RawCatalog) -> EmojiCatalog {
    let mut categories = IndexMap::with_capacity(raw.len());

    for (category, value) in raw {
        let serde_json::Value::Object(emojis) = value else {
            log::warn!("Skipping category {}: not an object", category);
            continue;
        };

        let mut entries = IndexMap::with_capacity(emojis.len());

        for (name, value) in emojis {
            let Some(markup) = value.as_str() else {
                log::warn!("Skipping {}.{}: markup is not a string", category, name);
                continue;
            };

            let Some(id) = markup_emoji_id(markup) else {
                log::warn!("Skipping {}.{}: no emoji ID in {:?}", category, name, markup);
                continue;
            };

            let key = format!("{}.{}", category, name);
            entries.insert(
                key.clone(),
                EmojiEntry {
                    key,
                    name,
                    url: emoji_cdn_url(&id, ImageFormat::Png),
                    markup: markup.to_string(),
                },
            );
        }

        categories.insert(
            category.clone(),
            EmojiCategory {
                name: category,
                entries,
            },
        );
    }

    EmojiCatalog { categories }
}

/// Extract the emoji ID from markup like `<:name:123>` or `<a:name:123>`
///
/// The ID is the third colon-separated segment with the closing `>` and any
/// spaces removed.
pub fn markup_emoji_id(markup: &str) -> Option<String> {
    let segment = markup.split(':').nth(2)?;
    let id: String = segment
        .replacen('>', "", 1)
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
