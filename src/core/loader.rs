use crate::domain::catalog::filter_featured;
use crate::domain::model::{Banner, Collection, CollectionEnvelope, HomepageData, Shortcut};
use crate::domain::ports::FetchFailurePolicy;
use crate::utils::error::{HomeError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Banners,
    Shortcuts,
    Collections,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Banners => "main-banner/all",
            Endpoint::Shortcuts => "main-shortcut/all",
            Endpoint::Collections => "collections?prearrangedDiscount",
        }
    }

    /// 接在 base URL 後面；base URL 若帶路徑也會保留
    pub fn url(self, base_url: &str) -> Result<Url> {
        let mut base = Url::parse(base_url).map_err(|e| HomeError::InvalidConfigValueError {
            field: "api_base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join(self.path())
            .map_err(|e| HomeError::ConfigError {
                message: format!("Cannot build {} endpoint: {}", self, e),
            })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Banners => write!(f, "banners"),
            Endpoint::Shortcuts => write!(f, "shortcuts"),
            Endpoint::Collections => write!(f, "collections"),
        }
    }
}

/// 同時抓取首頁三種資源；各資源互不依賴
#[derive(Debug, Clone)]
pub struct HomepageLoader {
    client: Client,
    base_url: String,
    policy: FetchFailurePolicy,
}

impl HomepageLoader {
    pub fn new(base_url: impl Into<String>, policy: FetchFailurePolicy) -> Self {
        Self::with_client(Client::new(), base_url, policy)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, policy: FetchFailurePolicy) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            policy,
        }
    }

    pub async fn load_all(&self) -> Result<HomepageData> {
        let (banners, shortcuts, collections) = tokio::join!(
            self.fetch_banners(),
            self.fetch_shortcuts(),
            self.fetch_collections()
        );

        Ok(HomepageData {
            banners: self.settle(Endpoint::Banners, banners)?,
            shortcuts: self.settle(Endpoint::Shortcuts, shortcuts)?,
            collections: self.settle(Endpoint::Collections, collections)?,
        })
    }

    pub async fn fetch_banners(&self) -> Result<Vec<Banner>> {
        self.fetch_json(Endpoint::Banners).await
    }

    pub async fn fetch_shortcuts(&self) -> Result<Vec<Shortcut>> {
        self.fetch_json(Endpoint::Shortcuts).await
    }

    pub async fn fetch_collections(&self) -> Result<Vec<Collection>> {
        let envelope: CollectionEnvelope = self.fetch_json(Endpoint::Collections).await?;
        let total = envelope.items.len();
        let featured = filter_featured(envelope.items)?;
        tracing::debug!(
            "Kept {} of {} collections after SINGLE/TILE filter",
            featured.len(),
            total
        );
        Ok(featured)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let url = endpoint.url(&self.base_url)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!("API response status for {}: {}", endpoint, status);

        if !status.is_success() {
            return Err(HomeError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // 先取 bytes 再解析，才能區分網路錯誤與資料格式錯誤
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| HomeError::MalformedDataError {
            resource: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    /// 依失敗策略決定：空資料槽或回傳錯誤
    fn settle<T>(&self, endpoint: Endpoint, result: Result<Vec<T>>) -> Result<Vec<T>> {
        match result {
            Ok(items) => {
                tracing::info!("📥 Loaded {} {}", items.len(), endpoint);
                Ok(items)
            }
            Err(e) => match self.policy {
                FetchFailurePolicy::Empty => {
                    tracing::warn!("⚠️ Failed to load {}, leaving section empty: {}", endpoint, e);
                    Ok(Vec::new())
                }
                FetchFailurePolicy::Fail => Err(e),
            },
        }
    }
}
