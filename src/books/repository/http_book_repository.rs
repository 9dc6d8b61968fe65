use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::books::domain::model::BookRecord;
use crate::books::dto::BookDraft;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// HttpBookRepository talks to a conventional JSON REST collection such as `/booksdata`.
#[derive(Debug)]
pub struct HttpBookRepository {
    client: Client,
    base_url: Url,
}

impl HttpBookRepository {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> LibraryResult<Self> {
        let parsed = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|err| LibraryError::configuration(
                format!("invalid remote store url {:?} {}", base_url, err).as_str()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LibraryError::configuration(
                format!("remote store url must use http or https, got {:?}", base_url).as_str()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| LibraryError::configuration(format!("failed to build http client {}", err).as_str()))?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub(crate) fn collection_url(&self) -> &str {
        self.base_url.as_str()
    }

    // The id is pushed as a single percent-encoded path segment.
    pub(crate) fn item_url(&self, id: &str) -> LibraryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LibraryError::configuration(
                format!("remote store url {} cannot take a path", self.base_url).as_str()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl Repository<BookRecord, BookDraft> for HttpBookRepository {
    async fn list(&self) -> LibraryResult<Vec<BookRecord>> {
        debug!("GET {}", self.collection_url());
        let res = self.client.get(self.collection_url()).send().await?;
        read_json(res).await
    }

    async fn create(&self, draft: &BookDraft) -> LibraryResult<BookRecord> {
        debug!("POST {}", self.collection_url());
        let res = self.client.post(self.collection_url()).json(draft).send().await?;
        read_json(res).await
    }

    async fn update(&self, id: &str, draft: &BookDraft) -> LibraryResult<BookRecord> {
        let url = self.item_url(id)?;
        debug!("PUT {}", url);
        let res = self.client.put(url).json(draft).send().await?;
        read_json(res).await
    }

    async fn delete(&self, id: &str) -> LibraryResult<()> {
        let url = self.item_url(id)?;
        debug!("DELETE {}", url);
        let res = self.client.delete(url).send().await?;
        check_status(res).await.map(|_| ())
    }
}

async fn check_status(res: Response) -> LibraryResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(LibraryError::from_status(body.as_str(), status.as_u16()))
}

async fn read_json<T: DeserializeOwned>(res: Response) -> LibraryResult<T> {
    let res = check_status(res).await?;
    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(LibraryError::from)
}
