//! Content API source.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use super::{content_from_payload, DocumentSource};
use crate::error::{Error, Result};
use crate::model::{
    DocumentKey, DocumentMetadata, DocumentOrigin, DocumentType, Language, LocalizedDocument,
};
use crate::session::{CurrentUser, SessionSource};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Documents served by the content API.
///
/// `GET {base}/content/{doc_type}?lang={lang}` answers
/// `{"content": {...}}`; a 404 or empty envelope means no document.
/// Credentials are whatever the supplied client carries.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    /// Create a source for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a source using a preconfigured client.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// API base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a document.
    pub fn content_url(&self, doc_type: &DocumentType) -> String {
        format!("{}/content/{}", self.base_url, doc_type)
    }

    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Option<Value>> {
        let response = self.client.get(url).query(query).send()?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(Some(response.json()?))
    }
}

impl DocumentSource for HttpSource {
    fn name(&self) -> &str {
        "api"
    }

    fn fetch(
        &self,
        doc_type: &DocumentType,
        language: Language,
    ) -> Result<Option<LocalizedDocument>> {
        let url = self.content_url(doc_type);
        log::debug!("GET {} lang={}", url, language);

        let Some(payload) = self.get_json(&url, &[("lang", language.code())])? else {
            return Ok(None);
        };

        let key = DocumentKey::new(doc_type.clone(), language);
        Ok(content_from_payload(payload).map(|content| {
            LocalizedDocument::new(key, content)
                .with_metadata(DocumentMetadata::fetched_now(DocumentOrigin::Api))
        }))
    }
}

impl SessionSource for HttpSource {
    fn current_user(&self) -> Result<CurrentUser> {
        let url = format!("{}/auth/me", self.base_url);
        let payload = self.get_json(&url, &[])?.ok_or(Error::Http {
            status: StatusCode::NOT_FOUND.as_u16(),
            url,
        })?;
        Ok(serde_json::from_value(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let source = HttpSource::with_client("https://api.example.com/", Client::new());
        assert_eq!(source.base_url(), "https://api.example.com");
        assert_eq!(
            source.content_url(&DocumentType::cookie_policy()),
            "https://api.example.com/content/cookie-policy"
        );
    }
}
