use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, error, info};
use url::Url;
use userdeck_types::User;

use crate::{FetchError, UserSource};

/// Fetches users from the random user HTTP endpoint.
#[derive(Debug, Clone)]
pub struct RemoteUserSource {
    http_client: HttpClient,
    endpoint: Url,
}

impl RemoteUserSource {
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint)?;
        let http_client = HttpClient::builder()
            .user_agent(concat!("userdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The request URL for `count` users, with `size` replacing any existing value.
    pub fn request_url(&self, count: u32) -> Url {
        let mut url = self.endpoint.clone();
        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "size")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair("size", &count.to_string());
        url
    }

    async fn fetch(&self, count: u32) -> Result<Vec<User>, FetchError> {
        let url = self.request_url(count);
        debug!(%url, "Fetching users");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let mut users: Vec<User> = serde_json::from_slice(&body)?;
        if users.len() > count as usize {
            debug!(received = users.len(), count, "Server ignored size, truncating");
            users.truncate(count as usize);
        }
        Ok(users)
    }
}

#[async_trait]
impl UserSource for RemoteUserSource {
    async fn fetch_users(&self, count: u32) -> Result<Vec<User>, FetchError> {
        match self.fetch(count).await {
            Ok(users) => {
                info!(requested = count, received = users.len(), "Fetched users");
                Ok(users)
            }
            Err(e) => {
                error!("Error fetching users: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_sets_size() {
        let source = RemoteUserSource::new("https://random-data-api.com/api/users/random_user").unwrap();
        assert_eq!(
            source.request_url(80).as_str(),
            "https://random-data-api.com/api/users/random_user?size=80"
        );
    }

    #[test]
    fn test_request_url_replaces_existing_size() {
        let source = RemoteUserSource::new("http://localhost:9000/users?size=5&locale=en").unwrap();
        assert_eq!(
            source.request_url(3).as_str(),
            "http://localhost:9000/users?locale=en&size=3"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = RemoteUserSource::new("not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidEndpoint(_)));
    }
}
