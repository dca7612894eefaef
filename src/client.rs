use crate::errors::SyncError;
use crate::models::{Catalog, ErrorBody, MessageBody};
use reqwest::{Client, Response, Url};
use std::future::Future;
use tracing::debug;

/// The backend calls the synchronizer depends on.
pub trait ActivityApi: Send + Sync {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Catalog, SyncError>> + Send;

    /// Returns the server's confirmation message.
    fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<String, SyncError>> + Send;

    fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<(), SyncError>> + Send;
}

#[derive(Clone)]
pub struct HttpActivityApi {
    client: Client,
    base: Url,
}

impl HttpActivityApi {
    pub fn new(base_url: &str) -> Result<Self, SyncError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, SyncError> {
        let base = Url::parse(base_url).map_err(|err| SyncError::InvalidBaseUrl(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(SyncError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, base })
    }

    /// Joins `segments` onto the base path; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SyncError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| SyncError::InvalidBaseUrl(self.base.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    pub fn signup_url(&self, activity: &str, email: &str) -> Result<Url, SyncError> {
        let mut url = self.endpoint(&["activities", activity, "signup"])?;
        url.query_pairs_mut().append_pair("email", email);
        Ok(url)
    }

    pub fn participant_url(&self, activity: &str, email: &str) -> Result<Url, SyncError> {
        self.endpoint(&["activities", activity, "participants", email])
    }
}

/// Turns a non-2xx response into `Rejected`, reading `detail` if the body
/// happens to be the expected JSON.
pub async fn ensure_success(response: Response) -> Result<Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = match response.bytes().await {
        Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.detail),
        Err(err) => {
            debug!("failed to read error body: {err}");
            None
        }
    };
    Err(SyncError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

impl ActivityApi for HttpActivityApi {
    async fn fetch_catalog(&self) -> Result<Catalog, SyncError> {
        let url = self.endpoint(&["activities"])?;
        let response = ensure_success(self.client.get(url).send().await?).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| SyncError::Decode(err.to_string()))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, SyncError> {
        let url = self.signup_url(activity, email)?;
        let response = ensure_success(self.client.post(url).send().await?).await?;
        let bytes = response.bytes().await?;
        let body: MessageBody =
            serde_json::from_slice(&bytes).map_err(|err| SyncError::Decode(err.to_string()))?;
        Ok(body.message)
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), SyncError> {
        let url = self.participant_url(activity, email)?;
        ensure_success(self.client.delete(url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_url_encodes_name_and_email() {
        let api = HttpActivityApi::new("http://localhost:8080").unwrap();
        let url = api.signup_url("Chess Club", "a+b@c.com").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/activities/Chess%20Club/signup?email=a%2Bb%40c.com"
        );
    }

    #[test]
    fn participant_url_encodes_path_separators() {
        let api = HttpActivityApi::new("http://localhost:8080/api/").unwrap();
        let url = api.participant_url("Art/Design", "x y@z.com").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/activities/Art%2FDesign/participants/x%20y@z.com"
        );
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(matches!(
            HttpActivityApi::new("mailto:someone@example.com"),
            Err(SyncError::InvalidBaseUrl(_))
        ));
        assert!(HttpActivityApi::new("not a url").is_err());
    }
}
