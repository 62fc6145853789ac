use serde::de::DeserializeOwned;

pub(crate) mod google_books;

/// The seam between the lookup controller and the remote bibliographic service.
///
/// Implemented for [`reqwest::Client`]; tests swap in a mock that never touches the network.
#[allow(async_fn_in_trait)]
pub trait Client
where
    Self: Default,
{
    /// Issue a `GET` request to `url` and deserialize the JSON body.
    ///
    /// # Errors
    ///
    /// An [`Err`] of kind [`ErrorKind::IO`] when no response was received.
    /// An [`Err`] of kind [`ErrorKind::Http`] when the response status is not a success.
    /// An [`Err`] of kind [`ErrorKind::Deserialize`] when the body is not the expected JSON.
    async fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::Client {
    async fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .get(url)
            .send()
            .await
            .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::status(status.as_u16()));
        }

        resp.json()
            .await
            .map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, MockClient, NetworkErrorProducer, Producer, URL_SINK,
};

use crate::{Error, ErrorKind};
