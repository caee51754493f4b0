mod consts;
pub mod error;
pub mod graph;

use crate::graph::consts::*;
use crate::graph::error::GraphError;
use crate::graph::graph::*;
use crate::oauth::FacebookOauth;

use reqwest::blocking::Response;
use url::Url;

/// Graph API client instance
pub struct Graph {
  // OAuth manager client
  pub oauth: FacebookOauth,
}

impl Graph {
  /// Create a new Graph client instance
  ///
  /// # Arguments
  ///
  /// * `oauth` - OAuth client holding the application credentials
  pub fn new(oauth: FacebookOauth) -> Self {
    Self { oauth }
  }

  /// Fetch the user node behind the current access token.
  pub fn get_me(&mut self) -> Result<User, GraphError> {
    let url = self.object_url("me")?;
    let res = self
      .oauth
      .get(url.as_str(), &[("fields", "id,name,email")], false)?;

    if res.status().is_success() {
      Ok(res.json::<User>()?)
    } else {
      Err(Self::api_error(res))
    }
  }

  /// Fetch an arbitrary object as raw JSON.
  ///
  /// # Arguments
  ///
  /// * `id` - ID of the object to fetch
  /// * `fields` - Comma-separated field selection, if any
  pub fn get_object(
    &mut self,
    id: &str,
    fields: Option<&str>,
  ) -> Result<serde_json::Value, GraphError> {
    let url = self.object_url(id)?;
    let params = match fields {
      Some(fields) => vec![("fields", fields)],
      None => vec![],
    };
    let res = self.oauth.get(url.as_str(), &params, false)?;

    if res.status().is_success() {
      Ok(res.json::<serde_json::Value>()?)
    } else {
      Err(Self::api_error(res))
    }
  }

  /// List posts on the feed edge of an object.
  ///
  /// # Arguments
  ///
  /// * `id` - ID of the object whose feed to list
  pub fn get_feed(&mut self, id: &str) -> Result<Vec<Post>, GraphError> {
    let url = self.object_url(&format!("{}/feed", id))?;
    let res = self.oauth.get(url.as_str(), &[], false)?;

    if res.status().is_success() {
      Ok(res.json::<DataEnvelope<Post>>()?.data)
    } else {
      Err(Self::api_error(res))
    }
  }

  /// Publish a message to the feed of the current user.
  ///
  /// # Arguments
  ///
  /// * `message` - Message body to publish
  /// * `timeout` - Timeout in seconds
  pub fn post_feed(&mut self, message: &str, timeout: u64) -> Result<PostResponse, GraphError> {
    let url = self.object_url("me/feed")?;
    let res = self
      .oauth
      .post(url.as_str(), &[("message", message)], false, timeout)?;

    if res.status().is_success() {
      Ok(res.json::<PostResponse>()?)
    } else {
      Err(Self::api_error(res))
    }
  }

  fn object_url(&self, path: &str) -> Result<Url, GraphError> {
    Ok(Url::parse(GRAPH_URL_BASE)?.join(path)?)
  }

  fn api_error(res: Response) -> GraphError {
    let status = res.status();
    match res.json::<ErrorResponse>() {
      Ok(body) => GraphError::ApiFailure {
        message: body.error.message,
        code: body.error.code,
      },
      Err(_) => GraphError::HttpStatus { status },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::oauth::FacebookAppInfo;

  #[test]
  fn test_object_url() {
    let oauth = FacebookOauth::new(vec![], None, FacebookAppInfo::new("id", "secret"));
    let graph = Graph::new(oauth);
    assert_eq!(
      graph.object_url("me/feed").unwrap().as_str(),
      "https://graph.facebook.com/me/feed"
    );
    assert_eq!(
      graph.object_url("1234_5678").unwrap().as_str(),
      "https://graph.facebook.com/1234_5678"
    );
  }
}
