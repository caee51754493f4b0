use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// A user node of the Graph API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
  pub id: String,
  pub name: String,
  pub email: Option<String>,
}

/// A post on a feed edge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
  pub id: String,
  pub message: Option<String>,
  pub created_time: Option<String>,
}

impl Post {
  /// `created_time` parsed as a timestamp (`2012-04-23T18:25:43+0000`).
  pub fn created_time(&self) -> Option<DateTime<FixedOffset>> {
    self
      .created_time
      .as_ref()
      .and_then(|time| DateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S%z").ok())
  }
}

/// Response from the feed publish API.
#[derive(Debug, Clone, Deserialize)]
pub struct PostResponse {
  pub id: String, // ID of the published post
}

/// Envelope wrapping list responses.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
  pub data: Vec<T>,
}

/// Error body returned by the Graph API.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
  pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
  pub message: String,
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub code: Option<i64>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Timelike;

  #[test]
  fn test_deserialize_post() {
    let post: Post = serde_json::from_str(
      r#"{"id":"1234_5678","message":"hello","created_time":"2012-04-23T18:25:43+0000"}"#,
    )
    .unwrap();
    assert_eq!(post.id, "1234_5678");
    assert_eq!(post.message.as_deref(), Some("hello"));

    let time = post.created_time().unwrap();
    assert_eq!(time.hour(), 18);
    assert_eq!(time.timestamp(), 1335205543);
  }

  #[test]
  fn test_deserialize_feed_envelope() {
    let feed: DataEnvelope<Post> =
      serde_json::from_str(r#"{"data":[{"id":"1_1"},{"id":"1_2","message":"second"}]}"#).unwrap();
    assert_eq!(feed.data.len(), 2);
    assert_eq!(feed.data[1].message.as_deref(), Some("second"));
    assert_eq!(feed.data[0].created_time(), None);
  }

  #[test]
  fn test_deserialize_error_body() {
    let body: ErrorResponse = serde_json::from_str(
      r#"{"error":{"message":"Invalid OAuth access token.","type":"OAuthException","code":190}}"#,
    )
    .unwrap();
    assert_eq!(body.error.message, "Invalid OAuth access token.");
    assert_eq!(body.error.kind.as_deref(), Some("OAuthException"));
    assert_eq!(body.error.code, Some(190));
  }
}
