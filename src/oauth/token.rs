use std::collections::HashMap;

use crate::oauth::error::OauthError;

use percent_encoding::percent_decode;

/// Access token returned from the token endpoint.
///
/// `expires` is kept only when the endpoint reported one; application tokens
/// obtained through the client-credentials grant usually have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
  token: String,
  expires: Option<i64>,
}

impl AccessToken {
  /// Wrap a bare token string. Expiry is left unset.
  pub fn new(token: &str) -> Self {
    Self {
      token: token.to_string(),
      expires: None,
    }
  }

  /// Construct from a token string and a known expiry, stored verbatim.
  pub fn with_expires(token: &str, expires: i64) -> Self {
    Self {
      token: token.to_string(),
      expires: Some(expires),
    }
  }

  /// Parse a token-endpoint response body, or any other
  /// `access_token=...&expires=...` query string.
  ///
  /// A string carrying no `access_token` pair is taken as a bare token.
  /// `expires` is set only when present and parsable as an integer.
  pub fn parse(response: &str) -> Result<Self, OauthError> {
    if !response.contains("access_token=") {
      return Ok(Self::new(response));
    }

    let mut map: HashMap<&str, String> = HashMap::new();
    for pair in response.split('&') {
      let mut parts = pair.splitn(2, '=');
      let key = parts.next();
      let value = parts.next();
      if key.is_none() || value.is_none() {
        return Err(OauthError::InvalidResponse {
          response: response.to_string(),
        });
      }
      map.insert(
        key.unwrap(),
        percent_decode(value.unwrap().as_bytes())
          .decode_utf8_lossy()
          .to_string(),
      );
    }

    let token = map
      .get("access_token")
      .filter(|token| !token.is_empty())
      .ok_or(OauthError::InvalidResponse {
        response: response.to_string(),
      })?;
    let expires = map.get("expires").and_then(|expires| expires.parse().ok());

    Ok(Self {
      token: token.to_string(),
      expires,
    })
  }

  pub fn token(&self) -> &str {
    &self.token
  }

  pub fn expires(&self) -> Option<i64> {
    self.expires
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_query_string() {
    let at =
      AccessToken::parse("access_token=6377362-kW0YV1ymaqEUCSHP29ux169mDeA4kQfhEuqkdvHk&expires=123456789012345")
        .unwrap();
    assert_eq!(at.token(), "6377362-kW0YV1ymaqEUCSHP29ux169mDeA4kQfhEuqkdvHk");
    assert_eq!(at.expires(), Some(123456789012345));
  }

  #[test]
  fn test_parse_without_expires() {
    let at = AccessToken::parse("access_token=6377362-kW0YV1ymaqEUCSHP29ux169mDeA4kQfhEuqkdvHk").unwrap();
    assert_eq!(at.token(), "6377362-kW0YV1ymaqEUCSHP29ux169mDeA4kQfhEuqkdvHk");
    assert_eq!(at.expires(), None);
  }

  #[test]
  fn test_parse_decodes_value() {
    let at = AccessToken::parse("access_token=179146315107%7C8PnNrfpQ&expires=5184000").unwrap();
    assert_eq!(at.token(), "179146315107|8PnNrfpQ");
    assert_eq!(at.expires(), Some(5184000));
  }

  #[test]
  fn test_parse_unparsable_expires() {
    let at = AccessToken::parse("access_token=abc&expires=soon").unwrap();
    assert_eq!(at.expires(), None);
  }

  #[test]
  fn test_parse_bare_token() {
    let at = AccessToken::parse("6377362-kW0YV1ymaqEUCSHP29ux169mDeA4kQfhEuqkdvHk").unwrap();
    assert_eq!(at.token(), "6377362-kW0YV1ymaqEUCSHP29ux169mDeA4kQfhEuqkdvHk");
    assert_eq!(at.expires(), None);
  }

  #[test]
  fn test_parse_empty_token() {
    assert!(AccessToken::parse("access_token=&expires=5184000").is_err());
  }

  #[test]
  fn test_explicit_constructors() {
    let at = AccessToken::with_expires("6377362-kW0YV1ymaqEUCSHP29ux169mDeA4kQfhEuqkdvHk", 123456789012345);
    assert_eq!(at.token(), "6377362-kW0YV1ymaqEUCSHP29ux169mDeA4kQfhEuqkdvHk");
    assert_eq!(at.expires(), Some(123456789012345));

    let at = AccessToken::new("6377362-kW0YV1ymaqEUCSHP29ux169mDeA4kQfhEuqkdvHk");
    assert_eq!(at.token(), "6377362-kW0YV1ymaqEUCSHP29ux169mDeA4kQfhEuqkdvHk");
    assert_eq!(at.expires(), None);
  }

  #[test]
  fn test_value_equality() {
    let lhs = AccessToken::with_expires("abc", 42);
    let rhs = AccessToken::with_expires("abc", 42);
    assert_eq!(lhs, rhs);
    assert_ne!(lhs, AccessToken::new("abc"));
  }
}
