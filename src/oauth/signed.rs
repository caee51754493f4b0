use crate::oauth::error::OauthError;

use ring::hmac;
use serde::Deserialize;

/// Decoded payload of a `signed_request` parameter.
///
/// Facebook sends it as `<base64url signature>.<base64url JSON payload>`,
/// signed with the application secret.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignedRequest {
  pub algorithm: String,
  pub code: Option<String>,
  pub oauth_token: Option<String>,
  pub expires: Option<i64>,
  pub issued_at: Option<i64>,
  pub user_id: Option<String>,
}

impl SignedRequest {
  /// Verify the signature with `app_secret` and decode the payload.
  pub fn parse(raw: &str, app_secret: &str) -> Result<Self, OauthError> {
    let mut parts = raw.splitn(2, '.');
    let (signature, payload) = match (parts.next(), parts.next()) {
      (Some(signature), Some(payload)) => (signature, payload),
      _ => {
        return Err(OauthError::InvalidSignedRequest {
          reason: "missing signature separator".into(),
        })
      }
    };

    let signature = base64::decode_config(signature, base64::URL_SAFE_NO_PAD).map_err(|_| {
      OauthError::InvalidSignedRequest {
        reason: "signature is not base64url".into(),
      }
    })?;

    let key = hmac::Key::new(hmac::HMAC_SHA256, app_secret.as_bytes());
    hmac::verify(&key, payload.as_bytes(), &signature).map_err(|_| {
      OauthError::InvalidSignedRequest {
        reason: "signature mismatch".into(),
      }
    })?;

    let payload = base64::decode_config(payload, base64::URL_SAFE_NO_PAD).map_err(|_| {
      OauthError::InvalidSignedRequest {
        reason: "payload is not base64url".into(),
      }
    })?;
    let request: SignedRequest =
      serde_json::from_slice(&payload).map_err(|_| OauthError::InvalidSignedRequest {
        reason: "payload is not JSON".into(),
      })?;

    if !request.algorithm.eq_ignore_ascii_case("HMAC-SHA256") {
      return Err(OauthError::InvalidSignedRequest {
        reason: format!("unsupported algorithm {}", request.algorithm),
      });
    }

    Ok(request)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sign(payload: &str, secret: &str) -> String {
    let encoded = base64::encode_config(payload, base64::URL_SAFE_NO_PAD);
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
    let tag = hmac::sign(&key, encoded.as_bytes());
    format!(
      "{}.{}",
      base64::encode_config(tag.as_ref(), base64::URL_SAFE_NO_PAD),
      encoded
    )
  }

  #[test]
  fn test_parse() {
    let payload = r#"{"algorithm":"HMAC-SHA256","user_id":"1234","issued_at":1254459601,"oauth_token":"opaque"}"#;
    let raw = sign(payload, "1583dbbc75108bfa1bf65d3e");

    let request = SignedRequest::parse(&raw, "1583dbbc75108bfa1bf65d3e").unwrap();
    assert_eq!(request.algorithm, "HMAC-SHA256");
    assert_eq!(request.user_id.as_deref(), Some("1234"));
    assert_eq!(request.issued_at, Some(1254459601));
    assert_eq!(request.oauth_token.as_deref(), Some("opaque"));
    assert_eq!(request.code, None);
  }

  #[test]
  fn test_parse_wrong_secret() {
    let payload = r#"{"algorithm":"HMAC-SHA256","user_id":"1234"}"#;
    let raw = sign(payload, "1583dbbc75108bfa1bf65d3e");

    assert!(SignedRequest::parse(&raw, "another-secret").is_err());
  }

  #[test]
  fn test_parse_unsupported_algorithm() {
    let payload = r#"{"algorithm":"MD5","user_id":"1234"}"#;
    let raw = sign(payload, "1583dbbc75108bfa1bf65d3e");

    assert!(SignedRequest::parse(&raw, "1583dbbc75108bfa1bf65d3e").is_err());
  }

  #[test]
  fn test_parse_garbage() {
    assert!(SignedRequest::parse("no-separator", "secret").is_err());
    assert!(SignedRequest::parse("!!!.!!!", "secret").is_err());
  }
}
