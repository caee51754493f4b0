use thiserror::Error;

#[derive(Debug, Error)]
pub enum OauthError {
  #[error("request failed")]
  RequestFailure(#[from] reqwest::Error),

  #[error("invalid request ({problem:?})")]
  InvalidRequest { problem: String },

  #[error("invalid response format: {response:?}")]
  InvalidResponse { response: String },

  #[error("FACEBOOK_APP_ID or FACEBOOK_APP_SECRET is not set")]
  InsufficientSecret,

  #[error("access token is not acquired yet")]
  MissingAccessToken,

  #[error("invalid signed request: {reason:?}")]
  InvalidSignedRequest { reason: String },

  #[error("permission denied by yourself")]
  PermissionDeniedUser,
}
