use reqwest::StatusCode;
use thiserror::Error;

use crate::oauth::error::OauthError;

#[derive(Debug, Error)]
pub enum GraphError {
  #[error("request failed")]
  RequestFailure(#[from] OauthError),

  #[error("request failed")]
  HttpFailure(#[from] reqwest::Error),

  #[error("invalid Graph URL")]
  InvalidUrl(#[from] url::ParseError),

  #[error("Graph API error (code={code:?}): {message:?}")]
  ApiFailure { message: String, code: Option<i64> },

  #[error("request rejected (status={status:?})")]
  HttpStatus { status: StatusCode },
}
