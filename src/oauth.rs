pub mod consts;
pub mod error;
mod oauth;
pub mod signed;
pub mod token;
pub mod util;

use std::env;
use std::time::Duration;

use crate::oauth::consts::*;
use crate::oauth::error::*;
use crate::oauth::oauth::*;
use crate::oauth::token::AccessToken;
use crate::oauth::util::*;

use reqwest::blocking::Response;

/// Application credentials issued for a registered Facebook app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacebookAppInfo {
  /// Application ID
  pub app_id: String,
  /// Application secret
  pub app_secret: String,
}

impl FacebookAppInfo {
  pub fn new(app_id: &str, app_secret: &str) -> Self {
    Self {
      app_id: app_id.to_string(),
      app_secret: app_secret.to_string(),
    }
  }

  /// Read credentials from environment variables. If not exist, it returns
  /// `InsufficientSecret` error.
  pub fn from_env() -> Result<Self, OauthError> {
    let app_id = env::var(ENV_APP_ID).map_err(|_| OauthError::InsufficientSecret)?;
    let app_secret = env::var(ENV_APP_SECRET).map_err(|_| OauthError::InsufficientSecret)?;

    Ok(Self { app_id, app_secret })
  }
}

/// OAuth client instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacebookOauth {
  /// Application credentials
  app_info: FacebookAppInfo,
  /// Permissions requested when building the login dialog URL
  scopes: Vec<Permission>,
  /// Cache of the acquired access token
  access_token: Option<AccessToken>,
}

impl FacebookOauth {
  /// Create a new OAuth client instance.
  ///
  /// If `access_token` is not given, it falls back to a token cached in the
  /// environment if exist.
  ///
  /// # Arguments
  ///
  /// * `scopes` - Permissions to be requested through the login dialog
  /// * `access_token` - Already acquired access token, if any
  /// * `app_info` - Application credentials
  pub fn new(
    scopes: Vec<Permission>,
    access_token: Option<AccessToken>,
    app_info: FacebookAppInfo,
  ) -> Self {
    let access_token = access_token.or_else(access_token_from_env);

    Self {
      app_info,
      scopes,
      access_token,
    }
  }

  /// Get an application access token via the client-credentials grant.
  ///
  /// # Arguments
  ///
  /// * `force` - If true, it requests a new token even if one is already cached
  pub fn get_app_access_token(&mut self, force: bool) -> Result<AccessToken, OauthError> {
    // Use cached access token if exists
    if !force && self.access_token.is_some() {
      return Ok(self.access_token.clone().unwrap());
    }

    let token = get_app_access_token(&self.app_info.app_id, &self.app_info.app_secret)?;
    self.access_token = Some(token.clone());

    Ok(token)
  }

  /// Exchange an authorization code for a user access token.
  ///
  /// # Arguments
  ///
  /// * `code` - Authorization code returned to the redirect URI
  /// * `redirect_uri` - Redirect URI the code was issued for
  pub fn get_user_access_token(
    &mut self,
    code: &str,
    redirect_uri: &str,
  ) -> Result<AccessToken, OauthError> {
    let token = get_user_access_token(
      &self.app_info.app_id,
      &self.app_info.app_secret,
      code,
      redirect_uri,
    )?;
    self.access_token = Some(token.clone());

    Ok(token)
  }

  /// Get a user access token for pre-defined scopes.
  ///
  /// This function would open a browser and wait for a user to grant a
  /// permission, then exchanges the pasted authorization code.
  ///
  /// # Arguments
  ///
  /// * `redirect_uri` - Redirect URI registered for the app
  pub fn grant_permission(&mut self, redirect_uri: &str) -> Result<AccessToken, OauthError> {
    let code = grant_permission_browser(&self.app_info.app_id, redirect_uri, &self.scopes)?;
    self.get_user_access_token(&code, redirect_uri)
  }

  /// Login dialog URL for the configured scopes, with a fresh random `state`.
  ///
  /// Returns the URL and the `state` value the caller must check on redirect.
  pub fn authorization_url(&self, redirect_uri: &str) -> (String, String) {
    let state = generate_state();
    let url = authorization_url(&self.app_info.app_id, redirect_uri, &self.scopes, &state);

    (url, state)
  }

  /// Currently cached access token.
  pub fn access_token(&self) -> Result<&AccessToken, OauthError> {
    self
      .access_token
      .as_ref()
      .ok_or(OauthError::MissingAccessToken)
  }

  /// Send GET request with the access token and `appsecret_proof` attached.
  ///
  /// If access token is not cached, it first fetches an app access token.
  ///
  /// # Arguments
  ///
  /// * `url` - URL to send GET request
  /// * `params` - Extra query parameters
  /// * `force` - If true, it fetches access token even if it is cached
  pub fn get(
    &mut self,
    url: &str,
    params: &[(&str, &str)],
    force: bool,
  ) -> Result<Response, OauthError> {
    if force || self.access_token.is_none() {
      self.get_app_access_token(true)?;
    }

    let query = self.signed_query(params);
    let client = reqwest::blocking::Client::new();
    let response = client.get(format!("{}?{}", url, query)).send()?;

    Ok(response)
  }

  /// Send POST request with the access token and `appsecret_proof` attached.
  ///
  /// If access token is not cached, it first fetches an app access token.
  ///
  /// # Arguments
  ///
  /// * `url` - URL to send POST request
  /// * `params` - Form parameters to send
  /// * `force` - If true, it fetches access token even if it is cached
  /// * `timeout` - Timeout in seconds
  pub fn post(
    &mut self,
    url: &str,
    params: &[(&str, &str)],
    force: bool,
    timeout: u64,
  ) -> Result<Response, OauthError> {
    if force || self.access_token.is_none() {
      self.get_app_access_token(true)?;
    }

    let body = self.signed_query(params);
    let client = reqwest::blocking::Client::builder()
      .timeout(Duration::from_secs(timeout))
      .build()?;
    let response = client
      .post(url)
      .header(
        reqwest::header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
      )
      .body(body)
      .send()?;

    Ok(response)
  }

  fn signed_query(&self, params: &[(&str, &str)]) -> String {
    let token = self.access_token.as_ref().unwrap().token().to_string();
    let proof = app_secret_proof(&self.app_info.app_secret, &token);

    let mut pairs: Vec<(&str, &str)> = params.to_vec();
    pairs.push(("access_token", token.as_str()));
    pairs.push(("appsecret_proof", proof.as_str()));

    build_query(&pairs)
  }
}

fn access_token_from_env() -> Option<AccessToken> {
  let token = env::var(ENV_ACCESS_TOKEN).unwrap_or("".into());

  if token.is_empty() {
    None
  } else {
    Some(AccessToken::new(&token))
  }
}
