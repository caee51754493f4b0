use std::env;
use std::io::Write;

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use ring::hmac;

use crate::oauth::consts::*;
use crate::oauth::error::*;
use crate::oauth::token::AccessToken;
use crate::oauth::util::*;

/// Exchange application credentials for an app access token
/// (`grant_type=client_credentials`).
pub fn get_app_access_token(app_id: &str, app_secret: &str) -> Result<AccessToken, OauthError> {
  let query = build_query(&[
    ("client_id", app_id),
    ("client_secret", app_secret),
    ("grant_type", "client_credentials"),
  ]);

  let client = reqwest::blocking::Client::new();
  let res = client
    .get(format!("{}?{}", OAUTH_URL_ACCESS_TOKEN, query))
    .send()?;

  if res.status() == 200 {
    AccessToken::parse(&res.text()?)
  } else {
    Err(OauthError::InvalidRequest {
      problem: res.text()?,
    })
  }
}

/// Exchange an authorization code returned to `redirect_uri` for a user
/// access token.
pub fn get_user_access_token(
  app_id: &str,
  app_secret: &str,
  code: &str,
  redirect_uri: &str,
) -> Result<AccessToken, OauthError> {
  let query = build_query(&[
    ("client_id", app_id),
    ("client_secret", app_secret),
    ("redirect_uri", redirect_uri),
    ("code", code),
  ]);

  let client = reqwest::blocking::Client::new();
  let res = client
    .get(format!("{}?{}", OAUTH_URL_ACCESS_TOKEN, query))
    .send()?;

  if res.status() == 200 {
    AccessToken::parse(&res.text()?)
  } else {
    Err(OauthError::InvalidRequest {
      problem: res.text()?,
    })
  }
}

/// Build the login dialog URL a user must visit to grant `scopes`.
pub fn authorization_url(
  app_id: &str,
  redirect_uri: &str,
  scopes: &[Permission],
  state: &str,
) -> String {
  let scope = scopes
    .iter()
    .map(|scope| scope.to_string())
    .collect::<Vec<String>>()
    .join(",");
  let query = build_query(&[
    ("client_id", app_id),
    ("redirect_uri", redirect_uri),
    ("scope", &scope),
    ("state", state),
  ]);

  format!("{}?{}", OAUTH_URL_AUTHORIZE, query)
}

/// Random `state` value attached to the login dialog URL.
pub fn generate_state() -> String {
  thread_rng()
    .sample_iter(&Alphanumeric)
    .take(32)
    .map(char::from)
    .collect()
}

/// `appsecret_proof` parameter: lowercase-hex HMAC-SHA256 of the access
/// token, keyed by the application secret.
pub fn app_secret_proof(app_secret: &str, token: &str) -> String {
  let key = hmac::Key::new(hmac::HMAC_SHA256, app_secret.as_bytes());
  let tag = hmac::sign(&key, token.as_bytes());

  tag
    .as_ref()
    .iter()
    .map(|byte| format!("{:02x}", byte))
    .collect()
}

/// Open the login dialog in a browser and wait for the user to paste back
/// the authorization code shown on the redirect page.
pub fn grant_permission_browser(
  app_id: &str,
  redirect_uri: &str,
  scopes: &[Permission],
) -> Result<String, OauthError> {
  let state = generate_state();
  let url = authorization_url(app_id, redirect_uri, scopes, &state);
  if webbrowser::open(&url).is_err() {
    return Err(OauthError::PermissionDeniedUser);
  }

  let mut code = String::new();
  print!(
    "Input code printed on the browser (or, 'set {}=<code>' and Enter): ",
    ENV_OAUTH_CODE
  );
  std::io::stdout().flush().unwrap();
  std::io::stdin().read_line(&mut code).unwrap();

  if code.trim().is_empty() {
    if let Ok(val) = env::var(ENV_OAUTH_CODE) {
      Ok(val)
    } else {
      Err(OauthError::PermissionDeniedUser)
    }
  } else {
    Ok(code.trim().to_string())
  }
}
