use anyhow::Result;

use facebook_rs::oauth::{FacebookAppInfo, FacebookOauth};

fn main() -> Result<()> {
  let app_info = FacebookAppInfo::from_env()?;
  let mut oauth = FacebookOauth::new(vec![], None, app_info);

  let token = oauth.get_app_access_token(false)?;
  println!("access token: {}", token.token());
  if let Some(expires) = token.expires() {
    println!("expires: {}", expires);
  }

  Ok(())
}
