use std::fmt;

use percent_encoding::AsciiSet;

/// Characters escaped when serializing OAuth request parameters.
/// Everything outside ALPHA / DIGIT / `-` / `.` / `_` / `~` is encoded.
pub static PARAM_ENCODE_SET: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'.')
  .remove(b'_')
  .remove(b'~');

pub const ENV_APP_ID: &str = "FACEBOOK_APP_ID";
pub const ENV_APP_SECRET: &str = "FACEBOOK_APP_SECRET";
pub const ENV_ACCESS_TOKEN: &str = "FACEBOOK_ACCESS_TOKEN";
pub const ENV_OAUTH_CODE: &str = "FACEBOOK_OAUTH_CODE";

pub const OAUTH_URL_ACCESS_TOKEN: &str = "https://graph.facebook.com/oauth/access_token";
pub const OAUTH_URL_AUTHORIZE: &str = "https://www.facebook.com/dialog/oauth";

/// Permissions requested through the login dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permission {
  Email,
  PublicProfile,
  UserPosts,
  UserFriends,
  PublishActions,
}

impl fmt::Display for Permission {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Permission::Email => write!(f, "email"),
      Permission::PublicProfile => write!(f, "public_profile"),
      Permission::UserPosts => write!(f, "user_posts"),
      Permission::UserFriends => write!(f, "user_friends"),
      Permission::PublishActions => write!(f, "publish_actions"),
    }
  }
}
