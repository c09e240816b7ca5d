//! Login redirect URL construction.
//!
//! Builds the OAuth authorization URL sent to the front-end in an
//! `AuthRedirect` message. Only the Google OAuth endpoint is supported.

use url::form_urlencoded;

use crate::config::Secrets;

/// Fixed OAuth authorization endpoint.
pub const OAUTH_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Scopes requested on login.
pub const OAUTH_SCOPES: &[&str] = &["profile", "email"];

/// Build the authorization URL for the login redirect.
///
/// Returns an empty string when no secrets handle or no `[auth]` section is
/// available; the absence of configuration is not an error.
pub fn login_redirect_url(secrets: Option<&Secrets>) -> String {
    let auth = match secrets.and_then(|s| s.auth()) {
        Some(auth) => auth,
        None => return String::new(),
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("response_type", "code");
    query.append_pair("approval_prompt", "auto");
    if let Some(redirect_uri) = &auth.redirect_uri {
        query.append_pair("redirect_uri", redirect_uri);
    }
    if let Some(client_id) = &auth.client_id {
        query.append_pair("client_id", client_id);
    }
    query.append_pair("scope", &OAUTH_SCOPES.join(" "));

    format!("{}?{}", OAUTH_AUTHORIZE_URL, query.finish())
}
