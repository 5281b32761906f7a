//! Login credentials and the rules for picking one shape.

use std::fmt;

use crate::AccessToken;

/// Credentials used to open a session.
///
/// Exactly one shape is used per run. An access token always wins over a
/// login/password pair.
///
/// # Security
///
/// Neither the token nor the password is exposed in Debug output.
///
/// # Example
///
/// ```
/// use vkclean_core::Credentials;
///
/// let creds = Credentials::resolve(None, Some("alice@example.com".into()), Some("hunter2".into()));
/// assert!(matches!(creds, Some(Credentials::Password { .. })));
/// ```
#[derive(Clone)]
pub enum Credentials {
    /// A ready-to-use access token.
    AccessToken(AccessToken),
    /// A login (phone or e-mail) and password, exchanged for a token on login.
    Password { login: String, password: String },
}

impl Credentials {
    /// Pick the usable credential shape out of the three optional settings.
    ///
    /// Empty strings count as absent. Returns `None` when neither a token
    /// nor a complete login/password pair is available.
    pub fn resolve(
        token: Option<String>,
        login: Option<String>,
        password: Option<String>,
    ) -> Option<Self> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        if let Some(token) = present(token) {
            return Some(Credentials::AccessToken(AccessToken::new(token)));
        }

        match (present(login), present(password)) {
            (Some(login), Some(password)) => Some(Credentials::Password { login, password }),
            _ => None,
        }
    }

    /// Short name of the authentication method, for logs.
    pub fn method(&self) -> &'static str {
        match self {
            Credentials::AccessToken(_) => "access token",
            Credentials::Password { .. } => "login/password",
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::AccessToken(token) => {
                f.debug_tuple("AccessToken").field(token).finish()
            }
            Credentials::Password { login, .. } => f
                .debug_struct("Password")
                .field("login", login)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn token_takes_precedence_over_password() {
        let creds = Credentials::resolve(s("T1"), s("alice"), s("secret")).unwrap();
        match creds {
            Credentials::AccessToken(token) => assert_eq!(token.as_str(), "T1"),
            other => panic!("expected token credentials, got {:?}", other),
        }
    }

    #[test]
    fn login_and_password_used_without_token() {
        let creds = Credentials::resolve(None, s("alice"), s("secret")).unwrap();
        assert_eq!(creds.method(), "login/password");
    }

    #[test]
    fn incomplete_pair_resolves_to_none() {
        assert!(Credentials::resolve(None, s("alice"), None).is_none());
        assert!(Credentials::resolve(None, None, s("secret")).is_none());
        assert!(Credentials::resolve(None, None, None).is_none());
    }

    #[test]
    fn empty_values_count_as_absent() {
        assert!(Credentials::resolve(s(""), s(""), s("")).is_none());
        let creds = Credentials::resolve(s("  "), s("alice"), s("secret")).unwrap();
        assert_eq!(creds.method(), "login/password");
    }

    #[test]
    fn credentials_hide_secrets_in_debug() {
        let creds = Credentials::resolve(None, s("alice"), s("secret123")).unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));

        let creds = Credentials::resolve(s("tok-abc"), None, None).unwrap();
        assert!(!format!("{:?}", creds).contains("tok-abc"));
    }
}
