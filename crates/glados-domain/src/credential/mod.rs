use std::fmt;

/// Separator between session cookies in the `COOKIES` value
pub const CREDENTIAL_DELIMITER: char = '&';

/// Opaque session cookie authenticating one account.
///
/// Never printed in full: `Debug` only reveals the length.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` when the value is blank after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<{} chars>)", self.0.len())
    }
}

/// Split a delimiter-joined cookie list into credentials, in order.
///
/// Blank segments are dropped; an empty input yields an empty list.
pub fn load_credentials(raw: &str) -> Vec<Credential> {
    raw.split(CREDENTIAL_DELIMITER)
        .filter_map(Credential::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_credentials_splits_and_trims() {
        let creds = load_credentials(" koa:sess=a; koa:sess.sig=b & koa:sess=c ");
        assert_eq!(creds.len(), 2);
        assert_eq!(creds[0].as_str(), "koa:sess=a; koa:sess.sig=b");
        assert_eq!(creds[1].as_str(), "koa:sess=c");
    }

    #[test]
    fn test_load_credentials_drops_blank_segments() {
        let creds = load_credentials("&a&&  &b&");
        let values: Vec<&str> = creds.iter().map(Credential::as_str).collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(load_credentials("").is_empty());
        assert!(load_credentials("   ").is_empty());
        assert!(load_credentials("&&").is_empty());
    }

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::new("secret-session").unwrap();
        let debug = format!("{:?}", cred);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("14"));
    }
}
