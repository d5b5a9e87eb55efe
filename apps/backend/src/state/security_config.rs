/// Credentials the API boundary checks.
#[derive(Clone)]
pub struct SecurityConfig {
    pub api_key: String,
}

impl SecurityConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Constant-time comparison against the configured key.
    pub fn accepts(&self, presented: &str) -> bool {
        let expected = self.api_key.as_bytes();
        let presented = presented.as_bytes();
        if expected.len() != presented.len() {
            return false;
        }
        expected
            .iter()
            .zip(presented)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new("test-api-key")
    }
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
