//! Application Configuration

/// Users application configuration
#[derive(Debug, Clone)]
pub struct UsersConfig {
    /// Largest accepted request body, in bytes
    pub max_body_bytes: usize,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 64 * 1024,
        }
    }
}

impl UsersConfig {
    pub fn with_max_body_bytes(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }
}
