use serde::{Deserialize, Serialize};

/// Site identity rendered by the header and home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub about: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Tan Tran".to_string(),
            tagline: "My Projects".to_string(),
            about: "Hello! I'm a passionate developer who loves building things for the \
                    web. I focus on creating clean, user-friendly experiences that solve \
                    real problems."
                .to_string(),
        }
    }
}
