use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub grid: GridConfig,
}

/// Account page locations used for redirects and post-submit navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Account overview page (default: "/account").
    #[serde(default = "default_account_url")]
    pub account_url: String,
    /// Sign-in page (default: "/account/login").
    #[serde(default = "default_account_login_url")]
    pub account_login_url: String,
}

/// Product grid section settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Products per page. Absent or 0 shows the whole collection on one page.
    #[serde(default)]
    pub products_per_page: Option<usize>,
    /// Show the collection name as a visible heading (default: true).
    #[serde(default = "default_show_title")]
    pub show_title: bool,
}

impl GridConfig {
    pub fn page_size(&self) -> Option<NonZeroUsize> {
        self.products_per_page.and_then(NonZeroUsize::new)
    }
}

fn default_account_url() -> String {
    "/account".to_string()
}

fn default_account_login_url() -> String {
    "/account/login".to_string()
}

fn default_show_title() -> bool {
    true
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            account_url: default_account_url(),
            account_login_url: default_account_login_url(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            products_per_page: None,
            show_title: default_show_title(),
        }
    }
}
