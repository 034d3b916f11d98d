use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 4;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub company: Company,
    #[serde(default)]
    pub view: ViewSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Company {
    pub name: String,
    /// Used when settings.toml carries no logo of its own
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ViewSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_currency_symbol() -> String {
    "$".to_string()
}
