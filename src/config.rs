use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::navigation::Page;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Everything the pages display that is not catalog content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    #[serde(default)]
    pub initial_page: Page,
    #[serde(default = "default_hero_title")]
    pub hero_title: String,
    #[serde(default = "default_hero_subtitle")]
    pub hero_subtitle: String,
    #[serde(default = "default_calendar_link")]
    pub calendar_link: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,
    #[serde(default = "default_footer_tagline")]
    pub footer_tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Form submissions are posted here. Empty keeps the placeholder form.
    #[serde(default)]
    pub webhook_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub brand_name: Option<String>,
    pub initial_page: Option<Page>,
    pub calendar_link: Option<String>,
    pub webhook_url: Option<String>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/appex-site/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(brand_name) = overrides.brand_name {
            self.site.brand_name = brand_name;
        }
        if let Some(initial_page) = overrides.initial_page {
            self.site.initial_page = initial_page;
        }
        if let Some(calendar_link) = overrides.calendar_link {
            self.site.calendar_link = calendar_link;
        }
        if let Some(webhook_url) = overrides.webhook_url {
            self.contact.webhook_url = webhook_url;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn default_template() -> String {
        let template = r##"[site]
brand_name = "APPEX INNOVATIONS"
initial_page = "home"
hero_title = "Never miss a lead or patient again — even when you're busy."
hero_subtitle = "AI agents + automations that respond instantly, qualify clients, book appointments, and follow up until they take action."
calendar_link = "#"
contact_email = "hello@appexinnovations.com"
contact_phone = "+1 (000) 000-0000"
footer_tagline = "Need-driven automations and AI agents that help teams respond faster, book more, and operate with peace of mind."

[server]
host = "127.0.0.1"
port = 3001

[contact]
webhook_url = ""
"##;
        template.to_string()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            initial_page: Page::default(),
            hero_title: default_hero_title(),
            hero_subtitle: default_hero_subtitle(),
            calendar_link: default_calendar_link(),
            contact_email: default_contact_email(),
            contact_phone: default_contact_phone(),
            footer_tagline: default_footer_tagline(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_brand_name() -> String {
    "APPEX INNOVATIONS".to_string()
}

fn default_hero_title() -> String {
    "Never miss a lead or patient again — even when you're busy.".to_string()
}

fn default_hero_subtitle() -> String {
    "AI agents + automations that respond instantly, qualify clients, book appointments, and follow up until they take action.".to_string()
}

fn default_calendar_link() -> String {
    "#".to_string()
}

fn default_contact_email() -> String {
    "hello@appexinnovations.com".to_string()
}

fn default_contact_phone() -> String {
    "+1 (000) 000-0000".to_string()
}

fn default_footer_tagline() -> String {
    "Need-driven automations and AI agents that help teams respond faster, book more, and operate with peace of mind.".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        let parsed: Config = toml::from_str(&Config::default_template()).expect("template parses");
        let defaults = Config::default();
        assert_eq!(parsed.site.brand_name, defaults.site.brand_name);
        assert_eq!(parsed.site.hero_title, defaults.site.hero_title);
        assert_eq!(parsed.site.footer_tagline, defaults.site.footer_tagline);
        assert_eq!(parsed.site.initial_page, Page::Home);
        assert_eq!(parsed.server.port, 3001);
        assert!(parsed.contact.webhook_url.is_empty());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let parsed: Config = toml::from_str(
            r#"
[site]
brand_name = "Acme Automations"
initial_page = "solutions"
"#,
        )
        .expect("partial config parses");
        assert_eq!(parsed.site.brand_name, "Acme Automations");
        assert_eq!(parsed.site.initial_page, Page::Solutions);
        assert_eq!(parsed.site.calendar_link, "#");
        assert_eq!(parsed.server.host, "127.0.0.1");
    }

    #[test]
    fn overrides_win() {
        let mut config = Config::default();
        config.apply_overrides(ConfigOverrides {
            brand_name: Some("Override".to_string()),
            initial_page: Some(Page::About),
            calendar_link: Some("https://cal.example/intro".to_string()),
            webhook_url: Some("https://hooks.example/contact".to_string()),
        });
        assert_eq!(config.site.brand_name, "Override");
        assert_eq!(config.site.initial_page, Page::About);
        assert_eq!(config.site.calendar_link, "https://cal.example/intro");
        assert_eq!(config.contact.webhook_url, "https://hooks.example/contact");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/appex-site/config.toml")))
            .expect("missing config is not an error");
        assert_eq!(config.site.contact_email, "hello@appexinnovations.com");
    }
}
