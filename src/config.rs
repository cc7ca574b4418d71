//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Contact form endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Submission endpoint URL
    pub action: String,
    /// HTTP method, HTML-attribute style (e.g. "post")
    pub method: String,
    /// Address offered in the failure notice when submission fails
    pub fallback_email: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            action: "https://example.com/api/contact".to_string(),
            method: "post".to_string(),
            fallback_email: "hello@example.com".to_string(),
        }
    }
}

/// Page content shown on the Home view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Display name
    pub name: String,
    /// One-line tagline under the name
    pub tagline: String,
    /// ASCII-art portrait lines
    pub portrait: Vec<String>,
    /// Intro paragraph lines; `{{...}}` marks redacted runs
    pub intro: Vec<String>,
    /// Bio paragraph lines; `{{...}}` marks redacted runs
    pub bio: Vec<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Avendel".to_string(),
            tagline: "systems tinkerer & occasional writer".to_string(),
            portrait: vec![
                " .--------. ".to_string(),
                " | .----. | ".to_string(),
                " | | @@ | | ".to_string(),
                " | '----' | ".to_string(),
                " '--------' ".to_string(),
            ],
            intro: vec![
                "Hi, I build quiet tools for loud problems.".to_string(),
                "Currently somewhere between {{a day job}} and a terminal.".to_string(),
            ],
            bio: vec![
                "I spent a few years doing {{classified infrastructure work}}".to_string(),
                "before settling into open source. These days I care about".to_string(),
                "small binaries, honest error messages, and {{good coffee}}.".to_string(),
                String::new(),
                "Say hello through the contact page.".to_string(),
            ],
        }
    }
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FolioConfig {
    /// Contact form endpoint
    pub form: FormConfig,
    /// Page content
    pub profile: ProfileConfig,
}

impl FolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FolioConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }
}
