//! Widget-level configuration
//!
//! Every widget gets its own [`WidgetOptions`]; nothing is shared between
//! instances.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Layout language. Only affects which key sits after `l` on the home row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}

/// Options recognised by the widget.
///
/// Only `rewire_return` and `rewire_tab` influence key handling; the rest
/// are carried for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetOptions {
    pub draggable: bool,
    /// Return submits the enclosing form instead of inserting `'\n'`
    pub rewire_return: bool,
    /// Tab moves to the next trigger instead of inserting `'\t'`
    pub rewire_tab: bool,
    pub top_position: String,
    pub left_position: String,
    pub language: Language,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            draggable: false,
            rewire_return: false,
            rewire_tab: false,
            top_position: "1%".to_string(),
            left_position: "1%".to_string(),
            language: Language::En,
        }
    }
}

impl WidgetOptions {
    /// Parses options from a JSON object, filling omitted fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_rewire_tab(mut self, rewire: bool) -> Self {
        self.rewire_tab = rewire;
        self
    }

    pub fn with_rewire_return(mut self, rewire: bool) -> Self {
        self.rewire_return = rewire;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
