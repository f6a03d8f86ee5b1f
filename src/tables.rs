use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GenError;

pub const SCHEMES: [&str; 3] = ["http", "https", "ftp"];

pub const EXTENDED_SCHEMES: [&str; 8] = [
    "http", "https", "ftp", "sftp", "ssh", "telnet", "svn", "git",
];

pub const SUBDOMAINS: [&str; 8] = [
    "example", "test", "sample", "mail", "app", "beta", "staging", "intranet",
];

pub const TLDS: [&str; 10] = [
    "com", "net", "org", "edu", "gov", "biz", "info", "io", "dev", "test",
];

pub const HTML_TAGS: [&str; 40] = [
    "a", "abbr", "acronym", "address", "article", "aside", "b", "bdo", "big", "blockquote",
    "br", "caption", "cite", "code", "dd", "del", "dfn", "div", "dl", "dt", "em", "footer",
    "h1", "h2", "h3", "header", "hr", "i", "ins", "kbd", "li", "nav", "ol", "p", "pre",
    "q", "section", "small", "strong", "ul",
];

/// Every dotted-decimal netmask, indexed by prefix length.
pub const NETMASKS: [&str; 33] = [
    "0.0.0.0",
    "128.0.0.0",
    "192.0.0.0",
    "224.0.0.0",
    "240.0.0.0",
    "248.0.0.0",
    "252.0.0.0",
    "254.0.0.0",
    "255.0.0.0",
    "255.128.0.0",
    "255.192.0.0",
    "255.224.0.0",
    "255.240.0.0",
    "255.248.0.0",
    "255.252.0.0",
    "255.254.0.0",
    "255.255.0.0",
    "255.255.128.0",
    "255.255.192.0",
    "255.255.224.0",
    "255.255.240.0",
    "255.255.248.0",
    "255.255.252.0",
    "255.255.254.0",
    "255.255.255.0",
    "255.255.255.128",
    "255.255.255.192",
    "255.255.255.224",
    "255.255.255.240",
    "255.255.255.248",
    "255.255.255.252",
    "255.255.255.254",
    "255.255.255.255",
];

pub const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit, \
sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim \
veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo \
consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore \
eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa \
qui officia deserunt mollit anim id est laborum.";

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

/// Read-only lookup data consumed by the format generators. Any table can be
/// replaced without touching generator logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Tables {
    pub schemes: Vec<String>,
    pub extended_schemes: Vec<String>,
    pub subdomains: Vec<String>,
    pub tlds: Vec<String>,
    pub html_tags: Vec<String>,
    pub netmasks: Vec<String>,
    pub lorem_ipsum: String,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            schemes: owned(&SCHEMES),
            extended_schemes: owned(&EXTENDED_SCHEMES),
            subdomains: owned(&SUBDOMAINS),
            tlds: owned(&TLDS),
            html_tags: owned(&HTML_TAGS),
            netmasks: owned(&NETMASKS),
            lorem_ipsum: LOREM_IPSUM.to_string(),
        }
    }
}

impl Tables {
    /// Parses a YAML document; keys left out keep their built-in values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GenError> {
        let tables: Tables =
            serde_yaml::from_str(yaml).map_err(|e| GenError::Config(e.to_string()))?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, GenError> {
        let yaml = fs::read_to_string(path)
            .map_err(|e| GenError::Config(format!("{}: {}", path.display(), e)))?;
        let tables = Self::from_yaml_str(&yaml)?;
        info!("Loaded generator tables from {}", path.display());
        Ok(tables)
    }

    fn validate(&self) -> Result<(), GenError> {
        let lists = [
            ("schemes", &self.schemes),
            ("extended_schemes", &self.extended_schemes),
            ("subdomains", &self.subdomains),
            ("tlds", &self.tlds),
            ("html_tags", &self.html_tags),
            ("netmasks", &self.netmasks),
        ];
        if let Some((name, _)) = lists.iter().find(|(_, list)| list.is_empty()) {
            return Err(GenError::Config(format!("table '{name}' is empty")));
        }
        if self.lorem_ipsum.split_whitespace().next().is_none() {
            return Err(GenError::Config("table 'lorem_ipsum' is empty".to_string()));
        }
        Ok(())
    }
}
