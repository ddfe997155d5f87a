//! JSON schema definitions for .apidoc.json

use serde::{Deserialize, Serialize};

/// Root structure for .apidoc.json
///
/// Every section is optional on disk; missing keys decode to their zero value
/// and unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// apidoc version this file was written for
    pub version: String,

    /// Where the source code lives and how to scan it
    pub input: InputSpec,

    /// Where rendered documentation goes
    pub output: OutputSpec,

    /// Document metadata
    pub doc: DocSpec,
}

/// `input` section
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSpec {
    /// Language of the source tree, lower-cased after loading
    #[serde(rename = "type")]
    pub lang: String,

    /// Source directory (defaults to the working directory)
    pub dir: String,

    /// File extensions to scan, each starting with `.`
    pub exts: Vec<String>,

    /// Descend into subdirectories of `dir`
    pub recursive: bool,
}

/// `output` section
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSpec {
    pub dir: String,
}

/// `doc` section
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocSpec {
    /// Version of the documented API
    pub version: String,

    /// Document title (default: "APIDOC")
    pub title: String,

    /// Prefix for every URL in the document, may be empty
    #[serde(rename = "baseURL")]
    pub base_url: String,
}
