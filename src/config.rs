// Central configuration loaded from environment variables.
//
// The .env file is loaded automatically at startup via dotenvy. Every
// value has a builtin default, so the CLI works with no configuration
// at all; a bad value (unknown mode, non-integer top-N) fails at load
// time rather than being silently coerced.

use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::analyzer::Analyzer;
use crate::catalog::Catalog;
use crate::classify::ClassifierMode;
use crate::keywords::KeywordTable;
use crate::ranking::DEFAULT_TOP_N;

pub struct Config {
    /// Path to a catalog JSON file (S5MATCH_CATALOG). Unset means the
    /// builtin 23-exemplar reference catalog.
    pub catalog_path: Option<PathBuf>,
    /// Directory of per-category keyword CSVs (S5MATCH_KEYWORDS_DIR).
    /// Unset means the builtin keyword sets.
    pub keywords_dir: Option<PathBuf>,
    /// Classification mode (S5MATCH_MODE: "simple" | "leveled")
    pub mode: ClassifierMode,
    /// How many recommendations to return (S5MATCH_TOP_N, default 7)
    pub top_n: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let mode = match env::var("S5MATCH_MODE").as_deref() {
            Ok("leveled") => ClassifierMode::Leveled,
            Ok("simple") | Err(_) => ClassifierMode::Simple,
            Ok(other) => {
                anyhow::bail!("S5MATCH_MODE must be \"simple\" or \"leveled\", got {other:?}")
            }
        };

        let top_n = match env::var("S5MATCH_TOP_N") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("S5MATCH_TOP_N must be an integer, got {raw:?}"))?,
            Err(_) => DEFAULT_TOP_N,
        };

        Ok(Self {
            catalog_path: env::var("S5MATCH_CATALOG").ok().map(PathBuf::from),
            keywords_dir: env::var("S5MATCH_KEYWORDS_DIR").ok().map(PathBuf::from),
            mode,
            top_n,
        })
    }

    /// Load the configured catalog (builtin when no path is set).
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(path),
            None => Catalog::builtin(),
        }
    }

    /// Load the configured keyword table (builtin when no dir is set).
    pub fn keyword_table(&self) -> Result<KeywordTable> {
        match &self.keywords_dir {
            Some(dir) => KeywordTable::from_dir(dir),
            None => KeywordTable::builtin(),
        }
    }

    /// Build the analyzer from this configuration — catalog and keyword
    /// table are loaded once here and injected, never global.
    pub fn build_analyzer(&self) -> Result<Analyzer> {
        Analyzer::new(self.catalog()?, self.keyword_table()?, self.mode, self.top_n)
    }
}
