//! Where the reference table's HTML comes from.

use super::table::{RawTable, TableSignature, extract_table};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// A provider of the reference table.
///
/// `Ok(None)` means the document was retrieved but holds no matching table.
pub trait TableSource {
    fn fetch_table(&self) -> AppResult<Option<RawTable>>;

    /// Human-readable origin, used in log lines and messages
    fn describe(&self) -> String;
}

/// Blocking HTTP GET against the configured page.
pub struct HttpSource {
    client: Client,
    url: String,
    signature: TableSignature,
}

impl HttpSource {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(cfg.request_timeout())
            .user_agent(cfg.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            url: cfg.source_url.clone(),
            signature: TableSignature::new(cfg.table_selector.clone(), cfg.table_columns),
        })
    }
}

impl TableSource for HttpSource {
    fn fetch_table(&self) -> AppResult<Option<RawTable>> {
        info!(url = %self.url, "fetching reference table");
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;

        let table = extract_table(&body, &self.signature)?;
        if table.is_none() {
            warn!(url = %self.url, selector = %self.signature.selector, "no matching table on page");
        }
        Ok(table)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// A saved copy of the page on disk.
pub struct FileSource {
    path: PathBuf,
    signature: TableSignature,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, cfg: &Config) -> Self {
        Self {
            path: path.into(),
            signature: TableSignature::new(cfg.table_selector.clone(), cfg.table_columns),
        }
    }
}

impl TableSource for FileSource {
    fn fetch_table(&self) -> AppResult<Option<RawTable>> {
        info!(path = %self.path.display(), "reading reference table from file");
        let html = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {e}", self.path.display()),
            ))
        })?;

        let table = extract_table(&html, &self.signature)?;
        if table.is_none() {
            warn!(path = %self.path.display(), "no matching table in file");
        }
        Ok(table)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick the source for this invocation: a saved page if given, the web otherwise.
pub fn source_for(cfg: &Config, local: Option<&PathBuf>) -> AppResult<Box<dyn TableSource>> {
    match local {
        Some(path) => Ok(Box::new(FileSource::new(path.clone(), cfg))),
        None => Ok(Box::new(HttpSource::new(cfg)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_source_reads_saved_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(
            &path,
            "<table class='cols-2'><tr><th>Category</th><th>Food</th></tr>\
             <tr><td>Dairy</td><td>Milk</td></tr></table>",
        )
        .unwrap();

        let cfg = Config {
            table_selector: "table.cols-2".into(),
            table_columns: 2,
            ..Config::default()
        };
        let table = FileSource::new(&path, &cfg).fetch_table().unwrap().unwrap();
        assert_eq!(table.rows, vec![vec!["Dairy".to_string(), "Milk".to_string()]]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let src = FileSource::new("/definitely/not/here.html", &Config::default());
        assert!(matches!(src.fetch_table(), Err(AppError::Io(_))));
    }
}
