use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, ShopError};
use crate::models::Catalog;
use crate::weekly::{validate_day_labels, DayInput};

/// Where the catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// `http://` and `https://` locations are fetched; anything else is a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogSource::Url(location.to_string())
        } else {
            CatalogSource::File(PathBuf::from(location))
        }
    }
}

/// Read the seven day files. Names are validated before any file is read.
pub fn read_day_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<DayInput>> {
    let names: Vec<String> = paths.iter().map(|p| file_label(p.as_ref())).collect();
    validate_day_labels(&names)?;

    paths
        .iter()
        .zip(names)
        .map(|(path, name)| -> Result<DayInput> {
            let content = fs::read_to_string(path.as_ref())?;
            Ok(DayInput::new(name, content))
        })
        .collect()
}

/// Every `*.json` file in `dir` except the catalog file, sorted by name.
pub fn find_day_files(dir: &Path, catalog_file: Option<&Path>) -> Result<Vec<PathBuf>> {
    let catalog_name = catalog_file.and_then(|p| p.file_name());

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !path.is_file() || !is_json {
            continue;
        }
        if catalog_name.is_some() && path.file_name() == catalog_name {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Parse catalog JSON content.
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    serde_json::from_str(content).map_err(ShopError::CatalogParse)
}

/// Load the catalog from a file or URL.
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    let content = match source {
        CatalogSource::File(path) => fs::read_to_string(path)
            .map_err(|e| ShopError::CatalogFetch(format!("{}: {}", path.display(), e)))?,
        CatalogSource::Url(url) => fetch_url(url)?,
    };

    let catalog = parse_catalog(&content)?;
    info!(source = ?source, entries = catalog.len(), "loaded catalog");
    Ok(catalog)
}

fn fetch_url(url: &str) -> Result<String> {
    let resp = reqwest::blocking::get(url)
        .map_err(|e| ShopError::CatalogFetch(format!("request to {url} failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(ShopError::CatalogFetch(format!(
            "request to {url} failed with status {}",
            resp.status()
        )));
    }

    resp.text()
        .map_err(|e| ShopError::CatalogFetch(format!("reading {url} failed: {e}")))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    /// Serve one HTTP response on a loopback port and return its URL.
    fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/catalog.json", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        (url, handle)
    }

    fn write_week(dir: &Path) -> Vec<PathBuf> {
        Weekday::ALL
            .iter()
            .map(|day| {
                let path = dir.join(day.file_name());
                fs::write(&path, r#"{"Rice": 100}"#).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_catalog_source_parse() {
        assert_eq!(
            CatalogSource::parse("https://example.com/catalog.json"),
            CatalogSource::Url("https://example.com/catalog.json".to_string())
        );
        assert_eq!(
            CatalogSource::parse("data/catalog.json"),
            CatalogSource::File(PathBuf::from("data/catalog.json"))
        );
    }

    #[test]
    fn test_find_day_files_skips_catalog_and_other_files() {
        let dir = TempDir::new().unwrap();
        write_week(dir.path());
        fs::write(dir.path().join("catalog.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let files = find_day_files(dir.path(), Some(Path::new("catalog.json"))).unwrap();
        assert_eq!(files.len(), 7);
        assert!(files.iter().all(|f| f.file_name().unwrap() != "catalog.json"));
    }

    #[test]
    fn test_read_day_files() {
        let dir = TempDir::new().unwrap();
        let paths = write_week(dir.path());

        let inputs = read_day_files(&paths).unwrap();
        assert_eq!(inputs.len(), 7);
        assert_eq!(inputs[0].name, "monday.json");
        assert_eq!(inputs[0].content, r#"{"Rice": 100}"#);
    }

    #[test]
    fn test_read_day_files_validates_names_first() {
        let dir = TempDir::new().unwrap();
        let mut paths = write_week(dir.path());
        paths[3] = dir.path().join("missing.json");

        assert!(matches!(
            read_day_files(&paths),
            Err(ShopError::UnknownDayFile(name)) if name == "missing.json"
        ));
    }

    #[test]
    fn test_missing_catalog_file_is_fetch_error() {
        let dir = TempDir::new().unwrap();
        let source = CatalogSource::File(dir.path().join("nope.json"));
        assert!(matches!(
            load_catalog(&source),
            Err(ShopError::CatalogFetch(_))
        ));
    }

    #[test]
    fn test_catalog_url_not_found_is_fetch_error() {
        let (url, server) = serve_once("404 Not Found", "");
        let result = load_catalog(&CatalogSource::Url(url));
        server.join().unwrap();

        match result {
            Err(ShopError::CatalogFetch(msg)) => assert!(msg.contains("404")),
            other => panic!("expected CatalogFetch, got {:?}", other),
        }
    }

    #[test]
    fn test_catalog_url_ok_is_parsed() {
        let (url, server) = serve_once("200 OK", r#"{"Rice": {"unit": "1 kg", "price": "$2000"}}"#);
        let catalog = load_catalog(&CatalogSource::Url(url)).unwrap();
        server.join().unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Rice").unwrap().price, "$2000");
    }

    #[test]
    fn test_catalog_url_bad_body_is_parse_error() {
        let (url, server) = serve_once("200 OK", "{not json");
        let result = load_catalog(&CatalogSource::Url(url));
        server.join().unwrap();

        assert!(matches!(result, Err(ShopError::CatalogParse(_))));
    }

    #[test]
    fn test_catalog_url_unreachable_is_fetch_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let source = CatalogSource::Url(format!("http://127.0.0.1:{port}/catalog.json"));

        assert!(matches!(
            load_catalog(&source),
            Err(ShopError::CatalogFetch(_))
        ));
    }

    #[test]
    fn test_malformed_catalog_is_parse_error() {
        assert!(matches!(
            parse_catalog(r#"{"Rice": {"unit": "1 kg"}}"#),
            Err(ShopError::CatalogParse(_))
        ));
        assert!(matches!(parse_catalog("[1, 2"), Err(ShopError::CatalogParse(_))));
    }
}
