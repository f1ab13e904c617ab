//! Downloads a single file and writes it to disk.

use crate::errors::{io_error_with_path, Result};
use crate::transport::{get_bytes, HttpClient};
use std::fs;
use std::path::Path;

/// Fetches `url` as raw bytes and writes them to `output_path`.
///
/// Missing parent directories are created; an existing file is overwritten.
/// The body is written verbatim, so binary assets survive unchanged.
pub fn download_file(client: &dyn HttpClient, url: &str, output_path: &Path) -> Result<()> {
    log::debug!("Downloading {} -> {}", url, output_path.display());
    let content = get_bytes(client, url)?;

    if let Some(parent_dir) = output_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|e| io_error_with_path(e, parent_dir))?;
    }

    fs::write(output_path, content).map_err(|e| io_error_with_path(e, output_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::transport::mock::MockClient;
    use tempfile::tempdir;

    const URL: &str = "https://raw.githubusercontent.com/o/r/master/assets/logo.png";

    #[test]
    fn test_creates_parents_and_writes_bytes() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let payload = [0x89, b'P', b'N', b'G', 0x00, 0xff];
        let client = MockClient::new().bytes(URL, &payload);
        let target = temp.path().join("public").join("assets").join("logo.png");

        download_file(&client, URL, &target)?;

        assert_eq!(fs::read(&target)?, payload);
        assert_eq!(client.requested(), vec![URL.to_string()]);
        Ok(())
    }

    #[test]
    fn test_overwrites_existing_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let target = temp.path().join("README.md");
        fs::write(&target, "stale content that is longer than the new one")?;
        let client = MockClient::new().bytes(URL, b"fresh");

        download_file(&client, URL, &target)?;

        assert_eq!(fs::read_to_string(&target)?, "fresh");
        Ok(())
    }

    #[test]
    fn test_failed_request_writes_nothing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let target = temp.path().join("nested").join("file.txt");
        let client = MockClient::new().status(URL, 500);

        let result = download_file(&client, URL, &target);

        assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
        assert!(!temp.path().join("nested").exists());
        Ok(())
    }
}
