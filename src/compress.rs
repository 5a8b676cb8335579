use crate::constants::{TINIFY_SHRINK_URL, TINIFY_USER, USER_AGENT};
use crate::error::{MergeError, Result};
use crate::utils::{create_progress_spinner, format_file_size, print_compression_result};
use crate::{info, verbose};
use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A lossy compression back-end with a file-in/file-out contract.
///
/// Failures to hand the source over map to `CompressSubmit`; failures to
/// fetch or write the result map to `CompressOutput`.
pub trait Compressor {
    fn compress(&self, source: &Path, destination: &Path) -> Result<()>;
}

/// Client for the tinypng.com shrink API.
pub struct TinifyClient {
    api_key: String,
    endpoint: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ShrinkResponse {
    output: Option<ShrinkOutput>,
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ShrinkOutput {
    size: Option<u64>,
    url: Option<String>,
}

impl TinifyClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MergeError::CompressSubmit(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(api_key, client))
    }

    pub fn with_client(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: TINIFY_SHRINK_URL.to_string(),
            client,
        }
    }

    /// Points the client at a different shrink endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Uploads the image and returns the URL of the compressed result.
    fn submit(&self, data: Vec<u8>) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(TINIFY_USER, Some(&self.api_key))
            .body(data)
            .send()
            .map_err(|e| MergeError::CompressSubmit(e.to_string()))?;

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let raw = response
            .bytes()
            .map_err(|e| MergeError::CompressSubmit(e.to_string()))?;
        let body: ShrinkResponse = serde_json::from_slice(&raw).map_err(|e| {
            let snippet = String::from_utf8_lossy(&raw[..raw.len().min(120)]).into_owned();
            MergeError::CompressSubmit(format!("Invalid response ({}): {}: {:?}", status, e, snippet))
        })?;

        if !status.is_success() {
            return Err(MergeError::CompressSubmit(format!(
                "{} ({}): {}",
                body.error.as_deref().unwrap_or("Error"),
                status,
                body.message.as_deref().unwrap_or("no details")
            )));
        }

        if let Some(size) = body.output.as_ref().and_then(|o| o.size) {
            verbose!("Compressed size reported by server: {} bytes", size);
        }

        body.output
            .and_then(|o| o.url)
            .or(location)
            .ok_or_else(|| MergeError::CompressSubmit("Response has no output URL".to_string()))
    }

    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .basic_auth(TINIFY_USER, Some(&self.api_key))
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| MergeError::CompressOutput(e.to_string()))?;

        let bytes = response
            .bytes()
            .map_err(|e| MergeError::CompressOutput(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl Compressor for TinifyClient {
    fn compress(&self, source: &Path, destination: &Path) -> Result<()> {
        let data = fs::read(source)
            .map_err(|e| MergeError::CompressSubmit(format!("Failed to read {:?}: {}", source, e)))?;

        let url = self.submit(data)?;
        verbose!("Downloading compressed image from {}", url);
        let compressed = self.download(&url)?;

        write_replacing(destination, &compressed)
    }
}

/// Writes through a temporary file in the destination directory, then renames
/// it over the destination.
fn write_replacing(destination: &Path, data: &[u8]) -> Result<()> {
    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let output_error = |e: std::io::Error| MergeError::CompressOutput(e.to_string());

    let mut temp = NamedTempFile::new_in(parent).map_err(output_error)?;
    temp.write_all(data).map_err(output_error)?;
    temp.persist(destination)
        .map_err(|e| MergeError::CompressOutput(e.error.to_string()))?;
    Ok(())
}

/// Compresses `path` in place and reports sizes before and after.
///
/// Returns `(original_size, compressed_size)`.
pub fn compress_in_place(compressor: &dyn Compressor, path: &Path) -> Result<(u64, u64)> {
    let original_size = fs::metadata(path)?.len();
    info!(
        "📊 before compress: {} bytes ({})",
        original_size,
        format_file_size(original_size)
    );

    let pb = create_progress_spinner("compressing...");
    let result = compressor.compress(path, path);
    pb.finish_and_clear();
    result?;

    let compressed_size = fs::metadata(path)?.len();
    print_compression_result(original_size, compressed_size);

    Ok((original_size, compressed_size))
}
