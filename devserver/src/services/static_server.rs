//! Static file serving service
//!
//! Serves the preview site with content types and caching headers.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::DEFAULT_INDEX;
use crate::error::{DevServerError, DevServerResult};
use crate::traits::{StaticFileResponse, StaticFileServer};
use shared::{ServiceId, service_debug, service_warn};

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct RealStaticFileServer {
    root: PathBuf,
    /// File served for directory requests
    index: String,
    mime_types: HashMap<&'static str, &'static str>,
}

impl RealStaticFileServer {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let mime_types = HashMap::from([
            ("html", "text/html; charset=utf-8"),
            ("htm", "text/html; charset=utf-8"),
            ("css", "text/css; charset=utf-8"),
            ("js", "application/javascript; charset=utf-8"),
            ("mjs", "application/javascript; charset=utf-8"),
            ("json", "application/json"),
            ("txt", "text/plain; charset=utf-8"),
            ("png", "image/png"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("gif", "image/gif"),
            ("svg", "image/svg+xml"),
            ("ico", "image/x-icon"),
            ("webp", "image/webp"),
            ("woff", "font/woff"),
            ("woff2", "font/woff2"),
        ]);

        Self {
            root: root.as_ref().to_path_buf(),
            index: DEFAULT_INDEX.to_string(),
            mime_types,
        }
    }

    /// Configure the directory index page (fluent API)
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    fn mime_type(&self, path: &Path) -> &'static str {
        extension(path)
            .and_then(|ext| self.mime_types.get(ext.as_str()).copied())
            .unwrap_or(FALLBACK_MIME)
    }

    fn cache_control(path: &Path) -> Option<&'static str> {
        match extension(path)?.as_str() {
            "html" | "htm" => Some("no-cache"),
            "js" | "mjs" | "css" => Some("public, max-age=3600"),
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "ico" | "webp" => Some("public, max-age=86400"),
            "woff" | "woff2" => Some("public, max-age=604800"),
            _ => None,
        }
    }

    /// Resolve a request path to a file inside the root
    fn resolve_path(&self, request_path: &str) -> DevServerResult<PathBuf> {
        let canonical_root = self.root.canonicalize().map_err(|e| {
            service_warn!(ServiceId::current(), "Static root {} not accessible: {}", self.root.display(), e);
            DevServerError::RootNotAccessible {
                path: self.root.display().to_string(),
            }
        })?;

        let clean_path = request_path.trim_start_matches('/');
        let candidate = canonical_root.join(clean_path);

        // Resolves `..` and symlinks before the containment check
        let canonical = candidate
            .canonicalize()
            .map_err(|_| DevServerError::not_found(request_path))?;

        if !canonical.starts_with(&canonical_root) {
            return Err(DevServerError::access_denied(request_path));
        }

        if canonical.is_dir() {
            let index = canonical.join(&self.index);
            return if index.is_file() {
                Ok(index)
            } else {
                Err(DevServerError::not_found(request_path))
            };
        }

        Ok(canonical)
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}

#[async_trait]
impl StaticFileServer for RealStaticFileServer {
    async fn serve_file(&self, path: &str) -> DevServerResult<StaticFileResponse> {
        let file_path = self.resolve_path(path)?;

        let content = fs::read(&file_path).await.map_err(|e| {
            service_warn!(ServiceId::current(), "❌ Failed to read static file {}: {}", path, e);
            DevServerError::not_found(path)
        })?;

        service_debug!(ServiceId::current(), "📄 Served static file: {} ({} bytes)", path, content.len());

        let mut response = StaticFileResponse::new(content, self.mime_type(&file_path));
        if let Some(cache) = Self::cache_control(&file_path) {
            response = response.with_cache_control(cache);
        }
        Ok(response)
    }

    async fn file_exists(&self, path: &str) -> bool {
        self.resolve_path(path).is_ok()
    }
}
