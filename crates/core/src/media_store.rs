//! Filesystem-backed storage for uploaded images.
//!
//! Files live flat under a single root directory and are served back by the
//! HTTP layer under [`MediaStore::public_prefix`]. Stored names are a random
//! UUID plus the original extension, so concurrent uploads never collide.

use std::path::{Component, Path, PathBuf};

use crate::error::CoreError;
use crate::image_ref;

/// Default URL prefix the upload directory is served under.
pub const DEFAULT_PUBLIC_PREFIX: &str = "/uploads";

/// Longest extension carried over from an uploaded file name.
const MAX_EXTENSION_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_prefix: String,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
        }
    }

    pub fn with_public_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.public_prefix = prefix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn public_prefix(&self) -> &str {
        &self.public_prefix
    }

    /// Write `data` under a freshly generated name and return that name.
    ///
    /// The root directory is created on first use.
    pub async fn store(&self, data: &[u8], original_name: &str) -> Result<String, CoreError> {
        tokio::fs::create_dir_all(&self.root).await?;

        let stored_name = stored_name_for(original_name);
        tokio::fs::write(self.root.join(&stored_name), data).await?;

        tracing::debug!(
            original = original_name,
            stored = %stored_name,
            bytes = data.len(),
            "Stored uploaded media"
        );
        Ok(stored_name)
    }

    /// Absolute URL for a stored name under the given request origin.
    pub fn resolve(&self, origin: &str, stored_name: &str) -> String {
        image_ref::resolve(origin, &self.public_prefix, stored_name)
    }

    /// Render a stored image reference for a response.
    pub fn render(&self, origin: &str, reference: &str) -> String {
        image_ref::render(origin, &self.public_prefix, reference)
    }

    /// Stored name `reference` addresses in this store, if any. Rendered
    /// URLs for `origin` map back to the bare name.
    pub fn local_name<'a>(&self, origin: &str, reference: &'a str) -> Option<&'a str> {
        image_ref::local_name(origin, &self.public_prefix, reference)
            .filter(|name| is_plain_file_name(name))
    }

    /// Form in which a caller-supplied reference is persisted: anything
    /// addressing this store becomes its bare stored name, everything else
    /// is kept verbatim.
    pub fn normalize(&self, origin: &str, reference: &str) -> String {
        match self.local_name(origin, reference) {
            Some(name) => name.to_string(),
            None => reference.to_string(),
        }
    }

    /// Remove a previously stored file.
    ///
    /// Returns `Ok(false)` when the reference is not a local file name or the
    /// file is already gone.
    pub async fn remove(&self, reference: &str) -> Result<bool, CoreError> {
        if !image_ref::is_local(reference) || !is_plain_file_name(reference) {
            return Ok(false);
        }
        match tokio::fs::remove_file(self.root.join(reference)).await {
            Ok(()) => {
                tracing::debug!(stored = reference, "Removed media file");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Generate a stored name: a v4 UUID followed by the original extension.
pub fn stored_name_for(original_name: &str) -> String {
    let id = uuid::Uuid::new_v4().simple();
    match extension_of(original_name) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

/// Lower-cased extension of `name`, if it is short and alphanumeric.
fn extension_of(name: &str) -> Option<String> {
    let ext = Path::new(name).extension()?.to_str()?;
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// A single normal path component: no separators, no `..`.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
