//! Image reference rules shared by every content resource.
//!
//! A stored image reference is either a bare filename owned by the
//! [`MediaStore`](crate::media_store::MediaStore) or an absolute URL. Values
//! are stored verbatim on write and only rewritten when a response is built,
//! so the same row renders differently under different request origins.

/// Prefixes that mark a reference as already absolute.
pub const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "//", "data:"];

/// Returns `true` when `reference` already points somewhere outside the
/// media store and must be passed through unchanged.
pub fn is_absolute(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    ABSOLUTE_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Returns `true` when `reference` names a file in the media store.
pub fn is_local(reference: &str) -> bool {
    !reference.trim().is_empty() && !is_absolute(reference)
}

/// Join a request origin, the static-serving prefix, and a stored name.
///
/// Pure string concatenation; the file is not checked for existence.
pub fn resolve(origin: &str, public_prefix: &str, stored_name: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let prefix = public_prefix.trim_matches('/');
    let name = stored_name.trim_start_matches('/');
    if prefix.is_empty() {
        format!("{origin}/{name}")
    } else {
        format!("{origin}/{prefix}/{name}")
    }
}

/// Render a stored reference for a response.
///
/// Absolute references pass through; bare filenames are resolved against
/// `origin`. An empty reference stays empty.
pub fn render(origin: &str, public_prefix: &str, reference: &str) -> String {
    if reference.is_empty() || is_absolute(reference) {
        reference.to_string()
    } else {
        resolve(origin, public_prefix, reference)
    }
}

/// Stored name addressed by `reference`, if it points into the media store.
///
/// Accepts a bare name, `<prefix>/<name>`, or a URL rendered for `origin`
/// (`<origin><prefix>/<name>`, host compared case-insensitively). URLs for
/// any other origin are foreign and yield `None`.
pub fn local_name<'a>(origin: &str, public_prefix: &str, reference: &'a str) -> Option<&'a str> {
    let reference = reference.trim();
    let prefix = match public_prefix.trim_matches('/') {
        "" => "/".to_string(),
        p => format!("/{p}/"),
    };
    let origin = origin.trim_end_matches('/');

    let path = reference
        .get(..origin.len())
        .filter(|head| !origin.is_empty() && head.eq_ignore_ascii_case(origin))
        .map(|_| &reference[origin.len()..]);

    let name = match path {
        Some(path) => path.strip_prefix(prefix.as_str())?,
        None if is_absolute(reference) => return None,
        None => reference.strip_prefix(prefix.as_str()).unwrap_or(reference),
    };

    if matches!(name, "" | "." | "..") || name.contains(['/', '\\']) {
        return None;
    }
    Some(name)
}

/// Implemented by every resource row that carries an image reference.
pub trait HasImage {
    fn image(&self) -> &str;
    fn image_mut(&mut self) -> &mut String;
}

/// Rewrite the image of every item in place for a response.
pub fn render_all<T: HasImage>(items: &mut [T], origin: &str, public_prefix: &str) {
    for item in items.iter_mut() {
        let rendered = render(origin, public_prefix, item.image());
        *item.image_mut() = rendered;
    }
}

// ---------------------------------------------------------------------------
// Selection on write
// ---------------------------------------------------------------------------

/// Where the image of a create or update request comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A file uploaded with the request, already written to the media store.
    Upload(String),
    /// A caller-supplied URL (or filename) stored verbatim.
    Url(String),
    /// Neither was supplied.
    Absent,
}

impl ImageSource {
    /// Apply the precedence rule: an upload always wins, then a non-empty
    /// `imageUrl`, then nothing.
    pub fn select(stored_upload: Option<String>, image_url: Option<&str>) -> Self {
        if let Some(name) = stored_upload {
            return Self::Upload(name);
        }
        match image_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::Url(url.to_string()),
            _ => Self::Absent,
        }
    }

    /// Stored name of a file written for this request, if any.
    pub fn stored_upload(&self) -> Option<&str> {
        match self {
            Self::Upload(name) => Some(name),
            _ => None,
        }
    }

    /// Value to persist when creating a resource.
    pub fn into_create_value(self) -> String {
        self.into_update_value().unwrap_or_default()
    }

    /// Value to persist when updating a resource; `None` keeps the current image.
    pub fn into_update_value(self) -> Option<String> {
        match self {
            Self::Upload(v) | Self::Url(v) => Some(v),
            Self::Absent => None,
        }
    }
}
