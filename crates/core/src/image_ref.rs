//! Image reference classification and the offline half of normalization.
//!
//! A raw `image` value from a portfolio document is classified into one of
//! a few shapes. All shapes except a credential-gated URL can be normalized
//! without I/O; credential-gated URLs are fetched by the source crate and
//! fall back to [`local_fallback_path`] when that fetch fails.

use std::sync::LazyLock;

use regex::Regex;
use url::{ParseError, Url};

/// Placeholder used when no better local path can be derived.
pub const PLACEHOLDER_IMAGE: &str = "/images/project/1.png";

/// Host whose content requires the bearer credential to retrieve.
pub const CREDENTIAL_GATED_HOST: &str = "raw.githubusercontent.com";

/// Path prefix under which fetched media objects are served.
pub const MEDIA_PATH_PREFIX: &str = "/media/";

/// Everything after a `/public` path segment, e.g. the repository's
/// `public/images/p.png` maps to the same-origin `/images/p.png`.
static PUBLIC_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/public(/.+)").expect("valid regex"));

/// Shape of a raw image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef<'a> {
    /// Starts with `/`. Already renderable.
    SameOrigin(&'a str),
    /// A bare relative path such as `images/x.png`.
    Relative(&'a str),
    /// An `http(s)` URL that needs no credential.
    Url(Url),
    /// An `http(s)` URL on [`CREDENTIAL_GATED_HOST`].
    CredentialGated(Url),
    /// Empty, unparseable, or a scheme other than `http(s)`.
    Unrenderable,
}

/// Classify a raw image reference. Surrounding whitespace is ignored.
pub fn classify(raw: &str) -> ImageRef<'_> {
    let value = raw.trim();

    if value.is_empty() {
        return ImageRef::Unrenderable;
    }
    if value.starts_with('/') {
        return ImageRef::SameOrigin(value);
    }

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            if url.host_str() == Some(CREDENTIAL_GATED_HOST) {
                ImageRef::CredentialGated(url)
            } else {
                ImageRef::Url(url)
            }
        }
        Ok(_) => ImageRef::Unrenderable,
        Err(ParseError::RelativeUrlWithoutBase) => ImageRef::Relative(value),
        Err(_) => ImageRef::Unrenderable,
    }
}

impl ImageRef<'_> {
    /// Normalize without any network access.
    ///
    /// URLs are re-serialized, so scheme and host come out lowercase.
    /// Credential-gated URLs pass through here: without a credential they
    /// are treated like any other absolute URL.
    pub fn normalize_offline(&self) -> String {
        match self {
            ImageRef::SameOrigin(path) => path.to_string(),
            ImageRef::Relative(path) => relative_to_absolute(path),
            ImageRef::Url(url) | ImageRef::CredentialGated(url) => url.to_string(),
            ImageRef::Unrenderable => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Normalize a raw reference without network access. See
/// [`ImageRef::normalize_offline`].
pub fn normalize_offline(raw: &str) -> String {
    classify(raw).normalize_offline()
}

/// Whether a value already satisfies the rendering invariant: a same-origin
/// absolute path or an absolute URL.
pub fn is_normalized(value: &str) -> bool {
    value.starts_with('/') || value.starts_with("http")
}

/// Local path substituted for a credential-gated URL whose fetch failed.
///
/// Uses the path suffix after a `/public` segment when present, otherwise
/// [`PLACEHOLDER_IMAGE`].
pub fn local_fallback_path(url: &Url) -> String {
    PUBLIC_SUFFIX_RE
        .captures(url.path())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

/// Same-origin path for a stored media object.
pub fn media_path(id: &str) -> String {
    format!("{MEDIA_PATH_PREFIX}{id}")
}

fn relative_to_absolute(path: &str) -> String {
    let mut rest = path;
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("../") {
            rest = stripped;
        } else {
            break;
        }
    }
    if rest.is_empty() || rest == "." || rest == ".." {
        return PLACEHOLDER_IMAGE.to_string();
    }
    format!("/{rest}")
}
