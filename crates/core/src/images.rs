//! Image provider seam.
//!
//! Products carry an opaque image reference. Turning it into something
//! displayable is the job of an [`ImageProvider`]; when that fails the caller
//! substitutes a fixed fallback instead of surfacing an error. There is no
//! retry: one fallback substitution is final.

use serde::Serialize;
use url::Url;

use crate::catalog::demo::HERO_IMAGE;

/// Hosts the storefront loads remote images from.
pub const ALLOWED_IMAGE_HOSTS: &[&str] = &["images.unsplash.com", "plus.unsplash.com"];

/// Reasons an image reference cannot be displayed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The reference is not a URL.
    #[error("invalid image url {reference:?}: {reason}")]
    InvalidUrl {
        /// The reference as given.
        reference: String,
        /// Parser message.
        reason: String,
    },
    /// Only https images are loaded.
    #[error("image url must use https, got {0}")]
    InsecureScheme(String),
    /// The host is not on the allow-list.
    #[error("image host not allowed: {0}")]
    HostNotAllowed(String),
}

/// An image ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayImage {
    /// Source URL or descriptor to render.
    pub src: String,
    /// Whether this is the fallback rather than the product's own image.
    pub is_fallback: bool,
}

/// Resolves product image references.
pub trait ImageProvider {
    /// Turn `reference` into a displayable image.
    ///
    /// # Errors
    ///
    /// Returns an [`ImageError`] if the reference cannot be displayed.
    fn fetch(&self, reference: &str) -> Result<DisplayImage, ImageError>;
}

/// Accepts https URLs on an allow-list of hosts.
#[derive(Debug, Clone)]
pub struct RemoteImageProvider {
    allowed_hosts: Vec<String>,
}

impl RemoteImageProvider {
    /// Provider accepting the given hosts.
    #[must_use]
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_hosts: hosts.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for RemoteImageProvider {
    fn default() -> Self {
        Self::new(ALLOWED_IMAGE_HOSTS.iter().copied())
    }
}

impl ImageProvider for RemoteImageProvider {
    fn fetch(&self, reference: &str) -> Result<DisplayImage, ImageError> {
        let url = Url::parse(reference).map_err(|e| ImageError::InvalidUrl {
            reference: reference.to_owned(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "https" {
            return Err(ImageError::InsecureScheme(url.scheme().to_owned()));
        }

        let host = url.host_str().unwrap_or_default();
        if !self.allowed_hosts.iter().any(|allowed| allowed == host) {
            return Err(ImageError::HostNotAllowed(host.to_owned()));
        }

        Ok(DisplayImage {
            src: url.into(),
            is_fallback: false,
        })
    }
}

/// Resolves images, substituting a fallback on failure.
#[derive(Debug, Clone)]
pub struct ImageResolver<P> {
    provider: P,
    fallback: String,
}

impl<P: ImageProvider> ImageResolver<P> {
    /// Resolver using `provider` and the given fallback reference.
    pub fn new(provider: P, fallback: impl Into<String>) -> Self {
        Self {
            provider,
            fallback: fallback.into(),
        }
    }

    /// The fallback reference.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Resolve `reference`; never fails.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> DisplayImage {
        match self.provider.fetch(reference) {
            Ok(image) => image,
            Err(error) => {
                tracing::warn!(%error, reference, "image unavailable, using fallback");
                DisplayImage {
                    src: self.fallback.clone(),
                    is_fallback: true,
                }
            }
        }
    }
}

impl Default for ImageResolver<RemoteImageProvider> {
    fn default() -> Self {
        Self::new(RemoteImageProvider::default(), HERO_IMAGE)
    }
}
