//! Render hints for image galleries.

use serde::Serialize;

/// Number of leading gallery images loaded eagerly.
pub const DEFAULT_EAGER_THRESHOLD: usize = 3;

/// Browser `loading` attribute value for an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingStrategy {
    Eager,
    Lazy,
}

/// Eager for the first `threshold` items, lazy afterwards.
pub fn loading_strategy(index: usize, threshold: usize) -> LoadingStrategy {
    if index < threshold {
        LoadingStrategy::Eager
    } else {
        LoadingStrategy::Lazy
    }
}

/// Width class of an image container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerWidth {
    Full,
    Half,
    Third,
    Quarter,
    Auto,
}

/// HTML `sizes` attribute for a container width.
pub fn responsive_sizes(width: ContainerWidth) -> &'static str {
    match width {
        ContainerWidth::Full => "100vw",
        ContainerWidth::Half => "(max-width: 768px) 100vw, 50vw",
        ContainerWidth::Third => "(max-width: 768px) 100vw, (max-width: 1024px) 50vw, 33vw",
        ContainerWidth::Quarter => "(max-width: 640px) 100vw, (max-width: 1024px) 50vw, 25vw",
        ContainerWidth::Auto => "(max-width: 768px) 100vw, (max-width: 1200px) 50vw, 33vw",
    }
}
