//! TMDB image URL construction.

/// Base URL for TMDB-hosted images.
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Stand-in URL used when an item has no image path.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/500x281?text=No+Image";

/// Image width variants the renderer requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// 500px-wide variant, used for tiles and overlays.
    W500,
    /// Full-resolution original, used for banner backdrops.
    Original,
}

impl ImageSize {
    /// URL path segment for this size.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::W500 => "w500",
            Self::Original => "original",
        }
    }
}

/// Builds the URL for a TMDB image path, or the placeholder when absent.
///
/// API paths carry a leading slash (`/abc.jpg`); an absent or empty path
/// yields [`PLACEHOLDER_IMAGE_URL`] instead of an invalid request target.
#[must_use]
pub fn image_url(path: Option<&str>, size: ImageSize) -> String {
    path.filter(|p| !p.is_empty()).map_or_else(
        || String::from(PLACEHOLDER_IMAGE_URL),
        |p| format!("{IMAGE_BASE_URL}{}{p}", size.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_w500() {
        // Arrange
        let path = Some("/xOMo8BRK7PfcJv9JCnx7s5hj0PX.jpg");

        // Act
        let url = image_url(path, ImageSize::W500);

        // Assert
        assert_eq!(
            url,
            "https://image.tmdb.org/t/p/w500/xOMo8BRK7PfcJv9JCnx7s5hj0PX.jpg"
        );
    }

    #[test]
    fn test_image_url_original() {
        // Arrange
        let path = Some("/17TTFFAXcCqR4Jive09vEyj1Cyg.jpg");

        // Act
        let url = image_url(path, ImageSize::Original);

        // Assert
        assert_eq!(
            url,
            "https://image.tmdb.org/t/p/original/17TTFFAXcCqR4Jive09vEyj1Cyg.jpg"
        );
    }

    #[test]
    fn test_missing_path_uses_placeholder() {
        // Arrange & Act
        let url = image_url(None, ImageSize::W500);

        // Assert
        assert_eq!(url, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_empty_path_uses_placeholder() {
        // Arrange & Act
        let url = image_url(Some(""), ImageSize::Original);

        // Assert
        assert_eq!(url, PLACEHOLDER_IMAGE_URL);
    }
}
