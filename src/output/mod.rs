//! Output module: cropping, encoding and naming saved screenshots.

pub mod crop;
pub mod paths;

pub use crop::{crop, crop_and_save, crop_file_and_save, save};
pub use paths::{default_screenshots_dir, ensure_dir, screenshot_file_name, screenshot_path};

/// Encoding for saved screenshots
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpg,
}

impl OutputFormat {
    /// Choices in the order the settings window lists them
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Png, OutputFormat::Jpg]
    }

    /// Parse a user-supplied name; only `jpg` selects JPEG, anything else is PNG
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("jpg") {
            OutputFormat::Jpg
        } else {
            OutputFormat::Png
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpg => "image/jpeg",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(OutputFormat::parse_lenient("jpg"), OutputFormat::Jpg);
        assert_eq!(OutputFormat::parse_lenient("JPG"), OutputFormat::Jpg);
        assert_eq!(OutputFormat::parse_lenient("png"), OutputFormat::Png);
        assert_eq!(OutputFormat::parse_lenient("jpeg"), OutputFormat::Png);
        assert_eq!(OutputFormat::parse_lenient("gif"), OutputFormat::Png);
        assert_eq!(OutputFormat::parse_lenient(""), OutputFormat::Png);
    }

    #[test]
    fn test_mime_matches_extension() {
        for format in OutputFormat::all() {
            assert!(format.mime_type().starts_with("image/"));
        }
        assert_eq!(OutputFormat::Jpg.mime_type(), "image/jpeg");
    }
}
