use std::ffi::OsStr;

use crate::output::OutputFormat;

/// What to do with a selection once it is made.
///
/// Snapshotted when a capture starts, so widget changes mid-capture do not
/// affect it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub close_after_capture: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            close_after_capture: true,
        }
    }
}

impl OutputSettings {
    /// Settings for the direct binary. Only the first argument counts, and
    /// one that is not valid UTF-8 is treated like any other unknown name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let format = args
            .into_iter()
            .next()
            .and_then(|arg| arg.as_ref().to_str().map(OutputFormat::parse_lenient))
            .unwrap_or_default();

        Self {
            format,
            close_after_capture: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        assert_eq!(OutputSettings::from_args(["jpg"]).format, OutputFormat::Jpg);
        assert_eq!(OutputSettings::from_args(["JPG"]).format, OutputFormat::Jpg);
        assert_eq!(OutputSettings::from_args(["jpeg"]).format, OutputFormat::Png);
        assert_eq!(OutputSettings::from_args(["JPEG"]).format, OutputFormat::Png);
        assert_eq!(OutputSettings::from_args(["png"]).format, OutputFormat::Png);
        assert_eq!(OutputSettings::from_args(["webp"]).format, OutputFormat::Png);
        assert_eq!(
            OutputSettings::from_args(Vec::<String>::new()).format,
            OutputFormat::Png
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_arg_falls_back_to_png() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let arg = OsString::from_vec(vec![0xff, b'j', b'p', b'g']);
        let settings = OutputSettings::from_args([arg, OsString::from("jpg")]);
        assert_eq!(settings.format, OutputFormat::Png);
    }

    #[test]
    fn test_extra_args_ignored() {
        let settings = OutputSettings::from_args(["jpg", "png", "--verbose"]);
        assert_eq!(settings.format, OutputFormat::Jpg);
        assert!(settings.close_after_capture);
    }
}
