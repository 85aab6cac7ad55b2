/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the marker prefixes, defaults, exit codes and
/// user-facing message fragments shared by both binaries.
/// Bounding box line markers
pub mod markers {
    /// Integer bounding box comment, coordinates are truncated integers
    pub const BOUNDING_BOX: &str = "%%BoundingBox: ";
    /// High resolution bounding box comment, coordinates are floats
    pub const HIRES_BOUNDING_BOX: &str = "%%HiResBoundingBox: ";
}

/// Default configuration values
pub mod defaults {
    /// Default scale factor for bounding box files
    pub const FACTOR: f64 = 2.0;
    /// Default extension of the files to rescale
    pub const EXTENSION: &str = "xbb";
    /// Default root directory
    pub const DIRECTORY: &str = ".";
    /// Extension given to side-car files while they are being written
    pub const SIDECAR_EXTENSION: &str = "ybb";
    /// Fixed multiplier applied to HTML width/height attributes
    pub const HTML_FACTOR: f64 = 1.9;
}

/// Configuration file locations
pub mod config_files {
    /// Name of the config file looked up in the working directory
    pub const FILE_NAME: &str = ".resize-xbb.toml";
    /// How many parent directories are searched for the config file
    pub const PARENT_SEARCH_DEPTH: usize = 3;
}

/// Validation limits
pub mod limits {
    /// Maximum number of fixed decimals accepted for HiRes values
    pub const MAX_PRECISION: usize = 17;
}

/// Process exit codes
pub mod exit_codes {
    /// Normal completion, including `--help`
    pub const SUCCESS: i32 = 0;
    /// Runtime failure (I/O, conversion, configuration)
    pub const FAILURE: i32 = 1;
    /// Bad option syntax
    pub const USAGE: i32 = 2;
    /// More than one positional directory argument
    pub const TOO_MANY_DIRECTORIES: i32 = 3;
}

/// Report message fragments
pub mod messages {
    /// Appended to the processed count when nothing was written
    pub const TRIAL_NOTICE: &str = " (NOTE: TRIAL MODE - nothing done)";
    /// Separator printed before each file in debug mode
    pub const DEBUG_SEPARATOR: &str =
        "----------------------------------------------------------------";
    /// Prefix for fatal user-facing errors
    pub const ERROR_PREFIX: &str = "** Error:";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_prefixes_end_with_space() {
        assert!(markers::BOUNDING_BOX.ends_with(' '));
        assert!(markers::HIRES_BOUNDING_BOX.ends_with(' '));
        assert!(!markers::HIRES_BOUNDING_BOX.starts_with(markers::BOUNDING_BOX));
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::FAILURE,
            exit_codes::USAGE,
            exit_codes::TOO_MANY_DIRECTORIES,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_sidecar_extension_differs_from_default() {
        assert_ne!(defaults::SIDECAR_EXTENSION, defaults::EXTENSION);
    }
}
