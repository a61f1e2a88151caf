//! Reading and writing the JSON string arrays used for manifests and output files.

use std::path::Path;

use crate::errors::{ContentPathsError, Result};
use crate::fs::FileSystem;

/// Load a JSON document whose root is an array of strings.
pub fn load_string_array(fs: &dyn FileSystem, path: &Path) -> Result<Vec<String>> {
    let manifest_error = |message: String| ContentPathsError::ManifestRead {
        path: path.display().to_string(),
        message,
    };

    let content = fs
        .read_to_string(path)
        .map_err(|e| manifest_error(e.to_string()))?;

    serde_json::from_str(&content).map_err(|e| manifest_error(e.to_string()))
}

/// Serialize `values` as a JSON array, pretty-printed unless `minify` is set.
pub fn to_json_array(values: &[String], minify: bool) -> Result<String> {
    let mut json = if minify {
        serde_json::to_string(values)?
    } else {
        serde_json::to_string_pretty(values)?
    };
    json.push('\n');
    Ok(json)
}

/// Write `values` as a JSON array to `path`, replacing whatever was there.
///
/// Returns the serialized document, byte for byte what was written.
pub fn write_string_array(
    fs: &dyn FileSystem,
    path: &Path,
    values: &[String],
    minify: bool,
) -> Result<String> {
    let json = to_json_array(values, minify)?;

    fs.write_atomic(path, &json)
        .map_err(|e| ContentPathsError::OutputWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use std::path::PathBuf;

    #[test]
    fn test_load_string_array() {
        let fs = MockFileSystem::new().with_file("/p/m.json", r#"["a/*.html", "b/**/*.razor"]"#);
        let values = load_string_array(&fs, Path::new("/p/m.json")).unwrap();
        assert_eq!(values, vec!["a/*.html", "b/**/*.razor"]);
    }

    #[test]
    fn test_load_rejects_non_string_arrays() {
        let fs = MockFileSystem::new().with_file("/p/m.json", r#"{"content": ["a"]}"#);
        let err = load_string_array(&fs, Path::new("/p/m.json")).unwrap_err();
        assert!(matches!(err, ContentPathsError::ManifestRead { .. }));

        let fs = MockFileSystem::new().with_file("/p/m.json", "[1, 2]");
        let err = load_string_array(&fs, Path::new("/p/m.json")).unwrap_err();
        assert!(matches!(err, ContentPathsError::ManifestRead { .. }));
    }

    #[test]
    fn test_load_missing_file_is_manifest_error() {
        let fs = MockFileSystem::new();
        let err = load_string_array(&fs, Path::new("/p/m.json")).unwrap_err();
        assert!(err.to_string().contains("/p/m.json"));
    }

    #[test]
    fn test_write_pretty_and_minified() {
        let fs = MockFileSystem::new();
        let values = vec!["./a/*.html".to_string(), "./b/*.css".to_string()];

        let minified = write_string_array(&fs, Path::new("/out.json"), &values, true).unwrap();
        assert_eq!(minified, "[\"./a/*.html\",\"./b/*.css\"]\n");
        assert_eq!(fs.contents(&PathBuf::from("/out.json")).unwrap(), minified);

        let returned = write_string_array(&fs, Path::new("/out.json"), &values, false).unwrap();
        let pretty = fs.contents(&PathBuf::from("/out.json")).unwrap();
        assert_eq!(pretty, returned);
        insta::assert_snapshot!(pretty.trim_end(), @r###"
        [
          "./a/*.html",
          "./b/*.css"
        ]
        "###);
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(to_json_array(&[], false).unwrap(), "[]\n");
    }
}
