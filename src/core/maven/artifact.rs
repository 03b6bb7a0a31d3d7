use std::fmt;

use crate::core::error::{CatalogError, CatalogResult};

/// Extension used when none is requested.
pub const DEFAULT_EXTENSION: &str = "jar";

/// Represents a fully parsed Maven coordinate.
///
/// Supported formats:
///   `groupId:artifactId:version`
///   `groupId:artifactId:version:classifier`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenArtifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: Option<String>,
}

impl MavenArtifact {
    /// Parse a Maven coordinate string.
    ///
    /// # Examples
    /// ```
    /// use fabric_catalog::core::maven::MavenArtifact;
    ///
    /// let a = MavenArtifact::parse("net.fabricmc:intermediary:1.21.1:v2").unwrap();
    /// assert_eq!(a.group_id, "net.fabricmc");
    /// assert_eq!(a.classifier.as_deref(), Some("v2"));
    /// ```
    pub fn parse(coord: &str) -> CatalogResult<Self> {
        let parts: Vec<&str> = coord.split(':').collect();

        match parts.as_slice() {
            [group, artifact, version] => Ok(Self {
                group_id: group.to_string(),
                artifact_id: artifact.to_string(),
                version: version.to_string(),
                classifier: None,
            }),
            [group, artifact, version, classifier] => Ok(Self {
                group_id: group.to_string(),
                artifact_id: artifact.to_string(),
                version: version.to_string(),
                classifier: Some(classifier.to_string()),
            }),
            _ => Err(CatalogError::InvalidCoordinate(coord.to_string())),
        }
    }

    /// Percent-encoded group path (`net/fabricmc`).
    ///
    /// Dots become separators only after encoding, so they never show up
    /// as `%2E`.
    pub fn group_path(&self) -> String {
        urlencoding::encode(&self.group_id).replace('.', "/")
    }

    /// Build the artifact filename.
    ///
    /// `artifactId-version[-classifier].extension`
    pub fn filename(&self, extension: &str) -> String {
        match &self.classifier {
            Some(c) => format!("{}-{}-{}.{}", self.artifact_id, self.version, c, extension),
            None => format!("{}-{}.{}", self.artifact_id, self.version, extension),
        }
    }

    /// Construct the full URL for this artifact under the given repository base.
    ///
    /// The base is concatenated as-is, so it must already end with `/`.
    ///
    /// Template:
    /// `<repo><group_path>/<artifact_id>/<version>/<filename>`
    pub fn url(&self, repo_base: &str, extension: &str) -> String {
        format!(
            "{}{}/{}/{}/{}",
            repo_base,
            self.group_path(),
            urlencoding::encode(&self.artifact_id),
            urlencoding::encode(&self.version),
            urlencoding::encode(&self.filename(extension)),
        )
    }
}

/// Format a coordinate straight to its repository URL.
pub fn format_maven_url(repo_base: &str, coord: &str, extension: &str) -> CatalogResult<String> {
    Ok(MavenArtifact::parse(coord)?.url(repo_base, extension))
}

impl fmt::Display for MavenArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.classifier {
            Some(c) => write!(
                f,
                "{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.version, c
            ),
            None => write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version),
        }
    }
}
