use std::fmt;

/// An HTTP request path (or path prefix) as an ordered sequence of segments.
///
/// Segments are compared by exact string equality; there is no wildcard or
/// case-insensitive matching. The root path parses to an empty segment
/// sequence, which is a prefix of every path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

// === impl Path ===

impl Path {
    /// Returns true if every segment of `self` equals the corresponding
    /// leading segment of `request`.
    ///
    /// A prefix with more segments than the request path never matches.
    pub fn is_prefix_of(&self, request: &Path) -> bool {
        if self.segments.len() > request.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(request.segments.iter())
            .all(|(prefix, segment)| prefix == segment)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
