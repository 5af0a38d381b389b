//! Resolved paths
//!
//! A [`ResolvedPath`] is the unambiguous location the resolver settled on:
//! one segment per key or index actually stepped through, with dotted keys
//! kept whole. Callers usually want the plain string form from
//! [`ResolvedPath::keys`], which renders array steps as decimal strings.

use std::fmt;

use serde::{Serialize, Serializer};

/// Individual step in a resolved path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member key, exactly as present in the value
    Member(String),
    /// Array position
    Index(usize),
}

impl PathSegment {
    /// Key form of this segment; indices render as decimal strings
    #[must_use]
    pub fn to_key(&self) -> String {
        match self {
            PathSegment::Member(name) => name.clone(),
            PathSegment::Index(index) => index.to_string(),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Member(name) => {
                f.write_str("['")?;
                for ch in name.chars() {
                    if ch == '\'' || ch == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{ch}")?;
                }
                f.write_str("']")
            }
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Ordered keys and indices identifying one location in a value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    segments: Vec<PathSegment>,
}

impl ResolvedPath {
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Get the path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the path naming the root value itself
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Keys in order, array indices as decimal strings
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.segments.iter().map(PathSegment::to_key).collect()
    }

    /// Consume the path into its keys
    #[must_use]
    pub fn into_keys(self) -> Vec<String> {
        self.segments
            .into_iter()
            .map(|segment| match segment {
                PathSegment::Member(name) => name,
                PathSegment::Index(index) => index.to_string(),
            })
            .collect()
    }

    /// Get the parent path (all segments except the last)
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self::new(init.to_vec()))
    }

    /// Check if this path lies strictly below `ancestor`
    #[inline]
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &ResolvedPath) -> bool {
        self.segments.len() > ancestor.segments.len()
            && self.segments.starts_with(&ancestor.segments)
    }

    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, descendant: &ResolvedPath) -> bool {
        descendant.is_descendant_of(self)
    }

    /// RFC 6901 JSON Pointer for this location (`/google.com/a/1`)
    ///
    /// The result can be handed straight to `serde_json::Value::pointer`.
    #[must_use]
    pub fn to_pointer(&self) -> String {
        let mut pointer = String::new();
        for segment in &self.segments {
            pointer.push('/');
            match segment {
                PathSegment::Member(name) => {
                    pointer.push_str(&name.replace('~', "~0").replace('/', "~1"));
                }
                PathSegment::Index(index) => pointer.push_str(&index.to_string()),
            }
        }
        pointer
    }
}

/// Canonical bracket form, e.g. `$['google.com']['a'][1]`
impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Serializes as the array of keys callers expect (`["google.com","a","1"]`)
impl Serialize for ResolvedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.segments.iter().map(PathSegment::to_key))
    }
}

impl From<ResolvedPath> for Vec<String> {
    fn from(path: ResolvedPath) -> Self {
        path.into_keys()
    }
}

impl<'a> IntoIterator for &'a ResolvedPath {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
