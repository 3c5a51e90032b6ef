use crate::foundation::error::{RevealError, RevealResult};

/// Largest list index a path may address. Lists are dense, so larger indices are rejected.
pub const MAX_LIST_INDEX: usize = 1023;

/// One segment of a dotted handle path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// Named child of a keyed container.
    Key(String),
    /// Slot in an ordered list.
    Index(usize),
}

/// Parsed dotted path such as `centerStem` or `leafs.2`.
///
/// Segments made only of ASCII digits address list slots, except the first segment, which is
/// always a key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlePath {
    segments: Vec<PathSegment>,
}

impl HandlePath {
    /// Parse a dotted path. Empty paths and empty segments are rejected.
    pub fn parse(raw: &str) -> RevealResult<Self> {
        if raw.is_empty() {
            return Err(RevealError::registry("handle path is empty"));
        }
        let mut segments = Vec::new();
        for (i, part) in raw.split('.').enumerate() {
            if part.is_empty() {
                return Err(RevealError::registry(format!(
                    "handle path '{raw}' has an empty segment"
                )));
            }
            let is_index = i > 0 && part.bytes().all(|b| b.is_ascii_digit());
            if is_index {
                let idx = part
                    .parse::<usize>()
                    .ok()
                    .filter(|idx| *idx <= MAX_LIST_INDEX)
                    .ok_or_else(|| {
                        RevealError::registry(format!(
                            "list index '{part}' in '{raw}' exceeds {MAX_LIST_INDEX}"
                        ))
                    })?;
                segments.push(PathSegment::Index(idx));
            } else {
                segments.push(PathSegment::Key(part.to_owned()));
            }
        }
        Ok(Self { segments })
    }

    /// Path of list slot `index` under `self`.
    ///
    /// `index` is not bounded here; writes through the registry are.
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Parsed segments, root first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl std::fmt::Display for HandlePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match seg {
                PathSegment::Key(k) => f.write_str(k)?,
                PathSegment::Index(idx) => write!(f, "{idx}")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for HandlePath {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/path.rs"]
mod tests;
