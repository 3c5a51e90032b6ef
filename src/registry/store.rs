use std::collections::BTreeMap;

use crate::registry::path::{HandlePath, MAX_LIST_INDEX, PathSegment};

/// A node in the registry tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot<H> {
    /// A single primitive; `None` when not yet attached or already detached.
    Handle(Option<H>),
    /// Ordered slots addressed by numeric path segments.
    List(Vec<Slot<H>>),
    /// Named slots addressed by key segments.
    Map(BTreeMap<String, Slot<H>>),
}

impl<H> Slot<H> {
    /// The attached handle, if this slot is a single attached primitive.
    pub fn as_handle(&self) -> Option<&H> {
        match self {
            Self::Handle(h) => h.as_ref(),
            _ => None,
        }
    }

    /// Attached handles in this subtree, depth first in index/key order.
    pub fn attached(&self) -> Vec<&H> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a H>) {
        match self {
            Self::Handle(Some(h)) => out.push(h),
            Self::Handle(None) => {}
            Self::List(items) => items.iter().for_each(|s| s.collect(out)),
            Self::Map(map) => map.values().for_each(|s| s.collect(out)),
        }
    }

    fn ensure_map(&mut self) -> &mut BTreeMap<String, Slot<H>> {
        if !matches!(self, Self::Map(_)) {
            *self = Self::Map(BTreeMap::new());
        }
        match self {
            Self::Map(map) => map,
            _ => unreachable!("slot was just replaced by a map"),
        }
    }

    fn ensure_list(&mut self) -> &mut Vec<Slot<H>> {
        if !matches!(self, Self::List(_)) {
            *self = Self::List(Vec::new());
        }
        match self {
            Self::List(list) => list,
            _ => unreachable!("slot was just replaced by a list"),
        }
    }

    fn write(&mut self, segments: &[PathSegment], handle: Option<H>) {
        let Some((head, rest)) = segments.split_first() else {
            *self = Self::Handle(handle);
            return;
        };
        let child = match head {
            PathSegment::Key(key) => self
                .ensure_map()
                .entry(key.clone())
                .or_insert(Self::Handle(None)),
            PathSegment::Index(idx) => {
                let list = self.ensure_list();
                if list.len() <= *idx {
                    list.resize_with(idx + 1, || Self::Handle(None));
                }
                &mut list[*idx]
            }
        };
        child.write(rest, handle);
    }

    fn read(&self, segments: &[PathSegment]) -> Option<&Self> {
        let Some((head, rest)) = segments.split_first() else {
            return Some(self);
        };
        let child = match (head, self) {
            (PathSegment::Key(key), Self::Map(map)) => map.get(key)?,
            (PathSegment::Index(idx), Self::List(list)) => list.get(*idx)?,
            _ => return None,
        };
        child.read(rest)
    }
}

/// Path-addressable store of drawable handles for one stage.
///
/// Writes to a list slot create or extend the list without disturbing its other indices, and
/// missing intermediate containers are created on the way down. A write to a slot of the wrong
/// shape replaces it. Once closed, the registry is empty and ignores every write.
#[derive(Clone, Debug)]
pub struct HandleRegistry<H> {
    root: Slot<H>,
    closed: bool,
    revision: u64,
}

impl<H> Default for HandleRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> HandleRegistry<H> {
    /// Empty, open registry.
    pub fn new() -> Self {
        Self {
            root: Slot::Map(BTreeMap::new()),
            closed: false,
            revision: 0,
        }
    }

    /// Write `handle` at `path`; `None` marks the primitive as detached.
    ///
    /// Returns whether the write was applied. Malformed paths and writes after
    /// [`HandleRegistry::close`] are dropped.
    pub fn register(&mut self, path: &str, handle: Option<H>) -> bool {
        match HandlePath::parse(path) {
            Ok(parsed) => self.register_path(&parsed, handle),
            Err(err) => {
                tracing::warn!(path, error = %err, "dropping registration for malformed path");
                false
            }
        }
    }

    /// [`HandleRegistry::register`] with an already parsed path.
    pub fn register_path(&mut self, path: &HandlePath, handle: Option<H>) -> bool {
        if self.closed {
            tracing::trace!(%path, "registry closed, ignoring write");
            return false;
        }
        let oversized = path
            .segments()
            .iter()
            .any(|seg| matches!(seg, PathSegment::Index(idx) if *idx > MAX_LIST_INDEX));
        if oversized {
            tracing::warn!(
                %path,
                max = MAX_LIST_INDEX,
                "dropping registration past the list bound"
            );
            return false;
        }
        tracing::trace!(%path, attached = handle.is_some(), "registry write");
        self.root.write(path.segments(), handle);
        self.revision += 1;
        true
    }

    /// Attach `handle` at `path`.
    pub fn attach(&mut self, path: &str, handle: H) -> bool {
        self.register(path, Some(handle))
    }

    /// Mark the primitive at `path` as detached.
    pub fn detach(&mut self, path: &str) -> bool {
        self.register(path, None)
    }

    /// Slot at `path`, or `None` when nothing was written there.
    pub fn get(&self, path: &str) -> Option<&Slot<H>> {
        let parsed = HandlePath::parse(path).ok()?;
        self.get_path(&parsed)
    }

    /// [`HandleRegistry::get`] with an already parsed path.
    pub fn get_path(&self, path: &HandlePath) -> Option<&Slot<H>> {
        self.root.read(path.segments())
    }

    /// The single attached handle at `path`.
    pub fn handle(&self, path: &str) -> Option<&H> {
        self.get(path).and_then(Slot::as_handle)
    }

    /// Every attached handle at or below `path`.
    pub fn handles(&self, path: &str) -> Vec<&H> {
        self.get(path).map(Slot::attached).unwrap_or_default()
    }

    /// Number of attached handles in the whole registry.
    pub fn attached_count(&self) -> usize {
        self.root.attached().len()
    }

    /// Number of applied writes since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drop all contents and refuse further writes.
    pub fn close(&mut self) {
        self.root = Slot::Map(BTreeMap::new());
        self.closed = true;
    }

    /// Whether [`HandleRegistry::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/store.rs"]
mod tests;
