use super::{VisitorBucket, VisitorKind};
use crate::refs::{self, RefSection, Resolution};
use crate::{Location, WalkError};
use serde_json::{Map, Value};
use std::collections::{HashSet, VecDeque};

/// The parts of a walk that differ between document families.
pub(crate) trait WalkDialect: Sized {
    type Kind: VisitorKind;
    type Section: RefSection;

    /// Kind under which `$ref` nodes are recorded
    const REFERENCE: Self::Kind;

    /// Walk a section member at its canonical location
    fn expand<'a>(
        walker: &mut Walker<'a, Self>,
        section: Self::Section,
        node: &'a Value,
        location: &Location,
    ) -> Result<(), WalkError>;
}

/// Depth-first walk state shared by both dialects.
///
/// Internal references are queued as they are met and expanded later, each
/// target at most once, so shared and cyclic references terminate.
pub(crate) struct Walker<'a, D: WalkDialect> {
    root: &'a Value,
    bucket: VisitorBucket<'a, D::Kind>,
    expanded: HashSet<(D::Section, String)>,
    pending: VecDeque<(D::Section, &'a str)>,
}

impl<'a, D: WalkDialect> Walker<'a, D> {
    pub(crate) fn new(root: &'a Value) -> Self {
        Self {
            root,
            bucket: VisitorBucket::new(),
            expanded: HashSet::new(),
            pending: VecDeque::new(),
        }
    }

    pub(crate) const fn root(&self) -> &'a Value {
        self.root
    }

    pub(crate) fn finish(self) -> VisitorBucket<'a, D::Kind> {
        self.bucket
    }

    pub(crate) fn visit(&mut self, kind: D::Kind, node: &'a Value, location: &Location) {
        self.bucket.push(kind, node, location.clone());
    }

    /// Record `node` as a reference if it is one.
    ///
    /// Internal references are queued for expansion against `section`; with
    /// no section the reference is only recorded. Returns whether `node` was
    /// a reference, in which case callers must not descend into it.
    pub(crate) fn reference(
        &mut self,
        section: Option<D::Section>,
        node: &'a Value,
        location: &Location,
    ) -> bool {
        let Some(reference) = refs::reference_of(node) else {
            return false;
        };
        self.visit(D::REFERENCE, node, location);
        if let Some(section) = section {
            if refs::is_internal(reference) {
                self.pending.push_back((section, reference));
            }
        }
        true
    }

    /// Expand every queued reference not expanded yet
    pub(crate) fn drain(&mut self) -> Result<(), WalkError> {
        while let Some((section, reference)) = self.pending.pop_front() {
            match refs::resolve(self.root, section, reference) {
                Resolution::Internal(target) => {
                    self.expand_member(section, target.name, target.node, &target.location)?;
                }
                Resolution::External => {}
                Resolution::Unresolved => {
                    tracing::warn!(reference, "Skipping unresolved reference");
                }
            }
        }
        Ok(())
    }

    /// Walk a section member unless it was already expanded
    pub(crate) fn expand_member(
        &mut self,
        section: D::Section,
        name: String,
        node: &'a Value,
        location: &Location,
    ) -> Result<(), WalkError> {
        if !self.expanded.insert((section, name)) {
            return Ok(());
        }
        D::expand(self, section, node, location)
    }

    /// Walk every member of the section map found at `location`
    pub(crate) fn expand_section(
        &mut self,
        section: D::Section,
        members: &'a Value,
        location: &Location,
    ) -> Result<(), WalkError> {
        for (name, member) in object(members, location)? {
            self.expand_member(section, name.clone(), member, &location.child(name))?;
        }
        Ok(())
    }
}

pub(crate) fn object<'a>(
    node: &'a Value,
    location: &Location,
) -> Result<&'a Map<String, Value>, WalkError> {
    node.as_object().ok_or_else(|| WalkError::UnexpectedShape {
        location: location.clone(),
        expected: "an object",
    })
}

pub(crate) fn array<'a>(node: &'a Value, location: &Location) -> Result<&'a [Value], WalkError> {
    node.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| WalkError::UnexpectedShape {
            location: location.clone(),
            expected: "an array",
        })
}

/// Call `f` for each element of the array at `parent[key]`, if present
pub(crate) fn each_item<'a, F>(
    parent: &'a Map<String, Value>,
    key: &str,
    location: &Location,
    mut f: F,
) -> Result<(), WalkError>
where
    F: FnMut(&'a Value, Location) -> Result<(), WalkError>,
{
    let Some(items) = parent.get(key) else {
        return Ok(());
    };
    let location = location.child(key);
    for (index, item) in array(items, &location)?.iter().enumerate() {
        f(item, location.index(index))?;
    }
    Ok(())
}

/// Call `f` for each member of the map at `parent[key]`, if present.
///
/// Every key is a member name, including ones starting with `x-`.
pub(crate) fn each_entry<'a, F>(
    parent: &'a Map<String, Value>,
    key: &str,
    location: &Location,
    mut f: F,
) -> Result<(), WalkError>
where
    F: FnMut(&'a str, &'a Value, Location) -> Result<(), WalkError>,
{
    let Some(members) = parent.get(key) else {
        return Ok(());
    };
    let location = location.child(key);
    for (name, member) in object(members, &location)? {
        f(name, member, location.child(name))?;
    }
    Ok(())
}

pub(crate) fn is_extension(key: &str) -> bool {
    key.starts_with("x-")
}

/// Schemas may be booleans in JSON Schema; those have nothing to visit
pub(crate) const fn is_boolean_schema(node: &Value) -> bool {
    matches!(node, Value::Bool(_))
}
