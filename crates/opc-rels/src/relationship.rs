use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Writer;

use crate::registry::RelKey;
use crate::{IdRegistry, RelationshipType, RelsError, SourceId};

/// Whether a relationship target is a package part or an external URI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TargetMode {
    #[default]
    Internal,
    External,
}

impl TargetMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            TargetMode::Internal => "Internal",
            TargetMode::External => "External",
        }
    }
}

impl FromStr for TargetMode {
    type Err = RelsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Internal" => Ok(TargetMode::Internal),
            "External" => Ok(TargetMode::External),
            other => Err(RelsError::InvalidTargetMode(other.to_string())),
        }
    }
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One manifest entry linking a source part to a target resource.
///
/// Validated at construction; immutable afterwards except for the one-shot
/// identifier memoization. The identifier is resolved on first access against
/// the calling thread's [`IdRegistry`] (or an explicit one via
/// [`Relationship::id_in`]): equal identities — same [`SourceId`], same type,
/// and for external mode the same target — always resolve to the same `rId`
/// within a registry, and distinct identities never collide.
#[derive(Debug, Clone)]
pub struct Relationship {
    source: SourceId,
    rel_type: RelationshipType,
    target: String,
    target_mode: TargetMode,
    id: OnceLock<String>,
}

impl Relationship {
    /// Internal-mode relationship to a package part.
    pub fn new(
        source: SourceId,
        rel_type: RelationshipType,
        target: impl Into<String>,
    ) -> Result<Self, RelsError> {
        Self::with_mode(source, rel_type, target, TargetMode::Internal)
    }

    /// External-mode relationship to a URI outside the package.
    pub fn external(
        source: SourceId,
        rel_type: RelationshipType,
        target: impl Into<String>,
    ) -> Result<Self, RelsError> {
        Self::with_mode(source, rel_type, target, TargetMode::External)
    }

    pub fn with_mode(
        source: SourceId,
        rel_type: RelationshipType,
        target: impl Into<String>,
        target_mode: TargetMode,
    ) -> Result<Self, RelsError> {
        let target = target.into();
        if target.is_empty() {
            return Err(RelsError::EmptyTarget);
        }
        Ok(Relationship {
            source,
            rel_type,
            target,
            target_mode,
            id: OnceLock::new(),
        })
    }

    /// Construct from unvalidated strings, as read from a caller that deals
    /// in raw attribute values. Fails fast: an unrecognized type URI is
    /// [`RelsError::InvalidType`], an explicit mode other than
    /// `Internal`/`External` is [`RelsError::InvalidTargetMode`], and no
    /// partially-built value is observable on error.
    pub fn from_raw(
        source: SourceId,
        type_uri: &str,
        target: impl Into<String>,
        target_mode: Option<&str>,
    ) -> Result<Self, RelsError> {
        let rel_type = RelationshipType::from_uri(type_uri)?;
        let mode = match target_mode {
            Some(raw) => raw.parse()?,
            None => TargetMode::Internal,
        };
        Self::with_mode(source, rel_type, target, mode)
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    pub fn rel_type(&self) -> RelationshipType {
        self.rel_type
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn target_mode(&self) -> TargetMode {
        self.target_mode
    }

    fn key(&self) -> RelKey {
        let external_target = match self.target_mode {
            TargetMode::External => Some(self.target.as_str()),
            TargetMode::Internal => None,
        };
        RelKey::new(self.source, self.rel_type, external_target)
    }

    /// The assigned identifier, resolved against the calling thread's
    /// registry on first access and memoized thereafter.
    pub fn id(&self) -> &str {
        self.id
            .get_or_init(|| IdRegistry::with_current(|ids| ids.resolve(&self.key())))
    }

    /// Like [`Relationship::id`], but resolves against an explicitly passed
    /// registry instead of the thread-current one. Whichever accessor runs
    /// first wins the memoization.
    pub fn id_in(&self, ids: &mut IdRegistry) -> &str {
        self.id.get_or_init(|| ids.resolve(&self.key()))
    }

    /// Write the `<Relationship/>` element.
    ///
    /// Attribute order is fixed (`Id`, `Type`, `Target`, then `TargetMode`
    /// only when external) for diffable output. The target is treated as raw
    /// text and escaped in a single pass, so `?foo=1&bar=2` always renders as
    /// `?foo=1&amp;bar=2`.
    pub fn write_xml<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<(), RelsError> {
        let mut elem = BytesStart::new("Relationship");
        elem.push_attribute(("Id", self.id()));
        elem.push_attribute(("Type", self.rel_type.uri()));
        elem.push_attribute(("Target", self.target.as_str()));
        if self.target_mode == TargetMode::External {
            elem.push_attribute(("TargetMode", self.target_mode.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }

    /// Render the element as a standalone string.
    pub fn to_xml_string(&self) -> Result<String, RelsError> {
        let mut writer = Writer::new(Vec::new());
        self.write_xml(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}
