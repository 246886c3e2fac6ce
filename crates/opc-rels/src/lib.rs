//! Relationship entries for Open Packaging Convention (OPC) `.rels` parts.
//!
//! An OOXML package wires its parts together through relationship manifests:
//! each source part owns a `.rels` part listing `<Relationship/>` elements
//! that point at other parts (or external URIs) by auto-assigned `rId{n}`
//! identifiers. This crate covers the writer-side core of that scheme:
//!
//! - [`Relationship`]: a validated manifest entry that resolves its own
//!   identifier and serializes to a `<Relationship/>` element with a
//!   correctly escaped `Target` attribute.
//! - [`IdRegistry`]: the per-thread identifier store. Relationships with
//!   equal identity (same [`SourceId`], same [`RelationshipType`], and — for
//!   external targets only — the same target) resolve to the same `rId`;
//!   distinct identities get sequential, collision-free ids. Each thread
//!   gets its own registry, so concurrent package builds never share a
//!   counter.
//! - [`Relationships`]: a `.rels` manifest container that renders the full
//!   part and refuses duplicate entries for equal identities.
//!
//! Package assembly, part payloads, and ZIP I/O are out of scope; callers
//! embed the rendered elements into whatever packaging pipeline they use.

mod error;
mod manifest;
mod registry;
mod rel_type;
mod relationship;
mod source;

pub use error::RelsError;
pub use manifest::{Relationships, NS_RELATIONSHIPS};
pub use registry::{IdRegistry, RelKey, REL_ID_PREFIX};
pub use rel_type::RelationshipType;
pub use relationship::{Relationship, TargetMode};
pub use source::SourceId;
