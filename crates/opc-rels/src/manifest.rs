use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::{Relationship, RelsError};

/// Namespace of the `.rels` manifest root element.
pub const NS_RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// The relationships manifest for one source part.
///
/// Entries whose identity resolves to an already-present identifier are
/// dropped on [`Relationships::push`], so re-adding an equal relationship
/// never duplicates a manifest entry.
#[derive(Debug, Default)]
pub struct Relationships {
    items: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rel` unless an entry with the same resolved identifier already
    /// exists. Returns the identifier either way.
    pub fn push(&mut self, rel: Relationship) -> String {
        let id = rel.id().to_string();
        if self.find_by_id(&id).is_none() {
            self.items.push(rel);
        }
        id
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Relationship> {
        self.items.iter().find(|rel| rel.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.items.iter()
    }

    /// Render the complete `.rels` part: XML declaration plus the namespaced
    /// `<Relationships>` root wrapping each entry.
    pub fn to_xml_string(&self) -> Result<String, RelsError> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

        let mut root = BytesStart::new("Relationships");
        root.push_attribute(("xmlns", NS_RELATIONSHIPS));
        writer.write_event(Event::Start(root))?;

        for rel in &self.items {
            rel.write_xml(&mut writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("Relationships")))?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RelationshipType, SourceId};

    #[test]
    fn equal_identity_does_not_duplicate_entries() {
        let source = SourceId::new();
        let mut rels = Relationships::new();

        let a = rels.push(
            Relationship::new(source, RelationshipType::Worksheet, "target").unwrap(),
        );
        let b = rels.push(
            Relationship::new(source, RelationshipType::Worksheet, "../target").unwrap(),
        );

        assert_eq!(a, b);
        assert_eq!(rels.len(), 1);
    }

    #[test]
    fn renders_a_namespaced_manifest() {
        let source = SourceId::new();
        let mut rels = Relationships::new();
        rels.push(Relationship::new(source, RelationshipType::Styles, "styles.xml").unwrap());
        rels.push(
            Relationship::external(source, RelationshipType::Hyperlink, "https://example.com/")
                .unwrap(),
        );

        let xml = rels.to_xml_string().unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "Relationships");
        assert_eq!(root.tag_name().namespace(), Some(NS_RELATIONSHIPS));
        assert_eq!(root.children().filter(|n| n.is_element()).count(), 2);
    }
}
