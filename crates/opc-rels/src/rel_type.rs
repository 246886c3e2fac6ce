use std::fmt;
use std::str::FromStr;

use crate::RelsError;

/// The closed set of relationship-type URIs this crate recognizes.
///
/// Construction from a URI string fails with [`RelsError::InvalidType`] for
/// anything outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    /// The package-level `officeDocument` relationship (workbook part).
    OfficeDocument,
    Worksheet,
    Styles,
    Theme,
    SharedStrings,
    Drawing,
    VmlDrawing,
    Image,
    Chart,
    Hyperlink,
    Comments,
    Table,
    PivotTable,
    PivotCacheDefinition,
    CoreProperties,
    ExtendedProperties,
}

impl RelationshipType {
    pub const ALL: &'static [RelationshipType] = &[
        RelationshipType::OfficeDocument,
        RelationshipType::Worksheet,
        RelationshipType::Styles,
        RelationshipType::Theme,
        RelationshipType::SharedStrings,
        RelationshipType::Drawing,
        RelationshipType::VmlDrawing,
        RelationshipType::Image,
        RelationshipType::Chart,
        RelationshipType::Hyperlink,
        RelationshipType::Comments,
        RelationshipType::Table,
        RelationshipType::PivotTable,
        RelationshipType::PivotCacheDefinition,
        RelationshipType::CoreProperties,
        RelationshipType::ExtendedProperties,
    ];

    /// The schema URI written to the `Type` attribute.
    pub const fn uri(self) -> &'static str {
        match self {
            RelationshipType::OfficeDocument => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument"
            }
            RelationshipType::Worksheet => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet"
            }
            RelationshipType::Styles => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles"
            }
            RelationshipType::Theme => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme"
            }
            RelationshipType::SharedStrings => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings"
            }
            RelationshipType::Drawing => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing"
            }
            RelationshipType::VmlDrawing => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/vmlDrawing"
            }
            RelationshipType::Image => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image"
            }
            RelationshipType::Chart => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/chart"
            }
            RelationshipType::Hyperlink => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink"
            }
            RelationshipType::Comments => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/comments"
            }
            RelationshipType::Table => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/table"
            }
            RelationshipType::PivotTable => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/pivotTable"
            }
            RelationshipType::PivotCacheDefinition => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/pivotCacheDefinition"
            }
            RelationshipType::CoreProperties => {
                "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties"
            }
            RelationshipType::ExtendedProperties => {
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties"
            }
        }
    }

    /// Look up the enum member for a `Type` attribute URI.
    pub fn from_uri(uri: &str) -> Result<Self, RelsError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.uri() == uri)
            .ok_or_else(|| RelsError::InvalidType(uri.to_string()))
    }
}

impl FromStr for RelationshipType {
    type Err = RelsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_uri(s)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}
