//! PubChem response documents.
//!
//! Only the fields on the lookup paths are modelled. Everything else in the
//! responses is ignored, and list fields that are absent deserialize as empty
//! lists so that a missing link and an empty link read the same way.

use crate::types::CompoundId;
use serde::Deserialize;

/// Body of `pug/compound/name/{name}/cids/JSON`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdentifierListResponse {
    #[serde(rename = "IdentifierList")]
    pub identifier_list: Option<IdentifierList>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdentifierList {
    #[serde(rename = "CID", default)]
    pub cids: Vec<CompoundId>,
}

impl IdentifierListResponse {
    /// First identifier of the list, if any.
    pub fn first_cid(&self) -> Option<&CompoundId> {
        self.identifier_list.as_ref()?.cids.first()
    }
}

/// Body of `pug_view/data/compound/{cid}/JSON`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PugViewResponse {
    #[serde(rename = "Record")]
    pub record: Option<Record>,
}

/// Top level of a PUG View record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Section", default)]
    pub sections: Vec<Section>,
}

/// A node of the section tree, identified by its `TOCHeading`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Section {
    #[serde(rename = "TOCHeading")]
    pub heading: Option<String>,

    #[serde(rename = "Section", default)]
    pub sections: Vec<Section>,

    #[serde(rename = "Information", default)]
    pub information: Vec<Information>,
}

impl Section {
    /// First direct subsection with the given heading.
    pub fn subsection(&self, heading: &str) -> Option<&Self> {
        find_by_heading(&self.sections, heading)
    }
}

/// One information entry of a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Information {
    #[serde(rename = "Value")]
    pub value: Option<InformationValue>,
}

impl Information {
    /// `Value.StringWithMarkup[0].String`, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.value
            .as_ref()?
            .string_with_markup
            .first()?
            .string
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InformationValue {
    #[serde(rename = "StringWithMarkup", default)]
    pub string_with_markup: Vec<StringWithMarkup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StringWithMarkup {
    #[serde(rename = "String")]
    pub string: Option<String>,
}

/// First section in `sections` whose heading equals `heading`.
pub fn find_by_heading<'a>(sections: &'a [Section], heading: &str) -> Option<&'a Section> {
    sections
        .iter()
        .find(|section| section.heading.as_deref() == Some(heading))
}
