//! Core document properties (`docProps/core.xml`).

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;
use crate::model::Metadata;

/// Parse the core-properties part into document metadata.
///
/// Dates are W3CDTF (a profile of RFC 3339); values that fail to parse are
/// dropped rather than failing the whole part, since Word itself tolerates
/// them.
pub(crate) fn parse_core_properties(xml: &str) -> Result<Metadata> {
    let mut reader = Reader::from_str(xml);
    let mut metadata = Metadata::default();
    let mut current: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                current = Field::from_local_name(e.local_name().as_ref());
            }
            Event::Text(t) => {
                if let Some(field) = current {
                    let value = t.unescape()?.into_owned();
                    field.assign(&mut metadata, value);
                }
            }
            Event::End(_) => current = None,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(metadata)
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Creator,
    Subject,
    Keywords,
    LastModifiedBy,
    Revision,
    Created,
    Modified,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Self::Title),
            b"creator" => Some(Self::Creator),
            b"subject" => Some(Self::Subject),
            b"keywords" => Some(Self::Keywords),
            b"lastModifiedBy" => Some(Self::LastModifiedBy),
            b"revision" => Some(Self::Revision),
            b"created" => Some(Self::Created),
            b"modified" => Some(Self::Modified),
            _ => None,
        }
    }

    fn assign(self, metadata: &mut Metadata, value: String) {
        match self {
            Self::Title => metadata.title = Some(value),
            Self::Creator => metadata.creator = Some(value),
            Self::Subject => metadata.subject = Some(value),
            Self::Keywords => metadata.keywords = Some(value),
            Self::LastModifiedBy => metadata.last_modified_by = Some(value),
            Self::Revision => metadata.revision = Some(value),
            Self::Created => metadata.created = parse_date(&value),
            Self::Modified => metadata.modified = parse_date(&value),
        }
    }
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const CORE: &str = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>",
        "<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" ",
        "xmlns:dc=\"http://purl.org/dc/elements/1.1/\" ",
        "xmlns:dcterms=\"http://purl.org/dc/terms/\" ",
        "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
        "<dc:title>Mini-Project Report</dc:title>",
        "<dc:creator>LENOVO</dc:creator>",
        "<cp:lastModifiedBy>LENOVO</cp:lastModifiedBy>",
        "<cp:revision>4</cp:revision>",
        "<dcterms:created xsi:type=\"dcterms:W3CDTF\">2024-11-02T09:30:00Z</dcterms:created>",
        "<dcterms:modified xsi:type=\"dcterms:W3CDTF\">2024-11-05T14:00:00Z</dcterms:modified>",
        "</cp:coreProperties>",
    );

    #[test]
    fn test_parse_core_properties() {
        let metadata = parse_core_properties(CORE).unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Mini-Project Report"));
        assert_eq!(metadata.creator.as_deref(), Some("LENOVO"));
        assert_eq!(metadata.revision.as_deref(), Some("4"));
        assert_eq!(metadata.created.unwrap().year(), 2024);
        assert!(metadata.subject.is_none());
    }

    #[test]
    fn test_bad_date_is_dropped() {
        let xml = concat!(
            "<cp:coreProperties xmlns:cp=\"ns\" xmlns:dcterms=\"ns2\">",
            "<dcterms:created>not a date</dcterms:created>",
            "</cp:coreProperties>",
        );
        let metadata = parse_core_properties(xml).unwrap();
        assert!(metadata.created.is_none());
    }
}
