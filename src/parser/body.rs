//! WordprocessingML body parsing.
//!
//! The parser interprets only what the fill operations need: paragraphs and
//! their runs. Every other element is captured as a raw byte span of the
//! original XML and emitted verbatim on save. Spans are sliced out of the
//! source string by byte position, so capture costs nothing beyond the copy.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::{BodyItem, ParaChild, Paragraph, Run};

/// Parsed `word/document.xml`: the bytes around `<w:body>` plus its items.
pub(crate) struct ParsedDocumentXml {
    /// Everything up to and including the `<w:body>` start tag.
    pub header: String,
    /// Body children in document order.
    pub items: Vec<BodyItem>,
    /// Everything from `</w:body>` to the end of the part.
    pub trailer: String,
}

/// Parse the main document part.
pub(crate) fn parse_document_xml(xml: &str) -> Result<ParsedDocumentXml> {
    let mut reader = Reader::from_str(xml);

    let body_inner_start;
    loop {
        match reader.read_event()? {
            Event::Start(ref e) if e.local_name().as_ref() == b"body" => {
                body_inner_start = reader.buffer_position();
                break;
            }
            Event::Eof => return Err(Error::Xml("document has no <w:body> element".into())),
            _ => {}
        }
    }

    let mut items = Vec::new();
    loop {
        let pos = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"p" => {
                reader.read_to_end(e.name())?;
                let raw = &xml[pos..reader.buffer_position()];
                items.push(BodyItem::Paragraph(parse_paragraph(raw)?));
            }
            Event::Empty(e) if e.local_name().as_ref() == b"p" => {
                let raw = &xml[pos..reader.buffer_position()];
                items.push(BodyItem::Paragraph(Paragraph::from_parsed(
                    raw.to_string(),
                    None,
                    Vec::new(),
                )));
            }
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
                items.push(BodyItem::Raw(xml[pos..reader.buffer_position()].to_string()));
            }
            Event::Empty(_) => {
                items.push(BodyItem::Raw(xml[pos..reader.buffer_position()].to_string()));
            }
            Event::Text(_) | Event::CData(_) | Event::Comment(_) | Event::PI(_) => {
                items.push(BodyItem::Raw(xml[pos..reader.buffer_position()].to_string()));
            }
            Event::End(e) if e.local_name().as_ref() == b"body" => {
                return Ok(ParsedDocumentXml {
                    header: xml[..body_inner_start].to_string(),
                    items,
                    trailer: xml[pos..].to_string(),
                });
            }
            Event::End(_) => {
                return Err(Error::Xml("unbalanced element inside <w:body>".into()));
            }
            Event::Eof => {
                return Err(Error::Xml("unexpected end of document.xml".into()));
            }
            Event::Decl(_) | Event::DocType(_) => {}
        }
    }
}

/// Parse one `<w:p>` fragment into a paragraph.
fn parse_paragraph(raw: &str) -> Result<Paragraph> {
    let mut reader = Reader::from_str(raw);

    // Consume the opening <w:p> tag
    match reader.read_event()? {
        Event::Start(_) => {}
        Event::Empty(_) => {
            return Ok(Paragraph::from_parsed(raw.to_string(), None, Vec::new()))
        }
        _ => return Err(Error::Xml("expected a <w:p> element".into())),
    }

    let mut props = None;
    let mut children = Vec::new();
    loop {
        let pos = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"pPr" => {
                reader.read_to_end(e.name())?;
                props = Some(raw[pos..reader.buffer_position()].to_string());
            }
            Event::Empty(e) if e.local_name().as_ref() == b"pPr" => {
                props = Some(raw[pos..reader.buffer_position()].to_string());
            }
            Event::Start(e) if e.local_name().as_ref() == b"r" => {
                reader.read_to_end(e.name())?;
                let run_raw = &raw[pos..reader.buffer_position()];
                children.push(ParaChild::Run(parse_run(run_raw)?));
            }
            Event::Empty(e) if e.local_name().as_ref() == b"r" => {
                let run_raw = &raw[pos..reader.buffer_position()];
                children.push(ParaChild::Run(Run::from_parsed(
                    run_raw.to_string(),
                    None,
                    String::new(),
                )));
            }
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
                children.push(ParaChild::Raw(raw[pos..reader.buffer_position()].to_string()));
            }
            Event::Empty(_) | Event::Text(_) | Event::CData(_) | Event::Comment(_) => {
                children.push(ParaChild::Raw(raw[pos..reader.buffer_position()].to_string()));
            }
            Event::End(_) => break,
            Event::Eof => return Err(Error::Xml("unterminated <w:p> element".into())),
            Event::Decl(_) | Event::DocType(_) | Event::PI(_) => {}
        }
    }
    Ok(Paragraph::from_parsed(raw.to_string(), props, children))
}

/// Parse one `<w:r>` fragment into a run.
///
/// Breaks read as `\n` and tabs as `\t`, the same view of run text the
/// heading heuristics expect. Non-text children are skipped here; they are
/// still preserved through the retained raw bytes as long as the run is
/// never mutated.
fn parse_run(raw: &str) -> Result<Run> {
    let mut reader = Reader::from_str(raw);

    match reader.read_event()? {
        Event::Start(_) => {}
        _ => return Err(Error::Xml("expected a <w:r> element".into())),
    }

    let mut props = None;
    let mut text = String::new();
    loop {
        let pos = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"rPr" => {
                reader.read_to_end(e.name())?;
                props = Some(raw[pos..reader.buffer_position()].to_string());
            }
            Event::Empty(e) if e.local_name().as_ref() == b"rPr" => {
                props = Some(raw[pos..reader.buffer_position()].to_string());
            }
            Event::Start(e) if e.local_name().as_ref() == b"t" => loop {
                match reader.read_event()? {
                    Event::Text(t) => text.push_str(&t.unescape()?),
                    Event::CData(c) => {
                        text.push_str(&String::from_utf8(c.into_inner().into_owned())?)
                    }
                    Event::End(_) => break,
                    Event::Eof => {
                        return Err(Error::Xml("unterminated <w:t> element".into()))
                    }
                    _ => {}
                }
            },
            Event::Start(e) if matches!(e.local_name().as_ref(), b"br" | b"cr") => {
                reader.read_to_end(e.name())?;
                text.push('\n');
            }
            Event::Empty(e) if matches!(e.local_name().as_ref(), b"br" | b"cr") => {
                text.push('\n');
            }
            Event::Start(e) if e.local_name().as_ref() == b"tab" => {
                reader.read_to_end(e.name())?;
                text.push('\t');
            }
            Event::Empty(e) if e.local_name().as_ref() == b"tab" => text.push('\t'),
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
            }
            Event::End(_) => break,
            Event::Eof => return Err(Error::Xml("unterminated <w:r> element".into())),
            _ => {}
        }
    }
    Ok(Run::from_parsed(raw.to_string(), props, text))
}
