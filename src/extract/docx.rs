//! DOCX text extraction.
//!
//! A DOCX file is a ZIP archive; the document body lives in
//! `word/document.xml`. Text is collected from `w:t` runs, with paragraph
//! ends and explicit breaks mapped to newlines.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractError;

/// Extract the paragraph text of a DOCX document.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractError::Docx(format!("not a DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(format!("missing word/document.xml: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(format!("unreadable word/document.xml: {e}")))?;

    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"br" => text.push('\n'),
                b"tab" => text.push(' '),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let run = e
                    .unescape()
                    .map_err(|e| ExtractError::Docx(format!("bad XML text: {e}")))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(format!("malformed document.xml: {e}"))),
            Ok(_) => {}
        }
    }

    Ok(text)
}
