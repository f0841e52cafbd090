#![forbid(unsafe_code)]

//! Streaming tokenizer over quick-xml's raw events.

use crate::reader::RawTokenReader;
use crate::token::{Attribute, QName, StartElement, Token};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use ulriksdal_core::{Error, Result};

/// Tokenizes an XML document into raw [`Token`]s.
///
/// Names keep their prefixes untouched and end tags are not matched
/// against start tags, mirroring what a raw decoder hands out before any
/// namespace processing. Self-closing tags produce a start/end token
/// pair. The XML declaration is not reported.
pub struct XmlTokenizer<'a> {
    reader: Reader<&'a [u8]>,
    /// End token synthesized for a self-closing element.
    pending_end: Option<QName>,
    depth: usize,
    finished: bool,
}

impl<'a> XmlTokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut reader = Reader::from_str(text);
        // End tags are reported as-is; balance checking is left to the
        // consumer, which sees the same raw stream a captured buffer
        // replays.
        reader.config_mut().check_end_names = false;
        Self {
            reader,
            pending_end: None,
            depth: 0,
            finished: false,
        }
    }

    fn start_element(&self, start: &BytesStart<'_>) -> Result<StartElement> {
        let name = split_name(start.name().as_ref())?;
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::XmlParse(e.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|e| Error::XmlParse(e.to_string()))?;
            attributes.push(Attribute::new(
                split_name(attr.key.as_ref())?,
                value.into_owned(),
            ));
        }
        Ok(StartElement { name, attributes })
    }
}

impl RawTokenReader for XmlTokenizer<'_> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(name) = self.pending_end.take() {
            self.depth -= 1;
            return Ok(Some(Token::EndElement(name)));
        }
        if self.finished {
            return Ok(None);
        }
        loop {
            match self.reader.read_event() {
                Ok(Event::Start(start)) => {
                    let elem = self.start_element(&start)?;
                    self.depth += 1;
                    return Ok(Some(Token::StartElement(elem)));
                }
                Ok(Event::Empty(start)) => {
                    let elem = self.start_element(&start)?;
                    self.pending_end = Some(elem.name.clone());
                    self.depth += 1;
                    return Ok(Some(Token::StartElement(elem)));
                }
                Ok(Event::End(end)) => {
                    let name = split_name(end.name().as_ref())?;
                    if self.depth == 0 {
                        return Err(Error::XmlParse(format!(
                            "close tag without open tag: {}",
                            name.qualified()
                        )));
                    }
                    self.depth -= 1;
                    return Ok(Some(Token::EndElement(name)));
                }
                Ok(Event::Text(text)) => {
                    let text = text
                        .unescape()
                        .map_err(|e| Error::XmlParse(e.to_string()))?;
                    return Ok(Some(Token::CharData(text.into_owned())));
                }
                Ok(Event::CData(cdata)) => {
                    let text = String::from_utf8_lossy(cdata.as_ref()).into_owned();
                    return Ok(Some(Token::CharData(text)));
                }
                Ok(Event::Comment(comment)) => {
                    let text = String::from_utf8_lossy(comment.as_ref()).into_owned();
                    return Ok(Some(Token::Comment(text)));
                }
                Ok(Event::PI(pi)) => {
                    let raw = String::from_utf8_lossy(pi.as_ref()).into_owned();
                    let (target, content) =
                        match raw.split_once(|c: char| c.is_ascii_whitespace()) {
                            Some((target, rest)) => (target.to_owned(), Some(rest.to_owned())),
                            None => (raw, None),
                        };
                    return Ok(Some(Token::ProcessingInstruction { target, content }));
                }
                Ok(Event::DocType(text)) => {
                    let text = String::from_utf8_lossy(text.as_ref()).into_owned();
                    return Ok(Some(Token::Directive(text)));
                }
                // The XML declaration is parser metadata, not content.
                Ok(Event::Decl(_)) => continue,
                Ok(Event::Eof) => {
                    self.finished = true;
                    if self.depth > 0 {
                        return Err(Error::UnexpectedEof);
                    }
                    return Ok(None);
                }
                // Remaining event kinds carry nothing we tokenize.
                #[allow(unreachable_patterns)]
                Ok(_) => continue,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
            }
        }
    }
}

fn split_name(raw: &[u8]) -> Result<QName> {
    let name = std::str::from_utf8(raw)
        .map_err(|e| Error::XmlParse(format!("invalid UTF-8 in name: {e}")))?;
    Ok(match name.split_once(':') {
        Some((prefix, local)) => QName::new(prefix, local),
        None => QName::new("", name),
    })
}
