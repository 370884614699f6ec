//! Conversion of uploaded documents into plain text

use crate::error::{Result, ResumeParserError};
use crate::input::file_detector::FileType;
use pulldown_cmark::{Event, Parser, Tag};
use std::panic;

pub trait DocumentDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfDecoder;

impl DocumentDecoder for PdfDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed inputs instead of returning Err
        let outcome = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ResumeParserError::Decode(format!(
                "Failed to extract text from PDF: {}",
                e
            ))),
            Err(_) => Err(ResumeParserError::Decode(
                "PDF extractor aborted on malformed input".to_string(),
            )),
        }
    }
}

/// UTF-8 text; invalid sequences are replaced rather than rejected.
pub struct PlainTextDecoder;

impl DocumentDecoder for PlainTextDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String> {
        let text = String::from_utf8_lossy(bytes);
        Ok(text.trim_start_matches('\u{feff}').to_string())
    }
}

/// Markdown rendered to plain text.
///
/// Block elements end with a blank line so paragraph-based extraction still
/// sees them; list items become `- ` bullets on their own lines.
pub struct MarkdownDecoder;

impl DocumentDecoder for MarkdownDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String> {
        let source = PlainTextDecoder.decode(bytes)?;
        Ok(Self::render(&source))
    }
}

impl MarkdownDecoder {
    fn render(source: &str) -> String {
        let mut text = String::new();
        let mut list_depth = 0usize;

        for event in Parser::new(source) {
            match event {
                Event::Start(Tag::List(_)) => list_depth += 1,
                Event::End(Tag::List(_)) => {
                    list_depth = list_depth.saturating_sub(1);
                    if list_depth == 0 {
                        text.push('\n');
                    }
                }
                Event::Start(Tag::Item) => {
                    if !text.is_empty() && !text.ends_with('\n') {
                        text.push('\n');
                    }
                    text.push_str("- ");
                }
                Event::End(Tag::Item) => {
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                Event::End(Tag::Paragraph) | Event::End(Tag::CodeBlock(_)) => {
                    text.push_str(if list_depth > 0 { "\n" } else { "\n\n" });
                }
                Event::End(Tag::Heading(..)) => text.push_str("\n\n"),
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                _ => {}
            }
        }

        text.trim_end().to_string()
    }
}

/// Decode `bytes` according to `file_type`.
pub fn decode_to_text(file_type: FileType, bytes: &[u8]) -> Result<String> {
    match file_type {
        FileType::Pdf => PdfDecoder.decode(bytes),
        FileType::Text => PlainTextDecoder.decode(bytes),
        FileType::Markdown => MarkdownDecoder.decode(bytes),
        FileType::Unknown => Err(ResumeParserError::UnsupportedType(
            "cannot decode a document of unknown type".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_lossy() {
        let text = PlainTextDecoder.decode(b"Jane\xff Doe").unwrap();
        assert_eq!(text, "Jane\u{fffd} Doe");
        assert_eq!(PlainTextDecoder.decode("\u{feff}hi".as_bytes()).unwrap(), "hi");
    }

    #[test]
    fn test_markdown_keeps_blocks_and_bullets() {
        let source = "# Jane Doe\n\nBackend engineer.\n\n## Experience\n\n\
                      * Led the **billing** rewrite\n* Won `hackathon` 2020\n";
        let text = MarkdownDecoder.decode(source.as_bytes()).unwrap();

        assert_eq!(
            text,
            "Jane Doe\n\nBackend engineer.\n\nExperience\n\n- Led the billing rewrite\n- Won hackathon 2020"
        );
    }

    #[test]
    fn test_garbage_pdf_is_decode_error() {
        let err = PdfDecoder.decode(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ResumeParserError::Decode(_)));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = decode_to_text(FileType::Unknown, b"text").unwrap_err();
        assert!(matches!(err, ResumeParserError::UnsupportedType(_)));
    }
}
