//! PDF export of the plain-text report.
//!
//! Deliberately minimal: wrapped monospace-ish lines of body text, paginated
//! onto US-letter pages. Layout beyond that belongs to clients.

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

const FONT_SIZE: i64 = 11;
const LEADING: i64 = 14;
const MARGIN: i64 = 54;
// US letter: 612 x 792 pt.
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const LINES_PER_PAGE: usize = 48;
const WRAP_COLUMNS: usize = 90;

/// Renders the report text into a simple paginated PDF.
pub fn render_pdf(report: &str) -> Result<Vec<u8>> {
    let lines = wrap_lines(report, WRAP_COLUMNS);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut page_ids: Vec<Object> = Vec::new();
    // Even an empty report gets one page.
    let chunks: Vec<&[String]> = if lines.is_empty() {
        vec![&lines[..]]
    } else {
        lines.chunks(LINES_PER_PAGE).collect()
    };

    for chunk in chunks {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("TL", vec![LEADING.into()]),
            Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()]),
        ];
        for line in chunk {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(to_latin1(line))],
            ));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().context("encoding page content stream")?,
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id.into());
    }

    let page_count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).context("serializing PDF")?;
    Ok(buffer)
}

/// Greedy whitespace wrap at `columns` characters. Overlong unbroken words
/// are hard-split rather than overflowing the page.
fn wrap_lines(text: &str, columns: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    for line in text.lines() {
        if line.chars().count() <= columns {
            wrapped.push(line.to_string());
            continue;
        }
        let mut current = String::new();
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();
            if current_len > 0 && current_len + 1 + word_len > columns {
                wrapped.push(std::mem::take(&mut current));
            }
            if word_len > columns {
                // Hard-split the oversized word.
                let chars: Vec<char> = word.chars().collect();
                for piece in chars.chunks(columns) {
                    wrapped.push(piece.iter().collect());
                }
                continue;
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            wrapped.push(current);
        }
    }
    wrapped
}

/// Helvetica with the default encoding only covers Latin-1; anything outside
/// that range is replaced rather than producing garbled glyphs.
fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}
