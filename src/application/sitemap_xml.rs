//! Sitemap XML serialization.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use tracing::error;

use crate::application::sitemap_entry::format_priority;
use crate::domain::entities::{SitemapDocument, SitemapEntry};

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Writes a complete `urlset` document, declaration included.
///
/// Element text is escaped by `quick-xml`.
pub fn write_sitemap<W: Write>(
    writer: &mut Writer<W>,
    document: &SitemapDocument,
) -> io::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element("urlset")
        .with_attribute(("xmlns", SITEMAP_NAMESPACE))
        .write_inner_content(|w| {
            for entry in &document.entries {
                write_entry(w, entry)?;
            }
            Ok(())
        })?;
    Ok(())
}

fn write_entry<W: Write>(writer: &mut Writer<W>, entry: &SitemapEntry) -> io::Result<()> {
    writer.create_element("url").write_inner_content(|w| {
        w.create_element("loc")
            .write_text_content(BytesText::new(&entry.loc))?;
        if let Some(lastmod) = &entry.lastmod {
            w.create_element("lastmod")
                .write_text_content(BytesText::new(lastmod))?;
        }
        if let Some(changefreq) = entry.changefreq {
            w.create_element("changefreq")
                .write_text_content(BytesText::new(changefreq.as_str()))?;
        }
        if let Some(priority) = entry.priority {
            w.create_element("priority")
                .write_text_content(BytesText::new(&format_priority(priority)))?;
        }
        Ok(())
    })?;
    Ok(())
}

/// Renders a complete `urlset` document as a string.
///
/// The output starts with the XML declaration and ends with `</urlset>`.
pub fn render_sitemap(document: &SitemapDocument) -> String {
    let mut writer = Writer::new_with_indent(
        Vec::with_capacity(128 + document.len() * 192),
        b' ',
        2,
    );
    if let Err(e) = write_sitemap(&mut writer, document) {
        error!("Failed to serialize sitemap: {}", e);
    }

    String::from_utf8(writer.into_inner())
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
