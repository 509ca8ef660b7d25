use crate::error::CanvasError;
use lopdf::content::Content;
use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::{dictionary, Dictionary, Object, ObjectId, Stream};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

const PRODUCER: &str = concat!("mdpdf ", env!("CARGO_PKG_VERSION"));

/// Writes PDF objects to `W` as they are produced, keeping only the small
/// document-level dictionaries in memory until [`StreamingPdfWriter::finish`].
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    xref: Xref,
    max_id: u32,
    catalog_id: ObjectId,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%\u{e2}\u{e3}\u{cf}\u{d3}\n", version).as_bytes())?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        Ok(Self {
            writer,
            xref: Xref::new(0, XrefType::CrossReferenceTable),
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    /// Writes `object` immediately under a fresh id.
    pub fn write_object(&mut self, object: Object) -> io::Result<ObjectId> {
        let id = self.new_object_id();
        encode::write_indirect_object(&mut self.writer, id, &object, &mut self.xref)?;
        Ok(id)
    }

    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, CanvasError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.write_object(Object::Stream(stream))?)
    }

    /// Writes a page dictionary referencing `content_id` and records it in the page tree.
    pub fn write_page(&mut self, content_id: ObjectId, width: f32, height: f32) -> io::Result<ObjectId> {
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), width.into(), height.into()],
            "Contents" => Object::Reference(content_id),
            "Resources" => self.resources_id,
        };
        let id = self.write_object(page.into())?;
        self.page_ids.push(id);
        Ok(id)
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffered_objects.insert(self.pages_id, pages_dict.into());
        self.buffered_objects.insert(
            self.catalog_id,
            dictionary! { "Type" => "Catalog", "Pages" => self.pages_id }.into(),
        );

        let info_id = self.write_object(Object::Dictionary(dictionary! {
            "Producer" => Object::string_literal(PRODUCER),
        }))?;

        for (id, object) in &self.buffered_objects {
            encode::write_indirect_object(&mut self.writer, *id, object, &mut self.xref)?;
        }

        let xref_start = self.writer.stream_position()?;
        self.xref.size = self.max_id + 1;
        encode::write_xref(&mut self.writer, &self.xref, self.max_id)?;

        let trailer = dictionary! {
            "Size" => self.xref.size as i64,
            "Root" => self.catalog_id,
            "Info" => info_id,
        };
        encode::write_trailer(&mut self.writer, &trailer, xref_start)?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

mod encode {
    use super::*;
    use lopdf::StringFormat;

    /// Writes `id 0 obj ... endobj` and records its byte offset in `xref`.
    pub fn write_indirect_object<W: Write + Seek>(
        writer: &mut W,
        id: ObjectId,
        object: &Object,
        xref: &mut Xref,
    ) -> io::Result<()> {
        let offset = writer.stream_position()?;
        xref.insert(id.0, XrefEntry::Normal { offset: offset as u32, generation: id.1 });
        let mut out = format!("{} {} obj\n", id.0, id.1).into_bytes();
        push_object(&mut out, object);
        out.extend_from_slice(b"\nendobj\n");
        writer.write_all(&out)
    }

    pub fn write_trailer<W: Write>(writer: &mut W, trailer: &Dictionary, xref_start: u64) -> io::Result<()> {
        let mut out = b"trailer\n".to_vec();
        push_dictionary(&mut out, trailer);
        out.extend_from_slice(format!("\nstartxref\n{}\n%%EOF", xref_start).as_bytes());
        writer.write_all(&out)
    }

    fn push_object(out: &mut Vec<u8>, object: &Object) {
        match object {
            Object::Null => out.extend_from_slice(b"null"),
            Object::Boolean(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => out.extend_from_slice(i.to_string().as_bytes()),
            Object::Real(r) => push_real(out, *r),
            Object::Name(n) => push_name(out, n),
            Object::String(s, StringFormat::Literal) => {
                out.push(b'(');
                for &byte in s {
                    match byte {
                        b'(' | b')' | b'\\' => out.extend_from_slice(&[b'\\', byte]),
                        b'\n' => out.extend_from_slice(b"\\n"),
                        b'\r' => out.extend_from_slice(b"\\r"),
                        _ => out.push(byte),
                    }
                }
                out.push(b')');
            }
            Object::String(s, StringFormat::Hexadecimal) => {
                out.push(b'<');
                for byte in s {
                    out.extend_from_slice(format!("{:02X}", byte).as_bytes());
                }
                out.push(b'>');
            }
            Object::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    push_object(out, item);
                }
                out.push(b']');
            }
            Object::Dictionary(dict) => push_dictionary(out, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                push_dictionary(out, &dict);
                out.extend_from_slice(b"\nstream\n");
                out.extend_from_slice(&stream.content);
                out.extend_from_slice(b"\nendstream");
            }
            Object::Reference(id) => out.extend_from_slice(format!("{} {} R", id.0, id.1).as_bytes()),
        }
    }

    /// Keys keep their insertion order, so output is stable for a given build
    /// sequence.
    fn push_dictionary(out: &mut Vec<u8>, dict: &Dictionary) {
        out.extend_from_slice(b"<<");
        for (key, value) in dict.iter() {
            push_name(out, key);
            out.push(b' ');
            push_object(out, value);
            out.push(b' ');
        }
        out.extend_from_slice(b">>");
    }

    /// Delimiters, whitespace and bytes outside `!`..`~` are written as `#xx`.
    fn push_name(out: &mut Vec<u8>, name: &[u8]) {
        out.push(b'/');
        for &byte in name {
            let regular = (b'!'..=b'~').contains(&byte)
                && !matches!(byte, b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%');
            if regular {
                out.push(byte);
            } else {
                out.extend_from_slice(format!("#{:02X}", byte).as_bytes());
            }
        }
    }

    /// At most three decimals, without trailing zeros.
    fn push_real(out: &mut Vec<u8>, value: f32) {
        let value = if value.is_finite() { value } else { 0.0 };
        let text = format!("{:.3}", value);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        out.extend_from_slice(if text == "-0" { b"0" } else { text.as_bytes() });
    }

    /// Writes a single-section cross-reference table covering ids `0..=max_id`.
    pub fn write_xref<W: Write>(writer: &mut W, xref: &Xref, max_id: u32) -> io::Result<()> {
        let mut out = format!("xref\n0 {}\n0000000000 65535 f \n", max_id + 1);
        for id in 1..=max_id {
            match xref.entries.get(&id) {
                Some(XrefEntry::Normal { offset, generation }) => {
                    out.push_str(&format!("{:010} {:05} n \n", offset, generation))
                }
                _ => out.push_str("0000000000 65535 f \n"),
            }
        }
        writer.write_all(out.as_bytes())
    }

}
