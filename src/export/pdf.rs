//! PDF Document Writer
//! Wraps a rendered chart raster as a single-page PDF.
//!
//! Uses direct object/xref generation: one page sized to the image in
//! points, with the image drawn over the whole page as a zlib-compressed
//! DeviceRGB XObject.

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::RgbImage;
use std::io::{self, Write};

/// Object ids, in the order they are emitted.
const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const PAGE_ID: usize = 3;
const CONTENTS_ID: usize = 4;
const IMAGE_ID: usize = 5;

/// Build a one-page PDF showing `image` at full page size.
pub fn single_image_document(image: &RgbImage) -> io::Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let mut doc = PdfBuilder::new();

    doc.object(
        CATALOG_ID,
        format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>").as_bytes(),
    );
    doc.object(
        PAGES_ID,
        format!("<< /Type /Pages /Kids [{PAGE_ID} 0 R] /Count 1 >>").as_bytes(),
    );
    doc.object(
        PAGE_ID,
        format!(
            "<< /Type /Page /Parent {PAGES_ID} 0 R /MediaBox [0 0 {width} {height}] \
             /Resources << /XObject << /Im0 {IMAGE_ID} 0 R >> >> /Contents {CONTENTS_ID} 0 R >>"
        )
        .as_bytes(),
    );

    let content = format!("q\n{width} 0 0 {height} 0 0 cm\n/Im0 Do\nQ");
    doc.stream(CONTENTS_ID, "", content.as_bytes());
    doc.stream(
        IMAGE_ID,
        &format!(
            "/Type /XObject /Subtype /Image /Width {width} /Height {height} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /FlateDecode"
        ),
        &deflate(image.as_raw())?,
    );

    Ok(doc.finish(CATALOG_ID))
}

fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

struct PdfBuilder {
    out: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfBuilder {
    fn new() -> Self {
        let mut out = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");
        // Binary marker so transfer tools treat the file as binary.
        out.extend_from_slice(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n']);
        Self {
            out,
            offsets: Vec::new(),
        }
    }

    fn object(&mut self, id: usize, body: &[u8]) {
        debug_assert_eq!(id, self.offsets.len() + 1);
        self.offsets.push(self.out.len());
        let _ = writeln!(self.out, "{id} 0 obj");
        self.out.extend_from_slice(body);
        self.out.extend_from_slice(b"\nendobj\n");
    }

    fn stream(&mut self, id: usize, dict: &str, data: &[u8]) {
        let mut body = Vec::with_capacity(data.len() + dict.len() + 64);
        let _ = write!(body, "<< {dict} /Length {} >>\nstream\n", data.len());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\nendstream");
        self.object(id, &body);
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        let xref_offset = self.out.len();
        let size = self.offsets.len() + 1;
        let _ = write!(self.out, "xref\n0 {size}\n0000000000 65535 f \n");
        for offset in &self.offsets {
            let _ = writeln!(self.out, "{offset:010} 00000 n ");
        }
        let _ = write!(
            self.out,
            "trailer\n<< /Size {size} /Root {root} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
        );
        self.out
    }
}
