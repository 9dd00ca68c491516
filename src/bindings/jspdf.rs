//! jsPDF Bindings
//!
//! Backs the export `DocumentWriter` with the jsPDF UMD bundle
//! (`window.jspdf.jsPDF`, loaded from index.html).

use checklist_core::{DocumentWriter, ExportError, FontWeight, TextAlign, TextColor};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::fonts::{FALLBACK_FONT_FAMILY, FONT_FACES, PDF_FONT_FAMILY};
use super::js_error_message;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, catch, js_namespace = jspdf, js_class = "jsPDF")]
    fn new() -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method, js_class = "jsPDF", js_name = setFontSize)]
    fn set_font_size(this: &JsPdf, size: f64);

    #[wasm_bindgen(method, js_class = "jsPDF", js_name = setFont)]
    fn set_font(this: &JsPdf, name: &str, style: &str);

    #[wasm_bindgen(method, js_class = "jsPDF", js_name = setTextColor)]
    fn set_text_color(this: &JsPdf, r: u8, g: u8, b: u8);

    #[wasm_bindgen(method, catch, js_class = "jsPDF", js_name = text)]
    fn text(this: &JsPdf, text: &JsValue, x: f64, y: f64, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "jsPDF", js_name = splitTextToSize)]
    fn split_text_to_size(this: &JsPdf, text: &str, width: f64) -> Result<js_sys::Array, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "jsPDF", js_name = addPage)]
    fn add_page(this: &JsPdf) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "jsPDF", js_name = addFileToVFS)]
    fn add_file_to_vfs(this: &JsPdf, file_name: &str, data: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "jsPDF", js_name = addFont)]
    fn add_font(this: &JsPdf, file_name: &str, family: &str, style: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter, js_class = "jsPDF")]
    fn internal(this: &JsPdf) -> JsValue;

    #[wasm_bindgen(method, catch, js_class = "jsPDF")]
    fn save(this: &JsPdf, filename: &str) -> Result<JsValue, JsValue>;
}

/// A4 portrait width in mm, used if jsPDF does not report one
const FALLBACK_PAGE_WIDTH: f64 = 210.0;

#[derive(Serialize)]
struct TextOptions {
    align: &'static str,
}

/// One jsPDF document being written
pub struct JsPdfWriter {
    doc: JsPdf,
    font_family: &'static str,
    page_width: f64,
}

impl JsPdfWriter {
    /// Create an empty A4 document with the embedded Unicode font.
    ///
    /// Falls back to `helvetica` if jsPDF rejects the font; Cyrillic text is then unreadable.
    pub fn new() -> Result<Self, ExportError> {
        let doc = JsPdf::new().map_err(|e| ExportError::Unavailable(js_error_message(&e)))?;
        let page_width = read_page_width(&doc).unwrap_or_else(|| {
            log::warn!("[PDF] page width unavailable, assuming {}mm", FALLBACK_PAGE_WIDTH);
            FALLBACK_PAGE_WIDTH
        });
        let font_family = match register_fonts(&doc) {
            Ok(()) => PDF_FONT_FAMILY,
            Err(message) => {
                log::warn!("[PDF] font registration failed, using {}: {}", FALLBACK_FONT_FAMILY, message);
                FALLBACK_FONT_FAMILY
            }
        };
        doc.set_font(font_family, FontWeight::Normal.as_str());
        Ok(Self {
            doc,
            font_family,
            page_width,
        })
    }

    /// False when the built-in font is in use
    pub fn has_unicode_font(&self) -> bool {
        self.font_family == PDF_FONT_FAMILY
    }
}

fn register_fonts(doc: &JsPdf) -> Result<(), String> {
    for face in FONT_FACES {
        doc.add_file_to_vfs(face.file_name, &face.base64())
            .and_then(|_| doc.add_font(face.file_name, PDF_FONT_FAMILY, face.weight.as_str()))
            .map_err(|e| format!("{}: {}", face.file_name, js_error_message(&e)))?;
    }
    Ok(())
}

/// `doc.internal.pageSize.getWidth()`
fn read_page_width(doc: &JsPdf) -> Option<f64> {
    let page_size = js_sys::Reflect::get(&doc.internal(), &JsValue::from_str("pageSize")).ok()?;
    let get_width = js_sys::Reflect::get(&page_size, &JsValue::from_str("getWidth"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    get_width.call0(&page_size).ok()?.as_f64()
}

impl DocumentWriter for JsPdfWriter {
    fn set_font_size(&mut self, size: f64) {
        self.doc.set_font_size(size);
    }

    fn set_font_weight(&mut self, weight: FontWeight) {
        self.doc.set_font(self.font_family, weight.as_str());
    }

    fn set_text_color(&mut self, color: TextColor) {
        let TextColor(r, g, b) = color;
        self.doc.set_text_color(r, g, b);
    }

    fn text(&mut self, lines: &[String], x: f64, y: f64, align: TextAlign) -> Result<(), ExportError> {
        let lines: js_sys::Array = lines.iter().map(|line| JsValue::from_str(line)).collect();
        let options = TextOptions {
            align: match align {
                TextAlign::Left => "left",
                TextAlign::Center => "center",
            },
        };
        let options = serde_wasm_bindgen::to_value(&options).map_err(|e| ExportError::Render(e.to_string()))?;
        self.doc
            .text(&lines, x, y, &options)
            .map(|_| ())
            .map_err(|e| ExportError::Render(js_error_message(&e)))
    }

    fn split_to_width(&mut self, text: &str, width: f64) -> Result<Vec<String>, ExportError> {
        let lines = self
            .doc
            .split_text_to_size(text, width)
            .map_err(|e| ExportError::Render(js_error_message(&e)))?;
        Ok(lines.iter().filter_map(|line| line.as_string()).collect())
    }

    fn add_page(&mut self) -> Result<(), ExportError> {
        self.doc
            .add_page()
            .map(|_| ())
            .map_err(|e| ExportError::Render(js_error_message(&e)))
    }

    fn page_width(&self) -> f64 {
        self.page_width
    }

    fn save(&mut self, filename: &str) -> Result<(), ExportError> {
        self.doc.save(filename).map(|_| ()).map_err(|e| ExportError::Save {
            filename: filename.to_string(),
            message: js_error_message(&e),
        })
    }
}
