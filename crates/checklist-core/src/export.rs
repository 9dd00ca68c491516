//! Checklist Export
//!
//! Greedy top-to-bottom layout of the checklist onto a paginated document.
//! Page breaks are decided only when the cursor has already passed the
//! bottom threshold, so a wrapped block may run past it on the same page.

use chrono::NaiveDate;

use crate::document::ChecklistDocument;
use crate::error::ExportError;
use crate::seed::CATEGORIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// RGB text color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColor(pub u8, pub u8, pub u8);

impl TextColor {
    pub const BLACK: TextColor = TextColor(0, 0, 0);
    pub const MUTED: TextColor = TextColor(100, 100, 100);
}

/// Document generation capability (jsPDF in the browser)
pub trait DocumentWriter {
    fn set_font_size(&mut self, size: f64);

    fn set_font_weight(&mut self, weight: FontWeight);

    fn set_text_color(&mut self, color: TextColor);

    /// Write `lines` starting at baseline `y`, one line height apart
    fn text(&mut self, lines: &[String], x: f64, y: f64, align: TextAlign) -> Result<(), ExportError>;

    /// Word-wrap `text` to `width` using the current font
    fn split_to_width(&mut self, text: &str, width: f64) -> Result<Vec<String>, ExportError>;

    fn add_page(&mut self) -> Result<(), ExportError>;

    fn page_width(&self) -> f64;

    fn save(&mut self, filename: &str) -> Result<(), ExportError>;
}

/// Layout constants in document units (mm on A4)
#[derive(Debug, Clone, PartialEq)]
pub struct ExportLayout {
    pub margin: f64,
    /// Cursor position at the top of each page
    pub top: f64,
    /// Cursor position past which a new page is started
    pub page_bottom: f64,
    pub line_height: f64,
    /// Advance after the title line
    pub title_gap: f64,
    /// Advance after the date line
    pub date_gap: f64,
    /// Advance after the overall progress line
    pub summary_gap: f64,
    /// Advance after a category header
    pub header_gap: f64,
    pub item_gap: f64,
    pub category_gap: f64,
    /// Extra left offset for descriptions
    pub description_indent: f64,
    pub title_size: f64,
    pub meta_size: f64,
    pub header_size: f64,
    pub item_size: f64,
    pub description_size: f64,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            margin: 20.0,
            top: 20.0,
            page_bottom: 270.0,
            line_height: 6.0,
            title_gap: 10.0,
            date_gap: 7.0,
            summary_gap: 15.0,
            header_gap: 8.0,
            item_gap: 3.0,
            category_gap: 5.0,
            description_indent: 6.0,
            title_size: 20.0,
            meta_size: 12.0,
            header_size: 14.0,
            item_size: 11.0,
            description_size: 9.0,
        }
    }
}

/// Result of a finished export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub filename: String,
    pub pages: usize,
}

/// `checklist-YYYY-MM-DD.pdf`
pub fn export_filename(date: NaiveDate) -> String {
    format!("checklist-{}.pdf", date.format("%Y-%m-%d"))
}

/// Lay out `doc` onto `writer` and save it under a dated filename
pub fn export_checklist<W: DocumentWriter>(
    doc: &ChecklistDocument,
    writer: &mut W,
    layout: &ExportLayout,
    date: NaiveDate,
) -> Result<ExportSummary, ExportError> {
    let page_width = writer.page_width();
    let center = page_width / 2.0;
    let content_width = page_width - 2.0 * layout.margin;
    let mut pages = 1;
    let mut y = layout.top;

    // Heading block
    writer.set_text_color(TextColor::BLACK);
    writer.set_font_weight(FontWeight::Bold);
    writer.set_font_size(layout.title_size);
    writer.text(&[doc.title.clone()], center, y, TextAlign::Center)?;
    y += layout.title_gap;

    writer.set_font_weight(FontWeight::Normal);
    writer.set_font_size(layout.meta_size);
    writer.text(&[format!("Дата: {}", date.format("%d.%m.%Y"))], center, y, TextAlign::Center)?;
    y += layout.date_gap;
    writer.text(
        &[format!("Общий прогресс: {}%", doc.overall_progress())],
        center,
        y,
        TextAlign::Center,
    )?;
    y += layout.summary_gap;

    for category in CATEGORIES {
        if y > layout.page_bottom {
            writer.add_page()?;
            pages += 1;
            y = layout.top;
            log::debug!("[EXPORT] page {} started before `{}` header", pages, category.id);
        }

        writer.set_text_color(TextColor::BLACK);
        writer.set_font_weight(FontWeight::Bold);
        writer.set_font_size(layout.header_size);
        let header = format!("{} ({}%)", category.label, doc.category_progress(category.id));
        writer.text(&[header], layout.margin, y, TextAlign::Left)?;
        y += layout.header_gap;

        for item in doc.items_in(category.id) {
            if y > layout.page_bottom {
                writer.add_page()?;
                pages += 1;
                y = layout.top;
                log::debug!("[EXPORT] page {} started before item `{}`", pages, item.id);
            }

            writer.set_text_color(TextColor::BLACK);
            writer.set_font_weight(FontWeight::Normal);
            writer.set_font_size(layout.item_size);
            let title_lines = writer.split_to_width(&format!("{} {}", item.checkbox(), item.title), content_width)?;
            writer.text(&title_lines, layout.margin, y, TextAlign::Left)?;
            y += title_lines.len() as f64 * layout.line_height;

            // Written even when empty; an empty description still takes one line
            writer.set_text_color(TextColor::MUTED);
            writer.set_font_size(layout.description_size);
            let description_lines =
                writer.split_to_width(&item.description, content_width - layout.description_indent)?;
            writer.text(&description_lines, layout.margin + layout.description_indent, y, TextAlign::Left)?;
            y += description_lines.len() as f64 * layout.line_height;

            y += layout.item_gap;
        }

        y += layout.category_gap;
    }

    let filename = export_filename(date);
    writer.save(&filename)?;
    log::info!("[EXPORT] saved {} ({} page(s))", filename, pages);

    Ok(ExportSummary { filename, pages })
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording writer used by the export tests

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct TextOp {
        pub page: usize,
        pub lines: Vec<String>,
        pub x: f64,
        pub y: f64,
        pub align: TextAlign,
        pub weight: FontWeight,
        pub size: f64,
        pub color: TextColor,
    }

    #[derive(Debug)]
    pub struct RecordingWriter {
        pub width: f64,
        /// Characters that fit per unit of width
        pub chars_per_unit: f64,
        pub page: usize,
        pub size: f64,
        pub weight: FontWeight,
        pub color: TextColor,
        pub texts: Vec<TextOp>,
        pub saved: Option<String>,
        pub fail_save: bool,
    }

    impl Default for RecordingWriter {
        fn default() -> Self {
            Self {
                width: 210.0,
                chars_per_unit: 0.5,
                page: 1,
                size: 16.0,
                weight: FontWeight::Normal,
                color: TextColor::BLACK,
                texts: Vec::new(),
                saved: None,
                fail_save: false,
            }
        }
    }

    impl RecordingWriter {
        pub fn page_texts(&self, page: usize) -> Vec<&TextOp> {
            self.texts.iter().filter(|t| t.page == page).collect()
        }
    }

    impl DocumentWriter for RecordingWriter {
        fn set_font_size(&mut self, size: f64) {
            self.size = size;
        }

        fn set_font_weight(&mut self, weight: FontWeight) {
            self.weight = weight;
        }

        fn set_text_color(&mut self, color: TextColor) {
            self.color = color;
        }

        fn text(&mut self, lines: &[String], x: f64, y: f64, align: TextAlign) -> Result<(), ExportError> {
            self.texts.push(TextOp {
                page: self.page,
                lines: lines.to_vec(),
                x,
                y,
                align,
                weight: self.weight,
                size: self.size,
                color: self.color,
            });
            Ok(())
        }

        fn split_to_width(&mut self, text: &str, width: f64) -> Result<Vec<String>, ExportError> {
            let max = ((width * self.chars_per_unit) as usize).max(1);
            let mut lines = Vec::new();
            let mut current = String::new();
            for word in text.split_whitespace() {
                let needed = current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
                if !current.is_empty() && needed > max {
                    lines.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
            if !current.is_empty() || lines.is_empty() {
                lines.push(current);
            }
            Ok(lines)
        }

        fn add_page(&mut self) -> Result<(), ExportError> {
            self.page += 1;
            Ok(())
        }

        fn page_width(&self) -> f64 {
            self.width
        }

        fn save(&mut self, filename: &str) -> Result<(), ExportError> {
            if self.fail_save {
                return Err(ExportError::Save {
                    filename: filename.to_string(),
                    message: "blocked".to_string(),
                });
            }
            self.saved = Some(filename.to_string());
            Ok(())
        }
    }
}
