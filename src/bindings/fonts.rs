//! Embedded PDF Font
//!
//! jsPDF's built-in fonts only cover Latin-1, so the Russian headings and
//! the "✓" glyph need a Unicode TrueType font registered per document.
//! DejaVu Sans is compiled into the binary (see assets/fonts/LICENSE).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use checklist_core::FontWeight;

/// Family name the faces are registered under
pub const PDF_FONT_FAMILY: &str = "DejaVuSans";

/// jsPDF built-in used when registration fails
pub const FALLBACK_FONT_FAMILY: &str = "helvetica";

/// One TrueType face for the jsPDF virtual file system
#[derive(Debug, Clone, Copy)]
pub struct FontFace {
    pub file_name: &'static str,
    pub weight: FontWeight,
    bytes: &'static [u8],
}

impl FontFace {
    /// File contents as base64, the form `addFileToVFS` expects
    pub fn base64(&self) -> String {
        STANDARD.encode(self.bytes)
    }
}

pub const FONT_FACES: [FontFace; 2] = [
    FontFace {
        file_name: "DejaVuSans.ttf",
        weight: FontWeight::Normal,
        bytes: include_bytes!("../../assets/fonts/DejaVuSans.ttf"),
    },
    FontFace {
        file_name: "DejaVuSans-Bold.ttf",
        weight: FontWeight::Bold,
        bytes: include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_weight_has_a_face() {
        for weight in [FontWeight::Normal, FontWeight::Bold] {
            assert_eq!(FONT_FACES.iter().filter(|f| f.weight == weight).count(), 1);
        }
    }

    #[test]
    fn test_faces_are_truetype() {
        for face in FONT_FACES {
            let decoded = STANDARD.decode(face.base64()).unwrap();
            assert_eq!(&decoded[..4], &[0x00, 0x01, 0x00, 0x00], "{}", face.file_name);
        }
    }
}
