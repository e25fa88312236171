//! Hangul font installation.
//!
//! egui's bundled fonts have no Hangul glyphs, so the Korean day names need a
//! system (or configured) font added as a fallback to every family.

use egui::{FontData, FontDefinitions, FontFamily};
use std::path::{Path, PathBuf};

const HANGUL_FONT_NAME: &str = "hangul";

const HANGUL_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

/// Default fonts with `bytes` appended as the last fallback of each family
pub fn hangul_font_definitions(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(HANGUL_FONT_NAME.to_owned(), FontData::from_owned(bytes));

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(HANGUL_FONT_NAME.to_owned());
    }

    fonts
}

/// Install the first readable Hangul font, trying `configured` first.
///
/// Returns false when nothing could be loaded; the app still runs, the
/// day names just render as placeholder boxes.
pub fn install_hangul_font(ctx: &egui::Context, configured: Option<&Path>) -> bool {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(HANGUL_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        match std::fs::read(&path) {
            Ok(bytes) => {
                ctx.set_fonts(hangul_font_definitions(bytes));
                log::info!("Using Hangul font {:?}", path);
                return true;
            }
            Err(err) => log::debug!("Font {:?} not usable: {}", path, err),
        }
    }

    log::warn!("No Hangul font found; set font_path in the settings file");
    false
}
