//! The card model: the single source of truth for rendering.

use std::io::Cursor;
use std::sync::Arc;

use base64::Engine as _;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::color;
use crate::error::CardError;
use crate::template::{FontFamily, Template};
use crate::vcard;

/// Default background color for new cards.
pub const DEFAULT_BACKGROUND: &str = "#3645a9";

/// Default text color for new cards.
pub const DEFAULT_TEXT: &str = "#ffffff";

/// In-memory logo image, held as a PNG data URI for SVG embedding.
///
/// The encoded bytes live behind an `Arc`: the model owns one handle while
/// the logo is active, and replacing or releasing it drops that handle. A
/// renderer still holding a clone keeps its snapshot valid until it lets
/// go, so a released resource is never dereferenced.
#[derive(Clone, Debug, PartialEq)]
pub struct Logo {
    inner: Arc<LogoData>,
}

#[derive(Debug, PartialEq)]
struct LogoData {
    data_uri: String,
    width: u32,
    height: u32,
}

impl Logo {
    /// Re-encode a decoded image losslessly as a PNG data URI.
    pub fn from_image(img: &DynamicImage) -> Result<Self, CardError> {
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
        let (width, height) = img.dimensions();
        let encoded = base64::engine::general_purpose::STANDARD.encode(&buffer);
        Ok(Self {
            inner: Arc::new(LogoData {
                data_uri: format!("data:image/png;base64,{encoded}"),
                width,
                height,
            }),
        })
    }

    /// The embedded image as a `data:image/png;base64,...` URI.
    pub fn data_uri(&self) -> &str {
        &self.inner.data_uri
    }

    /// Pixel dimensions of the source image.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Number of live handles to the underlying resource.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

/// Every editable field and style choice for the card.
///
/// Exactly one instance lives per editing session. Text and style fields
/// are plain public fields, written directly by the editing surface; the
/// logo goes through [`CardData::set_logo`] so the previous resource is
/// always released on replacement. Dropping the card releases whatever
/// logo is still installed.
#[derive(Clone, Debug, PartialEq)]
pub struct CardData {
    pub full_name: String,
    pub title: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub(crate) logo: Option<Logo>,
    pub template: Template,
    pub font_family: FontFamily,
    pub background_color: String,
    pub text_color: String,
    pub show_qr_code: bool,
}

impl Default for CardData {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            title: String::new(),
            company: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            logo: None,
            template: Template::default(),
            font_family: FontFamily::default(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            text_color: DEFAULT_TEXT.to_string(),
            show_qr_code: false,
        }
    }
}

impl CardData {
    /// Install a new logo, releasing the previous resource first.
    pub fn set_logo(&mut self, logo: Option<Logo>) {
        self.release_logo();
        self.logo = logo;
    }

    /// Release the current logo resource.
    ///
    /// Idempotent: safe to call when no logo is set or after an earlier
    /// release.
    pub fn release_logo(&mut self) {
        self.logo = None;
    }

    /// The current logo, if one is installed.
    pub fn logo(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }

    /// Flip the QR glyph on or off.
    pub fn toggle_qr(&mut self) {
        self.show_qr_code = !self.show_qr_code;
    }

    /// vCard payload derived from the current field values.
    ///
    /// Recomputed on every read so the QR glyph can never encode a stale
    /// snapshot.
    pub fn vcard(&self) -> String {
        vcard::contact_string(self)
    }

    /// Contrast color for gradient backgrounds, derived from the blend of
    /// the background and text colors.
    pub fn contrast_color(&self) -> &'static str {
        color::blended_contrast(&self.background_color, &self.text_color)
    }
}
