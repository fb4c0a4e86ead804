//! Closed template and typeface sets.
//!
//! Both enums are deliberately exhaustive: the renderer and the selector
//! lists match on every variant, so adding a layout or typeface is a
//! compile-time event for every consumer.

/// The nine card layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Template {
    /// Logo+name row, divider, contact lines left / QR right
    Classic,
    /// Left third logo+QR column, right two thirds identity block
    Modern,
    /// Name on top, contact block bottom-left, logo+QR bottom-right
    Minimalist,
    /// Centered stack on a 75° diagonal gradient
    GradientWave,
    /// Centered stack on a top-to-bottom gradient
    Sunset,
    /// Centered stack on a 195° diagonal gradient
    Aurora,
    /// Logo as full-bleed photo behind a dark scrim
    PhotoBackground,
    /// Translucent inset panel on a 45° gradient
    FrostedGlass,
    /// Translucent left column on a 135° gradient
    TranslucentLayers,
}

impl Template {
    /// All templates, in selector order.
    pub const ALL: [Template; 9] = [
        Template::Classic,
        Template::Modern,
        Template::Minimalist,
        Template::GradientWave,
        Template::Sunset,
        Template::Aurora,
        Template::PhotoBackground,
        Template::FrostedGlass,
        Template::TranslucentLayers,
    ];

    /// Label shown in the template selector.
    pub fn label(&self) -> &'static str {
        match self {
            Template::Classic => "Clásico",
            Template::Modern => "Moderno",
            Template::Minimalist => "Minimalista",
            Template::GradientWave => "Ola Degradada",
            Template::Sunset => "Atardecer",
            Template::Aurora => "Aurora",
            Template::PhotoBackground => "Foto de Fondo",
            Template::FrostedGlass => "Cristal Esmerilado",
            Template::TranslucentLayers => "Capas Translúcidas",
        }
    }

    /// Resolve a selector label back to its template.
    ///
    /// Unknown labels fall back to `Classic`, the catch-all layout.
    pub fn from_label(label: &str) -> Template {
        Template::ALL
            .iter()
            .copied()
            .find(|t| t.label() == label)
            .unwrap_or(Template::Classic)
    }

    /// Whether the background is a two-color gradient of the card colors.
    ///
    /// Gradient templates draw their text in the derived contrast color
    /// instead of the user-chosen text color.
    pub fn is_gradient(&self) -> bool {
        matches!(
            self,
            Template::GradientWave
                | Template::Sunset
                | Template::Aurora
                | Template::FrostedGlass
                | Template::TranslucentLayers
        )
    }

    /// CSS-style gradient angle in degrees (0° points up, clockwise).
    pub fn gradient_angle(&self) -> Option<f32> {
        match self {
            Template::GradientWave => Some(75.0),
            Template::Sunset => Some(180.0),
            Template::Aurora => Some(195.0),
            Template::FrostedGlass => Some(45.0),
            Template::TranslucentLayers => Some(135.0),
            _ => None,
        }
    }
}

impl Default for Template {
    /// New sessions start on the Modern layout.
    fn default() -> Self {
        Template::Modern
    }
}

/// The seven selectable typefaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    Roboto,
    Lato,
    Montserrat,
    Poppins,
    Merriweather,
    PlayfairDisplay,
    #[default]
    NotoSans,
}

impl FontFamily {
    /// All typefaces, in selector order.
    pub const ALL: [FontFamily; 7] = [
        FontFamily::Roboto,
        FontFamily::Lato,
        FontFamily::Montserrat,
        FontFamily::Poppins,
        FontFamily::Merriweather,
        FontFamily::PlayfairDisplay,
        FontFamily::NotoSans,
    ];

    /// Label shown in the typeface selector.
    pub fn label(&self) -> &'static str {
        match self {
            FontFamily::Roboto => "Roboto",
            FontFamily::Lato => "Lato",
            FontFamily::Montserrat => "Montserrat",
            FontFamily::Poppins => "Poppins",
            FontFamily::Merriweather => "Merriweather",
            FontFamily::PlayfairDisplay => "Playfair Display",
            FontFamily::NotoSans => "Noto Sans",
        }
    }

    /// Resolve a selector label back to its typeface, defaulting to Noto Sans.
    pub fn from_label(label: &str) -> FontFamily {
        FontFamily::ALL
            .iter()
            .copied()
            .find(|f| f.label() == label)
            .unwrap_or_default()
    }

    /// Font stack used in the rendered SVG.
    ///
    /// The generic family keeps the raster legible on systems without the
    /// named typeface installed.
    pub fn stack(&self) -> &'static str {
        match self {
            FontFamily::Roboto => "Roboto, sans-serif",
            FontFamily::Lato => "Lato, sans-serif",
            FontFamily::Montserrat => "Montserrat, sans-serif",
            FontFamily::Poppins => "Poppins, sans-serif",
            FontFamily::Merriweather => "Merriweather, serif",
            FontFamily::PlayfairDisplay => "Playfair Display, serif",
            FontFamily::NotoSans => "Noto Sans, sans-serif",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for template in Template::ALL {
            assert_eq!(Template::from_label(template.label()), template);
        }
        for font in FontFamily::ALL {
            assert_eq!(FontFamily::from_label(font.label()), font);
        }
    }

    #[test]
    fn unknown_labels_fall_back() {
        assert_eq!(Template::from_label("Brutalista"), Template::Classic);
        assert_eq!(FontFamily::from_label("Comic Sans"), FontFamily::NotoSans);
    }

    #[test]
    fn gradient_set_matches_angles() {
        for template in Template::ALL {
            assert_eq!(template.is_gradient(), template.gradient_angle().is_some());
        }
    }

    #[test]
    fn sessions_start_on_modern() {
        assert_eq!(Template::default(), Template::Modern);
        assert_eq!(FontFamily::default(), FontFamily::NotoSans);
    }
}
