//! Behavior checks for the template table
//!
//! Structural assertions over the rendered SVG: which text-color rule each
//! template applies, where glyphs show up, and how the renderer degrades
//! when fields are missing. Nothing here is pixel-exact.

use tarjeta_core::render::{render_card, render_template};
use tarjeta_core::{color, CardData, FontFamily, Logo, Template};

fn sample_card(template: Template) -> CardData {
    let mut card = CardData::default();
    card.full_name = "Juan Pérez".to_string();
    card.title = "Director".to_string();
    card.company = "Pérez & Hijos".to_string();
    card.phone = "+34 600 111 222".to_string();
    card.email = "juan@perez.es".to_string();
    card.website = "perez.es".to_string();
    card.template = template;
    card
}

fn sample_logo() -> Logo {
    let img = image::DynamicImage::new_rgba8(4, 4);
    Logo::from_image(&img).expect("encode logo")
}

#[test]
fn each_template_selects_exactly_one_text_color_rule() {
    for template in Template::ALL {
        let mut card = sample_card(template);
        // Dark colors so the contrast rule resolves to white, distinct
        // from both the picker color and the photo rule's fixed white
        card.background_color = "#101010".to_string();
        card.text_color = "#202020".to_string();
        let svg = render_card(&card);

        let expected_ink = if template == Template::PhotoBackground {
            color::WHITE
        } else if template.is_gradient() {
            color::WHITE // blend of #101010/#202020 is dark
        } else {
            "#202020"
        };
        assert!(
            svg.contains(r#"class="card-name""#),
            "{template:?} should render a name"
        );
        assert!(
            svg.contains(&format!(r#"fill="{expected_ink}""#)),
            "{template:?} should draw text in {expected_ink}"
        );
    }
}

#[test]
fn company_escapes_xml_in_every_template() {
    for template in Template::ALL {
        let mut card = sample_card(template);
        card.company = "Pérez & Hijos <SA>".to_string();
        let svg = render_card(&card);
        assert!(!svg.contains("& Hijos <SA>"), "{template:?}");
    }
}

#[test]
fn qr_encodes_the_current_contact_payload() {
    let mut card = sample_card(Template::Modern);
    card.show_qr_code = true;

    let before = render_card(&card);
    assert!(before.contains("qr-glyph"));

    // Editing a contact field changes the payload without re-toggling
    card.email = "nuevo@perez.es".to_string();
    let after = render_card(&card);
    assert_ne!(before, after);

    // Toggling off removes the glyph entirely
    card.toggle_qr();
    assert!(!render_card(&card).contains("qr-glyph"));
}

#[test]
fn photo_background_uses_the_logo_as_cover() {
    let mut card = sample_card(Template::PhotoBackground);
    card.set_logo(Some(sample_logo()));
    let svg = render_card(&card);
    assert!(svg.contains(r#"preserveAspectRatio="xMidYMid slice""#));
    assert!(svg.contains(r#"class="card-scrim""#));

    // Without a logo the template falls back to the solid color
    card.release_logo();
    let svg = render_card(&card);
    assert!(svg.contains(r##"fill="#3645a9""##));
    assert!(svg.contains(r#"class="card-scrim""#));
}

#[test]
fn logo_rides_along_in_glyph_templates() {
    for template in [
        Template::Classic,
        Template::Modern,
        Template::Minimalist,
        Template::FrostedGlass,
        Template::TranslucentLayers,
    ] {
        let mut card = sample_card(template);
        card.set_logo(Some(sample_logo()));
        let svg = render_card(&card);
        assert!(svg.contains("logo-glyph"), "{template:?}");
        assert!(
            svg.contains("data:image/png;base64,"),
            "{template:?} should embed the logo"
        );
        assert!(!svg.contains("logo-placeholder"), "{template:?}");
    }
}

#[test]
fn placeholder_appears_only_where_the_layout_wants_one() {
    for template in Template::ALL {
        let svg = render_card(&sample_card(template));
        let wants_placeholder =
            matches!(template, Template::Modern | Template::TranslucentLayers);
        assert_eq!(
            svg.contains("logo-placeholder"),
            wants_placeholder,
            "{template:?}"
        );
    }
}

#[test]
fn render_template_is_a_pure_function_of_its_inputs() {
    let card = sample_card(Template::Aurora);
    let contact = card.vcard();
    let contrast = card.contrast_color();
    assert_eq!(
        render_template(&card, &contact, contrast),
        render_template(&card, &contact, contrast)
    );
}

#[test]
fn default_session_scenario() {
    // Fresh session: empty fields, Modern, indigo/white, no QR
    let mut card = CardData::default();
    assert_eq!(card.template, Template::Modern);
    assert_eq!(card.font_family, FontFamily::NotoSans);

    let svg = render_card(&card);
    assert!(svg.contains("logo-placeholder"));
    assert!(!svg.contains("qr-glyph"));
    assert!(!svg.contains("info-line"));

    // QR on: one glyph, encoding an all-empty vCard
    card.toggle_qr();
    let vcard = card.vcard();
    assert!(vcard.contains("N:;;;;"));
    assert!(vcard.contains("FN:\n"));
    let svg = render_card(&card);
    assert_eq!(svg.matches("qr-glyph").count(), 1);
}
