//! The nine card layouts.
//!
//! Every layout composes the same building blocks — a background fill, the
//! identity block, contact lines, an optional logo and an optional QR
//! glyph — on a fixed 530x300 canvas. The dispatch is an exhaustive match:
//! a new template variant will not compile until it gets a layout here.

use crate::card::CardData;
use crate::color;
use crate::template::Template;

use super::glyphs::{
    building_placeholder, info_line, logo_image, qr_glyph, text_el, Icon, QR_PLATE,
};

/// Canvas width of the rendered card, in CSS pixels.
pub const CARD_WIDTH: f32 = 530.0;

/// Canvas height of the rendered card, in CSS pixels.
pub const CARD_HEIGHT: f32 = 300.0;

/// Inner padding shared by all layouts.
const PAD: f32 = 24.0;

/// Right content edge.
const RIGHT: f32 = CARD_WIDTH - PAD;

/// Bottom content edge.
const BOTTOM: f32 = CARD_HEIGHT - PAD;

/// Render the full card SVG from a model snapshot.
///
/// Derives the contact payload and contrast color on the spot, then
/// dispatches to the selected template.
pub fn render_card(card: &CardData) -> String {
    render_template(card, &card.vcard(), card.contrast_color())
}

/// Pure template dispatch: (card, contact payload, contrast color) → SVG.
pub fn render_template(card: &CardData, contact: &str, contrast: &str) -> String {
    // Photo cards pin white text onto the dark scrim; gradient cards use
    // the derived contrast color; everything else honors the picker.
    let ink: &str = if card.template == Template::PhotoBackground {
        color::WHITE
    } else if card.template.is_gradient() {
        contrast
    } else {
        &card.text_color
    };

    let mut out = String::with_capacity(6 * 1024);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" viewBox="0 0 {CARD_WIDTH} {CARD_HEIGHT}" font-family="{family}">"#,
        family = card.font_family.stack(),
    ));

    background(&mut out, card);

    match card.template {
        Template::Classic => classic(&mut out, card, contact, ink),
        Template::Modern => modern(&mut out, card, contact, ink),
        Template::Minimalist => minimalist(&mut out, card, contact, ink),
        Template::GradientWave | Template::Sunset | Template::Aurora => {
            centered(&mut out, card, contact, ink)
        }
        Template::PhotoBackground => photo_background(&mut out, card, contact, ink),
        Template::FrostedGlass => frosted_glass(&mut out, card, contact, ink),
        Template::TranslucentLayers => translucent_layers(&mut out, card, contact, ink),
    }

    out.push_str("</svg>");
    out
}

/// Background fill: solid, two-color gradient, or the logo as a photo
/// behind a dark scrim.
fn background(out: &mut String, card: &CardData) {
    if card.template == Template::PhotoBackground {
        match card.logo() {
            Some(logo) => out.push_str(&format!(
                r#"<image class="card-bg" x="0" y="0" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" preserveAspectRatio="xMidYMid slice" xlink:href="{uri}"/>"#,
                uri = logo.data_uri(),
            )),
            None => solid_rect(out, &card.background_color),
        }
        out.push_str(&format!(
            r##"<rect class="card-scrim" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" fill="#000000" fill-opacity="0.5"/>"##,
        ));
        return;
    }

    match card.template.gradient_angle() {
        Some(angle) => {
            let (x1, y1, x2, y2) = gradient_line(angle);
            out.push_str(&format!(
                r#"<defs><linearGradient id="card-bg-fill" x1="{x1:.4}" y1="{y1:.4}" x2="{x2:.4}" y2="{y2:.4}"><stop offset="0" stop-color="{from}"/><stop offset="1" stop-color="{to}"/></linearGradient></defs><rect class="card-bg" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" fill="url(#card-bg-fill)"/>"#,
                from = card.background_color,
                to = card.text_color,
            ));
        }
        None => solid_rect(out, &card.background_color),
    }
}

fn solid_rect(out: &mut String, fill: &str) {
    out.push_str(&format!(
        r#"<rect class="card-bg" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" fill="{fill}"/>"#,
    ));
}

/// Map a CSS gradient angle (0° up, clockwise) onto unit-box endpoints.
fn gradient_line(angle_deg: f32) -> (f32, f32, f32, f32) {
    let rad = angle_deg.to_radians();
    let (dx, dy) = (rad.sin(), -rad.cos());
    (
        0.5 - dx / 2.0,
        0.5 - dy / 2.0,
        0.5 + dx / 2.0,
        0.5 + dy / 2.0,
    )
}

fn divider(out: &mut String, x1: f32, y1: f32, x2: f32, y2: f32, color: &str) {
    out.push_str(&format!(
        r#"<line class="card-divider" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-opacity="0.5"/>"#,
    ));
}

/// Icon contact lines stacked downward from `start_y`. Empty fields take
/// no space, the stack compacts like a flow layout.
fn icon_lines_top(
    out: &mut String,
    lines: &[(Icon, &str)],
    x: f32,
    start_y: f32,
    step: f32,
    size: f32,
    color: &str,
) {
    let mut y = start_y;
    for (kind, text) in lines {
        if text.is_empty() {
            continue;
        }
        info_line(out, *kind, text, x, y, size, color, false);
        y += step;
    }
}

/// Icon contact lines stacked upward so the last line sits on `bottom_y`.
fn icon_lines_bottom(
    out: &mut String,
    lines: &[(Icon, &str)],
    x: f32,
    bottom_y: f32,
    step: f32,
    size: f32,
    color: &str,
) {
    let present: Vec<(Icon, &str)> = lines
        .iter()
        .filter(|(_, text)| !text.is_empty())
        .copied()
        .collect();
    for (i, (kind, text)) in present.iter().enumerate() {
        let y = bottom_y - (present.len() - 1 - i) as f32 * step;
        info_line(out, *kind, text, x, y, size, color, false);
    }
}

/// Logo+name row, divider, contact lines left and QR bottom-right.
fn classic(out: &mut String, card: &CardData, contact: &str, ink: &str) {
    let mut x_text = PAD;
    if let Some(logo) = card.logo() {
        logo_image(out, logo, PAD, 56.0, 64.0);
        x_text += 80.0;
    }
    text_el(out, &card.full_name, x_text, 88.0, 24.0, ink, r#"class="card-name" font-weight="700""#);
    text_el(out, &card.title, x_text, 112.0, 16.0, ink, r#"class="card-title" fill-opacity="0.7""#);

    divider(out, PAD, 140.0, RIGHT, 140.0, ink);

    icon_lines_bottom(
        out,
        &[
            (Icon::Building, card.company.as_str()),
            (Icon::Phone, card.phone.as_str()),
            (Icon::Mail, card.email.as_str()),
            (Icon::Globe, card.website.as_str()),
        ],
        PAD,
        270.0,
        24.0,
        14.0,
        ink,
    );

    if card.show_qr_code {
        qr_glyph(out, contact, RIGHT - QR_PLATE, BOTTOM - QR_PLATE);
    }
}

/// Left third: logo and QR stacked. Right two thirds: identity block.
fn modern(out: &mut String, card: &CardData, contact: &str, ink: &str) {
    const COL: f32 = 176.0;

    let logo_y = if card.show_qr_code { 52.0 } else { 118.0 };
    match card.logo() {
        Some(logo) => logo_image(out, logo, (COL - 64.0) / 2.0, logo_y, 64.0),
        None => building_placeholder(out, (COL - 64.0) / 2.0, logo_y, 64.0, ink),
    }
    if card.show_qr_code {
        qr_glyph(out, contact, (COL - QR_PLATE) / 2.0, 140.0);
    }

    divider(out, COL, PAD, COL, BOTTOM, ink);

    let x = COL + PAD;
    text_el(out, &card.full_name, x, 96.0, 24.0, ink, r#"class="card-name" font-weight="700""#);
    text_el(out, &card.title, x, 121.0, 16.0, ink, r#"class="card-title" fill-opacity="0.7""#);
    text_el(out, &card.company, x, 153.0, 18.0, ink, r#"class="card-company" font-weight="600""#);

    icon_lines_top(
        out,
        &[
            (Icon::Phone, card.phone.as_str()),
            (Icon::Mail, card.email.as_str()),
            (Icon::Globe, card.website.as_str()),
        ],
        x,
        185.0,
        22.0,
        12.0,
        ink,
    );
}

/// Name on top; contact block bottom-left, logo and QR bottom-right.
fn minimalist(out: &mut String, card: &CardData, contact: &str, ink: &str) {
    text_el(
        out,
        &card.full_name,
        PAD,
        64.0,
        30.0,
        ink,
        r#"class="card-name" font-weight="300" letter-spacing="4""#,
    );
    text_el(
        out,
        &card.title.to_uppercase(),
        PAD,
        92.0,
        15.0,
        ink,
        r#"class="card-title" fill-opacity="0.7" letter-spacing="5""#,
    );

    // Bare text lines, no icons, bottom-anchored
    let lines: [(&str, &str); 4] = [
        (card.company.as_str(), r#"class="contact-line" font-weight="600""#),
        (card.phone.as_str(), r#"class="contact-line""#),
        (card.email.as_str(), r#"class="contact-line""#),
        (card.website.as_str(), r#"class="contact-line""#),
    ];
    let present: Vec<(&str, &str)> = lines
        .iter()
        .filter(|(text, _)| !text.is_empty())
        .copied()
        .collect();
    for (i, (text, attrs)) in present.iter().enumerate() {
        let y = BOTTOM - (present.len() - 1 - i) as f32 * 20.0;
        text_el(out, text, PAD, y, 12.0, ink, attrs);
    }

    let qr_x = RIGHT - QR_PLATE;
    if card.show_qr_code {
        qr_glyph(out, contact, qr_x, BOTTOM - QR_PLATE);
        if let Some(logo) = card.logo() {
            logo_image(out, logo, qr_x - 72.0, BOTTOM - 64.0, 64.0);
        }
    } else if let Some(logo) = card.logo() {
        logo_image(out, logo, RIGHT - 64.0, BOTTOM - 64.0, 64.0);
    }
}

/// Centered stack shared by the three plain gradient templates.
fn centered(out: &mut String, card: &CardData, contact: &str, ink: &str) {
    let cx = CARD_WIDTH / 2.0;

    if let Some(logo) = card.logo() {
        logo_image(out, logo, cx - 32.0, 40.0, 64.0);
    }
    text_el(
        out,
        &card.full_name,
        cx,
        138.0,
        30.0,
        ink,
        r#"class="card-name" font-weight="700" text-anchor="middle""#,
    );
    text_el(
        out,
        &card.title,
        cx,
        164.0,
        18.0,
        ink,
        r#"class="card-title" fill-opacity="0.7" text-anchor="middle""#,
    );
    divider(out, cx - 48.0, 186.0, cx + 48.0, 186.0, ink);

    // Contact row: bare lines, QR to their right when shown
    let (x, attrs) = if card.show_qr_code {
        (cx - 95.0, r#"class="contact-line""#)
    } else {
        (cx, r#"class="contact-line" text-anchor="middle""#)
    };
    let mut y = 216.0;
    for text in [&card.phone, &card.email, &card.website] {
        if text.is_empty() {
            continue;
        }
        text_el(out, text, x, y, 14.0, ink, attrs);
        y += 20.0;
    }
    if card.show_qr_code {
        qr_glyph(out, contact, cx + 65.0, 196.0);
    }
}

/// Full-bleed photo (the logo) behind a scrim; identity bottom-right with
/// reversed contact lines, QR bottom-left.
fn photo_background(out: &mut String, card: &CardData, contact: &str, ink: &str) {
    text_el(out, &card.company, PAD, 52.0, 18.0, ink, r#"class="card-company" font-weight="600""#);

    text_el(
        out,
        &card.full_name,
        RIGHT,
        160.0,
        30.0,
        ink,
        r#"class="card-name" font-weight="700" text-anchor="end""#,
    );
    text_el(
        out,
        &card.title,
        RIGHT,
        184.0,
        18.0,
        ink,
        r#"class="card-title" fill-opacity="0.7" text-anchor="end""#,
    );
    divider(out, PAD, 202.0, RIGHT, 202.0, ink);

    let mut y = 226.0;
    for (kind, text) in [
        (Icon::Phone, &card.phone),
        (Icon::Mail, &card.email),
        (Icon::Globe, &card.website),
    ] {
        if text.is_empty() {
            continue;
        }
        info_line(out, kind, text, RIGHT, y, 13.0, ink, true);
        y += 22.0;
    }

    if card.show_qr_code {
        qr_glyph(out, contact, PAD, BOTTOM - QR_PLATE);
    }
}

/// Translucent inset panel on a 45° gradient.
fn frosted_glass(out: &mut String, card: &CardData, contact: &str, ink: &str) {
    out.push_str(&format!(
        r##"<rect class="card-panel" x="{PAD}" y="{PAD}" width="{w}" height="{h}" rx="8" fill="#ffffff" fill-opacity="0.1" stroke="#ffffff" stroke-opacity="0.2"/>"##,
        w = CARD_WIDTH - 2.0 * PAD,
        h = CARD_HEIGHT - 2.0 * PAD,
    ));

    let x = PAD * 2.0;
    text_el(out, &card.full_name, x, 84.0, 30.0, ink, r#"class="card-name" font-weight="700""#);
    text_el(out, &card.title, x, 110.0, 16.0, ink, r#"class="card-title" fill-opacity="0.7""#);
    text_el(out, &card.company, x, 138.0, 18.0, ink, r#"class="card-company" font-weight="600""#);

    icon_lines_bottom(
        out,
        &[
            (Icon::Phone, card.phone.as_str()),
            (Icon::Mail, card.email.as_str()),
            (Icon::Globe, card.website.as_str()),
        ],
        x,
        244.0,
        20.0,
        13.0,
        ink,
    );

    // Right column inside the panel: logo above QR, bottom-aligned
    if card.show_qr_code {
        qr_glyph(out, contact, RIGHT - PAD - QR_PLATE, 164.0);
        if let Some(logo) = card.logo() {
            logo_image(out, logo, RIGHT - PAD - QR_PLATE + 8.0, 92.0, 64.0);
        }
    } else if let Some(logo) = card.logo() {
        logo_image(out, logo, RIGHT - PAD - 64.0, 180.0, 64.0);
    }
}

/// Translucent left column with logo and QR on a 135° gradient.
fn translucent_layers(out: &mut String, card: &CardData, contact: &str, ink: &str) {
    const COL: f32 = 176.0;

    out.push_str(&format!(
        r##"<rect class="card-panel" width="{COL}" height="{CARD_HEIGHT}" fill="#000000" fill-opacity="0.1"/>"##,
    ));
    out.push_str(&format!(
        r#"<line x1="{COL}" y1="0" x2="{COL}" y2="{CARD_HEIGHT}" stroke="{ink}" stroke-opacity="0.3"/>"#,
    ));

    match card.logo() {
        Some(logo) => logo_image(out, logo, (COL - 80.0) / 2.0, 64.0, 80.0),
        None => building_placeholder(out, (COL - 80.0) / 2.0, 64.0, 80.0, ink),
    }
    if card.show_qr_code {
        qr_glyph(out, contact, (COL - QR_PLATE) / 2.0, 168.0);
    }

    let x = COL + PAD;
    text_el(out, &card.full_name, x, 84.0, 30.0, ink, r#"class="card-name" font-weight="700""#);
    text_el(out, &card.title, x, 112.0, 18.0, ink, r#"class="card-title" fill-opacity="0.7""#);
    text_el(out, &card.company, x, 148.0, 20.0, ink, r#"class="card-company" font-weight="600""#);
    divider(out, x, 172.0, RIGHT, 172.0, ink);

    icon_lines_top(
        out,
        &[
            (Icon::Phone, card.phone.as_str()),
            (Icon::Mail, card.email.as_str()),
            (Icon::Globe, card.website.as_str()),
        ],
        x,
        200.0,
        22.0,
        14.0,
        ink,
    );
}
