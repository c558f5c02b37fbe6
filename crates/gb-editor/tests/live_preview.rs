//! Integration tests: control inputs → live preview scene.

use gb_core::Alignment;
use gb_core::model::*;
use gb_editor::{ControlInput, Studio};
use pretty_assertions::assert_eq;

fn lines(studio: &Studio) -> Vec<LineFragment> {
    studio
        .graph()
        .lines(studio.handles().text)
        .into_iter()
        .cloned()
        .collect()
}

// ─── Text layout ────────────────────────────────────────────────────────

#[test]
fn hello_world_layout() {
    let mut studio = Studio::default();
    studio.apply(ControlInput::Text("Hello\nWorld".into()));

    let lines = lines(&studio);
    assert_eq!(lines.len(), 2);
    assert_eq!((lines[0].y, lines[0].dy_em), (240.0, 0.0));
    assert_eq!((lines[1].y, lines[1].dy_em), (240.0, 1.2));
    assert!(
        studio
            .preview_markup()
            .contains(r#"<tspan x="750" y="240" dy="1.2em">World</tspan>"#)
    );
}

#[test]
fn layout_uses_font_size_at_time_of_edit() {
    let mut studio = Studio::default();
    studio.apply(ControlInput::FontSize(50));
    studio.apply(ControlInput::Text("a\nb".into()));
    // 1 gap × 1.2 × 50 = 60 → 300 − 30
    assert_eq!(lines(&studio)[0].y, 270.0);

    // Changing size afterwards only rescales the em offsets.
    studio.apply(ControlInput::FontSize(120));
    assert_eq!(lines(&studio)[0].y, 270.0);
    assert_eq!(studio.readouts().font_size, "120px");
    assert!(studio.preview_markup().contains(r#"font-size="120px""#));
}

#[test]
fn fragments_do_not_copy_family_or_weight() {
    let mut studio = Studio::default();
    studio.apply(ControlInput::FontWeight(FontWeight::Light));
    studio.apply(ControlInput::Text("inherit me".into()));

    let markup = studio.preview_markup();
    assert_eq!(markup.matches("font-weight=").count(), 1);
    assert_eq!(markup.matches("font-family=").count(), 1);
    assert!(markup.contains(r#"font-weight="300""#));
}

// ─── Alignment ──────────────────────────────────────────────────────────

#[test]
fn alignment_sets_anchor_and_x_everywhere() {
    let cases = [
        (Alignment::Left, TextAnchor::Start, 250.0),
        (Alignment::Right, TextAnchor::End, 1250.0),
        (Alignment::Center, TextAnchor::Middle, 750.0),
    ];

    let mut studio = Studio::default();
    studio.apply(ControlInput::Text("one\ntwo\nthree".into()));
    for (alignment, anchor, x) in cases {
        studio.apply(ControlInput::Align(alignment));

        let text = studio.graph().text(studio.handles().text).unwrap();
        assert_eq!((text.anchor, text.x), (anchor, x), "{alignment}");
        assert!(lines(&studio).iter().all(|l| l.x == x), "{alignment}");
        assert!(studio.alignment().is_active(alignment));
        assert_eq!(studio.params().alignment, Some(alignment));
    }
}

// ─── Gradient ───────────────────────────────────────────────────────────

#[test]
fn gradient_markup_follows_angle_and_colors() {
    let mut studio = Studio::default();
    studio.apply(ControlInput::Angle(0.0));
    studio.apply(ControlInput::StartColor("#ff8800".parse().unwrap()));

    let markup = studio.preview_markup();
    assert!(markup.contains(r#"<linearGradient id="grad" x1="50%" y1="0%" x2="50%" y2="100%">"#));
    assert!(markup.contains(r##"<stop offset="0%" stop-color="#ff8800"/>"##));
    assert_eq!(studio.readouts().angle, "0°");
    assert_eq!(studio.readouts().start_hex, "#FF8800");
}

#[test]
fn text_color_follows_choice() {
    let mut studio = Studio::default();
    studio.apply(ControlInput::TextColor(Color::BLACK));
    assert!(studio.preview_markup().contains(r##"fill="#000000""##));
    assert_eq!(studio.params().text_color, Color::BLACK);
}
