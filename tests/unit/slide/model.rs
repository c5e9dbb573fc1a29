use super::*;

#[test]
fn deserializes_minimal_camel_case_payload() {
    let json = r#"{"title":"Foco","body":"Dica real.","imageUrl":"data:image/png;base64,AA=="}"#;
    let slide: Slide = serde_json::from_str(json).unwrap();
    assert_eq!(slide.title, "Foco");
    assert_eq!(slide.body, "Dica real.");
    assert!(slide.image_url.starts_with("data:"));
    assert_eq!(slide.text_align, TextAlign::Center);
    assert!(!slide.is_title_bold);
    assert!(slide.title_font_size.is_none());
}

#[test]
fn deserializes_full_styling_payload() {
    let json = r#"{
        "title": "t", "body": "b", "imageUrl": "bg.png",
        "titleFontFamily": "Anton", "bodyFontFamily": "Poppins",
        "isTitleBold": true, "isBodyItalic": true,
        "titleFontSize": 4.0, "bodyFontSize": 1.2,
        "textAlign": "left",
        "authorName": "Ana", "authorHandle": "@ana",
        "isImageLoading": true
    }"#;
    let slide: Slide = serde_json::from_str(json).unwrap();
    assert_eq!(slide.title_font_family.as_deref(), Some("Anton"));
    assert!(slide.is_title_bold);
    assert!(slide.is_body_italic);
    assert_eq!(slide.title_font_size, Some(4.0));
    assert_eq!(slide.text_align, TextAlign::Left);
    assert!(slide.is_image_loading);
}

#[test]
fn serialization_skips_absent_options() {
    let slide = Slide {
        title: "t".into(),
        body: "b".into(),
        image_url: "u".into(),
        ..Slide::default()
    };
    let json = serde_json::to_string(&slide).unwrap();
    assert!(!json.contains("titleFontFamily"));
    assert!(!json.contains("authorName"));
    assert!(json.contains("\"imageUrl\":\"u\""));
}

#[test]
fn has_author_requires_non_blank_field() {
    let mut slide = Slide::default();
    assert!(!slide.has_author());

    slide.author_name = Some("   ".into());
    assert!(!slide.has_author());

    slide.author_handle = Some("@handle".into());
    assert!(slide.has_author());
}
