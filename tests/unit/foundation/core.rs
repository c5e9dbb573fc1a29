use super::*;

#[test]
fn base_font_unit_is_fixed_fraction_of_surface() {
    assert!((base_font_unit() - 27.0).abs() < f32::EPSILON);
}

#[test]
fn frame_pixel_reads_row_major() {
    let frame = FrameRgba {
        width: 2,
        height: 2,
        data: vec![
            1, 2, 3, 4, // (0,0)
            5, 6, 7, 8, // (1,0)
            9, 10, 11, 12, // (0,1)
            13, 14, 15, 16, // (1,1)
        ],
    };
    assert_eq!(frame.pixel(0, 0), Some([1, 2, 3, 4]));
    assert_eq!(frame.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(frame.pixel(0, 1), Some([9, 10, 11, 12]));
    assert_eq!(frame.pixel(1, 1), Some([13, 14, 15, 16]));
}

#[test]
fn frame_pixel_out_of_bounds_is_none() {
    let frame = FrameRgba {
        width: 1,
        height: 1,
        data: vec![0; 4],
    };
    assert_eq!(frame.pixel(1, 0), None);
    assert_eq!(frame.pixel(0, 1), None);
}

#[test]
fn text_align_serde_uses_lowercase_and_defaults_center() {
    assert_eq!(
        serde_json::to_string(&TextAlign::Left).unwrap(),
        "\"left\""
    );
    let parsed: TextAlign = serde_json::from_str("\"right\"").unwrap();
    assert_eq!(parsed, TextAlign::Right);
    assert_eq!(TextAlign::default(), TextAlign::Center);
}
