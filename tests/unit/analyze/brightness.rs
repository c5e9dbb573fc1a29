use super::*;

use std::sync::Arc;

fn solid(width: u32, height: u32, px: [u8; 4]) -> PreparedImage {
    PreparedImage {
        width,
        height,
        rgba8: Arc::new(px.repeat((width * height) as usize)),
    }
}

#[test]
fn black_is_zero_and_white_is_full() {
    assert!(measure_brightness(&solid(4, 4, [0, 0, 0, 255])) < 0.5);
    let white = measure_brightness(&solid(4, 4, [255, 255, 255, 255]));
    assert!((white - 255.0).abs() < 0.5);
}

#[test]
fn green_reads_brighter_than_blue() {
    let green = measure_brightness(&solid(2, 2, [0, 200, 0, 255]));
    let blue = measure_brightness(&solid(2, 2, [0, 0, 200, 255]));
    assert!(green > blue);
}

#[test]
fn empty_image_measures_zero() {
    let img = PreparedImage {
        width: 0,
        height: 0,
        rgba8: Arc::new(Vec::new()),
    };
    assert_eq!(measure_brightness(&img), 0.0);
}

#[test]
fn alpha_does_not_change_the_measure() {
    let opaque = measure_brightness(&solid(2, 2, [120, 80, 40, 255]));
    let translucent = measure_brightness(&solid(2, 2, [120, 80, 40, 10]));
    assert_eq!(opaque, translucent);
}

#[test]
fn url_variant_decodes_and_measures() {
    let img = image::RgbaImage::from_raw(1, 1, vec![255, 255, 255, 255]).unwrap();
    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();
    let dir = std::env::temp_dir().join(format!(
        "carrossel_brightness_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("w.png"), &png).unwrap();

    let b = measure_brightness_url("w.png", Some(&dir)).unwrap();
    assert!((b - 255.0).abs() < 0.5);

    std::fs::remove_dir_all(&dir).ok();
}
