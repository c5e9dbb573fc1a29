use super::*;

use base64::Engine as _;

fn solid_data_url(px: [u8; 4]) -> String {
    let img = image::RgbaImage::from_raw(2, 2, px.repeat(4)).unwrap();
    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&png)
    )
}

fn slide(title: &str, px: [u8; 4]) -> Slide {
    Slide {
        title: title.to_string(),
        body: String::new(),
        image_url: solid_data_url(px),
        ..Slide::default()
    }
}

#[test]
fn single_export_name_sanitizes_title() {
    assert_eq!(single_export_name("Hello World"), "hello_world.png");
    assert_eq!(single_export_name("My Great Idea!!"), "my_great_idea__.png");
    assert_eq!(single_export_name("Olá, Mundo!"), "ol___mundo_.png");
    assert_eq!(single_export_name("123-abc"), "123_abc.png");
    assert_eq!(single_export_name(""), "slide.png");
}

#[test]
fn archive_entry_names_are_one_based() {
    assert_eq!(archive_entry_name(0), "slide-1.png");
    assert_eq!(archive_entry_name(6), "slide-7.png");
}

#[test]
fn export_carousel_rejects_empty_input() {
    let err = export_carousel(&CompositorOpts::default(), &[], ExportThreading::default())
        .unwrap_err();
    assert!(matches!(err, CarrosselError::Validation(_)));
}

#[test]
fn zero_threads_is_rejected() {
    let slides = [slide("a", [255, 0, 0, 255])];
    let threading = ExportThreading {
        parallel: true,
        threads: Some(0),
    };
    // single-slide input short-circuits the pool, so use two slides
    let slides2 = [slides[0].clone(), slide("b", [0, 255, 0, 255])];
    let err = export_carousel(&CompositorOpts::default(), &slides2, threading).unwrap_err();
    assert!(matches!(err, CarrosselError::Validation(_)));
}

#[test]
fn pool_build_failures_are_not_provider_errors() {
    assert!(build_thread_pool(None).is_ok());
    assert!(build_thread_pool(Some(2)).is_ok());
    // only the explicit zero-thread check is a validation error; anything
    // the pool builder itself reports surfaces as a wrapped Other, never
    // as a Generation (provider) failure
    let err = build_thread_pool(Some(0)).unwrap_err();
    assert!(matches!(err, CarrosselError::Validation(_)));
}

#[test]
fn export_single_names_file_after_title() {
    let file = export_single(&CompositorOpts::default(), &slide("Meu Slide", [9, 9, 9, 255]))
        .unwrap();
    assert_eq!(file.name, "meu_slide.png");
    assert_eq!(&file.bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn export_carousel_bundles_entries_in_order() {
    let slides = [
        slide("one", [255, 0, 0, 255]),
        slide("two", [0, 255, 0, 255]),
        slide("three", [0, 0, 255, 255]),
    ];
    let file = export_carousel(
        &CompositorOpts::default(),
        &slides,
        ExportThreading::default(),
    )
    .unwrap();
    assert_eq!(file.name, CAROUSEL_ARCHIVE_NAME);

    let mut archive = zip::ZipArchive::new(Cursor::new(file.bytes)).unwrap();
    assert_eq!(archive.len(), 3);
    for (i, expected) in ["slide-1.png", "slide-2.png", "slide-3.png"].iter().enumerate() {
        let entry = archive.by_index(i).unwrap();
        assert_eq!(entry.name(), *expected);
    }
}

#[test]
fn parallel_export_matches_sequential_entry_order() {
    let slides = [
        slide("p1", [10, 0, 0, 255]),
        slide("p2", [0, 10, 0, 255]),
        slide("p3", [0, 0, 10, 255]),
    ];
    let threading = ExportThreading {
        parallel: true,
        threads: Some(2),
    };
    let file = export_carousel(&CompositorOpts::default(), &slides, threading).unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(file.bytes)).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(names, ["slide-1.png", "slide-2.png", "slide-3.png"]);
}

#[test]
fn failing_slide_aborts_the_export() {
    let slides = [
        slide("good", [1, 2, 3, 255]),
        Slide {
            title: "bad".into(),
            image_url: "missing.png".into(),
            ..Slide::default()
        },
    ];
    let err = export_carousel(
        &CompositorOpts::default(),
        &slides,
        ExportThreading::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CarrosselError::ImageLoad(_)));
}
