use super::*;

#[test]
fn pixmap_rejects_mismatched_byte_len() {
    assert!(pixmap_from_premul_bytes(&[0u8; 8], 2, 2).is_err());
}

#[test]
fn pixmap_round_trips_bytes() {
    let bytes = [10u8, 20, 30, 255, 1, 2, 3, 4];
    let pixmap = pixmap_from_premul_bytes(&bytes, 2, 1).unwrap();
    assert_eq!(pixmap.data_as_u8_slice(), &bytes);
}

#[test]
fn over_with_transparent_src_keeps_dst() {
    let mut dst = vec![50u8, 60, 70, 255];
    premul_over_in_place(&mut dst, &[0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![50, 60, 70, 255]);
}

#[test]
fn over_with_opaque_src_replaces_dst() {
    let mut dst = vec![50u8, 60, 70, 255];
    premul_over_in_place(&mut dst, &[1, 2, 3, 255]).unwrap();
    assert_eq!(dst, vec![1, 2, 3, 255]);
}

#[test]
fn over_blends_half_transparent_black() {
    // 50% black over opaque white: premultiplied black at a=128 is all zeros.
    let mut dst = vec![255u8, 255, 255, 255];
    premul_over_in_place(&mut dst, &[0, 0, 0, 128]).unwrap();
    assert_eq!(dst[3], 255);
    assert!(dst[0] > 120 && dst[0] < 135, "got {}", dst[0]);
}

#[test]
fn over_rejects_length_mismatch() {
    let mut dst = vec![0u8; 8];
    assert!(premul_over_in_place(&mut dst, &[0u8; 4]).is_err());
}

#[test]
fn clear_makes_pixmap_fully_transparent() {
    let mut pixmap = pixmap_from_premul_bytes(&[9u8; 16], 2, 2).unwrap();
    clear_pixmap_to_transparent(&mut pixmap);
    assert!(pixmap.data_as_u8_slice().iter().all(|&b| b == 0));
}
