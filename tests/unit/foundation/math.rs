use super::*;

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 0), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
}

#[test]
fn premultiply_zero_alpha_clears_color() {
    let mut px = vec![200u8, 100, 50, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}

#[test]
fn premultiply_opaque_is_identity() {
    let mut px = vec![200u8, 100, 50, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![200, 100, 50, 255]);
}

#[test]
fn unpremultiply_round_trips_within_rounding() {
    let orig = [200u8, 100, 50, 128];
    let mut px = orig.to_vec();
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    for c in 0..3 {
        assert!(
            (i16::from(px[c]) - i16::from(orig[c])).abs() <= 2,
            "channel {c}: {} vs {}",
            px[c],
            orig[c]
        );
    }
    assert_eq!(px[3], 128);
}
