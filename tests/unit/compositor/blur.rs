use super::*;

#[test]
fn kernel_weights_sum_to_q16_one() {
    let k = gaussian_kernel_q16(16, 8.0).unwrap();
    assert_eq!(k.len(), 33);
    let sum: u64 = k.iter().map(|&w| u64::from(w)).sum();
    assert_eq!(sum, 65536);
}

#[test]
fn kernel_is_symmetric_and_peaks_at_center() {
    let k = gaussian_kernel_q16(4, 2.0).unwrap();
    let mid = k.len() / 2;
    for i in 0..mid {
        assert_eq!(k[i], k[k.len() - 1 - i]);
    }
    assert!(k[mid] >= *k.iter().max().unwrap() - 1);
}

#[test]
fn radius_zero_kernel_is_identity() {
    let k = gaussian_kernel_q16(0, 8.0).unwrap();
    assert_eq!(k, vec![1 << 16]);

    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let mut dst = vec![0u8; src.len()];
    let mut tmp = vec![0u8; src.len()];
    blur_rgba8_premul_q16(&src, &mut dst, &mut tmp, 2, 1, &k);
    assert_eq!(dst, src);
}

#[test]
fn bad_sigma_is_rejected() {
    assert!(gaussian_kernel_q16(4, 0.0).is_err());
    assert!(gaussian_kernel_q16(4, -1.0).is_err());
    assert!(gaussian_kernel_q16(4, f32::NAN).is_err());
}

#[test]
fn constant_image_is_unchanged() {
    let (w, h) = (6u32, 5u32);
    let px = [10u8, 20, 30, 255];
    let src = px.repeat((w * h) as usize);
    let mut dst = vec![0u8; src.len()];
    let mut tmp = vec![0u8; src.len()];
    let k = gaussian_kernel_q16(3, 1.5).unwrap();
    blur_rgba8_premul_q16(&src, &mut dst, &mut tmp, w, h, &k);
    assert_eq!(dst, src);
}

#[test]
fn blur_spreads_energy_and_preserves_total() {
    let (w, h) = (9u32, 9u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((4 * w + 4) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let mut dst = vec![0u8; src.len()];
    let mut tmp = vec![0u8; src.len()];
    let k = gaussian_kernel_q16(2, 1.2).unwrap();
    blur_rgba8_premul_q16(&src, &mut dst, &mut tmp, w, h, &k);

    let nonzero = dst.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);

    let sum_a: u32 = dst.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 8);
}
