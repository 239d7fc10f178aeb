#![no_main]

// This fuzz test builds a scannable TGA around arbitrary pixels and compares the count
// against a naive per-pixel reference.

use libfuzzer_sys::{arbitrary, fuzz_target};
use tga_zero_alpha::{scan_tga, TgaScan};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Image {
    pub id: Vec<u8>,
    pub pixels: Vec<[u8; 4]>,
}

fuzz_target!(|image: Image| {
    let id_length = image.id.len().min(u8::MAX as usize);
    let width = image.pixels.len().min(u16::MAX as usize);

    let mut data = vec![0u8; 18];
    data[0] = id_length as u8;
    data[2] = 2;
    data[12..14].copy_from_slice(&(width as u16).to_le_bytes());
    data[14..16].copy_from_slice(&1u16.to_le_bytes());
    data[16] = 32;
    data[17] = 8;
    data.extend_from_slice(&image.id[..id_length]);
    for pixel in &image.pixels[..width] {
        data.extend_from_slice(pixel);
    }

    let expected = image.pixels[..width]
        .iter()
        .filter(|&&[b, g, r, a]| b != 0 && g != 0 && r != 0 && a == 0)
        .count() as u64;

    match scan_tga(&data) {
        Ok(TgaScan::Scanned {
            matching_pixels, ..
        }) => assert_eq!(matching_pixels, expected),
        other => panic!("Expected a scanned image, got {other:?}"),
    }
});
