#![no_main]

// This fuzz test feeds arbitrary bytes to the TGA scanner. It must never panic, and a
// scanned file can never report more matching pixels than it has pixels.

use libfuzzer_sys::fuzz_target;
use tga_zero_alpha::{scan_tga, TgaScan};

fuzz_target!(|data: &[u8]| {
    if let Ok(TgaScan::Scanned {
        header,
        matching_pixels,
    }) = scan_tga(data)
    {
        assert!(matching_pixels <= header.width as u64 * header.height as u64);
    }
});
