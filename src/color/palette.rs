//! The xterm 256-color palette
//!
//! Colors 0-15: Standard ANSI colors
//! Colors 16-231: 6x6x6 color cube
//! Colors 232-255: Grayscale ramp
//!
//! Used both to read palette indices as colors and to approximate an RGB
//! color when sequences are limited to 256 or 16 colors.

use super::Rgb;

/// First index of the 6x6x6 color cube
pub const CUBE_START: u8 = 16;

static XTERM_256: [Rgb; 256] = build_palette();

const fn build_palette() -> [Rgb; 256] {
    let mut palette = [Rgb::new(0, 0, 0); 256];

    // Standard colors (0-7)
    palette[0] = Rgb::new(0, 0, 0); // Black
    palette[1] = Rgb::new(205, 0, 0); // Red
    palette[2] = Rgb::new(0, 205, 0); // Green
    palette[3] = Rgb::new(205, 205, 0); // Yellow
    palette[4] = Rgb::new(0, 0, 238); // Blue
    palette[5] = Rgb::new(205, 0, 205); // Magenta
    palette[6] = Rgb::new(0, 205, 205); // Cyan
    palette[7] = Rgb::new(229, 229, 229); // White

    // Bright colors (8-15)
    palette[8] = Rgb::new(127, 127, 127); // Bright Black
    palette[9] = Rgb::new(255, 0, 0); // Bright Red
    palette[10] = Rgb::new(0, 255, 0); // Bright Green
    palette[11] = Rgb::new(255, 255, 0); // Bright Yellow
    palette[12] = Rgb::new(92, 92, 255); // Bright Blue
    palette[13] = Rgb::new(255, 0, 255); // Bright Magenta
    palette[14] = Rgb::new(0, 255, 255); // Bright Cyan
    palette[15] = Rgb::new(255, 255, 255); // Bright White

    let cube_values = [0u8, 95, 135, 175, 215, 255];
    let mut i = 0;
    while i < 216 {
        palette[16 + i] = Rgb::new(cube_values[i / 36], cube_values[(i / 6) % 6], cube_values[i % 6]);
        i += 1;
    }

    let mut i = 0;
    while i < 24 {
        let gray = (i * 10 + 8) as u8;
        palette[232 + i] = Rgb::new(gray, gray, gray);
        i += 1;
    }

    palette
}

/// RGB value of a palette index
pub fn index_to_rgb(index: u8) -> Rgb {
    XTERM_256[usize::from(index)]
}

/// Parse a bare decimal palette index (`"0"` through `"255"`)
pub fn parse_index(s: &str) -> Option<Rgb> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u8>().ok().map(index_to_rgb)
}

/// Nearest palette index within `range`. Ties keep the lowest index.
fn nearest_in(rgb: Rgb, range: std::ops::RangeInclusive<u8>) -> u8 {
    let mut best = *range.start();
    let mut best_distance = u32::MAX;
    for index in range {
        let distance = rgb.distance_squared(index_to_rgb(index));
        if distance < best_distance {
            best = index;
            best_distance = distance;
            if distance == 0 {
                break;
            }
        }
    }
    best
}

/// Nearest color among the cube and grayscale ramp (16-255). The first 16
/// entries are skipped since terminals commonly remap them through themes.
pub fn nearest_256(rgb: Rgb) -> u8 {
    nearest_in(rgb, CUBE_START..=255)
}

/// Nearest color among the 16 ANSI colors
pub fn nearest_16(rgb: Rgb) -> u8 {
    nearest_in(rgb, 0..=15)
}
