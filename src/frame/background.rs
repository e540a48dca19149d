use image::{Rgba, RgbaImage};

/// Red channel must exceed this for a pixel to count as background.
pub const BACKGROUND_RED_MIN: u8 = 200;
/// Green channel must stay below this for a pixel to count as background.
pub const BACKGROUND_GREEN_MAX: u8 = 150;

/// Replace the solid red/orange backdrop with full transparency.
///
/// Any pixel with `red > BACKGROUND_RED_MIN` and `green < BACKGROUND_GREEN_MAX`
/// becomes `(0,0,0,0)`; every other pixel is left byte-for-byte intact,
/// alpha included. The input is not mutated.
///
/// The two-channel rule is deliberately blunt: it also wipes magenta, pure
/// red, and some pinks, even when those belong to the sprite. That is a
/// known limitation of the source assets' keying, preserved as-is.
pub fn remove_background(frame: &RgbaImage) -> RgbaImage {
    let mut out = frame.clone();
    for pixel in out.pixels_mut() {
        if is_background(*pixel) {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
    out
}

fn is_background(pixel: Rgba<u8>) -> bool {
    pixel[0] > BACKGROUND_RED_MIN && pixel[1] < BACKGROUND_GREEN_MAX
}
