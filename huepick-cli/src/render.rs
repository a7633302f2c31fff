/// Terminal color rendering: HSL to RGB, hex codes, 24-bit ANSI swatches.
///
/// Everything degrades to plain text with --ascii; the swatch keeps its
/// width either way so tables stay aligned on terminals without truecolor.
use huepick_core::ColorItem;

const SWATCH_WIDTH: usize = 6;

/// Convert HSL (degrees, percent, percent) to 8-bit RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hue_prime = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hue_prime as usize {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = l - chroma / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

/// CSS-style lowercase hex code.
pub fn hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// A fixed-width color block: truecolor background, or bare padding in
/// ascii mode.
pub fn swatch(r: u8, g: u8, b: u8, ascii: bool) -> String {
    if ascii {
        " ".repeat(SWATCH_WIDTH)
    } else {
        format!("\x1b[48;2;{r};{g};{b}m{}\x1b[0m", " ".repeat(SWATCH_WIDTH))
    }
}

/// Show the round's batch as a numbered list of swatches.
pub fn print_batch(batch: &[&ColorItem], round: usize, max_rounds: usize, ascii: bool) {
    println!("\nRound {round}/{max_rounds} — pick what you like (numbers, p = pass, h = help)");
    for (position, color) in batch.iter().enumerate() {
        let (r, g, b) = hsl_to_rgb(color.hue, color.saturation, color.lightness);
        println!(
            " {:>2}. {} {}  hsl({:.0}, {:.0}%, {:.0}%)",
            position + 1,
            swatch(r, g, b, ascii),
            hex(r, g, b),
            color.hue,
            color.saturation,
            color.lightness,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primary_anchors() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), (0, 0, 255));
        assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0), (255, 255, 0));
    }

    #[test]
    fn test_hsl_grays_ignore_hue() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
        assert_eq!(hsl_to_rgb(123.0, 0.0, 100.0), (255, 255, 255));
        assert_eq!(hsl_to_rgb(200.0, 0.0, 50.0), (128, 128, 128));
    }

    #[test]
    fn test_hue_wraps_around_the_wheel() {
        assert_eq!(hsl_to_rgb(360.0, 80.0, 60.0), hsl_to_rgb(0.0, 80.0, 60.0));
        assert_eq!(hsl_to_rgb(-120.0, 80.0, 60.0), hsl_to_rgb(240.0, 80.0, 60.0));
        assert_eq!(hsl_to_rgb(725.0, 80.0, 60.0), hsl_to_rgb(5.0, 80.0, 60.0));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(hex(255, 0, 0), "#ff0000");
        assert_eq!(hex(0, 128, 255), "#0080ff");
        assert_eq!(hex(0, 0, 0), "#000000");
    }

    #[test]
    fn test_swatch_modes() {
        let colored = swatch(10, 20, 30, false);
        assert!(colored.contains("\x1b[48;2;10;20;30m"));
        assert!(colored.ends_with("\x1b[0m"));

        let plain = swatch(10, 20, 30, true);
        assert_eq!(plain, "      ");
    }
}
