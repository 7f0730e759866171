//! Color utility functions shared across the crate.
//!
//! Conversions from RGB triples to hex strings and to the terminal escape
//! sequences used when drawing bead swatches.

/// Format an RGB triple as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Two-column terminal block painted with a 24-bit background color.
///
/// # Arguments
/// * `rgb` - Fill color
///
/// # Returns
/// An ANSI escape sequence that resets itself afterwards
pub fn ansi_swatch(rgb: [u8; 3]) -> String {
    format!("\x1b[48;2;{};{};{}m  \x1b[0m", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex_pads_channels() {
        assert_eq!(rgb_to_hex([255, 165, 0]), "#FFA500");
        assert_eq!(rgb_to_hex([0, 8, 0]), "#000800");
    }

    #[test]
    fn test_ansi_swatch_resets() {
        let swatch = ansi_swatch([1, 2, 3]);
        assert!(swatch.starts_with("\x1b[48;2;1;2;3m"));
        assert!(swatch.ends_with("\x1b[0m"));
    }
}
