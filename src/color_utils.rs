//schedwiz/src/color_utils.rs

// Event accent colors. Colors are assigned by the caller when a parsed
// schedule becomes an event; the parser itself never picks one.

/// Default palette: primary blue, secondary purple, accent orange,
/// success green, error red.
pub const DEFAULT_EVENT_COLORS: [&str; 5] = ["#0A84FF", "#5E5CE6", "#FF9500", "#34C759", "#FF3B30"];

/// Parse a hex color string like "#RRGGBB" or "RRGGBB" into u8 tuple.
pub fn parse_hex_to_u8(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Canonical "#RRGGBB" form of a color, or None if it does not parse.
pub fn normalize_hex(hex: &str) -> Option<String> {
    let (r, g, b) = parse_hex_to_u8(hex.trim())?;
    Some(format!("#{:02X}{:02X}{:02X}", r, g, b))
}

/// Picks a palette entry at random. Falls back to the first default color
/// when the palette is empty.
pub fn random_event_color(palette: &[String]) -> String {
    if palette.is_empty() {
        return DEFAULT_EVENT_COLORS[0].to_string();
    }
    palette[fastrand::usize(..palette.len())].clone()
}
