use raylib::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub accent: Color,
    pub text: Color,
}

const NAMED: [&str; 6] = ["default", "ember", "ocean", "forest", "dusk", "paper"];

fn palette(slot: usize) -> Palette {
    match slot {
        1 => Palette { // ember
            background: Color::new(38, 14, 8, 255),
            accent: Color::new(255, 122, 48, 255),
            text: Color::new(255, 236, 220, 255),
        },
        2 => Palette { // ocean
            background: Color::new(6, 28, 48, 255),
            accent: Color::new(64, 180, 230, 255),
            text: Color::new(226, 244, 255, 255),
        },
        3 => Palette { // forest
            background: Color::new(12, 32, 18, 255),
            accent: Color::new(120, 200, 110, 255),
            text: Color::new(230, 245, 228, 255),
        },
        4 => Palette { // dusk
            background: Color::new(30, 18, 44, 255),
            accent: Color::new(196, 120, 230, 255),
            text: Color::new(240, 230, 250, 255),
        },
        5 => Palette { // paper
            background: Color::new(244, 240, 230, 255),
            accent: Color::new(60, 60, 60, 255),
            text: Color::new(24, 24, 24, 255),
        },
        _ => Palette {
            background: Color::BLACK,
            accent: Color::WHITE,
            text: Color::WHITE,
        },
    }
}

/// Themes are opaque labels; unknown ones get a stable palette from their name.
pub fn palette_for(theme: &str) -> Palette {
    let slot = match NAMED.iter().position(|name| name.eq_ignore_ascii_case(theme)) {
        Some(slot) => slot,
        None => (fnv1a(theme.as_bytes()) % NAMED.len() as u64) as usize,
    };
    palette(slot)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// Same colour with its alpha scaled by `opacity` (0..=1).
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    let alpha = (f32::from(color.a) * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, alpha)
}
