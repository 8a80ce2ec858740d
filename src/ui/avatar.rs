//! Avatar identicons.

use eframe::egui::{self, Color32};

const AVATAR_COLORS: [Color32; 12] = [
    Color32::from_rgb(231, 76, 60),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(52, 152, 219),
    Color32::from_rgb(155, 89, 182),
    Color32::from_rgb(241, 196, 15),
    Color32::from_rgb(230, 126, 34),
    Color32::from_rgb(26, 188, 156),
    Color32::from_rgb(236, 100, 166),
    Color32::from_rgb(41, 128, 185),
    Color32::from_rgb(39, 174, 96),
    Color32::from_rgb(192, 57, 43),
    Color32::from_rgb(22, 160, 133),
];

fn fnv1a(seed: &str) -> u64 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in seed.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    hash
}

/// Background color for an avatar seed. Stable across runs.
pub fn avatar_color(seed: &str) -> Color32 {
    AVATAR_COLORS[(fnv1a(seed) as usize) % AVATAR_COLORS.len()]
}

/// 15-bit pattern for a 5x5 identicon mirrored around the middle column.
pub fn identicon_pattern(seed: &str) -> u16 {
    // Keep the middle column partly filled so no avatar is blank.
    ((fnv1a(seed) >> 16) as u16 & 0x7FFF) | 0x0084
}

/// Paint a round identicon into `rect`.
pub fn paint_avatar(painter: &egui::Painter, rect: egui::Rect, seed: &str) {
    let size = rect.width().min(rect.height());
    let radius = size / 2.0;
    let center = rect.center();

    painter.circle_filled(center, radius, avatar_color(seed));

    let pattern = identicon_pattern(seed);
    let fg_color = Color32::from_white_alpha(200);
    let cell = size / 6.0;
    let origin = center - egui::vec2(cell * 2.5, cell * 2.5);

    for row in 0..5 {
        for col in 0..5 {
            let mirrored = if col < 3 { col } else { 4 - col };
            if pattern & (1 << (row * 3 + mirrored)) == 0 {
                continue;
            }
            let min = origin + egui::vec2(col as f32 * cell, row as f32 * cell);
            let cell_rect = egui::Rect::from_min_size(min, egui::vec2(cell * 0.85, cell * 0.85));
            if (cell_rect.center() - center).length() < radius - cell * 0.3 {
                painter.rect_filled(cell_rect, cell * 0.2, fg_color);
            }
        }
    }

    painter.circle_stroke(
        center,
        radius,
        egui::Stroke::new(1.0, Color32::from_black_alpha(20)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_deterministic() {
        assert_eq!(avatar_color("leo"), avatar_color("leo"));
        assert_eq!(identicon_pattern("leo"), identicon_pattern("leo"));
        assert_ne!(identicon_pattern("leo"), identicon_pattern("rauchg"));
    }

    #[test]
    fn test_pattern_never_blank() {
        for seed in ["", "?", "x", "my-team"] {
            let pattern = identicon_pattern(seed);
            assert_eq!(pattern & 0x0084, 0x0084);
            assert!(pattern < 0x8000);
        }
    }
}
