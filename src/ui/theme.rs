//! Color themes and global styling.
//!
//! Two palettes, light (default) and dark, sharing one set of semantic slots:
//!
//! - `surface[0]`: window background
//! - `surface[1]`: header bar
//! - `surface[2]`: hovered feed item
//! - `surface[3]`: code spans and pressed states
//!
//! Text comes in three weights (`text_primary` for bold entities, `text_secondary`
//! for sentence text, `text_muted` for ages and metadata).

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub struct FeedTheme {
    pub name: &'static str,
    pub dark_mode: bool,
    pub surface: [Color32; 4],
    pub accent: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border_subtle: Color32,
}

impl FeedTheme {
    pub fn light() -> Self {
        Self {
            name: "Light",
            dark_mode: false,
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(250, 250, 250),
                Color32::from_rgb(243, 243, 243),
                Color32::from_rgb(234, 234, 234),
            ],
            accent: Color32::from_rgb(0, 118, 255),
            error: Color32::from_rgb(238, 0, 0),
            text_primary: Color32::from_rgb(0, 0, 0),
            text_secondary: Color32::from_rgb(68, 68, 68),
            text_muted: Color32::from_rgb(153, 153, 153),
            border_subtle: Color32::from_rgb(234, 234, 234),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark",
            dark_mode: true,
            surface: [
                Color32::from_rgb(0, 0, 0),
                Color32::from_rgb(17, 17, 17),
                Color32::from_rgb(28, 28, 28),
                Color32::from_rgb(40, 40, 40),
            ],
            accent: Color32::from_rgb(50, 145, 255),
            error: Color32::from_rgb(255, 68, 68),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(187, 187, 187),
            text_muted: Color32::from_rgb(119, 119, 119),
            border_subtle: Color32::from_rgb(34, 34, 34),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Text hierarchy used by the feed.
///
/// `feed_age` is the small muted label on the right of each item; `feed_code` is
/// used for deployment URLs and other literals.
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(13.0, Proportional)),
        (TextStyle::Button, FontId::new(12.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(12.0, Monospace)),
        (TextStyle::Name("feed_age".into()), FontId::new(11.0, Proportional)),
        (TextStyle::Name("feed_code".into()), FontId::new(12.0, Monospace)),
    ]
    .into()
}

/// Apply visuals and spacing for `theme` to the whole context. Called at startup
/// and whenever the theme is toggled.
pub fn apply_app_style(ctx: &egui::Context, theme: &FeedTheme) {
    let mut style = (*ctx.style()).clone();
    style.visuals = if theme.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    style.visuals.panel_fill = theme.surface[0];
    style.visuals.window_fill = theme.surface[0];
    style.visuals.hyperlink_color = theme.accent;

    for widget in [
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.bg_stroke = egui::Stroke::NONE;
        widget.corner_radius = egui::CornerRadius::same(5);
    }
    style.visuals.widgets.inactive.weak_bg_fill = theme.surface[2];
    style.visuals.widgets.hovered.weak_bg_fill = theme.surface[3];
    style.visuals.widgets.active.weak_bg_fill = theme.accent;

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let light = FeedTheme::light();
        assert_eq!(light.name, "Light");
        assert!(!light.dark_mode);
        assert_eq!(FeedTheme::for_mode(true), FeedTheme::dark());
        assert_eq!(FeedTheme::for_mode(false), light);
    }

    #[test]
    fn test_custom_text_styles_present() {
        let styles = configure_text_styles();
        assert!(styles.contains_key(&TextStyle::Name("feed_age".into())));
        assert_eq!(
            styles[&TextStyle::Name("feed_code".into())].family,
            FontFamily::Monospace
        );
    }
}
