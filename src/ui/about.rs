//! About window.

use eframe::egui;

use crate::about::{AboutModel, DOCS_URL, HOMEPAGE_URL, SOURCE_URL};
use crate::ui::theme::FeedTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutAction {
    OpenDocs,
    OpenSource,
    OpenHomepage,
}

impl AboutAction {
    pub fn url(self) -> &'static str {
        match self {
            AboutAction::OpenDocs => DOCS_URL,
            AboutAction::OpenSource => SOURCE_URL,
            AboutAction::OpenHomepage => HOMEPAGE_URL,
        }
    }
}

/// Draw the window while `open` is set. The close button clears `open`.
pub fn render_about(
    ctx: &egui::Context,
    open: &mut bool,
    about: &AboutModel,
    theme: &FeedTheme,
) -> Option<AboutAction> {
    let mut action = None;

    egui::Window::new("About")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading(egui::RichText::new("Now").strong().color(theme.text_primary));
                ui.label(egui::RichText::new(about.heading()).color(theme.text_muted));
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.link("Docs").clicked() {
                        action = Some(AboutAction::OpenDocs);
                    }
                    if ui.link("Source").clicked() {
                        action = Some(AboutAction::OpenSource);
                    }
                    if ui.link("zeit.co").clicked() {
                        action = Some(AboutAction::OpenHomepage);
                    }
                });
                ui.add_space(8.0);
            });
        });

    action
}
