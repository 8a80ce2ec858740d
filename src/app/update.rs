//! Main update loop

use eframe::egui;

use super::FeedApp;
use crate::ui;

impl eframe::App for FeedApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        // Ticks arrive on a channel egui does not watch.
        if let Some(scheduler) = &self.scheduler {
            ctx.request_repaint_after(scheduler.period());
        }

        let theme = self.theme();

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .stroke(egui::Stroke::new(1.0, theme.border_subtle)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let title = self
                        .feed
                        .team
                        .as_ref()
                        .map(|t| t.display_name().to_string())
                        .unwrap_or_else(|| self.feed.user.username.clone());
                    ui.label(egui::RichText::new(title).strong().color(theme.text_primary));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("About").clicked() {
                            self.open_about();
                        }
                        let label = if theme.dark_mode { "Light" } else { "Dark" };
                        if ui.button(label).clicked() {
                            self.toggle_theme();
                            self.apply_theme(ctx);
                        }
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.surface[0]))
            .show(ctx, |ui| {
                if let Some(status) = &self.status {
                    ui::feed::render_status(ui, status, &theme);
                }
                let items = self.feed.rendered();
                if let Some(id) = ui::feed::render_feed(ui, &items, &theme) {
                    self.activate(id);
                }
            });

        if self.show_about {
            let mut open = true;
            if let Some(action) = ui::about::render_about(ctx, &mut open, &self.about, &theme) {
                self.host.open_external(action.url());
            }
            if !open {
                self.close_about();
            }
        }
    }
}
