//! The scrolling event list.

use eframe::egui::{self, text::LayoutJob, FontId, TextFormat};

use crate::feed::{RenderedItem, Span, Summary};
use crate::ui::avatar::paint_avatar;
use crate::ui::theme::FeedTheme;

const AVATAR_SIZE: f32 = 23.0;
const AGE_COLUMN: f32 = 36.0;
const PADDING: f32 = 10.0;
const MIN_ITEM_HEIGHT: f32 = 44.0;

/// Build the text layout for a summary. Code spans start on their own line.
pub fn summary_layout(summary: &Summary, theme: &FeedTheme, wrap_width: f32) -> LayoutJob {
    let body = FontId::proportional(13.0);
    let code = FontId::monospace(12.0);

    let mut job = LayoutJob::default();
    job.wrap.max_width = wrap_width;

    for span in &summary.spans {
        match span {
            Span::Text(text) => job.append(
                text,
                0.0,
                TextFormat::simple(body.clone(), theme.text_secondary),
            ),
            Span::Bold(text) => job.append(
                text,
                0.0,
                TextFormat::simple(body.clone(), theme.text_primary),
            ),
            Span::Code(text) => {
                if !job.text.is_empty() && !job.text.ends_with('\n') {
                    job.append("\n", 0.0, TextFormat::simple(body.clone(), theme.text_secondary));
                }
                job.append(
                    text,
                    0.0,
                    TextFormat {
                        font_id: code.clone(),
                        color: theme.text_secondary,
                        background: theme.surface[3],
                        ..Default::default()
                    },
                );
            }
        }
    }
    job
}

/// Draw every item. Returns the id of the item clicked this frame, if any.
pub fn render_feed(ui: &mut egui::Ui, items: &[RenderedItem], theme: &FeedTheme) -> Option<u64> {
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            if items.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("No events yet").color(theme.text_muted));
                });
                return;
            }
            for item in items {
                if render_item(ui, item, theme) {
                    clicked = Some(item.id);
                }
            }
        });

    clicked
}

fn render_item(ui: &mut egui::Ui, item: &RenderedItem, theme: &FeedTheme) -> bool {
    let width = ui.available_width();
    let text_left = PADDING + AVATAR_SIZE + PADDING;
    let wrap_width = (width - text_left - AGE_COLUMN - PADDING).max(40.0);

    let job = summary_layout(&item.summary, theme, wrap_width);
    let galley = ui.fonts(|f| f.layout_job(job));
    let height = (galley.size().y + 2.0 * PADDING).max(MIN_ITEM_HEIGHT);

    let sense = if item.clickable {
        egui::Sense::click()
    } else {
        egui::Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), sense);

    let painter = ui.painter();
    if item.clickable && response.hovered() {
        painter.rect_filled(rect, 0.0, theme.surface[2]);
    }

    let avatar_rect = egui::Rect::from_min_size(
        rect.min + egui::vec2(PADDING, PADDING),
        egui::vec2(AVATAR_SIZE, AVATAR_SIZE),
    );
    paint_avatar(painter, avatar_rect, &item.avatar);

    painter.galley(
        rect.min + egui::vec2(text_left, PADDING),
        galley,
        theme.text_secondary,
    );

    if let Some(age) = &item.age {
        painter.text(
            egui::pos2(rect.max.x - PADDING, rect.min.y + PADDING),
            egui::Align2::RIGHT_TOP,
            age,
            FontId::proportional(11.0),
            theme.text_muted,
        );
    }

    painter.hline(
        rect.x_range(),
        rect.max.y - 0.5,
        egui::Stroke::new(1.0, theme.border_subtle),
    );

    if item.clickable {
        response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
    } else {
        false
    }
}

/// Banner for backend errors, drawn above the list.
pub fn render_status(ui: &mut egui::Ui, status: &str, theme: &FeedTheme) {
    ui.horizontal(|ui| {
        ui.add_space(PADDING);
        ui.label(egui::RichText::new(status).color(theme.error).size(12.0));
    });
    ui.add_space(4.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_text_and_bold() {
        let theme = FeedTheme::light();
        let summary = Summary::new().text("You aliased ").bold("app.com");
        let job = summary_layout(&summary, &theme, 200.0);
        assert_eq!(job.text, "You aliased app.com");
        assert_eq!(job.sections.len(), 2);
        assert_eq!(job.sections[1].format.color, theme.text_primary);
        assert_eq!(job.wrap.max_width, 200.0);
    }

    #[test]
    fn test_code_starts_new_line() {
        let theme = FeedTheme::dark();
        let summary = Summary::new().text("You deployed").code("app-abc.now.sh");
        let job = summary_layout(&summary, &theme, 200.0);
        assert_eq!(job.text, "You deployed\napp-abc.now.sh");
        let last = job.sections.last().unwrap();
        assert_eq!(last.format.font_id.family, egui::FontFamily::Monospace);
        assert_eq!(last.format.background, theme.surface[3]);
    }

    #[test]
    fn test_leading_code_has_no_blank_line() {
        let theme = FeedTheme::light();
        let job = summary_layout(&Summary::new().code("x.now.sh"), &theme, 100.0);
        assert_eq!(job.text, "x.now.sh");
    }
}
