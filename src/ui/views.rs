use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Ui};

use crate::config::ClockFormat;
use crate::schedule::{
    column_height, show_geometry, BlockId, DayColumn, PopoverPlacement, ShowContent, WeekSchedule,
    WeekTimeBound, EMPTY_COLUMN_HEIGHT_PX,
};

use super::theme;

/// Fixed width of one day column in a strip.
pub const DAY_WIDTH: f32 = 150.0;
const DAY_GAP: f32 = 8.0;
const BLOCK_SIDE_MARGIN: f32 = 4.0;
/// Blocks whose duration rounds below this still get a visible sliver.
const MIN_BLOCK_HEIGHT: f32 = 14.0;
const POPOVER_PADDING: f32 = 8.0;

/// A block interaction the app may answer with a popover.
pub struct PopoverRequest {
    pub block: BlockId,
    pub trigger: Rect,
    pub description: String,
    pub pointer_pos: Option<Pos2>,
}

/// What the app needs to know about one frame of a week strip.
#[derive(Default)]
pub struct WeekStripResult {
    pub hovered: Option<PopoverRequest>,
    pub touched: Option<PopoverRequest>,
    pub scroll_offset: f32,
}

/// Horizontal scroll offset that brings `day_index` to the strip's left
/// edge, for the post-load snap to the first day with content.
pub fn snap_offset(day_index: usize) -> f32 {
    day_index as f32 * (DAY_WIDTH + DAY_GAP)
}

/// One horizontally-scrollable row of seven day columns. Dragging scrolls
/// (egui's built-in drag-to-scroll); `snap_to` is a one-shot offset the
/// app passes on the frame after a schedule loads.
pub fn render_week_strip(
    ui: &mut Ui,
    week_index: usize,
    week: &WeekSchedule,
    clock_format: ClockFormat,
    snap_to: Option<f32>,
) -> WeekStripResult {
    let mut result = WeekStripResult::default();

    let mut area = egui::ScrollArea::horizontal()
        .id_salt(("week_strip", week_index))
        .auto_shrink([false, true]);
    if let Some(offset) = snap_to {
        area = area.horizontal_scroll_offset(offset);
    }

    let output = area.show(ui, |ui| {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = DAY_GAP;
            for (day_index, day) in week.days.iter().enumerate() {
                render_day_column(
                    ui,
                    week_index,
                    day_index,
                    day,
                    &week.bound,
                    clock_format,
                    &mut result,
                );
            }
        });
    });

    result.scroll_offset = output.state.offset.x;
    result
}

fn render_day_column(
    ui: &mut Ui,
    week_index: usize,
    day_index: usize,
    day: &DayColumn,
    bound: &WeekTimeBound,
    clock_format: ClockFormat,
    result: &mut WeekStripResult,
) {
    let is_scaled = !day.is_empty() && bound.has_scale();
    let height = if is_scaled {
        column_height(bound)
    } else {
        EMPTY_COLUMN_HEIGHT_PX
    };

    let (rect, _) = ui.allocate_exact_size(vec2(DAY_WIDTH, height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let (column_bg, column_border) = theme::column_colors();
    painter.rect(rect, 6.0, column_bg, Stroke::new(1.0, column_border));

    let (day_color, date_color) = theme::header_text_colors(day.is_empty());
    painter.text(
        pos2(rect.min.x + 8.0, rect.min.y + 8.0),
        Align2::LEFT_TOP,
        day.day_name(),
        FontId::proportional(14.0),
        day_color,
    );
    if !day.is_empty() {
        painter.text(
            pos2(rect.min.x + 8.0, rect.min.y + 25.0),
            Align2::LEFT_TOP,
            day.date.format("%d.%m.%Y").to_string(),
            FontId::proportional(11.0),
            date_color,
        );
    }

    if !is_scaled {
        return;
    }

    for (slot, show) in day.shows.iter().enumerate() {
        let geometry = show_geometry(show, bound);
        let block_rect = Rect::from_min_size(
            pos2(
                rect.min.x + BLOCK_SIDE_MARGIN,
                rect.min.y + geometry.top_offset_px,
            ),
            vec2(
                DAY_WIDTH - BLOCK_SIDE_MARGIN * 2.0,
                geometry.height_px.max(MIN_BLOCK_HEIGHT),
            ),
        );

        let block = BlockId {
            week: week_index,
            day: day_index,
            slot,
        };
        let response = ui.interact(
            block_rect,
            ui.id().with(("show", week_index, day_index, slot)),
            Sense::hover(),
        );

        let content = ShowContent::from_show(show, clock_format);
        paint_show_block(ui, block_rect, &content, response.hovered());

        if response.hovered() {
            let (any_touches, primary_down, pointer_pos) = ui.input(|input| {
                (
                    input.any_touches(),
                    input.pointer.primary_down(),
                    input.pointer.interact_pos(),
                )
            });

            let request = PopoverRequest {
                block,
                trigger: block_rect,
                description: content.description.clone(),
                pointer_pos,
            };

            if any_touches {
                // Explicit show-on-tap: only a pressed touch summons the box.
                if primary_down {
                    result.touched = Some(request);
                }
            } else {
                result.hovered = Some(request);
            }
        }
    }
}

fn paint_show_block(ui: &Ui, rect: Rect, content: &ShowContent, hovered: bool) {
    let (block_bg, title_color, secondary_color) = theme::show_block_colors();
    let accent = theme::accent_color();

    let border = if hovered {
        Stroke::new(1.0, accent)
    } else {
        Stroke::new(1.0, Color32::from_rgb(52, 52, 48))
    };

    let painter = ui.painter().with_clip_rect(rect);
    painter.rect(rect, 4.0, block_bg, border);

    // Left accent stripe
    let stripe = Rect::from_min_size(rect.min, vec2(3.0, rect.height()));
    painter.rect_filled(stripe, 0.0, accent);

    let text_left = rect.min.x + 3.0 + 5.0;
    let text_width = (rect.max.x - 4.0 - text_left).max(10.0);
    let mut y = rect.min.y + 3.0;

    painter.text(
        pos2(text_left, y),
        Align2::LEFT_TOP,
        &content.time_range,
        FontId::proportional(10.5),
        secondary_color,
    );
    y += 14.0;

    let title = painter.layout(
        content.title.clone(),
        FontId::proportional(13.0),
        title_color,
        text_width,
    );
    painter.galley(pos2(text_left, y), title.clone(), title_color);
    y += title.rect.height() + 2.0;

    if let Some(host) = &content.host {
        let host_line = painter.layout(
            format!("Hosted by {}", host),
            FontId::proportional(11.0),
            secondary_color,
            text_width,
        );
        painter.galley(pos2(text_left, y), host_line, secondary_color);
    }
}

/// Height the popover needs for `description` at `width`, the measurement
/// half of the measure-then-correct placement pass.
pub fn popover_height(ctx: &egui::Context, description: &str, width: f32) -> f32 {
    let text_width = (width - POPOVER_PADDING * 2.0).max(10.0);
    let galley = ctx.fonts(|fonts| {
        fonts.layout(
            description.to_string(),
            FontId::proportional(13.0),
            Color32::WHITE,
            text_width,
        )
    });
    galley.rect.height() + POPOVER_PADDING * 2.0
}

/// Draw the single detail popover at its engine-computed position.
pub fn draw_popover(ctx: &egui::Context, placement: &PopoverPlacement, description: &str) {
    let (bg, border, text_color) = theme::popover_colors();

    egui::Area::new(egui::Id::new("schedule_popover"))
        .order(egui::Order::Tooltip)
        .fixed_pos(placement.pos())
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(bg)
                .stroke(Stroke::new(1.0, border))
                .rounding(egui::Rounding::same(6.0))
                .inner_margin(egui::Margin::same(POPOVER_PADDING))
                .show(ui, |ui| {
                    ui.set_width(placement.width - POPOVER_PADDING * 2.0);
                    ui.add(
                        egui::Label::new(
                            RichText::new(description).size(13.0).color(text_color),
                        )
                        .wrap(),
                    );
                });
        });
}
