use egui::{Color32, FontId, FontFamily, Rounding, Stroke, Style, TextStyle, Visuals};

pub fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    // Phosphor icons as fallback in the proportional family
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
}

pub fn setup_theme(ctx: &egui::Context) {
    let mut style = Style::default();

    let mut visuals = Visuals::dark();

    // Background colors - near black
    let bg = Color32::from_rgb(10, 10, 9);
    visuals.panel_fill = bg;
    visuals.window_fill = bg;
    visuals.faint_bg_color = Color32::from_rgb(22, 22, 20);
    visuals.extreme_bg_color = bg;

    // Widget colors - warm grays (R=G > B for warmth)
    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(40, 40, 38);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(176, 176, 168));

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(56, 56, 52);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(200, 200, 192));

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(80, 80, 74);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    // Accent color for active/pressed widgets
    let accent = accent_color();
    visuals.widgets.active.bg_fill = accent;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::BLACK);

    visuals.selection.bg_fill = accent;
    visuals.selection.stroke = Stroke::new(1.0, Color32::BLACK);
    visuals.hyperlink_color = accent;

    // Rounded corners
    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);
    visuals.widgets.active.rounding = Rounding::same(6.0);
    visuals.window_rounding = Rounding::same(8.0);

    style.visuals = visuals;

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(20.0);

    ctx.set_style(style);
}

/// Station amber, used for live accents throughout.
pub fn accent_color() -> Color32 {
    Color32::from_rgb(0xff, 0x9f, 0x1c)
}

/// Returns (bg_color, border_color) for day columns.
pub fn column_colors() -> (Color32, Color32) {
    (
        Color32::from_rgb(18, 18, 16),
        Color32::from_rgb(44, 44, 40),
    )
}

/// Returns (day_name_color, date_color) for day headers.
pub fn header_text_colors(is_empty: bool) -> (Color32, Color32) {
    if is_empty {
        (Color32::from_rgb(96, 96, 90), Color32::from_rgb(96, 96, 90))
    } else {
        (Color32::from_rgb(224, 224, 216), Color32::from_rgb(136, 136, 128))
    }
}

/// Returns (bg_color, title_color, secondary_color) for show blocks.
pub fn show_block_colors() -> (Color32, Color32, Color32) {
    (
        Color32::from_rgb(30, 30, 28),
        Color32::WHITE,
        Color32::from_rgb(184, 184, 176),
    )
}

/// Returns (bg_color, border_color, text_color) for the detail popover.
pub fn popover_colors() -> (Color32, Color32, Color32) {
    (
        Color32::from_rgb(26, 26, 24),
        Color32::from_rgb(64, 64, 58),
        Color32::from_rgb(216, 216, 208),
    )
}
