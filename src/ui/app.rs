use chrono::Local;
use eframe::egui;
use egui::{vec2, Color32, RichText};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use crate::api::{FeedClient, FeedError};
use crate::config::{ClockFormat, Config};
use crate::schedule::{
    box_width_for, place_for_pointer, place_for_touch, Anchor, PopoverState, TwoWeekSchedule,
};
use super::views::{self, PopoverRequest, WeekStripResult};

const WEEK_TITLES: [&str; 2] = ["This week", "Next week"];

pub struct ScheduleApp {
    config: Config,

    // Data - one best-effort fetch per pass, no partial renders
    schedule: Option<TwoWeekSchedule>,
    loading: bool,
    is_offline: bool,
    status_message: Option<String>,

    // Popover interaction session
    popovers: PopoverSession,
    // x offsets of the two week strips plus the page's own y offset;
    // any change hides the active popover
    scroll_offsets: [f32; 3],
    // one-shot snap targets applied on the frame after a schedule loads
    pending_snap: [Option<f32>; 2],

    // Settings dialog
    show_settings: bool,
    settings_feed_url: String,
    settings_station_name: String,
    settings_clock_format: ClockFormat,

    // Async communication
    runtime: tokio::runtime::Runtime,
    result_rx: Receiver<AsyncResult>,
    result_tx: Sender<AsyncResult>,
}

/// The interaction session that owns the single visible popover. Only the
/// pointer/touch sequence that opened the box writes here, and its
/// terminating event resets the session, so no stale anchor survives.
#[derive(Default)]
struct PopoverSession {
    state: PopoverState,
    // payload of an active touch popover, kept until the touch ends
    touch_request: Option<PopoverRequest>,
}

impl PopoverSession {
    fn reset(&mut self) {
        self.state.hide();
        self.touch_request = None;
    }
}

enum AsyncResult {
    ScheduleLoaded(Box<TwoWeekSchedule>),
    Offline,
    Error(String),
}

impl ScheduleApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_default();
        super::setup_fonts(&cc.egui_ctx);
        super::setup_theme(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        let (result_tx, result_rx) = channel();

        let mut app = Self {
            settings_feed_url: config.feed_url.clone(),
            settings_station_name: config.station_name.clone(),
            settings_clock_format: config.clock_format,
            config,
            schedule: None,
            loading: false,
            is_offline: false,
            status_message: None,
            popovers: PopoverSession::default(),
            scroll_offsets: [0.0; 3],
            pending_snap: [None; 2],
            show_settings: false,
            runtime,
            result_rx,
            result_tx,
        };

        app.refresh_schedule();
        app
    }

    /// Start one best-effort fetch-and-render pass. Never retries on its
    /// own; a failed pass leaves the schedule area empty.
    fn refresh_schedule(&mut self) {
        if self.loading {
            return;
        }

        self.loading = true;
        self.is_offline = false;
        self.status_message = None;
        self.schedule = None;
        self.popovers.reset();

        let feed_url = self.config.feed_url.clone();
        let station_name = self.config.station_name.clone();
        let tx = self.result_tx.clone();

        self.runtime.spawn(async move {
            let outcome = match FeedClient::new(&feed_url) {
                Ok(client) => client.fetch_week_info().await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(info) => {
                    let today = Local::now().date_naive();
                    let schedule = TwoWeekSchedule::from_feed(&info, today, &station_name);
                    let _ = tx.send(AsyncResult::ScheduleLoaded(Box::new(schedule)));
                }
                Err(FeedError::Offline(reason)) => {
                    log::error!("station feed unreachable: {}", reason);
                    let _ = tx.send(AsyncResult::Offline);
                }
                Err(error) => {
                    log::error!("failed to load schedule: {}", error);
                    let _ = tx.send(AsyncResult::Error(error.to_string()));
                }
            }
        });
    }

    fn check_async_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                AsyncResult::ScheduleLoaded(schedule) => {
                    self.loading = false;
                    self.is_offline = false;
                    self.status_message = None;
                    // Defer the scroll-to-content snap to the next frame so
                    // it reads final post-layout offsets, one per week.
                    for (week_index, week) in schedule.weeks.iter().enumerate() {
                        self.pending_snap[week_index] =
                            week.first_day_with_shows().map(views::snap_offset);
                    }
                    self.schedule = Some(*schedule);
                }
                AsyncResult::Offline => {
                    self.loading = false;
                    self.is_offline = true;
                }
                AsyncResult::Error(message) => {
                    self.loading = false;
                    self.status_message = Some(message);
                }
            }
        }
    }

    fn save_settings(&mut self) {
        let new_feed_url = self.settings_feed_url.trim().to_string();
        let new_station_name = self.settings_station_name.trim().to_string();
        let feed_changed = self.config.feed_url != new_feed_url
            || self.config.station_name != new_station_name;

        self.config.feed_url = new_feed_url;
        self.config.station_name = new_station_name;
        self.config.clock_format = self.settings_clock_format;

        match self.config.save() {
            Ok(()) => {
                self.show_settings = false;
                if feed_changed {
                    self.refresh_schedule();
                }
            }
            Err(e) => {
                self.status_message = Some(format!("Failed to save settings: {}", e));
            }
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Programme").size(18.0).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dim = Color32::from_rgb(150, 150, 144);

                let settings = ui.add(
                    egui::Label::new(
                        RichText::new(egui_phosphor::regular::FADERS_HORIZONTAL)
                            .size(18.0)
                            .color(dim),
                    )
                    .sense(egui::Sense::click()),
                );
                if settings.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if settings.on_hover_text("Settings").clicked() {
                    self.settings_feed_url = self.config.feed_url.clone();
                    self.settings_station_name = self.config.station_name.clone();
                    self.settings_clock_format = self.config.clock_format;
                    self.show_settings = true;
                }

                ui.add_space(10.0);

                let reload = ui.add(
                    egui::Label::new(
                        RichText::new(egui_phosphor::regular::ARROWS_CLOCKWISE)
                            .size(18.0)
                            .color(dim),
                    )
                    .sense(egui::Sense::click()),
                );
                if reload.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if reload.on_hover_text("Reload schedule").clicked() {
                    self.refresh_schedule();
                }
            });
        });
    }

    fn render_status_row(&mut self, ui: &mut egui::Ui) {
        let mut dismiss = false;
        if let Some(message) = &self.status_message {
            ui.horizontal(|ui| {
                ui.label(RichText::new(message).color(Color32::from_rgb(224, 108, 117)));
                ui.add_space(8.0);
                let close = ui.add(
                    egui::Label::new(
                        RichText::new(egui_phosphor::regular::X)
                            .size(14.0)
                            .color(Color32::from_rgb(120, 120, 114)),
                    )
                    .sense(egui::Sense::click()),
                );
                if close.clicked() {
                    dismiss = true;
                }
            });
            ui.add_space(6.0);
        }
        if dismiss {
            self.status_message = None;
        }
    }

    fn render_offline(&mut self, ui: &mut egui::Ui) {
        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(egui_phosphor::regular::WIFI_SLASH)
                    .size(34.0)
                    .color(Color32::from_rgb(224, 108, 117)),
            );
            ui.add_space(16.0);
            ui.label(
                RichText::new("No connection")
                    .size(20.0)
                    .color(Color32::from_rgb(200, 200, 192)),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new("Check your internet and try again")
                    .size(14.0)
                    .color(Color32::from_rgb(120, 120, 114)),
            );
            ui.add_space(20.0);
            if ui
                .button(format!(
                    "{} Retry",
                    egui_phosphor::regular::ARROWS_CLOCKWISE
                ))
                .clicked()
            {
                self.refresh_schedule();
            }
        });
    }

    fn render_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut open = true;
        let mut save_clicked = false;
        let mut cancel_clicked = false;

        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([16.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("Feed URL");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.settings_feed_url)
                                .desired_width(320.0),
                        );
                        ui.end_row();

                        ui.label("Station name");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.settings_station_name)
                                .hint_text("Filler slots with this exact name are hidden")
                                .desired_width(320.0),
                        );
                        ui.end_row();

                        ui.label("Clock format");
                        ui.horizontal(|ui| {
                            ui.radio_value(
                                &mut self.settings_clock_format,
                                ClockFormat::Hour24,
                                "14:30",
                            );
                            ui.radio_value(
                                &mut self.settings_clock_format,
                                ClockFormat::Hour12,
                                "2:30pm",
                            );
                        });
                        ui.end_row();
                    });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        save_clicked = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel_clicked = true;
                    }
                });
            });

        if save_clicked {
            self.save_settings();
        }
        if cancel_clicked || !open {
            self.show_settings = false;
        }
    }

    /// Run the visibility state machine for this frame and draw the single
    /// active popover, if any.
    fn handle_popovers(
        &mut self,
        ctx: &egui::Context,
        results: Vec<(usize, WeekStripResult)>,
        vertical_offset: f32,
    ) {
        // Any scroll - either week strip or the page itself - hides the
        // active box unconditionally.
        let mut scrolled = (vertical_offset - self.scroll_offsets[2]).abs() > 0.5;
        self.scroll_offsets[2] = vertical_offset;

        let mut hovered: Option<PopoverRequest> = None;
        let mut touched: Option<PopoverRequest> = None;
        for (week_index, result) in results {
            if (result.scroll_offset - self.scroll_offsets[week_index]).abs() > 0.5 {
                scrolled = true;
            }
            self.scroll_offsets[week_index] = result.scroll_offset;
            hovered = hovered.or(result.hovered);
            touched = touched.or(result.touched);
        }

        if scrolled {
            self.popovers.reset();
            return;
        }

        let viewport = ctx.screen_rect();
        let primary_down = ctx.input(|input| input.pointer.primary_down());

        // Touch lifecycle: show on tap, hide on release.
        if let Some(request) = touched {
            let touch_point = request
                .pointer_pos
                .unwrap_or_else(|| request.trigger.center());
            self.popovers.state.show(request.block, Anchor::Touch(touch_point));
            self.popovers.touch_request = Some(request);
        } else if !primary_down
            && matches!(self.popovers.state.visible(), Some((_, Anchor::Touch(_))))
        {
            self.popovers.reset();
        }

        match self.popovers.state.visible() {
            Some((_, Anchor::Touch(touch_point))) => {
                if let Some(request) = &self.popovers.touch_request {
                    let width = box_width_for(request.trigger, viewport);
                    let height = views::popover_height(ctx, &request.description, width);
                    let placement = place_for_touch(
                        touch_point,
                        request.trigger,
                        vec2(width, height),
                        viewport,
                    );
                    views::draw_popover(ctx, &placement, &request.description);
                }
            }
            _ => {
                // Visibility is gated on this frame's hover state: a pointer
                // that already left its trigger never shows a corrected box,
                // and dragging (scroll in progress) suppresses it too.
                match hovered {
                    Some(request) if !primary_down => {
                        self.popovers.state.show(request.block, Anchor::Pointer);
                        let width = box_width_for(request.trigger, viewport);
                        let height = views::popover_height(ctx, &request.description, width);
                        let placement = place_for_pointer(
                            request.trigger,
                            vec2(width, height),
                            viewport,
                        );
                        views::draw_popover(ctx, &placement, &request.description);
                    }
                    _ => self.popovers.state.hide(),
                }
            }
        }
    }
}

impl eframe::App for ScheduleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_async_results();

        if self.loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let snaps = [self.pending_snap[0].take(), self.pending_snap[1].take()];
        let clock_format = self.config.clock_format;
        let mut frame_results: Vec<(usize, WeekStripResult)> = Vec::new();
        let mut vertical_offset = self.scroll_offsets[2];

        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(egui::Margin::symmetric(12.0, 8.0)))
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(4.0);
                self.render_status_row(ui);

                if self.is_offline {
                    self.render_offline(ui);
                } else if self.loading {
                    ui.add_space(60.0);
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                    });
                } else if let Some(schedule) = self.schedule.as_ref() {
                    let output = egui::ScrollArea::vertical()
                        .id_salt("schedule_page")
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            for (week_index, week) in schedule.weeks.iter().enumerate() {
                                ui.add_space(if week_index == 0 { 2.0 } else { 18.0 });
                                ui.label(
                                    RichText::new(WEEK_TITLES[week_index]).size(16.0).strong(),
                                );
                                ui.add_space(6.0);
                                let result = views::render_week_strip(
                                    ui,
                                    week_index,
                                    week,
                                    clock_format,
                                    snaps[week_index],
                                );
                                frame_results.push((week_index, result));
                            }
                        });
                    vertical_offset = output.state.offset.y;
                }
            });

        self.handle_popovers(ctx, frame_results, vertical_offset);
        self.render_settings_window(ctx);
    }
}
