use std::time::Duration;

use eframe::egui;
use eframe::egui::{Color32, FontFamily, FontId, Id, Sense, TextStyle, ViewportCommand, Visuals};

use crate::clock::{display_block, local_time_string, RemoteTimes};
use crate::geometry::{initial_origin, DragState};
use crate::ticker::Ticker;

const REFRESH_PERIOD: Duration = Duration::from_secs(1);

/// The overlay window. Remote times are frozen at whatever the startup fetch
/// produced; only the local line tracks the system clock.
pub struct ClockApp {
    remote: RemoteTimes,
    drag: DragState,
    positioned: bool,
    _ticker: Ticker,
}

impl ClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>, remote: RemoteTimes) -> Self {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(Color32::from_white_alpha(128));
        visuals.panel_fill = Color32::TRANSPARENT;
        cc.egui_ctx.set_visuals(visuals);

        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles = [(TextStyle::Body, FontId::new(18.0, FontFamily::Proportional))].into();
        cc.egui_ctx.set_style(style);

        let ctx = cc.egui_ctx.clone();
        let ticker = Ticker::spawn(REFRESH_PERIOD, move || ctx.request_repaint());

        Self {
            remote,
            drag: DragState::default(),
            positioned: false,
            _ticker: ticker,
        }
    }

    /// Bottom-right placement, applied once the monitor size is known.
    fn place_initially(&mut self, ctx: &egui::Context) {
        if self.positioned {
            return;
        }
        if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
            ctx.send_viewport_cmd(ViewportCommand::OuterPosition(initial_origin(monitor)));
            self.positioned = true;
        }
    }

    fn handle_drag(&mut self, ctx: &egui::Context, response: &egui::Response) {
        if response.drag_started() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.drag.begin(pointer.to_vec2());
            }
        } else if response.drag_stopped() {
            self.drag.end();
        }

        if response.dragged() {
            let pointer = response.interact_pointer_pos();
            let origin = ctx.input(|i| i.viewport().outer_rect).map(|rect| rect.min);
            if let (Some(pointer), Some(origin)) = (pointer, origin) {
                // Pointer positions arrive window-local; the drag math wants
                // screen coordinates.
                if let Some(target) = self.drag.target(origin + pointer.to_vec2()) {
                    ctx.send_viewport_cmd(ViewportCommand::OuterPosition(target));
                }
            }
        }
    }
}

impl eframe::App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.place_initially(ctx);

        let text = display_block(&local_time_string(chrono::Local::now()), &self.remote);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let app_rect = ui.max_rect();
                let response = ui.interact(app_rect, Id::new("clock"), Sense::drag());
                self.handle_drag(ctx, &response);

                ui.centered_and_justified(|ui| {
                    ui.label(text);
                });
            });
    }

    fn clear_color(&self, _visuals: &Visuals) -> [f32; 4] {
        Color32::TRANSPARENT.to_normalized_gamma_f32()
    }
}
