//! Native wheel GUI using egui
//!
//! Paints the wheel, animates spins over the fixed duration, and routes
//! control events through the state operations and the store.

use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::Config;
use crate::geometry::{self, Sector};
use crate::spin;
use crate::state::WheelState;
use crate::storage::WheelStore;

const WINDOW_SIZE: [f32; 2] = [960.0, 640.0];
const WHEEL_MAX_SIDE: f32 = 520.0;
const SECTOR_STROKE_WIDTH: f32 = 2.0;
const LABEL_FONT_SIZE: f32 = 16.0;
const POINTER_COLOR: egui::Color32 = egui::Color32::from_rgb(0xdc, 0x26, 0x26);

/// Run the wheel window until the user closes it.
pub fn run_wheel(config: Config, store: WheelStore) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title("Fortune Wheel"),
        ..Default::default()
    };

    eframe::run_native(
        "Fortune Wheel",
        options,
        Box::new(|cc| Ok(Box::new(WheelApp::new(cc, config, store)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

/// A spin in flight: resolved up front, animated over SPIN_DURATION_MS.
struct ActiveSpin {
    winner_index: usize,
    started_at: f64,
    from_rotation: f64,
    to_rotation: f64,
    /// Set once the animation has finished and the winner modal is up.
    modal_open: bool,
}

struct WheelApp {
    config: Config,
    store: WheelStore,
    state: WheelState,
    entry_text: String,
    keep_on_wheel: bool,
    active_spin: Option<ActiveSpin>,
    rng: StdRng,
}

impl WheelApp {
    fn new(cc: &eframe::CreationContext<'_>, config: Config, store: WheelStore) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let items = store.load_items().unwrap_or_else(|| {
            info!("No saved items, starting from the default catalog");
            config.default_items.clone()
        });
        let history = store.load_history().unwrap_or_default();
        info!(
            "Wheel ready: {} slot(s), {} history record(s)",
            items.len(),
            history.len()
        );

        let keep_on_wheel = config.keep_on_wheel;
        Self {
            config,
            store,
            state: WheelState::new(items, history),
            entry_text: String::new(),
            keep_on_wheel,
            active_spin: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Both blobs, written independently after every committed mutation.
    fn persist(&self) {
        self.store.save_items(&self.state.items);
        self.store.save_history(&self.state.history);
    }

    fn start_spin(&mut self, now: f64) {
        if !self.state.can_spin() {
            debug!("Spin request ignored (spinning or too few slots)");
            return;
        }
        let Some(outcome) =
            spin::resolve_spin(&mut self.rng, self.state.items.len(), self.state.rotation)
        else {
            return;
        };
        info!(
            "Spin resolved: slot {} landing at {:.1} degrees",
            outcome.winner_index, outcome.new_rotation
        );
        self.active_spin = Some(ActiveSpin {
            winner_index: outcome.winner_index,
            started_at: now,
            from_rotation: self.state.rotation,
            to_rotation: outcome.new_rotation,
            modal_open: false,
        });
        self.state.begin_spin(&outcome);
    }

    /// Rotation to paint this frame.
    fn display_rotation(&self, now: f64) -> f64 {
        match &self.active_spin {
            Some(active) => {
                let t = (now - active.started_at) / (spin::SPIN_DURATION_MS as f64 / 1000.0);
                active.from_rotation + (active.to_rotation - active.from_rotation) * spin::ease(t)
            }
            None => self.state.rotation,
        }
    }

    fn add_entry(&mut self) {
        let slots = crate::input::parse_entries(&self.entry_text, self.config.expand_multipliers);
        if slots.is_empty() {
            return;
        }
        self.state.add_slots(slots);
        self.entry_text.clear();
        self.store.save_items(&self.state.items);
    }

    /// Close the winner modal: commit history/removal and persist.
    fn dismiss_winner(&mut self) {
        let Some(active) = self.active_spin.take() else {
            return;
        };
        self.state.reconcile(active.winner_index, self.keep_on_wheel);
        self.persist();
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("Add Options");
        ui.horizontal(|ui| {
            let edit = egui::TextEdit::singleline(&mut self.entry_text)
                .hint_text("Add items (e.g. Beer, Vodka*3, Rum)")
                .desired_width(210.0);
            let response = ui.add(edit);
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let add_clicked = ui
                .add_enabled(!self.entry_text.trim().is_empty(), egui::Button::new("Add"))
                .clicked();
            if submitted || add_clicked {
                self.add_entry();
            }
        });

        ui.add_space(8.0);
        ui.checkbox(&mut self.keep_on_wheel, "Keep items on wheel after selection");

        ui.separator();
        ui.label(format!("{} slot(s) on the wheel", self.state.items.len()));

        if !self.state.history.is_empty() {
            ui.add_space(8.0);
            ui.heading("Selected Items");
            egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                for record in &self.state.history {
                    let text = if record.was_removed {
                        egui::RichText::new(record.item.as_str()).strikethrough().weak()
                    } else {
                        egui::RichText::new(record.item.as_str())
                    };
                    ui.label(text);
                }
            });
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Reset Wheel").clicked() {
                self.state.reset(&self.config.default_items);
                self.persist();
            }
            if ui.button("Clear All").clicked() {
                self.state.clear_all();
                self.persist();
            }
        });
    }

    fn wheel_view(&mut self, ui: &mut egui::Ui, now: f64) {
        let side = ui
            .available_width()
            .min(ui.available_height())
            .min(WHEEL_MAX_SIDE);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        // Leave margin for the pointer sticking out on the right.
        let scale = side / (2.0 * (geometry::WHEEL_RADIUS + 24.0));
        let radius = geometry::WHEEL_RADIUS * scale;

        let sectors = geometry::compute_sectors(&self.state.items);
        let rotation = self.display_rotation(now);

        if sectors.is_empty() {
            painter.circle_filled(center, radius, egui::Color32::from_gray(40));
        } else if sectors.len() == 1 {
            // Single slot: a full disc; the spin gate keeps it unspinnable.
            let sector = &sectors[0];
            painter.circle_filled(center, radius, sector_color(sector));
            painter.circle_stroke(
                center,
                radius,
                egui::Stroke::new(SECTOR_STROKE_WIDTH, egui::Color32::WHITE),
            );
            let galley = painter.layout_no_wrap(
                sector.display_label.clone(),
                label_font(),
                egui::Color32::WHITE,
            );
            let pos = center - galley.size() / 2.0;
            painter.galley(pos, galley, egui::Color32::WHITE);
        } else {
            for sector in &sectors {
                paint_sector(&painter, center, scale, rotation, sector);
            }
        }

        paint_pointer(&painter, center, radius);
        self.spin_button(ui, center, radius);
    }

    fn spin_button(&mut self, ui: &mut egui::Ui, center: egui::Pos2, radius: f32) {
        let button_radius = radius * 0.25;
        let rect = egui::Rect::from_center_size(
            center,
            egui::vec2(button_radius * 2.0, button_radius * 2.0),
        );
        let caption = if self.state.items.len() < 2 {
            "Add Items"
        } else if self.state.spinning {
            "..."
        } else {
            "SPIN"
        };
        let enabled = self.state.can_spin();
        let clicked = ui
            .add_enabled_ui(enabled, |ui| {
                ui.put(
                    rect,
                    egui::Button::new(egui::RichText::new(caption).strong())
                        .rounding(button_radius),
                )
            })
            .inner
            .clicked();
        if clicked {
            let now = ui.input(|i| i.time);
            self.start_spin(now);
        }
    }
}

impl eframe::App for WheelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // Promote a finished animation to the winner modal; repaint
        // continuously while the wheel is still turning.
        if let Some(active) = &mut self.active_spin {
            let elapsed_ms = (now - active.started_at) * 1000.0;
            if elapsed_ms >= spin::SPIN_DURATION_MS as f64 {
                if !active.modal_open {
                    active.modal_open = true;
                    info!("Spin animation finished, presenting winner");
                }
            } else {
                ctx.request_repaint();
            }
        }

        egui::SidePanel::right("controls_panel")
            .min_width(300.0)
            .show(ctx, |ui| {
                self.controls_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Fortune Wheel");
                ui.label("Spin the wheel, embrace the chaos.");
            });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                self.wheel_view(ui, now);
            });
        });

        // Winner modal, shown only after the full animation has elapsed.
        let presented = self
            .active_spin
            .as_ref()
            .filter(|active| active.modal_open)
            .map(|active| self.state.items.get(active.winner_index).cloned());
        match presented {
            Some(Some(winner)) => {
                egui::Window::new("The Wheel has Spoken!")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                    .show(ctx, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(8.0);
                            ui.label(egui::RichText::new(winner.as_str()).size(32.0).strong());
                            ui.add_space(12.0);
                            if ui.button(egui::RichText::new("Okay").size(16.0)).clicked() {
                                self.dismiss_winner();
                            }
                            ui.add_space(4.0);
                        });
                    });
            }
            Some(None) => {
                // Winning slot vanished mid-spin (reset/clear while turning);
                // nothing to present, but the spin still has to settle.
                self.dismiss_winner();
            }
            None => {}
        }
    }
}

fn paint_sector(
    painter: &egui::Painter,
    center: egui::Pos2,
    scale: f32,
    rotation_deg: f64,
    sector: &Sector,
) {
    let rot = egui::emath::Rot2::from_angle(rotation_deg.to_radians() as f32);
    let to_screen = |p: [f32; 2]| -> egui::Pos2 {
        let local = egui::vec2(
            p[0] - geometry::WHEEL_CENTER[0],
            p[1] - geometry::WHEEL_CENTER[1],
        );
        center + rot * local * scale
    };

    let points: Vec<egui::Pos2> = sector.boundary.iter().map(|&p| to_screen(p)).collect();
    painter.add(egui::Shape::convex_polygon(
        points,
        sector_color(sector),
        egui::Stroke::new(SECTOR_STROKE_WIDTH, egui::Color32::WHITE),
    ));

    // Label centered on its midline anchor, rotated with the wheel.
    let galley = painter.layout_no_wrap(
        sector.display_label.clone(),
        label_font(),
        egui::Color32::WHITE,
    );
    let angle = (sector.label_angle_deg + rotation_deg).to_radians() as f32;
    let anchor = to_screen(sector.label_pos);
    let text_rot = egui::emath::Rot2::from_angle(angle);
    let offset = text_rot * egui::vec2(-galley.size().x / 2.0, -galley.size().y / 2.0);
    let shape =
        egui::epaint::TextShape::new(anchor + offset, galley, egui::Color32::WHITE).with_angle(angle);
    painter.add(shape);
}

/// Fixed pointer at the right edge of the wheel, aimed at the hub.
fn paint_pointer(painter: &egui::Painter, center: egui::Pos2, radius: f32) {
    let tip = egui::pos2(center.x + radius - 6.0, center.y);
    let base_x = center.x + radius + 18.0;
    let points = vec![
        tip,
        egui::pos2(base_x, center.y - 12.0),
        egui::pos2(base_x, center.y + 12.0),
    ];
    painter.add(egui::Shape::convex_polygon(
        points,
        POINTER_COLOR,
        egui::Stroke::NONE,
    ));
}

fn sector_color(sector: &Sector) -> egui::Color32 {
    egui::Color32::from_rgb(sector.color[0], sector.color[1], sector.color[2])
}

fn label_font() -> egui::FontId {
    egui::FontId::proportional(LABEL_FONT_SIZE)
}
