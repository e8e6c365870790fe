// ui.rs - eframe front end: turns egui input into game events, paces generations, paints

use std::time::{Duration, Instant};

use conway::{Game, GameConfig, InputEvent, Key, PointerState};
use eframe::egui;
use egui::{Pos2, Sense};

use crate::painter::EguiSurface;

const PATTERN_KEYS: [egui::Key; 6] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
];

pub struct LifeApp {
    game: Game,
    update_interval: Duration,
    last_update: Instant,
}

impl LifeApp {
    pub fn new(config: &GameConfig) -> conway::Result<Self> {
        Ok(Self {
            game: Game::new(config)?,
            update_interval: config.frame_interval(),
            last_update: Instant::now(),
        })
    }
}

/// Everything that happened since the last frame, in dispatch order.
fn collect_events(ctx: &egui::Context, origin: Pos2) -> Vec<InputEvent> {
    ctx.input(|i| {
        let mut events = Vec::new();

        if i.key_pressed(egui::Key::Escape) {
            events.push(InputEvent::Quit);
        }
        if i.key_pressed(egui::Key::Space) {
            events.push(InputEvent::Key(Key::Pause));
        }
        if i.key_pressed(egui::Key::C) {
            events.push(InputEvent::Key(Key::Clear));
        }
        if i.key_pressed(egui::Key::N) {
            events.push(InputEvent::Key(Key::Step));
        }
        for (index, key) in PATTERN_KEYS.iter().enumerate() {
            if i.key_pressed(*key) {
                events.push(InputEvent::Key(Key::Pattern(index)));
            }
        }

        events.push(InputEvent::Pointer(PointerState {
            pos: i.pointer.interact_pos().map(|p| (p.x - origin.x, p.y - origin.y)),
            primary_down: i.pointer.primary_down(),
            primary_pressed: i.pointer.primary_pressed(),
        }));

        events
    })
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let origin = ctx.available_rect().min;
        for event in collect_events(ctx, origin) {
            self.game.handle_event(event);
        }

        if !self.game.is_running() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // One generation per frame interval while running
        if self.last_update.elapsed() >= self.update_interval {
            self.game.tick();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
                let mut surface = EguiSurface::new(&painter, response.rect.min);
                self.game.draw(&mut surface);
            });

        ctx.request_repaint_after(self.update_interval);
    }
}
