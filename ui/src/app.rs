use std::sync::Arc;

use chrono::Utc;
use egui::{Button, RichText, ScrollArea};
use profiles_business::{QueryUserSource, UserSource};
use profiles_states::Time;

use crate::{state::State, widgets};

pub const HEADING: &str = "User Profiles";

pub struct ProfilesApp {
    state: State,
    subscribed: bool,
}

impl ProfilesApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            subscribed: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Results land on ehttp threads; wake the UI so they show without input.
    fn subscribe(&mut self, ctx: &egui::Context) {
        if self.subscribed {
            return;
        }
        let State { ctx: state_ctx, direct, query } = &mut self.state;
        let egui_ctx = ctx.clone();
        direct.subscribe(state_ctx, Arc::new(move || egui_ctx.request_repaint()));
        let egui_ctx = ctx.clone();
        query.subscribe(state_ctx, Arc::new(move || egui_ctx.request_repaint()));
        self.subscribed = true;
    }
}

impl eframe::App for ProfilesApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.subscribe(ctx);

        // Sync Compute for render
        self.state.ctx.sync_computes();
        self.state
            .ctx
            .update::<Time>(|time| *time.as_mut() = Utc::now());

        let State {
            ctx: state_ctx,
            direct,
            query,
        } = &mut self.state;

        direct.activate(state_ctx);
        direct.poll(state_ctx);
        query.activate(state_ctx);
        query.poll(state_ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(HEADING);
            });
            ui.separator();

            ScrollArea::vertical().show(ui, |ui| {
                ui.label(RichText::new("Direct fetch").strong());
                widgets::users_section(ui, direct.name(), direct.current(state_ctx));

                ui.add_space(16.0);

                let view = query.current(state_ctx);
                let refresh_clicked = ui
                    .horizontal(|ui| {
                        ui.label(RichText::new("Cached query").strong());
                        let fetching = QueryUserSource::is_fetching(state_ctx);
                        let clicked = ui.add_enabled(!fetching, Button::new("Refresh")).clicked();
                        if fetching {
                            ui.spinner();
                        }
                        clicked
                    })
                    .inner;
                widgets::users_section(ui, query.name(), view);

                if refresh_clicked {
                    query.refresh(state_ctx);
                }
            });
        });

        // Run queued commands, e.g. a Refresh click
        state_ctx.flush_commands();
    }
}

impl Drop for ProfilesApp {
    fn drop(&mut self) {
        self.state.direct.deactivate();
        self.state.query.deactivate();
    }
}
