use catalog::DynWindow;
use client_core::Flow;
use eframe::egui;
use shared::domain::{Trigger, TriggerId, TriggerKind};

const INPUT_WIDTH: f32 = 220.0;

/// Menu bar, input row, output area and button row for one window. Every
/// control funnels into [`CommandWindowApp::fire`]; the window decides what
/// the control means.
pub struct CommandWindowApp {
    window: DynWindow,
    menu_items: Vec<Trigger>,
    buttons: Vec<Trigger>,
}

impl CommandWindowApp {
    pub fn new(window: DynWindow) -> Self {
        let registry = window.registry();
        let menu_items = registry.triggers_of(TriggerKind::MenuItem).copied().collect();
        let buttons = registry.triggers_of(TriggerKind::Button).copied().collect();
        Self {
            window,
            menu_items,
            buttons,
        }
    }

    fn fire(&mut self, ctx: &egui::Context, trigger: TriggerId) {
        match self.window.handle(trigger.into()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            // Already rendered to the output area.
            Err(err) => tracing::debug!(error = %err, "dispatch failed"),
        }
    }

    fn show_menu_bar(&self, ctx: &egui::Context, fired: &mut Option<TriggerId>) {
        let Some(menu_title) = self.window.layout().menu_title else {
            return;
        };
        if self.menu_items.is_empty() {
            return;
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button(menu_title, |ui| {
                    for item in &self.menu_items {
                        if ui.button(item.label).clicked() {
                            *fired = Some(item.id);
                            ui.close();
                        }
                    }
                });
            });
        });
    }

    fn show_input_row(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.window.layout().prompt else {
            return;
        };

        egui::TopBottomPanel::top("input_row").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(self.window.input_mut().text_mut())
                        .desired_width(INPUT_WIDTH),
                );
                ui.label(prompt);
            });
        });
    }

    fn show_button_row(&self, ctx: &egui::Context, fired: &mut Option<TriggerId>) {
        egui::TopBottomPanel::bottom("button_row").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.window.layout().instructions);
                for button in &self.buttons {
                    if ui.button(button.label).clicked() {
                        *fired = Some(button.id);
                    }
                }
            });
        });
    }

    fn show_output(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    let mut text = self.window.output().as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .desired_width(f32::INFINITY)
                            .font(egui::TextStyle::Monospace),
                    );
                });
        });
    }
}

impl eframe::App for CommandWindowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut fired = None;

        self.show_menu_bar(ctx, &mut fired);
        self.show_input_row(ctx);
        self.show_button_row(ctx, &mut fired);
        self.show_output(ctx);

        if let Some(trigger) = fired {
            self.fire(ctx, trigger);
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog::{config::Settings, open_window};
    use client_core::windows::WindowKind;

    use super::CommandWindowApp;

    fn labels(triggers: &[shared::domain::Trigger]) -> Vec<&'static str> {
        triggers.iter().map(|trigger| trigger.label).collect()
    }

    #[test]
    fn demo_window_gets_buttons_and_a_duplicate_menu() {
        let window = open_window(WindowKind::Demo, &Settings::default()).expect("window");
        let app = CommandWindowApp::new(window);

        assert_eq!(labels(&app.buttons), ["Button1", "Button2", "Exit"]);
        assert_eq!(labels(&app.menu_items), ["Button1", "Button2", "Button3"]);
    }

    #[test]
    fn media_window_has_no_menu() {
        let window = open_window(WindowKind::Media, &Settings::default()).expect("window");
        let app = CommandWindowApp::new(window);

        assert_eq!(labels(&app.buttons), ["Search", "Play", "Exit"]);
        assert!(app.menu_items.is_empty());
    }
}
