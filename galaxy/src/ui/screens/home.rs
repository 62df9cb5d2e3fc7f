//! Demo screen: a card floating over the sky with the theme and quality controls.

use egui::{Margin, RichText, Ui};
use lib_starfield::{Palette, Quality};

use crate::ui::theme::{self, ThemeChoice};

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    ToggleTheme,
    SetQuality(Quality),
}

const CARD_WIDTH: f32 = 300.0;

pub fn render(ui: &mut Ui, palette: &Palette, choice: ThemeChoice, quality: Quality) -> Option<HomeAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);

        egui::Frame::new()
            .fill(theme::card_fill(palette))
            .stroke(theme::card_stroke(palette))
            .corner_radius(12.0)
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.set_max_width(CARD_WIDTH);
                ui.heading("Galaxy");
                ui.label(RichText::new("Stars drift and twinkle behind this card.").small());
                ui.add_space(12.0);

                let next = choice.toggled();
                if ui.button(format!("Switch to {next} theme")).clicked() {
                    action = Some(HomeAction::ToggleTheme);
                }

                ui.add_space(8.0);
                let mut selected = quality;
                egui::ComboBox::from_label("Quality")
                    .selected_text(quality.label())
                    .show_ui(ui, |ui| {
                        for level in Quality::all() {
                            ui.selectable_value(&mut selected, level, level.label());
                        }
                    });
                if selected != quality {
                    action = Some(HomeAction::SetQuality(selected));
                }
            });
    });

    action
}
