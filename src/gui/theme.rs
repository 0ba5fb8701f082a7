use egui::{Color32, Context, Rounding, Stroke, Visuals};

/// Dark theme for the search window
pub fn setup_custom_theme(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Navy panels with muted grey text
    visuals.panel_fill = Color32::from_rgb(24, 27, 40);
    visuals.window_fill = Color32::from_rgb(31, 31, 31);
    visuals.extreme_bg_color = Color32::from_rgb(31, 31, 31);
    visuals.override_text_color = Some(Color32::from_rgb(150, 146, 150));

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(40, 40, 50);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(31, 83, 141);
    visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(20, 66, 114);
    visuals.widgets.active.bg_fill = Color32::from_rgb(50, 50, 60);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::from_rgb(210, 210, 220));

    visuals.selection.bg_fill = Color32::from_rgb(0, 92, 128);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(0, 140, 230));

    let rounding = Rounding::same(4.0);
    visuals.window_rounding = rounding;
    visuals.menu_rounding = rounding;

    ctx.set_visuals(visuals);
}
