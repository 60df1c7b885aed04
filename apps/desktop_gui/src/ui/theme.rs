use egui::Color32;
use split_core::BalanceStatus;

pub const OWE_RED: Color32 = Color32::from_rgb(0xe0, 0x31, 0x31);
pub const OWED_GREEN: Color32 = Color32::from_rgb(0x66, 0xa8, 0x0f);
pub const ACCENT: Color32 = Color32::from_rgb(0xff, 0xa9, 0x4d);
pub const SELECTED_ROW_FILL: Color32 = Color32::from_rgb(0xff, 0xf4, 0xe6);

pub fn balance_color(status: BalanceStatus, fallback: Color32) -> Color32 {
    match status {
        BalanceStatus::YouOwe(_) => OWE_RED,
        BalanceStatus::OwesYou(_) => OWED_GREEN,
        BalanceStatus::Settled => fallback,
    }
}

pub fn apply(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.visuals.selection.bg_fill = ACCENT;
    });
}
