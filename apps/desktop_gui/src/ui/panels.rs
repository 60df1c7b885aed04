//! Panels render from a borrowed [`AppState`] and only emit [`UiAction`]s.

use crossbeam_channel::Sender;
use shared::domain::Payer;
use split_core::{roster, IdSource};

use crate::controller::{
    events::UiAction, orchestration::dispatch_ui_action, reducer::AppState,
};
use crate::ui::theme;

pub fn show_roster<I: IdSource>(
    ui: &mut egui::Ui,
    state: &AppState<I>,
    action_tx: &Sender<UiAction>,
    status: &mut String,
) {
    for row in roster::rows(&state.session) {
        let fill = if row.is_selected {
            theme::SELECTED_ROW_FILL
        } else {
            egui::Color32::TRANSPARENT
        };

        egui::Frame::new()
            .fill(fill)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(row.name).strong().size(16.0))
                            .on_hover_text(row.image);
                        let color = theme::balance_color(row.status, ui.visuals().text_color());
                        ui.colored_label(color, row.message());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(row.button_label()).clicked() {
                            dispatch_ui_action(action_tx, UiAction::SelectFriend(row.id), status);
                        }
                    });
                });
            });
    }
}

pub fn show_add_friend_form<I: IdSource>(
    ui: &mut egui::Ui,
    state: &AppState<I>,
    action_tx: &Sender<UiAction>,
    status: &mut String,
) {
    egui::Grid::new("add_friend_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Friend name");
            let mut name = state.add_friend.name.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut name).id_salt("friend_name"))
                .changed()
            {
                dispatch_ui_action(action_tx, UiAction::EditFriendName(name), status);
            }
            ui.end_row();

            ui.label("Image URL");
            let mut image = state.add_friend.image.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut image).id_salt("friend_image"))
                .changed()
            {
                dispatch_ui_action(action_tx, UiAction::EditFriendImage(image), status);
            }
            ui.end_row();
        });

    if ui.button("Add").clicked() {
        dispatch_ui_action(action_tx, UiAction::SubmitFriend, status);
    }
}

pub fn show_split_form<I: IdSource>(
    ui: &mut egui::Ui,
    state: &AppState<I>,
    action_tx: &Sender<UiAction>,
    status: &mut String,
) {
    let Some(draft) = state.split.as_ref() else {
        return;
    };
    let form = &draft.form;

    ui.heading(egui::RichText::new(form.title().to_uppercase()).strong());
    ui.add_space(12.0);

    egui::Grid::new("split_bill_form")
        .num_columns(2)
        .spacing([12.0, 10.0])
        .show(ui, |ui| {
            ui.label("Bill value");
            let mut bill = draft.bill_text.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut bill).id_salt("bill_total"))
                .changed()
            {
                dispatch_ui_action(action_tx, UiAction::EditBillTotal(bill), status);
            }
            ui.end_row();

            ui.label("Your expense");
            let mut expense = draft.expense_text.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut expense).id_salt("user_expense"))
                .changed()
            {
                dispatch_ui_action(action_tx, UiAction::EditUserExpense(expense), status);
            }
            ui.end_row();

            ui.label(form.friend_expense_label());
            let mut friend_expense = draft.friend_expense_text();
            ui.add_enabled(
                false,
                egui::TextEdit::singleline(&mut friend_expense).id_salt("friend_expense"),
            );
            ui.end_row();

            ui.label("Who is paying the bill");
            let mut payer = form.payer();
            egui::ComboBox::from_id_salt("payer_combo")
                .selected_text(form.payer_label(payer))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut payer, Payer::User, form.payer_label(Payer::User));
                    ui.selectable_value(
                        &mut payer,
                        Payer::Friend,
                        form.payer_label(Payer::Friend),
                    );
                });
            if payer != form.payer() {
                dispatch_ui_action(action_tx, UiAction::ChoosePayer(payer), status);
            }
            ui.end_row();
        });

    ui.add_space(12.0);
    if ui.button("Split bill").clicked() {
        dispatch_ui_action(action_tx, UiAction::ConfirmSplit, status);
    }
}
