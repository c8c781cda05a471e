// Widget tests for the folder card, driven through a headless egui context
// with synthetic pointer events.

use eframe::egui::{self, Event, Modifiers, PointerButton, Pos2};

use super::a11y::{CardMode, FixedIds};
use super::{
    folder_card, folder_card_body, folder_card_checkbox, folder_card_title, FolderCardContext,
    FolderCardProps,
};

const CARD_W: f32 = 240.0;
const CARD_H: f32 = 120.0;

#[derive(Default)]
struct CardProbe {
    rect: Option<egui::Rect>,
    mode: Option<CardMode>,
    title_id: Option<String>,
    start_saw: Option<String>,
    title_widget_id: Option<egui::Id>,
    checkbox_rect: Option<egui::Rect>,
    checkbox_changed: bool,
    destination: Option<String>,
    navigated: Option<String>,
}

fn draw_fixture(
    ui: &mut egui::Ui,
    to: Option<&str>,
    with_start: bool,
    clicks: &mut usize,
    probe: &mut CardProbe,
) {
    let mut ids = FixedIds(3);
    let props = FolderCardProps {
        id: "folder",
        aria_label: "Folder 1",
        to,
        width: CARD_W,
        height: CARD_H,
    };

    let mut start_saw: Option<Option<String>> = None;
    let mut checkbox_rect = None;
    let mut checkbox_changed = false;
    let mut start = |ui: &mut egui::Ui, cx: &FolderCardContext| {
        start_saw = Some(cx.title_id.clone());
        let mut checked = false;
        let resp = folder_card_checkbox(ui, cx, &mut checked);
        checkbox_rect = Some(resp.rect);
        checkbox_changed = resp.changed();
    };
    let start_slot: Option<&mut dyn FnMut(&mut egui::Ui, &FolderCardContext)> = if with_start {
        Some(&mut start)
    } else {
        None
    };

    let mut title_widget_id = None;
    let resp = folder_card(
        ui,
        &props,
        &mut ids,
        &mut || *clicks += 1,
        start_slot,
        |ui, cx| {
            folder_card_body(ui, cx, |ui, cx| {
                let title = folder_card_title(ui, cx, "Pictures");
                title_widget_id = Some(title.id);
            });
        },
    );

    probe.rect = Some(resp.response.rect);
    probe.mode = Some(resp.mode.clone());
    probe.title_id = resp.title_id.clone();
    probe.start_saw = start_saw.flatten();
    probe.title_widget_id = title_widget_id;
    probe.checkbox_rect = checkbox_rect;
    probe.checkbox_changed = checkbox_changed;
    probe.destination = resp.destination().map(|s| s.to_string());
    probe.navigated = resp.navigation().map(|s| s.to_string());
}

fn run_frame(
    ctx: &egui::Context,
    events: Vec<Event>,
    mut f: impl FnMut(&mut egui::Ui),
) -> egui::FullOutput {
    let input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            Pos2::ZERO,
            egui::vec2(800.0, 600.0),
        )),
        events,
        ..Default::default()
    };
    ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| f(ui));
    })
}

fn press(pos: Pos2) -> Vec<Event> {
    vec![
        Event::PointerMoved(pos),
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::default(),
        },
    ]
}

fn release(pos: Pos2) -> Vec<Event> {
    vec![Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: false,
        modifiers: Modifiers::default(),
    }]
}

#[test]
fn renders_the_same_for_identical_inputs() {
    let mut outputs = Vec::new();
    for _ in 0..2 {
        let ctx = egui::Context::default();
        let mut clicks = 0;
        let mut probe = CardProbe::default();
        run_frame(&ctx, vec![], |ui| {
            draw_fixture(ui, Some("/library/Pictures"), true, &mut clicks, &mut probe)
        });
        outputs.push((probe.rect, probe.mode.clone(), probe.title_id.clone()));
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn title_id_is_stable_across_frames() {
    let ctx = egui::Context::default();
    let mut clicks = 0;
    let mut probe = CardProbe::default();
    let mut seen = Vec::new();
    for _ in 0..3 {
        run_frame(&ctx, vec![], |ui| {
            draw_fixture(ui, None, true, &mut clicks, &mut probe)
        });
        seen.push(probe.title_id.clone());
    }
    assert!(seen.iter().all(|t| t.as_deref() == Some("folder-3-title")));
}

#[test]
fn click_fires_on_click_exactly_once() {
    let ctx = egui::Context::default();
    let mut clicks = 0;
    let mut probe = CardProbe::default();

    run_frame(&ctx, vec![], |ui| {
        draw_fixture(ui, None, false, &mut clicks, &mut probe)
    });
    let center = probe.rect.expect("card rect").center();

    run_frame(&ctx, press(center), |ui| {
        draw_fixture(ui, None, false, &mut clicks, &mut probe)
    });
    assert_eq!(clicks, 0, "press alone must not activate");

    run_frame(&ctx, release(center), |ui| {
        draw_fixture(ui, None, false, &mut clicks, &mut probe)
    });
    assert_eq!(clicks, 1);

    run_frame(&ctx, vec![], |ui| {
        draw_fixture(ui, None, false, &mut clicks, &mut probe)
    });
    assert_eq!(clicks, 1, "activation must not repeat on later frames");
}

#[test]
fn link_mode_keeps_destination_byte_for_byte() {
    let ctx = egui::Context::default();
    let mut clicks = 0;
    let mut probe = CardProbe::default();

    run_frame(&ctx, vec![], |ui| {
        draw_fixture(ui, Some("/library/michka"), false, &mut clicks, &mut probe)
    });
    assert_eq!(
        probe.mode,
        Some(CardMode::Link("/library/michka".to_string()))
    );
    assert_eq!(probe.destination.as_deref(), Some("/library/michka"));
    assert!(probe.navigated.is_none());

    let center = probe.rect.expect("card rect").center();
    run_frame(&ctx, press(center), |ui| {
        draw_fixture(ui, Some("/library/michka"), false, &mut clicks, &mut probe)
    });
    run_frame(&ctx, release(center), |ui| {
        draw_fixture(ui, Some("/library/michka"), false, &mut clicks, &mut probe)
    });

    assert_eq!(clicks, 1);
    assert_eq!(probe.navigated.as_deref(), Some("/library/michka"));
}

#[test]
fn link_activation_is_announced_as_labelled_hyperlink() {
    let ctx = egui::Context::default();
    ctx.options_mut(|o| o.screen_reader = true);
    let mut clicks = 0;
    let mut probe = CardProbe::default();

    run_frame(&ctx, vec![], |ui| {
        draw_fixture(ui, Some("/library/Pictures"), false, &mut clicks, &mut probe)
    });
    let center = probe.rect.expect("card rect").center();
    run_frame(&ctx, press(center), |ui| {
        draw_fixture(ui, Some("/library/Pictures"), false, &mut clicks, &mut probe)
    });
    let out = run_frame(&ctx, release(center), |ui| {
        draw_fixture(ui, Some("/library/Pictures"), false, &mut clicks, &mut probe)
    });

    let info = out
        .platform_output
        .events
        .iter()
        .find_map(|e| match e {
            egui::output::OutputEvent::Clicked(info) => Some(info.clone()),
            _ => None,
        })
        .expect("link activation should be announced");
    assert_eq!(info.typ, egui::WidgetType::Link);
    assert_eq!(info.label.as_deref(), Some("Folder 1"));
}

#[test]
fn button_mode_hit_area_is_hidden_but_still_clickable() {
    let ctx = egui::Context::default();
    ctx.options_mut(|o| o.screen_reader = true);
    let mut clicks = 0;
    let mut probe = CardProbe::default();

    run_frame(&ctx, vec![], |ui| {
        draw_fixture(ui, None, false, &mut clicks, &mut probe)
    });
    assert_eq!(probe.mode, Some(CardMode::Button));
    assert!(probe.destination.is_none());

    let center = probe.rect.expect("card rect").center();
    run_frame(&ctx, press(center), |ui| {
        draw_fixture(ui, None, false, &mut clicks, &mut probe)
    });
    let out = run_frame(&ctx, release(center), |ui| {
        draw_fixture(ui, None, false, &mut clicks, &mut probe)
    });

    assert_eq!(clicks, 1, "the hidden hit area is still the click target");
    assert!(probe.navigated.is_none());
    assert!(
        out.platform_output
            .events
            .iter()
            .all(|e| !matches!(e, egui::output::OutputEvent::Clicked(_))),
        "button-mode activation must not be announced"
    );
}

#[test]
fn start_action_gets_the_generated_title_id() {
    let ctx = egui::Context::default();
    let mut clicks = 0;
    let mut probe = CardProbe::default();

    run_frame(&ctx, vec![], |ui| {
        draw_fixture(ui, None, true, &mut clicks, &mut probe)
    });

    assert_eq!(probe.title_id.as_deref(), Some("folder-3-title"));
    assert_eq!(probe.start_saw.as_deref(), Some("folder-3-title"));
    assert_eq!(
        probe.title_widget_id,
        Some(egui::Id::new("folder-3-title")),
        "the title must be exposed under the generated id"
    );
}

#[test]
fn no_start_action_means_no_id_pair() {
    let ctx = egui::Context::default();
    let mut clicks = 0;
    let mut probe = CardProbe::default();

    run_frame(&ctx, vec![], |ui| {
        draw_fixture(ui, None, false, &mut clicks, &mut probe)
    });

    assert!(probe.title_id.is_none());
    assert!(probe.start_saw.is_none());
    assert_ne!(probe.title_widget_id, Some(egui::Id::new("folder-3-title")));
}

#[test]
fn checkbox_keeps_pointer_priority_over_the_card() {
    let ctx = egui::Context::default();
    let mut clicks = 0;
    let mut probe = CardProbe::default();

    run_frame(&ctx, vec![], |ui| {
        draw_fixture(ui, Some("/library/Pictures"), true, &mut clicks, &mut probe)
    });
    let center = probe.checkbox_rect.expect("checkbox rect").center();

    run_frame(&ctx, press(center), |ui| {
        draw_fixture(ui, Some("/library/Pictures"), true, &mut clicks, &mut probe)
    });
    run_frame(&ctx, release(center), |ui| {
        draw_fixture(ui, Some("/library/Pictures"), true, &mut clicks, &mut probe)
    });

    assert!(probe.checkbox_changed, "checkbox should receive the click");
    assert_eq!(clicks, 0, "the card must not activate under the checkbox");
}
