//! Interactive demo for the dialog container.
//!
//! Run with `cargo run --bin dialog-demo`. Press `d` to toggle the dialog,
//! click the backdrop or press Escape to dismiss it, `q` to quit.

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::Alignment;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use tui_dialog::{
    Backend, ButtonStyle, Component, DialogButton, DialogChild, DialogContainer, Event,
    EventHandler, PlatformLook, Theme,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut terminal = tui_dialog::init_terminal()?;
    let result = run(&mut terminal).await;
    tui_dialog::restore_terminal(&mut terminal)?;
    result
}

async fn run(terminal: &mut Terminal<Backend>) -> Result<()> {
    let theme = Theme::default();
    let mut events = EventHandler::new();

    let dismiss = events.sender();
    let mut dialog = DialogContainer::with_look(PlatformLook::detect())
        .child(DialogChild::title("Delete account"))
        .child(DialogChild::description(
            "This action cannot be undone. Continue?",
        ))
        .child(DialogChild::button(DialogButton::new("Cancel", "cancel")))
        .child(DialogChild::button(
            DialogButton::new("Delete", "delete")
                .with_style(ButtonStyle::Danger)
                .as_default(),
        ))
        .on_request_close(move || {
            let _ = dismiss.send(Event::Custom(
                "backdrop_dismiss".to_string(),
                serde_json::Value::Null,
            ));
        });
    dialog.set_event_sender(events.sender());

    let mut status = String::from("press d to open the dialog, q to quit");

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            let background = Paragraph::new(status.clone()).alignment(Alignment::Center);
            frame.render_widget(background, area);
            dialog.render(frame, area, &theme);
        })?;

        match events.next().await {
            Some(Event::Key(key)) => match key.code {
                KeyCode::Char('q') => break,
                KeyCode::Char('d') if !dialog.dialog_visible() => {
                    dialog.set_dialog_visible(true);
                }
                _ => dialog.handle_key_event(key).await?,
            },
            Some(Event::Mouse(mouse)) => dialog.handle_mouse_event(mouse).await?,
            Some(Event::Tick) => dialog.tick().await?,
            Some(Event::Custom(name, payload)) => match name.as_str() {
                "dialog_button" => {
                    status = format!("button activated: {}", payload["action"]);
                    dialog.set_dialog_visible(false);
                }
                "backdrop_dismiss" | "dialog_close_request" => {
                    status = "dialog dismissed".to_string();
                    dialog.set_dialog_visible(false);
                }
                _ => {}
            },
            _ => {}
        }
    }
    Ok(())
}
