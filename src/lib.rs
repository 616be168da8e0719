//! Modal dialog container component for ratatui terminal UIs.
//!
//! The crate provides a single presentational component, [`DialogContainer`],
//! which classifies its children into four semantic roles (title, description,
//! button, other) and renders them inside a modal overlay surface with
//! role-appropriate layout and platform-conditional decoration.

pub mod animation;
pub mod components;
pub mod error;
pub mod events;
pub mod keyboard;
pub mod platform;
pub mod themes;

pub use components::child::{
    ButtonStyle, ClassifiedChildren, DialogButton, DialogChild, DialogContent, DialogDescription,
    DialogTitle, FooterItem,
};
pub use components::container::DialogContainer;
pub use components::overlay::{Overlay, OverlayOptions};
pub use components::Component;
pub use error::{DialogError, DialogResult};
pub use events::{Event, EventHandler};
pub use platform::{FooterLayout, PlatformLook};
pub use themes::Theme;

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;

pub type Backend = CrosstermBackend<io::Stdout>;
pub type Frame<'a> = ratatui::Frame<'a>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
