//! Modal dialog container.
//!
//! `DialogContainer` arranges its children into a styled modal layout:
//! classified title and description children form the header, custom children
//! fill the main content area, and button children form the footer. The
//! overlay backdrop, entrance/exit animation, and keyboard avoidance are
//! delegated to their own primitives; this component only composes them.
//!
//! The container is stateless with respect to its children: the role buckets
//! are recomputed on every render and never cached between frames.

use super::child::{ButtonStyle, ClassifiedChildren, DialogChild, DialogContent, FooterItem};
use super::overlay::{Overlay, OverlayOptions};
use super::{Component, ComponentState};
use crate::events::Event;
use crate::keyboard::KeyboardAvoidance;
use crate::platform::{FooterLayout, PlatformLook};
use crate::themes::Theme;
use crate::Frame;
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tokio::sync::mpsc;
use tracing::debug;

/// Horizontal margin between the screen edge and the content panel
const H_MARGIN: u16 = 4;

/// Upper bound on the content panel width
const MAX_PANEL_WIDTH: u16 = 60;

/// Callback invoked when the user taps the backdrop (or presses Escape)
pub type RequestClose = Box<dyn Fn() + Send + Sync>;

/// Row layout of the content panel, computed fresh each render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    /// Whole panel including border
    pub panel: Rect,
    /// Panel interior
    pub inner: Rect,
    /// Header rows, one per title then one per description, top to bottom
    pub header_rows: Vec<Rect>,
    /// Rows for unclassified children
    pub body_rows: Vec<Rect>,
    /// Footer region; absent when there are no buttons
    pub footer: Option<Rect>,
}

/// One positioned slot in the footer row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterSlot {
    Button { index: usize, area: Rect },
    Separator { area: Rect },
}

fn footer_height(look: PlatformLook) -> u16 {
    match look.footer_layout() {
        // Hairline top border row plus the button row.
        FooterLayout::SeparatedRow => 2,
        FooterLayout::TrailingRow => 1,
    }
}

/// Natural (unscaled) panel rectangle, centered in `area`.
pub fn panel_rect(area: Rect, classified: &ClassifiedChildren, look: PlatformLook) -> Rect {
    let width = area
        .width
        .saturating_sub(H_MARGIN * 2)
        .min(MAX_PANEL_WIDTH);
    let inner_width = width.saturating_sub(2);

    let header: u16 = classified
        .titles
        .iter()
        .map(|t| t.height(inner_width))
        .chain(classified.descriptions.iter().map(|d| d.height(inner_width)))
        .sum();
    let body: u16 = classified.others.iter().map(|c| c.height(inner_width)).sum();
    let footer = if classified.has_footer() {
        footer_height(look)
    } else {
        0
    };

    // Two rows of border around the stacked regions.
    let height = (header + body + footer + 2).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Slice the panel into header, body, and footer rows.
pub fn layout_rows(panel: Rect, classified: &ClassifiedChildren, look: PlatformLook) -> PanelLayout {
    let inner = Rect {
        x: panel.x + 1,
        y: panel.y + 1,
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(2),
    };

    let footer_rows = if classified.has_footer() {
        footer_height(look)
    } else {
        0
    };
    let bottom = inner.y + inner.height;
    let footer = (footer_rows > 0 && inner.height >= footer_rows).then(|| Rect {
        x: inner.x,
        y: bottom - footer_rows,
        width: inner.width,
        height: footer_rows,
    });
    let content_bottom = bottom - footer_rows.min(inner.height);

    let mut y = inner.y;
    let mut take = |height: u16| {
        let clipped = height.min(content_bottom.saturating_sub(y));
        let row = Rect::new(inner.x, y, inner.width, clipped);
        y += clipped;
        row
    };

    let mut header_rows = Vec::new();
    for title in &classified.titles {
        header_rows.push(take(title.height(inner.width)));
    }
    for description in &classified.descriptions {
        header_rows.push(take(description.height(inner.width)));
    }

    let mut body_rows = Vec::new();
    for other in &classified.others {
        body_rows.push(take(other.height(inner.width)));
    }

    PanelLayout {
        panel,
        inner,
        header_rows,
        body_rows,
        footer,
    }
}

/// Position the footer items inside the footer region.
pub fn footer_slots(
    footer: Rect,
    classified: &ClassifiedChildren,
    look: PlatformLook,
) -> Vec<FooterSlot> {
    let buttons = classified.button_count();
    if buttons == 0 || footer.width == 0 || footer.height == 0 {
        return Vec::new();
    }

    match look.footer_layout() {
        FooterLayout::SeparatedRow => {
            // Row below the hairline; buttons share it evenly with
            // one-column separators between them.
            let row_y = footer.y + footer.height.saturating_sub(1);
            let separators = (buttons - 1) as u16;
            let usable = footer.width.saturating_sub(separators);
            let base = usable / buttons as u16;
            let mut remainder = usable % buttons as u16;

            let mut slots = Vec::new();
            let mut x = footer.x;
            for item in &classified.footer {
                match item {
                    FooterItem::Button { index, .. } => {
                        let mut width = base;
                        if remainder > 0 {
                            width += 1;
                            remainder -= 1;
                        }
                        slots.push(FooterSlot::Button {
                            index: *index,
                            area: Rect::new(x, row_y, width, 1),
                        });
                        x += width;
                    }
                    FooterItem::Separator => {
                        slots.push(FooterSlot::Separator {
                            area: Rect::new(x, row_y, 1, 1),
                        });
                        x += 1;
                    }
                }
            }
            slots
        }
        FooterLayout::TrailingRow => {
            // Pack against the trailing edge, rightmost button last.
            let mut slots = Vec::new();
            let mut right = footer.x + footer.width;
            for item in classified.footer.iter().rev() {
                if let FooterItem::Button { index, button } = item {
                    let width = button.min_width().min(right.saturating_sub(footer.x));
                    if width == 0 {
                        break;
                    }
                    let x = right - width;
                    slots.push(FooterSlot::Button {
                        index: *index,
                        area: Rect::new(x, footer.y, width, 1),
                    });
                    right = x.saturating_sub(1);
                }
            }
            slots.reverse();
            slots
        }
    }
}

/// Scale `rect` around its center, clamped to `bounds`.
fn scale_rect(rect: Rect, scale: f32, bounds: Rect) -> Rect {
    if (scale - 1.0).abs() < f32::EPSILON {
        return rect;
    }
    let width = ((rect.width as f32 * scale).round() as u16).min(bounds.width);
    let height = ((rect.height as f32 * scale).round() as u16).min(bounds.height);
    let cx = rect.x + rect.width / 2;
    let cy = rect.y + rect.height / 2;
    let x = cx
        .saturating_sub(width / 2)
        .clamp(bounds.x, (bounds.x + bounds.width).saturating_sub(width));
    let y = cy
        .saturating_sub(height / 2)
        .clamp(bounds.y, (bounds.y + bounds.height).saturating_sub(height));
    Rect::new(x, y, width, height)
}

fn button_style(style: ButtonStyle, focused: bool, theme: &Theme) -> Style {
    if focused {
        return Style::default()
            .bg(theme.primary)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
    }
    match style {
        ButtonStyle::Primary => Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
        ButtonStyle::Secondary => Style::default().fg(theme.text),
        ButtonStyle::Danger => Style::default().fg(Color::Red),
        ButtonStyle::Ghost => Style::default().fg(theme.text_muted),
    }
}

#[allow(clippy::too_many_arguments)]
fn render_footer(
    frame: &mut Frame,
    footer: Rect,
    classified: &ClassifiedChildren,
    look: PlatformLook,
    focused_button: usize,
    theme: &Theme,
    button_areas: &mut Vec<(usize, Rect)>,
) {
    if look.footer_layout() == FooterLayout::SeparatedRow {
        let hairline = Paragraph::new("─".repeat(footer.width as usize))
            .style(Style::default().fg(theme.separator));
        frame.render_widget(hairline, Rect::new(footer.x, footer.y, footer.width, 1));
    }

    let buttons: Vec<_> = classified.buttons().collect();
    for slot in footer_slots(footer, classified, look) {
        match slot {
            FooterSlot::Button { index, area } => {
                let button = buttons[index];
                let focused = index == focused_button;
                let widget = Paragraph::new(format!(" {} ", button.label()))
                    .style(button_style(button.style(), focused, theme))
                    .alignment(Alignment::Center);
                frame.render_widget(widget, area);
                button_areas.push((index, area));
            }
            FooterSlot::Separator { area } => {
                let widget = Paragraph::new("│").style(Style::default().fg(theme.separator));
                frame.render_widget(widget, area);
            }
        }
    }
}

/// Modal dialog container component
pub struct DialogContainer {
    state: ComponentState,
    look: PlatformLook,
    children: Vec<DialogChild>,
    on_request_close: Option<RequestClose>,
    blur_component: Option<Box<dyn DialogContent>>,
    overlay: Overlay,
    keyboard: KeyboardAvoidance,
    closable: bool,
    visible: bool,
    focused_button: usize,
    event_sender: Option<mpsc::UnboundedSender<Event>>,
    // Rects from the last render, used for mouse hit-testing only.
    panel_area: Rect,
    button_areas: Vec<(usize, Rect)>,
}

impl DialogContainer {
    /// Create a container with the look resolved from the host OS.
    pub fn new() -> Self {
        Self::with_look(PlatformLook::detect())
    }

    /// Create a container with an explicit platform look.
    pub fn with_look(look: PlatformLook) -> Self {
        Self {
            state: ComponentState::new(),
            look,
            children: Vec::new(),
            on_request_close: None,
            blur_component: None,
            overlay: Overlay::new(look, OverlayOptions::default()),
            keyboard: KeyboardAvoidance::new(),
            closable: true,
            visible: false,
            focused_button: 0,
            event_sender: None,
            panel_area: Rect::default(),
            button_areas: Vec::new(),
        }
    }

    /// Append a child.
    pub fn child(mut self, child: DialogChild) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child that may be absent; `None` is skipped.
    pub fn maybe_child(mut self, child: Option<DialogChild>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    /// Replace the children list.
    pub fn children(mut self, children: Vec<DialogChild>) -> Self {
        self.children = children;
        self
    }

    /// Set the backdrop-dismiss callback.
    pub fn on_request_close<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_request_close = Some(Box::new(callback));
        self
    }

    /// Custom background decoration, honored only on looks that decorate
    /// the panel (Cupertino).
    pub fn blur_component(mut self, content: impl DialogContent + 'static) -> Self {
        self.blur_component = Some(Box::new(content));
        self
    }

    /// Overlay options, forwarded to the overlay primitive unchanged.
    pub fn overlay_options(mut self, options: OverlayOptions) -> Self {
        self.overlay = Overlay::new(self.look, options);
        if self.visible {
            self.overlay.set_visible(true);
        }
        self
    }

    /// Whether Escape requests close.
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Initial visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.set_dialog_visible(visible);
        self
    }

    /// Set the event sender used to report button activations.
    pub fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<Event>) {
        self.event_sender = Some(sender);
    }

    /// Report the input-panel inset in rows (keyboard avoidance).
    pub fn set_keyboard_inset(&mut self, rows: u16) {
        self.keyboard.set_inset(rows);
    }

    pub fn look(&self) -> PlatformLook {
        self.look
    }

    /// Show or hide the dialog. Setting the current value is a no-op.
    pub fn set_dialog_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        debug!(visible, "dialog visibility changed");
        self.visible = visible;
        self.overlay.set_visible(visible);
        if visible {
            self.focused_button = self.default_button_index();
        }
    }

    pub fn dialog_visible(&self) -> bool {
        self.visible
    }

    fn button_count(&self) -> usize {
        self.children
            .iter()
            .filter(|c| matches!(c, DialogChild::Button(_)))
            .count()
    }

    fn default_button_index(&self) -> usize {
        self.children
            .iter()
            .filter_map(|c| match c {
                DialogChild::Button(b) => Some(b),
                _ => None,
            })
            .position(|b| b.is_default())
            .unwrap_or(0)
    }

    fn request_close(&self) {
        debug!("dialog close requested");
        if let Some(callback) = &self.on_request_close {
            callback();
        }
        if let Some(sender) = &self.event_sender {
            let _ = sender.send(Event::Custom(
                "dialog_close_request".to_string(),
                serde_json::Value::Null,
            ));
        }
    }

    fn activate_button(&self, index: usize) {
        let button = self
            .children
            .iter()
            .filter_map(|c| match c {
                DialogChild::Button(b) => Some(b),
                _ => None,
            })
            .nth(index);
        if let Some(button) = button {
            debug!(index, action = button.action(), "dialog button activated");
            if let Some(sender) = &self.event_sender {
                let _ = sender.send(Event::Custom(
                    "dialog_button".to_string(),
                    serde_json::json!({
                        "key": format!("dialog-button-{index}"),
                        "action": button.action(),
                    }),
                ));
            }
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let count = self.button_count();
        if count == 0 {
            return;
        }
        self.focused_button = if forward {
            (self.focused_button + 1) % count
        } else {
            (self.focused_button + count - 1) % count
        };
    }

    fn render_dialog(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.state.size = area;
        self.panel_area = Rect::default();
        self.button_areas.clear();

        if !self.overlay.is_shown() || area.width == 0 || area.height == 0 {
            return;
        }

        self.overlay.render_backdrop(frame, area, theme);

        let avoided = self.keyboard.apply(area, self.look);
        let classified = ClassifiedChildren::classify(&self.children, self.look);
        let transform = self.overlay.transform();

        let natural = panel_rect(avoided, &classified, self.look);
        let panel = scale_rect(natural, transform.scale, avoided);
        if panel.width < 2 || panel.height < 2 {
            return;
        }
        let layout = layout_rows(panel, &classified, self.look);
        self.panel_area = panel;

        frame.render_widget(Clear, panel);

        // Background decoration: custom blur component if provided, else a
        // default fill, only on looks that decorate the panel.
        if self.look.has_backdrop_decoration() {
            match &self.blur_component {
                Some(blur) => blur.render(frame, panel, theme),
                None => {
                    frame.render_widget(Block::default().style(theme.surface_style()), panel)
                }
            }
        }

        let border = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border_style(self.state.has_focus));
        frame.render_widget(border, panel);

        let mut rows = layout.header_rows.iter();
        for title in &classified.titles {
            if let Some(row) = rows.next() {
                title.render(frame, *row, theme);
            }
        }
        for description in &classified.descriptions {
            if let Some(row) = rows.next() {
                description.render(frame, *row, theme);
            }
        }

        for (other, row) in classified.others.iter().zip(layout.body_rows.iter()) {
            other.render(frame, *row, theme);
        }

        if let Some(footer) = layout.footer {
            render_footer(
                frame,
                footer,
                &classified,
                self.look,
                self.focused_button,
                theme,
                &mut self.button_areas,
            );
        }

        // Fading in or out: approximate partial opacity with a dim overlay.
        if transform.opacity < 1.0 {
            let veil = Block::default().style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(veil, panel);
        }
    }
}

impl Default for DialogContainer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Component for DialogContainer {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        if !self.visible {
            return Ok(());
        }
        match event.code {
            KeyCode::Esc if self.closable => self.request_close(),
            KeyCode::Left | KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Right | KeyCode::Tab => self.cycle_focus(true),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.button_count() > 0 {
                    self.activate_button(self.focused_button);
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        if !self.visible {
            return Ok(());
        }
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(());
        }

        let hit_button = self.button_areas.iter().find(|(_, area)| {
            event.column >= area.x
                && event.column < area.x + area.width
                && event.row >= area.y
                && event.row < area.y + area.height
        });
        if let Some(&(index, _)) = hit_button {
            self.focused_button = index;
            self.activate_button(index);
            return Ok(());
        }

        if self
            .overlay
            .hit_backdrop(self.state.size, self.panel_area, event.column, event.row)
        {
            self.request_close();
        }
        Ok(())
    }

    async fn tick(&mut self) -> Result<()> {
        self.overlay.tick();
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.render_dialog(frame, area, theme);
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn set_size(&mut self, size: Rect) {
        self.state.size = size;
    }

    fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    fn set_focus(&mut self, focus: bool) {
        self.state.has_focus = focus;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.set_dialog_visible(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::child::DialogButton;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn instant_options() -> OverlayOptions {
        OverlayOptions::new().durations(Duration::ZERO, Duration::ZERO)
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn example_children() -> Vec<DialogChild> {
        vec![
            DialogChild::description("d1"),
            DialogChild::title("t1"),
            DialogChild::button(DialogButton::new("ok", "ok")),
            DialogChild::button(DialogButton::new("cancel", "cancel")),
        ]
    }

    fn render_once(container: &mut DialogContainer, width: u16, height: u16) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| {
                let area = frame.size();
                container.render_dialog(frame, area, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_maybe_child_skips_absent() {
        let container = DialogContainer::with_look(PlatformLook::Material)
            .child(DialogChild::title("t"))
            .maybe_child(None)
            .maybe_child(Some(DialogChild::description("d")));
        assert_eq!(container.children.len(), 2);
    }

    #[test]
    fn test_no_footer_without_buttons() {
        let children = vec![DialogChild::title("t"), DialogChild::description("d")];
        let classified = ClassifiedChildren::classify(&children, PlatformLook::Cupertino);
        let panel = panel_rect(Rect::new(0, 0, 80, 24), &classified, PlatformLook::Cupertino);
        let layout = layout_rows(panel, &classified, PlatformLook::Cupertino);
        assert!(layout.footer.is_none());
    }

    #[test]
    fn test_header_orders_title_before_description() {
        let children = example_children();
        let classified = ClassifiedChildren::classify(&children, PlatformLook::Cupertino);
        let panel = panel_rect(Rect::new(0, 0, 80, 24), &classified, PlatformLook::Cupertino);
        let layout = layout_rows(panel, &classified, PlatformLook::Cupertino);

        // One title row, one description row; title is above.
        assert_eq!(layout.header_rows.len(), 2);
        assert!(layout.header_rows[0].y < layout.header_rows[1].y);
    }

    #[test]
    fn test_footer_slots_alternate_on_cupertino() {
        let children = example_children();
        let classified = ClassifiedChildren::classify(&children, PlatformLook::Cupertino);
        let panel = panel_rect(Rect::new(0, 0, 80, 24), &classified, PlatformLook::Cupertino);
        let layout = layout_rows(panel, &classified, PlatformLook::Cupertino);
        let footer = layout.footer.expect("footer expected");
        let slots = footer_slots(footer, &classified, PlatformLook::Cupertino);

        let pattern: Vec<_> = slots
            .iter()
            .map(|slot| matches!(slot, FooterSlot::Button { .. }))
            .collect();
        assert_eq!(pattern, vec![true, false, true]);

        // Slots tile the row left to right without overlap.
        let mut x = footer.x;
        for slot in &slots {
            let area = match slot {
                FooterSlot::Button { area, .. } | FooterSlot::Separator { area } => *area,
            };
            assert_eq!(area.x, x);
            x += area.width;
        }
    }

    #[test]
    fn test_footer_trailing_alignment_on_material() {
        let children = vec![
            DialogChild::button(DialogButton::new("OK", "ok")),
            DialogChild::button(DialogButton::new("Cancel", "cancel")),
        ];
        let classified = ClassifiedChildren::classify(&children, PlatformLook::Material);
        let panel = panel_rect(Rect::new(0, 0, 80, 24), &classified, PlatformLook::Material);
        let layout = layout_rows(panel, &classified, PlatformLook::Material);
        let footer = layout.footer.expect("footer expected");
        let slots = footer_slots(footer, &classified, PlatformLook::Material);

        assert_eq!(slots.len(), 2);
        // Last button is flush with the trailing edge.
        let last = match slots.last().unwrap() {
            FooterSlot::Button { area, .. } => *area,
            FooterSlot::Separator { .. } => panic!("no separators on material"),
        };
        assert_eq!(last.x + last.width, footer.x + footer.width);
    }

    #[test]
    fn test_visibility_toggle_is_idempotent() {
        let mut container = DialogContainer::with_look(PlatformLook::Material)
            .overlay_options(instant_options());
        assert!(!container.is_visible());

        container.set_dialog_visible(true);
        assert!(container.is_visible());
        container.set_dialog_visible(true);
        assert!(container.is_visible());

        container.set_dialog_visible(false);
        assert!(!container.is_visible());
        container.set_dialog_visible(false);
        assert!(!container.is_visible());
    }

    #[test]
    fn test_keyboard_inset_raises_panel_on_cupertino() {
        let children = vec![DialogChild::title("t")];
        let classified = ClassifiedChildren::classify(&children, PlatformLook::Cupertino);
        let area = Rect::new(0, 0, 80, 24);

        let resting = panel_rect(area, &classified, PlatformLook::Cupertino);

        let mut avoidance = KeyboardAvoidance::new();
        avoidance.set_inset(8);
        let avoided = avoidance.apply(area, PlatformLook::Cupertino);
        let raised = panel_rect(avoided, &classified, PlatformLook::Cupertino);

        assert!(raised.y < resting.y);
    }

    #[tokio::test]
    async fn test_backdrop_press_fires_close_once() {
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closes);
        let mut container = DialogContainer::with_look(PlatformLook::Material)
            .children(example_children())
            .overlay_options(instant_options())
            .on_request_close(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        container.set_dialog_visible(true);
        render_once(&mut container, 80, 24);

        // Top-left corner is backdrop: panel is centered.
        container.handle_mouse_event(press(0, 0)).await.unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 1);

        // A press inside the panel never fires the callback.
        let inside = container.panel_area;
        container
            .handle_mouse_event(press(inside.x + 1, inside.y))
            .await
            .unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_backdrop_press_without_callback_is_noop() {
        let mut container = DialogContainer::with_look(PlatformLook::Material)
            .children(example_children())
            .overlay_options(instant_options());
        container.set_dialog_visible(true);
        render_once(&mut container, 80, 24);
        container.handle_mouse_event(press(0, 0)).await.unwrap();
    }

    #[tokio::test]
    async fn test_hidden_dialog_ignores_input() {
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closes);
        let mut container = DialogContainer::with_look(PlatformLook::Material)
            .children(example_children())
            .overlay_options(instant_options())
            .on_request_close(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        container.handle_mouse_event(press(0, 0)).await.unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_button_click_reports_action() {
        let mut container = DialogContainer::with_look(PlatformLook::Cupertino)
            .children(example_children())
            .overlay_options(instant_options());
        let (sender, mut receiver) = mpsc::unbounded_channel();
        container.set_event_sender(sender);

        container.set_dialog_visible(true);
        render_once(&mut container, 80, 24);

        let (index, area) = container.button_areas[1];
        container.handle_mouse_event(press(area.x, area.y)).await.unwrap();

        match receiver.try_recv().unwrap() {
            Event::Custom(name, payload) => {
                assert_eq!(name, "dialog_button");
                assert_eq!(payload["action"], "cancel");
                assert_eq!(payload["key"], format!("dialog-button-{index}"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_enter_activates_focused_button() {
        let mut container = DialogContainer::with_look(PlatformLook::Material)
            .children(example_children())
            .overlay_options(instant_options());
        let (sender, mut receiver) = mpsc::unbounded_channel();
        container.set_event_sender(sender);
        container.set_dialog_visible(true);

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        container.handle_key_event(right).await.unwrap();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        container.handle_key_event(enter).await.unwrap();

        match receiver.try_recv().unwrap() {
            Event::Custom(name, payload) => {
                assert_eq!(name, "dialog_button");
                assert_eq!(payload["action"], "cancel");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_hidden_container_renders_nothing() {
        let mut container = DialogContainer::with_look(PlatformLook::Material)
            .children(example_children())
            .overlay_options(instant_options());
        render_once(&mut container, 80, 24);
        assert_eq!(container.panel_area, Rect::default());
        assert!(container.button_areas.is_empty());
    }
}
