//! Dialog children and their role classification.
//!
//! Children carry an explicit role tag: the [`DialogChild`] enum is built at
//! the API boundary, so a child's role is fixed at construction instead of
//! being inferred from type metadata at render time. Anything that fits no
//! dedicated role is a [`DialogChild::Custom`] and renders in the main
//! content area.

use crate::platform::{FooterLayout, PlatformLook};
use crate::themes::Theme;
use crate::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Paragraph, Wrap};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// An arbitrary renderable placed in the dialog's main content area,
/// or used as a custom background decoration.
pub trait DialogContent: Send + Sync {
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Rows the content needs at the given width
    fn height(&self, width: u16) -> u16 {
        let _ = width;
        1
    }
}

/// Rows needed to wrap `text` into `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let cols = text.width() as u16;
    cols.div_ceil(width).max(1)
}

/// Title child, rendered bold and centered in the header region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogTitle {
    text: String,
}

impl DialogTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn height(&self, width: u16) -> u16 {
        wrapped_height(&self.text, width)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let paragraph = Paragraph::new(self.text.clone())
            .style(theme.title_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// Description child, rendered muted and centered below the titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogDescription {
    text: String,
}

impl DialogDescription {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn height(&self, width: u16) -> u16 {
        wrapped_height(&self.text, width)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let paragraph = Paragraph::new(self.text.clone())
            .style(theme.description_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// Button styling options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Danger,
    Ghost,
}

/// Footer button child
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    label: String,
    /// Identifier reported when the button is activated
    action: String,
    style: ButtonStyle,
    is_default: bool,
}

impl DialogButton {
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
            style: ButtonStyle::Secondary,
            is_default: false,
        }
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Columns the label needs including padding
    pub fn min_width(&self) -> u16 {
        self.label.width() as u16 + 4
    }
}

/// A dialog child carrying its semantic role
pub enum DialogChild {
    Title(DialogTitle),
    Description(DialogDescription),
    Button(DialogButton),
    /// Anything else; lands in the main content area
    Custom(Box<dyn DialogContent>),
}

impl DialogChild {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title(DialogTitle::new(text))
    }

    pub fn description(text: impl Into<String>) -> Self {
        Self::Description(DialogDescription::new(text))
    }

    pub fn button(button: DialogButton) -> Self {
        Self::Button(button)
    }

    pub fn custom(content: impl DialogContent + 'static) -> Self {
        Self::Custom(Box::new(content))
    }
}

impl fmt::Debug for DialogChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(t) => f.debug_tuple("Title").field(&t.text()).finish(),
            Self::Description(d) => f.debug_tuple("Description").field(&d.text()).finish(),
            Self::Button(b) => f.debug_tuple("Button").field(&b.label()).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One slot in the footer row: a button keyed by its position, or a
/// separator placeholder interleaved between consecutive buttons.
pub enum FooterItem<'a> {
    Button {
        /// Position-derived key, stable across renders for the same input
        index: usize,
        button: &'a DialogButton,
    },
    Separator,
}

impl fmt::Debug for FooterItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Button { index, button } => f
                .debug_struct("Button")
                .field("index", index)
                .field("label", &button.label())
                .finish(),
            Self::Separator => f.write_str("Separator"),
        }
    }
}

/// The four ordered role buckets, rebuilt on every render.
pub struct ClassifiedChildren<'a> {
    pub titles: Vec<&'a DialogTitle>,
    pub descriptions: Vec<&'a DialogDescription>,
    pub others: Vec<&'a dyn DialogContent>,
    /// Buttons in input order, with separators interleaved on the
    /// separated-row footer layout (never before the first button)
    pub footer: Vec<FooterItem<'a>>,
}

impl<'a> ClassifiedChildren<'a> {
    /// Partition `children` into role buckets in a single order-preserving
    /// pass. Every child lands in exactly one bucket.
    pub fn classify(children: &'a [DialogChild], look: PlatformLook) -> Self {
        let separated = look.footer_layout() == FooterLayout::SeparatedRow;
        let mut titles = Vec::new();
        let mut descriptions = Vec::new();
        let mut others: Vec<&dyn DialogContent> = Vec::new();
        let mut footer = Vec::new();
        let mut button_index = 0usize;

        for child in children {
            match child {
                DialogChild::Title(title) => titles.push(title),
                DialogChild::Description(description) => descriptions.push(description),
                DialogChild::Button(button) => {
                    if separated && button_index > 0 {
                        footer.push(FooterItem::Separator);
                    }
                    footer.push(FooterItem::Button {
                        index: button_index,
                        button,
                    });
                    button_index += 1;
                }
                DialogChild::Custom(content) => others.push(content.as_ref()),
            }
        }

        Self {
            titles,
            descriptions,
            others,
            footer,
        }
    }

    pub fn button_count(&self) -> usize {
        self.footer
            .iter()
            .filter(|item| matches!(item, FooterItem::Button { .. }))
            .count()
    }

    pub fn separator_count(&self) -> usize {
        self.footer
            .iter()
            .filter(|item| matches!(item, FooterItem::Separator))
            .count()
    }

    /// Buttons in input order
    pub fn buttons(&self) -> impl Iterator<Item = &'a DialogButton> + '_ {
        self.footer.iter().filter_map(|item| match item {
            FooterItem::Button { button, .. } => Some(*button),
            FooterItem::Separator => None,
        })
    }

    /// Whether a footer region should render at all
    pub fn has_footer(&self) -> bool {
        !self.footer.is_empty()
    }
}
