//! Plain-text rendering of the catalog and notifications.

use crate::model::Product;
use crate::state::CatalogState;
use std::borrow::Cow;
use std::fmt;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown when the page window is empty.
pub const EMPTY_MESSAGE: &str = "No products found";

/// Title column width, in display columns, when none is configured.
pub const DEFAULT_TITLE_WIDTH: usize = 60;

// ===== Notification =====

/// Severity of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation succeeded.
    Success,
    /// Operation was rejected.
    Error,
    /// Neutral information.
    Info,
}

/// One-line message shown after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
}

impl Notification {
    /// Success message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// Error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Informational message.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            NotificationKind::Success => "[ok]",
            NotificationKind::Error => "[error]",
            NotificationKind::Info => "[info]",
        };
        write!(f, "{tag} {}", self.message)
    }
}

// ===== Page =====

/// Render the page window, a summary line and the "load more" footer.
pub fn render_page(state: &CatalogState, title_width: usize) -> String {
    let visible = state.visible_items();
    if visible.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let mut out = String::new();
    let filter = state.filter_query();
    if filter.is_empty() {
        out.push_str(&format!(
            "Showing {} of {} products\n",
            visible.len(),
            state.effective_count()
        ));
    } else {
        out.push_str(&format!(
            "Showing {} of {} products matching \"{}\"\n",
            visible.len(),
            state.effective_count(),
            filter
        ));
    }

    for product in visible {
        out.push_str(&render_row(product, title_width));
        out.push('\n');
    }

    if state.has_more() {
        out.push_str(&format!("Load More ({} remaining)\n", state.remaining_count()));
    }
    out
}

/// One product row: `#id  $price  [category]  title`.
pub fn render_row(product: &Product, title_width: usize) -> String {
    format!(
        "#{}  ${:.2}  [{}]  {}",
        product.id(),
        product.price(),
        product.category(),
        truncate_to_width(product.title(), title_width)
    )
}

/// Detail view for a single product.
pub fn render_info(product: &Product) -> String {
    format!(
        "Product Info #{}\n  {}\n  Price: ${:.2}\n  Category: {}\n  {}\n",
        product.id(),
        product.title(),
        product.price(),
        product.category(),
        product.description()
    )
}

/// Truncate to at most `width` display columns, ending in an ellipsis when cut.
pub fn truncate_to_width(text: &str, width: usize) -> Cow<'_, str> {
    if text.width() <= width {
        return Cow::Borrowed(text);
    }

    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if width > 0 {
        out.push('…');
    }
    Cow::Owned(out)
}
