//! Presentation layer.
//!
//! Handlers build a view model (raw serde data) and hand it to [`emit`]:
//! `--format json` serializes the model unchanged, `--format plain` renders
//! it through its [`PlainView`] implementation.

mod view_models;
mod views;

pub use view_models::*;
pub use views::Style;

use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::fmt;

/// Human-readable rendering of a view model
pub trait PlainView {
    fn fmt_plain(&self, f: &mut fmt::Formatter<'_>, style: Style) -> fmt::Result;
}

struct Plain<'a, T: ?Sized> {
    model: &'a T,
    style: Style,
}

impl<T: PlainView + ?Sized> fmt::Display for Plain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.model.fmt_plain(f, self.style)
    }
}

/// Render `model` to a string in the given format.
pub fn render<T: Serialize + PlainView>(
    model: &T,
    format: OutputFormat,
    style: Style,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(model)?),
        OutputFormat::Plain => Ok(Plain { model, style }.to_string()),
    }
}

/// Write `model` to stdout; colors only when stdout is a terminal.
pub fn emit<T: Serialize + PlainView>(model: &T, format: OutputFormat) -> Result<()> {
    let text = render(model, format, Style::detect())?;
    println!("{}", text.trim_end());
    Ok(())
}
