use super::PlainView;
use super::view_models::{
    CategoriesViewModel, FieldsViewModel, ImageUrlViewModel, ResolveViewModel, ShowViewModel,
    ValidationViewModel,
};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fmt;

/// Terminal styling switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn detect() -> Self {
        Self {
            color: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn good(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn bad(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

// --------------------------------------------------------
// Catalog
// --------------------------------------------------------

impl PlainView for CategoriesViewModel {
    fn fmt_plain(&self, f: &mut fmt::Formatter<'_>, style: Style) -> fmt::Result {
        writeln!(
            f,
            "{}",
            style.heading(&format!("{:<34} {:<8} {}", "CATEGORY", "TYPE", "LABEL"))
        )?;
        for entry in &self.categories {
            writeln!(
                f,
                "{:<34} {:<8} {}",
                entry.id,
                entry.listing_type.to_string(),
                entry.label
            )?;
        }
        Ok(())
    }
}

impl PlainView for FieldsViewModel {
    fn fmt_plain(&self, f: &mut fmt::Formatter<'_>, style: Style) -> fmt::Result {
        writeln!(f, "{}", style.heading(&self.category))?;
        if !self.registered {
            writeln!(
                f,
                "{}",
                style.dim("unregistered category: every field is optional")
            )?;
        }
        writeln!(f, "  {}", self.price_label)?;

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", style.heading(section.title))?;
            for field in &section.fields {
                let marker = if field.required {
                    style.bad("required")
                } else {
                    style.dim("optional")
                };
                writeln!(f, "  {:<22} {}", field.label, marker)?;
            }
        }

        if !self.amenities.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", style.heading("Amenity choices"))?;
            writeln!(f, "  {}", self.amenities.join(", "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Records
// --------------------------------------------------------

impl PlainView for ValidationViewModel {
    fn fmt_plain(&self, f: &mut fmt::Formatter<'_>, style: Style) -> fmt::Result {
        if self.valid {
            writeln!(f, "{} {} ({})", style.good("valid"), self.file, self.category)
        } else {
            writeln!(f, "{} {} ({})", style.bad("invalid"), self.file, self.category)?;
            for field in &self.missing {
                writeln!(f, "  missing: {}", field)?;
            }
            Ok(())
        }
    }
}

impl PlainView for ShowViewModel {
    fn fmt_plain(&self, f: &mut fmt::Formatter<'_>, style: Style) -> fmt::Result {
        let detail = &self.detail;
        writeln!(f, "{}", style.heading(&detail.title))?;
        writeln!(f, "{}", style.dim(&detail.category_label))?;
        writeln!(f, "{}: {}", detail.price_label, detail.price)?;

        for section in &detail.sections {
            writeln!(f)?;
            writeln!(f, "{}", style.heading(section.title))?;
            for row in &section.rows {
                let value = if row.missing {
                    style.bad(&row.value)
                } else {
                    row.value.clone()
                };
                writeln!(f, "  {:<22} {}", row.label, value)?;
            }
        }

        if !detail.amenities.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", style.heading("Amenities"))?;
            writeln!(f, "  {}", detail.amenities.join(", "))?;
        }

        writeln!(f)?;
        match &self.image {
            Some(image) => {
                writeln!(f, "{}", style.heading("Image"))?;
                writeln!(f, "  preload   {}", image.preload_url)?;
                writeln!(f, "  fallback  {}", image.fallback_url)?;
                writeln!(f, "  srcset    {}", image.srcset)?;
            }
            None => writeln!(f, "{} {}", style.heading("Image"), self.placeholder_url)?,
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Images
// --------------------------------------------------------

impl PlainView for ImageUrlViewModel {
    fn fmt_plain(&self, f: &mut fmt::Formatter<'_>, _style: Style) -> fmt::Result {
        match &self.srcset {
            Some(srcset) => writeln!(f, "{}", srcset),
            None => writeln!(f, "{}", self.url),
        }
    }
}

impl PlainView for ResolveViewModel {
    fn fmt_plain(&self, f: &mut fmt::Formatter<'_>, style: Style) -> fmt::Result {
        let state = self.state.to_string();
        let state = match self.state {
            propview_runtime::ImageState::Loaded => style.good(&state),
            propview_runtime::ImageState::ExhaustedFallback => style.bad(&state),
            _ => state,
        };
        writeln!(f, "{}: {} after {} attempt(s)", self.title, state, self.attempts)?;
        if let Some(url) = &self.display_url {
            writeln!(f, "  display   {}", url)?;
        }
        if let Some(sources) = &self.sources {
            writeln!(f, "  webp      {}", sources.webp)?;
            writeln!(f, "  jpg       {}", sources.jpg)?;
        }
        Ok(())
    }
}
