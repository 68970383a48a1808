//! # Interactive Session
//!
//! Ties lookup, rendering and export to a user interface through a small set
//! of capability traits. The UI toolkit implements the traits; the session
//! holds the only mutable state: the current query, the selected product and
//! the last fully painted label.
//!
//! ```text
//! InputSource ──events──► Session ──► SuggestionSink   (autocomplete list)
//!                           │   └───► StatusSink       (messages)
//!                           ├──► LabelRenderer → RasterSurface (frame)
//!                           └──► export (PNG file / PrintHandoff)
//! ```
//!
//! A render paints into a fresh surface. Only a successful render replaces
//! the selection and the displayed frame, so a failure leaves the previous
//! label intact.

use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::{Catalog, ResolvedProduct};
use crate::error::PricetagError;
use crate::export::{self, PrintHandoff};
use crate::fonts::FontSet;
use crate::label::LabelRenderer;
use crate::surface::RasterSurface;

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The query text changed
    Changed(String),
    /// Resolve the current query and draw its label
    Generate,
    /// Save the current label, optionally to an explicit path
    Download(Option<PathBuf>),
    /// Generate the label for the n-th shown suggestion (0-based)
    Pick(usize),
    Print,
    Quit,
}

/// Source of user events. `None` means the input is exhausted.
pub trait InputSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// Displays autocomplete candidates.
pub trait SuggestionSink {
    fn show(&mut self, items: &[ResolvedProduct]);
    fn hide(&mut self);
}

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Displays status messages.
pub trait StatusSink {
    fn status(&mut self, kind: StatusKind, message: &str);
}

/// Trim and upper-case raw input the way the input field does.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// One-line product details shown next to a freshly generated label.
pub fn product_summary(product: &ResolvedProduct, currency: &str) -> String {
    let record = &product.record;
    format!(
        "WSN: {} | WID: {} | FSN: {} | Brand: {} | MRP: {}{} | FSP: {}{}",
        product.wsn, record.wid, record.fsn, record.brand, currency, record.mrp, currency, record.fsp
    )
}

/// Single-slot holder for the product whose label is on display.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<ResolvedProduct>,
}

impl Selection {
    /// Store `product`, returning whatever it overwrote.
    pub fn replace(&mut self, product: ResolvedProduct) -> Option<ResolvedProduct> {
        self.current.replace(product)
    }

    pub fn current(&self) -> Option<&ResolvedProduct> {
        self.current.as_ref()
    }

    pub fn take(&mut self) -> Option<ResolvedProduct> {
        self.current.take()
    }
}

/// The controller behind one label-maker window.
pub struct Session<'c> {
    catalog: &'c Catalog,
    renderer: LabelRenderer,
    fonts: Arc<FontSet>,
    query: String,
    shown: Vec<ResolvedProduct>,
    selection: Selection,
    frame: Option<RasterSurface>,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog, renderer: LabelRenderer, fonts: Arc<FontSet>) -> Self {
        Self {
            catalog,
            renderer,
            fonts,
            query: String::new(),
            shown: Vec::new(),
            selection: Selection::default(),
            frame: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> Option<&ResolvedProduct> {
        self.selection.current()
    }

    /// The last completely painted label.
    pub fn frame(&self) -> Option<&RasterSurface> {
        self.frame.as_ref()
    }

    /// Update the query and the suggestion list.
    ///
    /// Returns whether the query resolves to a product, i.e. whether
    /// generating a label would succeed.
    pub fn input_changed(&mut self, raw: &str, suggestions: &mut dyn SuggestionSink) -> bool {
        self.query = normalize_query(raw);

        self.shown = self.catalog.suggest(&self.query);
        if self.shown.is_empty() {
            suggestions.hide();
        } else {
            suggestions.show(&self.shown);
        }

        !self.query.is_empty() && self.catalog.resolve(&self.query).is_ok()
    }

    /// Resolve the current query and paint its label.
    pub fn generate(&mut self, status: &mut dyn StatusSink) -> Result<(), PricetagError> {
        let result = self.try_generate();
        match &result {
            Ok(()) => {
                if let Some(product) = self.selection.current() {
                    let summary = product_summary(product, &self.renderer.config().currency);
                    status.status(StatusKind::Info, &summary);
                }
                status.status(StatusKind::Success, "Label generated successfully!")
            }
            Err(PricetagError::NotFound(code)) if code.is_empty() => {
                status.status(StatusKind::Error, "Please enter a WSN/WID code")
            }
            Err(PricetagError::NotFound(code)) => {
                status.status(StatusKind::Error, &format!("Product not found: {}", code))
            }
            Err(e) => status.status(StatusKind::Error, &format!("Error generating label: {}", e)),
        }
        result
    }

    /// Take the `index`-th entry of the last suggestion list as the query
    /// and generate its label.
    pub fn pick(
        &mut self,
        index: usize,
        suggestions: &mut dyn SuggestionSink,
        status: &mut dyn StatusSink,
    ) -> Result<(), PricetagError> {
        let Some(wsn) = self.shown.get(index).map(|p| p.wsn.clone()) else {
            let message = format!("No suggestion #{}", index + 1);
            status.status(StatusKind::Error, &message);
            return Err(PricetagError::NotFound(format!("#{}", index + 1)));
        };

        self.query = wsn;
        self.shown.clear();
        suggestions.hide();
        self.generate(status)
    }

    fn try_generate(&mut self) -> Result<(), PricetagError> {
        let product = self.catalog.resolve(&self.query)?;

        let config = self.renderer.config();
        let mut surface = RasterSurface::new(config.width, config.height, Arc::clone(&self.fonts));
        self.renderer.render(&mut surface, &product)?;

        tracing::info!(wsn = %product.wsn, "label generated");
        self.selection.replace(product);
        self.frame = Some(surface);
        Ok(())
    }

    /// Save the current label as PNG. Without an explicit path the file goes
    /// to the working directory under its default download name.
    pub fn download(
        &self,
        path: Option<&Path>,
        status: &mut dyn StatusSink,
    ) -> Result<PathBuf, PricetagError> {
        let result = self.try_download(path);
        match &result {
            Ok(saved) => status.status(
                StatusKind::Success,
                &format!("Label downloaded successfully! ({})", saved.display()),
            ),
            Err(PricetagError::Render(_)) => status.status(StatusKind::Error, "No label to download"),
            Err(e) => status.status(StatusKind::Error, &format!("Error downloading label: {}", e)),
        }
        result
    }

    fn try_download(&self, path: Option<&Path>) -> Result<PathBuf, PricetagError> {
        let (product, frame) = self.current_label()?;
        let target = match path {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(export::download_file_name(&product.wsn, Utc::now())),
        };
        export::save_png(frame, &target)?;
        Ok(target)
    }

    /// Send the current label to the printer.
    pub fn print(
        &self,
        printer: &dyn PrintHandoff,
        status: &mut dyn StatusSink,
    ) -> Result<(), PricetagError> {
        let result = self.current_label().and_then(|(product, frame)| {
            let png = export::encode_png(frame)?;
            printer.print(&png, &format!("label-{}", product.wsn))
        });
        match &result {
            Ok(()) => status.status(StatusKind::Info, "Label sent to printer"),
            Err(PricetagError::Render(_)) => status.status(StatusKind::Error, "No label to print"),
            Err(e) => status.status(StatusKind::Error, &format!("Error printing label: {}", e)),
        }
        result
    }

    fn current_label(&self) -> Result<(&ResolvedProduct, &RasterSurface), PricetagError> {
        match (self.selection.current(), self.frame.as_ref()) {
            (Some(product), Some(frame)) => Ok((product, frame)),
            _ => Err(PricetagError::Render("no label has been generated".to_string())),
        }
    }

    /// Process events until the input is exhausted or asks to quit.
    ///
    /// Failures are reported through `status` and never end the loop.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        suggestions: &mut dyn SuggestionSink,
        status: &mut dyn StatusSink,
        printer: &dyn PrintHandoff,
    ) {
        while let Some(event) = input.next_event() {
            let outcome = match event {
                InputEvent::Changed(text) => {
                    self.input_changed(&text, suggestions);
                    Ok(())
                }
                InputEvent::Generate => {
                    suggestions.hide();
                    self.generate(status)
                }
                InputEvent::Pick(index) => self.pick(index, suggestions, status),
                InputEvent::Download(path) => self.download(path.as_deref(), status).map(|_| ()),
                InputEvent::Print => self.print(printer, status),
                InputEvent::Quit => break,
            };
            if let Err(e) = outcome {
                tracing::debug!(error = %e, "event failed");
            }
        }
    }
}
