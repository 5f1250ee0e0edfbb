//! Top-level rendering coordinator.
//!
//! Rendering is two steps: the [`ListView`] computes a view model, then the
//! components turn it into text. The result is returned as a `String` so the
//! caller decides where it goes.
//!
//! # Example
//!
//! ```rust
//! use folio::app::{ListView, ViewSettings};
//! use folio::storage::RecordStore;
//! use folio::ui::render;
//!
//! let settings = ViewSettings { color: false, ..Default::default() };
//! let view = ListView::new(RecordStore::sample()?, settings);
//! let text = render(&view, 80);
//! assert!(text.starts_with("Tech Blog"));
//! assert!(text.contains("6 posts found"));
//! # Ok::<(), folio::FolioError>(())
//! ```

use crate::app::ListView;
use crate::domain::error::Result;
use crate::ui::components;
use crate::ui::helpers::Painter;

/// Renders the current listing page at `cols` columns.
#[must_use]
pub fn render(view: &ListView, cols: usize) -> String {
    let _span = tracing::debug_span!("render_list", cols).entered();

    let viewmodel = view.compute_viewmodel();
    let painter = Painter::new(&view.settings.theme, view.settings.color);

    let mut out = String::new();
    components::render_list_layout(&mut out, &viewmodel, &painter, cols);
    tracing::debug!(cards = viewmodel.cards.len(), bytes = out.len(), "list rendered");
    out
}

/// Renders post `id` with its related posts at `cols` columns.
///
/// # Errors
///
/// Returns an error if the post does not exist or its share link cannot be
/// built.
pub fn render_detail(view: &ListView, id: u64, cols: usize) -> Result<String> {
    let _span = tracing::debug_span!("render_detail", id, cols).entered();

    let viewmodel = view.compute_detail(id)?;
    let painter = Painter::new(&view.settings.theme, view.settings.color);

    let mut out = String::new();
    components::render_detail_layout(&mut out, &viewmodel, &painter, cols);
    Ok(out)
}
