//! Presentation layer: view models, a plain-text renderer, and themes.
//!
//! ```text
//! ListView → compute_viewmodel → ListViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types computed from the list view
//! - [`renderer`]: Entry points producing text for a listing or a single post
//! - [`components`]: Header, card, pager, and empty state renderers
//! - [`helpers`]: Colour painter, number formatting, wrapping
//! - [`theme`]: TOML colour palettes and ANSI sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_detail};
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FilterBarInfo, HeaderInfo, ListViewModel, PagerInfo, PostCard, PostDetailViewModel,
};
