//! Interactive widget state
//!
//! Each widget owns its own state and exposes the transitions it allows.
//! Rendering lives in `ui::dashboard::components`.

pub mod carousel;
pub mod navigation;
pub mod table;

pub use carousel::QuoteCarousel;
pub use navigation::{NavigationBar, Viewport};
pub use table::DataTable;
