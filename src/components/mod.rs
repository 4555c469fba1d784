pub mod catalog_list;
pub mod detail_overlay;
pub mod dex_display;
pub mod filter_bar;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use catalog_list::{CatalogList, CatalogListProps};
pub use detail_overlay::{DetailOverlay, DetailOverlayProps};
pub use dex_display::{filter_bar_area, DexDisplay, DexDisplayProps};
pub use filter_bar::{FilterBar, FilterBarProps};
