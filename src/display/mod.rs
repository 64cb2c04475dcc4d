pub mod chart;
pub mod table;
pub mod viewer;

pub use chart::{ChartPresenter, ChartSurface, DisplayError, NoDisplay, VelocityChart};
pub use table::write_table;
pub use viewer::{MacroquadViewer, display_available};
