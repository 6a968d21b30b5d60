// Display module for grid formatting and visualization
pub mod color;
pub mod formatters;
pub mod surface;

// Re-export main functions
pub use color::{color_category_for, ColorCategory};
pub use formatters::{
    format_cell_display, print_column_headers, print_section_header, print_surface,
};
pub use surface::{RenderSurface, SurfaceSection};
