// Display formatting utilities for console output

use crate::config::GridConfig;
use crate::display::surface::RenderSurface;
use crate::grid::CellData;

/// Format one cell as "title v/r/c"
pub fn format_cell_display(cell: &CellData) -> String {
    format!(
        "{} {}/{}/{}",
        cell.title, cell.value, cell.row_total, cell.column_total
    )
}

/// Print a section header line
pub fn print_section_header(title: &str, cell_count: usize) {
    println!();
    println!("=== {} ({} cells) ===", title, cell_count);
}

/// Print column headers for a grid
pub fn print_column_headers(columns: usize) {
    print!("    ");
    for col in 0..columns {
        print!(" {:>14}", format!("col {}", col));
    }
    println!();
}

/// Print an entire surface as one grid per section
pub fn print_surface(surface: &RenderSurface, config: &GridConfig) {
    for section in surface.sections() {
        print_section_header(&section.title, section.ids.len());
        print_column_headers(config.grid_columns);
        for (row, chunk) in section.ids.chunks(config.grid_columns).enumerate() {
            print!("{:2}: ", row);
            for id in chunk {
                match surface.displayed(*id) {
                    Some(cell) => print!(" {:>14}", format_cell_display(cell)),
                    None => print!(" {:>14}", "?"),
                }
            }
            println!();
        }
    }
    println!();
}
