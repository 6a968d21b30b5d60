// Simple console demo: random taps against a random grid, printing the
// rendered surface after each round (runs until Ctrl+C or --rounds N)

use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tap_grid::display::{print_surface, RenderSurface};
use tap_grid::snapshot::Snapshot;
use tap_grid::{GridConfig, GridController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let rounds: Option<usize> = std::env::args()
        .skip_while(|arg| arg != "--rounds")
        .nth(1)
        .and_then(|n| n.parse().ok());

    println!("🔢 Tap Grid - random tap demo (Ctrl+C to stop)");

    // Setup Ctrl+C handler for graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
        })?;
    }

    let mut rng = rand::thread_rng();
    let config = GridConfig::default();
    let mut controller = GridController::new(config.clone(), &mut rng)?;

    let mut surface = RenderSurface::new();
    surface.populate(controller.model());

    println!(
        "Created {} sections ({} cells total), {:?} reconciliation",
        controller.current_sections().len(),
        controller.model().total_cells(),
        controller.reconcile_mode()
    );
    print_surface(&surface, &config);

    let mut round = 0usize;
    while running.load(Ordering::SeqCst) {
        if let Some(max) = rounds {
            if round >= max {
                break;
            }
        }
        round += 1;

        let section = rng.gen_range(0..controller.current_sections().len());
        let position = rng.gen_range(0..controller.model().cell_count(section)?);

        let descriptor = controller.on_cell_selected(section, position)?;
        println!(
            "Round {}: tapped ({}, {}) in \"{}\" - {} cells to redraw",
            round,
            section,
            position,
            controller.header_title(section)?,
            descriptor.reloaded_cells().len()
        );
        surface.apply(&descriptor, controller.model());
        print_surface(&surface, &config);

        std::thread::sleep(Duration::from_millis(500));
    }

    // Dump the final state so runs can be compared
    let snapshot = Snapshot::capture(controller.model());
    println!("Final snapshot:");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    println!("👋 Done after {} rounds", round);

    Ok(())
}
