use crate::cli::ScreenArgs;
use crate::config;
use crate::error::Result;
use crate::utils::output::open_output;
use crate::utils::progress::CliProgressHandler;
use tracing::info;
use wavefringe::core::io::csv::write_map;
use wavefringe::engine::progress::ProgressReporter;
use wavefringe::workflows;

pub fn run(args: ScreenArgs, show_progress: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let job = config::build_screen_job(&args)?;

    let progress_handler = if show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Rendering {0}x{0} screen image...",
        job.core_config.grid_size
    );
    let map = workflows::screen::run(&job.core_config, &reporter)?;

    let writer = open_output(job.output.as_deref())?;
    write_map(&map, writer)?;

    if let Some(path) = &job.output {
        eprintln!(
            "✓ {0}x{0} screen image written to: {1}",
            map.size(),
            path.display()
        );
    }
    Ok(())
}
