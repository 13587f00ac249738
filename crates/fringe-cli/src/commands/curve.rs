use crate::cli::CurveArgs;
use crate::config;
use crate::error::Result;
use crate::utils::output::open_output;
use tracing::info;
use wavefringe::core::io::csv::write_curve;
use wavefringe::workflows;

pub fn run(args: CurveArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let job = config::build_curve_job(&args)?;

    info!("Invoking the pattern workflow...");
    let result = workflows::pattern::run(&job.core_config)?;

    let writer = open_output(job.output.as_deref())?;
    write_curve(&result.domain, &result.curve, writer)?;

    match &job.output {
        Some(path) => eprintln!(
            "✓ {} curve ({} samples) written to: {}",
            result.mode,
            result.curve.len(),
            path.display()
        ),
        None => info!("Curve written to standard output."),
    }
    Ok(())
}
