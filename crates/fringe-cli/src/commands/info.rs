use crate::cli::InfoArgs;
use crate::config::{self, OpticsSetup};
use crate::error::Result;
use std::fmt::Write;
use wavefringe::core::models::params::SlitMode;
use wavefringe::core::models::units;
use wavefringe::core::optics::characteristics::PatternCharacteristics;
use wavefringe::engine::error::EngineError;

pub fn run(args: InfoArgs) -> Result<()> {
    let setup = config::build_optics_setup(&args.setup)?;
    let characteristics =
        PatternCharacteristics::compute(setup.mode, &setup.params, setup.convention)
            .map_err(EngineError::from)?;
    print!("{}", render(&setup, &characteristics));
    Ok(())
}

fn format_mm(position: Option<f64>) -> String {
    match position {
        Some(x) => format!("{:.3} mm", units::m_to_mm(x)),
        None => "not on screen".to_string(),
    }
}

fn render(setup: &OpticsSetup, c: &PatternCharacteristics) -> String {
    let params = &setup.params;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Mode:             {}", setup.mode);
    let _ = writeln!(out, "Angle convention: {}", setup.convention);
    let _ = writeln!(out);
    let _ = writeln!(out, "Current Settings");
    let _ = writeln!(
        out,
        "  Wavelength:       {:.1} nm",
        units::m_to_nm(params.wavelength)
    );
    let _ = writeln!(
        out,
        "  Slit width:       {:.2} µm",
        units::m_to_um(params.slit_width)
    );
    if setup.mode == SlitMode::Double {
        if let Some(separation) = params.slit_separation {
            let _ = writeln!(
                out,
                "  Slit separation:  {:.2} µm",
                units::m_to_um(separation)
            );
        }
    }
    let _ = writeln!(
        out,
        "  Screen distance:  {:.1} mm",
        units::m_to_mm(params.screen_distance)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Pattern Landmarks");
    let _ = writeln!(out, "  First minimum:    {}", format_mm(c.first_minimum));
    let _ = writeln!(
        out,
        "  Central maximum:  {}",
        format_mm(c.central_maximum_width)
    );
    if let Some(spacing) = c.fringe_spacing {
        let _ = writeln!(out, "  Fringe spacing:   {}", format_mm(Some(spacing)));
    }
    if let Some(count) = c.fringes_in_central_envelope {
        let _ = writeln!(out, "  Bright fringes in central envelope: {}", count);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Physics Notes");
    match setup.mode {
        SlitMode::Single => {
            let _ = writeln!(out, "  I = (sin β / β)²,  β = π a sin θ / λ");
        }
        SlitMode::Double => {
            let _ = writeln!(out, "  I = (sin β / β)² cos² δ");
            let _ = writeln!(out, "  β = π a sin θ / λ,  δ = π d sin θ / λ");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavefringe::core::models::params::OpticsParameters;
    use wavefringe::core::optics::angle::AngleConvention;

    fn setup(mode: SlitMode) -> OpticsSetup {
        OpticsSetup {
            mode,
            convention: AngleConvention::SmallAngle,
            params: OpticsParameters::from_lab_units(500.0, 10.0, Some(50.0), 1000.0),
        }
    }

    #[test]
    fn single_slit_report_lists_first_minimum() {
        let setup = setup(SlitMode::Single);
        let c = PatternCharacteristics::compute(setup.mode, &setup.params, setup.convention)
            .unwrap();
        let text = render(&setup, &c);
        assert!(text.contains("Wavelength:       500.0 nm"));
        assert!(text.contains("First minimum:    50.000 mm"));
        assert!(text.contains("Central maximum:  100.000 mm"));
        assert!(!text.contains("Slit separation"));
        assert!(!text.contains("Fringe spacing"));
    }

    #[test]
    fn double_slit_report_lists_fringes() {
        let setup = setup(SlitMode::Double);
        let c = PatternCharacteristics::compute(setup.mode, &setup.params, setup.convention)
            .unwrap();
        let text = render(&setup, &c);
        assert!(text.contains("Slit separation:  50.00 µm"));
        assert!(text.contains("Fringe spacing:   10.000 mm"));
        assert!(text.contains("Bright fringes in central envelope: 9"));
        assert!(text.contains("cos² δ"));
    }

    #[test]
    fn unreachable_minimum_is_reported_as_off_screen() {
        assert_eq!(format_mm(None), "not on screen");
    }
}
