// File: crates/geothermal-report/src/main.rs
// Summary: Renders all six geothermal charts into the default output directory.

use anyhow::Result;
use geothermal_report::{ReportConfig, ReportGenerator};

fn main() -> Result<()> {
    init_logging();

    let generator = ReportGenerator::new(ReportConfig::default());
    println!("Generating geothermal energy visualizations...");
    generator.generate_all(|topic, _| println!("\u{2713} {}", topic.progress_message()))?;
    println!(
        "\nAll visualizations have been saved to the '{}' directory.",
        generator.config().output_dir.display()
    );
    Ok(())
}

/// Info by default; `RUST_LOG` overrides.
fn init_logging() {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
