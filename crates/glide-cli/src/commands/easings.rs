use anyhow::Result;

use glide_core::{scroll::Curve, AppConfig};

const SAMPLES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

pub fn run(config: &AppConfig) -> Result<()> {
    let configured = config.scroll.easing.label();

    println!("Easing curves ({}):\n", Curve::ALL.len());
    print!("  {:<16}", "name");
    for t in SAMPLES {
        print!(" {:>7}", format!("t={}", t));
    }
    println!();

    for curve in Curve::ALL {
        let marker = if curve.name() == configured { "*" } else { " " };
        print!("{} {:<16}", marker, curve.name());
        for t in SAMPLES {
            print!(" {:>7.4}", curve.apply(t));
        }
        println!();
    }

    println!("\n* configured default");
    Ok(())
}
