//! Example showing a themed progress bar with a custom tag and listeners

use std::thread::sleep;
use std::time::Duration;

use color_eyre::Result;
use tagline::tags::from_fn;
use tagline::theme::{BarGlyphs, Color, Theme};
use tagline::ProgressBarBuilder;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let theme = Theme::default()
        .with_glyphs(BarGlyphs::new("█", "▌", " ", " ")?)
        .with_progress_style(Color::from_hex("#f59e0b")?.into());

    let mut bar = ProgressBarBuilder::new()
        .total(40)
        .length(30)
        .theme(theme)
        .template("<progress:label:start> <progress:bar> <progress:indicator> <custom:left>")
        .start_label("Counting down")
        .handler(from_fn(["<custom:left>"], |_, bar| {
            Ok(format!("({} left)", bar.total() - bar.value().unwrap_or(0)))
        }))
        .build();

    bar.on_start(|_| {
        tracing::info!("countdown started");
        Ok(())
    })
    .on_complete(|event| {
        tracing::info!(elapsed = ?event.snapshot.elapsed, "countdown complete");
        Ok(())
    });

    for step in 0..bar.total() {
        if step == bar.total() / 2 {
            bar.set_start_label("Halfway there", true)?;
        }
        bar.increment(1)?;
        sleep(Duration::from_millis(50));
    }

    println!("Done.");
    Ok(())
}
