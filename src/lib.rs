pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod resilience;

#[cfg(test)]
mod test_support;

use std::{
    io::{self, IsTerminal, Write},
    time::Duration,
};

use anyhow::{Context, Result};
use app::{
    acquire::{SkyOutcome, SkySource, acquire},
    export::{wallpaper_svg, write_wallpaper},
    output::{SwatchStyle, detect_swatch_style, render_json, render_text},
    settings::{MIN_REFRESH_SECS, load_settings, remember_defaults},
    watch::watch,
};
use chrono::{Local, NaiveDateTime, NaiveTime};
use cli::{Cli, OutputArg};
use domain::zip::ZipCode;
use tracing::{info, warn};

pub async fn run(cli: Cli) -> Result<()> {
    let (settings, path) = load_settings(&cli, true);
    let zip = settings
        .default_zip
        .clone()
        .context("no zip code given and no default_zip saved; pass one such as 10001")?;

    if cli.save_defaults {
        match path.as_deref() {
            Some(path) => {
                remember_defaults(path, &settings)?;
                info!(path = %path.display(), "saved defaults");
            }
            None => warn!("no config directory available; defaults not saved"),
        }
    }

    let source = SkySource::from_settings(&settings);
    let style = detect_swatch_style(cli.effective_color_mode(), io::stdout().is_terminal());
    let emit = |outcome: &SkyOutcome| emit_outcome(&cli, &zip, style, outcome);

    if cli.watch {
        let refresh = Duration::from_secs(settings.refresh_interval_secs.max(MIN_REFRESH_SECS));
        watch(&source, &zip, refresh, || request_time(cli.at), emit).await
    } else {
        let outcome = acquire(&source, &zip, request_time(cli.at)).await?;
        emit(&outcome)
    }
}

/// Local wall-clock time, or today at `at` when a clock override is given.
#[must_use]
pub fn request_time(at: Option<NaiveTime>) -> NaiveDateTime {
    let now = Local::now().naive_local();
    at.map_or(now, |time| now.date().and_time(time))
}

fn emit_outcome(cli: &Cli, zip: &ZipCode, style: SwatchStyle, outcome: &SkyOutcome) -> Result<()> {
    let rendered = match cli.output {
        OutputArg::Text => render_text(outcome, style),
        OutputArg::Json => render_json(outcome)? + "\n",
    };
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("writing result to stdout failed")?;

    if let Some(path) = &cli.export_svg {
        let svg = wallpaper_svg(&outcome.result, zip, cli.width, cli.height);
        write_wallpaper(path, &svg)?;
        info!(path = %path.display(), "wrote wallpaper");
    }
    Ok(())
}
