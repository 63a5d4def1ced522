use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::{
    app::acquire::{Origin, SkyOutcome, SkySource, acquire},
    domain::zip::ZipCode,
    resilience::backoff::Backoff,
};

pub const RETRY_BASE: Duration = Duration::from_secs(10);

/// Re-derives until ctrl-c, handing every outcome to `emit`.
pub async fn watch<C, E>(
    source: &SkySource,
    zip: &ZipCode,
    refresh: Duration,
    mut clock: C,
    mut emit: E,
) -> Result<()>
where
    C: FnMut() -> NaiveDateTime,
    E: FnMut(&SkyOutcome) -> Result<()>,
{
    let mut backoff = Backoff::new(RETRY_BASE, refresh);
    let retries_help = matches!(source, SkySource::Live(_));

    loop {
        let outcome = acquire(source, zip, clock()).await?;
        emit(&outcome)?;

        let delay = if retries_help {
            next_delay(&outcome.origin, &mut backoff, refresh)
        } else {
            refresh
        };
        debug!(delay_secs = delay.as_secs(), "next derivation scheduled");

        tokio::select! {
            () = tokio::time::sleep(delay) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted; stopping watch");
                return Ok(());
            }
        }
    }
}

/// Live results restore the normal cadence; fallbacks retry sooner.
pub fn next_delay(origin: &Origin, backoff: &mut Backoff, refresh: Duration) -> Duration {
    match origin {
        Origin::Live => {
            backoff.reset();
            refresh
        }
        Origin::Simulated => refresh,
        Origin::Fallback { .. } => backoff.next_delay(),
    }
}
