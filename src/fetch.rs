//! Boxscore page retrieval.
//!
//! Every request is preceded by a randomized politeness delay; bulk
//! collection uses a much wider window to stay under the source site's
//! throttling. Fetch failure is an error the caller logs and skips — one bad
//! game never aborts a batch.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use rand::Rng;

use crate::document::BoxscoreDocument;
use crate::http_client::http_client;

/// Politeness delay window applied before each request, in seconds.
#[derive(Debug, Clone, Copy)]
pub struct FetchPolicy {
    pub min_delay_secs: f64,
    pub max_delay_secs: f64,
}

impl FetchPolicy {
    /// Single-game / interactive collection: 1-5 s.
    pub fn standard() -> FetchPolicy {
        FetchPolicy {
            min_delay_secs: 1.0,
            max_delay_secs: 5.0,
        }
    }

    /// Bulk season collection: 10-35 s.
    pub fn bulk() -> FetchPolicy {
        FetchPolicy {
            min_delay_secs: 10.0,
            max_delay_secs: 35.0,
        }
    }

    /// No delay, for tests and local fixtures.
    pub fn immediate() -> FetchPolicy {
        FetchPolicy {
            min_delay_secs: 0.0,
            max_delay_secs: 0.0,
        }
    }

    /// Draws one delay from the window.
    pub fn pick_delay(&self) -> Duration {
        if self.max_delay_secs <= 0.0 {
            return Duration::ZERO;
        }
        let secs = if self.max_delay_secs > self.min_delay_secs {
            rand::thread_rng().gen_range(self.min_delay_secs..self.max_delay_secs)
        } else {
            self.min_delay_secs
        };
        Duration::from_secs_f64(secs)
    }

    pub fn sleep(&self) {
        let delay = self.pick_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Fetches a boxscore page and returns it with comment-hidden markup already
/// promoted into queryable fragments.
pub fn fetch_document(url: &str, policy: FetchPolicy) -> Result<BoxscoreDocument> {
    policy.sleep();

    let client = http_client()?;
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("request failed: {url}"))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!("http {status} fetching {url}"));
    }
    let body = resp.text().context("failed reading body")?;
    if body.trim().is_empty() {
        return Err(anyhow!("empty body fetching {url}"));
    }
    Ok(BoxscoreDocument::from_html(&body))
}
