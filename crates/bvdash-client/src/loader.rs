//! Dashboard load cycle: concurrent retrieval with all-or-nothing semantics.
//!
//! Both endpoint fetches run concurrently and the cycle fails fast if either
//! fails; aggregation only ever sees a complete dataset. The [`Loader`]
//! wraps that in an explicit `Idle -> Loading -> Ready | Failed` state
//! machine so presentation layers consume immutable snapshots instead of
//! ambient mutable state.

use bvdash_core::{BrandSummary, VideoRecord};

use crate::client::DashboardClient;
use crate::error::LoadError;

/// The complete dataset for one dashboard render cycle.
#[derive(Debug)]
pub struct DashboardData {
    pub brand_summaries: Vec<BrandSummary>,
    pub videos: Vec<VideoRecord>,
}

/// Load-cycle state. `Ready` and `Failed` are terminal until the consumer
/// explicitly starts a new cycle with [`Loader::load`]; there is no
/// automatic retry.
#[derive(Debug)]
pub enum LoadState {
    Idle,
    Loading,
    Ready(DashboardData),
    Failed(LoadError),
}

impl LoadState {
    #[must_use]
    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Fetches both collections concurrently, failing fast if either fetch fails.
///
/// The two requests write to independent result slots; nothing is shared
/// between them while in flight.
///
/// # Errors
///
/// Returns [`LoadError::Stats`] or [`LoadError::Videos`] identifying the
/// retrieval that broke. No partial data is returned.
pub async fn load_dashboard(client: &DashboardClient) -> Result<DashboardData, LoadError> {
    let (brand_summaries, videos) = tokio::try_join!(
        async { client.fetch_brand_stats().await.map_err(LoadError::Stats) },
        async { client.fetch_videos().await.map_err(LoadError::Videos) },
    )?;
    Ok(DashboardData {
        brand_summaries,
        videos,
    })
}

/// Owns the load-cycle state machine for one dashboard consumer.
pub struct Loader {
    client: DashboardClient,
    state: LoadState,
}

impl Loader {
    #[must_use]
    pub fn new(client: DashboardClient) -> Self {
        Self {
            client,
            state: LoadState::Idle,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Runs one load cycle and returns the resulting terminal state.
    ///
    /// Transitions to `Loading`, gathers both fetches, and settles on
    /// `Ready` or `Failed`. Calling this again starts a fresh cycle — a
    /// reload, not a cancellation of an in-flight one.
    pub async fn load(&mut self) -> &LoadState {
        self.state = LoadState::Loading;
        tracing::debug!("dashboard load cycle started");

        self.state = match load_dashboard(&self.client).await {
            Ok(data) => {
                tracing::info!(
                    brands = data.brand_summaries.len(),
                    videos = data.videos.len(),
                    "dashboard data ready"
                );
                LoadState::Ready(data)
            }
            Err(err) => {
                tracing::warn!(error = %err, "dashboard load failed");
                LoadState::Failed(err)
            }
        };
        &self.state
    }
}
