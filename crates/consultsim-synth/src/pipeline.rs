//! End-to-end passes: read entities, generate, replace the target table.

use std::path::Path;
use std::time::Instant;

use consultsim_core::config::{ProgressConfig, TitleHistoryConfig};
use consultsim_core::constants::{PROGRESS_TABLE, TITLE_HISTORY_TABLE};
use consultsim_core::errors::{StorageError, SynthError};
use consultsim_storage::queries::{entities, progress, title_history};
use consultsim_storage::schema::resolve_insert_shape;
use consultsim_storage::EntityStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ladder::TitleLadder;
use crate::progress::ProgressCurveGenerator;
use crate::summary::{PassKind, RunSummary};
use crate::title_history::{ChainParams, PromotionChainGenerator};

/// Open the store at `db_path` and regenerate title history with the
/// default window. `seed` overrides the configured seed.
pub fn populate_title_history(db_path: &Path, seed: Option<u64>) -> Result<RunSummary, SynthError> {
    let store = EntityStore::open(db_path)?;
    let config = TitleHistoryConfig {
        seed,
        ..TitleHistoryConfig::default()
    };
    run_title_history(&store, &config)
}

/// Open the store at `db_path` and regenerate monthly progress.
pub fn populate_progress_months(db_path: &Path) -> Result<RunSummary, SynthError> {
    let store = EntityStore::open(db_path)?;
    run_progress_months(&store, &ProgressConfig::default())
}

/// Regenerate `Consultant_Title_History` for every consultant.
///
/// No consultants is a successful no-op. A missing `Title` table falls back
/// to the synthetic ladder; any other missing table aborts before writing.
pub fn run_title_history(
    store: &EntityStore,
    config: &TitleHistoryConfig,
) -> Result<RunSummary, SynthError> {
    let started = Instant::now();
    let seed = config.effective_seed();
    let _span = tracing::info_span!("title_history", seed).entered();
    let conn = store.conn();

    let consultants = entities::consultant_ids(conn)?;
    if consultants.is_empty() {
        tracing::info!("no consultants found");
        return Ok(RunSummary::nothing_to_do(PassKind::TitleHistory));
    }

    let title_ids = match entities::title_ids(conn) {
        Ok(ids) => ids,
        Err(StorageError::TableMissing { table }) => {
            tracing::warn!(%table, "title table missing, using synthetic ladder");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };
    let ladder = TitleLadder::from_title_ids(&title_ids)?;
    let shape = resolve_insert_shape(conn, TITLE_HISTORY_TABLE)?;

    let generator = PromotionChainGenerator::new(ladder, ChainParams::from_config(config))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut summary = RunSummary::inserted(PassKind::TitleHistory, consultants.len());
    summary.seed = Some(seed);
    summary.ladder_synthetic = generator.ladder().is_synthetic();

    let mut records = Vec::with_capacity(consultants.len() * 2);
    for consultant_id in &consultants {
        let chain = generator.generate(&mut rng, consultant_id);
        tracing::debug!(%consultant_id, records = chain.len(), "generated chain");
        summary.record_entity(chain.len());
        records.extend(chain);
    }

    summary.records_inserted = title_history::replace_all(conn, shape, &records)?;
    summary.duration_ms = started.elapsed().as_millis() as u64;
    tracing::info!(
        records = summary.records_inserted,
        consultants = summary.entities,
        duration_ms = summary.duration_ms,
        "title history generated"
    );
    Ok(summary)
}

/// Regenerate `Deliverable_Progress_Month` for every mapped deliverable.
///
/// Deliverables with missing or unparseable dates are skipped and listed in
/// the summary.
pub fn run_progress_months(
    store: &EntityStore,
    config: &ProgressConfig,
) -> Result<RunSummary, SynthError> {
    let started = Instant::now();
    let _span = tracing::info_span!("progress_months").entered();
    let conn = store.conn();

    let shape = resolve_insert_shape(conn, PROGRESS_TABLE)?;
    let ranges = entities::deliverable_ranges(conn)?;
    if ranges.is_empty() {
        tracing::info!("no deliverables with consultant mappings");
        return Ok(RunSummary::nothing_to_do(PassKind::Progress));
    }

    let generator = ProgressCurveGenerator::from_config(config);
    let mut summary = RunSummary::inserted(PassKind::Progress, ranges.len());
    let mut records = Vec::new();

    for range in &ranges {
        match generator.generate(range) {
            Ok(curve) => {
                tracing::debug!(
                    deliverable_id = %range.deliverable_id,
                    months = curve.len(),
                    "generated progress curve"
                );
                summary.record_entity(curve.len());
                records.extend(curve);
            }
            Err(skip) => {
                tracing::warn!(%skip, "skipping deliverable");
                summary.skipped.push(skip);
            }
        }
    }

    summary.records_inserted = progress::replace_all(conn, shape, &records)?;
    summary.duration_ms = started.elapsed().as_millis() as u64;
    tracing::info!(
        records = summary.records_inserted,
        deliverables = summary.entities,
        skipped = summary.skipped.len(),
        duration_ms = summary.duration_ms,
        "progress months generated"
    );
    Ok(summary)
}

/// Integer result: records inserted, 0 when there was nothing to do, -1 on
/// any fatal error.
pub fn status_code(result: &Result<RunSummary, SynthError>) -> i64 {
    match result {
        Ok(summary) => summary.records_inserted as i64,
        Err(_) => -1,
    }
}
