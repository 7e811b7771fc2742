// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Orchestration of a single Auto-PTR run.
//!
//! A run is a strictly sequential procedure:
//!
//! 1. Fetch A records, then AAAA records, for the configured zone
//! 2. Plan: derive the reverse zone and PTR label for each record, skipping
//!    records with no address, an unrecognized type, or an unparsable
//!    address; collect the distinct reverse zones referenced
//! 3. Ensure each reverse zone exists, creating missing ones
//! 4. Create one PTR record per mapping, targeting the forward name
//! 5. Tally and report
//!
//! In dry-run mode steps 3 and 4 only announce intent; no create call is
//! issued. Transport failures abort the run via `?`; individual create
//! failures are counted and the run continues. Zones already created are
//! never rolled back.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::reverse::{reverse_name, ReverseName};
use crate::technitium::{DnsRecord, RecordKind, TechnitiumClient};

/// One planned PTR record: a forward record joined with its derived reverse
/// name. Ephemeral; lives only for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PtrMapping {
    /// Forward record name; becomes the PTR target
    pub forward_name: String,
    /// The record's address, as it appeared on the wire
    pub address: String,
    /// Forward record type the mapping came from
    pub kind: RecordKind,
    /// Derived reverse zone and label
    pub reverse: ReverseName,
}

/// Output of the pure planning phase.
#[derive(Debug, Default)]
pub struct SyncPlan {
    /// PTR records to create, in input order
    pub mappings: Vec<PtrMapping>,
    /// Distinct reverse zones referenced, in name order
    pub reverse_zones: BTreeSet<String>,
    /// Records skipped (missing address, unknown type, unparsable address)
    pub skipped: u64,
}

/// Tally of a completed run.
#[derive(Debug, Default)]
pub struct SyncSummary {
    /// A records fetched from the forward zone
    pub a_records: u64,
    /// AAAA records fetched from the forward zone
    pub aaaa_records: u64,
    /// Records skipped during planning
    pub skipped: u64,
    /// Reverse zones that already existed
    pub zones_existing: u64,
    /// Reverse zones created (or announced, in dry-run mode)
    pub zones_created: u64,
    /// Reverse zone creations the server rejected
    pub zones_failed: u64,
    /// PTR records created (or announced, in dry-run mode)
    pub ptr_created: u64,
    /// PTR record creations the server rejected
    pub ptr_failed: u64,
    /// Whether this was a report-only run
    pub dry_run: bool,
}

impl SyncSummary {
    /// Log the end-of-run tally.
    pub fn log(&self) {
        info!("==================== Summary ====================");
        info!(
            a_records = self.a_records,
            aaaa_records = self.aaaa_records,
            skipped = self.skipped,
            "Forward records processed"
        );
        info!(
            existing = self.zones_existing,
            created = self.zones_created,
            failed = self.zones_failed,
            "Reverse zones"
        );
        info!(
            created = self.ptr_created,
            failed = self.ptr_failed,
            "PTR records"
        );
        if self.dry_run {
            info!("This was a DRY RUN - no changes were made");
        }
    }
}

/// Pure planning phase: derive reverse names and collect distinct reverse
/// zones from the fetched forward records.
///
/// Records with no address field or a type other than A/AAAA are skipped
/// silently; records whose address does not parse are skipped with a
/// warning. Never fails.
#[must_use]
pub fn plan(records: &[DnsRecord]) -> SyncPlan {
    let mut out = SyncPlan::default();

    for record in records {
        let kind = match record.record_type.as_str() {
            "A" => RecordKind::A,
            "AAAA" => RecordKind::Aaaa,
            _ => {
                out.skipped += 1;
                continue;
            }
        };

        let Some(address) = record.address() else {
            out.skipped += 1;
            continue;
        };

        let reverse = match reverse_name(address) {
            Ok(reverse) => reverse,
            Err(e) => {
                warn!(record = %record.name, error = %e, "Skipping record");
                out.skipped += 1;
                continue;
            }
        };

        out.reverse_zones.insert(reverse.zone.clone());
        out.mappings.push(PtrMapping {
            forward_name: record.name.clone(),
            address: address.to_string(),
            kind,
            reverse,
        });
    }

    out
}

/// Execute one Auto-PTR run against the configured zone.
///
/// Returns the run tally. A zero-record zone is a successful run that
/// performs no zone or record creation.
///
/// # Errors
///
/// Returns an error on any transport failure talking to the API; partial
/// progress (zones already created) is not rolled back.
pub async fn run(client: &TechnitiumClient, config: &Config) -> Result<SyncSummary> {
    info!(zone = %config.zone_name, "Fetching records from zone");

    let a_records = client
        .list_zone_records(&config.zone_name, Some(RecordKind::A))
        .await
        .context("failed to fetch A records")?;
    let aaaa_records = client
        .list_zone_records(&config.zone_name, Some(RecordKind::Aaaa))
        .await
        .context("failed to fetch AAAA records")?;

    let mut summary = SyncSummary {
        a_records: a_records.len() as u64,
        aaaa_records: aaaa_records.len() as u64,
        dry_run: config.dry_run,
        ..SyncSummary::default()
    };

    let mut all_records = a_records;
    all_records.extend(aaaa_records);

    if all_records.is_empty() {
        warn!(zone = %config.zone_name, "No A or AAAA records found");
        return Ok(summary);
    }

    info!(
        a_records = summary.a_records,
        aaaa_records = summary.aaaa_records,
        "Found forward records"
    );

    let plan = plan(&all_records);
    summary.skipped = plan.skipped;

    ensure_reverse_zones(client, config, &plan.reverse_zones, &mut summary).await?;
    create_ptr_records(client, config, &plan.mappings, &mut summary).await?;

    summary.log();
    Ok(summary)
}

/// Check each referenced reverse zone and create the missing ones.
async fn ensure_reverse_zones(
    client: &TechnitiumClient,
    config: &Config,
    reverse_zones: &BTreeSet<String>,
    summary: &mut SyncSummary,
) -> Result<()> {
    info!("Checking reverse zones");

    for zone in reverse_zones {
        if client
            .zone_exists(zone)
            .await
            .context("failed to check reverse zone existence")?
        {
            info!(zone = %zone, "Reverse zone exists");
            summary.zones_existing += 1;
        } else if config.dry_run {
            info!(zone = %zone, "[DRY RUN] Would create reverse zone");
            summary.zones_created += 1;
        } else {
            info!(zone = %zone, "Creating reverse zone");
            if client
                .create_zone(zone)
                .await
                .context("failed to create reverse zone")?
            {
                info!(zone = %zone, "Reverse zone created");
                summary.zones_created += 1;
            } else {
                summary.zones_failed += 1;
            }
        }
    }

    Ok(())
}

/// Create one PTR record per planned mapping.
async fn create_ptr_records(
    client: &TechnitiumClient,
    config: &Config,
    mappings: &[PtrMapping],
    summary: &mut SyncSummary,
) -> Result<()> {
    info!("Creating PTR records");

    for mapping in mappings {
        info!(
            forward = %mapping.forward_name,
            kind = mapping.kind.as_str(),
            address = %mapping.address,
            ptr = %mapping.reverse.fqdn(),
            "PTR mapping"
        );

        if config.dry_run {
            info!(ptr = %mapping.reverse.fqdn(), "[DRY RUN] Would create PTR record");
            summary.ptr_created += 1;
        } else if client
            .add_ptr_record(
                &mapping.reverse.zone,
                &mapping.reverse.label,
                &mapping.forward_name,
            )
            .await
            .context("failed to add PTR record")?
        {
            summary.ptr_created += 1;
        } else {
            summary.ptr_failed += 1;
        }
    }

    Ok(())
}
