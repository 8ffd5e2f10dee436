//! # Packing Report
//!
//! The JSON written to stdout: the packing summary, plus an optional fit
//! table listing every container each item fits, tightest first.

use cartpack_core::fit::rank_containers;
use cartpack_core::{Container, Item, PackingSummary};
use serde::Serialize;

use crate::error::CliResult;

/// One catalog container that fits an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFit {
    pub catalog_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fit_items: f64,
}

/// Fitting containers for one input item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFits {
    pub item_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub fits: Vec<RankedFit>,
}

/// Everything printed for one run.
#[derive(Debug, Clone, Serialize)]
pub struct PackingReport<'a> {
    pub summary: &'a PackingSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_table: Option<Vec<ItemFits>>,
}

/// Builds the report, ranking containers per item when requested.
pub fn build_report<'a>(
    items: &[Item],
    catalog: &[Container],
    summary: &'a PackingSummary,
    include_fit_table: bool,
) -> PackingReport<'a> {
    let fit_table = include_fit_table.then(|| {
        items
            .iter()
            .enumerate()
            .map(|(item_index, item)| ItemFits {
                item_index,
                sku: item.sku.clone(),
                fits: rank_containers(item, catalog)
                    .into_iter()
                    .map(|fit| RankedFit {
                        catalog_index: fit.index,
                        name: fit.container.name.clone(),
                        fit_items: fit.fit_items,
                    })
                    .collect(),
            })
            .collect()
    });

    PackingReport { summary, fit_table }
}

/// Serializes the report as compact or pretty JSON.
pub fn render(report: &PackingReport<'_>, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

// =============================================================================
// Unit Tests
// =============================================================================
