//! Serde mapping for the holders quoteSummary modules.

use serde::Deserialize;

use crate::core::wire::{RawDate, RawNum};

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct V10Result {
    pub(crate) institution_ownership: Option<OwnershipNode>,
    pub(crate) major_holders_breakdown: Option<BreakdownNode>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct OwnershipNode {
    pub(crate) ownership_list: Option<Vec<OwnershipRowNode>>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct OwnershipRowNode {
    pub(crate) organization: Option<String>,
    pub(crate) report_date: Option<RawDate>,
    pub(crate) pct_held: Option<RawNum<f64>>,
    pub(crate) position: Option<RawNum<u64>>,
    pub(crate) value: Option<RawNum<u64>>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct BreakdownNode {
    pub(crate) insiders_percent_held: Option<RawNum<f64>>,
    pub(crate) institutions_percent_held: Option<RawNum<f64>>,
    pub(crate) institutions_float_percent_held: Option<RawNum<f64>>,
    pub(crate) institutions_count: Option<RawNum<u64>>,
}
