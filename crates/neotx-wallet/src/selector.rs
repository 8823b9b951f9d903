use neotx_core::Utxo;
use tracing::{debug, warn};

use crate::ordering::{ascending_by_value, Candidate};

/// Coin selection errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("Insufficient funds: have {available}, need {required}")]
    InsufficientFunds { available: f64, required: f64 },

    #[error("Invalid target value: {0}")]
    InvalidTarget(f64),
}

/// Outputs chosen to fund a transaction
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    /// Chosen outputs in ascending value order
    pub inputs: Vec<&'a Utxo>,
    /// Sum of the chosen values
    pub total: f64,
    /// Value that had to be reached
    pub target: f64,
    /// Positions of candidates skipped because their value did not parse
    pub unresolved: Vec<usize>,
}

impl Selection<'_> {
    /// Surplus to send back as change
    pub fn change(&self) -> f64 {
        self.total - self.target
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Smallest-first greedy coin selector.
///
/// Candidates are sorted by ascending value (ties keep input order) and
/// taken one by one until the running total reaches the target.
#[derive(Debug, Clone, Default)]
pub struct CoinSelector {
    asset: Option<String>,
}

impl CoinSelector {
    /// Selector considering every candidate
    pub fn new() -> Self {
        CoinSelector::default()
    }

    /// Selector that only considers outputs of `asset`.
    ///
    /// Asset ids match case-insensitively, with or without a `0x` prefix.
    pub fn for_asset(asset: impl Into<String>) -> Self {
        CoinSelector {
            asset: Some(asset.into()),
        }
    }

    pub fn asset(&self) -> Option<&str> {
        self.asset.as_deref()
    }

    fn accepts(&self, utxo: &Utxo) -> bool {
        match &self.asset {
            Some(asset) => normalize_asset(asset).eq_ignore_ascii_case(normalize_asset(utxo.asset())),
            None => true,
        }
    }

    /// Choose outputs whose total value is at least `target`.
    ///
    /// Outputs whose value does not parse are left out and reported in
    /// [`Selection::unresolved`]. Fails with
    /// [`SelectionError::InsufficientFunds`] when the usable outputs cannot
    /// cover the target; no partial selection is returned.
    ///
    /// Values are summed as `f64`, so the running total can land one unit
    /// in the last place below the exact decimal sum: outputs of `0.1` and
    /// `0.7` total `0.7999999999999999` and do not cover a target of `0.8`.
    /// Callers that need exact amounts should pad the target or work in
    /// integer base units.
    pub fn select<'a>(&self, candidates: &'a [Utxo], target: f64) -> Result<Selection<'a>, SelectionError> {
        if !target.is_finite() || target < 0.0 {
            return Err(SelectionError::InvalidTarget(target));
        }

        let mut usable = Vec::with_capacity(candidates.len());
        let mut unresolved = Vec::new();

        for (index, utxo) in candidates.iter().enumerate() {
            if !self.accepts(utxo) {
                continue;
            }
            match utxo.value() {
                Ok(value) => usable.push(Candidate { index, value, utxo }),
                Err(e) => {
                    warn!(
                        "Skipping output {}:{} with unusable value: {}",
                        utxo.tx_id(),
                        utxo.index(),
                        e
                    );
                    unresolved.push(index);
                }
            }
        }

        let mut inputs = Vec::new();
        let mut total = 0.0;

        for candidate in ascending_by_value(usable) {
            if total >= target {
                break;
            }
            total += candidate.value;
            inputs.push(candidate.utxo);
        }

        if total < target {
            return Err(SelectionError::InsufficientFunds {
                available: total,
                required: target,
            });
        }

        debug!(
            "Selected {} of {} outputs: total {} for target {}",
            inputs.len(),
            candidates.len(),
            total,
            target
        );

        Ok(Selection {
            inputs,
            total,
            target,
            unresolved,
        })
    }
}

fn normalize_asset(asset: &str) -> &str {
    asset
        .strip_prefix("0x")
        .or_else(|| asset.strip_prefix("0X"))
        .unwrap_or(asset)
}
