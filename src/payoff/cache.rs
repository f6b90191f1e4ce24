//! Keyed cache of payoff results with explicit invalidation
//!
//! Entries are keyed by debt ID and hold the debt snapshot they were computed
//! from. A lookup only hits when the supplied debt equals that snapshot, so a
//! result is never served for terms it was not computed from.

use std::collections::HashMap;

use crate::amortization::AmortizationEngine;
use crate::debt::Debt;
use super::calculator::PayoffCalculationResult;

#[derive(Debug, Clone)]
struct CacheEntry {
    debt: Debt,
    result: PayoffCalculationResult,
}

/// Cache manager for many debts
#[derive(Debug, Default)]
pub struct PayoffCache {
    entries: HashMap<u32, CacheEntry>,

    /// Statistics
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub invalidations: u64,
}

impl PayoffCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for a debt ID, regardless of freshness
    pub fn get(&self, debt_id: u32) -> Option<&PayoffCalculationResult> {
        self.entries.get(&debt_id).map(|e| &e.result)
    }

    /// Return the cached result if the debt is unchanged, otherwise recompute and store
    pub fn get_or_compute(&mut self, engine: &AmortizationEngine, debt: &Debt) -> PayoffCalculationResult {
        if let Some(entry) = self.entries.get(&debt.debt_id) {
            if entry.debt == *debt {
                self.cache_hits += 1;
                return entry.result.clone();
            }
        }

        self.cache_misses += 1;
        self.store(engine, debt)
    }

    /// Write-through: a created or edited debt replaces its entry immediately
    pub fn upsert(&mut self, engine: &AmortizationEngine, debt: &Debt) -> PayoffCalculationResult {
        if self.entries.contains_key(&debt.debt_id) {
            self.invalidations += 1;
        }
        self.store(engine, debt)
    }

    /// Drop the entry for a deleted or externally modified debt
    pub fn invalidate(&mut self, debt_id: u32) -> bool {
        let removed = self.entries.remove(&debt_id).is_some();
        if removed {
            self.invalidations += 1;
        }
        removed
    }

    /// Clear all entries and statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cache_hits = 0;
        self.cache_misses = 0;
        self.invalidations = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }

    fn store(&mut self, engine: &AmortizationEngine, debt: &Debt) -> PayoffCalculationResult {
        let result = engine.payoff(debt);
        self.entries.insert(
            debt.debt_id,
            CacheEntry {
                debt: debt.clone(),
                result: result.clone(),
            },
        );
        result
    }
}
