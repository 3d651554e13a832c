//! Sequential batch processing of CAS numbers.
//!
//! Each CAS number is resolved, then (only if it resolved) its flash points
//! are extracted, and the result is assigned into the report before the next
//! CAS number starts. No state is carried between CAS numbers.

use crate::extractor::Extraction;
use crate::lookup::CompoundLookup;
use crate::report::FlashPointReport;
use crate::resolver::Resolution;
use crate::types::CasNumber;
use std::fmt;
use tracing::info;

/// Counters for one batch run.
///
/// Counts lookups, so a CAS number repeated in the input is counted each
/// time it is processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    pub resolved: usize,
    pub unresolvable: usize,
    pub with_flash_points: usize,
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} CAS numbers: {} resolved, {} unresolvable, {} with flash points",
            self.total, self.resolved, self.unresolvable, self.with_flash_points
        )
    }
}

/// Drives a [`CompoundLookup`] over a list of CAS numbers.
#[derive(Debug, Clone)]
pub struct BatchProcessor<L> {
    lookup: L,
}

impl<L: CompoundLookup> BatchProcessor<L> {
    pub const fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Build the report for `cas_numbers`. Every input appears as a key.
    pub async fn process(&self, cas_numbers: &[CasNumber]) -> FlashPointReport {
        self.process_with_stats(cas_numbers).await.0
    }

    pub async fn process_with_stats(
        &self,
        cas_numbers: &[CasNumber],
    ) -> (FlashPointReport, BatchStats) {
        let mut report = FlashPointReport::new();
        let mut stats = BatchStats::default();

        for cas in cas_numbers {
            stats.total += 1;

            let extraction = match self.lookup.resolve(cas).await {
                Resolution::Resolved(cid) => {
                    stats.resolved += 1;
                    self.lookup.extract(&cid).await
                }
                Resolution::Unresolvable => {
                    stats.unresolvable += 1;
                    Extraction::Empty
                }
            };

            if !extraction.is_empty() {
                stats.with_flash_points += 1;
            }
            report.insert(cas.clone(), extraction.into_values());
        }

        info!("Processed {}", stats);
        (report, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompoundId;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory lookup that records every call. A CAS number given several
    /// CIDs answers with the next one on each repeated call.
    #[derive(Default)]
    struct StubLookup {
        cids: HashMap<String, Vec<CompoundId>>,
        records: HashMap<String, Vec<String>>,
        resolve_calls: Mutex<Vec<String>>,
        extract_calls: Mutex<Vec<String>>,
    }

    impl StubLookup {
        fn with_cid(self, cas: &str, cid: u64) -> Self {
            self.with_cids(cas, &[cid])
        }

        fn with_cids(mut self, cas: &str, cids: &[u64]) -> Self {
            self.cids.insert(
                cas.to_string(),
                cids.iter().copied().map(CompoundId::Numeric).collect(),
            );
            self
        }

        fn with_record(mut self, cid: u64, values: &[&str]) -> Self {
            self.records.insert(
                cid.to_string(),
                values.iter().map(ToString::to_string).collect(),
            );
            self
        }

        fn resolve_calls(&self) -> Vec<String> {
            self.resolve_calls.lock().unwrap().clone()
        }

        fn extract_calls(&self) -> Vec<String> {
            self.extract_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompoundLookup for StubLookup {
        async fn resolve(&self, cas: &CasNumber) -> Resolution {
            let seen = {
                let mut calls = self.resolve_calls.lock().unwrap();
                let seen = calls.iter().filter(|call| *call == cas.as_str()).count();
                calls.push(cas.to_string());
                seen
            };

            self.cids
                .get(cas.as_str())
                .and_then(|cids| cids.get(seen).or_else(|| cids.last()))
                .cloned()
                .map_or(Resolution::Unresolvable, Resolution::Resolved)
        }

        async fn extract(&self, cid: &CompoundId) -> Extraction {
            self.extract_calls.lock().unwrap().push(cid.to_string());
            self.records
                .get(&cid.to_string())
                .cloned()
                .map_or(Extraction::Empty, Extraction::from)
        }
    }

    fn cas_list(raw: &[&str]) -> Vec<CasNumber> {
        raw.iter().filter_map(|cas| CasNumber::new(cas)).collect()
    }

    fn values<'a>(report: &'a FlashPointReport, cas: &CasNumber) -> &'a [String] {
        report.get(cas).unwrap()
    }

    #[tokio::test]
    async fn test_every_input_is_a_key_in_order() {
        let lookup = StubLookup::default()
            .with_cid("50-00-0", 712)
            .with_record(712, &["-16 °C"]);
        let processor = BatchProcessor::new(lookup);

        let input = cas_list(&["67-64-1", "50-00-0", "64-17-5"]);
        let report = processor.process(&input).await;

        let keys: Vec<&CasNumber> = report.cas_numbers().collect();
        assert_eq!(keys, input.iter().collect::<Vec<_>>());
        assert!(values(&report, &input[0]).is_empty());
        assert_eq!(values(&report, &input[1]), ["-16 °C"]);
        assert!(values(&report, &input[2]).is_empty());
    }

    #[tokio::test]
    async fn test_unresolvable_skips_extraction() {
        let processor = BatchProcessor::new(StubLookup::default());

        let input = cas_list(&["64-17-5"]);
        let report = processor.process(&input).await;

        assert!(values(&report, &input[0]).is_empty());
        assert_eq!(processor.lookup().resolve_calls(), ["64-17-5"]);
        assert!(processor.lookup().extract_calls().is_empty());
    }

    #[tokio::test]
    async fn test_resolved_without_flash_points() {
        let lookup = StubLookup::default().with_cid("7732-18-5", 962);
        let processor = BatchProcessor::new(lookup);

        let input = cas_list(&["7732-18-5"]);
        let (report, stats) = processor.process_with_stats(&input).await;

        assert!(values(&report, &input[0]).is_empty());
        assert_eq!(processor.lookup().extract_calls(), ["962"]);
        assert_eq!(
            stats,
            BatchStats {
                total: 1,
                resolved: 1,
                unresolvable: 0,
                with_flash_points: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_calls_are_sequential_per_cas() {
        let lookup = StubLookup::default()
            .with_cid("50-00-0", 712)
            .with_cid("67-64-1", 180)
            .with_record(712, &["-16 °C"])
            .with_record(180, &["-20 °C", "-4 °F"]);
        let processor = BatchProcessor::new(lookup);

        let input = cas_list(&["50-00-0", "64-17-5", "67-64-1"]);
        let (report, stats) = processor.process_with_stats(&input).await;

        assert_eq!(
            processor.lookup().resolve_calls(),
            ["50-00-0", "64-17-5", "67-64-1"]
        );
        assert_eq!(processor.lookup().extract_calls(), ["712", "180"]);
        assert_eq!(values(&report, &input[2]), ["-20 °C", "-4 °F"]);
        assert_eq!(stats.resolved, 2);
        assert_eq!(stats.unresolvable, 1);
        assert_eq!(stats.with_flash_points, 2);
        assert_eq!(
            stats.to_string(),
            "3 CAS numbers: 2 resolved, 1 unresolvable, 2 with flash points"
        );
    }

    #[tokio::test]
    async fn test_duplicate_cas_keeps_single_key() {
        let lookup = StubLookup::default()
            .with_cids("50-00-0", &[712, 713])
            .with_record(712, &["-16 °C"])
            .with_record(713, &["-19 °C (closed cup)"]);
        let processor = BatchProcessor::new(lookup);

        let input = cas_list(&["50-00-0", "64-17-5", "50-00-0"]);
        let report = processor.process(&input).await;

        let keys: Vec<&str> = report.cas_numbers().map(CasNumber::as_str).collect();
        assert_eq!(keys, ["50-00-0", "64-17-5"]);
        assert_eq!(values(&report, &input[0]), ["-19 °C (closed cup)"]);
        assert_eq!(
            processor.lookup().resolve_calls(),
            ["50-00-0", "64-17-5", "50-00-0"]
        );
        assert_eq!(processor.lookup().extract_calls(), ["712", "713"]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let processor = BatchProcessor::new(StubLookup::default());
        let (report, stats) = processor.process_with_stats(&[]).await;

        assert!(report.is_empty());
        assert_eq!(stats, BatchStats::default());
    }

    #[tokio::test]
    async fn test_repeat_runs_are_identical() {
        let lookup = StubLookup::default()
            .with_cid("50-00-0", 712)
            .with_record(712, &["-16 °C", "-16 °C"]);
        let processor = BatchProcessor::new(lookup);

        let input = cas_list(&["50-00-0", "64-17-5"]);
        let first = processor.process(&input).await;
        let second = processor.process(&input).await;

        assert_eq!(first, second);
        assert!(first.cas_numbers().eq(second.cas_numbers()));
    }
}
