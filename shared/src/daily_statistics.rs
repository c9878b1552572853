//! State of the daily statistics panel.
//!
//! The panel owns the fetched records and the selected date. Records are
//! replaced only through [`DailyStatisticsState::finish_fetch`], and the
//! selected date only through [`DailyStatisticsState::select_date`].

use chrono::NaiveDate;

use crate::date_format::ToCanonicalDate;
use crate::{DailyStatisticRecord, StatisticsFetchError};

/// Records whose canonical date equals the canonical form of `date`, in
/// their original order.
pub fn filter_by_date<'a, D>(records: &'a [DailyStatisticRecord], date: &D) -> Vec<&'a DailyStatisticRecord>
where
    D: ToCanonicalDate + ?Sized,
{
    let wanted = date.canonical_date();
    records
        .iter()
        .filter(|record| record.date.canonical_date() == wanted)
        .collect()
}

/// Identifies one fetch; only the most recent ticket may update the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What happened when a fetch result was handed to the state
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCompletion {
    Applied { record_count: usize },
    /// Records were kept as they were
    Failed(StatisticsFetchError),
    /// A newer fetch was started after this one; the result was dropped
    Stale { ticket: FetchTicket, current: FetchTicket },
}

/// What the panel should show
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView<'a> {
    Loading,
    Loaded(Vec<&'a DailyStatisticRecord>),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyStatisticsState {
    records: Vec<DailyStatisticRecord>,
    selected_date: NaiveDate,
    loading: bool,
    generation: u64,
}

impl DailyStatisticsState {
    /// Starts out loading, with `today` selected
    pub fn new(today: NaiveDate) -> Self {
        Self {
            records: Vec::new(),
            selected_date: today,
            loading: true,
            generation: 0,
        }
    }

    pub fn records(&self) -> &[DailyStatisticRecord] {
        &self.records
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Enter the loading state and issue a ticket for the new fetch.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    /// Go back to loading without starting a fetch, e.g. after the user logs
    /// out. Any fetch still in flight becomes stale.
    pub fn reset_loading(&mut self) {
        self.generation += 1;
        self.loading = true;
    }

    /// Hand the result of a fetch back to the state.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<DailyStatisticRecord>, StatisticsFetchError>,
    ) -> FetchCompletion {
        let current = FetchTicket(self.generation);
        if ticket != current {
            return FetchCompletion::Stale { ticket, current };
        }

        self.loading = false;
        match result {
            Ok(records) => {
                let record_count = records.len();
                self.records = records;
                FetchCompletion::Applied { record_count }
            }
            Err(error) => FetchCompletion::Failed(error),
        }
    }

    /// Records for the selected date
    pub fn filtered(&self) -> Vec<&DailyStatisticRecord> {
        filter_by_date(&self.records, &self.selected_date)
    }

    pub fn view(&self) -> PanelView<'_> {
        if self.loading {
            return PanelView::Loading;
        }

        let filtered = self.filtered();
        if filtered.is_empty() {
            PanelView::Empty
        } else {
            PanelView::Loaded(filtered)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(date: &str, identifier: &str) -> DailyStatisticRecord {
        DailyStatisticRecord {
            date: date.to_string(),
            amount: 5000.0,
            target_amount: 20000.0,
            identifier: identifier.to_string(),
            merchant_name: None,
            card_name: None,
            card_image_url: None,
        }
    }

    fn identifiers(records: &[&DailyStatisticRecord]) -> Vec<String> {
        records.iter().map(|r| r.identifier.clone()).collect()
    }

    #[test]
    fn test_filter_matches_compact_and_canonical_dates() {
        let records = vec![record("20240105", "a")];
        let filtered = filter_by_date(&records, &ymd(2024, 1, 5));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_filter_preserves_order_without_duplicates() {
        let records = vec![
            record("20240105", "a"),
            record("20240106", "b"),
            record("2024-01-05", "c"),
            record("2024/01/05", "d"),
            record("20240105", "e"),
        ];
        let filtered = filter_by_date(&records, &ymd(2024, 1, 5));
        assert_eq!(identifiers(&filtered), vec!["a", "c", "e"]);

        // String dates go through the same canonicalisation
        let by_text = filter_by_date(&records, "20240105");
        assert_eq!(identifiers(&by_text), vec!["a", "c", "e"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![record("20240105", "a"), record("20240106", "b")];
        let once: Vec<DailyStatisticRecord> = filter_by_date(&records, &ymd(2024, 1, 6))
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_by_date(&once, &ymd(2024, 1, 6));
        assert_eq!(identifiers(&twice), vec!["b"]);
    }

    #[test]
    fn test_starts_loading_with_today_selected() {
        let state = DailyStatisticsState::new(ymd(2024, 1, 5));
        assert!(state.is_loading());
        assert_eq!(state.selected_date(), ymd(2024, 1, 5));
        assert_eq!(state.view(), PanelView::Loading);
    }

    #[test]
    fn test_successful_fetch_loads_selected_day() {
        let mut state = DailyStatisticsState::new(ymd(2024, 1, 5));
        let ticket = state.begin_fetch();

        let completion = state.finish_fetch(ticket, Ok(vec![record("20240105", "a")]));
        assert_eq!(completion, FetchCompletion::Applied { record_count: 1 });
        assert!(!state.is_loading());

        match state.view() {
            PanelView::Loaded(records) => assert_eq!(identifiers(&records), vec!["a"]),
            other => panic!("expected loaded view, got {:?}", other),
        }
    }

    #[test]
    fn test_selecting_a_date_refilters_without_fetching() {
        let mut state = DailyStatisticsState::new(ymd(2024, 1, 5));
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Ok(vec![record("20240105", "a"), record("20240107", "b")]));

        state.select_date(ymd(2024, 1, 6));
        assert_eq!(state.view(), PanelView::Empty);
        assert!(!state.is_loading());

        state.select_date(ymd(2024, 1, 7));
        assert_eq!(identifiers(&state.filtered()), vec!["b"]);
        assert_eq!(state.records().len(), 2);
    }

    #[test]
    fn test_rejected_fetch_leaves_list_empty() {
        let mut state = DailyStatisticsState::new(ymd(2024, 1, 5));
        let ticket = state.begin_fetch();

        let error = StatisticsFetchError::Rejected("error".to_string());
        let completion = state.finish_fetch(ticket, Err(error.clone()));

        assert_eq!(completion, FetchCompletion::Failed(error));
        assert!(!state.is_loading());
        assert!(state.records().is_empty());
        assert_eq!(state.view(), PanelView::Empty);
    }

    #[test]
    fn test_failed_refetch_keeps_previous_records() {
        let mut state = DailyStatisticsState::new(ymd(2024, 1, 5));
        let first = state.begin_fetch();
        state.finish_fetch(first, Ok(vec![record("20240105", "a")]));

        let second = state.begin_fetch();
        assert_eq!(state.view(), PanelView::Loading);
        state.finish_fetch(second, Err(StatisticsFetchError::Network("offline".to_string())));

        assert_eq!(state.records().len(), 1);
        assert_eq!(identifiers(&state.filtered()), vec!["a"]);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut state = DailyStatisticsState::new(ymd(2024, 1, 5));
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert_ne!(first, second);
        assert!(second.generation() > first.generation());

        // The older request resolves after a newer one was started
        let completion = state.finish_fetch(first, Ok(vec![record("20240105", "old")]));
        assert_eq!(completion, FetchCompletion::Stale { ticket: first, current: second });
        assert!(state.is_loading());
        assert!(state.records().is_empty());

        state.finish_fetch(second, Ok(vec![record("20240105", "new")]));
        assert_eq!(identifiers(&state.filtered()), vec!["new"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_reset_loading_returns_loaded_panel_to_loading() {
        let mut state = DailyStatisticsState::new(ymd(2024, 1, 5));
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Ok(vec![record("20240105", "a")]));
        assert!(matches!(state.view(), PanelView::Loaded(_)));

        state.reset_loading();
        assert!(state.is_loading());
        assert_eq!(state.view(), PanelView::Loading);
    }

    #[test]
    fn test_reset_loading_drops_fetch_in_flight() {
        let mut state = DailyStatisticsState::new(ymd(2024, 1, 5));
        let ticket = state.begin_fetch();
        state.reset_loading();

        let completion = state.finish_fetch(ticket, Ok(vec![record("20240105", "late")]));
        assert!(matches!(completion, FetchCompletion::Stale { .. }));
        assert!(state.records().is_empty());
        assert_eq!(state.view(), PanelView::Loading);
    }
}
