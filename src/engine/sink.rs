use crate::stats::TextStatisticsReport;

/// Receiver for reports published by the engine
///
/// Called once per publication, so a cycle with token counting enabled
/// delivers up to three reports: basic counts, tokens pending, final tokens.
/// Calls happen after the report slot is updated and unlocked, one at a
/// time and in publication order, so a sink may read the engine through a
/// `ReportReader`. A panic in the sink is logged and swallowed.
pub trait ReportSink: Send + Sync {
    fn on_report_updated(&self, report: &TextStatisticsReport);
}

impl<F> ReportSink for F
where
    F: Fn(&TextStatisticsReport) + Send + Sync,
{
    fn on_report_updated(&self, report: &TextStatisticsReport) {
        self(report)
    }
}
