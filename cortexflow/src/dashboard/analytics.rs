//! Analytics panel view model.
//!
//! Pure presentation: a placeholder chart region with a fixed sequence of
//! year markers along the bottom edge. The markers are compiled-in
//! constants, not computed from any input.

use super::ImageRef;

/// Year markers rendered under the chart, in display order.
pub const YEAR_MARKERS: [u16; 5] = [2014, 2016, 2018, 2020, 2022];

/// The analytics panel: title, chart placeholder, and year axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsModel {
    pub chart: ImageRef,
}

impl AnalyticsModel {
    pub fn title(&self) -> &'static str {
        "Analytics"
    }

    /// The year markers in their fixed order.
    pub fn year_markers(&self) -> &'static [u16] {
        &YEAR_MARKERS
    }
}

impl Default for AnalyticsModel {
    fn default() -> Self {
        Self {
            chart: ImageRef::new(621, 378),
        }
    }
}
