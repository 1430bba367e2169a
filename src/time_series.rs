/// One WPM sample, taken `t` seconds into the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    pub t: f64,
    pub wpm: f64,
}

impl TimeSeriesPoint {
    pub fn new(t: f64, wpm: f64) -> Self {
        Self { t, wpm }
    }
}

/// WPM samples accumulated once per active tick, for results graphs.
///
/// Derived data only: the series is written from the same pure metrics path
/// the snapshot uses and never feeds back into metric computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WpmSeries {
    points: Vec<TimeSeriesPoint>,
}

impl WpmSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, t: f64, wpm: f64) {
        self.points.push(TimeSeriesPoint::new(t, wpm));
    }

    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
