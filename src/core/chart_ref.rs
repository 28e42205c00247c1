use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_CHART_ID: AtomicU64 = AtomicU64::new(1);

/// Unique chart identity, written into every native context the engine builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartId(String);

impl ChartId {
    #[must_use]
    pub fn next() -> Self {
        let id = NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("chart-{id}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State a chart shares with the proxies it creates.
#[derive(Debug)]
pub struct ChartShared {
    pub id: ChartId,
    pub chart_type: String,
}

/// Non-owning chart reference held by option proxies and callback contexts.
///
/// It stays valid while the chart is alive; after that every proxy of the
/// chart resolves to its default value.
#[derive(Debug, Clone)]
pub struct ChartRef {
    id: ChartId,
    shared: Weak<ChartShared>,
}

impl ChartRef {
    #[must_use]
    pub fn new(shared: &Rc<ChartShared>) -> Self {
        Self {
            id: shared.id.clone(),
            shared: Rc::downgrade(shared),
        }
    }

    /// A reference to no chart, used by contexts the engine builds without one.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            id: ChartId(String::new()),
            shared: Weak::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ChartId {
        &self.id
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.shared.strong_count() > 0
    }

    #[must_use]
    pub fn chart_type(&self) -> Option<String> {
        self.shared.upgrade().map(|shared| shared.chart_type.clone())
    }

    /// `true` when the chart is alive and `raw_id` names it.
    #[must_use]
    pub fn matches(&self, raw_id: Option<&str>) -> bool {
        self.is_alive() && raw_id == Some(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{ChartId, ChartRef, ChartShared};

    #[test]
    fn reference_dies_with_chart() {
        let shared = Rc::new(ChartShared {
            id: ChartId::next(),
            chart_type: "line".to_owned(),
        });
        let chart = ChartRef::new(&shared);
        let raw = shared.id.as_str().to_owned();
        assert!(chart.matches(Some(&raw)));
        drop(shared);
        assert!(!chart.matches(Some(&raw)));
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(ChartId::next(), ChartId::next());
    }
}
