//! Stop-point synthesis along axis-aligned anchor spans.
//!
//! For every pair of anchors that share an exact x (vertical span) or an
//! exact y (horizontal span) and lie more than `min_span` apart, the span is
//! cut into `floor(d)` equal intervals and a stop is placed on every interior
//! boundary that is not already occupied.
//!
//! Stops are staged while the anchor pairs are scanned and merged into the
//! layout afterwards. Occupancy checks see both the layout and the staged
//! stops, so a position shared by two spans only gets one stop.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sg_core::{NodeId, POSITION_TOLERANCE, Point2, Real, SgError, SgResult, ensure_positive};
use tracing::{debug, warn};

use crate::layout::Layout;

/// Thresholds for stop synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopConfig {
    /// Anchor pairs at or below this distance get no stops.
    pub min_span: Real,
    /// Per-axis distance under which a position counts as occupied.
    pub tolerance: Real,
    /// Upper bound on the intervals one span may be cut into.
    pub max_intervals: u64,
}

impl Default for StopConfig {
    fn default() -> Self {
        Self {
            min_span: 1.0,
            tolerance: POSITION_TOLERANCE,
            max_intervals: 100_000,
        }
    }
}

impl StopConfig {
    pub fn validate(&self) -> SgResult<()> {
        ensure_positive(self.min_span, "stops.min_span")?;
        ensure_positive(self.tolerance, "stops.tolerance")?;
        if self.max_intervals == 0 {
            return Err(SgError::InvalidArg {
                what: "stops.max_intervals must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Orientation of an anchor span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanAxis {
    /// Same x, varying y.
    Vertical,
    /// Same y, varying x.
    Horizontal,
}

/// Classify a span by exact coordinate equality; diagonal spans yield `None`.
pub fn span_axis(a: Point2, b: Point2) -> Option<SpanAxis> {
    if a.x == b.x {
        Some(SpanAxis::Vertical)
    } else if a.y == b.y {
        Some(SpanAxis::Horizontal)
    } else {
        None
    }
}

/// Name for a stop at `pos`: `S` followed by the truncated x and y.
///
/// Truncation is toward zero, so `(3.9, 7.1)` and `(3.0, 7.0)` share `S37`.
/// Coordinates beyond the `i64` range saturate, so such stops share a name
/// and collide like any other truncation clash.
pub fn stop_name(pos: Point2) -> String {
    format!("S{}{}", pos.x.trunc() as i64, pos.y.trunc() as i64)
}

/// Interior unit boundaries of the span from `a` to `b`.
///
/// Empty when the span is diagonal, not longer than `min_span`, or shorter
/// than two whole units. A span needing more than `cfg.max_intervals`
/// intervals is rejected.
pub fn span_positions(a: Point2, b: Point2, cfg: &StopConfig) -> SgResult<Vec<Point2>> {
    let d = a.distance(b);
    if d <= cfg.min_span {
        return Ok(Vec::new());
    }
    let Some(axis) = span_axis(a, b) else {
        return Ok(Vec::new());
    };

    let whole = d.floor();
    if !whole.is_finite() || whole > cfg.max_intervals as Real {
        return Err(SgError::InvalidArg {
            what: format!(
                "span from {a:?} to {b:?} needs {whole} intervals, limit is {}",
                cfg.max_intervals
            ),
        });
    }
    let intervals = whole as u64;
    let n = intervals as Real;
    Ok((1..intervals)
        .map(|k| {
            let k = k as Real;
            match axis {
                SpanAxis::Vertical => Point2::new(a.x, a.y + k * ((b.y - a.y) / n)),
                SpanAxis::Horizontal => Point2::new(a.x + k * ((b.x - a.x) / n), a.y),
            }
        })
        .collect())
}

/// Stops created during one synthesis run, in creation order.
#[derive(Debug, Default)]
struct Staging {
    entries: Vec<(String, Point2)>,
    by_name: HashMap<String, usize>,
}

impl Staging {
    fn any_near(&self, pos: Point2, tol: Real) -> bool {
        self.entries.iter().any(|(_, p)| p.near(pos, tol))
    }

    /// Stage a stop. A name that is already staged keeps its slot and takes the
    /// new position.
    fn stage(&mut self, name: String, pos: Point2) {
        if let Some(&i) = self.by_name.get(&name) {
            warn!(
                %name,
                previous = ?self.entries[i].1,
                new = ?pos,
                "stop name collision, keeping last position"
            );
            self.entries[i].1 = pos;
            return;
        }
        self.by_name.insert(name.clone(), self.entries.len());
        self.entries.push((name, pos));
    }
}

/// Generate stop points between anchor pairs and add them to `layout`.
///
/// Returns the IDs of the new stops in creation order: anchor pairs in layout
/// order, then position along the span. Existing nodes are never moved; a stop
/// whose name is already taken by an input node is dropped. The sequence
/// holds each stop name once, even when several positions truncate to it.
///
/// Fails without touching `layout` when a span is too long to cut.
pub fn synthesize_stops(layout: &mut Layout, cfg: &StopConfig) -> SgResult<Vec<NodeId>> {
    let anchors: Vec<Point2> = layout.anchors().map(|n| n.pos).collect();
    let mut staging = Staging::default();

    for (i, &a) in anchors.iter().enumerate() {
        for &b in &anchors[i + 1..] {
            for pos in span_positions(a, b, cfg)? {
                if layout.any_near(pos, cfg.tolerance) || staging.any_near(pos, cfg.tolerance) {
                    debug!(?pos, "position already occupied, no stop");
                    continue;
                }
                let name = stop_name(pos);
                if layout.contains(&name) {
                    warn!(%name, ?pos, "stop name taken by an input node, skipping");
                    continue;
                }
                staging.stage(name, pos);
            }
        }
    }

    Ok(staging
        .entries
        .into_iter()
        .map(|(name, pos)| layout.upsert(name, pos).0)
        .collect())
}
