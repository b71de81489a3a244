//! Incremental layout builder.

use sg_core::{NodeId, Point2, SgResult, ensure_finite_point};
use tracing::debug;

use crate::layout::Layout;
use crate::validate;

/// Builder for constructing a layout point by point.
///
/// Use `add_point` for each input record, then call `build()` to validate and
/// obtain the `Layout`. A repeated name overwrites the earlier coordinate.
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    layout: Layout,
    overwritten: usize,
}

impl LayoutBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point and return its ID.
    pub fn add_point(&mut self, name: impl Into<String>, pos: Point2) -> NodeId {
        let name = name.into();
        let (id, prev) = self.layout.upsert(name.clone(), pos);
        if let Some(prev) = prev {
            self.overwritten += 1;
            debug!(%name, ?prev, new = ?pos, "duplicate point name, keeping last coordinate");
        }
        id
    }

    /// Number of records that replaced an earlier record with the same name.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }

    /// Validate and return the layout.
    pub fn build(self) -> SgResult<Layout> {
        for node in self.layout.nodes() {
            ensure_finite_point(node.pos, &node.name)?;
        }
        validate::validate_layout(&self.layout)?;
        Ok(self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::{Real, SgError};

    #[test]
    fn builder_basic() {
        let mut builder = LayoutBuilder::new();
        let z1 = builder.add_point("Z1", Point2::new(0.0, 0.0));
        let z2 = builder.add_point("Z2", Point2::new(0.0, 3.0));

        assert_eq!(z1.index(), 0);
        assert_eq!(z2.index(), 1);

        let layout = builder.build().unwrap();
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn builder_last_write_wins() {
        let mut builder = LayoutBuilder::new();
        let first = builder.add_point("P1", Point2::new(0.0, 0.0));
        let again = builder.add_point("P1", Point2::new(4.0, 4.0));

        assert_eq!(first, again);
        assert_eq!(builder.overwritten(), 1);

        let layout = builder.build().unwrap();
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.position("P1"), Some(Point2::new(4.0, 4.0)));
    }

    #[test]
    fn builder_rejects_non_finite() {
        let mut builder = LayoutBuilder::new();
        builder.add_point("P1", Point2::new(Real::NAN, 0.0));
        let err = builder.build().unwrap_err();
        assert!(matches!(err, SgError::NonFinite { .. }));
    }
}
