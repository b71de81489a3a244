//! Record -> layout conversion.

use sg_graph::{Layout, LayoutBuilder};
use tracing::debug;

use crate::coords::parse_coordinates;
use crate::records::PointRecord;
use crate::{SourceError, SourceResult};

/// Build a layout from upstream records.
///
/// Fails on the first record whose coordinates do not parse. Repeated names
/// keep the last record's coordinates.
pub fn build_layout(records: &[PointRecord]) -> SourceResult<Layout> {
    let mut builder = LayoutBuilder::new();
    for record in records {
        let pos = parse_coordinates(&record.coordinates)
            .map_err(|e| SourceError::data_format(record.points.clone(), e.to_string()))?;
        builder.add_point(record.points.clone(), pos);
    }

    if builder.overwritten() > 0 {
        debug!(
            duplicates = builder.overwritten(),
            "records with repeated names were merged"
        );
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::{Category, Point2};

    #[test]
    fn builds_layout_in_record_order() {
        let records = vec![
            PointRecord::new("Z1", "(0.0, 0.0)"),
            PointRecord::new("A1", "(1.0, 2.0)"),
        ];
        let layout = build_layout(&records).unwrap();

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.nodes()[1].name, "A1");
        assert_eq!(layout.nodes()[1].category, Category::Restricted);
        assert_eq!(layout.position("A1"), Some(Point2::new(1.0, 2.0)));
    }

    #[test]
    fn duplicate_names_keep_last() {
        let records = vec![
            PointRecord::new("P1", "(0, 0)"),
            PointRecord::new("P2", "(1, 1)"),
            PointRecord::new("P1", "(5, 5)"),
        ];
        let layout = build_layout(&records).unwrap();

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.nodes()[0].name, "P1");
        assert_eq!(layout.position("P1"), Some(Point2::new(5.0, 5.0)));
    }

    #[test]
    fn malformed_coordinates_name_the_record() {
        let records = vec![
            PointRecord::new("Z1", "(0, 0)"),
            PointRecord::new("Z2", "(0; 3)"),
        ];
        match build_layout(&records).unwrap_err() {
            SourceError::DataFormat { record, .. } => assert_eq!(record, "Z2"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
