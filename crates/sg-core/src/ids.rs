use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for a node in a layout.
///
/// The value is the node's insertion slot, so IDs double as indices into the
/// layout's node vector. `NonZero` storage keeps `Option<NodeId>` the same size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Create an ID from a 0-based slot by storing slot+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Recover the 0-based slot.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Slot as a `usize`, for indexing node storage.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = NodeId::from_index(i);
            assert_eq!(id.index(), i);
            assert_eq!(id.slot(), i as usize);
        }
    }

    #[test]
    fn option_id_is_small() {
        assert_eq!(
            core::mem::size_of::<NodeId>(),
            core::mem::size_of::<Option<NodeId>>()
        );
    }

    #[test]
    fn ids_order_by_slot() {
        assert!(NodeId::from_index(3) < NodeId::from_index(7));
        assert_eq!(format!("{}", NodeId::from_index(5)), "#5");
    }
}
