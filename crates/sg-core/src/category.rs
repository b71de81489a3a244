//! Node categories derived from the leading character of a node name.

use core::fmt;

/// Role a node plays in stop synthesis and edge rules.
///
/// Computed once when a node enters a layout; nothing downstream looks at the
/// name prefix again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// `Z*`: span endpoints between which stops are generated.
    Anchor,
    /// `A*` through `L*`: only reachable through a vertically adjacent stop.
    Restricted,
    /// `O*`: never takes part in any edge.
    Origin,
    /// `S*`: synthetic stop points.
    Stop,
    /// Everything else.
    Ordinary,
}

impl Category {
    pub fn from_name(name: &str) -> Self {
        match name.chars().next() {
            Some('Z') => Category::Anchor,
            Some('A'..='L') => Category::Restricted,
            Some('O') => Category::Origin,
            Some('S') => Category::Stop,
            _ => Category::Ordinary,
        }
    }

    /// Eligible for proximity edges.
    pub fn links_by_proximity(self) -> bool {
        !matches!(self, Category::Origin | Category::Restricted)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Anchor => "anchor",
            Category::Restricted => "restricted",
            Category::Origin => "origin",
            Category::Stop => "stop",
            Category::Ordinary => "ordinary",
        }
    }

    pub const ALL: [Category; 5] = [
        Category::Anchor,
        Category::Restricted,
        Category::Origin,
        Category::Stop,
        Category::Ordinary,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn restricted_range_is_a_through_l(c in proptest::char::range('A', 'Z'), rest in "[0-9]{0,3}") {
            let name = format!("{c}{rest}");
            let cat = Category::from_name(&name);
            prop_assert_eq!(cat == Category::Restricted, ('A'..='L').contains(&c));
        }
    }
}
