#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::xmldoc::XmlDoc;
use crate::xmlvalue::Value;

/// Counts gathered over the tree under the root.
///
/// Every node is counted in `elements`, whatever its kind; `unknown` counts
/// the unrecognized constructs among them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stat {
    pub attributes: usize,
    pub elements: usize,
    pub unknown: usize,
}

impl XmlDoc {
    /// Walk the tree under the root, parents first, and count what is in it.
    ///
    /// ```rust
    /// use xmllex::{Stat, XmlDoc};
    ///
    /// let doc = XmlDoc::parse("<a x='1' y='2'><b z='3'/>text<!x></a>");
    /// assert_eq!(
    ///     doc.stat(),
    ///     Stat { attributes: 3, elements: 4, unknown: 1 }
    /// );
    /// ```
    pub fn stat(&self) -> Stat {
        let mut stat = Stat::default();
        let Some(root) = self.root else {
            return stat;
        };
        for node in self.descendants(root) {
            stat.elements += 1;
            match self.value(node) {
                Value::Element(element) | Value::EmptyElement(element) => {
                    stat.attributes += element.attributes().len();
                }
                Value::Unknown(_) => stat.unknown += 1,
                _ => {}
            }
        }
        stat
    }
}
