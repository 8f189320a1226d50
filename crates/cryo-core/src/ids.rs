use core::fmt;
use core::num::NonZeroU32;

/// Compact arena index for nodes, edges and materials.
///
/// Stored as `NonZeroU32` (index + 1) so `Option<Id>` costs nothing extra and
/// a zeroed allocation can never masquerade as a valid id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Id for a 0-based arena index. Saturates at `u32::MAX`, far beyond any
    /// realistic arena size.
    pub const fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// The 0-based arena index.
    pub const fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

pub type NodeId = Id;
pub type EdgeId = Id;
pub type MaterialId = Id;
