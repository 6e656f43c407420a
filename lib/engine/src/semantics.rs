use std::fmt::{Display, Formatter};

/// The interpretation of query results under which containment is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContainmentSemantics {
    /// Results are sets. Duplicates are eliminated.
    #[default]
    Set,
    /// The sub-query eliminates duplicates, while the super-query may keep them.
    BagSet,
    /// Results are multisets. Not supported.
    Bag,
}

impl Display for ContainmentSemantics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainmentSemantics::Set => write!(f, "SET"),
            ContainmentSemantics::BagSet => write!(f, "BAG_SET"),
            ContainmentSemantics::Bag => write!(f, "BAG"),
        }
    }
}
