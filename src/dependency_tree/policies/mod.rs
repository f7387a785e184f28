mod orphan_policy;

pub use orphan_policy::OrphanPolicy;
