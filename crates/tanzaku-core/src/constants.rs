/// Property constants shared across crates
///
/// Synthetic group tags follow the `item<N>` convention that vCard
/// clients use for grouped properties (e.g. "item1.EMAIL").
pub const GROUP_NAME_PREFIX: &str = "item";

/// ADR carries at most 6 caller-defined component slots.
pub const MAX_ADR_COMPONENTS: usize = 6;
