//! Distance units.

/// Route distance in kilometres.
///
/// "Unreachable" is represented as `Option<Distance>::None` throughout the
/// workspace rather than a maximum-integer sentinel, so a broken path can
/// never be confused with a genuinely long one and sums cannot overflow into
/// plausible values.  Additions over `Distance` use `saturating_add`.
pub type Distance = u32;
