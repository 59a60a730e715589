/// Columns per nesting level.
pub const NEST_UNIT: usize = 4;

/// Converts a raw whitespace prefix into a nesting depth.
///
/// Prefixes up to one unit long map to `minimum`; longer ones round up to the
/// next whole unit, so irregular tab/space mixes still land on a level.
pub fn depth_of(raw_prefix: &str, minimum: usize) -> usize {
    let n = raw_prefix.chars().count();
    if n <= NEST_UNIT {
        minimum
    } else {
        n.div_ceil(NEST_UNIT)
    }
}
