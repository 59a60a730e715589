/// Emphasis delimiters. Each pattern has one capture group per alternative
/// (`*` form first, `_` form second).
///
/// The inner `.*` is greedy, so `**a** and **b**` is one bold run; passes run
/// longest delimiter first so `***x***` never decays into `**` plus `*`.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD_ITALICS_PATTERN: &'static str = r"\*\*\*(.*)\*\*\*|___(.*)___";
    pub const BOLD_PATTERN: &'static str = r"\*\*(.*)\*\*|__(.*)__";
    pub const ITALICS_PATTERN: &'static str = r"\*(.*)\*|_(.*)_";
}
