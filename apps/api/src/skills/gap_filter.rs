//! Skill Gap Filter: reduces upstream "missing keyword" output to technical skills.

use crate::skills::classifier::is_technical_skill;

/// Maximum number of technical skills surfaced in a learning path.
pub const MAX_DISPLAYED_SKILLS: usize = 10;

/// Keeps only the candidates that classify as technical skills.
///
/// Input order is preserved and duplicates pass through untouched. An empty
/// result means "no technical gaps", not "not yet classified".
pub fn filter_technical_skills<S: AsRef<str>>(candidates: &[S]) -> Vec<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| is_technical_skill(candidate))
        .map(str::to_string)
        .collect()
}

/// Truncates a filtered list to the display cap. Excess entries are dropped, never reordered.
pub fn displayed_skills(filtered: &[String]) -> &[String] {
    &filtered[..filtered.len().min(MAX_DISPLAYED_SKILLS)]
}
