//! Name resolution: free text fragment -> canonical catalog key.

use crate::catalog;

/// Resolve an arbitrary text fragment to a canonical name.
///
/// Strict precedence: exact match, then canonical-name-inside-fragment
/// (first hit in catalog declaration order - deliberately no
/// longest-match ranking), then alias containment (case-insensitive).
/// None means the caller applies its contextual fallback.
pub fn resolve(fragment: &str) -> Option<&'static str> {
    let idx = catalog::index();
    let trimmed = fragment.trim();

    if let Some(name) = idx.canonical_names().iter().find(|n| **n == trimmed) {
        return Some(*name);
    }

    if let Some(name) = idx
        .canonical_names()
        .iter()
        .find(|n| fragment.contains(**n))
    {
        return Some(*name);
    }

    let lower = fragment.to_lowercase();
    for (alias, canonical) in catalog::ALIASES {
        if lower.contains(alias) {
            return Some(*canonical);
        }
    }

    None
}

/// Target selection for the direct guide endpoints.
///
/// Looser than [`resolve`]: after an exact miss it also accepts a partial
/// name (the fragment contained inside a canonical name), and finally
/// falls through to the literal input as a best-effort key so synthesis
/// always has something to render against generic defaults.
pub fn lookup_guide_target(name: &str) -> String {
    let idx = catalog::index();
    let trimmed = name.trim();

    if let Some(hit) = idx.guide_names().iter().find(|n| **n == trimmed) {
        return hit.to_string();
    }
    if let Some(hit) = idx.guide_names().iter().find(|n| n.contains(trimmed)) {
        return hit.to_string();
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins_over_substring() {
        // "너구리" is both an exact canonical name and a substring of
        // "얼큰 너구리" (which is declared earlier).
        assert_eq!(resolve("너구리"), Some("너구리"));
    }

    #[test]
    fn substring_ties_break_by_declaration_order() {
        assert_eq!(resolve("얼큰 너구리 하나 끓여줘"), Some("얼큰 너구리"));
    }

    #[test]
    fn name_inside_conversational_phrasing() {
        assert_eq!(resolve("오늘은 신라면이 땡기네"), Some("신라면"));
    }

    #[test]
    fn alias_is_case_insensitive_containment() {
        assert_eq!(resolve("I could eat some Buldak tonight"), Some("불닭볶음면"));
        assert_eq!(resolve("SHIN RAMYUN please"), Some("신라면"));
    }

    #[test]
    fn exact_and_substring_outrank_alias() {
        // "carbo buldak" alias would hit 까르보불닭, but the canonical
        // 불닭볶음면 appears verbatim and is checked first.
        assert_eq!(resolve("carbo buldak 말고 불닭볶음면"), Some("불닭볶음면"));
    }

    #[test]
    fn miss_is_none() {
        assert_eq!(resolve("zzz-unknown-product"), None);
    }

    #[test]
    fn guide_target_accepts_partial_name() {
        assert_eq!(lookup_guide_target("불닭"), "불닭볶음면");
        assert_eq!(lookup_guide_target("신라면"), "신라면");
    }

    #[test]
    fn guide_target_falls_back_to_literal() {
        assert_eq!(lookup_guide_target("zzz-unknown-product"), "zzz-unknown-product");
    }
}
