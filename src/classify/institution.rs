use crate::classify::text::normalize;
use crate::registry::{ALIAS_INDEX, FALLBACK_INDEX};

/// Map a raw institution name to a program id.
///
/// Two ordered passes over the normalized name: literal alias containment
/// first, then topical fallback patterns with degree-hint disambiguation.
/// Total over every input; `None` means unmapped, which is a valid outcome.
pub fn find_program_id(inst_name: &str) -> Option<u32> {
    let name = normalize(inst_name);
    if name.is_empty() {
        return None;
    }

    for (alias, id) in ALIAS_INDEX.iter() {
        if name.contains(alias.as_str()) {
            return Some(*id);
        }
    }

    for (pattern, candidates) in FALLBACK_INDEX.iter() {
        if name.contains(pattern.as_str()) {
            return pick_candidate(candidates, &name);
        }
    }

    None
}

/// Candidate lists are ordered [default, D4, D3]. A degree hint in the name
/// selects the matching slot; a hint with no slot falls back to the default.
/// Names without a hint take the default, a known precision tradeoff.
fn pick_candidate(candidates: &[u32], name: &str) -> Option<u32> {
    let slot = if name.contains("d3") {
        2
    } else if name.contains("d4") {
        1
    } else {
        0
    };
    candidates.get(slot).or(candidates.first()).copied()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PROGRAMS;

    #[test]
    fn every_alias_maps_to_its_program() {
        for p in PROGRAMS {
            for alias in p.aliases {
                assert_eq!(
                    find_program_id(alias),
                    Some(p.id),
                    "alias {:?} did not map to {}",
                    alias,
                    p.id
                );
            }
        }
    }

    #[test]
    fn alias_match_is_containment() {
        assert_eq!(find_program_id("UPT PERPUSTAKAAN S1-MANAJEMEN"), Some(2));
        assert_eq!(find_program_id("manajemen   s1"), Some(2));
    }

    #[test]
    fn degree_hint_selects_candidate() {
        assert_eq!(find_program_id("PRODI AKUNTANSI JENJANG D3"), Some(6));
        assert_eq!(find_program_id("PRODI AKUNTANSI JENJANG D4"), Some(5));
        assert_eq!(find_program_id("PRODI AKUNTANSI"), Some(4));
    }

    #[test]
    fn degree_hint_out_of_range_takes_default() {
        // "PERPAJAKAN" has a single candidate; a D3 hint must not panic
        // ("AKUNTANSI" is absent so the single-candidate rule fires).
        assert_eq!(find_program_id("PRODI PERPAJAKAN D3"), Some(5));
    }

    #[test]
    fn two_candidate_rule_positional_lookup() {
        // [7, 12]: D4 selects slot 1, D3 falls back to slot 0.
        assert_eq!(find_program_id("PRODI PENDIDIKAN BAHASA INGGRIS D4"), Some(12));
        assert_eq!(find_program_id("PRODI PENDIDIKAN BAHASA INGGRIS D3"), Some(7));
        assert_eq!(find_program_id("PRODI PENDIDIKAN BAHASA INGGRIS"), Some(7));
    }

    #[test]
    fn unmapped_inputs() {
        assert_eq!(find_program_id("XYZ123"), None);
        assert_eq!(find_program_id(""), None);
        assert_eq!(find_program_id("   "), None);
        assert_eq!(find_program_id("PERPUSTAKAAN UMUM"), None);
    }

    #[test]
    fn fallback_reached_only_after_alias_pass() {
        // Contains both the id 6 alias and the generic AKUNTANSI pattern;
        // the alias pass wins.
        assert_eq!(find_program_id("AKUNTANSI D3 KAMPUS KOTA"), Some(6));
    }
}
