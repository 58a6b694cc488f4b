use std::collections::BTreeSet;

use crate::classify::text::{contains_any, has_any, normalize};
use crate::registry::DOMAINS;

// Broad-cue clusters applied only when no keyword domain matched. Evaluated
// top to bottom against the title; the last entry always fires.
struct Cluster {
    cues: &'static [&'static str],
    programs: &'static [u32],
}

const EDUCATION: Cluster = Cluster {
    cues: &["pendidikan", "pengajaran", "belajar", "mengajar"],
    programs: &[9, 10, 11, 12, 13],
};
const ENGINEERING: Cluster = Cluster {
    cues: &["teknik", "engineering", "teknologi"],
    programs: &[26, 27, 28, 29, 30, 31, 32],
};
const BUSINESS: Cluster = Cluster {
    cues: &["ekonomi", "bisnis", "manajemen", "pemasaran"],
    programs: &[2, 3, 4],
};
const DEFAULT: Cluster = Cluster {
    cues: &[],
    programs: &[26],
};

/// Multi-label classification of a bibliographic record.
///
/// Every domain whose keywords hit the normalized title or topic contributes
/// its program set. When nothing hits, exactly one fallback cluster fires on
/// the title alone, so the result is never empty. BTreeSet keeps the label
/// order stable across runs.
pub fn classify(title: &str, topic: &str) -> BTreeSet<u32> {
    let title_norm = normalize(title);

    let mut chosen = BTreeSet::new();
    for domain in DOMAINS {
        if contains_any(&title_norm, domain.keywords) || has_any(topic, domain.keywords) {
            chosen.extend(domain.programs.iter().copied());
        }
    }

    if chosen.is_empty() {
        let cluster = [EDUCATION, ENGINEERING, BUSINESS]
            .into_iter()
            .find(|c| contains_any(&title_norm, c.cues))
            .unwrap_or(DEFAULT);
        chosen.extend(cluster.programs.iter().copied());
    }

    chosen
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    fn ids(title: &str, topic: &str) -> Vec<u32> {
        classify(title, topic).into_iter().collect()
    }

    #[test]
    fn accounting_title_is_multi_label() {
        let set = classify("Analisis Akuntansi dan Pajak Daerah", "");
        assert!(set.is_superset(&BTreeSet::from([4, 5, 6])));
    }

    #[test]
    fn topic_alone_can_classify() {
        assert_eq!(ids("Laporan tahunan", "perpajakan"), vec![4, 5, 6]);
    }

    #[test]
    fn crossing_domains_unions_labels() {
        // "hukum bisnis" hits both the law domain and the management domain
        let set = classify("Hukum Bisnis untuk Manajemen", "");
        assert!(set.contains(&18));
        assert!(set.contains(&2));
    }

    #[test]
    fn education_cluster() {
        assert_eq!(ids("Metode belajar efektif", ""), vec![9, 10, 11, 12, 13]);
    }

    #[test]
    fn engineering_cluster() {
        // "teknologi tepat guna" matches no domain keyword, then the
        // engineering cue fires
        assert_eq!(
            ids("Teknologi tepat guna pedesaan", ""),
            vec![26, 27, 28, 29, 30, 31, 32]
        );
    }

    #[test]
    fn business_cluster() {
        assert_eq!(ids("Ekonomi syariah", ""), vec![2, 3, 4]);
    }

    #[test]
    fn default_cluster_for_unmatched_title() {
        assert_eq!(ids("Kumpulan puisi senja", ""), vec![26]);
    }

    #[test]
    fn never_empty_even_for_empty_input() {
        assert_eq!(ids("", ""), vec![26]);
    }

    #[test]
    fn cluster_cues_ignore_topic() {
        // Fallback inspects the title only; a cue in the topic still lands
        // on the default cluster
        assert_eq!(ids("Kumpulan puisi senja", "belajar cepat"), vec![26]);
    }

    #[test]
    fn all_labels_are_registered_programs() {
        let samples = [
            ("Analisis Akuntansi dan Pajak Daerah", ""),
            ("Metode belajar efektif", ""),
            ("Teknologi tepat guna pedesaan", ""),
            ("Ekonomi syariah", ""),
            ("", ""),
            ("Budidaya ikan nila di tambak", "perikanan"),
        ];
        for (title, topic) in samples {
            for id in classify(title, topic) {
                assert!(registry::find(id).is_some(), "unregistered id {}", id);
            }
        }
    }
}
