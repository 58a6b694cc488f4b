use std::fmt;
use std::sync::LazyLock;

use crate::classify::text::normalize;

/// Degree level of a study program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    S1,
    S2,
    D3,
    D4,
    Profesi,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::S1 => "S1",
            Level::S2 => "S2",
            Level::D3 => "D3",
            Level::D4 => "D4",
            Level::Profesi => "PROFESI",
        }
    }

    pub fn parse(s: &str) -> Option<Level> {
        match s.trim().to_uppercase().as_str() {
            "S1" => Some(Level::S1),
            "S2" => Some(Level::S2),
            "D3" => Some(Level::D3),
            "D4" => Some(Level::D4),
            "PROFESI" => Some(Level::Profesi),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One study program. `aliases` lists the literal institution-name variants
/// seen in member exports (word-order and hyphen forms), in priority order.
#[derive(Debug)]
pub struct Program {
    pub id: u32,
    pub level: Level,
    pub name: &'static str,
    pub description: &'static str,
    pub aliases: &'static [&'static str],
}

/// Keyword domain for catalog classification. A title or topic containing any
/// keyword unions `programs` into the record's label set.
#[derive(Debug)]
pub struct Domain {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub programs: &'static [u32],
}

/// Ordered topical fallback for institution matching. `candidates` holds the
/// default program first, then the D4 and D3 variants where they exist.
#[derive(Debug)]
pub struct FallbackRule {
    pub pattern: &'static str,
    pub candidates: &'static [u32],
}

pub static PROGRAMS: &[Program] = &[
    Program {
        id: 1,
        level: Level::S1,
        name: "S1 PARIWISATA",
        description: "Pariwisata, manajemen pariwisata, destinasi wisata, industri perhotelan, tour guide",
        aliases: &["S1 PARIWISATA", "PARIWISATA S1", "S1-ILMU PARIWISATA"],
    },
    Program {
        id: 2,
        level: Level::S1,
        name: "S1 MANAJEMEN",
        description: "Manajemen, strategi bisnis, pengelolaan organisasi, keuangan, pemasaran",
        aliases: &["S1 MANAJEMEN", "MANAJEMEN S1", "S1-MANAJEMEN"],
    },
    Program {
        id: 3,
        level: Level::S1,
        name: "S1 EKONOMI PEMBANGUNAN",
        description: "Ekonomi pembangunan, kebijakan ekonomi, analisis ekonomi, pembangunan sosial",
        aliases: &[
            "S1 EKONOMI PEMBANGUNAN",
            "EKONOMI PEMBANGUNAN S1",
            "S1-EKONOMI PEMBANGUNAN",
        ],
    },
    Program {
        id: 4,
        level: Level::S1,
        name: "S1 AKUNTANSI",
        description: "Akuntansi, laporan keuangan, audit, perpajakan",
        aliases: &["S1 AKUNTANSI", "AKUNTANSI S1", "S1-AKUNTANSI"],
    },
    Program {
        id: 5,
        level: Level::D4,
        name: "D4 AKUNTANSI PERPAJAKAN",
        description: "Akuntansi Perpajakan, perpajakan, audit pajak, akuntansi keuangan",
        aliases: &[
            "D4 AKUNTANSI PERPAJAKAN",
            "AKUNTANSI PERPAJAKAN D4",
            "D4-AKUNTANSI PERPAJAKAN",
        ],
    },
    Program {
        id: 6,
        level: Level::D3,
        name: "D3 AKUNTANSI",
        description: "Akuntansi, pengelolaan keuangan, pajak, audit",
        aliases: &["D3 AKUNTANSI", "AKUNTANSI D3", "D3-AKUNTANSI"],
    },
    Program {
        id: 7,
        level: Level::S2,
        name: "S2 PENDIDIKAN BAHASA INGGRIS",
        description: "Pendidikan Bahasa Inggris, pengajaran bahasa Inggris, metodologi",
        aliases: &[
            "S2 PENDIDIKAN BAHASA INGGRIS",
            "PENDIDIKAN BAHASA INGGRIS S2",
            "S2-PENDIDIKAN BAHASA INGGRIS",
        ],
    },
    Program {
        id: 8,
        level: Level::S2,
        name: "S2 PENDIDIKAN BAHASA INDONESIA",
        description: "Pendidikan Bahasa Indonesia, pengajaran bahasa Indonesia, kebudayaan",
        aliases: &[
            "S2 PENDIDIKAN BAHASA INDONESIA",
            "PENDIDIKAN BAHASA INDONESIA S2",
            "S2-PENDIDIKAN BAHASA INDONESIA",
        ],
    },
    Program {
        id: 9,
        level: Level::S1,
        name: "S1 PENDIDIKAN MATEMATIKA",
        description: "Pendidikan Matematika, pengajaran matematika, pendidikan dasar",
        aliases: &[
            "S1 PENDIDIKAN MATEMATIKA",
            "PENDIDIKAN MATEMATIKA S1",
            "S1-PENDIDIKAN MATEMATIKA",
        ],
    },
    Program {
        id: 10,
        level: Level::S1,
        name: "S1 PENDIDIKAN ILMU PENGETAHUAN ALAM",
        description: "Pendidikan Ilmu Pengetahuan Alam, pengajaran IPA, pengembangan sains",
        aliases: &[
            "S1 PENDIDIKAN ILMU PENGETAHUAN ALAM",
            "PENDIDIKAN IPA S1",
            "S1-PENDIDIKAN IPA",
            "S1 PENDIDIKAN IPA",
        ],
    },
    Program {
        id: 11,
        level: Level::S1,
        name: "S1 PENDIDIKAN BIOLOGI",
        description: "Pendidikan Biologi, pengajaran biologi, laboratorium biologi",
        aliases: &[
            "S1 PENDIDIKAN BIOLOGI",
            "PENDIDIKAN BIOLOGI S1",
            "S1-PENDIDIKAN BIOLOGI",
        ],
    },
    Program {
        id: 12,
        level: Level::S1,
        name: "S1 PENDIDIKAN BAHASA INGGRIS",
        description: "Pendidikan Bahasa Inggris, pengajaran bahasa Inggris",
        aliases: &[
            "S1 PENDIDIKAN BAHASA INGGRIS",
            "PENDIDIKAN BAHASA INGGRIS S1",
            "S1-PENDIDIKAN BAHASA INGGRIS",
        ],
    },
    Program {
        id: 13,
        level: Level::S1,
        name: "S1 PENDIDIKAN BAHASA DAN SASTRA INDONESIA",
        description: "Pendidikan Bahasa dan Sastra Indonesia, pengajaran bahasa dan sastra",
        aliases: &[
            "S1 PENDIDIKAN BAHASA DAN SASTRA INDONESIA",
            "PENDIDIKAN BAHASA INDONESIA S1",
            "S1-PENDIDIKAN BAHASA INDONESIA",
        ],
    },
    Program {
        id: 14,
        level: Level::Profesi,
        name: "PENDIDIKAN PROFESI GURU",
        description: "Pendidikan Profesi Guru, profesi guru, pendidikan tinggi",
        aliases: &["PENDIDIKAN PROFESI GURU", "PPG", "PROFESI GURU"],
    },
    Program {
        id: 15,
        level: Level::S2,
        name: "S2 ADMINISTRASI PUBLIK",
        description: "Administrasi Publik, kebijakan publik, manajemen pemerintahan",
        aliases: &[
            "S2 ADMINISTRASI PUBLIK",
            "ADMINISTRASI PUBLIK S2",
            "S2-ADMINISTRASI PUBLIK",
        ],
    },
    Program {
        id: 16,
        level: Level::S1,
        name: "S1 ILMU KOMUNIKASI",
        description: "Ilmu Komunikasi, komunikasi massa, media, jurnalistik",
        aliases: &["S1 ILMU KOMUNIKASI", "ILMU KOMUNIKASI S1", "S1-ILMU KOMUNIKASI"],
    },
    Program {
        id: 17,
        level: Level::S1,
        name: "S1 ILMU ADMINISTRASI NEGARA",
        description: "Ilmu Administrasi Negara, manajemen publik, kebijakan publik",
        aliases: &[
            "S1 ILMU ADMINISTRASI NEGARA",
            "ILMU ADMINISTRASI NEGARA S1",
            "S1-ILMU ADMINISTRASI NEGARA",
        ],
    },
    Program {
        id: 18,
        level: Level::S1,
        name: "S1 HUKUM",
        description: "Hukum, hukum perdata, hukum pidana",
        aliases: &["S1 HUKUM", "HUKUM S1", "S1-HUKUM"],
    },
    Program {
        id: 19,
        level: Level::S1,
        name: "S1 TEKNOLOGI PANGAN",
        description: "Teknologi Pangan, ilmu pangan, teknologi olahan pangan",
        aliases: &[
            "S1 TEKNOLOGI PANGAN",
            "TEKNOLOGI PANGAN S1",
            "S1-TEKNOLOGI PANGAN",
        ],
    },
    Program {
        id: 20,
        level: Level::S1,
        name: "S1 PETERNAKAN",
        description: "Peternakan, manajemen peternakan, kesehatan ternak",
        aliases: &["S1 PETERNAKAN", "PETERNAKAN S1", "S1-PETERNAKAN"],
    },
    Program {
        id: 21,
        level: Level::S1,
        name: "S1 GIZI",
        description: "Gizi, ilmu gizi, dietetik, kesehatan masyarakat",
        aliases: &["S1 GIZI", "GIZI S1", "S1-GIZI"],
    },
    Program {
        id: 22,
        level: Level::S1,
        name: "S1 AKUAKULTUR",
        description: "Akuakultur, budidaya perikanan, kelautan",
        aliases: &["S1 AKUAKULTUR", "AKUAKULTUR S1", "S1-AKUAKULTUR"],
    },
    Program {
        id: 23,
        level: Level::S1,
        name: "S1 AGROTEKNOLOGI",
        description: "Agroteknologi, pertanian, teknologi pertanian",
        aliases: &["S1 AGROTEKNOLOGI", "AGROTEKNOLOGI S1", "S1-AGROTEKNOLOGI"],
    },
    Program {
        id: 24,
        level: Level::S1,
        name: "S1 AGRIBISNIS",
        description: "Agribisnis, bisnis pertanian, pemasaran hasil pertanian",
        aliases: &["S1 AGRIBISNIS", "AGRIBISNIS S1", "S1-AGRIBISNIS"],
    },
    Program {
        id: 25,
        level: Level::D3,
        name: "D3 FARMASI",
        description: "Farmasi, ilmu farmasi, farmakologi",
        aliases: &["D3 FARMASI", "FARMASI D3", "D3-FARMASI"],
    },
    Program {
        id: 26,
        level: Level::S1,
        name: "S1 TEKNOLOGI INFORMASI",
        description: "Teknologi Informasi, sistem informasi, pengembangan perangkat lunak",
        aliases: &[
            "S1 TEKNOLOGI INFORMASI",
            "TEKNOLOGI INFORMASI S1",
            "S1-TEKNOLOGI INFORMASI",
            "S1 TEKNIK INFORMATIKA",
            "TEKNIK INFORMATIKA S1",
            "S1 SISTEM INFORMASI",
        ],
    },
    Program {
        id: 27,
        level: Level::S1,
        name: "S1 TEKNIK SIPIL",
        description: "Teknik Sipil, konstruksi, struktur bangunan, transportasi",
        aliases: &["S1 TEKNIK SIPIL", "TEKNIK SIPIL S1", "S1-TEKNIK SIPIL"],
    },
    Program {
        id: 28,
        level: Level::S1,
        name: "S1 TEKNIK MESIN",
        description: "Teknik Mesin, desain mesin, manufaktur, otomotif",
        aliases: &["S1 TEKNIK MESIN", "TEKNIK MESIN S1", "S1-TEKNIK MESIN"],
    },
    Program {
        id: 29,
        level: Level::S1,
        name: "S1 TEKNIK MEKATRONIKA",
        description: "Teknik Mekatronika, robotik, otomatisasi, teknologi mekanik",
        aliases: &[
            "S1 TEKNIK MEKATRONIKA",
            "TEKNIK MEKATRONIKA S1",
            "S1-TEKNIK MEKATRONIKA",
        ],
    },
    Program {
        id: 30,
        level: Level::S1,
        name: "S1 TEKNIK INDUSTRI",
        description: "Teknik Industri, manajemen produksi, optimasi proses",
        aliases: &["S1 TEKNIK INDUSTRI", "TEKNIK INDUSTRI S1", "S1-TEKNIK INDUSTRI"],
    },
    Program {
        id: 31,
        level: Level::S1,
        name: "S1 TEKNIK ELEKTRO",
        description: "Teknik Elektro, elektronik, listrik, sistem kontrol",
        aliases: &["S1 TEKNIK ELEKTRO", "TEKNIK ELEKTRO S1", "S1-TEKNIK ELEKTRO"],
    },
    Program {
        id: 32,
        level: Level::D4,
        name: "D4 TEKNOLOGI REKAYASA PERANCANGAN MANUFAKTUR",
        description: "Teknologi Rekayasa Perancangan Manufaktur, desain produk, manufaktur",
        aliases: &[
            "D4 TEKNOLOGI REKAYASA PERANCANGAN MANUFAKTUR",
            "TEKNOLOGI REKAYASA PERANCANGAN MANUFAKTUR D4",
            "D4-TEKNOLOGI REKAYASA PERANCANGAN MANUFAKTUR",
        ],
    },
];

pub static DOMAINS: &[Domain] = &[
    Domain {
        name: "gizi",
        keywords: &[
            "gizi", "nutrisi", "diet", "makanan sehat", "kalori", "vitamin", "mineral",
            "status gizi", "kebutuhan gizi", "ilmu gizi", "dietetik", "gizi masyarakat",
            "penilaian gizi", "konsultasi gizi", "penyuluhan gizi", "gizi klinik",
        ],
        programs: &[21],
    },
    Domain {
        name: "akuntansi",
        keywords: &[
            "akuntansi", "keuangan", "audit", "pajak", "laporan keuangan", "perpajakan",
            "auditing", "akuntan", "pembukuan", "akuntansi keuangan", "akuntansi manajemen",
            "auditor", "pajak penghasilan", "pajak pertambahan nilai", "perpajakan indonesia",
        ],
        programs: &[4, 5, 6],
    },
    Domain {
        name: "teknologi_informasi",
        keywords: &[
            "teknologi informasi", "programming", "coding", "software", "aplikasi",
            "sistem informasi", "database", "web", "mobile", "java", "python",
            "javascript", "php", "html", "css", "it", "teknologi digital",
            "artificial intelligence", "machine learning", "data mining", "big data",
            "internet of things", "cloud computing", "cyber security", "blockchain",
        ],
        programs: &[26],
    },
    Domain {
        name: "pendidikan_bahasa_inggris",
        keywords: &[
            "bahasa inggris", "english", "teaching english", "efl", "esl",
            "language teaching", "english education", "pengajaran bahasa inggris",
            "english proficiency", "toefl", "ielts", "speaking english",
            "writing english", "reading comprehension", "english grammar",
        ],
        programs: &[7, 12],
    },
    Domain {
        name: "teknik_mesin",
        keywords: &[
            "teknik mesin", "mesin", "engineering", "mekanik", "thermodinamika",
            "fluida", "motor bakar", "konversi energi", "desain mesin", "manufaktur",
            "cad cam", "elemen mesin", "vibrasi", "perawatan mesin", "otomasi industri",
        ],
        programs: &[28],
    },
    Domain {
        name: "pariwisata",
        keywords: &[
            "pariwisata", "wisata", "tourisme", "hotel", "hospitality", "destinasi wisata",
            "tour guide", "pemanduan wisata", "manajemen pariwisata", "industri pariwisata",
            "wisata budaya", "ekowisata", "hotel management", "resort", "travel",
        ],
        programs: &[1],
    },
    Domain {
        name: "manajemen",
        keywords: &[
            "manajemen", "management", "bisnis", "strategi bisnis", "organisasi", "pemasaran",
            "manajemen strategi", "kepemimpinan", "manajemen operasi",
            "manajemen sumber daya manusia", "manajemen pemasaran", "manajemen keuangan",
            "business plan", "strategi pemasaran",
        ],
        programs: &[2],
    },
    Domain {
        name: "hukum",
        keywords: &[
            "hukum", "law", "legal", "perdata", "pidana", "konstitusi", "hak asasi",
            "hukum internasional", "hukum bisnis", "hukum pidana", "hukum perdata",
            "hukum tata negara", "hukum administrasi negara", "hukum islam", "fiqih",
        ],
        programs: &[18],
    },
    Domain {
        name: "farmasi",
        keywords: &[
            "farmasi", "farmakologi", "obat", "medis", "kesehatan", "apoteker",
            "farmasi klinik", "farmasetika", "kimia farmasi", "teknologi farmasi",
            "formulasi obat", "stabilitas obat", "farmakokinetik", "farmakodinamik",
        ],
        programs: &[25],
    },
    Domain {
        name: "pertanian",
        keywords: &[
            "pertanian", "agrikultur", "tanaman", "budidaya", "agribisnis", "agroteknologi",
            "hortikultura", "tanaman pangan", "tanaman perkebunan", "ilmu tanah",
            "pupuk", "pestisida", "irigasi", "pertanian organik", "hidroponik",
        ],
        programs: &[23, 24],
    },
    Domain {
        name: "ekonomi_pembangunan",
        keywords: &[
            "ekonomi pembangunan", "pembangunan ekonomi", "ekonomi regional",
            "pertumbuhan ekonomi", "pembangunan berkelanjutan", "ekonomi indonesia",
            "kebijakan ekonomi", "pembangunan sosial", "ekonomi makro",
        ],
        programs: &[3],
    },
    Domain {
        name: "pendidikan_matematika",
        keywords: &[
            "pendidikan matematika", "pembelajaran matematika", "matematika sekolah",
            "aljabar", "kalkulus", "geometri", "statistika", "probabilitas",
            "matematika dasar", "numerik", "trigonometri",
        ],
        programs: &[9],
    },
    Domain {
        name: "pendidikan_ipa",
        keywords: &[
            "pendidikan ipa", "ilmu pengetahuan alam", "sains", "fisika", "kimia", "biologi",
            "pembelajaran ipa", "laboratorium ipa", "eksperimen sains", "metode ilmiah",
        ],
        programs: &[10],
    },
    Domain {
        name: "pendidikan_biologi",
        keywords: &[
            "pendidikan biologi", "biologi sel", "genetika", "ekologi", "anatomi",
            "fisiologi", "mikrobiologi", "zoologi", "botani", "biologi molekuler",
        ],
        programs: &[11],
    },
    Domain {
        name: "ilmu_komunikasi",
        keywords: &[
            "ilmu komunikasi", "komunikasi massa", "jurnalistik", "public relations",
            "media", "broadcasting", "komunikasi pemasaran", "komunikasi organisasi",
            "komunikasi interpersonal", "persuasi", "retorika",
        ],
        programs: &[16],
    },
    Domain {
        name: "administrasi_publik",
        keywords: &[
            "administrasi publik", "kebijakan publik", "pemerintahan", "pelayanan publik",
            "birokrasi", "governance", "administrasi negara", "manajemen publik",
            "otonomi daerah", "desentralisasi",
        ],
        programs: &[15, 17],
    },
    Domain {
        name: "teknik_sipil",
        keywords: &[
            "teknik sipil", "konstruksi", "struktur", "bangunan", "jalan", "jembatan",
            "transportasi", "sipil", "beton", "baja", "geoteknik", "hidrolika",
            "manajemen konstruksi", "survey", "rekayasa struktur",
        ],
        programs: &[27],
    },
    Domain {
        name: "teknik_elektro",
        keywords: &[
            "teknik elektro", "listrik", "elektronika", "kontrol", "instrumentasi",
            "tenaga listrik", "sistem daya", "telekomunikasi", "sinyal", "digital",
            "mikrokontroler", "arduino", "robotika", "automation",
        ],
        programs: &[31],
    },
    Domain {
        name: "teknik_industri",
        keywords: &[
            "teknik industri", "optimasi", "produksi", "operasi", "quality control",
            "ergonomi", "sistem kerja", "manajemen kualitas", "logistik", "supply chain",
            "perancangan sistem", "analisis sistem",
        ],
        programs: &[30],
    },
    Domain {
        name: "peternakan",
        keywords: &[
            "peternakan", "ternak", "hewan", "sapi", "ayam", "kambing", "domba",
            "pakan ternak", "kesehatan hewan", "produksi ternak", "reproduksi ternak",
            "manajemen peternakan", "unggas", "susu", "daging",
        ],
        programs: &[20],
    },
    Domain {
        name: "akuakultur",
        keywords: &[
            "akuakultur", "budidaya perairan", "perikanan", "ikan", "udang", "kerang",
            "budidaya ikan", "akuarium", "tambak", "hatchery", "pembenihan", "kualitas air",
        ],
        programs: &[22],
    },
    Domain {
        name: "teknologi_pangan",
        keywords: &[
            "teknologi pangan", "pangan", "makanan", "pengolahan pangan", "keamanan pangan",
            "gizi pangan", "pengawetan makanan", "mikrobiologi pangan", "analisis pangan",
            "standar mutu pangan", "food safety",
        ],
        programs: &[19],
    },
];

// Candidate order encodes the degree-hint policy: [default/S1, D4, D3].
pub static FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule { pattern: "PARIWISATA", candidates: &[1] },
    FallbackRule { pattern: "MANAJEMEN", candidates: &[2] },
    FallbackRule { pattern: "EKONOMI PEMBANGUNAN", candidates: &[3] },
    FallbackRule { pattern: "AKUNTANSI", candidates: &[4, 5, 6] },
    FallbackRule { pattern: "PERPAJAKAN", candidates: &[5] },
    FallbackRule { pattern: "PENDIDIKAN BAHASA INGGRIS", candidates: &[7, 12] },
    FallbackRule { pattern: "PENDIDIKAN BAHASA INDONESIA", candidates: &[8, 13] },
    FallbackRule { pattern: "PENDIDIKAN MATEMATIKA", candidates: &[9] },
    FallbackRule { pattern: "PENDIDIKAN IPA", candidates: &[10] },
    FallbackRule { pattern: "PENDIDIKAN BIOLOGI", candidates: &[11] },
    FallbackRule { pattern: "PROFESI GURU", candidates: &[14] },
    FallbackRule { pattern: "ADMINISTRASI PUBLIK", candidates: &[15] },
    FallbackRule { pattern: "ILMU KOMUNIKASI", candidates: &[16] },
    FallbackRule { pattern: "ILMU ADMINISTRASI NEGARA", candidates: &[17] },
    FallbackRule { pattern: "HUKUM", candidates: &[18] },
    FallbackRule { pattern: "TEKNOLOGI PANGAN", candidates: &[19] },
    FallbackRule { pattern: "PETERNAKAN", candidates: &[20] },
    FallbackRule { pattern: "GIZI", candidates: &[21] },
    FallbackRule { pattern: "AKUAKULTUR", candidates: &[22] },
    FallbackRule { pattern: "AGROTEKNOLOGI", candidates: &[23] },
    FallbackRule { pattern: "AGRIBISNIS", candidates: &[24] },
    FallbackRule { pattern: "FARMASI", candidates: &[25] },
    FallbackRule { pattern: "TEKNOLOGI INFORMASI", candidates: &[26] },
    FallbackRule { pattern: "INFORMATIKA", candidates: &[26] },
    FallbackRule { pattern: "SISTEM INFORMASI", candidates: &[26] },
    FallbackRule { pattern: "TEKNIK SIPIL", candidates: &[27] },
    FallbackRule { pattern: "TEKNIK MESIN", candidates: &[28] },
    FallbackRule { pattern: "TEKNIK MEKATRONIKA", candidates: &[29] },
    FallbackRule { pattern: "TEKNIK INDUSTRI", candidates: &[30] },
    FallbackRule { pattern: "TEKNIK ELEKTRO", candidates: &[31] },
    FallbackRule { pattern: "TEKNOLOGI REKAYASA", candidates: &[32] },
];

/// All program aliases flattened in declaration order, normalized once.
/// Declaration order is the matching priority.
pub static ALIAS_INDEX: LazyLock<Vec<(String, u32)>> = LazyLock::new(|| {
    PROGRAMS
        .iter()
        .flat_map(|p| p.aliases.iter().map(|a| (normalize(a), p.id)))
        .collect()
});

/// Fallback patterns normalized once, declaration order preserved.
pub static FALLBACK_INDEX: LazyLock<Vec<(String, &'static [u32])>> = LazyLock::new(|| {
    FALLBACK_RULES
        .iter()
        .map(|r| (normalize(r.pattern), r.candidates))
        .collect()
});

pub fn find(id: u32) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.id == id)
}

/// Names of keyword domains that target the given program.
pub fn domains_for(id: u32) -> Vec<&'static str> {
    DOMAINS
        .iter()
        .filter(|d| d.programs.contains(&id))
        .map(|d| d.name)
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_unique_and_dense() {
        let ids: Vec<u32> = PROGRAMS.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=32).collect::<Vec<u32>>());
    }

    #[test]
    fn domain_programs_resolve() {
        for d in DOMAINS {
            assert!(!d.programs.is_empty(), "domain {} has no programs", d.name);
            for id in d.programs {
                assert!(find(*id).is_some(), "domain {} references unknown id {}", d.name, id);
            }
        }
    }

    #[test]
    fn fallback_candidates_resolve() {
        for r in FALLBACK_RULES {
            assert!(!r.candidates.is_empty(), "rule {} has no candidates", r.pattern);
            for id in r.candidates {
                assert!(find(*id).is_some(), "rule {} references unknown id {}", r.pattern, id);
            }
        }
    }

    #[test]
    fn alias_index_is_normalized_and_ordered() {
        let idx = &*ALIAS_INDEX;
        assert_eq!(idx[0], ("s1 pariwisata".to_string(), 1));
        assert!(idx.iter().all(|(a, _)| *a == crate::classify::text::normalize(a)));
        // Flattening follows program order, so all aliases of id 1 come first
        let first_id2 = idx.iter().position(|(_, id)| *id == 2).unwrap();
        assert!(idx[..first_id2].iter().all(|(_, id)| *id == 1));
    }

    #[test]
    fn every_program_has_aliases() {
        for p in PROGRAMS {
            assert!(!p.aliases.is_empty(), "program {} has no aliases", p.id);
        }
    }

    #[test]
    fn domains_for_akuntansi_programs() {
        assert!(domains_for(4).contains(&"akuntansi"));
        assert!(domains_for(5).contains(&"akuntansi"));
        assert!(domains_for(6).contains(&"akuntansi"));
        assert!(domains_for(14).is_empty());
    }

    #[test]
    fn level_parse_roundtrip() {
        for lvl in [Level::S1, Level::S2, Level::D3, Level::D4, Level::Profesi] {
            assert_eq!(Level::parse(lvl.as_str()), Some(lvl));
        }
        assert_eq!(Level::parse("s1"), Some(Level::S1));
        assert_eq!(Level::parse("magister"), None);
    }
}
