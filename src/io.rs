use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::classify::text::normalize;

/// Delimiters recognized by the sniffer, comma first as the default.
const DELIMITERS: &[u8] = b",;\t|";

const BIBLIO_ID_ALIASES: &[&str] = &["biblio_id", "id", "biblio id", "biblioid"];
const TITLE_ALIASES: &[&str] = &["title", "judul", "book_title"];
const TOPIC_ALIASES: &[&str] = &["topic", "kategori", "subject", "topik"];
const MEMBER_ID_ALIASES: &[&str] = &["member_id", "id", "member id", "memberid"];
const INST_NAME_ALIASES: &[&str] = &["inst_name", "inst name", "institution", "instansi"];

pub struct MemberRecord {
    pub member_id: String,
    pub inst_name: String,
}

pub struct BiblioRecord {
    pub biblio_id: String,
    pub title: String,
    pub topic: String,
}

/// Pick the delimiter with the highest count in the header line.
/// Ties and delimiter-free headers fall back to comma.
pub fn sniff_delimiter(sample: &str) -> u8 {
    let header = sample.lines().next().unwrap_or("");
    let mut best = b',';
    let mut best_count = 0;
    for &delim in DELIMITERS {
        let count = header.bytes().filter(|&b| b == delim).count();
        if count > best_count {
            best = delim;
            best_count = count;
        }
    }
    best
}

/// Whole-file read tolerating invalid UTF-8 and a leading BOM.
fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text.into_owned()),
    }
}

fn reader_for(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .delimiter(sniff_delimiter(text))
        .flexible(true)
        .from_reader(text.as_bytes())
}

/// Resolve a column by its normalized header name against known aliases.
fn find_column(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.contains(&normalize(h).as_str()))
}

/// Missing or unresolvable columns read as empty, never as an error.
fn field(record: &StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| record.get(i))
        .unwrap_or("")
        .trim()
        .to_string()
}

pub fn read_members(path: &Path) -> Result<Vec<MemberRecord>> {
    let text = read_lossy(path)?;
    let mut rdr = reader_for(&text);
    let headers = rdr
        .headers()
        .with_context(|| format!("reading header row of {}", path.display()))?
        .clone();
    let idx_id = find_column(&headers, MEMBER_ID_ALIASES);
    let idx_inst = find_column(&headers, INST_NAME_ALIASES);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(MemberRecord {
            member_id: field(&record, idx_id),
            inst_name: field(&record, idx_inst),
        });
    }
    Ok(rows)
}

/// Catalog rows without an id or a title carry nothing to classify and are
/// dropped here.
pub fn read_catalog(path: &Path) -> Result<Vec<BiblioRecord>> {
    let text = read_lossy(path)?;
    let mut rdr = reader_for(&text);
    let headers = rdr
        .headers()
        .with_context(|| format!("reading header row of {}", path.display()))?
        .clone();
    let idx_id = find_column(&headers, BIBLIO_ID_ALIASES);
    let idx_title = find_column(&headers, TITLE_ALIASES);
    let idx_topic = find_column(&headers, TOPIC_ALIASES);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let biblio_id = field(&record, idx_id);
        let title = field(&record, idx_title);
        if biblio_id.is_empty() || title.is_empty() {
            continue;
        }
        rows.push(BiblioRecord {
            biblio_id,
            title,
            topic: field(&record, idx_topic),
        });
    }
    Ok(rows)
}

/// Two-column mapping table: record id plus program id, one row per pair.
pub fn write_mappings(path: &Path, id_header: &str, rows: &[(String, u32)]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record([id_header, "prodi_id"])?;
    for (record_id, prodi_id) in rows {
        wtr.write_record([record_id.as_str(), prodi_id.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sniffs_each_dialect() {
        assert_eq!(sniff_delimiter("a,b,c\n1,2,3"), b',');
        assert_eq!(sniff_delimiter("a;b;c\n1;2;3"), b';');
        assert_eq!(sniff_delimiter("a\tb\tc"), b'\t');
        assert_eq!(sniff_delimiter("a|b|c"), b'|');
        assert_eq!(sniff_delimiter("single_column"), b',');
        assert_eq!(sniff_delimiter(""), b',');
    }

    #[test]
    fn majority_delimiter_wins() {
        assert_eq!(sniff_delimiter("a;b;c,d\n"), b';');
    }

    #[test]
    fn reads_semicolon_members_fixture() {
        let rows = read_members(Path::new("tests/fixtures/members.csv")).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].member_id, "M001");
        assert_eq!(rows[0].inst_name, "S1 MANAJEMEN");
        // empty inst_name is kept, it just maps to nothing later
        assert_eq!(rows[3].member_id, "M004");
        assert_eq!(rows[3].inst_name, "");
    }

    #[test]
    fn reads_catalog_fixture_with_aliased_headers() {
        let rows = read_catalog(Path::new("tests/fixtures/biblio.csv")).unwrap();
        // rows missing id or title are dropped
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].biblio_id, "B001");
        assert_eq!(rows[0].title, "Analisis Akuntansi dan Pajak Daerah");
        assert_eq!(rows[2].topic, "sastra");
    }

    #[test]
    fn bom_and_missing_topic_column() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all("\u{feff}biblio_id,title\nB1,Hukum Perdata\n".as_bytes())
            .unwrap();
        let rows = read_catalog(f.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].biblio_id, "B1");
        assert_eq!(rows[0].topic, "");
    }

    #[test]
    fn ragged_rows_read_as_empty_fields() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"member_id,inst_name\nM1\nM2,S1 GIZI\n").unwrap();
        let rows = read_members(f.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].inst_name, "");
        assert_eq!(rows[1].inst_name, "S1 GIZI");
    }

    #[test]
    fn write_then_read_preserves_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![
            ("B001".to_string(), 4),
            ("B001".to_string(), 5),
            ("B002".to_string(), 26),
        ];
        write_mappings(&path, "biblio_id", &rows).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.headers().unwrap(), &StringRecord::from(vec!["biblio_id", "prodi_id"]));
        let read_back: Vec<(String, u32)> = rdr
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].parse().unwrap())
            })
            .collect();
        assert_eq!(read_back, rows);
        for (_, id) in &read_back {
            assert!(crate::registry::find(*id).is_some());
        }
    }
}
