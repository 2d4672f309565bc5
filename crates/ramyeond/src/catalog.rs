//! Embedded reference catalog and its lookup index.
//!
//! The brand/row declaration order below is part of the observable
//! contract: substring name resolution breaks ties by table order, and
//! `/api/guide/list` reports names in the same order. Malformed rows are
//! a build-time concern; the index has no runtime error conditions.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One catalog row: canonical Korean name, recommended boil time as
/// "m:ss" text, spice level 0..5, and whether it is a cup-style product.
#[derive(Debug, Clone, Copy)]
pub struct CatalogRow {
    pub name: &'static str,
    pub time: &'static str,
    pub spice: u8,
    pub cup: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Brand {
    pub name: &'static str,
    pub rows: &'static [CatalogRow],
}

const fn row(name: &'static str, time: &'static str, spice: u8, cup: bool) -> CatalogRow {
    CatalogRow { name, time, spice, cup }
}

pub static RAMYEON_CATALOG: &[Brand] = &[
    Brand {
        name: "농심",
        rows: &[
            row("신라면", "4:30", 3, false),
            row("신라면 블랙", "4:30", 3, false),
            row("얼큰 너구리", "5:00", 3, false),
            row("너구리", "5:00", 2, false),
            row("안성탕면", "4:30", 2, false),
            row("해물 안성탕면", "4:30", 2, false),
            row("짜파게티", "5:00", 1, false),
            row("마라짜파게티", "5:00", 3, false),
            row("배홍동비빔면", "3:00", 3, false),
            row("배홍동칼빔면", "3:00", 3, false),
            row("사리면", "4:30", 0, false),
            row("무파마", "4:30", 3, false),
            row("건면", "4:30", 2, false),
            row("오징어짬뽕", "4:30", 3, false),
            row("둥지냉면", "2:30", 1, false),
            row("냉면", "2:30", 1, false),
            row("짬뽕면", "4:30", 3, false),
            row("해물짬뽕", "4:30", 3, false),
            row("메밀소바", "3:00", 0, false),
            row("김치사발면", "3:00", 2, true),
            row("육개장사발면", "3:00", 2, true),
            row("신라면 툼바", "4:30", 3, false),
        ],
    },
    Brand {
        name: "삼양",
        rows: &[
            row("불닭볶음면", "4:00", 5, false),
            row("까르보불닭", "4:00", 4, false),
            row("치즈불닭", "4:00", 4, false),
            row("삼양라면", "4:00", 2, false),
            row("나가사키 짬뽕", "4:30", 2, false),
            row("맛있게 매운면", "4:30", 4, false),
            row("맵탱면", "4:00", 4, false),
        ],
    },
    Brand {
        name: "오뚜기",
        rows: &[
            row("진라면(매운맛)", "4:30", 3, false),
            row("진라면(순한맛)", "4:30", 1, false),
            row("열라면", "4:00", 4, false),
            row("참깨라면", "4:00", 2, false),
            row("김치라면", "4:00", 2, false),
            row("진짬뽕", "4:30", 3, false),
            row("진짜장", "4:30", 1, false),
            row("쇠고기라면", "4:00", 1, false),
            row("북엇국라면", "4:00", 1, false),
            row("컵누들", "3:00", 1, true),
            row("라면사리", "4:00", 0, false),
        ],
    },
    Brand {
        name: "팔도",
        rows: &[
            row("비빔면", "3:00", 2, false),
            row("왕뚜껑", "3:30", 2, true),
            row("꼬꼬면", "4:00", 2, false),
            row("틈새라면", "4:00", 5, false),
            row("UP 컵왕뚜껑", "3:30", 2, true),
            row("라볶이", "4:00", 2, false),
            row("남자라면", "4:00", 4, false),
        ],
    },
];

/// Romanized/English display names mapped to canonical keys. Matching is
/// case-insensitive substring containment inside the utterance, in the
/// order declared here.
pub static ALIASES: &[(&str, &str)] = &[
    ("shin ramyun black", "신라면 블랙"),
    ("shin ramyun", "신라면"),
    ("shin ramen", "신라면"),
    ("neoguri", "너구리"),
    ("chapagetti", "짜파게티"),
    ("carbo buldak", "까르보불닭"),
    ("cheese buldak", "치즈불닭"),
    ("buldak", "불닭볶음면"),
    ("jin ramen mild", "진라면(순한맛)"),
    ("jin ramen spicy", "진라면(매운맛)"),
    ("jin jjambbong", "진짬뽕"),
    ("jin jjajang", "진짜장"),
    ("ansungtangmyun", "안성탕면"),
    ("bibimmyun", "비빔면"),
    ("bibim myun", "비빔면"),
    ("wang ttukkeong", "왕뚜껑"),
    ("cup noodle", "컵누들"),
    ("samyang ramen", "삼양라면"),
    ("yeul ramen", "열라면"),
    ("kokomen", "꼬꼬면"),
    ("nagasaki jjambbong", "나가사키 짬뽕"),
];

/// Flattened lookup structures, built once. Ordered vectors carry the
/// declaration-order contract; the maps are plain point lookups.
pub struct CatalogIndex {
    time_by_name: HashMap<&'static str, &'static str>,
    spice_by_name: HashMap<&'static str, u8>,
    cup_by_name: HashMap<&'static str, bool>,
    canonical: Vec<&'static str>,
    guide_names: Vec<&'static str>,
}

impl CatalogIndex {
    fn build() -> Self {
        let mut time_by_name = HashMap::new();
        let mut spice_by_name = HashMap::new();
        let mut cup_by_name = HashMap::new();
        let mut canonical = Vec::new();

        for brand in RAMYEON_CATALOG {
            for row in brand.rows {
                time_by_name.insert(row.name, row.time);
                spice_by_name.insert(row.name, row.spice);
                cup_by_name.insert(row.name, row.cup);
                canonical.push(row.name);
            }
        }

        // Guide lookup order: override keys first, then catalog order,
        // deduplicated.
        let mut guide_names: Vec<&'static str> = Vec::new();
        for ov in crate::overrides::GUIDE_OVERRIDES {
            if !guide_names.contains(&ov.name) {
                guide_names.push(ov.name);
            }
        }
        for name in &canonical {
            if !guide_names.contains(name) {
                guide_names.push(*name);
            }
        }

        Self {
            time_by_name,
            spice_by_name,
            cup_by_name,
            canonical,
            guide_names,
        }
    }

    /// Recommended boil time as "m:ss" text, if the name is catalogued.
    pub fn time_text(&self, name: &str) -> Option<&'static str> {
        self.time_by_name.get(name).copied()
    }

    pub fn spice(&self, name: &str) -> Option<u8> {
        self.spice_by_name.get(name).copied()
    }

    pub fn is_cup(&self, name: &str) -> bool {
        self.cup_by_name.get(name).copied().unwrap_or(false)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.time_by_name.contains_key(name)
    }

    /// All canonical names in catalog declaration order.
    pub fn canonical_names(&self) -> &[&'static str] {
        &self.canonical
    }

    /// Names accepted by the direct guide lookup (overrides first).
    pub fn guide_names(&self) -> &[&'static str] {
        &self.guide_names
    }

    /// name -> "m:ss" table for prompt grounding.
    pub fn duration_table(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for name in &self.canonical {
            if let Some(t) = self.time_by_name.get(name) {
                map.insert(name.to_string(), serde_json::Value::from(*t));
            }
        }
        serde_json::Value::Object(map)
    }

    /// name -> spice 0..5 table for prompt grounding.
    pub fn spice_table(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for name in &self.canonical {
            if let Some(s) = self.spice_by_name.get(name) {
                map.insert(name.to_string(), serde_json::Value::from(*s));
            }
        }
        serde_json::Value::Object(map)
    }

    /// name -> cup flag table for prompt grounding.
    pub fn cup_table(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for name in &self.canonical {
            if let Some(c) = self.cup_by_name.get(name) {
                map.insert(name.to_string(), serde_json::Value::from(*c));
            }
        }
        serde_json::Value::Object(map)
    }
}

static INDEX: Lazy<CatalogIndex> = Lazy::new(CatalogIndex::build);

/// Process-wide read-only catalog index.
pub fn index() -> &'static CatalogIndex {
    &INDEX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_every_row() {
        let idx = index();
        let total: usize = RAMYEON_CATALOG.iter().map(|b| b.rows.len()).sum();
        assert_eq!(idx.canonical_names().len(), total);
        assert_eq!(idx.time_text("신라면"), Some("4:30"));
        assert_eq!(idx.spice("불닭볶음면"), Some(5));
        assert!(idx.is_cup("왕뚜껑"));
        assert!(!idx.is_cup("신라면"));
    }

    #[test]
    fn guide_names_start_with_override_keys() {
        let idx = index();
        let first = idx.guide_names()[0];
        assert_eq!(first, crate::overrides::GUIDE_OVERRIDES[0].name);
        // No duplicates after the union.
        let mut seen = std::collections::HashSet::new();
        assert!(idx.guide_names().iter().all(|n| seen.insert(*n)));
    }

    #[test]
    fn declaration_order_is_preserved() {
        let idx = index();
        let names = idx.canonical_names();
        let pos = |n: &str| names.iter().position(|x| *x == n).unwrap();
        // 얼큰 너구리 is declared before 너구리; resolution relies on it.
        assert!(pos("얼큰 너구리") < pos("너구리"));
        assert_eq!(names[0], "신라면");
    }

    #[test]
    fn aliases_point_at_catalogued_names() {
        let idx = index();
        for (_, canonical) in ALIASES {
            assert!(idx.contains(canonical), "alias target {canonical} missing");
        }
    }
}
