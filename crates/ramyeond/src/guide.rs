//! Guide synthesis: (name, language) -> structured cooking procedure.
//!
//! Pure and deterministic - identical arguments always yield an
//! identical [`Guide`]. Parameter precedence is override, then catalog
//! row, then type-inferred defaults, documented field by field on
//! [`resolve_params`].

use crate::{catalog, overrides};
use ramyeon_common::{CookType, Guide, GuideMeta, GuideSection, Language};

/// Default boil time when neither an override nor a catalog row says
/// otherwise.
pub const DEFAULT_TIME_SEC: u32 = 240;

const DEFAULT_WATER_ML: u32 = 550;
const DEFAULT_CUP_WATER_ML: u32 = 350;

/// Fully resolved cooking parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CookParams {
    pub cook_type: CookType,
    pub water_ml: u32,
    pub time_sec: u32,
    /// False when neither an override, a catalog row, nor a lexical cue
    /// identified the product. Rendering then uses the generic
    /// "check the package" section instead of a type template.
    pub recognized: bool,
}

/// Infer a cooking type from lexical cues in the name.
///
/// Keyword families are checked stir, bibim, cup; None means no cue
/// matched (the caller decides whether the soup default applies).
pub fn infer_cook_type(name: &str) -> Option<CookType> {
    const STIR_CUES: &[&str] = &["짜파게티", "자장", "짜장", "볶음", "불닭", "까르보", "볶이"];
    const BIBIM_CUES: &[&str] = &["비빔", "냉면", "소바"];
    const CUP_CUES: &[&str] = &["컵", "사발", "뚜껑"];

    if STIR_CUES.iter().any(|cue| name.contains(cue)) {
        return Some(CookType::Stir);
    }
    if BIBIM_CUES.iter().any(|cue| name.contains(cue)) {
        return Some(CookType::Bibim);
    }
    if CUP_CUES.iter().any(|cue| name.contains(cue)) {
        return Some(CookType::Cup);
    }
    None
}

/// Parse "m:ss" time text from the catalog into seconds.
pub fn parse_mmss(text: &str) -> Option<u32> {
    let mut parts = text.splitn(2, ':');
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    let seconds: u32 = match parts.next() {
        Some(s) => s.trim().parse().ok()?,
        None => 0,
    };
    Some(minutes * 60 + seconds)
}

/// Render seconds as "m:ss" with zero-padded seconds. Durations are
/// assumed under an hour; there is no hour component.
pub fn format_mmss(time_sec: u32) -> String {
    format!("{}:{:02}", time_sec / 60, time_sec % 60)
}

/// Resolve cooking parameters for a name.
///
/// Precedence per field: override value, else (cook_type) lexical
/// inference with soup as the default for catalogued rows, (water_ml)
/// 350 for cup-style and 550 otherwise, (time_sec) the catalog "m:ss"
/// duration, else 240.
pub fn resolve_params(name: &str) -> CookParams {
    if let Some(ov) = overrides::find(name) {
        return CookParams {
            cook_type: ov.cook_type,
            water_ml: ov.water_ml,
            time_sec: ov.time_sec,
            recognized: true,
        };
    }

    let idx = catalog::index();
    let inferred = infer_cook_type(name);
    let in_catalog = idx.contains(name);
    // An unknown name with no lexical cue keeps the soup default in meta
    // but renders the generic fallback section.
    let (cook_type, recognized) = match inferred {
        Some(t) => (t, true),
        None => (CookType::Soup, in_catalog),
    };

    let time_sec = idx
        .time_text(name)
        .and_then(parse_mmss)
        .unwrap_or(DEFAULT_TIME_SEC);
    let water_ml = if cook_type == CookType::Cup {
        DEFAULT_CUP_WATER_ML
    } else {
        DEFAULT_WATER_ML
    };

    CookParams { cook_type, water_ml, time_sec, recognized }
}

fn section(title: &str, items: Vec<String>) -> GuideSection {
    GuideSection { title: title.to_string(), items }
}

/// Per-type section templates. Every numeric reference interpolates
/// water_ml and the m:ss rendering; the generic fallback section is the
/// only one guaranteed to carry no numeric parameters.
fn build_sections(params: &CookParams, language: Language) -> Vec<GuideSection> {
    let w = params.water_ml;
    let t = format_mmss(params.time_sec);

    if !params.recognized {
        return match language {
            Language::Ko => vec![section(
                "확인",
                vec![
                    "봉지 표기 조리법을 우선 확인하세요.".to_string(),
                    "국물/볶음/비빔/컵 유형을 먼저 파악하세요.".to_string(),
                ],
            )],
            Language::En => vec![section(
                "Check",
                vec![
                    "Check the cooking directions printed on the package first.".to_string(),
                    "Work out whether it is a soup, stir-fried, cold-mixed, or cup product."
                        .to_string(),
                ],
            )],
        };
    }

    match (params.cook_type, language) {
        (CookType::Soup, Language::Ko) => vec![
            section("물", vec![format!("냄비에 물 {w}ml를 붓고 끓입니다.")]),
            section("면", vec![format!("물이 끓으면 면을 넣고 {t} 동안 끓입니다.")]),
            section(
                "스프",
                vec!["면이 풀리면 분말/건더기스프를 넣고 30초 더 끓이며 저어줍니다.".to_string()],
            ),
            section(
                "마무리",
                vec!["기호에 따라 대파/계란/치즈를 추가해 마무리합니다.".to_string()],
            ),
        ],
        (CookType::Soup, Language::En) => vec![
            section(
                "Water",
                vec![format!("Pour {w}ml of water into a pot and bring it to a boil.")],
            ),
            section(
                "Noodles",
                vec![format!("When the water boils, add the noodles and cook for {t}.")],
            ),
            section(
                "Soup base",
                vec!["Once the noodles loosen, add the powder and flake sachets, then boil for 30 more seconds while stirring.".to_string()],
            ),
            section(
                "Finish",
                vec!["Top with green onion, egg, or cheese to taste.".to_string()],
            ),
        ],
        (CookType::Stir, Language::Ko) => vec![
            section("물", vec![format!("물 {w}ml를 끓입니다.")]),
            section(
                "면",
                vec![format!("면을 {t} 삶은 뒤 물을 거의 버리고 면수 2~7큰술만 남깁니다.")],
            ),
            section(
                "소스",
                vec!["약불에서 액상/분말소스를 넣고 30~60초간 골고루 볶아 코팅합니다.".to_string()],
            ),
            section(
                "마무리",
                vec!["파/치즈/계란프라이를 곁들이면 좋아요.".to_string()],
            ),
        ],
        (CookType::Stir, Language::En) => vec![
            section("Water", vec![format!("Boil {w}ml of water.")]),
            section(
                "Noodles",
                vec![format!("Cook the noodles for {t}, then drain, keeping only 2-7 spoonfuls of the cooking water.")],
            ),
            section(
                "Sauce",
                vec!["Over low heat, add the sauce and stir-fry for 30-60 seconds until every strand is coated.".to_string()],
            ),
            section(
                "Finish",
                vec!["Green onion, cheese, or a fried egg go well on top.".to_string()],
            ),
        ],
        (CookType::Bibim, Language::Ko) => vec![
            section("물", vec![format!("물 {w}ml를 끓입니다.")]),
            section(
                "면",
                vec![format!("면을 {t} 삶은 뒤 물을 완전히 버리고 찬물에 충분히 헹궈 전분기를 제거합니다.")],
            ),
            section(
                "소스",
                vec!["물기를 꼭 짠 뒤 비빔소스를 넣고 골고루 비빕니다.".to_string()],
            ),
            section(
                "마무리",
                vec!["오이/계란/얼음을 곁들이면 더 시원합니다.".to_string()],
            ),
        ],
        (CookType::Bibim, Language::En) => vec![
            section("Water", vec![format!("Boil {w}ml of water.")]),
            section(
                "Noodles",
                vec![format!("Cook the noodles for {t}, drain completely, and rinse well under cold water to wash off the starch.")],
            ),
            section(
                "Sauce",
                vec!["Squeeze out the water, add the mixing sauce, and toss thoroughly.".to_string()],
            ),
            section(
                "Finish",
                vec!["Cucumber, a boiled egg, or ice cubes make it extra refreshing.".to_string()],
            ),
        ],
        (CookType::Cup, Language::Ko) => vec![
            section(
                "준비",
                vec!["뚜껑을 표시선까지 열고 스프를 표기대로 넣습니다.".to_string()],
            ),
            section(
                "물",
                vec!["끓는 물을 용기 물선까지 붓고 뚜껑을 닫습니다.".to_string()],
            ),
            section("대기", vec![format!("{t} 기다린 뒤 젓가락으로 잘 저어 드세요.")]),
        ],
        (CookType::Cup, Language::En) => vec![
            section(
                "Prepare",
                vec!["Open the lid to the marked line and add the sachets as printed.".to_string()],
            ),
            section(
                "Water",
                vec!["Pour boiling water up to the fill line and close the lid.".to_string()],
            ),
            section(
                "Wait",
                vec![format!("Wait {t}, then stir well with chopsticks before eating.")],
            ),
        ],
    }
}

/// Flatten sections into 1-based numbered steps, sequential across all
/// sections with no per-section restart.
fn flatten_steps(sections: &[GuideSection]) -> Vec<String> {
    sections
        .iter()
        .flat_map(|sec| sec.items.iter())
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}

/// 3-line quick summary, templated independently of the sections.
fn quick_summary(params: &CookParams, language: Language) -> Vec<String> {
    let w = params.water_ml;
    let t = format_mmss(params.time_sec);

    if !params.recognized {
        return match language {
            Language::Ko => vec![
                "봉지 표기 조리법 확인".to_string(),
                "국물/볶음/비빔/컵 유형 파악".to_string(),
                "표기 시간만큼 조리".to_string(),
            ],
            Language::En => vec![
                "Check the package directions".to_string(),
                "Identify the soup/stir/bibim/cup style".to_string(),
                "Cook for the printed time".to_string(),
            ],
        };
    }

    let is_cup = params.cook_type == CookType::Cup;
    match language {
        Language::Ko => vec![
            if is_cup {
                "용기 물선까지 끓는 물".to_string()
            } else {
                format!("물 {w}ml 끓이기")
            },
            if is_cup {
                format!("뚜껑 닫고 {t} 대기")
            } else {
                format!("면 {t} 끓이기")
            },
            match params.cook_type {
                CookType::Soup => "스프 넣고 30초 더".to_string(),
                CookType::Stir => "면수 조금 남기고 소스 볶기".to_string(),
                CookType::Bibim => "찬물 헹구고 소스에 비비기".to_string(),
                CookType::Cup => "젓가락으로 골고루 저어먹기".to_string(),
            },
        ],
        Language::En => vec![
            if is_cup {
                "Boiling water up to the fill line".to_string()
            } else {
                format!("Boil {w}ml of water")
            },
            if is_cup {
                format!("Close the lid and wait {t}")
            } else {
                format!("Cook the noodles for {t}")
            },
            match params.cook_type {
                CookType::Soup => "Add the soup base and boil 30 seconds more".to_string(),
                CookType::Stir => "Keep a little water and stir-fry the sauce".to_string(),
                CookType::Bibim => "Rinse cold and mix with the sauce".to_string(),
                CookType::Cup => "Stir well with chopsticks".to_string(),
            },
        ],
    }
}

fn title(name: &str, language: Language) -> String {
    match language {
        Language::Ko => format!("{name} 끓이는 방법"),
        Language::En => format!("How to cook {name}"),
    }
}

/// Synthesize the full localized guide for a (possibly unresolved) name.
pub fn synthesize(name: &str, language: Language) -> Guide {
    let params = resolve_params(name);
    let sections = build_sections(&params, language);
    let steps = flatten_steps(&sections);
    let quick = quick_summary(&params, language);
    let notes = overrides::find(name)
        .map(|ov| ov.notes(language).iter().map(|n| n.to_string()).collect())
        .unwrap_or_default();

    Guide {
        title: title(name, language),
        sections,
        steps,
        quick,
        notes,
        meta: GuideMeta {
            cook_type: params.cook_type,
            water_ml: params.water_ml,
            time_sec: params.time_sec,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_time_text() {
        assert_eq!(parse_mmss("4:30"), Some(270));
        assert_eq!(parse_mmss("3:00"), Some(180));
        assert_eq!(parse_mmss("5"), Some(300));
        assert_eq!(parse_mmss("abc"), None);
    }

    #[test]
    fn infers_type_from_lexical_cues() {
        assert_eq!(infer_cook_type("짜파게티"), Some(CookType::Stir));
        assert_eq!(infer_cook_type("라볶이"), Some(CookType::Stir));
        assert_eq!(infer_cook_type("비빔면"), Some(CookType::Bibim));
        assert_eq!(infer_cook_type("메밀소바"), Some(CookType::Bibim));
        assert_eq!(infer_cook_type("김치사발면"), Some(CookType::Cup));
        assert_eq!(infer_cook_type("왕뚜껑"), Some(CookType::Cup));
        assert_eq!(infer_cook_type("삼양라면"), None);
    }

    #[test]
    fn override_outranks_inference_and_catalog() {
        // 신라면 catalog time is 4:30 but the override says 270 anyway;
        // 짜파게티 override forces stir with 600ml.
        let p = resolve_params("짜파게티");
        assert_eq!(p.cook_type, CookType::Stir);
        assert_eq!(p.water_ml, 600);
        assert_eq!(p.time_sec, 300);
        assert!(p.recognized);
    }

    #[test]
    fn catalog_time_fills_in_without_override() {
        // 사리면 has no override; catalog says 4:30.
        let p = resolve_params("사리면");
        assert_eq!(p.cook_type, CookType::Soup);
        assert_eq!(p.water_ml, 550);
        assert_eq!(p.time_sec, 270);
        assert!(p.recognized);
    }

    #[test]
    fn cup_default_water_is_350() {
        // A cup-cued name without an override.
        let p = resolve_params("육개장사발면");
        assert_eq!(p.cook_type, CookType::Cup);
        assert_eq!(p.water_ml, 350);
        assert_eq!(p.time_sec, 180);
    }

    #[test]
    fn unknown_name_gets_generic_defaults() {
        let p = resolve_params("zzz-unknown-product");
        assert_eq!(p.cook_type, CookType::Soup);
        assert_eq!(p.water_ml, 550);
        assert_eq!(p.time_sec, DEFAULT_TIME_SEC);
        assert!(!p.recognized);
    }

    #[test]
    fn unknown_name_with_cue_still_gets_template() {
        let p = resolve_params("이상한볶음면");
        assert_eq!(p.cook_type, CookType::Stir);
        assert!(p.recognized);
    }

    #[test]
    fn steps_are_numbered_across_sections() {
        let g = synthesize("신라면", Language::Ko);
        assert_eq!(g.steps.len(), 4);
        assert!(g.steps[0].starts_with("1. "));
        assert!(g.steps[3].starts_with("4. "));
    }

    #[test]
    fn fallback_section_has_no_numeric_parameters() {
        let g = synthesize("zzz-unknown-product", Language::En);
        assert_eq!(g.sections.len(), 1);
        assert_eq!(g.steps.len(), 2);
        for step in &g.steps {
            assert!(!step.contains("ml"));
            assert!(!step.contains("4:00"));
        }
        assert_eq!(g.quick.len(), 3);
    }
}
