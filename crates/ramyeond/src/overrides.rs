//! Per-product cooking overrides.
//!
//! Absence of an override is not an error - the synthesizer derives
//! defaults from the name and the catalog row instead.

use ramyeon_common::{CookType, Language};

/// Hand-tuned cooking parameters for products whose package directions
/// differ from the type defaults.
#[derive(Debug, Clone, Copy)]
pub struct GuideOverride {
    pub name: &'static str,
    pub cook_type: CookType,
    pub water_ml: u32,
    pub time_sec: u32,
    notes_ko: &'static [&'static str],
    notes_en: &'static [&'static str],
}

impl GuideOverride {
    pub fn notes(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Ko => self.notes_ko,
            Language::En => self.notes_en,
        }
    }
}

const fn ov(
    name: &'static str,
    cook_type: CookType,
    water_ml: u32,
    time_sec: u32,
    notes_ko: &'static [&'static str],
    notes_en: &'static [&'static str],
) -> GuideOverride {
    GuideOverride { name, cook_type, water_ml, time_sec, notes_ko, notes_en }
}

pub static GUIDE_OVERRIDES: &[GuideOverride] = &[
    ov(
        "신라면",
        CookType::Soup,
        550,
        270,
        &["물 550ml 권장", "대파/계란 추가 추천"],
        &["550ml of water recommended", "Green onion or egg goes well"],
    ),
    ov(
        "신라면 블랙",
        CookType::Soup,
        550,
        270,
        &["사골스프 분리 동봉, 표기순서 준수"],
        &["Separate bone-broth sachet included, follow the printed order"],
    ),
    ov(
        "너구리",
        CookType::Soup,
        550,
        300,
        &["다시마는 취향대로 건져내기"],
        &["Fish out the kelp piece to taste"],
    ),
    ov(
        "얼큰 너구리",
        CookType::Soup,
        550,
        300,
        &["면이 굵어 충분히 끓이기"],
        &["Thick noodles, give them the full boil"],
    ),
    ov(
        "짜파게티",
        CookType::Stir,
        600,
        300,
        &["면수 5~7큰술 남김"],
        &["Keep 5-7 spoonfuls of the noodle water"],
    ),
    ov(
        "마라짜파게티",
        CookType::Stir,
        600,
        300,
        &["기본 조리 동일, 맵기 주의"],
        &["Cooked the same way, mind the heat"],
    ),
    ov(
        "불닭볶음면",
        CookType::Stir,
        600,
        240,
        &["면수 2~3큰술 남겨 볶기", "맵기 주의"],
        &["Stir-fry with 2-3 spoonfuls of noodle water left", "Very spicy"],
    ),
    ov(
        "까르보불닭",
        CookType::Stir,
        600,
        240,
        &["가루스프는 불 끄고 섞기"],
        &["Mix in the powder sachet off the heat"],
    ),
    ov(
        "비빔면",
        CookType::Bibim,
        600,
        180,
        &["찬물로 충분히 헹궈 전분기 제거", "얼음물 추천"],
        &["Rinse well in cold water to remove starch", "Ice water recommended"],
    ),
    ov(
        "왕뚜껑",
        CookType::Cup,
        400,
        210,
        &["용기 물선까지 끓는 물", "3~3:30 대기"],
        &["Boiling water up to the fill line", "Wait 3 to 3:30"],
    ),
    ov(
        "UP 컵왕뚜껑",
        CookType::Cup,
        400,
        210,
        &["용기 물선까지 끓는 물", "3~3:30 대기"],
        &["Boiling water up to the fill line", "Wait 3 to 3:30"],
    ),
    ov("진라면(매운맛)", CookType::Soup, 550, 270, &[], &[]),
    ov("진라면(순한맛)", CookType::Soup, 550, 270, &[], &[]),
    ov(
        "진짜장",
        CookType::Stir,
        600,
        270,
        &["면수 조금 남겨 농도 맞추기"],
        &["Keep a little noodle water to adjust thickness"],
    ),
    ov(
        "진짬뽕",
        CookType::Soup,
        550,
        270,
        &["분말/유성스프 순서 준수"],
        &["Follow the powder/oil sachet order"],
    ),
    ov(
        "컵누들",
        CookType::Cup,
        300,
        180,
        &["저칼로리 컵, 뜨거운 물 주의"],
        &["Low-calorie cup, mind the hot water"],
    ),
];

/// Look up an override by canonical name.
pub fn find(name: &str) -> Option<&'static GuideOverride> {
    GUIDE_OVERRIDES.iter().find(|ov| ov.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_override() {
        let ov = find("신라면").unwrap();
        assert_eq!(ov.cook_type, CookType::Soup);
        assert_eq!(ov.time_sec, 270);
        assert_eq!(ov.notes(Language::Ko).len(), 2);
        assert_eq!(ov.notes(Language::En).len(), 2);
    }

    #[test]
    fn miss_is_none() {
        assert!(find("사리면").is_none());
    }
}
