//! Stem and branch cycles with their element assignments.
//!
//! The 10 heavenly stems and 12 earthly branches are two fixed ordered cycles.
//! Every symbol maps to exactly one of the five elements.
//!
//! - Stems:    갑(0) 을(1) 병(2) 정(3) 무(4) 기(5) 경(6) 신(7) 임(8) 계(9)
//! - Branches: 자(0) 축(1) 인(2) 묘(3) 진(4) 사(5) 오(6) 미(7) 신(8) 유(9) 술(10) 해(11)

use serde::{Deserialize, Serialize};

use crate::utils::Language;

/// Length of the stem cycle.
pub const STEM_CYCLE: i64 = 10;
/// Length of the branch cycle.
pub const BRANCH_CYCLE: i64 = 12;

/// The five elements, in the fixed iteration order used everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in iteration order (Wood, Fire, Earth, Metal, Water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> usize {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Korean name (목, 화, 토, 금, 수).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    pub const fn english(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::Korean => self.korean(),
            Language::English => self.english(),
        }
    }
}

/// The 10 heavenly stems (천간).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (index 0 = 갑).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

/// Element of each stem, indexed by stem index.
const STEM_ELEMENTS: [Element; 10] = [
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_ROMAN: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

impl Stem {
    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> usize {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem for any integer position in the cycle; negative positions wrap.
    pub fn from_cycle(position: i64) -> Stem {
        ALL_STEMS[position.rem_euclid(STEM_CYCLE) as usize]
    }

    pub const fn element(self) -> Element {
        STEM_ELEMENTS[self.index()]
    }

    pub const fn korean(self) -> &'static str {
        STEM_KOREAN[self.index()]
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        STEM_ROMAN[self.index()]
    }

    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::Korean => self.korean(),
            Language::English => self.name(),
        }
    }
}

/// The 12 earthly branches (지지).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (index 0 = 자).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

/// Element of each branch, indexed by branch index.
/// 자수, 축토, 인목, 묘목, 진토, 사화, 오화, 미토, 신금, 유금, 술토, 해수
const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_ROMAN: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];

impl Branch {
    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> usize {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch for any integer position in the cycle; negative positions wrap.
    pub fn from_cycle(position: i64) -> Branch {
        ALL_BRANCHES[position.rem_euclid(BRANCH_CYCLE) as usize]
    }

    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index()]
    }

    pub const fn korean(self) -> &'static str {
        BRANCH_KOREAN[self.index()]
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        BRANCH_ROMAN[self.index()]
    }

    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::Korean => self.korean(),
            Language::English => self.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_table_order() {
        for (i, stem) in ALL_STEMS.iter().enumerate() {
            assert_eq!(stem.index(), i);
        }
        for (i, branch) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(branch.index(), i);
        }
        for (i, element) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn from_cycle_wraps_negative_positions() {
        assert_eq!(Stem::from_cycle(-1), Stem::Gye);
        assert_eq!(Stem::from_cycle(-10), Stem::Gap);
        assert_eq!(Stem::from_cycle(23), Stem::Jeong);
        assert_eq!(Branch::from_cycle(-1), Branch::Hae);
        assert_eq!(Branch::from_cycle(-13), Branch::Hae);
        assert_eq!(Branch::from_cycle(12), Branch::Ja);
    }

    #[test]
    fn element_assignments() {
        assert_eq!(Stem::Gap.element(), Element::Wood);
        assert_eq!(Stem::Jeong.element(), Element::Fire);
        assert_eq!(Stem::Gi.element(), Element::Earth);
        assert_eq!(Stem::Sin.element(), Element::Metal);
        assert_eq!(Stem::Gye.element(), Element::Water);

        assert_eq!(Branch::Ja.element(), Element::Water);
        assert_eq!(Branch::Chuk.element(), Element::Earth);
        assert_eq!(Branch::Myo.element(), Element::Wood);
        assert_eq!(Branch::O.element(), Element::Fire);
        assert_eq!(Branch::Yu.element(), Element::Metal);
        assert_eq!(Branch::Hae.element(), Element::Water);
    }

    #[test]
    fn every_element_has_two_stems() {
        for element in ALL_ELEMENTS {
            let count = ALL_STEMS.iter().filter(|s| s.element() == element).count();
            assert_eq!(count, 2, "{:?}", element);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Stem::Gyeong.korean(), "경");
        assert_eq!(Stem::Gyeong.label(Language::English), "Gyeong");
        assert_eq!(Branch::O.label(Language::Korean), "오");
        assert_eq!(Element::Metal.label(Language::Korean), "금");
        assert_eq!(Element::Metal.label(Language::English), "Metal");
    }
}
