//! The twenty-four mountains and their classical attributes.
//!
//! The compass circle is partitioned into 24 sectors of 15° each. Three
//! consecutive mountains share one trigram palace; within each triple the
//! clockwise order is always Di-yuan, Tian-yuan, Ren-yuan.

use serde::{Deserialize, Serialize};

use super::PalaceIndex;

/// Width of one mountain sector in degrees.
pub const SECTOR_DEGREES: f64 = 15.0;

/// One of the 24 compass mountains, ordered clockwise from Zi (due north).
///
/// `Zi` is centered on 0° and spans [352.5°, 7.5°); each following variant
/// is centered 15° further clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mountain {
    Zi,   // 子 0°
    Gui,  // 癸 15°
    Chou, // 丑 30°
    Gen,  // 艮 45°
    Yin,  // 寅 60°
    Jia,  // 甲 75°
    Mao,  // 卯 90°
    Yi,   // 乙 105°
    Chen, // 辰 120°
    Xun,  // 巽 135°
    Si,   // 巳 150°
    Bing, // 丙 165°
    Wu,   // 午 180°
    Ding, // 丁 195°
    Wei,  // 未 210°
    Kun,  // 坤 225°
    Shen, // 申 240°
    Geng, // 庚 255°
    You,  // 酉 270°
    Xin,  // 辛 285°
    Xu,   // 戌 300°
    Qian, // 乾 315°
    Hai,  // 亥 330°
    Ren,  // 壬 345°
}

/// Tian/Di/Ren-yuan sub-classification of a mountain within its trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YuanLong {
    Tian,
    Di,
    Ren,
}

/// Yin/yang polarity as used by the Luoshu flight rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

/// The eight trigrams plus the center, keyed to their Luoshu numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigram {
    Kan,    // 1, north
    KunGua, // 2, southwest
    Zhen,   // 3, east
    XunGua, // 4, southeast
    Center, // 5
    QianGua, // 6, northwest
    Dui,    // 7, west
    GenGua, // 8, northeast
    Li,     // 9, south
}

impl Trigram {
    /// Luoshu number of the trigram's home palace.
    pub fn number(self) -> PalaceIndex {
        match self {
            Trigram::Kan => 1,
            Trigram::KunGua => 2,
            Trigram::Zhen => 3,
            Trigram::XunGua => 4,
            Trigram::Center => 5,
            Trigram::QianGua => 6,
            Trigram::Dui => 7,
            Trigram::GenGua => 8,
            Trigram::Li => 9,
        }
    }

    /// Trigram associated with a star number 1..=9.
    pub fn from_star(star: u8) -> Trigram {
        match star {
            1 => Trigram::Kan,
            2 => Trigram::KunGua,
            3 => Trigram::Zhen,
            4 => Trigram::XunGua,
            5 => Trigram::Center,
            6 => Trigram::QianGua,
            7 => Trigram::Dui,
            8 => Trigram::GenGua,
            _ => Trigram::Li,
        }
    }

    /// Classical trigram polarity. Kan, Zhen, Qian and Gen are yang; Kun,
    /// Xun, Li and Dui are yin. The center follows yang.
    pub fn polarity(self) -> Polarity {
        match self {
            Trigram::Kan | Trigram::Zhen | Trigram::QianGua | Trigram::GenGua | Trigram::Center => {
                Polarity::Yang
            }
            Trigram::KunGua | Trigram::XunGua | Trigram::Dui | Trigram::Li => Polarity::Yin,
        }
    }
}

impl Mountain {
    /// All 24 mountains in clockwise sector order.
    pub const ALL: [Mountain; 24] = [
        Mountain::Zi,
        Mountain::Gui,
        Mountain::Chou,
        Mountain::Gen,
        Mountain::Yin,
        Mountain::Jia,
        Mountain::Mao,
        Mountain::Yi,
        Mountain::Chen,
        Mountain::Xun,
        Mountain::Si,
        Mountain::Bing,
        Mountain::Wu,
        Mountain::Ding,
        Mountain::Wei,
        Mountain::Kun,
        Mountain::Shen,
        Mountain::Geng,
        Mountain::You,
        Mountain::Xin,
        Mountain::Xu,
        Mountain::Qian,
        Mountain::Hai,
        Mountain::Ren,
    ];

    /// Sector index 0..24, clockwise from Zi.
    pub fn index(self) -> usize {
        Mountain::ALL.iter().position(|&m| m == self).unwrap_or(0)
    }

    /// Bearing of the sector center in degrees.
    pub fn center_degrees(self) -> f64 {
        self.index() as f64 * SECTOR_DEGREES
    }

    /// Sector bounds `(start, end)` in degrees; the Zi sector wraps 360°.
    pub fn sector_degrees(self) -> (f64, f64) {
        let center = self.center_degrees();
        let start = (center - SECTOR_DEGREES / 2.0 + 360.0) % 360.0;
        let end = (center + SECTOR_DEGREES / 2.0) % 360.0;
        (start, end)
    }

    /// Home palace of the mountain's trigram.
    pub fn palace(self) -> PalaceIndex {
        match self {
            Mountain::Ren | Mountain::Zi | Mountain::Gui => 1,
            Mountain::Chou | Mountain::Gen | Mountain::Yin => 8,
            Mountain::Jia | Mountain::Mao | Mountain::Yi => 3,
            Mountain::Chen | Mountain::Xun | Mountain::Si => 4,
            Mountain::Bing | Mountain::Wu | Mountain::Ding => 9,
            Mountain::Wei | Mountain::Kun | Mountain::Shen => 2,
            Mountain::Geng | Mountain::You | Mountain::Xin => 7,
            Mountain::Xu | Mountain::Qian | Mountain::Hai => 6,
        }
    }

    /// Trigram governing the mountain's sector.
    pub fn trigram(self) -> Trigram {
        Trigram::from_star(self.palace())
    }

    /// Yuan-long classification, derived from the position within the
    /// trigram triple (clockwise: Di, Tian, Ren).
    pub fn yuan(self) -> YuanLong {
        match (self.index() + 1) % 3 {
            0 => YuanLong::Di,
            1 => YuanLong::Tian,
            _ => YuanLong::Ren,
        }
    }

    /// The mountain 180° across the compass.
    pub fn opposite(self) -> Mountain {
        Mountain::ALL[(self.index() + 12) % 24]
    }

    /// Romanized name.
    pub fn name(self) -> &'static str {
        match self {
            Mountain::Zi => "Zi",
            Mountain::Gui => "Gui",
            Mountain::Chou => "Chou",
            Mountain::Gen => "Gen",
            Mountain::Yin => "Yin",
            Mountain::Jia => "Jia",
            Mountain::Mao => "Mao",
            Mountain::Yi => "Yi",
            Mountain::Chen => "Chen",
            Mountain::Xun => "Xun",
            Mountain::Si => "Si",
            Mountain::Bing => "Bing",
            Mountain::Wu => "Wu",
            Mountain::Ding => "Ding",
            Mountain::Wei => "Wei",
            Mountain::Kun => "Kun",
            Mountain::Shen => "Shen",
            Mountain::Geng => "Geng",
            Mountain::You => "You",
            Mountain::Xin => "Xin",
            Mountain::Xu => "Xu",
            Mountain::Qian => "Qian",
            Mountain::Hai => "Hai",
            Mountain::Ren => "Ren",
        }
    }

    /// Traditional character.
    pub fn han(self) -> char {
        match self {
            Mountain::Zi => '子',
            Mountain::Gui => '癸',
            Mountain::Chou => '丑',
            Mountain::Gen => '艮',
            Mountain::Yin => '寅',
            Mountain::Jia => '甲',
            Mountain::Mao => '卯',
            Mountain::Yi => '乙',
            Mountain::Chen => '辰',
            Mountain::Xun => '巽',
            Mountain::Si => '巳',
            Mountain::Bing => '丙',
            Mountain::Wu => '午',
            Mountain::Ding => '丁',
            Mountain::Wei => '未',
            Mountain::Kun => '坤',
            Mountain::Shen => '申',
            Mountain::Geng => '庚',
            Mountain::You => '酉',
            Mountain::Xin => '辛',
            Mountain::Xu => '戌',
            Mountain::Qian => '乾',
            Mountain::Hai => '亥',
            Mountain::Ren => '壬',
        }
    }
}
