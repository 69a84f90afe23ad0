//! Classical formation (geju) detection.
//!
//! Each pattern is an independent matcher over the merged chart; the
//! registry runs them all and collects every match. A chart is read as
//! favorable only when at least one favorable formation is present and no
//! unfavorable one is.

use once_cell::sync::Lazy;

use crate::models::{Geju, PalaceCell, PalaceIndex, Period, Star};

/// Everything a matcher may look at.
pub struct PatternContext<'a> {
    pub cells: &'a [PalaceCell],
    pub period: Period,
    pub sitting_palace: PalaceIndex,
    pub facing_palace: PalaceIndex,
}

impl PatternContext<'_> {
    fn cell(&self, palace: PalaceIndex) -> Option<&PalaceCell> {
        self.cells.iter().find(|c| c.palace == palace)
    }

    fn sitting_cell(&self) -> Option<&PalaceCell> {
        self.cell(self.sitting_palace)
    }

    fn facing_cell(&self) -> Option<&PalaceCell> {
        self.cell(self.facing_palace)
    }
}

struct Pattern {
    name: &'static str,
    favorable: bool,
    matcher: fn(&PatternContext) -> Option<String>,
}

fn sorted_triple(a: Star, b: Star, c: Star) -> [Star; 3] {
    let mut t = [a, b, c];
    t.sort_unstable();
    t
}

fn wang_shan_wang_shui(ctx: &PatternContext) -> Option<String> {
    let zuo = ctx.sitting_cell()?;
    let xiang = ctx.facing_cell()?;
    if zuo.mountain_star == ctx.period && xiang.facing_star == ctx.period {
        Some("timely mountain star at the sitting palace and timely facing star at the facing palace".into())
    } else {
        None
    }
}

fn shang_shan_xia_shui(ctx: &PatternContext) -> Option<String> {
    let zuo = ctx.sitting_cell()?;
    let xiang = ctx.facing_cell()?;
    if zuo.facing_star == ctx.period && xiang.mountain_star == ctx.period {
        Some("timely stars inverted: water star on the mountain, mountain star in the water".into())
    } else {
        None
    }
}

fn shuang_xing_hui_xiang(ctx: &PatternContext) -> Option<String> {
    let xiang = ctx.facing_cell()?;
    if xiang.mountain_star == ctx.period && xiang.facing_star == ctx.period {
        Some("both timely stars gather at the facing palace".into())
    } else {
        None
    }
}

fn shuang_xing_hui_zuo(ctx: &PatternContext) -> Option<String> {
    let zuo = ctx.sitting_cell()?;
    if zuo.mountain_star == ctx.period && zuo.facing_star == ctx.period {
        Some("both timely stars gather at the sitting palace".into())
    } else {
        None
    }
}

fn quan_ju_he_shi(ctx: &PatternContext) -> Option<String> {
    let all = ctx
        .cells
        .iter()
        .all(|c| c.period_star + c.mountain_star + c.facing_star == 10);
    if all && ctx.cells.len() == 9 {
        Some("period, mountain and facing stars sum to ten in every palace".into())
    } else {
        None
    }
}

fn dui_gong_he_shi(ctx: &PatternContext) -> Option<String> {
    let zuo = ctx.sitting_cell()?;
    let xiang = ctx.facing_cell()?;
    if zuo.mountain_star + zuo.facing_star == 10 && xiang.mountain_star + xiang.facing_star == 10 {
        Some("mountain and facing stars sum to ten at both ends of the axis".into())
    } else {
        None
    }
}

fn lian_zhu_san_ban(ctx: &PatternContext) -> Option<String> {
    let zuo = ctx.sitting_cell()?;
    let xiang = ctx.facing_cell()?;
    let t = sorted_triple(ctx.period, zuo.mountain_star, xiang.facing_star);
    if t[1] - t[0] == 1 && t[2] - t[1] == 1 {
        Some("period, mountain and facing stars form a consecutive run".into())
    } else {
        None
    }
}

fn fu_mu_san_ban(ctx: &PatternContext) -> Option<String> {
    let zuo = ctx.sitting_cell()?;
    let xiang = ctx.facing_cell()?;
    let t = sorted_triple(ctx.period, zuo.mountain_star, xiang.facing_star);
    if t[1] - t[0] == 3 && t[2] - t[1] == 3 {
        Some("period, mountain and facing stars step by three".into())
    } else {
        None
    }
}

fn fu_yin(ctx: &PatternContext) -> Option<String> {
    let mut locations = Vec::new();
    for cell in ctx.cells {
        if cell.mountain_star == cell.period_star {
            locations.push(format!("palace {} mountain star", cell.palace));
        }
        if cell.facing_star == cell.period_star {
            locations.push(format!("palace {} facing star", cell.palace));
        }
    }
    if locations.is_empty() {
        None
    } else {
        Some(format!("star repeats its period-plate host: {}", locations.join(", ")))
    }
}

fn fan_yin(ctx: &PatternContext) -> Option<String> {
    let mut locations = Vec::new();
    for cell in ctx.cells {
        if cell.mountain_star + cell.period_star == 10 {
            locations.push(format!("palace {} mountain star", cell.palace));
        }
        if cell.facing_star + cell.period_star == 10 {
            locations.push(format!("palace {} facing star", cell.palace));
        }
    }
    if locations.is_empty() {
        None
    } else {
        Some(format!("star opposes its period-plate host across ten: {}", locations.join(", ")))
    }
}

static REGISTRY: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern { name: "WangShanWangShui", favorable: true, matcher: wang_shan_wang_shui },
        Pattern { name: "ShangShanXiaShui", favorable: false, matcher: shang_shan_xia_shui },
        Pattern { name: "ShuangXingHuiXiang", favorable: true, matcher: shuang_xing_hui_xiang },
        Pattern { name: "ShuangXingHuiZuo", favorable: true, matcher: shuang_xing_hui_zuo },
        Pattern { name: "QuanJuHeShi", favorable: true, matcher: quan_ju_he_shi },
        Pattern { name: "DuiGongHeShi", favorable: true, matcher: dui_gong_he_shi },
        Pattern { name: "LianZhuSanBan", favorable: true, matcher: lian_zhu_san_ban },
        Pattern { name: "FuMuSanBan", favorable: true, matcher: fu_mu_san_ban },
        Pattern { name: "FuYin", favorable: false, matcher: fu_yin },
        Pattern { name: "FanYin", favorable: false, matcher: fan_yin },
    ]
});

/// Runs every registered matcher and aggregates the verdict.
pub fn analyze_geju(ctx: &PatternContext) -> Geju {
    let mut types = Vec::new();
    let mut descriptions = Vec::new();
    let mut has_favorable = false;
    let mut has_unfavorable = false;

    for pattern in REGISTRY.iter() {
        if let Some(description) = (pattern.matcher)(ctx) {
            types.push(pattern.name.to_string());
            descriptions.push(description);
            if pattern.favorable {
                has_favorable = true;
            } else {
                has_unfavorable = true;
            }
        }
    }

    Geju {
        types,
        descriptions,
        is_favorable: has_favorable && !has_unfavorable,
    }
}
