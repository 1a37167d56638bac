// ==========================================
// 订购配送计划系统 - 配送量解析引擎
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 2. Quantity Resolver
// 职责: (日期, 订购) → 当日配送量, 纯函数
// 红线: 规则链顺序即优先级, 首个命中即返回;
//       所有规则必须输出 reason; 缺数据一律归零, 不抛错
// ==========================================

use crate::domain::subscription::{DeliveryMode, Subscription};
use crate::domain::types::SubscriptionStatus;
use chrono::{Datelike, NaiveDate};

// ==========================================
// 规则代码 (用于可解释性与日历分类)
// ==========================================
pub mod rule_code {
    pub const STATUS_DRAFT: &str = "STATUS_DRAFT";
    pub const STATUS_STOPPED: &str = "STATUS_STOPPED";
    pub const STOPPED_FROM: &str = "STOPPED_FROM";
    pub const PAUSED: &str = "PAUSED";
    pub const IRREGULAR_ENTRY: &str = "IRREGULAR_ENTRY";
    pub const DAY_OVERRIDE: &str = "DAY_OVERRIDE";
    pub const WEEKLY_PATTERN_HIT: &str = "WEEKLY_PATTERN_HIT";
    pub const WEEKLY_PATTERN_MISS: &str = "WEEKLY_PATTERN_MISS";
    pub const ONE_TIME_WINDOW: &str = "ONE_TIME_WINDOW";
    pub const ONE_TIME_OUTSIDE: &str = "ONE_TIME_OUTSIDE";
    pub const FIXED_DAILY: &str = "FIXED_DAILY";
    pub const NO_ENTRY: &str = "NO_ENTRY";
    pub const DEFAULT_ZERO: &str = "DEFAULT_ZERO";
}

// ==========================================
// ResolutionOutcome - 解析结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionOutcome {
    pub quantity: f64,
    pub rule_code: &'static str,
    pub reason: String,
}

impl ResolutionOutcome {
    /// 是否由精确日覆盖规则产生(不定期条目/指定日覆盖)
    pub fn is_exact_date_override(&self) -> bool {
        self.rule_code == rule_code::IRREGULAR_ENTRY || self.rule_code == rule_code::DAY_OVERRIDE
    }
}

// ==========================================
// 规则表 - 优先级即数据结构
// ==========================================
// 规则从上到下求值, 首个返回 Some 的规则胜出。
// 新增规则只改表, 不改控制流。

pub type RuleFn = fn(NaiveDate, &Subscription) -> Option<ResolutionOutcome>;

pub struct ResolutionRule {
    pub name: &'static str,
    pub evaluate: RuleFn,
}

pub const RESOLUTION_RULES: &[ResolutionRule] = &[
    ResolutionRule {
        name: "status_draft",
        evaluate: rule_status_draft,
    },
    ResolutionRule {
        name: "status_stopped",
        evaluate: rule_status_stopped,
    },
    ResolutionRule {
        name: "stop_date",
        evaluate: rule_stop_date,
    },
    ResolutionRule {
        name: "pause_interval",
        evaluate: rule_pause_interval,
    },
    ResolutionRule {
        name: "irregular_entry",
        evaluate: rule_irregular_entry,
    },
    ResolutionRule {
        name: "day_override",
        evaluate: rule_day_override,
    },
    ResolutionRule {
        name: "mode_base",
        evaluate: rule_mode_base,
    },
];

// ==========================================
// 规则实现
// ==========================================

/// 规则 1: 草稿订购不配送
fn rule_status_draft(_date: NaiveDate, sub: &Subscription) -> Option<ResolutionOutcome> {
    if sub.status == SubscriptionStatus::Draft {
        return Some(ResolutionOutcome {
            quantity: 0.0,
            rule_code: rule_code::STATUS_DRAFT,
            reason: "status=DRAFT".to_string(),
        });
    }
    None
}

/// 规则 2: 已终止订购不配送
fn rule_status_stopped(_date: NaiveDate, sub: &Subscription) -> Option<ResolutionOutcome> {
    if sub.status == SubscriptionStatus::Stopped {
        return Some(ResolutionOutcome {
            quantity: 0.0,
            rule_code: rule_code::STATUS_STOPPED,
            reason: "status=STOPPED".to_string(),
        });
    }
    None
}

/// 规则 3: 终止日(含当日)之后不配送
fn rule_stop_date(date: NaiveDate, sub: &Subscription) -> Option<ResolutionOutcome> {
    match sub.stop_date {
        Some(stop) if date >= stop => Some(ResolutionOutcome {
            quantity: 0.0,
            rule_code: rule_code::STOPPED_FROM,
            reason: format!("date={} >= stop_date={}", date, stop),
        }),
        _ => None,
    }
}

/// 规则 4: 暂停区间内不配送(双闭区间, 开放式无上界)
fn rule_pause_interval(date: NaiveDate, sub: &Subscription) -> Option<ResolutionOutcome> {
    let pause = sub.pause_intervals.iter().find(|p| p.contains(date))?;
    let end_repr = pause
        .end
        .map(|e| e.to_string())
        .unwrap_or_else(|| "OPEN".to_string());
    Some(ResolutionOutcome {
        quantity: 0.0,
        rule_code: rule_code::PAUSED,
        reason: format!("date={} in pause [{}, {}]", date, pause.start, end_repr),
    })
}

/// 规则 5: 不定期条目精确命中(最高覆盖优先级)
fn rule_irregular_entry(date: NaiveDate, sub: &Subscription) -> Option<ResolutionOutcome> {
    let entry = sub.irregular_entries.get(&date)?;
    Some(ResolutionOutcome {
        quantity: entry.quantity,
        rule_code: rule_code::IRREGULAR_ENTRY,
        reason: format!("irregular entry qty={}", entry.quantity),
    })
}

/// 规则 6: 指定日覆盖精确命中
fn rule_day_override(date: NaiveDate, sub: &Subscription) -> Option<ResolutionOutcome> {
    let qty = sub.day_overrides.get(&date)?;
    Some(ResolutionOutcome {
        quantity: *qty,
        rule_code: rule_code::DAY_OVERRIDE,
        reason: format!("day override qty={}", qty),
    })
}

/// 规则 7-10: 模式基础量(终结规则, 恒命中)
fn rule_mode_base(date: NaiveDate, sub: &Subscription) -> Option<ResolutionOutcome> {
    let outcome = match &sub.mode {
        DeliveryMode::WeeklyPattern {
            default_qty,
            weekdays,
        } => {
            let weekday = weekday_index(date);
            if weekdays.contains(&weekday) {
                ResolutionOutcome {
                    quantity: *default_qty,
                    rule_code: rule_code::WEEKLY_PATTERN_HIT,
                    reason: format!("weekday={} in pattern, qty={}", weekday, default_qty),
                }
            } else {
                ResolutionOutcome {
                    quantity: 0.0,
                    rule_code: rule_code::WEEKLY_PATTERN_MISS,
                    reason: format!("weekday={} not in pattern", weekday),
                }
            }
        }
        DeliveryMode::OneTime {
            window_start,
            window_end,
            qty,
        } => {
            if date >= *window_start && date <= *window_end {
                ResolutionOutcome {
                    quantity: *qty,
                    rule_code: rule_code::ONE_TIME_WINDOW,
                    reason: format!(
                        "date={} in window [{}, {}], qty={}",
                        date, window_start, window_end, qty
                    ),
                }
            } else {
                ResolutionOutcome {
                    quantity: 0.0,
                    rule_code: rule_code::ONE_TIME_OUTSIDE,
                    reason: format!(
                        "date={} outside window [{}, {}]",
                        date, window_start, window_end
                    ),
                }
            }
        }
        DeliveryMode::FixedDaily { default_qty } => ResolutionOutcome {
            quantity: *default_qty,
            rule_code: rule_code::FIXED_DAILY,
            reason: format!("fixed daily qty={}", default_qty),
        },
        // 逐日指定/不定期, 无精确命中则归零(不回退默认量)
        DeliveryMode::DayByDay | DeliveryMode::Irregular => ResolutionOutcome {
            quantity: 0.0,
            rule_code: rule_code::NO_ENTRY,
            reason: format!("mode={} has no entry for {}", sub.mode_kind(), date),
        },
    };
    Some(outcome)
}

/// 星期索引(周一=0..周日=6)
fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

// ==========================================
// QuantityResolver - 配送量解析引擎
// ==========================================
pub struct QuantityResolver {
    // 无状态引擎, 不需要注入依赖
}

impl QuantityResolver {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 解析指定日期的配送量
    ///
    /// # 返回
    /// 非负配送量(小数量允许, 本层不做舍入)
    pub fn resolve(&self, date: NaiveDate, subscription: &Subscription) -> f64 {
        self.resolve_with_reason(date, subscription).quantity
    }

    /// 解析指定日期的配送量并给出命中规则与原因
    ///
    /// # 规则链 (Delivery_Engine_Specs 2.2)
    /// 1. status=DRAFT → 0
    /// 2. status=STOPPED → 0
    /// 3. date >= stop_date → 0
    /// 4. 落入暂停区间 → 0
    /// 5. 不定期条目精确命中 → 条目量
    /// 6. 指定日覆盖精确命中 → 覆盖量
    /// 7-10. 模式基础量(按周/一次性/固定/逐日)
    pub fn resolve_with_reason(
        &self,
        date: NaiveDate,
        subscription: &Subscription,
    ) -> ResolutionOutcome {
        for rule in RESOLUTION_RULES {
            if let Some(mut outcome) = (rule.evaluate)(date, subscription) {
                // 非负契约: 异常存量数据不得放大为负配送
                if !outcome.quantity.is_finite() || outcome.quantity < 0.0 {
                    outcome.quantity = 0.0;
                }
                return outcome;
            }
        }

        // mode_base 恒命中, 此分支只是规则表被裁剪时的兜底
        ResolutionOutcome {
            quantity: 0.0,
            rule_code: rule_code::DEFAULT_ZERO,
            reason: "no rule matched".to_string(),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for QuantityResolver {
    fn default() -> Self {
        Self::new()
    }
}
