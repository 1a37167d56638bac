// ==========================================
// 订购配送计划系统 - 订购领域模型
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - subscription 主实体
// 红线: 覆盖/暂停配置只追加,引擎只读
// ==========================================

use crate::domain::types::{ModeKind, SubscriptionStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// DeliveryMode - 配送模式
// ==========================================
// 模式参数随变体携带,构造期即可检查完整性,
// 避免读取期的缺字段默认值查找
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMode {
    /// 每日固定量
    FixedDaily { default_qty: f64 },
    /// 按周模式: weekdays 为星期索引集合(周一=0..周日=6)
    WeeklyPattern {
        default_qty: f64,
        weekdays: BTreeSet<u8>,
    },
    /// 逐日指定: 量全部来自 day_overrides
    DayByDay,
    /// 不定期: 量全部来自 irregular_entries
    Irregular,
    /// 一次性窗口: [window_start, window_end] 内每日 qty
    OneTime {
        window_start: NaiveDate,
        window_end: NaiveDate,
        qty: f64,
    },
}

impl DeliveryMode {
    /// 模式类别(用于资格判定与原因输出)
    pub fn kind(&self) -> ModeKind {
        match self {
            DeliveryMode::FixedDaily { .. } => ModeKind::FixedDaily,
            DeliveryMode::WeeklyPattern { .. } => ModeKind::WeeklyPattern,
            DeliveryMode::DayByDay => ModeKind::DayByDay,
            DeliveryMode::Irregular => ModeKind::Irregular,
            DeliveryMode::OneTime { .. } => ModeKind::OneTime,
        }
    }
}

// ==========================================
// PauseInterval - 暂停区间
// ==========================================
// 语义: [start, end] 双闭区间; end 缺省表示开放式暂停
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PauseInterval {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl PauseInterval {
    /// 判断日期是否落入暂停区间
    ///
    /// # 规则
    /// - end 存在: start <= date <= end
    /// - end 缺省: date >= start (开放式)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }
}

// ==========================================
// IrregularEntry - 不定期配送条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrregularEntry {
    pub quantity: f64,
    pub note: Option<String>,
}

// ==========================================
// Subscription - 订购主实体
// ==========================================
// 红线: 解析期一次成型(接入层), 引擎层只读
// 用途: 配送量解析/日历/需求汇总的唯一输入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    // ===== 主键与关联 =====
    pub subscription_id: String, // 订购唯一标识
    pub customer_id: String,     // 关联客户
    pub product_id: String,      // 配送产品

    // ===== 计价 =====
    pub unit_price: f64, // 单价(每计量单位)

    // ===== 基础量策略 =====
    pub mode: DeliveryMode,

    // ===== 覆盖层(始终存在, 可为空) =====
    pub day_overrides: BTreeMap<NaiveDate, f64>, // 指定日覆盖量
    pub irregular_entries: BTreeMap<NaiveDate, IrregularEntry>, // 不定期条目(最高覆盖优先级)

    // ===== 暂停与终止 =====
    pub pause_intervals: Vec<PauseInterval>, // 暂停区间(追加式)
    pub stop_date: Option<NaiveDate>,        // 终止日(含当日起不再配送)

    // ===== 状态 =====
    pub status: SubscriptionStatus,
    pub auto_start: bool, // 自动参与批量生成

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// 模式类别
    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// 日期是否处于任一暂停区间
    pub fn is_paused_on(&self, date: NaiveDate) -> bool {
        self.pause_intervals.iter().any(|p| p.contains(date))
    }

    /// 日期是否存在精确日覆盖(不定期条目或指定日覆盖)
    pub fn has_exact_date_entry(&self, date: NaiveDate) -> bool {
        self.irregular_entries.contains_key(&date) || self.day_overrides.contains_key(&date)
    }
}
