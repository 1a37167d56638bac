// ==========================================
// 订购配送计划系统 - 配送计划输出模型
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 3.3 日历条目 / 4.2 需求口径
// 用途: 引擎输出, 即算即弃, 不落库
// ==========================================

use crate::domain::types::DeliveryDayStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// CalendarEntry - 配送日历条目
// ==========================================
// 不变量: quantity 恒等于 resolve(date, subscription)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub quantity: f64,
    pub status: DeliveryDayStatus,
}

// ==========================================
// RequirementBreakdown - 单产品单日需求
// ==========================================
// total_quantity = Σ resolve(date, sub) + Σ 未取消订单行
// contributing_count = 正贡献订购数 + 正贡献订单行数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementBreakdown {
    pub product_id: String,
    pub date: NaiveDate,
    pub total_quantity: f64,
    pub contributing_count: u32,
}
