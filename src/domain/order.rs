// ==========================================
// 订购配送计划系统 - 一次性订单领域模型
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - order 实体
// 红线: CANCELLED 订单不参与需求汇总
// ==========================================

use crate::domain::types::OrderStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// OrderLine - 订单行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: f64,
}

// ==========================================
// Order - 一次性订单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub delivery_date: NaiveDate,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// 是否参与指定日期的需求汇总
    pub fn counts_on(&self, date: NaiveDate) -> bool {
        !self.status.is_cancelled() && self.delivery_date == date
    }
}
