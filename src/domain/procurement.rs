// ==========================================
// 订购配送计划系统 - 缺口与采购领域模型
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 5. 缺口检测 / 6. 采购计划
// 红线: 仅 ProcurementOrder 是持久化输出, 其余均为临时计算结果
// ==========================================

use crate::domain::types::ProcurementStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ShortfallRow - 缺口行
// ==========================================
// 例外输出策略: 仅 shortfall > 0 的产品产出行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortfallRow {
    pub product_id: String,
    pub required: f64,  // 汇总需求量
    pub available: f64, // 可用库存(快照或前一日结存)
    pub shortfall: f64, // max(0, required - available)
    pub unit: String,   // 计量单位(产品目录口径)
}

// ==========================================
// ProcurementPlanItem - 采购计划行
// ==========================================
// quantity_with_buffer = shortfall × (1 + buffer_pct/100), 四舍五入 2 位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementPlanItem {
    pub product_id: String,
    pub quantity_with_buffer: f64,
    pub reason: String, // 固定格式: 引用 shortfall 与 buffer_pct
}

// ==========================================
// ProcurementOrderItem - 采购单行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementOrderItem {
    pub product_id: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_total: f64, // quantity × unit_price, 四舍五入 2 位
}

// ==========================================
// ProcurementOrder - 采购单
// ==========================================
// 创建即 PENDING; 落库与按供应商/日期去重由调用方负责
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcurementOrder {
    pub order_id: String, // UUID v4
    pub supplier_id: String,
    pub order_date: NaiveDate,
    pub items: Vec<ProcurementOrderItem>,
    pub total_amount: f64,
    pub status: ProcurementStatus,
    pub created_at: DateTime<Utc>,
}

// ==========================================
// CreateOrderOutcome - 采购单创建结果
// ==========================================
// 供应商当日无可供货项是正常业务结果,
// 以结构化哨兵返回而非错误
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CreateOrderOutcome {
    /// 采购单已生成
    Created(ProcurementOrder),
    /// 供应商能力集与缺口无交集, 无可下单项
    NothingToOrder { supplier_id: String, reason: String },
}

impl CreateOrderOutcome {
    /// 是否生成了采购单
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOrderOutcome::Created(_))
    }
}
