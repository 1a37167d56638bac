// ==========================================
// 订购配送计划系统 - 采购计划引擎
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 6. Procurement Planner
// 职责: 缺口加缓冲成计划, 按供应商能力集成单
// 红线: 供应商无可供货项是正常业务结果(结构化哨兵);
//       未知产品引用是数据完整性错误, 不得吞掉
// ==========================================

use crate::domain::procurement::{
    CreateOrderOutcome, ProcurementOrder, ProcurementOrderItem, ProcurementPlanItem, ShortfallRow,
};
use crate::domain::product::{Product, Supplier};
use crate::domain::types::ProcurementStatus;
use crate::error::{EngineError, EngineResult};
use chrono::{NaiveDate, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// 金额/数量舍入: 四舍五入到 2 位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// ProcurementPlanner - 采购计划引擎
// ==========================================
pub struct ProcurementPlanner {
    // 无状态引擎, 不需要注入依赖
}

impl ProcurementPlanner {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 缺口 → 采购计划行
    ///
    /// # 规则 (Delivery_Engine_Specs 6.2)
    /// - quantity_with_buffer = shortfall × (1 + buffer_pct/100), 四舍五入 2 位
    /// - reason 固定格式, 引用 shortfall 与 buffer_pct
    #[instrument(skip(self, shortfalls), fields(
        plan_date = %date,
        buffer_pct = buffer_pct,
        shortfall_count = shortfalls.len()
    ))]
    pub fn plan(
        &self,
        date: NaiveDate,
        buffer_pct: f64,
        shortfalls: &[ShortfallRow],
    ) -> Vec<ProcurementPlanItem> {
        shortfalls
            .iter()
            .filter(|row| row.shortfall > 0.0)
            .map(|row| ProcurementPlanItem {
                product_id: row.product_id.clone(),
                quantity_with_buffer: round2(row.shortfall * (1.0 + buffer_pct / 100.0)),
                reason: format!(
                    "SHORTFALL_BUFFER: shortfall={:.2}, buffer_pct={:.1}",
                    row.shortfall, buffer_pct
                ),
            })
            .collect()
    }

    /// 按供应商能力集创建采购单
    ///
    /// # 规则 (Delivery_Engine_Specs 6.3)
    /// 1. 计划行按供应商可供产品集过滤
    /// 2. 交集为空 → NothingToOrder 哨兵(非错误)
    /// 3. 逐行取产品目录当前单价, 算行金额与总额(四舍五入 2 位)
    /// 4. 产出 PENDING 采购单; 落库与按供应商/日期防重由调用方负责
    ///
    /// # 错误
    /// - 可供货计划行引用了目录不存在的产品 → EngineError::Lookup
    #[instrument(skip(self, plan_items, products), fields(
        order_date = %date,
        supplier_id = %supplier.supplier_id,
        plan_item_count = plan_items.len()
    ))]
    pub fn create_order(
        &self,
        date: NaiveDate,
        supplier: &Supplier,
        plan_items: &[ProcurementPlanItem],
        products: &[Product],
    ) -> EngineResult<CreateOrderOutcome> {
        let fulfillable: Vec<&ProcurementPlanItem> = plan_items
            .iter()
            .filter(|item| supplier.supplies(&item.product_id))
            .collect();

        if fulfillable.is_empty() {
            warn!(
                supplier_id = %supplier.supplier_id,
                "no fulfillable plan items for supplier"
            );
            return Ok(CreateOrderOutcome::NothingToOrder {
                supplier_id: supplier.supplier_id.clone(),
                reason: format!(
                    "NO_FULFILLABLE_ITEMS: supplier={} cannot supply any shortfall product on {}",
                    supplier.supplier_id, date
                ),
            });
        }

        let mut items = Vec::with_capacity(fulfillable.len());
        let mut total_amount = 0.0;
        for plan_item in fulfillable {
            let product = products
                .iter()
                .find(|p| p.product_id == plan_item.product_id)
                .ok_or_else(|| EngineError::Lookup {
                    entity: "Product".to_string(),
                    id: plan_item.product_id.clone(),
                })?;

            let line_total = round2(plan_item.quantity_with_buffer * product.unit_price);
            total_amount += line_total;
            items.push(ProcurementOrderItem {
                product_id: plan_item.product_id.clone(),
                quantity: plan_item.quantity_with_buffer,
                unit_price: product.unit_price,
                line_total,
            });
        }

        let order = ProcurementOrder {
            order_id: Uuid::new_v4().to_string(),
            supplier_id: supplier.supplier_id.clone(),
            order_date: date,
            items,
            total_amount: round2(total_amount),
            status: ProcurementStatus::Pending,
            created_at: Utc::now(),
        };

        info!(
            order_id = %order.order_id,
            supplier_id = %order.supplier_id,
            item_count = order.items.len(),
            total_amount = order.total_amount,
            "procurement order created"
        );

        Ok(CreateOrderOutcome::Created(order))
    }

    /// 按供应商 ID 创建采购单(未知供应商 → Lookup 错误)
    pub fn create_order_for_supplier_id(
        &self,
        date: NaiveDate,
        supplier_id: &str,
        suppliers: &[Supplier],
        plan_items: &[ProcurementPlanItem],
        products: &[Product],
    ) -> EngineResult<CreateOrderOutcome> {
        let supplier = suppliers
            .iter()
            .find(|s| s.supplier_id == supplier_id)
            .ok_or_else(|| EngineError::Lookup {
                entity: "Supplier".to_string(),
                id: supplier_id.to_string(),
            })?;
        self.create_order(date, supplier, plan_items, products)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ProcurementPlanner {
    fn default() -> Self {
        Self::new()
    }
}
