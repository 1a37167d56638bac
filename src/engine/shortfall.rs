// ==========================================
// 订购配送计划系统 - 库存缺口检测引擎
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 5. Shortfall Detector
// 职责: 比对汇总需求与库存快照, 产出缺口行
// 红线: 例外输出, 仅 shortfall > 0 出行; 缺口恒非负
// ==========================================

use crate::domain::delivery::RequirementBreakdown;
use crate::domain::procurement::ShortfallRow;
use crate::domain::product::{InventorySnapshot, Product};
use chrono::{Duration, NaiveDate};
use tracing::{debug, instrument};

// ==========================================
// ShortfallDetector - 缺口检测引擎
// ==========================================
pub struct ShortfallDetector {
    // 无状态引擎, 不需要注入依赖
}

impl ShortfallDetector {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 检测单日缺口
    ///
    /// # 库存口径 (Delivery_Engine_Specs 5.2)
    /// available = 当日快照结存
    ///           → 缺失则取前一日快照结存
    ///           → 仍缺失按 0 计
    /// shortfall = max(0, required - available)
    ///
    /// # 参数
    /// - `requirements`: 当日需求汇总(Requirement Aggregator 输出)
    /// - `snapshots`: 库存快照
    /// - `products`: 产品目录(提供计量单位)
    #[instrument(skip_all, fields(date = %date, requirement_count = requirements.len()))]
    pub fn detect(
        &self,
        date: NaiveDate,
        requirements: &[RequirementBreakdown],
        snapshots: &[InventorySnapshot],
        products: &[Product],
    ) -> Vec<ShortfallRow> {
        let mut rows = Vec::new();

        for requirement in requirements {
            let available = self.available_stock(&requirement.product_id, date, snapshots);
            let shortfall = (requirement.total_quantity - available).max(0.0);

            if shortfall <= 0.0 {
                continue; // 例外输出策略: 不缺不出行
            }

            let unit = products
                .iter()
                .find(|p| p.product_id == requirement.product_id)
                .map(|p| p.unit.clone())
                .unwrap_or_default();

            debug!(
                product_id = %requirement.product_id,
                required = requirement.total_quantity,
                available,
                shortfall,
                "shortfall detected"
            );

            rows.push(ShortfallRow {
                product_id: requirement.product_id.clone(),
                required: requirement.total_quantity,
                available,
                shortfall,
                unit,
            });
        }

        rows
    }

    /// 查可用库存(当日快照 → 前一日快照 → 0)
    fn available_stock(
        &self,
        product_id: &str,
        date: NaiveDate,
        snapshots: &[InventorySnapshot],
    ) -> f64 {
        if let Some(snapshot) = snapshots
            .iter()
            .find(|s| s.product_id == product_id && s.date == date)
        {
            return snapshot.closing_stock;
        }

        let previous_day = date - Duration::days(1);
        snapshots
            .iter()
            .find(|s| s.product_id == product_id && s.date == previous_day)
            .map(|s| s.closing_stock)
            .unwrap_or(0.0)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ShortfallDetector {
    fn default() -> Self {
        Self::new()
    }
}
