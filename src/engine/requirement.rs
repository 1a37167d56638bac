// ==========================================
// 订购配送计划系统 - 需求汇总引擎
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 4. Requirement Aggregator
// 职责: 按产品/日期汇总订购解析量与一次性订单行
// 红线: CANCELLED 订单不计入; 资格过滤由调用方在入口完成
// ==========================================

use crate::domain::delivery::RequirementBreakdown;
use crate::domain::order::Order;
use crate::domain::product::Product;
use crate::domain::subscription::Subscription;
use crate::engine::resolver::QuantityResolver;
use chrono::NaiveDate;
use tracing::instrument;

// ==========================================
// RequirementAggregator - 需求汇总引擎
// ==========================================
pub struct RequirementAggregator {
    resolver: QuantityResolver,
}

impl RequirementAggregator {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            resolver: QuantityResolver::new(),
        }
    }

    /// 汇总单产品单日需求
    ///
    /// # 口径 (Delivery_Engine_Specs 4.2)
    /// - total_quantity = Σ resolve(date, sub) over 引用该产品的订购
    ///                  + Σ 当日未取消订单中该产品的行量
    /// - contributing_count = 正贡献订购数 + 正贡献订单行数
    ///
    /// # 参数
    /// - `subscriptions`: 订购快照(调用方应先做资格过滤)
    /// - `orders`: 一次性订单快照
    pub fn aggregate(
        &self,
        date: NaiveDate,
        product_id: &str,
        subscriptions: &[Subscription],
        orders: &[Order],
    ) -> RequirementBreakdown {
        let mut total_quantity = 0.0;
        let mut contributing_count = 0u32;

        // 1. 订购贡献
        for sub in subscriptions.iter().filter(|s| s.product_id == product_id) {
            let quantity = self.resolver.resolve(date, sub);
            if quantity > 0.0 {
                total_quantity += quantity;
                contributing_count += 1;
            }
        }

        // 2. 一次性订单行贡献
        for order in orders.iter().filter(|o| o.counts_on(date)) {
            for line in order.lines.iter().filter(|l| l.product_id == product_id) {
                if line.quantity > 0.0 {
                    total_quantity += line.quantity;
                    contributing_count += 1;
                }
            }
        }

        RequirementBreakdown {
            product_id: product_id.to_string(),
            date,
            total_quantity,
            contributing_count,
        }
    }

    /// 按产品目录汇总单日全量需求
    ///
    /// 有界成本 O(产品数 × 订购数); 超大目录的外部截止时间由调用方控制
    #[instrument(skip_all, fields(
        date = %date,
        product_count = products.len(),
        subscription_count = subscriptions.len(),
        order_count = orders.len()
    ))]
    pub fn aggregate_all(
        &self,
        date: NaiveDate,
        products: &[Product],
        subscriptions: &[Subscription],
        orders: &[Order],
    ) -> Vec<RequirementBreakdown> {
        products
            .iter()
            .map(|p| self.aggregate(date, &p.product_id, subscriptions, orders))
            .collect()
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for RequirementAggregator {
    fn default() -> Self {
        Self::new()
    }
}
