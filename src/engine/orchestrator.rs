// ==========================================
// 订购配送计划系统 - 引擎编排器
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 1.1 计算主流程
// 用途: 协调资格判定 → 需求汇总 → 缺口检测 → 采购计划
// 红线: 只读快照, 单次调用内完成, 不保留中间状态
// ==========================================

use crate::config::PlanningConfig;
use crate::domain::delivery::RequirementBreakdown;
use crate::domain::procurement::{ProcurementPlanItem, ShortfallRow};
use crate::domain::snapshot::PlanningSnapshot;
use crate::domain::subscription::Subscription;
use crate::engine::eligibility::EligibilityEngine;
use crate::engine::procurement::ProcurementPlanner;
use crate::engine::requirement::RequirementAggregator;
use crate::engine::shortfall::ShortfallDetector;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

// ==========================================
// DailyPlanningResult - 日度计划结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlanningResult {
    pub plan_date: NaiveDate,

    // Requirement Aggregator 输出
    pub requirements: Vec<RequirementBreakdown>,

    // Shortfall Detector 输出
    pub shortfalls: Vec<ShortfallRow>,

    // Procurement Planner 输出
    pub plan_items: Vec<ProcurementPlanItem>,

    // Eligibility 统计
    pub eligible_count: usize,
    pub skipped: Vec<SkippedSubscription>,
}

/// 被资格判定挡掉的订购(可解释性)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedSubscription {
    pub subscription_id: String,
    pub reason: String,
}

// ==========================================
// PlanningOrchestrator - 引擎编排器
// ==========================================
pub struct PlanningOrchestrator {
    eligibility: EligibilityEngine,
    aggregator: RequirementAggregator,
    detector: ShortfallDetector,
    planner: ProcurementPlanner,
}

impl PlanningOrchestrator {
    /// 创建新的编排器实例
    pub fn new() -> Self {
        Self {
            eligibility: EligibilityEngine::new(),
            aggregator: RequirementAggregator::new(),
            detector: ShortfallDetector::new(),
            planner: ProcurementPlanner::new(),
        }
    }

    /// 执行单日完整计划流程
    ///
    /// # 流程
    /// 1. 资格判定: 逐订购联客户, 不合格/缺客户引用的跳过并记原因
    /// 2. 需求汇总: 按产品目录汇总合格订购 + 未取消订单行
    /// 3. 缺口检测: 与库存快照比对, 例外输出
    /// 4. 采购计划: 缺口加缓冲成计划行(供应商成单另行调用)
    ///
    /// # 参数
    /// - `date`: 计划日期
    /// - `snapshot`: 只读数据快照(取数一致性由调用方负责)
    /// - `buffer_pct`: 采购缓冲比例; None 时取配置默认值
    #[instrument(skip(self, snapshot, config), fields(
        plan_date = %date,
        subscription_count = snapshot.subscriptions.len(),
        product_count = snapshot.products.len()
    ))]
    pub fn run(
        &self,
        date: NaiveDate,
        snapshot: &PlanningSnapshot,
        config: &PlanningConfig,
        buffer_pct: Option<f64>,
    ) -> DailyPlanningResult {
        // ==========================================
        // 步骤1: Eligibility - 资格判定
        // ==========================================
        debug!("步骤1: 执行资格判定");
        let mut eligible: Vec<Subscription> = Vec::new();
        let mut skipped: Vec<SkippedSubscription> = Vec::new();

        for sub in &snapshot.subscriptions {
            match snapshot.customer_by_id(&sub.customer_id) {
                Some(customer) => {
                    let (ok, reasons) = self.eligibility.explain(customer, sub);
                    if ok {
                        eligible.push(sub.clone());
                    } else {
                        skipped.push(SkippedSubscription {
                            subscription_id: sub.subscription_id.clone(),
                            reason: reasons.join("; "),
                        });
                    }
                }
                None => {
                    // 缺客户引用: 保守跳过, 不中断批量计算
                    warn!(
                        subscription_id = %sub.subscription_id,
                        customer_id = %sub.customer_id,
                        "customer not found in snapshot, subscription skipped"
                    );
                    skipped.push(SkippedSubscription {
                        subscription_id: sub.subscription_id.clone(),
                        reason: format!("CUSTOMER_NOT_FOUND: customer_id={}", sub.customer_id),
                    });
                }
            }
        }

        // ==========================================
        // 步骤2: Requirement Aggregator - 需求汇总
        // ==========================================
        debug!(eligible_count = eligible.len(), "步骤2: 执行需求汇总");
        let requirements =
            self.aggregator
                .aggregate_all(date, &snapshot.products, &eligible, &snapshot.orders);

        // ==========================================
        // 步骤3: Shortfall Detector - 缺口检测
        // ==========================================
        debug!("步骤3: 执行缺口检测");
        let shortfalls =
            self.detector
                .detect(date, &requirements, &snapshot.inventory, &snapshot.products);

        // ==========================================
        // 步骤4: Procurement Planner - 采购计划
        // ==========================================
        let buffer = buffer_pct.unwrap_or(config.default_buffer_pct);
        debug!(buffer_pct = buffer, "步骤4: 生成采购计划");
        let plan_items = self.planner.plan(date, buffer, &shortfalls);

        info!(
            eligible_count = eligible.len(),
            skipped_count = skipped.len(),
            shortfall_count = shortfalls.len(),
            plan_item_count = plan_items.len(),
            "日度计划完成"
        );

        DailyPlanningResult {
            plan_date: date,
            requirements,
            shortfalls,
            plan_items,
            eligible_count: eligible.len(),
            skipped,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PlanningOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
