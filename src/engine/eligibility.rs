// ==========================================
// 订购配送计划系统 - 资格判定引擎
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 2.1 Eligibility
// 职责: (客户, 订购) → 是否参与批量生成
// 红线: 资格判定在批量场景先于配送量解析执行;
//       所有否决必须输出 reason
// ==========================================

use crate::domain::customer::Customer;
use crate::domain::subscription::Subscription;
use crate::domain::types::{CustomerStatus, ModeKind, SubscriptionStatus};

// ==========================================
// EligibilityEngine - 资格判定引擎
// ==========================================
pub struct EligibilityEngine {
    // 无状态引擎, 不需要注入依赖
}

impl EligibilityEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 判定订购是否具备生成资格
    ///
    /// # 规则 (Delivery_Engine_Specs 2.1) - 全部满足才通过
    /// 1. 客户 ACTIVE, 或 (一次性订购 且 客户 ∈ {ACTIVE, TRIAL})
    /// 2. 订购状态 ACTIVE
    /// 3. auto_start = true
    pub fn is_eligible(&self, customer: &Customer, subscription: &Subscription) -> bool {
        self.explain(customer, subscription).0
    }

    /// 判定资格并给出逐条原因
    ///
    /// # 返回
    /// - (bool, Vec<String>): 是否通过 + 判定原因
    pub fn explain(
        &self,
        customer: &Customer,
        subscription: &Subscription,
    ) -> (bool, Vec<String>) {
        let mut reasons = Vec::new();
        let mut eligible = true;

        // 规则 1: 客户状态
        let one_time = subscription.mode_kind() == ModeKind::OneTime;
        let customer_ok = match customer.status {
            CustomerStatus::Active => true,
            CustomerStatus::Trial => one_time,
            _ => false,
        };
        if customer_ok {
            if customer.status == CustomerStatus::Trial {
                reasons.push(format!(
                    "CUSTOMER_TRIAL_ONE_TIME: customer_status={}, mode=ONE_TIME",
                    customer.status
                ));
            }
        } else {
            eligible = false;
            reasons.push(format!(
                "CUSTOMER_NOT_ELIGIBLE: customer_status={}, mode={}",
                customer.status,
                subscription.mode_kind()
            ));
        }

        // 规则 2: 订购状态
        if subscription.status != SubscriptionStatus::Active {
            eligible = false;
            reasons.push(format!(
                "SUBSCRIPTION_NOT_ACTIVE: status={}",
                subscription.status
            ));
        }

        // 规则 3: 自动参与标志
        if !subscription.auto_start {
            eligible = false;
            reasons.push("AUTO_START_DISABLED".to_string());
        }

        if eligible && reasons.is_empty() {
            reasons.push("ELIGIBLE".to_string());
        }

        (eligible, reasons)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}
