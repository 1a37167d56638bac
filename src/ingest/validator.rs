// ==========================================
// 订购配送计划系统 - 订购定义校验器
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 7.2 定义期校验
// 职责: 订购定义写入期的完整性校验
// 红线: 只在定义写入期报错; 解析引擎读取期永不因缺数据抛错
// ==========================================

use crate::domain::subscription::{DeliveryMode, Subscription};
use crate::domain::types::SubscriptionStatus;
use crate::error::{EngineError, EngineResult, ValidationViolation};

// ==========================================
// SubscriptionValidator - 订购定义校验器
// ==========================================
pub struct SubscriptionValidator {
    // 无状态校验器, 不需要注入依赖
}

impl SubscriptionValidator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 校验订购定义, 任何违规即失败
    ///
    /// # 返回
    /// - Ok(()): 定义完整
    /// - Err(EngineError::SubscriptionValidation): 含全部违规明细
    pub fn validate(&self, subscription: &Subscription) -> EngineResult<()> {
        let violations = self.collect_violations(subscription);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(EngineError::SubscriptionValidation {
                reason: format!(
                    "subscription_id={} 共 {} 项违规",
                    subscription.subscription_id,
                    violations.len()
                ),
                violations,
            })
        }
    }

    /// 收集全部违规(不短路, 便于一次性反馈)
    pub fn collect_violations(&self, subscription: &Subscription) -> Vec<ValidationViolation> {
        let mut violations = Vec::new();
        let sub_id = &subscription.subscription_id;

        // ===== 模式必备字段 =====
        match &subscription.mode {
            DeliveryMode::WeeklyPattern {
                default_qty,
                weekdays,
            } => {
                if weekdays.is_empty() {
                    violations.push(self.violation(
                        "WEEKLY_PATTERN_EMPTY",
                        sub_id,
                        "周模式缺少星期集合".to_string(),
                        None,
                    ));
                }
                for weekday in weekdays {
                    if *weekday > 6 {
                        violations.push(self.violation(
                            "WEEKDAY_INDEX_OUT_OF_RANGE",
                            sub_id,
                            format!("星期索引越界: {} (合法范围 0-6, 周一=0)", weekday),
                            Some(serde_json::json!({ "weekday": weekday })),
                        ));
                    }
                }
                self.check_quantity(&mut violations, sub_id, "default_qty", *default_qty);
            }
            DeliveryMode::FixedDaily { default_qty } => {
                self.check_quantity(&mut violations, sub_id, "default_qty", *default_qty);
            }
            DeliveryMode::OneTime {
                window_start,
                window_end,
                qty,
            } => {
                if window_start > window_end {
                    violations.push(self.violation(
                        "ONE_TIME_WINDOW_INVERTED",
                        sub_id,
                        format!("一次性窗口起止倒置: {} > {}", window_start, window_end),
                        None,
                    ));
                }
                self.check_quantity(&mut violations, sub_id, "qty", *qty);
            }
            DeliveryMode::DayByDay | DeliveryMode::Irregular => {}
        }

        // ===== 生效状态的商务必备字段 =====
        if subscription.status == SubscriptionStatus::Active {
            if subscription.product_id.trim().is_empty() {
                violations.push(self.violation(
                    "ACTIVE_WITHOUT_PRODUCT",
                    sub_id,
                    "生效订购缺少产品引用".to_string(),
                    None,
                ));
            }
            if !(subscription.unit_price > 0.0) {
                violations.push(self.violation(
                    "ACTIVE_WITHOUT_PRICE",
                    sub_id,
                    format!("生效订购单价非正: {}", subscription.unit_price),
                    None,
                ));
            }
        }

        // ===== 覆盖层量值 =====
        for (date, qty) in &subscription.day_overrides {
            self.check_quantity(
                &mut violations,
                sub_id,
                &format!("day_overrides[{}]", date),
                *qty,
            );
        }
        for (date, entry) in &subscription.irregular_entries {
            self.check_quantity(
                &mut violations,
                sub_id,
                &format!("irregular_entries[{}]", date),
                entry.quantity,
            );
        }

        // ===== 暂停区间 =====
        for pause in &subscription.pause_intervals {
            if let Some(end) = pause.end {
                if pause.start > end {
                    violations.push(self.violation(
                        "PAUSE_INTERVAL_INVERTED",
                        sub_id,
                        format!("暂停区间起止倒置: {} > {}", pause.start, end),
                        None,
                    ));
                }
            }
        }

        violations
    }

    /// 量值检查: 有限且非负
    fn check_quantity(
        &self,
        violations: &mut Vec<ValidationViolation>,
        sub_id: &str,
        field: &str,
        quantity: f64,
    ) {
        if !quantity.is_finite() {
            violations.push(self.violation(
                "NON_FINITE_QUANTITY",
                sub_id,
                format!("{} 非有限数值", field),
                None,
            ));
        } else if quantity < 0.0 {
            violations.push(self.violation(
                "NEGATIVE_QUANTITY",
                sub_id,
                format!("{} 为负: {}", field, quantity),
                None,
            ));
        }
    }

    fn violation(
        &self,
        violation_type: &str,
        sub_id: &str,
        reason: String,
        details: Option<serde_json::Value>,
    ) -> ValidationViolation {
        ValidationViolation {
            violation_type: violation_type.to_string(),
            subscription_id: sub_id.to_string(),
            reason,
            details,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for SubscriptionValidator {
    fn default() -> Self {
        Self::new()
    }
}
