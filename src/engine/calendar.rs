// ==========================================
// 订购配送计划系统 - 配送日历引擎
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 3. Calendar Generator
// 职责: 迭代日期窗口, 逐日调用配送量解析, 分类当日状态
// 红线: 纯重算, 不缓存; 条目量必须与解析结果一致
// ==========================================

use crate::config::PlanningConfig;
use crate::domain::delivery::CalendarEntry;
use crate::domain::subscription::Subscription;
use crate::domain::types::DeliveryDayStatus;
use crate::engine::resolver::QuantityResolver;
use chrono::{Duration, NaiveDate};
use tracing::instrument;

// ==========================================
// CalendarGenerator - 配送日历引擎
// ==========================================
pub struct CalendarGenerator {
    resolver: QuantityResolver,
}

impl CalendarGenerator {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            resolver: QuantityResolver::new(),
        }
    }

    /// 生成配送日历(前瞻窗口)
    ///
    /// # 分类优先级 (Delivery_Engine_Specs 3.3)
    /// 1. OVERRIDE: 精确日覆盖规则命中 且 量 > 0
    /// 2. SCHEDULED: 量 > 0
    /// 3. PAUSED: 日期落入暂停区间
    /// 4. NO_DELIVERY: 其他
    ///
    /// # 参数
    /// - `subscription`: 订购
    /// - `start_date`: 窗口起始日(含)
    /// - `day_count`: 窗口天数
    #[instrument(skip(self, subscription), fields(
        subscription_id = %subscription.subscription_id,
        start_date = %start_date,
        day_count = day_count
    ))]
    pub fn generate(
        &self,
        subscription: &Subscription,
        start_date: NaiveDate,
        day_count: u32,
    ) -> Vec<CalendarEntry> {
        let mut entries = Vec::with_capacity(day_count as usize);

        for offset in 0..day_count {
            let date = start_date + Duration::days(i64::from(offset));
            let outcome = self.resolver.resolve_with_reason(date, subscription);

            let status = if outcome.is_exact_date_override() && outcome.quantity > 0.0 {
                DeliveryDayStatus::Override
            } else if outcome.quantity > 0.0 {
                DeliveryDayStatus::Scheduled
            } else if subscription.is_paused_on(date) {
                DeliveryDayStatus::Paused
            } else {
                DeliveryDayStatus::NoDelivery
            };

            entries.push(CalendarEntry {
                date,
                quantity: outcome.quantity,
                status,
            });
        }

        entries
    }

    /// 按配置默认天数生成前瞻日历(窗口天数受配置上限钳制)
    pub fn preview(
        &self,
        subscription: &Subscription,
        start_date: NaiveDate,
        config: &PlanningConfig,
    ) -> Vec<CalendarEntry> {
        let day_count = config.default_calendar_days.min(config.max_calendar_days);
        self.generate(subscription, start_date, day_count)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for CalendarGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subscription::{DeliveryMode, IrregularEntry, PauseInterval};
    use crate::domain::types::SubscriptionStatus;
    use chrono::Utc;
    use std::collections::{BTreeMap, BTreeSet};

    // ==========================================
    // 测试辅助函数
    // ==========================================

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn create_test_subscription(mode: DeliveryMode) -> Subscription {
        Subscription {
            subscription_id: "S001".to_string(),
            customer_id: "C001".to_string(),
            product_id: "P001".to_string(),
            unit_price: 3.5,
            mode,
            day_overrides: BTreeMap::new(),
            irregular_entries: BTreeMap::new(),
            pause_intervals: Vec::new(),
            stop_date: None,
            status: SubscriptionStatus::Active,
            auto_start: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // ==========================================
    // 测试: 基础生成
    // ==========================================

    #[test]
    fn test_generate_window_size_and_dates() {
        let generator = CalendarGenerator::new();
        let sub = create_test_subscription(DeliveryMode::FixedDaily { default_qty: 2.0 });
        let entries = generator.generate(&sub, d(2026, 1, 19), 7);

        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].date, d(2026, 1, 19));
        assert_eq!(entries[6].date, d(2026, 1, 25));
        assert!(entries
            .iter()
            .all(|e| e.quantity == 2.0 && e.status == DeliveryDayStatus::Scheduled));
    }

    #[test]
    fn test_generate_zero_days_is_empty() {
        let generator = CalendarGenerator::new();
        let sub = create_test_subscription(DeliveryMode::FixedDaily { default_qty: 2.0 });
        assert!(generator.generate(&sub, d(2026, 1, 19), 0).is_empty());
    }

    // ==========================================
    // 测试: 状态分类
    // ==========================================

    #[test]
    fn test_status_classification_priority() {
        // 窗口内同时覆盖四种状态
        let mut sub = create_test_subscription(DeliveryMode::WeeklyPattern {
            default_qty: 1.5,
            weekdays: [0u8, 2, 4].into_iter().collect::<BTreeSet<u8>>(),
        });
        // 2026-01-19(周一)..01-25(周日)
        sub.irregular_entries.insert(
            d(2026, 1, 20),
            IrregularEntry {
                quantity: 3.0,
                note: None,
            },
        );
        sub.pause_intervals.push(PauseInterval {
            start: d(2026, 1, 23),
            end: Some(d(2026, 1, 24)),
        });

        let generator = CalendarGenerator::new();
        let entries = generator.generate(&sub, d(2026, 1, 19), 7);

        assert_eq!(entries[0].status, DeliveryDayStatus::Scheduled); // 周一命中
        assert_eq!(entries[1].status, DeliveryDayStatus::Override); // 不定期条目
        assert_eq!(entries[1].quantity, 3.0);
        assert_eq!(entries[2].status, DeliveryDayStatus::Scheduled); // 周三命中
        assert_eq!(entries[3].status, DeliveryDayStatus::NoDelivery); // 周四未命中
        assert_eq!(entries[4].status, DeliveryDayStatus::Paused); // 周五暂停(原本命中)
        assert_eq!(entries[4].quantity, 0.0);
        assert_eq!(entries[5].status, DeliveryDayStatus::Paused); // 周六暂停
        assert_eq!(entries[6].status, DeliveryDayStatus::NoDelivery); // 周日未命中
    }

    #[test]
    fn test_zero_quantity_override_not_classified_override() {
        // 覆盖量=0 时按位置分类, 不标 OVERRIDE
        let mut sub = create_test_subscription(DeliveryMode::FixedDaily { default_qty: 2.0 });
        sub.day_overrides.insert(d(2026, 1, 20), 0.0);
        let generator = CalendarGenerator::new();
        let entries = generator.generate(&sub, d(2026, 1, 20), 1);
        assert_eq!(entries[0].status, DeliveryDayStatus::NoDelivery);
    }

    #[test]
    fn test_stopped_date_in_pause_shows_paused() {
        // 终止与暂停重叠时, 零量日按暂停区间归类
        let mut sub = create_test_subscription(DeliveryMode::FixedDaily { default_qty: 2.0 });
        sub.stop_date = Some(d(2026, 1, 20));
        sub.pause_intervals.push(PauseInterval {
            start: d(2026, 1, 20),
            end: Some(d(2026, 1, 21)),
        });
        let generator = CalendarGenerator::new();
        let entries = generator.generate(&sub, d(2026, 1, 20), 2);
        assert!(entries
            .iter()
            .all(|e| e.quantity == 0.0 && e.status == DeliveryDayStatus::Paused));
    }

    // ==========================================
    // 测试: 一致性与可重入
    // ==========================================

    #[test]
    fn test_calendar_quantity_matches_resolver() {
        // 不变量: 每条日历量 == resolve(date, sub)
        let mut sub = create_test_subscription(DeliveryMode::WeeklyPattern {
            default_qty: 1.5,
            weekdays: [0u8, 3].into_iter().collect::<BTreeSet<u8>>(),
        });
        sub.day_overrides.insert(d(2026, 1, 21), 0.5);
        sub.pause_intervals.push(PauseInterval {
            start: d(2026, 1, 26),
            end: None,
        });

        let generator = CalendarGenerator::new();
        let resolver = QuantityResolver::new();
        let entries = generator.generate(&sub, d(2026, 1, 19), 14);
        for entry in &entries {
            assert_eq!(entry.quantity, resolver.resolve(entry.date, &sub));
        }
    }

    #[test]
    fn test_generate_is_restartable() {
        // 纯重算: 两次生成结果完全一致
        let mut sub = create_test_subscription(DeliveryMode::FixedDaily { default_qty: 1.0 });
        sub.pause_intervals.push(PauseInterval {
            start: d(2026, 2, 1),
            end: Some(d(2026, 2, 3)),
        });
        let generator = CalendarGenerator::new();
        let first = generator.generate(&sub, d(2026, 1, 28), 10);
        let second = generator.generate(&sub, d(2026, 1, 28), 10);
        assert_eq!(first, second);
    }

    // ==========================================
    // 测试: 配置预览
    // ==========================================

    #[test]
    fn test_preview_uses_config_defaults() {
        let generator = CalendarGenerator::new();
        let sub = create_test_subscription(DeliveryMode::FixedDaily { default_qty: 1.0 });
        let config = PlanningConfig::default();
        let entries = generator.preview(&sub, d(2026, 1, 19), &config);
        assert_eq!(entries.len(), config.default_calendar_days as usize);
    }

    #[test]
    fn test_preview_clamped_by_max_days() {
        let generator = CalendarGenerator::new();
        let sub = create_test_subscription(DeliveryMode::FixedDaily { default_qty: 1.0 });
        let config = PlanningConfig {
            default_calendar_days: 500,
            max_calendar_days: 60,
            ..PlanningConfig::default()
        };
        let entries = generator.preview(&sub, d(2026, 1, 19), &config);
        assert_eq!(entries.len(), 60);
    }
}
