// ==========================================
// 订购配送计划系统 - 记录映射器
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 8. 外部接口字段契约
// 职责: 原始记录 → 领域类型, 日期只在此处解析一次
// 红线: 畸形日期是致命格式错误; 订购定义问题走校验器,
//       汇总循环内不得再出现字符串日期解析
// ==========================================

use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderLine};
use crate::domain::product::{InventorySnapshot, Product, Supplier};
use crate::domain::snapshot::PlanningSnapshot;
use crate::domain::subscription::{DeliveryMode, IrregularEntry, PauseInterval, Subscription};
use crate::domain::types::{CustomerStatus, ModeKind, OrderStatus, SubscriptionStatus};
use crate::error::{EngineError, EngineResult, ValidationViolation};
use crate::ingest::record::{
    CustomerRecord, InventoryRecord, OrderRecord, ProductRecord, SnapshotRecords,
    SubscriptionRecord, SupplierRecord,
};
use crate::ingest::validator::SubscriptionValidator;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;

// ==========================================
// 日期解析(接入边界唯一入口)
// ==========================================

/// 解析 ISO 日历日期(YYYY-MM-DD)
///
/// # 错误
/// 畸形输入 → EngineError::DateFormat(致命, 不重试)
pub fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EngineError::DateFormat {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_opt_date(field: &str, value: Option<&str>) -> EngineResult<Option<NaiveDate>> {
    value.map(|v| parse_date(field, v)).transpose()
}

// ==========================================
// 订购记录映射
// ==========================================

/// 订购记录 → 领域订购(含定义期校验)
///
/// # 流程
/// 1. 枚举字段解析(未知标识记为定义违规)
/// 2. 全部日期字段一次性解析(畸形即致命)
/// 3. 覆盖层入 BTreeMap(重复日期记为定义违规)
/// 4. 构造后交 SubscriptionValidator 终检
pub fn parse_subscription(record: &SubscriptionRecord) -> EngineResult<Subscription> {
    let mut violations: Vec<ValidationViolation> = Vec::new();
    let sub_id = &record.subscription_id;

    // 1. 状态
    let status = match SubscriptionStatus::from_str(&record.status) {
        Some(status) => status,
        None => {
            violations.push(definition_violation(
                "STATUS_UNKNOWN",
                sub_id,
                format!("未知订购状态: {}", record.status),
            ));
            SubscriptionStatus::Draft // 占位, 下方必然报错
        }
    };

    // 2. 模式
    let mode = match ModeKind::from_str(&record.mode) {
        Some(ModeKind::FixedDaily) => DeliveryMode::FixedDaily {
            // 基础量缺省按 0 处理(保守: 宁可不送)
            default_qty: record.default_quantity.unwrap_or(0.0),
        },
        Some(ModeKind::WeeklyPattern) => DeliveryMode::WeeklyPattern {
            default_qty: record.default_quantity.unwrap_or(0.0),
            weekdays: record
                .weekly_pattern
                .clone()
                .unwrap_or_default()
                .into_iter()
                .collect(),
        },
        Some(ModeKind::DayByDay) => DeliveryMode::DayByDay,
        Some(ModeKind::Irregular) => DeliveryMode::Irregular,
        Some(ModeKind::OneTime) => match (&record.window_start, &record.window_end) {
            (Some(start), Some(end)) => DeliveryMode::OneTime {
                window_start: parse_date("window_start", start)?,
                window_end: parse_date("window_end", end)?,
                qty: record.default_quantity.unwrap_or(0.0),
            },
            _ => {
                violations.push(definition_violation(
                    "ONE_TIME_WINDOW_MISSING",
                    sub_id,
                    "一次性订购缺少窗口起止日期".to_string(),
                ));
                DeliveryMode::DayByDay // 占位, 下方必然报错
            }
        },
        None => {
            violations.push(definition_violation(
                "MODE_UNKNOWN",
                sub_id,
                format!("未知配送模式: {}", record.mode),
            ));
            DeliveryMode::DayByDay // 占位, 下方必然报错
        }
    };

    // 3. 覆盖层
    let mut day_overrides = BTreeMap::new();
    for item in &record.day_overrides {
        let date = parse_date("day_overrides.date", &item.date)?;
        if day_overrides.insert(date, item.quantity).is_some() {
            violations.push(definition_violation(
                "DUPLICATE_OVERRIDE_DATE",
                sub_id,
                format!("指定日覆盖重复日期: {}", date),
            ));
        }
    }

    let mut irregular_entries = BTreeMap::new();
    for item in &record.irregular_entries {
        let date = parse_date("irregular_entries.date", &item.date)?;
        let entry = IrregularEntry {
            quantity: item.quantity,
            note: item.note.clone(),
        };
        if irregular_entries.insert(date, entry).is_some() {
            violations.push(definition_violation(
                "DUPLICATE_IRREGULAR_DATE",
                sub_id,
                format!("不定期条目重复日期: {}", date),
            ));
        }
    }

    // 4. 暂停与终止
    let mut pause_intervals = Vec::with_capacity(record.pause_intervals.len());
    for item in &record.pause_intervals {
        pause_intervals.push(PauseInterval {
            start: parse_date("pause_intervals.start_date", &item.start_date)?,
            end: parse_opt_date("pause_intervals.end_date", item.end_date.as_deref())?,
        });
    }
    let stop_date = parse_opt_date("stop_date", record.stop_date.as_deref())?;

    if !violations.is_empty() {
        return Err(EngineError::SubscriptionValidation {
            reason: format!("subscription_id={} 共 {} 项违规", sub_id, violations.len()),
            violations,
        });
    }

    let now = Utc::now();
    let subscription = Subscription {
        subscription_id: record.subscription_id.clone(),
        customer_id: record.customer_id.clone(),
        product_id: record.product_id.clone(),
        unit_price: record.unit_price,
        mode,
        day_overrides,
        irregular_entries,
        pause_intervals,
        stop_date,
        status,
        auto_start: record.auto_start,
        created_at: now,
        updated_at: now,
    };

    SubscriptionValidator::new().validate(&subscription)?;
    Ok(subscription)
}

fn definition_violation(violation_type: &str, sub_id: &str, reason: String) -> ValidationViolation {
    ValidationViolation {
        violation_type: violation_type.to_string(),
        subscription_id: sub_id.to_string(),
        reason,
        details: None,
    }
}

// ==========================================
// 其余记录映射
// ==========================================

/// 客户记录 → 领域客户
pub fn parse_customer(record: &CustomerRecord) -> EngineResult<Customer> {
    let status =
        CustomerStatus::from_str(&record.status).ok_or_else(|| EngineError::FieldValue {
            field: "customer.status".to_string(),
            value: record.status.clone(),
        })?;
    let now = Utc::now();
    Ok(Customer {
        customer_id: record.customer_id.clone(),
        name: record.name.clone(),
        status,
        created_at: now,
        updated_at: now,
    })
}

/// 产品记录 → 产品主数据
pub fn parse_product(record: &ProductRecord) -> EngineResult<Product> {
    Ok(Product {
        product_id: record.product_id.clone(),
        name: record.name.clone(),
        unit: record.unit.clone(),
        unit_price: record.unit_price,
    })
}

/// 订单记录 → 一次性订单
pub fn parse_order(record: &OrderRecord) -> EngineResult<Order> {
    let status = OrderStatus::from_str(&record.status).ok_or_else(|| EngineError::FieldValue {
        field: "order.status".to_string(),
        value: record.status.clone(),
    })?;
    let now = Utc::now();
    Ok(Order {
        order_id: record.order_id.clone(),
        customer_id: record.customer_id.clone(),
        delivery_date: parse_date("order.delivery_date", &record.delivery_date)?,
        lines: record
            .lines
            .iter()
            .map(|line| OrderLine {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
            })
            .collect(),
        status,
        created_at: now,
        updated_at: now,
    })
}

/// 库存记录 → 库存快照
pub fn parse_inventory(record: &InventoryRecord) -> EngineResult<InventorySnapshot> {
    Ok(InventorySnapshot {
        product_id: record.product_id.clone(),
        date: parse_date("inventory.date", &record.date)?,
        closing_stock: record.closing_stock,
    })
}

/// 供应商记录 → 供应商
pub fn parse_supplier(record: &SupplierRecord) -> EngineResult<Supplier> {
    Ok(Supplier {
        supplier_id: record.supplier_id.clone(),
        name: record.name.clone(),
        product_ids: record.product_ids.iter().cloned().collect(),
    })
}

/// 快照级记录包 → 计划快照(任一记录失败即整体失败)
pub fn build_snapshot(records: &SnapshotRecords) -> EngineResult<PlanningSnapshot> {
    Ok(PlanningSnapshot {
        customers: records
            .customers
            .iter()
            .map(parse_customer)
            .collect::<EngineResult<Vec<_>>>()?,
        products: records
            .products
            .iter()
            .map(parse_product)
            .collect::<EngineResult<Vec<_>>>()?,
        subscriptions: records
            .subscriptions
            .iter()
            .map(parse_subscription)
            .collect::<EngineResult<Vec<_>>>()?,
        orders: records
            .orders
            .iter()
            .map(parse_order)
            .collect::<EngineResult<Vec<_>>>()?,
        inventory: records
            .inventory
            .iter()
            .map(parse_inventory)
            .collect::<EngineResult<Vec<_>>>()?,
    })
}
