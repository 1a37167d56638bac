// ==========================================
// 引擎间集成测试
// ==========================================
// 职责: 验证接入 → 资格判定 → 汇总 → 缺口 → 采购的完整链路
// ==========================================


use delivery_planning::domain::subscription::DeliveryMode;
use delivery_planning::ingest::record::{
    CustomerRecord, InventoryRecord, OrderLineRecord, OrderRecord, PauseIntervalRecord,
    ProductRecord, SnapshotRecords, SubscriptionRecord,
};
use delivery_planning::ingest::{build_snapshot, parse_supplier};
use delivery_planning::{
    CreateOrderOutcome, CustomerStatus, PlanningConfig, PlanningOrchestrator, PlanningSnapshot,
    ProcurementPlanner,
};
use test_helpers::*;

// ==========================================
// 测试辅助函数
// ==========================================

fn subscription_record(
    id: &str,
    customer_id: &str,
    product_id: &str,
    mode: &str,
    default_quantity: Option<f64>,
) -> SubscriptionRecord {
    SubscriptionRecord {
        subscription_id: id.to_string(),
        customer_id: customer_id.to_string(),
        product_id: product_id.to_string(),
        unit_price: 3.0,
        mode: mode.to_string(),
        default_quantity,
        weekly_pattern: None,
        window_start: None,
        window_end: None,
        day_overrides: Vec::new(),
        irregular_entries: Vec::new(),
        pause_intervals: Vec::new(),
        stop_date: None,
        status: "ACTIVE".to_string(),
        auto_start: true,
    }
}

/// 构造一份跨引擎场景的完整记录包
fn scenario_records() -> SnapshotRecords {
    SnapshotRecords {
        customers: vec![
            CustomerRecord {
                customer_id: "C001".to_string(),
                name: Some("正式客户".to_string()),
                status: "ACTIVE".to_string(),
            },
            CustomerRecord {
                customer_id: "C002".to_string(),
                name: Some("试用客户".to_string()),
                status: "TRIAL".to_string(),
            },
        ],
        products: vec![
            ProductRecord {
                product_id: "P001".to_string(),
                name: "鲜奶".to_string(),
                unit: "L".to_string(),
                unit_price: 2.0,
            },
            ProductRecord {
                product_id: "P002".to_string(),
                name: "酸奶".to_string(),
                unit: "kg".to_string(),
                unit_price: 3.5,
            },
        ],
        subscriptions: vec![
            subscription_record("S001", "C001", "P001", "FIXED_DAILY", Some(6.0)),
            // 试用客户的常规订购: 资格判定挡掉
            subscription_record("S002", "C002", "P001", "FIXED_DAILY", Some(100.0)),
            {
                // 暂停中的订购: 解析为 0, 不贡献需求
                let mut record =
                    subscription_record("S003", "C001", "P002", "FIXED_DAILY", Some(4.0));
                record.pause_intervals.push(PauseIntervalRecord {
                    start_date: "2026-01-15".to_string(),
                    end_date: None,
                });
                record
            },
        ],
        orders: vec![
            OrderRecord {
                order_id: "O001".to_string(),
                customer_id: "C001".to_string(),
                delivery_date: "2026-01-20".to_string(),
                lines: vec![OrderLineRecord {
                    product_id: "P001".to_string(),
                    quantity: 0.5,
                }],
                status: "CONFIRMED".to_string(),
            },
            OrderRecord {
                order_id: "O002".to_string(),
                customer_id: "C001".to_string(),
                delivery_date: "2026-01-20".to_string(),
                lines: vec![OrderLineRecord {
                    product_id: "P001".to_string(),
                    quantity: 8.0,
                }],
                status: "CANCELLED".to_string(),
            },
        ],
        inventory: vec![InventoryRecord {
            product_id: "P001".to_string(),
            date: "2026-01-19".to_string(),
            closing_stock: 2.0,
        }],
    }
}

// ==========================================
// 测试1: 完整链路(接入 → 计划 → 成单)
// ==========================================
#[test]
fn test_full_flow_ingest_to_procurement_order() {
    let date = d(2026, 1, 20);
    let snapshot = build_snapshot(&scenario_records()).unwrap();

    // Step 1: 日度计划
    let orchestrator = PlanningOrchestrator::new();
    let result = orchestrator.run(date, &snapshot, &PlanningConfig::default(), Some(10.0));

    // 资格: S001 通过; S002 试用客户常规订购被挡; S003 通过(暂停只影响量)
    assert_eq!(result.eligible_count, 2);
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].subscription_id, "S002");

    // 需求: P001 = 6.0(S001) + 0.5(O001, 取消单不计) = 6.5; P002 = 0(暂停)
    let p001 = result
        .requirements
        .iter()
        .find(|r| r.product_id == "P001")
        .unwrap();
    assert!((p001.total_quantity - 6.5).abs() < 1e-9);
    assert_eq!(p001.contributing_count, 2);
    let p002 = result
        .requirements
        .iter()
        .find(|r| r.product_id == "P002")
        .unwrap();
    assert_eq!(p002.total_quantity, 0.0);

    // 缺口: P001 前一日结存 2.0 → 缺 4.5; P002 无需求不出行
    assert_eq!(result.shortfalls.len(), 1);
    assert_eq!(result.shortfalls[0].product_id, "P001");
    assert!((result.shortfalls[0].shortfall - 4.5).abs() < 1e-9);

    // 计划: 4.5 × 1.1 = 4.95
    assert_eq!(result.plan_items.len(), 1);
    assert!((result.plan_items[0].quantity_with_buffer - 4.95).abs() < 1e-9);

    // Step 2: 按供应商成单
    let planner = ProcurementPlanner::new();
    let supplier = parse_supplier(&delivery_planning::ingest::record::SupplierRecord {
        supplier_id: "SUP01".to_string(),
        name: Some("牧场一".to_string()),
        product_ids: vec!["P001".to_string()],
    })
    .unwrap();
    let outcome = planner
        .create_order(date, &supplier, &result.plan_items, &snapshot.products)
        .unwrap();
    let order = match outcome {
        CreateOrderOutcome::Created(order) => order,
        other => panic!("expected Created, got {:?}", other),
    };
    // 4.95 × 2.0 = 9.9
    assert_eq!(order.items.len(), 1);
    assert!((order.total_amount - 9.9).abs() < 1e-9);
}

// ==========================================
// 测试2: 全链路幂等性
// ==========================================
#[test]
fn test_pipeline_idempotent_over_same_snapshot() {
    let date = d(2026, 1, 20);
    let snapshot = build_snapshot(&scenario_records()).unwrap();
    let orchestrator = PlanningOrchestrator::new();
    let config = PlanningConfig::default();

    let first = orchestrator.run(date, &snapshot, &config, Some(10.0));
    let second = orchestrator.run(date, &snapshot, &config, Some(10.0));

    assert_eq!(first.requirements, second.requirements);
    assert_eq!(first.shortfalls, second.shortfalls);
    assert_eq!(first.plan_items, second.plan_items);
    assert_eq!(first.eligible_count, second.eligible_count);
}

// ==========================================
// 测试3: 空快照安全
// ==========================================
#[test]
fn test_empty_snapshot_yields_empty_plan() {
    let orchestrator = PlanningOrchestrator::new();
    let result = orchestrator.run(
        d(2026, 1, 20),
        &PlanningSnapshot::default(),
        &PlanningConfig::default(),
        None,
    );
    assert_eq!(result.eligible_count, 0);
    assert!(result.requirements.is_empty());
    assert!(result.shortfalls.is_empty());
    assert!(result.plan_items.is_empty());
}

// ==========================================
// 测试4: 试用客户一次性订购参与汇总
// ==========================================
#[test]
fn test_trial_customer_one_time_participates() {
    let date = d(2026, 1, 20);
    let snapshot = PlanningSnapshot {
        customers: vec![create_customer("C002", CustomerStatus::Trial)],
        products: vec![create_product("P001", "L", 2.0)],
        subscriptions: vec![create_subscription(
            "S001",
            "C002",
            "P001",
            DeliveryMode::OneTime {
                window_start: d(2026, 1, 19),
                window_end: d(2026, 1, 21),
                qty: 3.0,
            },
        )],
        orders: vec![],
        inventory: vec![],
    };

    let orchestrator = PlanningOrchestrator::new();
    let result = orchestrator.run(date, &snapshot, &PlanningConfig::default(), Some(0.0));
    assert_eq!(result.eligible_count, 1);
    assert!((result.requirements[0].total_quantity - 3.0).abs() < 1e-9);
    // 无库存 → 全额缺口, 0 缓冲
    assert_eq!(result.plan_items[0].quantity_with_buffer, 3.0);
}
