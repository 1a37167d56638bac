// ==========================================
// 需求汇总 + 缺口检测引擎测试
// ==========================================
// 职责: 验证跨订购/订单的汇总可加性与库存缺口口径
// ==========================================


use delivery_planning::domain::subscription::DeliveryMode;
use delivery_planning::{
    OrderStatus, QuantityResolver, RequirementAggregator, ShortfallDetector,
};
use test_helpers::*;

// ==========================================
// 测试1: 汇总场景(订购 + 订单)
// ==========================================
#[test]
fn test_aggregate_two_subscriptions_plus_order() {
    // 场景: 产品 P 两个订购(1.0 / 2.5) + 一张未取消订单 0.5
    // → total=4.0, contributing_count=3
    let date = d(2026, 1, 20);
    let subs = vec![
        create_subscription(
            "S001",
            "C001",
            "P001",
            DeliveryMode::FixedDaily { default_qty: 1.0 },
        ),
        create_subscription(
            "S002",
            "C002",
            "P001",
            DeliveryMode::FixedDaily { default_qty: 2.5 },
        ),
    ];
    let orders = vec![create_order(
        "O001",
        "C003",
        date,
        OrderStatus::Confirmed,
        &[("P001", 0.5)],
    )];

    let aggregator = RequirementAggregator::new();
    let breakdown = aggregator.aggregate(date, "P001", &subs, &orders);
    assert!((breakdown.total_quantity - 4.0).abs() < 1e-9);
    assert_eq!(breakdown.contributing_count, 3);
}

// ==========================================
// 测试2: 可加性(对照逐项解析)
// ==========================================
#[test]
fn test_aggregation_additivity() {
    let date = d(2026, 1, 21); // 周三
    let mut s1 = create_subscription("S001", "C001", "P001", weekly(1.5, &[0, 2, 4]));
    s1.day_overrides.insert(date, 0.75);
    let s2 = create_subscription(
        "S002",
        "C002",
        "P001",
        DeliveryMode::FixedDaily { default_qty: 2.0 },
    );
    let s3 = create_subscription("S003", "C003", "P001", DeliveryMode::DayByDay); // 无条目 → 0
    let subs = vec![s1, s2, s3];
    let orders = vec![
        create_order("O001", "C004", date, OrderStatus::Pending, &[("P001", 0.5)]),
        create_order("O002", "C005", date, OrderStatus::Cancelled, &[("P001", 9.0)]),
    ];

    let resolver = QuantityResolver::new();
    let expected: f64 = subs.iter().map(|s| resolver.resolve(date, s)).sum::<f64>() + 0.5;

    let aggregator = RequirementAggregator::new();
    let breakdown = aggregator.aggregate(date, "P001", &subs, &orders);
    assert!((breakdown.total_quantity - expected).abs() < 1e-9);
    // 正贡献: S001(0.75) + S002(2.0) + O001 行(0.5) = 3
    assert_eq!(breakdown.contributing_count, 3);
}

// ==========================================
// 测试3: 全目录汇总
// ==========================================
#[test]
fn test_aggregate_all_covers_whole_catalog() {
    let date = d(2026, 1, 20);
    let products = vec![
        create_product("P001", "L", 2.0),
        create_product("P002", "kg", 5.0),
    ];
    let subs = vec![create_subscription(
        "S001",
        "C001",
        "P001",
        DeliveryMode::FixedDaily { default_qty: 3.0 },
    )];

    let aggregator = RequirementAggregator::new();
    let all = aggregator.aggregate_all(date, &products, &subs, &[]);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].product_id, "P001");
    assert!((all[0].total_quantity - 3.0).abs() < 1e-9);
    assert_eq!(all[1].product_id, "P002");
    assert_eq!(all[1].total_quantity, 0.0);
}

// ==========================================
// 测试4: 缺口检测口径
// ==========================================
#[test]
fn test_shortfall_snapshot_fallback_chain() {
    let date = d(2026, 1, 20);
    let aggregator = RequirementAggregator::new();
    let detector = ShortfallDetector::new();
    let products = vec![
        create_product("P001", "L", 2.0),  // 当日快照
        create_product("P002", "kg", 5.0), // 仅前一日快照
        create_product("P003", "L", 1.0),  // 无快照
    ];
    let subs = vec![
        create_subscription(
            "S001",
            "C001",
            "P001",
            DeliveryMode::FixedDaily { default_qty: 10.0 },
        ),
        create_subscription(
            "S002",
            "C001",
            "P002",
            DeliveryMode::FixedDaily { default_qty: 8.0 },
        ),
        create_subscription(
            "S003",
            "C001",
            "P003",
            DeliveryMode::FixedDaily { default_qty: 2.5 },
        ),
    ];
    let snapshots = vec![
        create_snapshot("P001", date, 4.0),
        create_snapshot("P002", d(2026, 1, 19), 3.0),
    ];

    let requirements = aggregator.aggregate_all(date, &products, &subs, &[]);
    let rows = detector.detect(date, &requirements, &snapshots, &products);

    assert_eq!(rows.len(), 3);
    // P001: 10 - 4 = 6 (当日快照)
    assert_eq!(rows[0].shortfall, 6.0);
    assert_eq!(rows[0].unit, "L");
    // P002: 8 - 3 = 5 (前一日结存)
    assert_eq!(rows[1].available, 3.0);
    assert_eq!(rows[1].shortfall, 5.0);
    // P003: 2.5 - 0 = 2.5 (无快照按 0)
    assert_eq!(rows[2].available, 0.0);
    assert_eq!(rows[2].shortfall, 2.5);
}

#[test]
fn test_shortfall_exceptions_only_output() {
    // 库存充足的产品不出行(非负性 + 例外输出)
    let date = d(2026, 1, 20);
    let aggregator = RequirementAggregator::new();
    let detector = ShortfallDetector::new();
    let products = vec![
        create_product("P001", "L", 2.0),
        create_product("P002", "L", 2.0),
    ];
    let subs = vec![
        create_subscription(
            "S001",
            "C001",
            "P001",
            DeliveryMode::FixedDaily { default_qty: 1.0 },
        ),
        create_subscription(
            "S002",
            "C001",
            "P002",
            DeliveryMode::FixedDaily { default_qty: 5.0 },
        ),
    ];
    let snapshots = vec![
        create_snapshot("P001", date, 100.0),
        create_snapshot("P002", date, 4.0),
    ];

    let requirements = aggregator.aggregate_all(date, &products, &subs, &[]);
    let rows = detector.detect(date, &requirements, &snapshots, &products);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].product_id, "P002");
    assert!(rows[0].shortfall > 0.0);
}
