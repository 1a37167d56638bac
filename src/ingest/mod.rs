// ==========================================
// 订购配送计划系统 - 接入层
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 8. 外部接口
// ==========================================
// 职责: 原始记录解析 + 订购定义校验
// 红线: 日期只在接入边界解析一次; 引擎层不见字符串日期
// ==========================================

pub mod mapper;
pub mod record;
pub mod validator;

// 重导出接入入口
pub use mapper::{
    build_snapshot, parse_customer, parse_date, parse_inventory, parse_order, parse_product,
    parse_subscription, parse_supplier,
};
pub use record::{
    CustomerRecord, DayOverrideRecord, InventoryRecord, IrregularEntryRecord, OrderLineRecord,
    OrderRecord, PauseIntervalRecord, ProductRecord, SnapshotRecords, SubscriptionRecord,
    SupplierRecord,
};
pub use validator::SubscriptionValidator;
