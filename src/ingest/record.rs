// ==========================================
// 订购配送计划系统 - 接入原始记录
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 8. 外部接口字段契约
// 用途: 协作方传入的线格式(ISO 日期字符串 + 自由文本枚举),
//       仅在接入流程内存活, 解析后即转领域类型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// SubscriptionRecord - 订购原始记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub subscription_id: String,
    pub customer_id: String,
    pub product_id: String,
    pub unit_price: f64,

    /// 模式标识(FIXED_DAILY / WEEKLY_PATTERN / DAY_BY_DAY / IRREGULAR / ONE_TIME)
    pub mode: String,

    /// 基础量(FIXED_DAILY / WEEKLY_PATTERN / ONE_TIME 使用)
    pub default_quantity: Option<f64>,

    /// 周模式星期索引(周一=0..周日=6)
    pub weekly_pattern: Option<Vec<u8>>,

    /// 一次性窗口(ISO 日期字符串)
    pub window_start: Option<String>,
    pub window_end: Option<String>,

    #[serde(default)]
    pub day_overrides: Vec<DayOverrideRecord>,
    #[serde(default)]
    pub irregular_entries: Vec<IrregularEntryRecord>,
    #[serde(default)]
    pub pause_intervals: Vec<PauseIntervalRecord>,

    pub stop_date: Option<String>,
    pub status: String,
    #[serde(default)]
    pub auto_start: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOverrideRecord {
    pub date: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrregularEntryRecord {
    pub date: String,
    pub quantity: f64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PauseIntervalRecord {
    pub start_date: String,
    /// 缺省表示开放式暂停
    pub end_date: Option<String>,
}

// ==========================================
// CustomerRecord - 客户原始记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: String,
    pub name: Option<String>,
    pub status: String,
}

// ==========================================
// ProductRecord - 产品原始记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,
    pub name: String,
    pub unit: String,
    pub unit_price: f64,
}

// ==========================================
// OrderRecord - 一次性订单原始记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_id: String,
    pub delivery_date: String,
    pub lines: Vec<OrderLineRecord>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineRecord {
    pub product_id: String,
    pub quantity: f64,
}

// ==========================================
// InventoryRecord - 库存快照原始记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product_id: String,
    pub date: String,
    pub closing_stock: f64,
}

// ==========================================
// SupplierRecord - 供应商原始记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub supplier_id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub product_ids: Vec<String>,
}

// ==========================================
// SnapshotRecords - 快照级原始记录包
// ==========================================
// 用途: 一次性接入整份计划输入(对应 PlanningSnapshot)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotRecords {
    #[serde(default)]
    pub customers: Vec<CustomerRecord>,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub subscriptions: Vec<SubscriptionRecord>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub inventory: Vec<InventoryRecord>,
}
