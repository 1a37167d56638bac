// ==========================================
// 订购配送计划系统 - 领域模型层
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 主实体定义
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod customer;
pub mod delivery;
pub mod order;
pub mod procurement;
pub mod product;
pub mod snapshot;
pub mod subscription;
pub mod types;

// 重导出核心类型
pub use customer::Customer;
pub use delivery::{CalendarEntry, RequirementBreakdown};
pub use order::{Order, OrderLine};
pub use procurement::{
    CreateOrderOutcome, ProcurementOrder, ProcurementOrderItem, ProcurementPlanItem, ShortfallRow,
};
pub use product::{InventorySnapshot, Product, Supplier};
pub use snapshot::PlanningSnapshot;
pub use subscription::{DeliveryMode, IrregularEntry, PauseInterval, Subscription};
pub use types::{
    CustomerStatus, DeliveryDayStatus, ModeKind, OrderStatus, ProcurementStatus,
    SubscriptionStatus,
};
