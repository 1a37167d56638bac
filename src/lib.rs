// ==========================================
// 订购配送计划系统 - 核心库
// ==========================================
// 依据: Delivery_Master_Spec.md - 系统定位
// 技术栈: Rust 纯计算库(无 I/O, 无持久化)
// 系统定位: 配送决策支持引擎 (快照进, 记录出)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 接入层 - 记录解析与定义校验
pub mod ingest;

// 配置层 - 计算默认值
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    CustomerStatus, DeliveryDayStatus, ModeKind, OrderStatus, ProcurementStatus,
    SubscriptionStatus,
};

// 领域实体
pub use domain::{
    CalendarEntry, CreateOrderOutcome, Customer, DeliveryMode, InventorySnapshot, IrregularEntry,
    Order, OrderLine, PauseInterval, PlanningSnapshot, ProcurementOrder, ProcurementOrderItem,
    ProcurementPlanItem, Product, RequirementBreakdown, ShortfallRow, Subscription, Supplier,
};

// 引擎
pub use engine::{
    CalendarGenerator, DailyPlanningResult, EligibilityEngine, PlanningOrchestrator,
    ProcurementPlanner, QuantityResolver, RequirementAggregator, ResolutionOutcome,
    ShortfallDetector,
};

// 接入
pub use ingest::SubscriptionValidator;

// 配置与错误
pub use config::PlanningConfig;
pub use error::{EngineError, EngineResult, ValidationViolation};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "订购配送计划系统";

// ==========================================
// 预编译检查
// ==========================================
