// ==========================================
// 订购配送计划系统 - 领域类型定义
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 0.2 状态体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订购状态 (Subscription Status)
// ==========================================
// 红线: 状态之外的配置只追加,不原地修改
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Draft,   // 草稿(未设置产品/价格)
    Active,  // 生效中
    Paused,  // 人工整单暂停
    Stopped, // 已终止
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionStatus::Draft => write!(f, "DRAFT"),
            SubscriptionStatus::Active => write!(f, "ACTIVE"),
            SubscriptionStatus::Paused => write!(f, "PAUSED"),
            SubscriptionStatus::Stopped => write!(f, "STOPPED"),
        }
    }
}

impl SubscriptionStatus {
    /// 从字符串解析状态(不合法返回 None,由接入层报校验错误)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Some(SubscriptionStatus::Draft),
            "ACTIVE" => Some(SubscriptionStatus::Active),
            "PAUSED" => Some(SubscriptionStatus::Paused),
            "STOPPED" => Some(SubscriptionStatus::Stopped),
            _ => None,
        }
    }
}

// ==========================================
// 客户状态 (Customer Status)
// ==========================================
// 依据: Delivery_Engine_Specs 2.1 资格判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Trial,   // 试用期(仅一次性订购可生成)
    Active,  // 正式客户
    Paused,  // 暂停服务
    Stopped, // 已停用
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerStatus::Trial => write!(f, "TRIAL"),
            CustomerStatus::Active => write!(f, "ACTIVE"),
            CustomerStatus::Paused => write!(f, "PAUSED"),
            CustomerStatus::Stopped => write!(f, "STOPPED"),
        }
    }
}

impl CustomerStatus {
    /// 从字符串解析状态
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TRIAL" => Some(CustomerStatus::Trial),
            "ACTIVE" => Some(CustomerStatus::Active),
            "PAUSED" => Some(CustomerStatus::Paused),
            "STOPPED" => Some(CustomerStatus::Stopped),
            _ => None,
        }
    }
}

// ==========================================
// 配送模式类别 (Mode Kind)
// ==========================================
// 模式的基础量策略类别,参数携带在 DeliveryMode 变体上
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModeKind {
    FixedDaily,    // 每日固定量
    WeeklyPattern, // 按周模式(周一=0)
    DayByDay,      // 逐日指定
    Irregular,     // 不定期
    OneTime,       // 一次性窗口
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeKind::FixedDaily => write!(f, "FIXED_DAILY"),
            ModeKind::WeeklyPattern => write!(f, "WEEKLY_PATTERN"),
            ModeKind::DayByDay => write!(f, "DAY_BY_DAY"),
            ModeKind::Irregular => write!(f, "IRREGULAR"),
            ModeKind::OneTime => write!(f, "ONE_TIME"),
        }
    }
}

impl ModeKind {
    /// 从字符串解析模式类别
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "FIXED_DAILY" => Some(ModeKind::FixedDaily),
            "WEEKLY_PATTERN" => Some(ModeKind::WeeklyPattern),
            "DAY_BY_DAY" => Some(ModeKind::DayByDay),
            "IRREGULAR" => Some(ModeKind::Irregular),
            "ONE_TIME" => Some(ModeKind::OneTime),
            _ => None,
        }
    }
}

// ==========================================
// 一次性订单状态 (Order Status)
// ==========================================
// 红线: CANCELLED 订单不参与需求汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,   // 待确认
    Confirmed, // 已确认
    Delivered, // 已配送
    Cancelled, // 已取消
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Confirmed => write!(f, "CONFIRMED"),
            OrderStatus::Delivered => write!(f, "DELIVERED"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl OrderStatus {
    /// 从字符串解析状态
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(OrderStatus::Pending),
            "CONFIRMED" => Some(OrderStatus::Confirmed),
            "DELIVERED" => Some(OrderStatus::Delivered),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// 是否已取消
    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

// ==========================================
// 配送日状态 (Delivery Day Status)
// ==========================================
// 依据: Delivery_Engine_Specs 3.3 日历分类优先级
// 优先级: OVERRIDE > SCHEDULED > PAUSED > NO_DELIVERY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryDayStatus {
    Scheduled,  // 按模式正常配送
    Override,   // 指定日覆盖生效
    Paused,     // 处于暂停区间
    NoDelivery, // 无配送
}

impl fmt::Display for DeliveryDayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryDayStatus::Scheduled => write!(f, "SCHEDULED"),
            DeliveryDayStatus::Override => write!(f, "OVERRIDE"),
            DeliveryDayStatus::Paused => write!(f, "PAUSED"),
            DeliveryDayStatus::NoDelivery => write!(f, "NO_DELIVERY"),
        }
    }
}

// ==========================================
// 采购单状态 (Procurement Status)
// ==========================================
// 引擎只产出 PENDING,后续流转由采购协作方负责
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcurementStatus {
    Pending,   // 待下发
    Confirmed, // 供应商已确认
    Received,  // 已入库
    Cancelled, // 已取消
}

impl fmt::Display for ProcurementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcurementStatus::Pending => write!(f, "PENDING"),
            ProcurementStatus::Confirmed => write!(f, "CONFIRMED"),
            ProcurementStatus::Received => write!(f, "RECEIVED"),
            ProcurementStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}
