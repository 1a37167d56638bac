// ==========================================
// 订购配送计划系统 - 计划数据快照
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 1.3 执行模型
// 红线: 引擎不保证跨集合一致性, 快照取数一致性由调用方负责
// ==========================================

use crate::domain::customer::Customer;
use crate::domain::order::Order;
use crate::domain::product::{InventorySnapshot, Product};
use crate::domain::subscription::Subscription;
use serde::{Deserialize, Serialize};

// ==========================================
// PlanningSnapshot - 单次计划计算的输入快照
// ==========================================
// 用途: 日度编排器一次性拿到全部只读输入
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningSnapshot {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub subscriptions: Vec<Subscription>,
    pub orders: Vec<Order>,
    pub inventory: Vec<InventorySnapshot>,
}

impl PlanningSnapshot {
    /// 按 ID 查客户
    pub fn customer_by_id(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.customer_id == customer_id)
    }

    /// 按 ID 查产品
    pub fn product_by_id(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == product_id)
    }
}
