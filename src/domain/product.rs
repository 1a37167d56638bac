// ==========================================
// 订购配送计划系统 - 产品/库存/供应商领域模型
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 主数据实体
// 用途: 需求汇总目录、缺口检测库存口径、采购能力过滤
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Product - 产品主数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub unit: String,    // 计量单位(如 "L"/"kg")
    pub unit_price: f64, // 当前采购单价
}

// ==========================================
// InventorySnapshot - 库存快照
// ==========================================
// 口径: 当日结存量(closing stock)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub product_id: String,
    pub date: NaiveDate,
    pub closing_stock: f64,
}

// ==========================================
// Supplier - 供应商
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: String,
    pub name: Option<String>,
    pub product_ids: BTreeSet<String>, // 可供应产品集合
}

impl Supplier {
    /// 是否可供应指定产品
    pub fn supplies(&self, product_id: &str) -> bool {
        self.product_ids.contains(product_id)
    }
}
