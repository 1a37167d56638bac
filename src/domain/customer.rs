// ==========================================
// 订购配送计划系统 - 客户领域模型
// ==========================================
// 用途: 资格判定输入, 引擎层只读
// ==========================================

use crate::domain::types::CustomerStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Customer - 客户
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: Option<String>,
    pub status: CustomerStatus,

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
