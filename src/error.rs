// ==========================================
// 订购配送计划系统 - 引擎错误类型
// ==========================================
// 依据: Delivery_Engine_Specs_v0.2.md - 7. 错误语义
// 红线: 业务边界情形不抛错(缺数据=不配送);
//       只有结构性错误(日期格式/缺失引用)向上传播
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 引擎错误类型
/// 所有错误信息必须包含显式原因(可解释性)
#[derive(Error, Debug)]
pub enum EngineError {
    // ==========================================
    // 格式错误(致命, 调用方应预校验)
    // ==========================================
    #[error("日期格式错误: field={field}, value={value}")]
    DateFormat { field: String, value: String },

    // ==========================================
    // 定义期校验错误(仅在订购定义写入时产生)
    // ==========================================
    #[error("订购定义校验失败: {reason}")]
    SubscriptionValidation {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    // ==========================================
    // 字段取值错误(非订购记录的枚举字段不合法)
    // ==========================================
    #[error("字段取值无效: field={field}, value={value}")]
    FieldValue { field: String, value: String },

    // ==========================================
    // 引用缺失(采购单创建期的数据完整性信号)
    // ==========================================
    #[error("数据引用缺失: {entity}(id={id})不存在")]
    Lookup { entity: String, id: String },

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    /// 违规类型(如 WEEKLY_PATTERN_EMPTY / NEGATIVE_QUANTITY)
    pub violation_type: String,
    /// 订购ID
    pub subscription_id: String,
    /// 违规原因
    pub reason: String,
    /// 额外信息(可选)
    pub details: Option<serde_json::Value>,
}
