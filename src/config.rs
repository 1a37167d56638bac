// ==========================================
// 订购配送计划系统 - 计划配置
// ==========================================
// 用途: 提供计算默认值; 单次调用可显式覆盖
// ==========================================

use serde::{Deserialize, Serialize};

/// 计划配置(默认值层)
///
/// 说明:
/// - 引擎本身无状态, 配置只是调用方未显式给参时的默认口径。
/// - 序列化兼容缺省字段, 便于外层配置文件只写需要覆盖的键。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// 采购缓冲比例(百分数, 10.0 表示 +10%)
    #[serde(default = "default_buffer_pct")]
    pub default_buffer_pct: f64,

    /// 配送日历预览默认天数
    #[serde(default = "default_calendar_days")]
    pub default_calendar_days: u32,

    /// 配送日历单次生成天数上限(防御调用方误传超大窗口)
    #[serde(default = "default_max_calendar_days")]
    pub max_calendar_days: u32,
}

fn default_buffer_pct() -> f64 {
    10.0
}

fn default_calendar_days() -> u32 {
    30
}

fn default_max_calendar_days() -> u32 {
    366
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            default_buffer_pct: default_buffer_pct(),
            default_calendar_days: default_calendar_days(),
            max_calendar_days: default_max_calendar_days(),
        }
    }
}
