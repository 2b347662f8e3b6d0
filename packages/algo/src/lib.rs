//! # jibu-algo - 计步核心算法库
//!
//! 本 crate 提供 Jibu 计步器的纯 Rust 算法实现:
//!
//! - **Step Classification** - 基于垂直轴加速度差的流式步数识别状态机
//! - **Activity Labeling** - Sitting / Walking / Running 活动分类
//! - **Trace Replay** - 记录轨迹的离线回放与批量分析
//!
//! ## 设计理念
//!
//! - **纯函数** - 分类器状态是单一不可变值，由纯函数转换，无隐藏全局量
//! - **时间驱动** - 去抖窗口和不应期按样本时钟判定，与采样频率无关
//! - **充分测试** - 所有阈值边界和时间窗口都有单元测试覆盖
//!
//! ## 模块结构
//!
//! - [`classifier`] - 步数识别状态机 (阈值分类、不应期、去抖窗口)
//! - [`replay`] - 轨迹回放 (单条回放、rayon 并行批量回放)
//! - [`sanitize`] - 数据清洗 (无效样本过滤)
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use jibu_algo::{AccelSample, ActivityStatus, StepClassifier};
//!
//! let mut classifier = StepClassifier::new();
//! let outcome = classifier.process(&AccelSample::new(0.02, 0.75, 9.81, 700));
//! assert!(outcome.step_accepted);
//! assert_eq!(outcome.status, ActivityStatus::Walking);
//! assert_eq!(classifier.step_count(), 1);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod classifier;
pub mod replay;
pub mod sanitize;
pub mod types;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

/// 重新导出分类器
pub use classifier::{classify_delta, StepClassifier};

/// 重新导出轨迹回放
pub use replay::{replay_trace, replay_traces, ReplaySummary};
