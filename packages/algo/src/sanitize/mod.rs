//! Data Sanitization
//!
//! Numerical hygiene at the feed boundary. The classifier assumes
//! well-formed numeric input; filtering malformed readings is the sample
//! source's responsibility, and these helpers are what the host feed uses
//! to do it.

use crate::types::AccelSample;

/// 检查样本的三个轴是否都是有限值 (非 NaN / Inf)
pub fn is_well_formed(sample: &AccelSample) -> bool {
    sample.x.is_finite() && sample.y.is_finite() && sample.z.is_finite()
}

/// 过滤记录轨迹中的无效样本，保持原有顺序
pub fn sanitize_trace(trace: &[AccelSample]) -> Vec<AccelSample> {
    trace.iter().copied().filter(|s| is_well_formed(s)).collect()
}
