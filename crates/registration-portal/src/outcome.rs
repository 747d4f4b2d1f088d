//! 统一结果编码
//!
//! 写操作的结果统一编码为 `{"success": true}` 或
//! `{"success": false, "error": "..."}`。错误信息只保留底层错误的第一行。
//! 双引号的转义只发生一次：经 serde 编码时由 serde_json 完成，
//! 手工拼接载荷时使用 [`sanitize_error_message`]。

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result};

/// 写操作结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub success: bool,
    /// 仅在失败时出现，单行且未转义
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// 由原始错误信息构造失败结果，只保留第一行
    pub fn failure(message: impl AsRef<str>) -> Self {
        Self {
            success: false,
            error: Some(first_error_line(message.as_ref()).to_string()),
        }
    }

    /// 将服务层结果归一化为统一结构
    pub fn from_result(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(e) => Self::from_error(&e),
        }
    }

    pub fn from_error(err: &PortalError) -> Self {
        Self::failure(err.to_string())
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// 转义后的错误信息，用于嵌入手工拼接的载荷
    pub fn escaped_error(&self) -> Option<String> {
        self.error.as_deref().map(sanitize_error_message)
    }

    /// 渲染为 JSON 文本，引号由 serde_json 转义一次
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"success":false}"#.to_string())
    }
}

impl From<Result<()>> for OperationOutcome {
    fn from(result: Result<()>) -> Self {
        Self::from_result(result)
    }
}

/// 取第一个非空行并去掉首尾空白，全部为空白时返回通用描述
fn first_error_line(raw: &str) -> &str {
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("unknown error")
}

/// 清洗错误信息
///
/// 取第一个非空行，再把 `"` 转义为 `\"`。
/// 结果可直接放进双引号字符串，不能再交给 serde 编码。
pub fn sanitize_error_message(raw: &str) -> String {
    first_error_line(raw).replace('"', "\\\"")
}
