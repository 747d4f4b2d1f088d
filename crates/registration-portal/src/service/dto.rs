//! 服务层数据传输对象

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::StudentStatusDocument;

/// 学生不存在时的占位文档内容
pub const STUDENT_NOT_FOUND: &str = "does not exist";

/// 学生状态查询结果
///
/// 学生不存在是正常的否定结果，而不是错误；序列化为
/// `{"student": "does not exist"}`，与存储错误明确区分
#[derive(Debug, Clone, PartialEq)]
pub enum StudentStatus {
    Found(Box<StudentStatusDocument>),
    NotFound,
}

impl StudentStatus {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn document(&self) -> Option<&StudentStatusDocument> {
        match self {
            Self::Found(doc) => Some(doc),
            Self::NotFound => None,
        }
    }

    pub fn into_document(self) -> Option<StudentStatusDocument> {
        match self {
            Self::Found(doc) => Some(*doc),
            Self::NotFound => None,
        }
    }
}

impl From<Option<StudentStatusDocument>> for StudentStatus {
    fn from(doc: Option<StudentStatusDocument>) -> Self {
        match doc {
            Some(doc) => Self::Found(Box::new(doc)),
            None => Self::NotFound,
        }
    }
}

impl Serialize for StudentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Found(doc) => doc.serialize(serializer),
            Self::NotFound => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("student", STUDENT_NOT_FOUND)?;
                map.end()
            }
        }
    }
}
