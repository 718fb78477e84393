//! 资产基本信息分区

use common::types::RefId;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PhotoAttachment;

/// 资产基本信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetDetails {
    /// 资产名称
    pub name: String,
    /// 资产编码（AUTO 模式下由系统生成）
    pub code: String,
    /// 资产分类
    pub category: Option<RefId>,
    /// 存放位置
    pub location: Option<RefId>,
    /// 资产状态
    pub status: Option<RefId>,
    /// 品牌
    pub brand: Option<RefId>,
    /// 型号（必须属于所选品牌）
    pub model: Option<RefId>,
    /// 序列号
    pub serial_no: String,
    /// 描述
    pub description: String,
    /// 成色
    pub condition: Option<RefId>,
    /// 照片
    pub photo: Option<PhotoAttachment>,
}
