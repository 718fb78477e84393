//! 分区向导
//!
//! 有序步骤列表 + 受校验保护的前进；后退无条件；提交只能在最后一步发起

use errors::{AppError, AppResult};

use crate::domain::error_map::{ErrorMap, SectionErrors};
use crate::domain::fields::Section;

/// 向导步骤（保险信息与保修信息同屏，只在提交时校验）
pub const STEPS: [Section; 5] = [
    Section::AssetDetails,
    Section::PurchaseInfo,
    Section::FinanceInfo,
    Section::AllotedInfo,
    Section::WarrantyInfo,
];

/// 提交前需要重新校验的分区
pub const SUBMISSION_SECTIONS: [Section; 3] = [
    Section::AssetDetails,
    Section::WarrantyInfo,
    Section::InsuranceInfo,
];

/// 一次导航的结果
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Advanced { from: Section, to: Section },
    Retreated { from: Section, to: Section },
    /// 当前分区有错误，停留原地
    Blocked {
        section: Section,
        errors: SectionErrors,
    },
    /// 已在首步或末步
    AtBoundary(Section),
}

impl Transition {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Transition::Blocked { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionNavigator {
    position: usize,
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        STEPS[self.position]
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == STEPS.len()
    }

    /// 校验当前分区，通过则前进一步
    ///
    /// 末步没有下一步，不做校验
    pub fn next(&mut self, validate: impl FnOnce(Section) -> SectionErrors) -> Transition {
        let from = self.current();
        if self.is_last() {
            return Transition::AtBoundary(from);
        }
        let errors = validate(from);
        if !errors.is_valid() {
            return Transition::Blocked {
                section: from,
                errors,
            };
        }
        self.position += 1;
        Transition::Advanced {
            from,
            to: self.current(),
        }
    }

    pub fn prev(&mut self) -> Transition {
        let from = self.current();
        if self.is_first() {
            return Transition::AtBoundary(from);
        }
        self.position -= 1;
        Transition::Retreated {
            from,
            to: self.current(),
        }
    }

    /// 提交前校验资产信息、保修信息、保险信息
    ///
    /// 不在最后一步时返回 `FailedPrecondition`
    pub fn submission_check(
        &self,
        mut validate: impl FnMut(Section) -> SectionErrors,
    ) -> AppResult<ErrorMap> {
        if !self.is_last() {
            return Err(AppError::failed_precondition(format!(
                "Submit is only available from {}, current section is {}",
                Section::WarrantyInfo,
                self.current()
            )));
        }
        let mut map = ErrorMap::new();
        for section in SUBMISSION_SECTIONS {
            map.set_section(section, validate(section));
        }
        Ok(map)
    }
}
