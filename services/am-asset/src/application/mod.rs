//! 应用层
//!
//! 草稿存储、联动、折旧率解析、校验、条件必填、向导，以及把它们串起来的编辑会话

pub mod depreciation;
pub mod draft_store;
pub mod loader;
pub mod metrics;
pub mod navigator;
pub mod propagation;
pub mod requirement_policy;
pub mod session;
pub mod validation;

pub use depreciation::{DepreciationResolver, UNRESOLVED_MESSAGE, Unresolved};
pub use draft_store::{DraftStore, Settled};
pub use loader::{LoaderEvent, ReferenceLoader, ReferenceProviders};
pub use navigator::{STEPS, SUBMISSION_SECTIONS, SectionNavigator, Transition};
pub use propagation::DependencyPropagator;
pub use requirement_policy::{ConditionalRequirementPolicy, FinanceSnapshot};
pub use session::{EditorMode, EditorSession, EditorSettings, Notification, SubmitOutcome};
pub use validation::{ValidationContext, ValidationEngine};
