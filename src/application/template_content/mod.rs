//! Template content - turns a case into the placeholder dictionary a
//! document template is filled from.
//!
//! # Module Organization
//!
//! - `mapper` - the `TemplateContentMapper` contract and its input
//! - `common_content` - headers, vocabulary and recipient blocks shared by letters
//! - `holding_period` - statutory dates derived from case dates
//! - `catalog` - template ids and document names
//! - `registry` - lookup of a mapper by document type
//! - `mappers` - one mapper per document type

mod catalog;
mod common_content;
mod holding_period;
mod mapper;
mod registry;

pub mod mappers;

pub use catalog::TemplateCatalog;
pub use common_content::{
    CommonContent, SolicitorKeys, APPLICANT_1_SOLICITOR_KEYS, APPLICANT_2_SOLICITOR_KEYS,
};
pub use holding_period::HoldingPeriodService;
pub use mapper::{ContentRequest, TemplateContentMapper};
pub use registry::MapperRegistry;
