//! Store access per entity, plus the shared list routine and request validation.

mod company;
mod contact;
mod crud;
mod skill;
mod validation;

pub use company::{CompanyService, COMPANY_LIST};
pub use contact::{ContactFilters, ContactService, COMPANY_NOT_FOUND, CONTACT_LIST};
pub use crud::CrudService;
pub use skill::{SkillService, DUPLICATE_NAME, SKILL_LIST};
pub use validation::{FieldErrors, RequestValidator, ValidationRule};
