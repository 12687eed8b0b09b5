use crate::models::{Contact, ContactWithCompany, Skill};
use crate::service::{FieldErrors, RequestValidator, ValidationRule};
use crate::view_models::{CompanyListViewModel, SkillListViewModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactListViewModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub company_id: Option<i64>,
    /// Null when the contact has no company.
    pub company: Option<CompanyListViewModel>,
}

impl From<&ContactWithCompany> for ContactListViewModel {
    fn from(row: &ContactWithCompany) -> Self {
        let c = &row.contact;
        ContactListViewModel {
            id: c.id,
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            company_id: c.company_id,
            company: row.company().as_ref().map(CompanyListViewModel::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetailViewModel {
    #[serde(flatten)]
    pub contact: ContactListViewModel,
    pub skills: Vec<SkillListViewModel>,
}

impl ContactDetailViewModel {
    pub fn new(row: &ContactWithCompany, skills: &[Skill]) -> Self {
        ContactDetailViewModel {
            contact: row.into(),
            skills: skills.iter().map(SkillListViewModel::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactEditViewModel {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Must reference an existing company when set.
    pub company_id: Option<i64>,
}

impl ContactEditViewModel {
    const FIRST_NAME: ValidationRule = ValidationRule::required("FirstName", 128);
    const LAST_NAME: ValidationRule = ValidationRule::required("LastName", 128);
    const PHONE: ValidationRule = ValidationRule::optional("Phone", 20);
    const EMAIL: ValidationRule = ValidationRule::required("Email", 256);
    pub const COMPANY_ID: &'static str = "CompanyId";

    pub fn validate(&self, errors: &mut FieldErrors) {
        RequestValidator::validate(
            &[
                (Self::FIRST_NAME, self.first_name.as_deref()),
                (Self::LAST_NAME, self.last_name.as_deref()),
                (Self::PHONE, self.phone.as_deref()),
                (Self::EMAIL, self.email.as_deref()),
            ],
            errors,
        );
    }

    pub fn apply_to(&self, entity: &mut Contact) {
        entity.first_name = self.first_name.clone().unwrap_or_default();
        entity.last_name = self.last_name.clone().unwrap_or_default();
        entity.phone = self.phone.clone();
        entity.email = self.email.clone().unwrap_or_default();
        entity.company_id = self.company_id;
    }
}
