use crate::models::{ContactWithCompany, Skill};
use crate::service::{FieldErrors, RequestValidator, ValidationRule};
use crate::view_models::ContactListViewModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillListViewModel {
    pub id: i64,
    pub name: String,
}

impl From<&Skill> for SkillListViewModel {
    fn from(entity: &Skill) -> Self {
        SkillListViewModel {
            id: entity.id,
            name: entity.name.clone(),
        }
    }
}

/// Skill plus the contacts that hold it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillDetailViewModel {
    #[serde(flatten)]
    pub skill: SkillListViewModel,
    pub contacts: Vec<ContactListViewModel>,
}

impl SkillDetailViewModel {
    pub fn new(entity: &Skill, contacts: &[ContactWithCompany]) -> Self {
        SkillDetailViewModel {
            skill: entity.into(),
            contacts: contacts.iter().map(ContactListViewModel::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillEditViewModel {
    /// Required, at most 64 characters, unique across skills.
    pub name: Option<String>,
}

impl SkillEditViewModel {
    pub const NAME: ValidationRule = ValidationRule::required("Name", 64);

    pub fn validate(&self, errors: &mut FieldErrors) {
        RequestValidator::validate(&[(Self::NAME, self.name.as_deref())], errors);
    }

    pub fn apply_to(&self, entity: &mut Skill) {
        entity.name = self.name.clone().unwrap_or_default();
    }
}
