use crate::models::{Company, Skill};
use crate::service::{FieldErrors, RequestValidator, ValidationRule};
use crate::view_models::SkillListViewModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyListViewModel {
    pub id: i64,
    pub name: String,
    pub website: Option<String>,
}

impl From<&Company> for CompanyListViewModel {
    fn from(entity: &Company) -> Self {
        CompanyListViewModel {
            id: entity.id,
            name: entity.name.clone(),
            website: entity.website.clone(),
        }
    }
}

/// Company plus the distinct skills held by its contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetailViewModel {
    #[serde(flatten)]
    pub company: CompanyListViewModel,
    pub skills: Vec<SkillListViewModel>,
}

impl CompanyDetailViewModel {
    pub fn new(entity: &Company, skills: &[Skill]) -> Self {
        CompanyDetailViewModel {
            company: entity.into(),
            skills: skills.iter().map(SkillListViewModel::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyEditViewModel {
    /// Required, at most 128 characters.
    pub name: Option<String>,
    /// At most 128 characters.
    pub website: Option<String>,
}

impl CompanyEditViewModel {
    const NAME: ValidationRule = ValidationRule::required("Name", 128);
    const WEBSITE: ValidationRule = ValidationRule::optional("Website", 128);

    pub fn validate(&self, errors: &mut FieldErrors) {
        RequestValidator::validate(
            &[
                (Self::NAME, self.name.as_deref()),
                (Self::WEBSITE, self.website.as_deref()),
            ],
            errors,
        );
    }

    /// Overwrite every mutable field of `entity`. Call after `validate`.
    pub fn apply_to(&self, entity: &mut Company) {
        entity.name = self.name.clone().unwrap_or_default();
        entity.website = self.website.clone();
    }
}
