//! Persisted row shapes. Wire formats live in `view_models`.

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub company_id: Option<i64>,
}

/// Contact row joined with its (optional) company.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ContactWithCompany {
    #[sqlx(flatten)]
    pub contact: Contact,
    pub company_name: Option<String>,
    pub company_website: Option<String>,
}

impl ContactWithCompany {
    pub fn company(&self) -> Option<Company> {
        match (self.contact.company_id, &self.company_name) {
            (Some(id), Some(name)) => Some(Company {
                id,
                name: name.clone(),
                website: self.company_website.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}
