use serde::{Deserialize, Serialize};

use crate::domain::entities::resource::{RequiredFields, Resource};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    #[serde(default)]
    pub company_name: String,
    pub business_registration_number: Option<String>,
    pub representative_name: Option<String>,
    pub contact_phone: Option<String>,
    pub memo: Option<String>,
    pub created_at: Option<String>,
}

impl Resource for Company {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyForm {
    pub company_name: String,
    pub business_registration_number: String,
    pub representative_name: String,
    pub contact_phone: String,
    pub memo: String,
}

impl CompanyForm {
    pub fn from_company(company: &Company) -> Self {
        Self {
            company_name: company.company_name.clone(),
            business_registration_number: company
                .business_registration_number
                .clone()
                .unwrap_or_default(),
            representative_name: company.representative_name.clone().unwrap_or_default(),
            contact_phone: company.contact_phone.clone().unwrap_or_default(),
            memo: company.memo.clone().unwrap_or_default(),
        }
    }
}

impl RequiredFields for CompanyForm {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("업체명", &self.company_name),
            ("사업자등록번호", &self.business_registration_number),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyMemoPatch {
    pub memo: String,
}

impl RequiredFields for CompanyMemoPatch {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }
}
