use crate::domain::adoption::entities::AdoptionStatus;

#[derive(Debug, Clone)]
pub struct RegisterAdoptionInput {
    pub name: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub shelter: String,
    pub contact_phone: String,
}

impl RegisterAdoptionInput {
    pub fn has_missing_fields(&self) -> bool {
        [
            &self.name,
            &self.breed,
            &self.gender,
            &self.age,
            &self.shelter,
            &self.contact_phone,
        ]
        .iter()
        .any(|field| field.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetAdoptionsFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<AdoptionStatus>,
}
