use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreatePetInput {
    pub owner_id: Uuid,
    pub name: String,
    pub kind: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub weight: String,
    pub health_status: String,
    pub allergies: Option<String>,
    pub vet_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetPetsFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub kind: Option<String>,
    pub sort: Option<String>, // e.g. "name" or "-created_at"
}
