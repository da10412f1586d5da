use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ScheduleAppointmentInput {
    pub owner_id: Uuid,
    /// Display string from the pet picker, "Buddy - Golden Retriever".
    pub pet_info: String,
    pub doctor_name: String,
    pub hospital_name: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetAppointmentsFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
}

/// Pet name part of a picker label: everything before the first " - ",
/// taken as-is with no whitespace trimming.
pub fn pet_name_from_info(pet_info: &str) -> &str {
    pet_info
        .split_once(" - ")
        .map_or(pet_info, |(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_name_from_info() {
        assert_eq!(pet_name_from_info("Buddy - Golden Retriever"), "Buddy");
        assert_eq!(pet_name_from_info("Max - Labrador - Mix"), "Max");
        assert_eq!(pet_name_from_info("Luna"), "Luna");
        assert_eq!(pet_name_from_info("Mary-Kate - Beagle"), "Mary-Kate");
    }

    #[test]
    fn test_pet_name_from_info_keeps_whitespace() {
        assert_eq!(pet_name_from_info(" Buddy - Golden Retriever"), " Buddy");
        assert_eq!(pet_name_from_info("Buddy  - Golden Retriever"), "Buddy ");
        assert_eq!(pet_name_from_info("Luna "), "Luna ");
    }
}
