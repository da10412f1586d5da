use uuid::Uuid;

use super::*;
use crate::domain::{
    adoption::{
        entities::AdoptionStatus,
        ports::AdoptionService,
        value_objects::{GetAdoptionsFilter, RegisterAdoptionInput},
    },
    appointment::{
        entities::AppointmentStatus,
        ports::AppointmentService,
        value_objects::{GetAppointmentsFilter, ScheduleAppointmentInput},
    },
    common::{DatabaseConfig, DemoConfig},
    dashboard::ports::DashboardService,
    diet_plan::{
        ports::DietPlanService,
        rules::UNIVERSAL_HAZARDS,
        value_objects::{AgeTier, GenerateDietPlanInput, GetDietPlansFilter, SaveDietPlanInput},
    },
    health::ports::HealthCheckService,
    pet::{
        ports::PetService,
        value_objects::{CreatePetInput, GetPetsFilter},
    },
};

async fn service(seed_data: bool) -> (PawcareService, Uuid) {
    let owner_id = Uuid::new_v4();
    let service = create_service(PawcareConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
        },
        demo: DemoConfig {
            owner_id,
            seed_data,
        },
    })
    .await
    .expect("in-memory database");

    (service, owner_id)
}

fn save_input(owner_id: Uuid, pet_name: &str) -> SaveDietPlanInput {
    SaveDietPlanInput {
        owner_id,
        pet_name: pet_name.to_string(),
        age: "3".to_string(),
        breed: "Golden Retriever".to_string(),
        condition: "overweight".to_string(),
    }
}

#[tokio::test]
async fn test_seed_demo_data_once() {
    let (service, owner_id) = service(true).await;

    seed_demo_data(&service, owner_id).await.unwrap();

    let pets = service
        .get_pets(owner_id, GetPetsFilter::default())
        .await
        .unwrap();
    let mut names: Vec<&str> = pets.iter().map(|p| p.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Buddy", "Luna", "Max"]);

    let listings = service
        .get_adoption_listings(GetAdoptionsFilter::default())
        .await
        .unwrap();
    assert_eq!(listings.len(), 3);
    assert!(listings.iter().all(|l| l.status == AdoptionStatus::Available));
}

#[tokio::test]
async fn test_generate_reports_unrecognized_condition() {
    let (service, _) = service(false).await;

    let generated = service.generate_diet_plan(GenerateDietPlanInput {
        pet_name: "Rex".to_string(),
        age: "puppy".to_string(),
        breed: "Beagle".to_string(),
        condition: "Overwieght".to_string(),
    });

    assert_eq!(generated.pet_name, "Rex");
    assert_eq!(generated.age_tier, AgeTier::Young);
    assert_eq!(generated.condition, "Overwieght");
    assert!(!generated.condition_recognized);
    assert_eq!(generated.plan.meals_per_day(), "3-4 meals");
}

#[tokio::test]
async fn test_save_list_get_delete_diet_plan() {
    let (service, owner_id) = service(false).await;

    let saved = service
        .save_diet_plan(save_input(owner_id, "Buddy"))
        .await
        .unwrap();
    assert_eq!(saved.plan.daily_amount(), "Reduce by 20%");

    let fetched = service.get_diet_plan(owner_id, saved.id).await.unwrap();
    assert_eq!(fetched.plan, saved.plan);
    assert_eq!(fetched.pet_name, "Buddy");
    assert!(fetched.plan.avoid_foods().ends_with(
        &UNIVERSAL_HAZARDS
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
    ));

    let plans = service
        .get_diet_plans(owner_id, GetDietPlansFilter::default())
        .await
        .unwrap();
    assert_eq!(plans.len(), 1);

    service.delete_diet_plan(owner_id, saved.id).await.unwrap();
    assert_eq!(
        service.get_diet_plan(owner_id, saved.id).await,
        Err(CoreError::NotFound)
    );
    assert_eq!(
        service.delete_diet_plan(owner_id, saved.id).await,
        Err(CoreError::NotFound)
    );
}

#[tokio::test]
async fn test_diet_plans_default_to_newest_first() {
    let (service, owner_id) = service(false).await;

    let mut saved_ids = Vec::new();
    for name in ["Ace", "Bo", "Cy", "Dot", "Eli", "Fig"] {
        let saved = service
            .save_diet_plan(save_input(owner_id, name))
            .await
            .unwrap();
        saved_ids.push(saved.id);
    }
    saved_ids.reverse();

    let listed: Vec<Uuid> = service
        .get_diet_plans(owner_id, GetDietPlansFilter::default())
        .await
        .unwrap()
        .iter()
        .map(|plan| plan.id)
        .collect();
    assert_eq!(listed, saved_ids);
}

#[tokio::test]
async fn test_diet_plans_are_owner_scoped() {
    let (service, owner_id) = service(false).await;
    let saved = service
        .save_diet_plan(save_input(owner_id, "Buddy"))
        .await
        .unwrap();

    let stranger = Uuid::new_v4();
    assert_eq!(
        service.get_diet_plan(stranger, saved.id).await,
        Err(CoreError::NotFound)
    );
    assert!(
        service
            .get_diet_plans(stranger, GetDietPlansFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_diet_plans_sorted_by_pet_name() {
    let (service, owner_id) = service(false).await;
    for name in ["Max", "Buddy", "Luna"] {
        service.save_diet_plan(save_input(owner_id, name)).await.unwrap();
    }

    let plans = service
        .get_diet_plans(
            owner_id,
            GetDietPlansFilter {
                sort: Some("pet_name".to_string()),
                limit: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let names: Vec<&str> = plans.iter().map(|p| p.pet_name.as_str()).collect();
    assert_eq!(names, vec!["Buddy", "Luna"]);
}

#[tokio::test]
async fn test_pet_diet_plan_uses_stored_profile() {
    let (service, owner_id) = service(true).await;
    let pets = service
        .get_pets(owner_id, GetPetsFilter::default())
        .await
        .unwrap();
    let luna = pets.iter().find(|p| p.name == "Luna").unwrap();

    let generated = service
        .generate_pet_diet_plan(owner_id, luna.id)
        .await
        .unwrap();
    assert_eq!(generated.age_tier, AgeTier::Adult);
    assert!(!generated.condition_recognized);
    assert_eq!(
        generated.plan.recommended_foods().last().map(String::as_str),
        Some("Hairball control formula")
    );

    assert_eq!(
        service
            .generate_pet_diet_plan(owner_id, Uuid::new_v4())
            .await,
        Err(CoreError::NotFound)
    );
}

#[tokio::test]
async fn test_schedule_appointment_by_pet_info() {
    let (service, owner_id) = service(false).await;
    let pet = service
        .create_pet(CreatePetInput {
            owner_id,
            name: "Buddy".to_string(),
            kind: "Dog".to_string(),
            breed: "Golden Retriever".to_string(),
            gender: "Male".to_string(),
            age: "2 years".to_string(),
            weight: "28 kg".to_string(),
            health_status: "excellent".to_string(),
            allergies: None,
            vet_name: None,
        })
        .await
        .unwrap();

    let appointment = service
        .schedule_appointment(ScheduleAppointmentInput {
            owner_id,
            pet_info: "Buddy - Golden Retriever".to_string(),
            doctor_name: "Dr. Sarah Johnson".to_string(),
            hospital_name: "City Vet".to_string(),
            date: "2025-03-14".to_string(),
            time: "10:30".to_string(),
            reason: "Vaccination".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(appointment.pet_id, pet.id);
    assert_eq!(appointment.status, AppointmentStatus::Upcoming);

    let missing = service
        .schedule_appointment(ScheduleAppointmentInput {
            owner_id,
            pet_info: "Ghost - Unknown".to_string(),
            doctor_name: "Dr. Sarah Johnson".to_string(),
            hospital_name: "City Vet".to_string(),
            date: "2025-03-15".to_string(),
            time: "10:30".to_string(),
            reason: "Checkup".to_string(),
        })
        .await;
    assert_eq!(missing, Err(CoreError::PetNotFound));
}

#[tokio::test]
async fn test_appointments_newest_first() {
    let (service, owner_id) = service(true).await;
    for date in ["2025-01-10", "2025-03-01", "2025-02-20"] {
        service
            .schedule_appointment(ScheduleAppointmentInput {
                owner_id,
                pet_info: "Max - Labrador Mix".to_string(),
                doctor_name: "Dr. Emily Rodriguez".to_string(),
                hospital_name: "Bay Vet".to_string(),
                date: date.to_string(),
                time: "09:00".to_string(),
                reason: "Checkup".to_string(),
            })
            .await
            .unwrap();
    }

    let appointments = service
        .get_appointments(owner_id, GetAppointmentsFilter::default())
        .await
        .unwrap();
    let dates: Vec<&str> = appointments.iter().map(|a| a.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-03-01", "2025-02-20", "2025-01-10"]);
}

#[tokio::test]
async fn test_register_adoption_requires_all_fields() {
    let (service, _) = service(false).await;

    let result = service
        .register_for_adoption(RegisterAdoptionInput {
            name: "Bella".to_string(),
            breed: "Beagle".to_string(),
            gender: "Female".to_string(),
            age: "".to_string(),
            shelter: "Happy Paws Rescue".to_string(),
            contact_phone: "+1 (555) 000-0000".to_string(),
        })
        .await;
    assert_eq!(
        result,
        Err(CoreError::Invalid("Missing required fields".to_string()))
    );
}

#[tokio::test]
async fn test_dashboard_stats() {
    let (service, owner_id) = service(true).await;
    service
        .schedule_appointment(ScheduleAppointmentInput {
            owner_id,
            pet_info: "Luna - Persian Cat".to_string(),
            doctor_name: "Dr. Michael Chen".to_string(),
            hospital_name: "Cat Clinic".to_string(),
            date: "2025-04-02".to_string(),
            time: "14:00".to_string(),
            reason: "Dental".to_string(),
        })
        .await
        .unwrap();
    service
        .save_diet_plan(save_input(owner_id, "Luna"))
        .await
        .unwrap();

    let stats = service.get_dashboard_stats(owner_id).await.unwrap();
    assert_eq!(stats.registered_pets, 3);
    assert_eq!(stats.upcoming_appointments, 1);
    assert_eq!(stats.available_adoption, 3);
    assert_eq!(stats.saved_diet_plans, 1);

    let other = service.get_dashboard_stats(Uuid::new_v4()).await.unwrap();
    assert_eq!(other.registered_pets, 0);
    assert_eq!(other.available_adoption, 3);
}

#[tokio::test]
async fn test_readiness_reports_ok() {
    let (service, _) = service(false).await;
    let status = service.readiness().await.unwrap();
    assert_eq!(status.status, "ok");
}
