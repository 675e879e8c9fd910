//! Route table and OpenAPI document.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        Components,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        alert::{self, ALERT_TAG},
        auth::{self, AUTH_TAG},
        biometric::{self, BIOMETRIC_TAG},
        comorbidity::{self, COMORBIDITY_TAG},
        computer_diagnosis::{self, COMPUTER_DIAGNOSIS_TAG},
        doctor::{self, DOCTOR_TAG},
        medication::{self, MEDICATION_TAG},
        monitoring_device::{self, MONITORING_DEVICE_TAG},
        patient::{self, PATIENT_TAG},
        phone::{self, PHONE_TAG},
        role::{self, ROLE_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biomonitor API",
        description = "Patient, clinician and biometric monitoring records"
    ),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Login and current user"),
        (name = ROLE_TAG, description = "Role management (admin)"),
        (name = USER_TAG, description = "User management (admin)"),
        (name = DOCTOR_TAG, description = "Doctor records"),
        (name = PATIENT_TAG, description = "Patient records and their links"),
        (name = PHONE_TAG, description = "Phone numbers of patients and doctors"),
        (name = MONITORING_DEVICE_TAG, description = "Monitoring devices"),
        (name = BIOMETRIC_TAG, description = "Biometric readings"),
        (name = ALERT_TAG, description = "Clinical alerts"),
        (name = COMORBIDITY_TAG, description = "Comorbidity catalog"),
        (name = MEDICATION_TAG, description = "Medication catalog"),
        (name = COMPUTER_DIAGNOSIS_TAG, description = "Computer-generated diagnoses")
    )
)]
struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::new);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// Registers every API route, serves Swagger UI at `/swagger` with the OpenAPI
/// document at `/api-docs/openapi.json`, and wraps everything in request tracing
/// and a permissive CORS policy.
pub fn build(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::me))
        .routes(routes!(role::create_role, role::get_roles))
        .routes(routes!(role::get_role_by_id, role::update_role, role::delete_role))
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(user::get_user_by_id, user::update_user, user::delete_user))
        .routes(routes!(doctor::create_doctor, doctor::get_doctors))
        .routes(routes!(
            doctor::get_doctor_by_id,
            doctor::update_doctor,
            doctor::delete_doctor
        ))
        .routes(routes!(patient::create_patient, patient::get_patients))
        .routes(routes!(
            patient::get_patient_by_id,
            patient::update_patient,
            patient::delete_patient
        ))
        .routes(routes!(patient::get_patient_comorbidities))
        .routes(routes!(
            patient::attach_patient_comorbidity,
            patient::detach_patient_comorbidity
        ))
        .routes(routes!(patient::get_patient_medications))
        .routes(routes!(
            patient::attach_patient_medication,
            patient::detach_patient_medication
        ))
        .routes(routes!(patient::get_patient_biometrics))
        .routes(routes!(patient::get_patient_alerts))
        .routes(routes!(phone::create_phone, phone::get_phones))
        .routes(routes!(phone::get_phone_by_id, phone::update_phone, phone::delete_phone))
        .routes(routes!(
            monitoring_device::create_monitoring_device,
            monitoring_device::get_monitoring_devices
        ))
        .routes(routes!(
            monitoring_device::get_monitoring_device_by_id,
            monitoring_device::update_monitoring_device,
            monitoring_device::delete_monitoring_device
        ))
        .routes(routes!(biometric::create_biometric, biometric::get_biometrics))
        .routes(routes!(
            biometric::get_biometric_by_id,
            biometric::update_biometric,
            biometric::delete_biometric
        ))
        .routes(routes!(alert::create_alert, alert::get_alerts))
        .routes(routes!(alert::get_alert_by_id, alert::update_alert, alert::delete_alert))
        .routes(routes!(alert::acknowledge_alert))
        .routes(routes!(comorbidity::create_comorbidity, comorbidity::get_comorbidities))
        .routes(routes!(
            comorbidity::get_comorbidity_by_id,
            comorbidity::update_comorbidity,
            comorbidity::delete_comorbidity
        ))
        .routes(routes!(medication::create_medication, medication::get_medications))
        .routes(routes!(
            medication::get_medication_by_id,
            medication::update_medication,
            medication::delete_medication
        ))
        .routes(routes!(
            computer_diagnosis::create_computer_diagnosis,
            computer_diagnosis::get_computer_diagnoses
        ))
        .routes(routes!(
            computer_diagnosis::get_computer_diagnosis_by_id,
            computer_diagnosis::update_computer_diagnosis,
            computer_diagnosis::delete_computer_diagnosis
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
