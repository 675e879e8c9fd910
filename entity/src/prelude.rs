pub use super::alert::Entity as Alert;
pub use super::biometric::Entity as Biometric;
pub use super::comorbidity::Entity as Comorbidity;
pub use super::computer_diagnosis::Entity as ComputerDiagnosis;
pub use super::doctor::Entity as Doctor;
pub use super::medication::Entity as Medication;
pub use super::monitoring_device::Entity as MonitoringDevice;
pub use super::patient::Entity as Patient;
pub use super::patient_comorbidity::Entity as PatientComorbidity;
pub use super::patient_medication::Entity as PatientMedication;
pub use super::phone::Entity as Phone;
pub use super::role::Entity as Role;
pub use super::user::Entity as User;
