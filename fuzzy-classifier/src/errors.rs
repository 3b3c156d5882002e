use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ClassifierError {
    #[error("Energy reading must be a finite, non-negative kWh value, got {0}")]
    InvalidEnergy(f64),

    #[error("Appliance '{name}' reports invalid usage of {kwh_used} kWh")]
    InvalidApplianceUsage { name: String, kwh_used: f64 },

    #[error("Appliance '{name}' is invalid: {reason}")]
    InvalidAppliance { name: String, reason: String },

    #[error("No appliances selected")]
    NoAppliances,

    #[error("Price per kWh must be finite and non-negative, got {0}")]
    InvalidPrice(f64),

    #[error("Invalid value '{value}' for {name}")]
    InvalidSetting { name: &'static str, value: String },
}
