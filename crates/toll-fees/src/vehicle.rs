//! Vehicle descriptors.
//!
//! Toll exemption is a property of the vehicle category, so a vehicle is a
//! plain tag plus an optional registration kept for log context.

/// Category of a vehicle, as far as tolling is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleType {
    /// Private or company car.
    Car,
    /// Heavy goods vehicle.
    Truck,
    /// Motorcycle or moped (exempt).
    Motorbike,
    /// Agricultural tractor (exempt).
    Tractor,
    /// Ambulance, fire engine, police (exempt).
    Emergency,
    /// Diplomatic registration (exempt).
    Diplomat,
    /// Foreign registration (exempt).
    Foreign,
    /// Armed forces (exempt).
    Military,
}

impl VehicleType {
    /// Return `true` if vehicles of this category are never charged.
    pub fn is_toll_free(&self) -> bool {
        !matches!(self, VehicleType::Car | VehicleType::Truck)
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VehicleType::Car => "Car",
            VehicleType::Truck => "Truck",
            VehicleType::Motorbike => "Motorbike",
            VehicleType::Tractor => "Tractor",
            VehicleType::Emergency => "Emergency",
            VehicleType::Diplomat => "Diplomat",
            VehicleType::Foreign => "Foreign",
            VehicleType::Military => "Military",
        };
        write!(f, "{name}")
    }
}

/// A vehicle passing toll points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    kind: VehicleType,
    registration: Option<String>,
}

impl Vehicle {
    /// An anonymous vehicle of the given category.
    pub fn new(kind: VehicleType) -> Self {
        Self {
            kind,
            registration: None,
        }
    }

    /// Attach a registration plate.
    pub fn with_registration(mut self, registration: impl Into<String>) -> Self {
        self.registration = Some(registration.into());
        self
    }

    /// Vehicle category.
    pub fn kind(&self) -> VehicleType {
        self.kind
    }

    /// Registration plate, if known.
    pub fn registration(&self) -> Option<&str> {
        self.registration.as_deref()
    }

    /// Return `true` if this vehicle is never charged.
    pub fn is_toll_free(&self) -> bool {
        self.kind.is_toll_free()
    }
}

impl From<VehicleType> for Vehicle {
    fn from(kind: VehicleType) -> Self {
        Self::new(kind)
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.registration {
            Some(plate) => write!(f, "{} {plate}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
