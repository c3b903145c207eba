// src/labour.rs
//
// Closed set of service types. The wire form (store JSON, CLI args, GUI
// dropdowns) is the human label, matched exactly.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown service type: {0:?}")]
pub struct UnknownLabour(pub String);

macro_rules! labours {
    ($($variant:ident => $label:literal),+ $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Labour {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Labour {
            /// Every service type, in display order.
            pub const ALL: &'static [Labour] = &[$(Labour::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $(Labour::$variant => $label,)+
                }
            }
        }
    };
}

labours! {
    Plumber => "Plumber",
    Electrician => "Electrician",
    Carpenter => "Carpenter",
    Painter => "Painter",
    Welder => "Welder",
    Bricklayer => "Bricklayer",
    Tiler => "Tiler",
    AcTechnician => "AC Technician",
    Mechanic => "Mechanic",
    Driver => "Driver",
    Cleaner => "Cleaner",
    Gardener => "Gardener",
    Tailor => "Tailor",
    Barber => "Barber",
    Hairdresser => "Hairdresser",
    Cook => "Cook",
    Nanny => "Nanny",
    Security => "Security",
    AluminiumFabricator => "Aluminium Fabricator",
    PopInstaller => "POP Installer",
    SolarInstaller => "Solar Installer",
    WaterTreatment => "Water Treatment",
    Roofing => "Roofing",
    FurnitureMaker => "Furniture Maker",
    EventDecorator => "Event Decorator",
    Catering => "Catering",
    Laundry => "Laundry",
    Other => "Other",
}

impl fmt::Display for Labour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Labour {
    type Err = UnknownLabour;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Labour::ALL
            .iter()
            .copied()
            .find(|l| l.label() == s)
            .ok_or_else(|| UnknownLabour(s!(s)))
    }
}
