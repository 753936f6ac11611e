//! Module identity registry
//!
//! Known ECU addresses on the diagnostic bus, the part families whose AsBuilt
//! layouts differ between hardware revisions, and [`ModuleKey`], which names
//! the target of a setting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Part number data identifier
pub const DID_PART_NUMBER: u16 = 0xF111;
/// Vehicle manufacturer ECU software number
pub const DID_SOFTWARE_NUMBER: u16 = 0xF188;
/// VIN data identifier
pub const DID_VIN: u16 = 0xF190;

macro_rules! ecu_registry {
    ($($variant:ident = $addr:literal, $abbr:literal;)+) => {
        /// Known module addresses
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Ecu {
            $($variant,)+
        }

        impl Ecu {
            /// Every registered module, in declaration order
            pub const ALL: &'static [Ecu] = &[$(Ecu::$variant,)+];

            /// Diagnostic request address
            pub fn address(&self) -> u16 {
                match self {
                    $(Ecu::$variant => $addr,)+
                }
            }

            /// Full module name
            pub fn name(&self) -> &'static str {
                match self {
                    $(Ecu::$variant => stringify!($variant),)+
                }
            }

            /// Short name used on diagnostic tools (empty when none is established)
            pub fn abbreviation(&self) -> &'static str {
                match self {
                    $(Ecu::$variant => $abbr,)+
                }
            }

            /// Look up a module by address; unknown addresses yield `None`
            pub fn from_address(address: u16) -> Option<Ecu> {
                match address {
                    $($addr => Some(Ecu::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

ecu_registry! {
    AccessoryProtocolInterfaceModule = 0x7D0, "APIM";
    AirConditioningControlModule = 0x7C7, "ACCM";
    AllTerrainControlModule = 0x792, "ATCM";
    AllWheelDriveModule = 0x703, "AWD";
    AntiLockBrakeSystem = 0x760, "ABS";
    AudioControlModule = 0x727, "ACM";
    AudioRearControlUnit = 0x774, "RCU";
    BatteryEnergyControlModule = 0x7E4, "BECM";
    BatteryEnergyControlModuleB = 0x723, "BECMB";
    BodyControlModule = 0x726, "BCM";
    BodyControlModuleC = 0x6F0, "BCMC";
    CruiseControlModule = 0x764, "CCM";
    DoorControlModuleE = 0x7A2, "DCME";
    DoorControlModuleG = 0x7B3, "DCMG";
    DoorControlModuleH = 0x7B4, "DCMH";
    DigitalAudioControlModuleC = 0x7D5, "DACMC";
    DigitalSignalProcessingModule = 0x783, "DSP";
    DirectCurrentAlternatingCurrentConverterModuleA = 0x6F1, "DCACA";
    DirectCurrentDirectCurrentConverterModule = 0x746, "DCDC";
    DriverClimateControlSeatModule = 0x776, "DCSM";
    DriverDoorModule = 0x740, "DDM";
    DriverSeatModule = 0x744, "DSM";
    DriverStatusMonitorCameraModule = 0x7C1, "CMR";
    ElectronicAutomaticTemperatureControl = 0x733, "EATC";
    FrontControlDisplayInterfaceModule = 0x7A5, "FCDIM";
    FrontTrunkReleaseModule = 0x7A1, "FTRM";
    GatewayModule = 0x716, "GWM";
    GearShiftModule = 0x732, "GSM";
    GlobalPositioningSensorModule = 0x701, "GPSM";
    HeadlampControlModule = 0x734, "HCM";
    HeadlampControlModuleB = 0x7C3, "HCMB";
    HeadUpDisplay = 0x7B2, "HUD";
    HeatedSteeringWheelModule = 0x714, "HSWM";
    ImageProcessingModuleA = 0x706, "IPMA";
    ImageProcessingModuleB = 0x7B1, "IPMB";
    InstrumentPanelCluster = 0x720, "IPC";
    LiftgateTrunkModule = 0x775, "PLGM";
    OccupantClassificationSystemModule = 0x765, "OCSM";
    ParkingAidModule = 0x736, "PAM";
    PedestrianAlertControlModule = 0x750, "PACM";
    PowerSteeringControlModule = 0x730, "PSCM";
    PassengerClimateControlSeatModule2 = 0x777, "PCSM2";
    PassengerDoorModule = 0x741, "PDM";
    PassengerFrontSeatModule = 0x7A3, "SCMB";
    PowertrainControlModule = 0x7E0, "PCM";
    RadioControlUnit = 0x7A0, "RCU2";
    RadioTransceiverModule = 0x751, "RTM";
    RearHeatingVentilationAirConditioning = 0x785, "RHVAC";
    RemoteFunctionActuator = 0x731, "RFA";
    RestraintsControlModule = 0x737, "RCM";
    SeatControlModuleF = 0x762, "SCMF";
    SeatControlModuleG = 0x712, "SCMG";
    SeatControlModuleH = 0x713, "SCMH";
    SecondaryOnBoardDiagnosticControlModule = 0x7E2, "SOBDM";
    SecondaryOnBoardDiagnosticControlModuleB = 0x795, "SOBDMB";
    SecondaryOnBoardDiagnosticControlModuleC = 0x7E6, "SOBDMC";
    SideObstacleDetectionControlModuleC = 0x6F2, "SODCMC";
    SideObstacleDetectionControlModuleD = 0x6F3, "SODCMD";
    SideObstacleDetectionControlModuleLeft = 0x7C4, "SODL";
    SideObstacleDetectionControlModuleRight = 0x7C6, "SODR";
    SteeringAngleSensorModule = 0x797, "SASM";
    SteeringColumnControlModule = 0x724, "SCCM";
    SteeringEffortControlModule = 0x7C5, "SECM";
    TelematicsControlUnit = 0x754, "TCU";
    TrailerBrakeControlModule = 0x757, "TBC";
    TrailerModule = 0x791, "TRM";
    VehicleDynamicsModule = 0x721, "VDM";
    WirelessAccessoryChargingModule = 0x725, "WACM";
    Unknown = 0x787, "";
    UnknownBattery = 0x6F5, "";
    UnknownBatteryB = 0x7E7, "";
}

impl fmt::Display for Ecu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:03X})", self.name(), self.address())
    }
}

/// Hardware/firmware families of one module address with distinct layouts
///
/// A family is recognised by a fragment of the module's part number
/// (data identifier 0xF111).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartFamily {
    /// Third generation forward camera
    IpmaQ3,
    /// Fourth generation forward camera
    IpmaQ4,
    /// SYNC 3 infotainment
    ApimSync3,
    /// SYNC 4 infotainment
    ApimSync4,
}

impl PartFamily {
    /// Part number fragment identifying this family
    pub fn discriminator(&self) -> &'static str {
        match self {
            PartFamily::IpmaQ3 => "14F403",
            PartFamily::IpmaQ4 => "14H102",
            PartFamily::ApimSync3 => "14G371",
            PartFamily::ApimSync4 => "14G380",
        }
    }

    /// Module address this family belongs to
    pub fn ecu(&self) -> Ecu {
        match self {
            PartFamily::IpmaQ3 | PartFamily::IpmaQ4 => Ecu::ImageProcessingModuleA,
            PartFamily::ApimSync3 | PartFamily::ApimSync4 => Ecu::AccessoryProtocolInterfaceModule,
        }
    }

    /// Check whether a part number belongs to this family
    pub fn matches(&self, part_number: &str) -> bool {
        part_number.to_ascii_uppercase().contains(self.discriminator())
    }
}

impl fmt::Display for PartFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartFamily::IpmaQ3 => "IPMA Q3",
            PartFamily::IpmaQ4 => "IPMA Q4",
            PartFamily::ApimSync3 => "APIM SYNC 3",
            PartFamily::ApimSync4 => "APIM SYNC 4",
        };
        write!(f, "{}", name)
    }
}

/// Target of a setting: a module, optionally narrowed to one part family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModuleKey {
    Bare(Ecu),
    Qualified(Ecu, PartFamily),
}

impl ModuleKey {
    pub fn ecu(&self) -> Ecu {
        match self {
            ModuleKey::Bare(ecu) | ModuleKey::Qualified(ecu, _) => *ecu,
        }
    }

    pub fn part_family(&self) -> Option<PartFamily> {
        match self {
            ModuleKey::Bare(_) => None,
            ModuleKey::Qualified(_, family) => Some(*family),
        }
    }
}

impl From<Ecu> for ModuleKey {
    fn from(ecu: Ecu) -> Self {
        ModuleKey::Bare(ecu)
    }
}

impl From<PartFamily> for ModuleKey {
    fn from(family: PartFamily) -> Self {
        ModuleKey::Qualified(family.ecu(), family)
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleKey::Bare(ecu) => write!(f, "{}", ecu.name()),
            ModuleKey::Qualified(ecu, family) => write!(f, "{} ({})", ecu.name(), family),
        }
    }
}
