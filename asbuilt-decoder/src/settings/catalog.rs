//! Built-in setting catalog
//!
//! Known AsBuilt settings, grouped by module. Built once on first use and
//! shared read-only afterwards.

use super::VehicleSetting;
use crate::ecu::{Ecu, ModuleKey, PartFamily};
use std::sync::LazyLock;

static CATALOG: LazyLock<Vec<VehicleSetting>> = LazyLock::new(build);

/// Every known setting, grouped by target module
pub fn all() -> &'static [VehicleSetting] {
    &CATALOG
}

/// Settings for one target
pub fn for_target(target: ModuleKey) -> impl Iterator<Item = &'static VehicleSetting> {
    all().iter().filter(move |setting| setting.target == target)
}

/// Find a setting by display name and target
pub fn find(comment: &str, target: ModuleKey) -> Option<&'static VehicleSetting> {
    all()
        .iter()
        .find(|setting| setting.target == target && setting.comment == comment)
}

const OFF_ON: &[(u64, &str)] = &[(0x0, "Off"), (0x1, "On")];
const UNDEFINED_OFF_ON: &[(u64, &str)] = &[(0x0, "Undefined"), (0x1, "Off"), (0x2, "On")];
const DISABLED_ENABLED: &[(u64, &str)] = &[(0x0, "Disabled"), (0x1, "Enabled")];
const NOT_PRESENT_PRESENT: &[(u64, &str)] = &[(0x0, "Not Present"), (0x1, "Present")];
const NO_YES: &[(u64, &str)] = &[(0x0, "No"), (0x1, "Yes")];
const WITHOUT_WITH: &[(u64, &str)] = &[(0x0, "Without"), (0x1, "With")];
const RELATIVE_ABSOLUTE: &[(u64, &str)] = &[(0x0, "Relative"), (0x1, "Absolute")];
const UNDEFINED_KPH_MPH: &[(u64, &str)] = &[(0x0, "Undefined"), (0x1, "KPH"), (0x2, "MPH")];

// PSCM feature flags occupy a whole byte
const FLAG_BYTE: &[(u64, &str)] = &[(0x00, "Disabled"), (0xFF, "Enabled")];

const FUEL_TYPE: &[(u64, &str)] = &[(0x0, "Gasoline"), (0x1, "Diesel"), (0x2, "CNG"), (0x3, "Electric (BEV)")];
const DRIVETRAIN: &[(u64, &str)] = &[
    (0x00, "FWD"),
    (0x01, "RWD"),
    (0x02, "AWD"),
    (0x03, "4WD"),
    (0x04, "Dually 2WD"),
    (0x05, "Dually 4WD"),
];
const LANE_CHANGE_ASSIST: &[(u64, &str)] = &[(0b00, "Disabled"), (0b01, "Enabled"), (0b10, "Euro NCAP")];

const METRES_PER_INCH: f64 = 0.0254;
const INCHES_PER_CENTIMETRE: f64 = 0.393701;

fn millimetres(raw: u64) -> String {
    format!("{:.2} m", raw as f64 * 0.001)
}

fn centimetres(raw: u64) -> String {
    format!("{:.2} m", raw as f64 * 0.01)
}

fn hundredths_of_inch(raw: u64) -> String {
    format!("{:.2} m", raw as f64 * 0.01 * METRES_PER_INCH)
}

fn centimetres_over_one_metre(raw: u64) -> String {
    format!("{:.2} m", (raw as f64 + 100.0) * 0.01)
}

fn centimetres_over_one_metre_in_inches(raw: u64) -> String {
    format!("{:.2} in", (raw as f64 + 100.0) * INCHES_PER_CENTIMETRE)
}

fn hundreds_of_kilograms(raw: u64) -> String {
    format!("{} kg", raw * 100)
}

fn steering_ratio(raw: u64) -> String {
    format!("{:.2}", raw as f64 * 0.01)
}

/// Full scale of one byte is 100%
fn percent(raw: u64) -> String {
    format!("{:.2}%", raw as f64 * 0.39215)
}

fn degrees(raw: u64) -> String {
    format!("{:.2}°", raw as f64 * 0.006)
}

fn decimal(raw: u64) -> String {
    raw.to_string()
}

/// Stored zero-based
fn plus_one(raw: u64) -> String {
    raw.saturating_add(1).to_string()
}

fn ascii_letter(raw: u64) -> String {
    match u8::try_from(raw) {
        Ok(byte) if byte.is_ascii_graphic() => (byte as char).to_string(),
        _ => format!("Unknown (0x{:02X})", raw),
    }
}

fn inches(value: f64) -> String {
    format!("{:.2} m", value * METRES_PER_INCH)
}

fn build() -> Vec<VehicleSetting> {
    let mut settings = Vec::new();
    settings.extend(ipma_q3());
    settings.extend(ipma_q4());
    settings.extend(ipc());
    settings.extend(pscm());
    settings.extend(abs());
    settings.extend(apim_sync3());
    settings.extend(apim_sync4());
    settings
}

fn ipma_q3() -> Vec<VehicleSetting> {
    let target = ModuleKey::from(PartFamily::IpmaQ3);
    vec![
        VehicleSetting::new("Vehicle", target, 0, 1).with_values(&[
            (0, "None"),
            (1, "B479 (Fiesta)"),
            (2, "B479 (Fiesta ST)"),
            (3, "B515 (EcoSport)"),
            (4, "CD391 (Fusion)"),
            (6, "S550 (Mustang LHD)"),
            (7, "C519 (Focus)"),
            (8, "U553 (Expedition SBW)"),
            (9, "U553 (Expedition LWB)"),
            (10, "V408 (Transit Connect SWB LHD)"),
            (11, "V362 (Tourneo SWB)"),
            (12, "V362 (Tourneo LWB)"),
            (13, "V408 (Transit Connect LWB LHD)"),
            (14, "CD539 (Edge)"),
            (15, "Lincoln MKX / Nautilus"),
            (16, "CD391E (Mondeo)"),
            (17, "C519 (Focus ST)"),
            (18, "P552 (F-150 LWB)"),
            (19, "P552 (F-150 SVT SWB)"),
            (20, "P552 (F-150 SVT LWB)"),
            (21, "P552 (F-150 SVT SWB)"),
            (22, "P552 (F-150 SVT LWB)"),
            (23, "U554 (Lincoln Navigator SWB)"),
            (24, "U554 (Lincoln Navigator LWB)"),
            (25, "B479 (Fiesta ALine)"),
            (26, "V363 (Transit MCA)"),
            (27, "V363 (Transit VKB LWB)"),
            (28, "V363 (Transit Chassis SWB)"),
            (29, "Transit"),
            (30, "V363 (Transit Chassis MWB2)"),
            (31, "V363 (Transit Chassis LWB)"),
            (32, "C519 (Focus ALine)"),
            (33, "P375 (Ranger Wave1)"),
            (34, "375 (Everest Wave1)"),
            (35, "P375 (Ranger Redback Wave1)"),
            (36, "P375 (Ranger Wave2)"),
            (37, "D568 (Taurus)"),
            (38, "CX482 (Escape/Kuga)"),
            (39, "CX483 (Lincoln Corsair)"),
            (40, "U611 (Lincoln Aviator)"),
            (41, "U625 (Explorer)"),
            (42, "CD539C (Edge)"),
            (43, "CD539E (Edge)"),
            (44, "CD390 (Galaxy)"),
            (45, "S550 (Mustang RHD)"),
            (46, "V408 (Transit Connect SWB RHD)"),
            (47, "V408 (Transit Connect LWB RHD)"),
            (48, "P558 (F-Series MCA SWB SRW)"),
            (49, "P558 (F-Series MCA SWB DRW)"),
            (50, "P558 (F-Series MCA MWB SRW)"),
            (51, "P558 (F-Series MCA MWB DRW)"),
            (52, "P558 (F-Series MCA LWB SRW)"),
            (53, "P558 (F-Series MCA LWB DRW)"),
            (54, "P558 (F-Series MCA Chassis SWB SRW)"),
            (55, "P558 (F-Series MCA Chassis SWB DRW)"),
            (56, "P558 (F-Series MCA Chassis MWB SRW)"),
            (57, "P558 (F-Series MCA Chassis MWB DRW)"),
            (58, "P558 (F-Series MCA Chassis LWB DRW)"),
            (59, "CX430 (Bronco Sport OnRoad)"),
            (60, "CX430 (Bronco Sport OffRoad)"),
            (61, "CX482 (Escape/Kuga RHD)"),
            (62, "VN127 (E-Series SWB)"),
            (63, "VN127 (E-Series MWB)"),
            (64, "VN127 (E-Series LWB)"),
            (65, "H567 (F-650/750 LD)"),
            (66, "H567 (F-650/750 MD)"),
            (67, "H567 (F-650/750 HD)"),
            (68, "F59 (LD)"),
            (69, "F59 (HD)"),
            (75, "U725 (Bronco)"),
            (77, "P758 (Maverick)"),
            (80, "CX733 (Mustang Mach-E)"),
            (88, "P702 (F-150 Lightning)"),
            (89, "U553 (Expedition)"),
            (90, "CX483 (Lincoln Corsair)"),
        ]),
        VehicleSetting::new("Distance Alert", target, 0, 2)
            .with_mask(0b1100_0000)
            .with_values(UNDEFINED_OFF_ON),
        VehicleSetting::new("Forward Collision Warning HUD", target, 0, 2)
            .with_mask(0b0011_0000)
            .with_values(&[(0x0, "Undefined"), (0x1, "Off"), (0x2, "On"), (0x3, "Advanced")]),
        VehicleSetting::new("High Beam", target, 0, 2)
            .with_mask(0b0000_1100)
            .with_values(&[(0x0, "Undefined"), (0x1, "Off"), (0x2, "AHBC"), (0x3, "GFHB")]),
        VehicleSetting::new("Lane Departure Warning", target, 0, 2)
            .with_mask(0x01)
            .with_values(OFF_ON),
        VehicleSetting::new("Lane Keeping Aid", target, 0, 3)
            .with_mask(0x80)
            .with_values(OFF_ON),
        VehicleSetting::new("Driver Alert System", target, 0, 3)
            .with_mask(0b0110_0000)
            .with_values(UNDEFINED_OFF_ON),
        VehicleSetting::new("Traffic Sign Recognition", target, 0, 3)
            .with_mask(0x10)
            .with_values(OFF_ON),
        VehicleSetting::new("Traffic Sign Recognition Mode", target, 0, 3)
            .with_mask(0x08)
            .with_values(&[(0x0, "Camera Only"), (0x1, "Fusion")]),
        VehicleSetting::new("Traffic Sign Recognition Feature", target, 0, 3)
            .with_mask(0b0000_0011)
            .with_values(&[(0x0, "Undefined"), (0x1, "Off"), (0x2, "SLOIF"), (0x3, "SLIF")]),
        VehicleSetting::new("LKS Switch", target, 0, 4)
            .with_mask(0b1100_0000)
            .with_values(&[(0x0, "Undefined"), (0x1, "Direct"), (0x2, "Network"), (0x3, "No Switch")]),
        VehicleSetting::new("Pre-Collision Assist Type", target, 0, 4)
            .with_mask(0b0011_0000)
            .with_values(&[(0x0, "Undefined"), (0x1, "Off"), (0x2, "Radar Fusion"), (0x3, "Camera Only")]),
        VehicleSetting::new("Enable ACC", target, 0, 4)
            .with_mask(0b0000_1100)
            .with_values(&[(0x0, "Undefined"), (0x1, "Off"), (0x2, "RadarFusion")]),
        VehicleSetting::new("Driving Side", target, 0, 4)
            .with_mask(0b0000_0011)
            .with_values(&[(0x0, "Undefined"), (0x1, "Right"), (0x2, "Left")]),
        VehicleSetting::new("Region and Country", target, 0, 5).with_mask(0xFFF),
        VehicleSetting::new("Enable TJA", target, 0, 6)
            .with_mask(0b0000_0011)
            .with_values(&[(0x0, "Undefined"), (0x1, "Disabled"), (0x2, "Enabled")]),
        VehicleSetting::new("Windshield Type", target, 0, 7)
            .with_mask(0b0000_0110)
            .with_values(&[(0x0, "Undefined"), (0x1, "Base"), (0x2, "Acoustic"), (0x3, "IR Coated")]),
        // Straddles bytes 7 and 8
        VehicleSetting::new("LKS Actuator", target, 0, 7)
            .with_mask(0x180)
            .with_values(&[(0x0, "Undefined"), (0x1, "Haptic Motor"), (0x2, "EPAS"), (0x3, "AFS")]),
        VehicleSetting::new("Shift by Wire", target, 0, 8)
            .with_mask(0b0000_1100)
            .with_values(UNDEFINED_OFF_ON),
        VehicleSetting::new("Speed Limit Sign Unit", target, 0, 9)
            .with_mask(0b1100_0000)
            .with_values(UNDEFINED_KPH_MPH),
    ]
}

fn ipma_q4() -> Vec<VehicleSetting> {
    let target = ModuleKey::from(PartFamily::IpmaQ4);
    vec![
        VehicleSetting::new("ModuleFeatureCfg_LKS", target, 0, 0)
            .with_mask(0b0000_0110)
            .with_values(&[
                (0x0, "Off"),
                (0x1, "LKAlert"),
                (0x2, "LKAlert+LKAid"),
                (0x3, "LKAlert+LKAid+LKWA"),
            ]),
        VehicleSetting::new("ModuleFeatureCfg_TSR", target, 0, 1)
            .with_mask(0b0011_0000)
            .with_values(&[(0x0, "Off"), (0x1, "SLOIF"), (0x2, "SLIF")]),
        VehicleSetting::new("ModuleFeatureCfg_IACC", target, 0, 1)
            .with_mask(0x10)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("ModuleFeatureCfg_TJA", target, 0, 1)
            .with_mask(0x08)
            .with_values(DISABLED_ENABLED),
        // Inverted flag
        VehicleSetting::new("ModuleFeatureCfg_BLIS", target, 0, 2)
            .with_mask(0x10)
            .with_values(&[(0x0, "Enabled"), (0x1, "Disabled")]),
        VehicleSetting::new("ModuleFeatureCfg_HwyAssist", target, 0, 4)
            .with_mask(0x20)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("MarketCfg_DrivingSide", target, 3, 0)
            .with_mask(0x80)
            .with_values(&[(0x0, "Right Hand Traffic"), (0x1, "Left Hand Traffic")]),
        VehicleSetting::new("MarketCfg_Region", target, 3, 0)
            .with_mask(0b0011_1100)
            .with_values(&[
                (0x0, "Undefined"),
                (0x1, "EU"),
                (0x2, "NA"),
                (0x3, "SA"),
                (0x4, "APA_China"),
                (0x5, "APA"),
                (0x6, "Africa"),
                (0x7, "GCC"),
                (0x8, "Australia_NZ"),
            ]),
        VehicleSetting::new("MarketCfg_SpeedLimitSignUnit", target, 3, 0)
            .with_mask(0b0000_0011)
            .with_values(UNDEFINED_KPH_MPH),
        VehicleSetting::new("MarketCfg_Country", target, 3, 1).with_values(&[
            (0x0, "Rest of World"),
            (0x1, "Europe"),
            (0x2, "Gulf Region"),
            (0x3, "USA"),
            (0x4, "Canada"),
            (0x5, "Japan"),
            (0x6, "China"),
            (0x7, "South Africa"),
            (0x8, "Korea"),
            (0x9, "Australia/Nzl"),
            (0xA, "UK/Ireland"),
        ]),
        VehicleSetting::new("VehicleCfg_SteWhlSide", target, 3, 2)
            .with_mask(0x80)
            .with_values(&[(0x0, "Lefthand Drive"), (0x1, "Righthand Drive")]),
        VehicleSetting::new("VehicleCfg_TransmissionType", target, 13, 0)
            .with_mask(0x08)
            .with_values(&[(0x0, "Automatic"), (0x1, "Manual")]),
        VehicleSetting::new("VehicleCfg_ACCType", target, 15, 0)
            .with_mask(0b0011_0000)
            .with_values(&[(0x0, "Off"), (0x1, "RadarFusion")]),
        VehicleSetting::new("VehicleCfg_WindshieldType", target, 15, 0)
            .with_mask(0b0000_0110)
            .with_values(&[(0x0, "Base"), (0x1, "Acoustic"), (0x2, "IR_Coated")]),
        VehicleSetting::new("VehicleCfg_GearShiftByWire", target, 15, 1)
            .with_mask(0b1100_0000)
            .with_values(&[(0x0, "Not_By_Wire"), (0x1, "Shift_By_Wire"), (0x2, "Range_By_Wire")]),
        VehicleSetting::new("VehicleCfg_Engine", target, 17, 0).with_values(&[
            (0x0, "Undefined"),
            (0x1, "I3_NA"),
            (0x2, "I3_TC_or_SC"),
            (0x3, "I4_NA"),
            (0x4, "I4_TC_or_SC"),
            (0x5, "I5_NA"),
            (0x6, "I5_TC_or_SC"),
            (0x7, "V6_NA"),
            (0x8, "V6_TC_or_SC"),
            (0x9, "V8_NA"),
            (0xA, "V8_TC_or_SC"),
            (0xB, "HEV"),
            (0xC, "PHEV"),
            (0xD, "BEV"),
        ]),
        VehicleSetting::new("VehicleCfg_SteeringRatio", target, 17, 1)
            .with_mask(0xFFF0)
            .with_transform(steering_ratio),
        VehicleSetting::new("VehicleCfg_StartStop", target, 17, 3)
            .with_mask(0x08)
            .with_values(NOT_PRESENT_PRESENT),
        VehicleSetting::new("VehicleCfg_Steer_VehicleType", target, 17, 4),
        // Only the F-150 BEV code has been observed
        VehicleSetting::new("VehicleCfg_VehicleType", target, 19, 5).with_values(&[(0x7, "F-150 BEV")]),
        VehicleSetting::new("VehicleCfg_CCM_VehicleType", target, 19, 7),
        VehicleSetting::new("VehicleCfg_OverallLength", target, 20, 0)
            .with_mask(0xFFFF)
            .with_transform(decimal),
        VehicleSetting::new("VehicleCfg_Wheelbase", target, 20, 2)
            .with_mask(0xFFFF)
            .with_transform(millimetres),
        VehicleSetting::new("VehicleCfg_FrontAxleToBumper", target, 20, 4)
            .with_mask(0xFFFF)
            .with_transform(decimal),
        VehicleSetting::new("VehicleCfg_RearAxleToBumper", target, 20, 6)
            .with_mask(0xFFFF)
            .with_transform(decimal),
        VehicleSetting::new("VehicleCfg_Width", target, 20, 8)
            .with_mask(0xFFFF)
            .with_transform(decimal),
        VehicleSetting::new("VehicleCfg_WidthWithMirror", target, 20, 10)
            .with_mask(0xFFFF)
            .with_transform(decimal),
        VehicleSetting::new("VehicleCfg_FrntTrckWidthCenter", target, 20, 12)
            .with_mask(0xFFFF)
            .with_transform(decimal),
        VehicleSetting::new("VehicleCfg_FrntTrckWidthOutside", target, 20, 14).with_mask(0xFFFF),
        VehicleSetting::new("VehicleCfg_RearTrckWidthCenter", target, 20, 16)
            .with_mask(0xFFFF)
            .with_transform(decimal),
        VehicleSetting::new("VehicleCfg_RearTrckWidthOutside", target, 20, 18)
            .with_mask(0xFFFF)
            .with_transform(decimal),
    ]
}

fn ipc() -> Vec<VehicleSetting> {
    vec![VehicleSetting::new("Display Units", Ecu::InstrumentPanelCluster, 3, 7)
        .with_mask(0x80)
        .with_values(&[(0x0, "MPH"), (0x1, "KPH")])]
}

fn pscm() -> Vec<VehicleSetting> {
    let target = Ecu::PowerSteeringControlModule;
    vec![
        VehicleSetting::new("Tuning Variant Coding", target, 0, 1).with_values(&[
            (0x0, "No Variant Selected (default)"),
            (0x1, "Variant1"),
            (0x2, "Variant2"),
        ]),
        VehicleSetting::new("CAN Multi-Identity", target, 0, 2)
            .with_values(&[(0x0, "CADS 3.5 (default)"), (0x1, "DAT 2.0")]),
        VehicleSetting::new("ESC / ABS / Non-ABS", target, 0, 4).with_values(&[
            (0x0, "Vehicle without ABS"),
            (0x1, "Vehicle with ABS only"),
            (0x2, "Vehicle with ESC and ABS"),
        ]),
        VehicleSetting::new("Active Front Steering Equipped", target, 0, 5).with_values(NOT_PRESENT_PRESENT),
        VehicleSetting::new("Engine Torque Class", target, 0, 6).with_values(&[
            (0x0, "Lowest"),
            (0x1, "Low"),
            (0x2, "Medium"),
            (0x3, "High"),
            (0x4, "Highest"),
        ]),
        VehicleSetting::new("Active Nibble Control (ANC)", target, 1, 1).with_values(FLAG_BYTE),
        VehicleSetting::new("Pull Drift Compensation (PDC)", target, 1, 2).with_values(FLAG_BYTE),
        VehicleSetting::new("Torque Steer Compensation (TSC)", target, 1, 3).with_values(FLAG_BYTE),
        VehicleSetting::new("BPR", target, 1, 4).with_values(FLAG_BYTE),
        VehicleSetting::new("Lane Departure Warning (LDW)", target, 1, 5).with_values(FLAG_BYTE),
        VehicleSetting::new("Lane Keeping Aid (LKA)", target, 1, 6).with_values(FLAG_BYTE),
        VehicleSetting::new("Traffic Jam Assist (TJA)", target, 1, 7).with_values(FLAG_BYTE),
        VehicleSetting::new("Lane Centering Assist (LCA)", target, 1, 8).with_values(FLAG_BYTE),
        // TRG: Trailer Reverse Guidance
        VehicleSetting::new("Trailer Backup Assist (TBA)", target, 1, 9).with_values(&[
            (0x0, "Disabled"),
            (0x1, "Standard"),
            (0x2, "TBA w/ 5th Wheel Enabled"),
            (0x3, "TBA w/ TRG Enabled"),
            (0x4, "TBA w/ 5th Wheel & TRG Enabled"),
        ]),
        VehicleSetting::new("Evasive Steering Assist (ESA)", target, 1, 10).with_values(FLAG_BYTE),
        VehicleSetting::new("HAD", target, 1, 11).with_values(FLAG_BYTE),
        VehicleSetting::new("RF", target, 1, 23).with_values(FLAG_BYTE),
        // Semi-Automatic Parallel Parking / Active Park Assist
        VehicleSetting::new("SAPP / APA", target, 2, 1).with_values(FLAG_BYTE),
        VehicleSetting::new("Active Return", target, 2, 2).with_values(FLAG_BYTE),
        VehicleSetting::new("Soft End Stops", target, 2, 3).with_values(FLAG_BYTE),
        VehicleSetting::new("Start/Stop", target, 2, 4).with_values(&[
            (0x0, "Disabled"),
            (0x1, "Enabled, Angle Inhibit Enabled"),
            (0x2, "Enabled, Angle Inhibit Disabled"),
        ]),
        VehicleSetting::new("DSR", target, 2, 5).with_values(FLAG_BYTE),
        VehicleSetting::new("SDM Equipped", target, 2, 6).with_values(NOT_PRESENT_PRESENT),
    ]
}

fn abs() -> Vec<VehicleSetting> {
    let target = Ecu::AntiLockBrakeSystem;
    vec![
        VehicleSetting::new("Wheel Base", target, 1, 0).with_mask(0xF0).with_values(&[
            (0x1, inches(122.0)),
            (0x2, inches(141.0)),
            (0x3, inches(145.0)),
            (0x4, inches(157.0)),
            (0x5, inches(163.0)),
            (0x7, inches(133.0)),
        ]),
        VehicleSetting::new("Payload", target, 1, 0).with_mask(0x0F).with_values(&[
            (0x1, "Base Payload"),
            (0x2, "Mid Payload Upgrade"),
            (0x3, "Heavy Duty Payload Upgrade"),
        ]),
        VehicleSetting::new("Steering Gear", target, 1, 1)
            .with_mask(0b0000_0011)
            .with_values(&[(0x1, "EPAS 17:1"), (0x2, "EPAS 21:1")]),
        VehicleSetting::new("Tire Size", target, 1, 2)
            .with_mask(0xF0)
            .with_values(&[(0x1, "17/18in"), (0x2, "20in"), (0x3, "22in")]),
        VehicleSetting::new("Cruise Control Mode", target, 1, 5)
            .with_mask(0x0F)
            .with_values(&[(0x2, "Normal"), (0x3, "Adaptive")]),
        VehicleSetting::new("Stop and Go", target, 2, 0)
            .with_mask(0x80)
            .with_values(WITHOUT_WITH),
        VehicleSetting::new("Collision Mitigation by Braking (CMbB)", target, 2, 0)
            .with_mask(0x40)
            .with_values(WITHOUT_WITH),
    ]
}

fn apim_sync3() -> Vec<VehicleSetting> {
    let target = ModuleKey::from(PartFamily::ApimSync3);
    vec![
        VehicleSetting::new("Steering Wheel Angle Sensor (SWAS)", target, 0, 3)
            .with_mask(0x02)
            .with_values(RELATIVE_ABSOLUTE),
        VehicleSetting::new("Brand Identification", target, 0, 5)
            .with_mask(0b1100_0000)
            .with_values(&[(0b00, "Ford"), (0b10, "Lincoln"), (0b11, "Configurable")]),
        VehicleSetting::new("Hybrid (HEV)", target, 0, 5)
            .with_mask(0x20)
            .with_values(NO_YES),
        VehicleSetting::new("Transmission Type", target, 0, 6)
            .with_mask(0x10)
            .with_values(&[(0b0, "Automatic"), (0b1, "Manual")]),
        VehicleSetting::new("Fuel Type", target, 0, 7)
            .with_mask(0b1100_0000)
            .with_values(FUEL_TYPE),
        VehicleSetting::new("Plug-in Hybrid (PHEV)", target, 0, 8)
            .with_mask(0x80)
            .with_values(NO_YES),
        VehicleSetting::new("Common Global Electrical Architecture (CGEA)", target, 0, 9)
            .with_mask(0x80)
            .with_values(&[(0b0, "CGEA 1.2 or C1MCA"), (0b1, "CGEA 1.3")]),
        VehicleSetting::new("Heated Windshield", target, 0, 9)
            .with_mask(0x40)
            .with_values(NO_YES),
        VehicleSetting::new("Country Code (First Letter)", target, 1, 0).with_transform(ascii_letter),
        VehicleSetting::new("Country Code (Second Letter)", target, 1, 1).with_transform(ascii_letter),
        VehicleSetting::new("Vehicle Style", target, 1, 3).with_values(&[
            (0x00, "None"),
            (0x01, "Sedan"),
            (0x02, "Convertible/Coupe"),
            (0x03, "Pickup Truck"),
            (0x04, "SUV/CUV"),
            (0x05, "Large Commercial Van"),
            (0x06, "Hatchback"),
            (0x07, "Wagon"),
            (0x08, "Small Commuter Van"),
            (0x09, "EcoSport"),
            (0x0A, "Fiesta"),
            (0x0B, "Focus"),
            (0x0C, "U611 (Aviator)"),
            (0x0D, "U625 (Explorer)"),
            (0x0E, "CX482 (Escape/Kuga)"),
            (0x0F, "CX483 (Corsair)"),
            (0x10, "CX430 (Bronco/Maverick)"),
        ]),
        VehicleSetting::new("GPS Antenna Location/Mount Type", target, 2, 0)
            .with_mask(0x0F)
            .with_values(&[
                (0x0, "Roof Mount (UK Default)"),
                (0x1, "Intrument Panel Mount (Non-heated Windscreen)"),
                (0x2, "Intrument Panel Mount (Heated Windscreen)"),
                (0x3, "Windshield Mount (Non-heated Windscreen)"),
                (0x4, "Windshield Mount (Heated Windscreen)"),
            ]),
        VehicleSetting::new("Electric Vehicle", target, 2, 1).with_values(&[
            (0x00, "Non-HEV, BEV, PHEV"),
            (0x01, "C344 (C-Max Hybrid)"),
            (0x02, "C346/C519 (Focus Electric)"),
            (0x03, "CD391 (Ford Mondeo/Fusion Hybrid)"),
            (0x04, "CD533 (Lincoln MKZ Hybrid)"),
            (0x05, "U611 (Aviator)"),
            (0x06, "U625 (Explorer)"),
            (0x07, "CX482 (Escape/Kuga)"),
            (0x08, "CX483 (Corsair)"),
        ]),
        VehicleSetting::new("Drivetrain Type", target, 2, 3).with_values(DRIVETRAIN),
        VehicleSetting::new("Bluetooth Vehicle Nameplate ID", target, 3, 4).with_values(&[
            (0x00, "SYNC"),
            (0x01, "Ford Fiesta"),
            (0x02, "Ford Focus"),
            (0x03, "Ford Fusion"),
            (0x04, "Ford C-Max"),
            (0x05, "Ford Taurus"),
            (0x06, "Ford Mustang"),
            (0x07, "Ford EcoSport"),
            (0x08, "Ford Escape"),
            (0x09, "Ford Edge"),
            (0x0A, "Ford Flex"),
            (0x0B, "Ford Explorer"),
            (0x0C, "Ford Expedition"),
            (0x0D, "Ford Ranger"),
            (0x0E, "Ford F-150"),
            (0x0F, "Ford F-250"),
            (0x10, "Ford F-350"),
            (0x11, "Ford F-450"),
            (0x12, "Ford F-550"),
            (0x13, "Ford Transit Connect"),
            (0x14, "Ford Transit"),
            (0x15, "Ford E-150"),
            (0x16, "Ford E-350"),
            (0x17, "Ford E-650"),
            (0x18, "Ford E-750"),
            (0x19, "Lincoln MKZ"),
            (0x1A, "Lincoln MKS"),
            (0x1B, "Lincoln MKC"),
            (0x1C, "Lincoln MKX"),
            (0x1D, "Lincoln MKT"),
            (0x1E, "Lincoln Navigator"),
            (0x1F, "Ford Ka"),
            (0x20, "Ford Fiesta"),
            (0x21, "Ford Transit Courier"),
            (0x22, "Ford B-Max"),
            (0x23, "Ford Grand C-Max"),
            (0x24, "Ford Mondeo"),
            (0x25, "Ford Kuga"),
            (0x26, "Ford S-Max"),
            (0x27, "Ford Galaxy"),
            (0x28, "Ford Figo"),
            (0x29, "Ford Escort"),
            (0x2A, "Ford Falcon"),
            (0x2B, "Ford Everest"),
            (0x2C, "Ford Territory"),
            (0x2D, "Ford Raptor"),
            (0x2E, "Lincoln Continental"),
            (0x2F, "Ford GT"),
            (0x30, "Ford Endeavour"),
            (0x31, "Ford Fiesta ST"),
            (0x32, "Ford Focus ST"),
            (0x33, "Ford Focus RS"),
            (0x34, "Lincoln Aviator"),
            (0x35, "Lincoln Corsair"),
            (0x36, "Ford Endura"),
            (0x37, "Ford Bronco"),
            (0x38, "Lincoln Nautilus"),
            (0x39, "Ford Puma"),
            (0x3A, "Lincoln Aviator Coupe"),
            (0x3B, "Ford Tourneo Connect"),
            (0x3C, "Ford Tourneo Custom"),
            (0x3D, "Shelby GT350"),
            (0x3E, "Shelby GT500"),
            (0x3F, "Ford Bronco Sport"),
            (0x40, "Mustang Mach-E"),
            (0x41, "Ford Maverick"),
            (0x42, "Ford F-600"),
        ]),
        VehicleSetting::new("Front Track", target, 4, 0)
            .with_mask(0xFFFF)
            .with_transform(hundredths_of_inch),
        VehicleSetting::new("Rear Track", target, 4, 2)
            .with_mask(0xFFFF)
            .with_transform(hundredths_of_inch),
        VehicleSetting::new("Wheel Base", target, 4, 4)
            .with_mask(0xFFFF)
            .with_transform(hundredths_of_inch),
        VehicleSetting::new("Vehicle Weight", target, 6, 0).with_transform(hundreds_of_kilograms),
        VehicleSetting::new("Tire Circumference", target, 6, 13).with_transform(centimetres_over_one_metre),
        VehicleSetting::new("Distance from IP to Rear Axle", target, 6, 14)
            .with_mask(0xFFFF)
            .with_transform(centimetres_over_one_metre),
        VehicleSetting::new("ACC Menu", target, 8, 0)
            .with_mask(0x20)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Forward Collision Warning", target, 8, 3)
            .with_mask(0b0110_0000)
            .with_values(&[(0b00, "None"), (0b01, "FCW"), (0b10, "FCW + FDA"), (0b11, "Unused")]),
        VehicleSetting::new("FCW Menu", target, 8, 5)
            .with_mask(0x40)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("FCW Braking", target, 8, 6)
            .with_mask(0x40)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Evasive Steering Assist (ESA)", target, 8, 6)
            .with_mask(0x08)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Lane Change Assist (LCA)", target, 8, 7)
            .with_mask(0b1100_0000)
            .with_values(LANE_CHANGE_ASSIST),
        VehicleSetting::new("Lane Keeping Sensitivity", target, 8, 7)
            .with_mask(0x20)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("ACC Mode", target, 8, 7)
            .with_mask(0x02)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Lane Assist NCAP Aid", target, 8, 10)
            .with_mask(0b0110_0000)
            .with_values(&[
                (0b00, "Disabled"),
                (0b01, "Reduced, Enhanced"),
                (0b10, "Off, Reduced, Enhanced"),
                (0b11, "Off, On"),
            ]),
        VehicleSetting::new("Lane Assist NCAP Alert", target, 8, 10)
            .with_mask(0x18)
            .with_values(&[
                (0b00, "Disabled"),
                (0b01, "High, Normal, Low, Off"),
                (0b10, "On, Off"),
                (0b11, "High, Normal, Low"),
            ]),
    ]
}

fn apim_sync4() -> Vec<VehicleSetting> {
    let target = ModuleKey::from(PartFamily::ApimSync4);
    vec![
        VehicleSetting::new("Steering Angle", target, 0, 5)
            .with_mask(0x10)
            .with_values(&[(0b0, "Pinion"), (0b1, "Wheel")]),
        VehicleSetting::new("Start/Stop Vehicle", target, 0, 7)
            .with_mask(0x10)
            .with_values(&[(0b0, "Non Start/Stop"), (0b1, "Start/Stop")]),
        VehicleSetting::new("Transmission Type", target, 0, 7)
            .with_mask(0x08)
            .with_values(&[(0b0, "Automatic"), (0b1, "Manual")]),
        VehicleSetting::new("Park Brake Type", target, 0, 8)
            .with_mask(0x08)
            .with_values(&[(0b0, "Mechanical"), (0b1, "Electronic")]),
        VehicleSetting::new("Reverse Gear", target, 0, 9)
            .with_mask(0x08)
            .with_values(&[(0b0, "Legacy"), (0b1, "New (GearPos_D_Trg)")]),
        VehicleSetting::new("Architecture Version", target, 0, 11)
            .with_mask(0b0000_0011)
            .with_values(&[(0x1, "FNV2"), (0x2, "FNV3")]),
        VehicleSetting::new("Vehicle Driver Location", target, 1, 0)
            .with_mask(0x40)
            .with_values(&[(0x0, "Left Hand Drive"), (0x1, "Right Hand Drive")]),
        VehicleSetting::new("Brand", target, 1, 0)
            .with_mask(0x20)
            .with_values(&[(0x0, "Ford"), (0x1, "Lincoln")]),
        VehicleSetting::new("Hybrid (HEV)", target, 1, 6)
            .with_mask(0x80)
            .with_values(NO_YES),
        VehicleSetting::new("Plug-in Hybrid (PHEV)", target, 1, 6)
            .with_mask(0x40)
            .with_values(NO_YES),
        VehicleSetting::new("Other Brand", target, 1, 8)
            .with_mask(0b0000_0011)
            .with_values(&[
                (0x0, "Standard (Ford/Lincoln)"),
                (0x1, "Other Brand 1"),
                (0x2, "Other Brand 2"),
                (0x3, "Other Brand 3"),
            ]),
        VehicleSetting::new("Country Code (First Letter)", target, 2, 0).with_transform(ascii_letter),
        VehicleSetting::new("Country Code (Second Letter)", target, 2, 1).with_transform(ascii_letter),
        VehicleSetting::new("Splash Screen", target, 2, 2),
        VehicleSetting::new("Vehicle Style", target, 2, 3).with_values(&[
            (0x00, "Undefined"),
            (0x01, "Sedan - PDC_Generic_Car"),
            (0x02, "Coupe/Convertible"),
            (0x03, "Pickup Truck - PDC_Truck"),
            (0x04, "SUV/CUV"),
            (0x05, "Large Van - PDC_Lg_Comm_Van"),
            (0x06, "Hatchback"),
            (0x07, "Wagon"),
            (0x08, "Small Commuter Van - PDC_Sm_Comm_Van"),
            (0x09, "EcoSport - PDC_EcoSport"),
            (0x0A, "Fiesta - PDC_Fiesta"),
            (0x0B, "Focus - PDC_Focus"),
            (0x0C, "Bronco"),
            (0x0D, "Muscle Car"),
            (0x0E, "Pickup Chassis Cab"),
            (0x0F, "Pickup Box Delete"),
            (0x10, "Van Chassis Cab"),
        ]),
        VehicleSetting::new("Vehicle", target, 2, 5).with_values(&[
            (0x00, "Undefined"),
            (0x01, "C344"),
            (0x02, "C346/C519"),
            (0x03, "CD391"),
            (0x04, "CD533"),
            (0x05, "U611"),
            (0x06, "U625"),
            (0x07, "CX482"),
            (0x08, "CX483"),
            (0x09, "CX727"),
            (0x0A, "P758"),
            (0x0B, "P702"),
            (0x0C, "CD539"),
            (0x0D, "U725"),
            (0x0E, "U540"),
            (0x0F, "CX482N"),
            (0x10, "P558"),
            (0x11, "P702 ICA (Raptor)"),
            (0x12, "U553"),
            (0x13, "U554"),
            (0x14, "CD542"),
            (0x15, "V363"),
            (0x16, "P702 BEV"),
            (0x17, "U704"),
            (0x18, "P703"),
            (0x19, "V713"),
            (0x1A, "CX727 GT"),
            (0x1B, "J73"),
            (0x1C, "J74"),
            (0x1D, "P702 Police"),
            (0x1E, "P702 Raptor DTP"),
            (0x1F, "P702 KCAP"),
            (0x20, "U725 Raptor"),
            (0x21, "P703 Raptor"),
            (0x22, "P708"),
            (0x23, "S650"),
            (0x24, "V710"),
            (0x25, "CDX707"),
            (0x26, "CDX746"),
            (0x27, "CDX747"),
            (0x28, "U717"),
            (0x29, "U718"),
            (0x2A, "BX726"),
            (0x2B, "CX430"),
            (0x2C, "V769"),
            (0x2F, "P758V"),
            (0x30, "CX748"),
            (0x31, "CX482AV"),
            (0x32, "P702 MCA (ICE/FHEV)"),
            (0x33, "P702 MCA (Raptor)"),
            (0x34, "P702 MCA (BEV)"),
            (0x35, "V363 ICA"),
            (0x36, "U625 ST"),
            (0x37, "P703 SA (South Africa)"),
            (0x38, "U725 CSAT"),
        ]),
        VehicleSetting::new("Fuel Type", target, 4, 0)
            .with_mask(0b0000_1100)
            .with_values(FUEL_TYPE),
        VehicleSetting::new("GPS Mount Type", target, 4, 5)
            .with_mask(0x0F)
            .with_values(&[
                (0x0, "Roof Mount"),
                (0x1, "Intrument Panel Mount (Non-heated Windscreen)"),
                (0x2, "Intrument Panel Mount (Heated Windscreen)"),
                (0x3, "Windshield Mount (Non-heated)"),
                (0x4, "Windshield Mount (Heated)"),
            ]),
        VehicleSetting::new("Drive Type", target, 4, 6).with_values(DRIVETRAIN),
        VehicleSetting::new("Vehicle Length", target, 4, 7)
            .with_mask(0xFF_FFFF)
            .with_transform(centimetres),
        VehicleSetting::new("Vehicle Height", target, 4, 10)
            .with_mask(0xFFFF)
            .with_transform(centimetres),
        VehicleSetting::new("Front Track", target, 5, 0)
            .with_mask(0xFFFF)
            .with_transform(hundredths_of_inch),
        VehicleSetting::new("Rear Track", target, 5, 2)
            .with_mask(0xFFFF)
            .with_transform(hundredths_of_inch),
        VehicleSetting::new("Wheel Base", target, 5, 4)
            .with_mask(0xFFFF)
            .with_transform(hundredths_of_inch),
        VehicleSetting::new("Vehicle Weight", target, 6, 0).with_transform(hundreds_of_kilograms),
        VehicleSetting::new("ECO Route Curve", target, 6, 1).with_transform(plus_one),
        VehicleSetting::new("Powertrain Efficiency", target, 6, 2).with_transform(percent),
        VehicleSetting::new("Regenerative Braking Efficiency Highway", target, 6, 3).with_transform(percent),
        VehicleSetting::new("Regenerative Braking Efficiency City", target, 6, 4).with_transform(percent),
        VehicleSetting::new("Install Angle of APIM for Accelerometer X", target, 6, 5)
            .with_mask(0xFFFF)
            .with_transform(degrees),
        VehicleSetting::new("Install Angle of APIM for Accelerometer Y", target, 6, 7)
            .with_mask(0xFFFF)
            .with_transform(degrees),
        // Unscaled, unlike X and Y
        VehicleSetting::new("Install Angle of APIM for Accelerometer Z", target, 6, 9)
            .with_mask(0xFFFF)
            .with_transform(decimal),
        VehicleSetting::new("Wheel Ticks to Revolution Front", target, 6, 11).with_transform(decimal),
        VehicleSetting::new("Wheel Ticks to Revolution Rear", target, 6, 12).with_transform(decimal),
        VehicleSetting::new("Tire Circumference", target, 6, 13).with_transform(centimetres_over_one_metre_in_inches),
        VehicleSetting::new("Distance from IP to Rear Axle", target, 6, 14)
            .with_mask(0xFFFF)
            .with_transform(decimal),
        VehicleSetting::new("Steering Wheel Angle Sensor", target, 7, 0)
            .with_mask(0x40)
            .with_values(RELATIVE_ABSOLUTE),
        VehicleSetting::new("Parking Assistance", target, 7, 3).with_mask(0x0F).with_values(&[
            (0x0, "No PDC/PSCM/SAPP"),
            (0x1, "Rear PDC"),
            (0x2, "Rear/Front PDC"),
            (0x3, "Rear/Front PDC/SAPP (NA HMI)"),
            (0x4, "Rear/SAPP (NA HMI)"),
            (0x5, "Rear/Front PDC/SAPP (EU HMI)"),
            (0x6, "FAPA with RePA Adjust with APA Delux to Parking Assistance"),
            (0x7, "Rear/Front PDC with APA"),
            (0x8, "APA Lite"),
            (0x9, "12 Channel Park Aid w/o APA"),
            (0xA, "APACSI"),
            (0xB, "FAPA"),
            (0xC, "SAPP with APA Deluxe"),
            (0xD, "FAPA with APA Deluxe"),
            (0xE, "FAPA with RePA with APA Deluxe"),
        ]),
        VehicleSetting::new("ACC Menu", target, 8, 0)
            .with_mask(0x20)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Forward Collision Warning", target, 8, 2)
            .with_mask(0b0110_0000)
            .with_values(&[(0b00, "None"), (0b01, "FCW"), (0b10, "FCW + FDA")]),
        VehicleSetting::new("Forward Collision Warning Braking On/Off", target, 8, 6)
            .with_mask(0x40)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Evasive Steering Assist (ESA)", target, 8, 6)
            .with_mask(0x08)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Lane Assist Haptic Intensity", target, 8, 6)
            .with_mask(0x04)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Intelligent Adaptive Cruise Control", target, 8, 6)
            .with_mask(0x02)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Lane Change Assist", target, 8, 7)
            .with_mask(0b1100_0000)
            .with_values(LANE_CHANGE_ASSIST),
        VehicleSetting::new("Lane Keeping Sensitivity", target, 8, 7)
            .with_mask(0x20)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Adaptive Cruise", target, 8, 7)
            .with_mask(0x02)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Traffic Sign Recognition", target, 8, 9)
            .with_mask(0x08)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Lane Centering", target, 8, 19)
            .with_mask(0x20)
            .with_values(DISABLED_ENABLED),
        VehicleSetting::new("Steering Gear Ratio", target, 8, 22)
            .with_mask(0x10)
            .with_values(&[(0b0, "17:1"), (0b1, "20:1")]),
        VehicleSetting::new("Bench Setup", target, 9, 15).with_mask(0x0F).with_values(&[
            (0x0, "Vehicle"),
            (0x1, "TDK Smart Bench"),
            (0x2, "Mini Bench"),
            (0x3, "Extended Mini Bench"),
            (0x4, "Full Bench"),
            (0x5, "Breadboard"),
        ]),
        VehicleSetting::new("Assisted Lane Change", target, 15, 9)
            .with_mask(0x10)
            .with_values(DISABLED_ENABLED),
    ]
}
