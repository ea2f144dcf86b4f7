//! Static field schema for the prediction form.
//!
//! Every form instance shares the same immutable table of `FieldSpec`s;
//! the render pass iterates it instead of branching on field names.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

/// The fixed set of automobile attributes the prediction service expects.
///
/// Variants are listed in the column order of the service's model. The
/// discriminant doubles as the index into the spec table, so `ALL` must
/// stay in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Brand,
    Type,
    RegYear,
    RegMonth,
    DaysSinceRegistration,
    CoeLeft,
    Depreciation,
    Mileage,
    RoadTax,
    DeregValue,
    Coe,
    EngineCapacity,
    CurbWeight,
    Manufactured,
    Transmission,
    Omv,
    Arf,
    Power,
    NumberOfOwners,
}

impl FieldKey {
    pub const ALL: [FieldKey; 19] = [
        FieldKey::Brand,
        FieldKey::Type,
        FieldKey::RegYear,
        FieldKey::RegMonth,
        FieldKey::DaysSinceRegistration,
        FieldKey::CoeLeft,
        FieldKey::Depreciation,
        FieldKey::Mileage,
        FieldKey::RoadTax,
        FieldKey::DeregValue,
        FieldKey::Coe,
        FieldKey::EngineCapacity,
        FieldKey::CurbWeight,
        FieldKey::Manufactured,
        FieldKey::Transmission,
        FieldKey::Omv,
        FieldKey::Arf,
        FieldKey::Power,
        FieldKey::NumberOfOwners,
    ];

    /// Wire name: the JSON key the prediction service expects.
    pub fn as_str(self) -> &'static str {
        field_spec(self).name
    }
}

/// How a field's raw text is interpreted and validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueKind {
    /// Any non-empty string.
    FreeText,
    /// Integer within an inclusive `[min, max]` range.
    BoundedInt { min: i64, max: i64 },
    /// One of a fixed option list; valid whenever non-empty.
    Choice(&'static [&'static str]),
}

/// Static per-field descriptor: wire name, display label, help text,
/// session-start default, and value kind.
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub default: &'static str,
    pub kind: ValueKind,
}

pub const CAR_TYPES: &[&str] = &[
    "Luxury Sedan",
    "SUV",
    "Hatchback",
    "Mid-Sized Sedan",
    "Sports Car",
    "MPV",
    "Van",
    "Bus/Mini Bus",
    "Truck",
    "Stationwagon",
    "Others",
];

pub const TRANSMISSIONS: &[&str] = &["Automatic", "Manual"];

pub const OWNER_COUNTS: &[&str] = &["1", "2", "3", "4", "5", "6"];

pub fn field_spec(key: FieldKey) -> &'static FieldSpec {
    &SPECS[key as usize]
}

// One entry per FieldKey variant, declaration order.
static SPECS: [FieldSpec; FieldKey::ALL.len()] = [
    FieldSpec {
        name: "Brand",
        label: "Brand",
        help: "The make or brand of the car, such as Toyota, Honda, BMW, etc.",
        default: "Toyota",
        kind: ValueKind::FreeText,
    },
    FieldSpec {
        name: "Type",
        label: "Type",
        help: "The model or variant of the car, e.g., Sedan, SUV, Coupe, etc.",
        default: "Mid-Sized Sedan",
        kind: ValueKind::Choice(CAR_TYPES),
    },
    FieldSpec {
        name: "Reg_year",
        label: "Reg Year",
        help: "The year the car was first registered in Singapore, which may affect COE and road tax.",
        default: "2020",
        kind: ValueKind::BoundedInt { min: 1969, max: 2022 },
    },
    FieldSpec {
        name: "Reg_month",
        label: "Reg Month",
        help: "The month the car was first registered in Singapore, contributing to the remaining COE period.",
        default: "5",
        kind: ValueKind::BoundedInt { min: 1, max: 12 },
    },
    FieldSpec {
        name: "Days_since_registration",
        label: "Days Since Registration",
        help: "The total number of days that have passed since the car was first registered in Singapore.",
        default: "1000",
        kind: ValueKind::BoundedInt { min: 0, max: 20_000 },
    },
    FieldSpec {
        name: "Coe_left",
        label: "Coe Left",
        help: "The remaining duration of the car's COE (Certificate of Entitlement), which is required for all cars in Singapore.",
        default: "24",
        kind: ValueKind::BoundedInt { min: 0, max: 120 },
    },
    FieldSpec {
        name: "Depreciation",
        label: "Depreciation",
        help: "The estimated depreciation in the car's value over the last year, influenced by factors such as age and mileage.",
        default: "1000",
        kind: ValueKind::BoundedInt { min: 0, max: 200_000 },
    },
    FieldSpec {
        name: "Mileage",
        label: "Mileage",
        help: "The total distance driven by the car, measured in kilometers, which is an important factor for determining wear and tear.",
        default: "30000",
        kind: ValueKind::BoundedInt { min: 0, max: 1_000_000 },
    },
    FieldSpec {
        name: "Road_Tax",
        label: "Road Tax",
        help: "The annual road tax payable for the car, calculated based on its engine capacity and other factors.",
        default: "500",
        kind: ValueKind::BoundedInt { min: 0, max: 20_000 },
    },
    FieldSpec {
        name: "Dereg_Value",
        label: "Dereg Value",
        help: "The estimated value of the car when it is de-registered, based on factors such as age and COE rebate.",
        default: "25000",
        kind: ValueKind::BoundedInt { min: 0, max: 500_000 },
    },
    FieldSpec {
        name: "COE",
        label: "COE",
        help: "The COE (Certificate of Entitlement) price, which allows the owner to use the car for a set period.",
        default: "30000",
        kind: ValueKind::BoundedInt { min: 0, max: 200_000 },
    },
    FieldSpec {
        name: "Engine_Capacity",
        label: "Engine Capacity",
        help: "The car's engine size, measured in cubic centimeters (cc), which affects road tax rates and COE eligibility.",
        default: "2000",
        kind: ValueKind::BoundedInt { min: 0, max: 10_000 },
    },
    FieldSpec {
        name: "Curb_Weight",
        label: "Curb Weight",
        help: "The weight of the car in its unladen state, which affects fuel efficiency and road tax.",
        default: "1500",
        kind: ValueKind::BoundedInt { min: 500, max: 5_000 },
    },
    FieldSpec {
        name: "Manufactured",
        label: "Manufactured",
        help: "The year the car was manufactured, which helps determine the car's age and potential depreciation.",
        default: "2019",
        kind: ValueKind::BoundedInt { min: 1960, max: 2022 },
    },
    FieldSpec {
        name: "Transmission",
        label: "Transmission",
        help: "The type of transmission system in the car, such as Automatic or Manual.",
        default: "Automatic",
        kind: ValueKind::Choice(TRANSMISSIONS),
    },
    FieldSpec {
        name: "OMV",
        label: "OMV",
        help: "The Open Market Value (OMV) of the car, which is the amount the car is valued at when it enters Singapore.",
        default: "35000",
        kind: ValueKind::BoundedInt { min: 0, max: 1_000_000 },
    },
    FieldSpec {
        name: "ARF",
        label: "ARF",
        help: "The Additional Registration Fee (ARF) paid when registering a car in Singapore, based on the OMV of the car.",
        default: "10000",
        kind: ValueKind::BoundedInt { min: 0, max: 1_000_000 },
    },
    FieldSpec {
        name: "Power",
        label: "Power",
        help: "The car's engine power, typically measured in horsepower (hp), which can impact performance and road tax.",
        default: "150",
        kind: ValueKind::BoundedInt { min: 0, max: 1_500 },
    },
    FieldSpec {
        name: "Number_of_Owners",
        label: "Number Of Owners",
        help: "The number of previous owners of the car, which can affect the car's value and perceived condition.",
        default: "1",
        kind: ValueKind::Choice(OWNER_COUNTS),
    },
];
