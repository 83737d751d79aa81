//! Static field and metric catalogs
//!
//! The catalog describes every assumption field (key, label, unit, bounds,
//! step precision, default text) and every sweepable output metric. It is
//! plain configuration data; the normalizer, calculator and sweep engine
//! receive it rather than carrying presentation details themselves.

use serde::{Deserialize, Serialize};

use crate::analysis::{METRICS, MetricId, MetricSpec};

/// Input form section a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    InterceptorPerformance,
    ThreatParameters,
    CostParameters,
    LaunchParameters,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::InterceptorPerformance,
        Section::ThreatParameters,
        Section::CostParameters,
        Section::LaunchParameters,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::InterceptorPerformance => "Interceptor performance",
            Section::ThreatParameters => "Threat parameters",
            Section::CostParameters => "Interceptor cost parameters (in constant dollars)",
            Section::LaunchParameters => "Launch vehicle parameters",
        }
    }
}

/// Identifier for one assumption field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    SbiOrbitAltitudeKm,
    AverageAccelerationG,
    MaxDeltaVKmPerS,
    DivertVelocityKmPerS,
    ThrusterIspSeconds,
    KillVehicleDryMassKg,
    InterceptorBodyDryMassKg,
    SupportModuleDryMassKg,
    SbiLifeExpectancyYears,
    KillProbabilityPercent,
    CompositeKillProbabilityPercent,
    SalvoSize,
    InterceptAltitudeKm,
    MaxLatitudeCoverageDeg,
    FlyoutTimeSeconds,
    NonRecurringDevCostMillion,
    FirstUnitInterceptorCostMillion,
    InterceptorLearningPercent,
    OperatingSupportCostPerYearMillion,
    CostEstimatePeriodYears,
    PayloadCapacityPerVehicleKg,
    FirstUnitLaunchCostMillion,
    LaunchLearningPercent,
}

impl Field {
    /// All fields in catalog (form) order
    pub const ALL: [Field; 23] = [
        Field::SbiOrbitAltitudeKm,
        Field::AverageAccelerationG,
        Field::MaxDeltaVKmPerS,
        Field::DivertVelocityKmPerS,
        Field::ThrusterIspSeconds,
        Field::KillVehicleDryMassKg,
        Field::InterceptorBodyDryMassKg,
        Field::SupportModuleDryMassKg,
        Field::SbiLifeExpectancyYears,
        Field::KillProbabilityPercent,
        Field::CompositeKillProbabilityPercent,
        Field::SalvoSize,
        Field::InterceptAltitudeKm,
        Field::MaxLatitudeCoverageDeg,
        Field::FlyoutTimeSeconds,
        Field::NonRecurringDevCostMillion,
        Field::FirstUnitInterceptorCostMillion,
        Field::InterceptorLearningPercent,
        Field::OperatingSupportCostPerYearMillion,
        Field::CostEstimatePeriodYears,
        Field::PayloadCapacityPerVehicleKg,
        Field::FirstUnitLaunchCostMillion,
        Field::LaunchLearningPercent,
    ];

    /// Stable camelCase key used by persistence and raw input maps
    #[must_use]
    pub fn key(self) -> &'static str {
        self.spec().key
    }

    /// Look up a field by its persistence key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Field> {
        FIELDS.iter().find(|spec| spec.key == key).map(|spec| spec.field)
    }

    /// Catalog entry for this field
    #[must_use]
    pub fn spec(self) -> &'static FieldSpec {
        // FIELDS is declared in the same order as `Field::ALL`
        &FIELDS[self as usize]
    }
}

/// Catalog entry describing one assumption field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub field: Field,
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    /// Shown before the value in forms (e.g. `$`)
    pub prefix: Option<&'static str>,
    pub section: Section,
    pub default_value: &'static str,
    /// Inclusive lower bound for sweep ranges
    pub min: Option<f64>,
    /// Inclusive upper bound for sweep ranges
    pub max: Option<f64>,
    /// Step text; its fractional digits define the field precision
    pub step: &'static str,
    pub hint: &'static str,
}

impl FieldSpec {
    /// Numeric step size, falling back to 1 when the step text is unusable
    #[must_use]
    pub fn step_value(&self) -> f64 {
        match self.step.parse::<f64>() {
            Ok(step) if step.is_finite() && step > 0.0 => step,
            _ => 1.0,
        }
    }

    /// Number of decimal places implied by the step text
    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.step
            .find('.')
            .map_or(0, |point| (self.step.len() - point - 1) as u32)
    }

    /// Label with the unit appended, for axis titles and export headers
    #[must_use]
    pub fn label_with_unit(&self) -> String {
        if self.unit.is_empty() {
            self.label.to_string()
        } else {
            format!("{} ({})", self.label, self.unit)
        }
    }

    /// Round a value to this field's declared precision
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals() as i32);
        (value * scale).round() / scale
    }
}

/// Field and metric tables handed to the normalizer and sweep engine
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    fields: &'static [FieldSpec],
    metrics: &'static [MetricSpec],
}

impl Catalog {
    /// The standard interceptor catalog
    #[must_use]
    pub fn standard() -> Self {
        Self {
            fields: &FIELDS,
            metrics: &METRICS,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Find a field by its key
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.key == key)
    }

    /// Find a metric entry by id
    #[must_use]
    pub fn metric(&self, id: MetricId) -> Option<&'static MetricSpec> {
        self.metrics.iter().find(|spec| spec.id == id)
    }

    /// Fields belonging to one form section, in catalog order
    pub fn section_fields(&self, section: Section) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(move |spec| spec.section == section)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// The standard field table, in `Field::ALL` order
pub static FIELDS: [FieldSpec; 23] = [
    FieldSpec {
        field: Field::SbiOrbitAltitudeKm,
        key: "sbiOrbitAltitudeKm",
        label: "SBI orbit altitude",
        unit: "km",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "300",
        min: Some(150.0),
        max: Some(22500.0),
        step: "1",
        hint: "Orbital altitude at which SBIs will be stationed.",
    },
    FieldSpec {
        field: Field::AverageAccelerationG,
        key: "averageAccelerationG",
        label: "Average acceleration",
        unit: "g",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "15.0",
        min: Some(1.0),
        max: Some(30.0),
        step: "0.1",
        hint: "Average acceleration of the interceptor over its flight profile.",
    },
    FieldSpec {
        field: Field::MaxDeltaVKmPerS,
        key: "maxDeltaVKmPerS",
        label: "Max velocity (ΔV)",
        unit: "km/s",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "6.0",
        min: Some(0.1),
        max: Some(20.0),
        step: "0.1",
        hint: "Maximum change in velocity of the interceptor.",
    },
    FieldSpec {
        field: Field::DivertVelocityKmPerS,
        key: "divertVelocityKmPerS",
        label: "Divert velocity",
        unit: "km/s",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "2.5",
        min: Some(0.0),
        max: Some(10.0),
        step: "0.1",
        hint: "Divert velocity of the kill vehicle for terminal maneuvers.",
    },
    FieldSpec {
        field: Field::ThrusterIspSeconds,
        key: "thrusterIspSeconds",
        label: "Thruster performance (Isp)",
        unit: "s",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "240",
        min: Some(100.0),
        max: Some(1000.0),
        step: "1",
        hint: "Specific impulse for the interceptor and kill vehicle thrusters.",
    },
    FieldSpec {
        field: Field::KillVehicleDryMassKg,
        key: "killVehicleDryMassKg",
        label: "Kill vehicle dry mass",
        unit: "kg",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "25.0",
        min: Some(1.0),
        max: None,
        step: "0.1",
        hint: "Mass of the kill vehicle (structure, sensors, thrusters, avionics) without propellant.",
    },
    FieldSpec {
        field: Field::InterceptorBodyDryMassKg,
        key: "interceptorBodyDryMassKg",
        label: "Interceptor body dry mass",
        unit: "kg",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "25.0",
        min: Some(1.0),
        max: None,
        step: "0.1",
        hint: "Mass of the interceptor body without the kill vehicle or propellant.",
    },
    FieldSpec {
        field: Field::SupportModuleDryMassKg,
        key: "supportModuleDryMassKg",
        label: "Support module dry mass",
        unit: "kg",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "50.0",
        min: Some(1.0),
        max: None,
        step: "0.1",
        hint: "Per-interceptor share of the on-orbit module providing power, communications and station keeping; left behind when the interceptor fires.",
    },
    FieldSpec {
        field: Field::SbiLifeExpectancyYears,
        key: "sbiLifeExpectancyYears",
        label: "SBI life expectancy",
        unit: "years",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "5",
        min: Some(1.0),
        max: Some(20.0),
        step: "1",
        hint: "How long each interceptor is expected to last in orbit before replacement.",
    },
    FieldSpec {
        field: Field::KillProbabilityPercent,
        key: "killProbabilityPercent",
        label: "Kill probability (Pk)",
        unit: "%",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "80.0",
        min: Some(1.0),
        max: Some(99.9),
        step: "0.1",
        hint: "Probability that a single interceptor will destroy its target.",
    },
    FieldSpec {
        field: Field::CompositeKillProbabilityPercent,
        key: "compositeKillProbabilityPercent",
        label: "Composite kill probability",
        unit: "%",
        prefix: None,
        section: Section::InterceptorPerformance,
        default_value: "96.0",
        min: Some(1.0),
        max: Some(99.9),
        step: "0.1",
        hint: "Desired overall probability that each threat is destroyed; sets how many interceptors are fired per threat.",
    },
    FieldSpec {
        field: Field::SalvoSize,
        key: "salvoSize",
        label: "Salvo size",
        unit: "missiles",
        prefix: None,
        section: Section::ThreatParameters,
        default_value: "1",
        min: Some(1.0),
        max: Some(1000.0),
        step: "1",
        hint: "Maximum number of missiles launched at once that the system should be able to intercept.",
    },
    FieldSpec {
        field: Field::InterceptAltitudeKm,
        key: "interceptAltitudeKm",
        label: "Intercept altitude",
        unit: "km",
        prefix: None,
        section: Section::ThreatParameters,
        default_value: "200",
        min: Some(50.0),
        max: Some(10000.0),
        step: "5",
        hint: "Minimum altitude at which threats will be engaged. Below 100 km the kill vehicle needs extra mass for re-entry.",
    },
    FieldSpec {
        field: Field::MaxLatitudeCoverageDeg,
        key: "maxLatitudeCoverageDeg",
        label: "Max latitude coverage",
        unit: "deg",
        prefix: None,
        section: Section::ThreatParameters,
        default_value: "90",
        min: Some(1.0),
        max: Some(90.0),
        step: "1",
        hint: "Maximum latitude where SBIs provide coverage. Use 90 degrees for global coverage.",
    },
    FieldSpec {
        field: Field::FlyoutTimeSeconds,
        key: "flyoutTimeSeconds",
        label: "Flyout time",
        unit: "s",
        prefix: None,
        section: Section::ThreatParameters,
        default_value: "120.0",
        min: Some(10.0),
        max: Some(1800.0),
        step: "1",
        hint: "Time between the fire command and the latest point at which the interceptor can hit a target.",
    },
    FieldSpec {
        field: Field::NonRecurringDevCostMillion,
        key: "nonRecurringDevCostMillion",
        label: "Non-recurring development",
        unit: "million USD",
        prefix: Some("$"),
        section: Section::CostParameters,
        default_value: "7000",
        min: Some(0.0),
        max: None,
        step: "1",
        hint: "Total non-recurring research, development, and integration cost.",
    },
    FieldSpec {
        field: Field::FirstUnitInterceptorCostMillion,
        key: "firstUnitInterceptorCostMillion",
        label: "First unit interceptor cost",
        unit: "million USD",
        prefix: Some("$"),
        section: Section::CostParameters,
        default_value: "70.0",
        min: Some(1.0),
        max: None,
        step: "0.1",
        hint: "Unit cost of the first interceptor produced.",
    },
    FieldSpec {
        field: Field::InterceptorLearningPercent,
        key: "interceptorLearningPercent",
        label: "Interceptor learning percent",
        unit: "%",
        prefix: None,
        section: Section::CostParameters,
        default_value: "85.0",
        min: Some(70.0),
        max: Some(100.0),
        step: "0.1",
        hint: "Each time the quantity doubles, unit cost falls to this percentage of its previous value.",
    },
    FieldSpec {
        field: Field::OperatingSupportCostPerYearMillion,
        key: "operatingSupportCostPerYearMillion",
        label: "Operating & support cost per year",
        unit: "million USD",
        prefix: Some("$"),
        section: Section::CostParameters,
        default_value: "450",
        min: Some(0.0),
        max: None,
        step: "1",
        hint: "Yearly cost to operate the system, including personnel, training and facilities.",
    },
    FieldSpec {
        field: Field::CostEstimatePeriodYears,
        key: "costEstimatePeriodYears",
        label: "Period of cost estimate",
        unit: "years",
        prefix: None,
        section: Section::CostParameters,
        default_value: "20",
        min: Some(1.0),
        max: Some(100.0),
        step: "1",
        hint: "The total number of years assessed in the cost estimate.",
    },
    FieldSpec {
        field: Field::PayloadCapacityPerVehicleKg,
        key: "payloadCapacityPerVehicleKg",
        label: "Payload capacity per vehicle",
        unit: "kg",
        prefix: None,
        section: Section::LaunchParameters,
        default_value: "45000",
        min: Some(15000.0),
        max: Some(300000.0),
        step: "100",
        hint: "Lift capability of the selected launch vehicle.",
    },
    FieldSpec {
        field: Field::FirstUnitLaunchCostMillion,
        key: "firstUnitLaunchCostMillion",
        label: "First unit launch cost",
        unit: "million USD",
        prefix: Some("$"),
        section: Section::LaunchParameters,
        default_value: "150.0",
        min: Some(1.0),
        max: None,
        step: "0.1",
        hint: "Initial cost per launch.",
    },
    FieldSpec {
        field: Field::LaunchLearningPercent,
        key: "launchLearningPercent",
        label: "Launch learning percent",
        unit: "%",
        prefix: None,
        section: Section::LaunchParameters,
        default_value: "95",
        min: Some(70.0),
        max: Some(100.0),
        step: "0.1",
        hint: "Each time the number of launches doubles, cost per launch falls to this percentage.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_table_matches_enum_order() {
        for (index, field) in Field::ALL.iter().enumerate() {
            assert_eq!(FIELDS[index].field, *field);
            assert_eq!(field.spec().field, *field);
        }
    }

    #[test]
    fn test_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("notAField"), None);
    }

    #[test]
    fn test_decimals_follow_step_text() {
        assert_eq!(Field::MaxDeltaVKmPerS.spec().decimals(), 1);
        assert_eq!(Field::SalvoSize.spec().decimals(), 0);
        assert_eq!(Field::PayloadCapacityPerVehicleKg.spec().decimals(), 0);
        assert_eq!(Field::PayloadCapacityPerVehicleKg.spec().step_value(), 100.0);
        assert_eq!(Field::InterceptAltitudeKm.spec().step_value(), 5.0);
    }

    #[test]
    fn test_quantize_rounds_to_precision() {
        let spec = Field::AverageAccelerationG.spec();
        assert_eq!(spec.quantize(15.04), 15.0);
        assert_eq!(spec.quantize(15.06), 15.1);
    }

    #[test]
    fn test_every_section_has_fields() {
        let catalog = Catalog::standard();
        for section in Section::ALL {
            assert!(catalog.section_fields(section).count() > 0);
        }
        assert_eq!(catalog.fields().len(), Field::ALL.len());
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.field("maxDeltaVKmPerS").map(|spec| spec.field),
            Some(Field::MaxDeltaVKmPerS)
        );
        assert!(catalog.field("bogus").is_none());
        assert!(catalog.metric(MetricId::LaunchCount).is_some());
    }
}
