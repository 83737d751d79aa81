use std::fmt;

use crate::catalog::Field;

/// One violated input rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Field must be strictly greater than zero
    NotPositive(Field),
    /// Field must be zero or greater
    Negative(Field),
    /// Field did not parse to a finite number
    NotANumber(Field),
    /// Field is a number but outside its permitted band
    OutOfRange(Field),
    DivertExceedsDeltaV,
    InterceptBelowMinimum,
    InterceptAboveOrbit,
}

impl ValidationError {
    /// The field the message is reported against
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NotPositive(field)
            | ValidationError::Negative(field)
            | ValidationError::NotANumber(field)
            | ValidationError::OutOfRange(field) => *field,
            ValidationError::DivertExceedsDeltaV => Field::DivertVelocityKmPerS,
            ValidationError::InterceptBelowMinimum | ValidationError::InterceptAboveOrbit => {
                Field::InterceptAltitudeKm
            }
        }
    }
}

/// Sentence subject used in validation messages
fn subject(field: Field) -> &'static str {
    match field {
        Field::SbiOrbitAltitudeKm => "SBI orbit altitude",
        Field::AverageAccelerationG => "Average acceleration",
        Field::MaxDeltaVKmPerS => "Max velocity (ΔV)",
        Field::DivertVelocityKmPerS => "Divert velocity",
        Field::ThrusterIspSeconds => "Thruster performance (Isp)",
        Field::KillVehicleDryMassKg => "Kill vehicle dry mass",
        Field::InterceptorBodyDryMassKg => "Interceptor body dry mass",
        Field::SupportModuleDryMassKg => "Support module dry mass",
        Field::SbiLifeExpectancyYears => "SBI life expectancy",
        Field::KillProbabilityPercent => "Kill probability",
        Field::CompositeKillProbabilityPercent => "Composite kill probability",
        Field::SalvoSize => "Salvo size",
        Field::InterceptAltitudeKm => "Intercept altitude",
        Field::MaxLatitudeCoverageDeg => "Max latitude coverage",
        Field::FlyoutTimeSeconds => "Flyout time",
        Field::NonRecurringDevCostMillion => "Non-recurring development cost",
        Field::FirstUnitInterceptorCostMillion => "First unit interceptor cost",
        Field::InterceptorLearningPercent => "Interceptor learning percent",
        Field::OperatingSupportCostPerYearMillion => "Operating and support cost",
        Field::CostEstimatePeriodYears => "Cost estimate period",
        Field::PayloadCapacityPerVehicleKg => "Payload capacity per vehicle",
        Field::FirstUnitLaunchCostMillion => "First unit launch cost",
        Field::LaunchLearningPercent => "Launch learning percent",
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotPositive(Field::SalvoSize) => {
                write!(f, "Salvo size must be at least one missile.")
            }
            ValidationError::NotPositive(field) => {
                write!(f, "{} must be greater than zero.", subject(*field))
            }
            ValidationError::Negative(field) => {
                write!(f, "{} must be zero or greater.", subject(*field))
            }
            ValidationError::NotANumber(field) => write!(f, "{} must be a number.", subject(*field)),
            ValidationError::OutOfRange(field) => match field {
                Field::MaxLatitudeCoverageDeg => {
                    write!(f, "Max latitude coverage must be between 0 and 90 degrees.")
                }
                Field::InterceptorLearningPercent | Field::LaunchLearningPercent => {
                    write!(f, "{} must be between 70% and 100%.", subject(*field))
                }
                _ => write!(f, "{} must be between 0% and 100%.", subject(*field)),
            },
            ValidationError::DivertExceedsDeltaV => {
                write!(f, "Divert velocity cannot exceed the total ΔV budget.")
            }
            ValidationError::InterceptBelowMinimum => {
                write!(f, "Intercept altitude must be at least 50km.")
            }
            ValidationError::InterceptAboveOrbit => {
                write!(f, "Intercept altitude cannot exceed the SBI orbit altitude.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every rule an input set violated, in check order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Whether any rule fired for `field`
    #[must_use]
    pub fn mentions(&self, field: Field) -> bool {
        self.0.iter().any(|error| error.field() == field)
    }

    /// User-facing messages in check order
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Terminal reasons a sweep cannot produce a chart
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    UnknownField(String),
    NonNumericRange,
    InvertedRange,
    StartBelowMinimum { min: f64 },
    EndAboveMaximum { max: f64 },
    MissingBaseline,
    /// Requested step count exceeds the step cap
    StepCap { steps: i64, cap: i64 },
    /// Projected point count exceeds the point cap
    PointCap { points: i64, cap: i64 },
    NoValidPoints,
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::UnknownField(_) => {
                write!(f, "Select a valid input field for the horizontal axis.")
            }
            SweepError::NonNumericRange => write!(f, "Enter numeric values for the sweep range."),
            SweepError::InvertedRange => {
                write!(f, "Range start must be less than or equal to the end value.")
            }
            SweepError::StartBelowMinimum { min } => write!(f, "Start value must be at least {min}."),
            SweepError::EndAboveMaximum { max } => write!(f, "End value must be no more than {max}."),
            SweepError::MissingBaseline => {
                write!(f, "Run the scenario to populate baseline assumptions.")
            }
            SweepError::StepCap { steps, cap } => write!(
                f,
                "Limit the sweep to {cap} steps or fewer (current range: {steps})."
            ),
            SweepError::PointCap { points, cap } => write!(
                f,
                "This range would generate {points} data points. Narrow the range to keep it under {cap}."
            ),
            SweepError::NoValidPoints => {
                write!(f, "No valid data points were produced for this range.")
            }
        }
    }
}

impl std::error::Error for SweepError {}
