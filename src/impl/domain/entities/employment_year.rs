use super::code::serialize_as_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearType {
    Current,
    Previous,
}

impl YearType {
    pub fn code(&self) -> &'static str {
        match self {
            YearType::Current => "CURRENT",
            YearType::Previous => "PREVIOUS",
        }
    }
}

serialize_as_code!(YearType);

/// Headcount and payroll snapshot for one fiscal year.
#[derive(Debug, Clone)]
pub struct EmploymentYear {
    pub year_type: YearType,
    /// Average regular headcount; fractional because it is a yearly average.
    pub total_regular: f64,
    pub youth_count: u32,
    pub disabled_count: u32,
    pub aged_count: u32,
    pub career_break_count: u32,
    pub north_defector_count: u32,
    pub general_count: u32,
    pub excluded_count: u32,
    pub total_salary: i64,
    pub social_insurance_paid: i64,
}

impl EmploymentYear {
    /// `counts` is `[youth, disabled, aged, career_break, north_defector,
    /// general, excluded]`.
    pub const fn new(
        year_type: YearType,
        total_regular: f64,
        counts: [u32; 7],
        total_salary: i64,
        social_insurance_paid: i64,
    ) -> Self {
        let [
            youth_count,
            disabled_count,
            aged_count,
            career_break_count,
            north_defector_count,
            general_count,
            excluded_count,
        ] = counts;
        Self {
            year_type,
            total_regular,
            youth_count,
            disabled_count,
            aged_count,
            career_break_count,
            north_defector_count,
            general_count,
            excluded_count,
            total_salary,
            social_insurance_paid,
        }
    }
}
