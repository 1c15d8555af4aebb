use serde::{Deserialize, Serialize};

/// Supported date display patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "dd.MM.yyyy")]
    DayMonthYearDot,
    #[serde(rename = "dd-MM-yyyy")]
    DayMonthYearDash,
    #[serde(rename = "dd/MM/yyyy")]
    DayMonthYearSlash,
    #[serde(rename = "MM.dd.yyyy")]
    MonthDayYearDot,
    #[serde(rename = "MM-dd-yyyy")]
    MonthDayYearDash,
    #[serde(rename = "MM/dd/yyyy")]
    MonthDayYearSlash,
    #[serde(rename = "yyyy.MM.dd")]
    YearMonthDayDot,
    #[serde(rename = "yyyy-MM-dd")]
    YearMonthDayDash,
    #[serde(rename = "yyyy/MM/dd")]
    YearMonthDaySlash,
}

impl DateFormat {
    pub fn all() -> &'static [DateFormat] {
        &[
            Self::DayMonthYearDot,
            Self::DayMonthYearDash,
            Self::DayMonthYearSlash,
            Self::MonthDayYearDot,
            Self::MonthDayYearDash,
            Self::MonthDayYearSlash,
            Self::YearMonthDayDot,
            Self::YearMonthDayDash,
            Self::YearMonthDaySlash,
        ]
    }

    /// The pattern as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DayMonthYearDot => "dd.MM.yyyy",
            Self::DayMonthYearDash => "dd-MM-yyyy",
            Self::DayMonthYearSlash => "dd/MM/yyyy",
            Self::MonthDayYearDot => "MM.dd.yyyy",
            Self::MonthDayYearDash => "MM-dd-yyyy",
            Self::MonthDayYearSlash => "MM/dd/yyyy",
            Self::YearMonthDayDot => "yyyy.MM.dd",
            Self::YearMonthDayDash => "yyyy-MM-dd",
            Self::YearMonthDaySlash => "yyyy/MM/dd",
        }
    }

    /// Equivalent `chrono` format string.
    pub fn chrono_format(&self) -> &'static str {
        match self {
            Self::DayMonthYearDot => "%d.%m.%Y",
            Self::DayMonthYearDash => "%d-%m-%Y",
            Self::DayMonthYearSlash => "%d/%m/%Y",
            Self::MonthDayYearDot => "%m.%d.%Y",
            Self::MonthDayYearDash => "%m-%d-%Y",
            Self::MonthDayYearSlash => "%m/%d/%Y",
            Self::YearMonthDayDot => "%Y.%m.%d",
            Self::YearMonthDayDash => "%Y-%m-%d",
            Self::YearMonthDaySlash => "%Y/%m/%d",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub currency: String,
    pub date_format: DateFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "NOK".into(),
            date_format: DateFormat::default(),
        }
    }
}
